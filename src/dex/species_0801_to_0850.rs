use crate::{
    AbilitySlots,
    Color,
    Gender,
    Id,
    SpeciesData,
    StatTable,
    Type,
    dex::SpeciesTable,
};

/// Species numbered 801 to 850.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("magearna"),
            SpeciesData {
                name: "Magearna".to_owned(),
                num: 801,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 95,
                    def: 115,
                    spa: 130,
                    spd: 115,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soulheart")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 80.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("magearnaoriginal"),
            SpeciesData {
                name: "Magearna-Original".to_owned(),
                num: 801,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 95,
                    def: 115,
                    spa: 130,
                    spd: 115,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soulheart")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 80.5,
                color: Color::Red,
                base_species: Some(Id::from_known("magearna")),
                forme: Some("Original".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("marshadow"),
            SpeciesData {
                name: "Marshadow".to_owned(),
                num: 802,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 125,
                    def: 80,
                    spa: 90,
                    spd: 90,
                    spe: 125,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 22.2,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("poipole"),
            SpeciesData {
                name: "Poipole".to_owned(),
                num: 803,
                primary_type: Type::Poison,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 67,
                    atk: 73,
                    def: 67,
                    spa: 73,
                    spd: 67,
                    spe: 73,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 1.8,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("naganadel"),
            SpeciesData {
                name: "Naganadel".to_owned(),
                num: 804,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 73,
                    atk: 73,
                    def: 73,
                    spa: 127,
                    spd: 73,
                    spe: 121,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 3.6,
                weight_kg: 150.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("stakataka"),
            SpeciesData {
                name: "Stakataka".to_owned(),
                num: 805,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 61,
                    atk: 131,
                    def: 211,
                    spa: 53,
                    spd: 101,
                    spe: 13,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 5.5,
                weight_kg: 820.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blacephalon"),
            SpeciesData {
                name: "Blacephalon".to_owned(),
                num: 806,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 53,
                    atk: 127,
                    def: 53,
                    spa: 151,
                    spd: 79,
                    spe: 107,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 13.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zeraora"),
            SpeciesData {
                name: "Zeraora".to_owned(),
                num: 807,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 88,
                    atk: 112,
                    def: 75,
                    spa: 102,
                    spd: 80,
                    spe: 143,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 44.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("meltan"),
            SpeciesData {
                name: "Meltan".to_owned(),
                num: 808,
                primary_type: Type::Steel,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 46,
                    atk: 65,
                    def: 65,
                    spa: 55,
                    spd: 35,
                    spe: 34,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 8.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("melmetal"),
            SpeciesData {
                name: "Melmetal".to_owned(),
                num: 809,
                primary_type: Type::Steel,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 135,
                    atk: 143,
                    def: 143,
                    spa: 80,
                    spd: 65,
                    spe: 34,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironfist")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 800.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grookey"),
            SpeciesData {
                name: "Grookey".to_owned(),
                num: 810,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 50,
                    spa: 40,
                    spd: 40,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("grassysurge")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 5.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("thwackey"),
            SpeciesData {
                name: "Thwackey".to_owned(),
                num: 811,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 70,
                    spa: 55,
                    spd: 60,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("grassysurge")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 14.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rillaboom"),
            SpeciesData {
                name: "Rillaboom".to_owned(),
                num: 812,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 100,
                    atk: 125,
                    def: 90,
                    spa: 60,
                    spd: 70,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("grassysurge")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 90.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("scorbunny"),
            SpeciesData {
                name: "Scorbunny".to_owned(),
                num: 813,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 50,
                    atk: 71,
                    def: 40,
                    spa: 40,
                    spd: 40,
                    spe: 69,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("libero")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 4.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("raboot"),
            SpeciesData {
                name: "Raboot".to_owned(),
                num: 814,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 86,
                    def: 60,
                    spa: 55,
                    spd: 60,
                    spe: 94,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("libero")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 9.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cinderace"),
            SpeciesData {
                name: "Cinderace".to_owned(),
                num: 815,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 80,
                    atk: 116,
                    def: 75,
                    spa: 65,
                    spd: 75,
                    spe: 119,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("libero")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 33.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sobble"),
            SpeciesData {
                name: "Sobble".to_owned(),
                num: 816,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 40,
                    def: 40,
                    spa: 70,
                    spd: 40,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 4.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drizzile"),
            SpeciesData {
                name: "Drizzile".to_owned(),
                num: 817,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 55,
                    spa: 95,
                    spd: 55,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 11.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("inteleon"),
            SpeciesData {
                name: "Inteleon".to_owned(),
                num: 818,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 65,
                    spa: 125,
                    spd: 65,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 45.2,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("skwovet"),
            SpeciesData {
                name: "Skwovet".to_owned(),
                num: 819,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 70,
                    atk: 55,
                    def: 55,
                    spa: 35,
                    spd: 35,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("greedent"),
            SpeciesData {
                name: "Greedent".to_owned(),
                num: 820,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 120,
                    atk: 95,
                    def: 95,
                    spa: 55,
                    spd: 75,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 6.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rookidee"),
            SpeciesData {
                name: "Rookidee".to_owned(),
                num: 821,
                primary_type: Type::Flying,
                base_stats: StatTable {
                    hp: 38,
                    atk: 47,
                    def: 35,
                    spa: 33,
                    spd: 35,
                    spe: 57,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("bigpecks")),
                },
                height_m: 0.2,
                weight_kg: 1.8,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("corvisquire"),
            SpeciesData {
                name: "Corvisquire".to_owned(),
                num: 822,
                primary_type: Type::Flying,
                base_stats: StatTable {
                    hp: 68,
                    atk: 67,
                    def: 55,
                    spa: 43,
                    spd: 55,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("bigpecks")),
                },
                height_m: 0.8,
                weight_kg: 16.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("corviknight"),
            SpeciesData {
                name: "Corviknight".to_owned(),
                num: 823,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 98,
                    atk: 87,
                    def: 105,
                    spa: 53,
                    spd: 85,
                    spe: 67,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("mirrorarmor")),
                },
                height_m: 2.2,
                weight_kg: 75.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blipbug"),
            SpeciesData {
                name: "Blipbug".to_owned(),
                num: 824,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 25,
                    atk: 20,
                    def: 20,
                    spa: 25,
                    spd: 45,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.4,
                weight_kg: 8.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dottler"),
            SpeciesData {
                name: "Dottler".to_owned(),
                num: 825,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 50,
                    atk: 35,
                    def: 80,
                    spa: 50,
                    spd: 90,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.4,
                weight_kg: 19.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("orbeetle"),
            SpeciesData {
                name: "Orbeetle".to_owned(),
                num: 826,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 60,
                    atk: 45,
                    def: 110,
                    spa: 80,
                    spd: 120,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.4,
                weight_kg: 40.8,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nickit"),
            SpeciesData {
                name: "Nickit".to_owned(),
                num: 827,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 40,
                    atk: 28,
                    def: 28,
                    spa: 47,
                    spd: 52,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("stakeout")),
                },
                height_m: 0.6,
                weight_kg: 8.9,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("thievul"),
            SpeciesData {
                name: "Thievul".to_owned(),
                num: 828,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 70,
                    atk: 58,
                    def: 58,
                    spa: 87,
                    spd: 92,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("stakeout")),
                },
                height_m: 1.2,
                weight_kg: 19.9,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gossifleur"),
            SpeciesData {
                name: "Gossifleur".to_owned(),
                num: 829,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 60,
                    spa: 40,
                    spd: 60,
                    spe: 10,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cottondown")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("effectspore")),
                },
                height_m: 0.4,
                weight_kg: 2.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eldegoss"),
            SpeciesData {
                name: "Eldegoss".to_owned(),
                num: 830,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 90,
                    spa: 80,
                    spd: 120,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cottondown")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("effectspore")),
                },
                height_m: 0.5,
                weight_kg: 2.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wooloo"),
            SpeciesData {
                name: "Wooloo".to_owned(),
                num: 831,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 42,
                    atk: 40,
                    def: 55,
                    spa: 40,
                    spd: 45,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fluffy")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("bulletproof")),
                },
                height_m: 0.6,
                weight_kg: 6.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dubwool"),
            SpeciesData {
                name: "Dubwool".to_owned(),
                num: 832,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 72,
                    atk: 80,
                    def: 100,
                    spa: 60,
                    spd: 90,
                    spe: 88,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fluffy")),
                    secondary: Some(Id::from_known("steadfast")),
                    hidden: Some(Id::from_known("bulletproof")),
                },
                height_m: 1.3,
                weight_kg: 43.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("chewtle"),
            SpeciesData {
                name: "Chewtle".to_owned(),
                num: 833,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 64,
                    def: 50,
                    spa: 38,
                    spd: 38,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 0.3,
                weight_kg: 8.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drednaw"),
            SpeciesData {
                name: "Drednaw".to_owned(),
                num: 834,
                primary_type: Type::Water,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 90,
                    atk: 115,
                    def: 90,
                    spa: 48,
                    spd: 68,
                    spe: 74,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 1.0,
                weight_kg: 115.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("yamper"),
            SpeciesData {
                name: "Yamper".to_owned(),
                num: 835,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 59,
                    atk: 45,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 26,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ballfetch")),
                    hidden: Some(Id::from_known("rattled")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 13.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("boltund"),
            SpeciesData {
                name: "Boltund".to_owned(),
                num: 836,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 69,
                    atk: 90,
                    def: 60,
                    spa: 90,
                    spd: 60,
                    spe: 121,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("competitive")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 34.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rolycoly"),
            SpeciesData {
                name: "Rolycoly".to_owned(),
                num: 837,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 30,
                    atk: 40,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steamengine")),
                    secondary: Some(Id::from_known("heatproof")),
                    hidden: Some(Id::from_known("flashfire")),
                },
                height_m: 0.3,
                weight_kg: 12.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("carkol"),
            SpeciesData {
                name: "Carkol".to_owned(),
                num: 838,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 80,
                    atk: 60,
                    def: 90,
                    spa: 60,
                    spd: 70,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steamengine")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("flashfire")),
                },
                height_m: 1.1,
                weight_kg: 78.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("coalossal"),
            SpeciesData {
                name: "Coalossal".to_owned(),
                num: 839,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 110,
                    atk: 80,
                    def: 120,
                    spa: 80,
                    spd: 90,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steamengine")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("flashfire")),
                },
                height_m: 2.8,
                weight_kg: 310.5,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("applin"),
            SpeciesData {
                name: "Applin".to_owned(),
                num: 840,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 80,
                    spa: 40,
                    spd: 40,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ripen")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("bulletproof")),
                },
                height_m: 0.2,
                weight_kg: 0.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("flapple"),
            SpeciesData {
                name: "Flapple".to_owned(),
                num: 841,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 70,
                    atk: 110,
                    def: 80,
                    spa: 95,
                    spd: 60,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ripen")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.3,
                weight_kg: 1.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("appletun"),
            SpeciesData {
                name: "Appletun".to_owned(),
                num: 842,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 110,
                    atk: 85,
                    def: 80,
                    spa: 100,
                    spd: 80,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ripen")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 0.4,
                weight_kg: 13.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("silicobra"),
            SpeciesData {
                name: "Silicobra".to_owned(),
                num: 843,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 52,
                    atk: 57,
                    def: 75,
                    spa: 35,
                    spd: 50,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandspit")),
                    secondary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 2.2,
                weight_kg: 7.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandaconda"),
            SpeciesData {
                name: "Sandaconda".to_owned(),
                num: 844,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 72,
                    atk: 107,
                    def: 125,
                    spa: 65,
                    spd: 70,
                    spe: 71,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandspit")),
                    secondary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 3.8,
                weight_kg: 65.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cramorant"),
            SpeciesData {
                name: "Cramorant".to_owned(),
                num: 845,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 55,
                    spa: 85,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gulpmissile")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 18.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cramorantgulping"),
            SpeciesData {
                name: "Cramorant-Gulping".to_owned(),
                num: 845,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 55,
                    spa: 85,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gulpmissile")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 18.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("cramorant")),
                forme: Some("Gulping".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cramorantgorging"),
            SpeciesData {
                name: "Cramorant-Gorging".to_owned(),
                num: 845,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 55,
                    spa: 85,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gulpmissile")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 18.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("cramorant")),
                forme: Some("Gorging".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("arrokuda"),
            SpeciesData {
                name: "Arrokuda".to_owned(),
                num: 846,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 41,
                    atk: 63,
                    def: 40,
                    spa: 40,
                    spd: 30,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("propellertail")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 1.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("barraskewda"),
            SpeciesData {
                name: "Barraskewda".to_owned(),
                num: 847,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 61,
                    atk: 123,
                    def: 60,
                    spa: 60,
                    spd: 50,
                    spe: 136,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("propellertail")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 30.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toxel"),
            SpeciesData {
                name: "Toxel".to_owned(),
                num: 848,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 38,
                    def: 35,
                    spa: 54,
                    spd: 35,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rattled")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("klutz")),
                },
                height_m: 0.4,
                weight_kg: 11.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toxtricity"),
            SpeciesData {
                name: "Toxtricity".to_owned(),
                num: 849,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 75,
                    atk: 98,
                    def: 70,
                    spa: 114,
                    spd: 70,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("punkrock")),
                    secondary: Some(Id::from_known("plus")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 1.6,
                weight_kg: 40.0,
                color: Color::Purple,
                base_forme: Some("Amped".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("toxtricitylowkey"),
            SpeciesData {
                name: "Toxtricity-Low-Key".to_owned(),
                num: 849,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 75,
                    atk: 98,
                    def: 70,
                    spa: 114,
                    spd: 70,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("punkrock")),
                    secondary: Some(Id::from_known("minus")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 1.6,
                weight_kg: 40.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("toxtricity")),
                forme: Some("Low-Key".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sizzlipede"),
            SpeciesData {
                name: "Sizzlipede".to_owned(),
                num: 850,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 45,
                    spa: 50,
                    spd: 50,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("whitesmoke")),
                    hidden: Some(Id::from_known("flamebody")),
                },
                height_m: 0.7,
                weight_kg: 1.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
    ])
}
