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

/// Species numbered 201 to 250.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("unown"),
            SpeciesData {
                name: "Unown".to_owned(),
                num: 201,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 48,
                    atk: 72,
                    def: 48,
                    spa: 72,
                    spd: 48,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 5.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wobbuffet"),
            SpeciesData {
                name: "Wobbuffet".to_owned(),
                num: 202,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 190,
                    atk: 33,
                    def: 58,
                    spa: 33,
                    spd: 58,
                    spe: 33,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shadowtag")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 28.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("girafarig"),
            SpeciesData {
                name: "Girafarig".to_owned(),
                num: 203,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 70,
                    atk: 80,
                    def: 65,
                    spa: 90,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 1.5,
                weight_kg: 41.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pineco"),
            SpeciesData {
                name: "Pineco".to_owned(),
                num: 204,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 90,
                    spa: 35,
                    spd: 35,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 7.2,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("forretress"),
            SpeciesData {
                name: "Forretress".to_owned(),
                num: 205,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 75,
                    atk: 90,
                    def: 140,
                    spa: 60,
                    spd: 60,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 125.8,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dunsparce"),
            SpeciesData {
                name: "Dunsparce".to_owned(),
                num: 206,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 100,
                    atk: 70,
                    def: 70,
                    spa: 65,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 1.5,
                weight_kg: 14.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gligar"),
            SpeciesData {
                name: "Gligar".to_owned(),
                num: 207,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 75,
                    def: 105,
                    spa: 35,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("immunity")),
                },
                height_m: 1.1,
                weight_kg: 64.8,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("steelix"),
            SpeciesData {
                name: "Steelix".to_owned(),
                num: 208,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 75,
                    atk: 85,
                    def: 200,
                    spa: 55,
                    spd: 65,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 9.2,
                weight_kg: 400.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("steelixmega"),
            SpeciesData {
                name: "Steelix-Mega".to_owned(),
                num: 208,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 75,
                    atk: 125,
                    def: 230,
                    spa: 55,
                    spd: 95,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandforce")),
                    ..Default::default()
                },
                height_m: 10.5,
                weight_kg: 740.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("steelix")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("snubbull"),
            SpeciesData {
                name: "Snubbull".to_owned(),
                num: 209,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 60,
                    atk: 80,
                    def: 50,
                    spa: 40,
                    spd: 40,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 0.6,
                weight_kg: 7.8,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("granbull"),
            SpeciesData {
                name: "Granbull".to_owned(),
                num: 210,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 90,
                    atk: 120,
                    def: 75,
                    spa: 60,
                    spd: 60,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("quickfeet")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 1.4,
                weight_kg: 48.7,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("qwilfish"),
            SpeciesData {
                name: "Qwilfish".to_owned(),
                num: 211,
                primary_type: Type::Water,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 65,
                    atk: 95,
                    def: 85,
                    spa: 55,
                    spd: 55,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 0.5,
                weight_kg: 3.9,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("qwilfishhisui"),
            SpeciesData {
                name: "Qwilfish-Hisui".to_owned(),
                num: 211,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 65,
                    atk: 95,
                    def: 85,
                    spa: 55,
                    spd: 55,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 0.5,
                weight_kg: 3.9,
                color: Color::Black,
                base_species: Some(Id::from_known("qwilfish")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("scizor"),
            SpeciesData {
                name: "Scizor".to_owned(),
                num: 212,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 70,
                    atk: 130,
                    def: 100,
                    spa: 55,
                    spd: 80,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("lightmetal")),
                },
                height_m: 1.8,
                weight_kg: 118.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("scizormega"),
            SpeciesData {
                name: "Scizor-Mega".to_owned(),
                num: 212,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 70,
                    atk: 150,
                    def: 140,
                    spa: 65,
                    spd: 100,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 125.0,
                color: Color::Red,
                base_species: Some(Id::from_known("scizor")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("shuckle"),
            SpeciesData {
                name: "Shuckle".to_owned(),
                num: 213,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 20,
                    atk: 10,
                    def: 230,
                    spa: 10,
                    spd: 230,
                    spe: 5,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("contrary")),
                },
                height_m: 0.6,
                weight_kg: 20.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("heracross"),
            SpeciesData {
                name: "Heracross".to_owned(),
                num: 214,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 80,
                    atk: 125,
                    def: 75,
                    spa: 40,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 1.5,
                weight_kg: 54.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("heracrossmega"),
            SpeciesData {
                name: "Heracross-Mega".to_owned(),
                num: 214,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 80,
                    atk: 185,
                    def: 115,
                    spa: 40,
                    spd: 105,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("skilllink")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 62.5,
                color: Color::Blue,
                base_species: Some(Id::from_known("heracross")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sneasel"),
            SpeciesData {
                name: "Sneasel".to_owned(),
                num: 215,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 55,
                    atk: 95,
                    def: 55,
                    spa: 35,
                    spd: 75,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.9,
                weight_kg: 28.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sneaselhisui"),
            SpeciesData {
                name: "Sneasel-Hisui".to_owned(),
                num: 215,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 55,
                    atk: 95,
                    def: 55,
                    spa: 35,
                    spd: 75,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.9,
                weight_kg: 27.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("sneasel")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("teddiursa"),
            SpeciesData {
                name: "Teddiursa".to_owned(),
                num: 216,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 60,
                    atk: 80,
                    def: 50,
                    spa: 50,
                    spd: 50,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("quickfeet")),
                    hidden: Some(Id::from_known("honeygather")),
                },
                height_m: 0.6,
                weight_kg: 8.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ursaring"),
            SpeciesData {
                name: "Ursaring".to_owned(),
                num: 217,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 90,
                    atk: 130,
                    def: 75,
                    spa: 75,
                    spd: 75,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("quickfeet")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.8,
                weight_kg: 125.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slugma"),
            SpeciesData {
                name: "Slugma".to_owned(),
                num: 218,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 40,
                    spa: 70,
                    spd: 40,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magmaarmor")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.7,
                weight_kg: 35.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("magcargo"),
            SpeciesData {
                name: "Magcargo".to_owned(),
                num: 219,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 120,
                    spa: 90,
                    spd: 80,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magmaarmor")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.8,
                weight_kg: 55.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swinub"),
            SpeciesData {
                name: "Swinub".to_owned(),
                num: 220,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 40,
                    spa: 30,
                    spd: 30,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 0.4,
                weight_kg: 6.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("piloswine"),
            SpeciesData {
                name: "Piloswine".to_owned(),
                num: 221,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 100,
                    atk: 100,
                    def: 80,
                    spa: 60,
                    spd: 60,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 1.1,
                weight_kg: 55.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("corsola"),
            SpeciesData {
                name: "Corsola".to_owned(),
                num: 222,
                primary_type: Type::Water,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 65,
                    atk: 55,
                    def: 95,
                    spa: 65,
                    spd: 95,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 0.6,
                weight_kg: 5.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("corsolagalar"),
            SpeciesData {
                name: "Corsola-Galar".to_owned(),
                num: 222,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 100,
                    spa: 65,
                    spd: 100,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 0.5,
                color: Color::White,
                base_species: Some(Id::from_known("corsola")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("remoraid"),
            SpeciesData {
                name: "Remoraid".to_owned(),
                num: 223,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 35,
                    atk: 65,
                    def: 35,
                    spa: 65,
                    spd: 35,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 0.6,
                weight_kg: 12.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("octillery"),
            SpeciesData {
                name: "Octillery".to_owned(),
                num: 224,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 75,
                    atk: 105,
                    def: 75,
                    spa: 105,
                    spd: 75,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("suctioncups")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 0.9,
                weight_kg: 28.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("delibird"),
            SpeciesData {
                name: "Delibird".to_owned(),
                num: 225,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 45,
                    atk: 55,
                    def: 45,
                    spa: 65,
                    spd: 45,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.9,
                weight_kg: 16.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mantine"),
            SpeciesData {
                name: "Mantine".to_owned(),
                num: 226,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 85,
                    atk: 40,
                    def: 70,
                    spa: 80,
                    spd: 140,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("waterveil")),
                },
                height_m: 2.1,
                weight_kg: 220.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("skarmory"),
            SpeciesData {
                name: "Skarmory".to_owned(),
                num: 227,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 80,
                    def: 140,
                    spa: 40,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.7,
                weight_kg: 50.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("skarmorymega"),
            SpeciesData {
                name: "Skarmory-Mega".to_owned(),
                num: 227,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 140,
                    def: 110,
                    spa: 40,
                    spd: 100,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.7,
                weight_kg: 40.4,
                color: Color::Gray,
                base_species: Some(Id::from_known("skarmory")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("houndour"),
            SpeciesData {
                name: "Houndour".to_owned(),
                num: 228,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 45,
                    atk: 60,
                    def: 30,
                    spa: 80,
                    spd: 50,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("earlybird")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 0.6,
                weight_kg: 10.8,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("houndoom"),
            SpeciesData {
                name: "Houndoom".to_owned(),
                num: 229,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 75,
                    atk: 90,
                    def: 50,
                    spa: 110,
                    spd: 80,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("earlybird")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.4,
                weight_kg: 35.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("houndoommega"),
            SpeciesData {
                name: "Houndoom-Mega".to_owned(),
                num: 229,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 75,
                    atk: 90,
                    def: 90,
                    spa: 140,
                    spd: 90,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("solarpower")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 49.5,
                color: Color::Black,
                base_species: Some(Id::from_known("houndoom")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kingdra"),
            SpeciesData {
                name: "Kingdra".to_owned(),
                num: 230,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 75,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 1.8,
                weight_kg: 152.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("phanpy"),
            SpeciesData {
                name: "Phanpy".to_owned(),
                num: 231,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 90,
                    atk: 60,
                    def: 60,
                    spa: 40,
                    spd: 40,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 33.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("donphan"),
            SpeciesData {
                name: "Donphan".to_owned(),
                num: 232,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 90,
                    atk: 120,
                    def: 120,
                    spa: 60,
                    spd: 60,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 120.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("porygon2"),
            SpeciesData {
                name: "Porygon2".to_owned(),
                num: 233,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 85,
                    atk: 80,
                    def: 90,
                    spa: 105,
                    spd: 95,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("trace")),
                    secondary: Some(Id::from_known("download")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.6,
                weight_kg: 32.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("stantler"),
            SpeciesData {
                name: "Stantler".to_owned(),
                num: 234,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 73,
                    atk: 95,
                    def: 62,
                    spa: 85,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 1.4,
                weight_kg: 71.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("smeargle"),
            SpeciesData {
                name: "Smeargle".to_owned(),
                num: 235,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 20,
                    def: 35,
                    spa: 20,
                    spd: 45,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 1.2,
                weight_kg: 58.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tyrogue"),
            SpeciesData {
                name: "Tyrogue".to_owned(),
                num: 236,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 35,
                    def: 35,
                    spa: 35,
                    spd: 35,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("steadfast")),
                    hidden: Some(Id::from_known("vitalspirit")),
                },
                height_m: 0.7,
                weight_kg: 21.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hitmontop"),
            SpeciesData {
                name: "Hitmontop".to_owned(),
                num: 237,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 50,
                    atk: 95,
                    def: 95,
                    spa: 35,
                    spd: 110,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 1.4,
                weight_kg: 48.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("smoochum"),
            SpeciesData {
                name: "Smoochum".to_owned(),
                num: 238,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 15,
                    spa: 85,
                    spd: 65,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("forewarn")),
                    hidden: Some(Id::from_known("hydration")),
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("elekid"),
            SpeciesData {
                name: "Elekid".to_owned(),
                num: 239,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 45,
                    atk: 63,
                    def: 37,
                    spa: 65,
                    spd: 55,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 23.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("magby"),
            SpeciesData {
                name: "Magby".to_owned(),
                num: 240,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 45,
                    atk: 75,
                    def: 37,
                    spa: 70,
                    spd: 55,
                    spe: 83,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 21.4,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("miltank"),
            SpeciesData {
                name: "Miltank".to_owned(),
                num: 241,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 95,
                    atk: 80,
                    def: 105,
                    spa: 40,
                    spd: 70,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("scrappy")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 1.2,
                weight_kg: 75.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blissey"),
            SpeciesData {
                name: "Blissey".to_owned(),
                num: 242,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 255,
                    atk: 10,
                    def: 10,
                    spa: 75,
                    spd: 135,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("serenegrace")),
                    hidden: Some(Id::from_known("healer")),
                },
                height_m: 1.5,
                weight_kg: 46.8,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("raikou"),
            SpeciesData {
                name: "Raikou".to_owned(),
                num: 243,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 85,
                    def: 75,
                    spa: 115,
                    spd: 100,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 178.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("entei"),
            SpeciesData {
                name: "Entei".to_owned(),
                num: 244,
                primary_type: Type::Fire,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 115,
                    atk: 115,
                    def: 85,
                    spa: 90,
                    spd: 75,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 198.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("suicune"),
            SpeciesData {
                name: "Suicune".to_owned(),
                num: 245,
                primary_type: Type::Water,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 75,
                    def: 115,
                    spa: 90,
                    spd: 115,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 187.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("larvitar"),
            SpeciesData {
                name: "Larvitar".to_owned(),
                num: 246,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 50,
                    atk: 64,
                    def: 50,
                    spa: 45,
                    spd: 50,
                    spe: 41,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 72.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pupitar"),
            SpeciesData {
                name: "Pupitar".to_owned(),
                num: 247,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 70,
                    atk: 84,
                    def: 70,
                    spa: 65,
                    spd: 70,
                    spe: 51,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 152.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tyranitar"),
            SpeciesData {
                name: "Tyranitar".to_owned(),
                num: 248,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 100,
                    atk: 134,
                    def: 110,
                    spa: 95,
                    spd: 100,
                    spe: 61,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandstream")),
                    hidden: Some(Id::from_known("unnerve")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 202.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tyranitarmega"),
            SpeciesData {
                name: "Tyranitar-Mega".to_owned(),
                num: 248,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 100,
                    atk: 164,
                    def: 150,
                    spa: 95,
                    spd: 120,
                    spe: 71,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandstream")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 255.0,
                color: Color::Green,
                base_species: Some(Id::from_known("tyranitar")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lugia"),
            SpeciesData {
                name: "Lugia".to_owned(),
                num: 249,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 106,
                    atk: 90,
                    def: 130,
                    spa: 90,
                    spd: 154,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("multiscale")),
                    ..Default::default()
                },
                height_m: 5.2,
                weight_kg: 216.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hooh"),
            SpeciesData {
                name: "Ho-Oh".to_owned(),
                num: 250,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 106,
                    atk: 130,
                    def: 90,
                    spa: 110,
                    spd: 154,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("regenerator")),
                    ..Default::default()
                },
                height_m: 3.8,
                weight_kg: 199.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
    ])
}
