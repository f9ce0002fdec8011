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

/// Species numbered 401 to 450.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("kricketot"),
            SpeciesData {
                name: "Kricketot".to_owned(),
                num: 401,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 37,
                    atk: 25,
                    def: 41,
                    spa: 25,
                    spd: 41,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.2,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kricketune"),
            SpeciesData {
                name: "Kricketune".to_owned(),
                num: 402,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 77,
                    atk: 85,
                    def: 51,
                    spa: 55,
                    spd: 51,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 25.5,
                color: Color::Red,
                prevo: Some(Id::from_known("kricketot")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("shinx"),
            SpeciesData {
                name: "Shinx".to_owned(),
                num: 403,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 45,
                    atk: 65,
                    def: 34,
                    spa: 40,
                    spd: 34,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("guts")),
                },
                height_m: 0.5,
                weight_kg: 9.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("luxio"),
            SpeciesData {
                name: "Luxio".to_owned(),
                num: 404,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 49,
                    spa: 60,
                    spd: 49,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("guts")),
                },
                height_m: 0.9,
                weight_kg: 30.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("shinx")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("luxray"),
            SpeciesData {
                name: "Luxray".to_owned(),
                num: 405,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 79,
                    spa: 95,
                    spd: 79,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("guts")),
                },
                height_m: 1.4,
                weight_kg: 42.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("luxio")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("budew"),
            SpeciesData {
                name: "Budew".to_owned(),
                num: 406,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 35,
                    spa: 50,
                    spd: 70,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("poisonpoint")),
                    hidden: Some(Id::from_known("leafguard")),
                },
                height_m: 0.2,
                weight_kg: 1.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("roserade"),
            SpeciesData {
                name: "Roserade".to_owned(),
                num: 407,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 70,
                    def: 65,
                    spa: 125,
                    spd: 105,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("poisonpoint")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 0.9,
                weight_kg: 14.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cranidos"),
            SpeciesData {
                name: "Cranidos".to_owned(),
                num: 408,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 67,
                    atk: 125,
                    def: 40,
                    spa: 30,
                    spd: 30,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 31.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rampardos"),
            SpeciesData {
                name: "Rampardos".to_owned(),
                num: 409,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 97,
                    atk: 165,
                    def: 60,
                    spa: 65,
                    spd: 50,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 102.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("cranidos")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("shieldon"),
            SpeciesData {
                name: "Shieldon".to_owned(),
                num: 410,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 30,
                    atk: 42,
                    def: 118,
                    spa: 42,
                    spd: 88,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("soundproof")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 57.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bastiodon"),
            SpeciesData {
                name: "Bastiodon".to_owned(),
                num: 411,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 60,
                    atk: 52,
                    def: 168,
                    spa: 47,
                    spd: 138,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("soundproof")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 149.5,
                color: Color::Gray,
                prevo: Some(Id::from_known("shieldon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("burmy"),
            SpeciesData {
                name: "Burmy".to_owned(),
                num: 412,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 40,
                    atk: 29,
                    def: 45,
                    spa: 29,
                    spd: 45,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 3.4,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wormadam"),
            SpeciesData {
                name: "Wormadam".to_owned(),
                num: 413,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 60,
                    atk: 59,
                    def: 85,
                    spa: 79,
                    spd: 105,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 6.5,
                color: Color::Green,
                prevo: Some(Id::from_known("burmy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wormadamsandy"),
            SpeciesData {
                name: "Wormadam-Sandy".to_owned(),
                num: 413,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 60,
                    atk: 79,
                    def: 105,
                    spa: 59,
                    spd: 85,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 6.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("wormadam")),
                forme: Some("Sandy".to_owned()),
                prevo: Some(Id::from_known("burmy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wormadamtrash"),
            SpeciesData {
                name: "Wormadam-Trash".to_owned(),
                num: 413,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 60,
                    atk: 69,
                    def: 95,
                    spa: 69,
                    spd: 95,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 6.5,
                color: Color::Red,
                base_species: Some(Id::from_known("wormadam")),
                forme: Some("Trash".to_owned()),
                prevo: Some(Id::from_known("burmy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mothim"),
            SpeciesData {
                name: "Mothim".to_owned(),
                num: 414,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 70,
                    atk: 94,
                    def: 50,
                    spa: 94,
                    spd: 50,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("tintedlens")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 23.3,
                color: Color::Yellow,
                prevo: Some(Id::from_known("burmy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("combee"),
            SpeciesData {
                name: "Combee".to_owned(),
                num: 415,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 30,
                    atk: 30,
                    def: 42,
                    spa: 30,
                    spd: 42,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("honeygather")),
                    hidden: Some(Id::from_known("hustle")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 5.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vespiquen"),
            SpeciesData {
                name: "Vespiquen".to_owned(),
                num: 416,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 80,
                    def: 102,
                    spa: 80,
                    spd: 102,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("unnerve")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 38.5,
                color: Color::Yellow,
                prevo: Some(Id::from_known("combee")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pachirisu"),
            SpeciesData {
                name: "Pachirisu".to_owned(),
                num: 417,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 60,
                    atk: 45,
                    def: 70,
                    spa: 45,
                    spd: 90,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("voltabsorb")),
                },
                height_m: 0.4,
                weight_kg: 3.9,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("buizel"),
            SpeciesData {
                name: "Buizel".to_owned(),
                num: 418,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 65,
                    def: 35,
                    spa: 60,
                    spd: 30,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("waterveil")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 29.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("floatzel"),
            SpeciesData {
                name: "Floatzel".to_owned(),
                num: 419,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 85,
                    atk: 105,
                    def: 55,
                    spa: 85,
                    spd: 50,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("waterveil")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 33.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("buizel")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cherubi"),
            SpeciesData {
                name: "Cherubi".to_owned(),
                num: 420,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 45,
                    atk: 35,
                    def: 45,
                    spa: 62,
                    spd: 53,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 3.3,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cherrim"),
            SpeciesData {
                name: "Cherrim".to_owned(),
                num: 421,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 60,
                    def: 70,
                    spa: 87,
                    spd: 78,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowergift")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.3,
                color: Color::Purple,
                prevo: Some(Id::from_known("cherubi")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cherrimsunshine"),
            SpeciesData {
                name: "Cherrim-Sunshine".to_owned(),
                num: 421,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 60,
                    def: 70,
                    spa: 87,
                    spd: 78,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowergift")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.3,
                color: Color::Pink,
                base_species: Some(Id::from_known("cherrim")),
                forme: Some("Sunshine".to_owned()),
                battle_only: Some("Sunshine".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("shellos"),
            SpeciesData {
                name: "Shellos".to_owned(),
                num: 422,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 76,
                    atk: 48,
                    def: 48,
                    spa: 57,
                    spd: 62,
                    spe: 34,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stickyhold")),
                    secondary: Some(Id::from_known("stormdrain")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.3,
                weight_kg: 6.3,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gastrodon"),
            SpeciesData {
                name: "Gastrodon".to_owned(),
                num: 423,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 111,
                    atk: 83,
                    def: 68,
                    spa: 92,
                    spd: 82,
                    spe: 39,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stickyhold")),
                    secondary: Some(Id::from_known("stormdrain")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.9,
                weight_kg: 29.9,
                color: Color::Purple,
                prevo: Some(Id::from_known("shellos")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ambipom"),
            SpeciesData {
                name: "Ambipom".to_owned(),
                num: 424,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 75,
                    atk: 100,
                    def: 66,
                    spa: 60,
                    spd: 66,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("technician")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("skilllink")),
                },
                height_m: 1.2,
                weight_kg: 20.3,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drifloon"),
            SpeciesData {
                name: "Drifloon".to_owned(),
                num: 425,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 90,
                    atk: 50,
                    def: 34,
                    spa: 60,
                    spd: 44,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aftermath")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("flareboost")),
                },
                height_m: 0.4,
                weight_kg: 1.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drifblim"),
            SpeciesData {
                name: "Drifblim".to_owned(),
                num: 426,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 150,
                    atk: 80,
                    def: 44,
                    spa: 90,
                    spd: 54,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aftermath")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("flareboost")),
                },
                height_m: 1.2,
                weight_kg: 15.0,
                color: Color::Purple,
                prevo: Some(Id::from_known("drifloon")),
                ..Default::default()
            },
        ),
    ])
}
