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

/// Species numbered 851 to 900.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("centiskorch"),
            SpeciesData {
                name: "Centiskorch".to_owned(),
                num: 851,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 100,
                    atk: 115,
                    def: 65,
                    spa: 90,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("whitesmoke")),
                    hidden: Some(Id::from_known("flamebody")),
                },
                height_m: 3.0,
                weight_kg: 120.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("centiskorchgmax"),
            SpeciesData {
                name: "Centiskorch-Gmax".to_owned(),
                num: 851,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 100,
                    atk: 115,
                    def: 65,
                    spa: 90,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("whitesmoke")),
                    hidden: Some(Id::from_known("flamebody")),
                },
                height_m: 75.0,
                weight_kg: 0.0,
                color: Color::Red,
                base_species: Some(Id::from_known("centiskorch")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("clobbopus"),
            SpeciesData {
                name: "Clobbopus".to_owned(),
                num: 852,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 50,
                    atk: 68,
                    def: 60,
                    spa: 50,
                    spd: 50,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 4.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grapploct"),
            SpeciesData {
                name: "Grapploct".to_owned(),
                num: 853,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 80,
                    atk: 118,
                    def: 90,
                    spa: 70,
                    spd: 80,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 39.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sinistea"),
            SpeciesData {
                name: "Sinistea".to_owned(),
                num: 854,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 45,
                    spa: 74,
                    spd: 54,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 0.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sinisteaantique"),
            SpeciesData {
                name: "Sinistea-Antique".to_owned(),
                num: 854,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 45,
                    spa: 74,
                    spd: 54,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 0.2,
                color: Color::Purple,
                base_species: Some(Id::from_known("sinistea")),
                forme: Some("Antique".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("polteageist"),
            SpeciesData {
                name: "Polteageist".to_owned(),
                num: 855,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 65,
                    spa: 134,
                    spd: 114,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.4,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("polteageistantique"),
            SpeciesData {
                name: "Polteageist-Antique".to_owned(),
                num: 855,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 65,
                    spa: 134,
                    spd: 114,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.4,
                color: Color::Purple,
                base_species: Some(Id::from_known("polteageist")),
                forme: Some("Antique".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("hatenna"),
            SpeciesData {
                name: "Hatenna".to_owned(),
                num: 856,
                primary_type: Type::Psychic,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 42,
                    atk: 30,
                    def: 45,
                    spa: 56,
                    spd: 53,
                    spe: 39,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    secondary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 0.4,
                weight_kg: 3.4,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hattrem"),
            SpeciesData {
                name: "Hattrem".to_owned(),
                num: 857,
                primary_type: Type::Psychic,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 57,
                    atk: 40,
                    def: 65,
                    spa: 86,
                    spd: 73,
                    spe: 49,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    secondary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 0.6,
                weight_kg: 4.8,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hatterene"),
            SpeciesData {
                name: "Hatterene".to_owned(),
                num: 858,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 57,
                    atk: 90,
                    def: 95,
                    spa: 136,
                    spd: 103,
                    spe: 29,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    secondary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 2.1,
                weight_kg: 5.1,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hatterenegmax"),
            SpeciesData {
                name: "Hatterene-Gmax".to_owned(),
                num: 858,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 57,
                    atk: 90,
                    def: 95,
                    spa: 136,
                    spd: 103,
                    spe: 29,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    secondary: Some(Id::from_known("anticipation")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 26.0,
                weight_kg: 0.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("hatterene")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("impidimp"),
            SpeciesData {
                name: "Impidimp".to_owned(),
                num: 859,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 45,
                    atk: 45,
                    def: 30,
                    spa: 55,
                    spd: 40,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.4,
                weight_kg: 5.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("morgrem"),
            SpeciesData {
                name: "Morgrem".to_owned(),
                num: 860,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 45,
                    spa: 75,
                    spd: 55,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.8,
                weight_kg: 12.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grimmsnarl"),
            SpeciesData {
                name: "Grimmsnarl".to_owned(),
                num: 861,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 95,
                    atk: 120,
                    def: 65,
                    spa: 95,
                    spd: 75,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 1.5,
                weight_kg: 61.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grimmsnarlgmax"),
            SpeciesData {
                name: "Grimmsnarl-Gmax".to_owned(),
                num: 861,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 95,
                    atk: 120,
                    def: 65,
                    spa: 95,
                    spd: 75,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 32.0,
                weight_kg: 0.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("grimmsnarl")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("obstagoon"),
            SpeciesData {
                name: "Obstagoon".to_owned(),
                num: 862,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 93,
                    atk: 90,
                    def: 101,
                    spa: 60,
                    spd: 81,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("reckless")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 1.6,
                weight_kg: 46.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("perrserker"),
            SpeciesData {
                name: "Perrserker".to_owned(),
                num: 863,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 70,
                    atk: 110,
                    def: 100,
                    spa: 50,
                    spd: 60,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    secondary: Some(Id::from_known("toughclaws")),
                    hidden: Some(Id::from_known("steelyspirit")),
                },
                height_m: 0.8,
                weight_kg: 28.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cursola"),
            SpeciesData {
                name: "Cursola".to_owned(),
                num: 864,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 60,
                    atk: 95,
                    def: 50,
                    spa: 145,
                    spd: 130,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("perishbody")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 0.4,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sirfetchd"),
            SpeciesData {
                name: "Sirfetch'd".to_owned(),
                num: 865,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 62,
                    atk: 135,
                    def: 95,
                    spa: 68,
                    spd: 82,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steadfast")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 117.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mrrime"),
            SpeciesData {
                name: "Mr. Rime".to_owned(),
                num: 866,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 80,
                    atk: 85,
                    def: 75,
                    spa: 110,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("tangledfeet")),
                    secondary: Some(Id::from_known("screencleaner")),
                    hidden: Some(Id::from_known("icebody")),
                },
                height_m: 1.5,
                weight_kg: 58.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("runerigus"),
            SpeciesData {
                name: "Runerigus".to_owned(),
                num: 867,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 58,
                    atk: 95,
                    def: 145,
                    spa: 50,
                    spd: 105,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wanderingspirit")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 66.6,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("milcery"),
            SpeciesData {
                name: "Milcery".to_owned(),
                num: 868,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 45,
                    atk: 40,
                    def: 40,
                    spa: 50,
                    spd: 61,
                    spe: 34,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.3,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("alcremie"),
            SpeciesData {
                name: "Alcremie".to_owned(),
                num: 869,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 75,
                    spa: 110,
                    spd: 121,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("alcremiegmax"),
            SpeciesData {
                name: "Alcremie-Gmax".to_owned(),
                num: 869,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 75,
                    spa: 110,
                    spd: 121,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 30.0,
                weight_kg: 0.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("alcremie")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("falinks"),
            SpeciesData {
                name: "Falinks".to_owned(),
                num: 870,
                primary_type: Type::Fighting,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 65,
                    atk: 100,
                    def: 100,
                    spa: 70,
                    spd: 60,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    hidden: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 62.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("falinksmega"),
            SpeciesData {
                name: "Falinks-Mega".to_owned(),
                num: 870,
                primary_type: Type::Fighting,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 65,
                    atk: 135,
                    def: 135,
                    spa: 70,
                    spd: 65,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    hidden: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 99.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("falinks")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pincurchin"),
            SpeciesData {
                name: "Pincurchin".to_owned(),
                num: 871,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 48,
                    atk: 101,
                    def: 95,
                    spa: 91,
                    spd: 85,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    hidden: Some(Id::from_known("electricsurge")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("snom"),
            SpeciesData {
                name: "Snom".to_owned(),
                num: 872,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 30,
                    atk: 25,
                    def: 35,
                    spa: 45,
                    spd: 30,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("icescales")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("frosmoth"),
            SpeciesData {
                name: "Frosmoth".to_owned(),
                num: 873,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 70,
                    atk: 65,
                    def: 60,
                    spa: 125,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("icescales")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 42.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("stonjourner"),
            SpeciesData {
                name: "Stonjourner".to_owned(),
                num: 874,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 100,
                    atk: 125,
                    def: 135,
                    spa: 20,
                    spd: 20,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("powerspot")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 520.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eiscue"),
            SpeciesData {
                name: "Eiscue".to_owned(),
                num: 875,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 110,
                    spa: 65,
                    spd: 90,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("iceface")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 89.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eiscuenoice"),
            SpeciesData {
                name: "Eiscue-Noice".to_owned(),
                num: 875,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 70,
                    spa: 65,
                    spd: 50,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("iceface")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 89.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("eiscue")),
                forme: Some("Noice".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("indeedee"),
            SpeciesData {
                name: "Indeedee".to_owned(),
                num: 876,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Normal),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 55,
                    spa: 105,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("psychicsurge")),
                },
                height_m: 0.9,
                weight_kg: 28.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("indeedeef"),
            SpeciesData {
                name: "Indeedee-F".to_owned(),
                num: 876,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Normal),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 55,
                    def: 65,
                    spa: 95,
                    spd: 105,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("psychicsurge")),
                },
                height_m: 0.9,
                weight_kg: 28.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("indeedee")),
                forme: Some("F".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("morpeko"),
            SpeciesData {
                name: "Morpeko".to_owned(),
                num: 877,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 58,
                    atk: 95,
                    def: 58,
                    spa: 70,
                    spd: 58,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hungerswitch")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.0,
                color: Color::Purple,
                base_forme: Some("Full-Belly".to_owned()),
                other_formes: Vec::from(["Hangry".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("morpekohangry"),
            SpeciesData {
                name: "Morpeko-Hangry".to_owned(),
                num: 877,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 58,
                    atk: 95,
                    def: 58,
                    spa: 70,
                    spd: 58,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hungerswitch")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("morpeko")),
                forme: Some("Hangry".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cufant"),
            SpeciesData {
                name: "Cufant".to_owned(),
                num: 878,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 72,
                    atk: 80,
                    def: 49,
                    spa: 40,
                    spd: 49,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("heavymetal")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 100.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("copperajah"),
            SpeciesData {
                name: "Copperajah".to_owned(),
                num: 879,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 122,
                    atk: 130,
                    def: 69,
                    spa: 80,
                    spd: 69,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("heavymetal")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 650.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("copperajahgmax"),
            SpeciesData {
                name: "Copperajah-Gmax".to_owned(),
                num: 879,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 122,
                    atk: 130,
                    def: 69,
                    spa: 80,
                    spd: 69,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("heavymetal")),
                    ..Default::default()
                },
                height_m: 23.0,
                weight_kg: 0.0,
                color: Color::Green,
                base_species: Some(Id::from_known("copperajah")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dracozolt"),
            SpeciesData {
                name: "Dracozolt".to_owned(),
                num: 880,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 100,
                    def: 90,
                    spa: 80,
                    spd: 70,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("sandrush")),
                },
                height_m: 1.8,
                weight_kg: 190.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arctozolt"),
            SpeciesData {
                name: "Arctozolt".to_owned(),
                num: 881,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 100,
                    def: 90,
                    spa: 90,
                    spd: 80,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("slushrush")),
                },
                height_m: 2.3,
                weight_kg: 150.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dracovish"),
            SpeciesData {
                name: "Dracovish".to_owned(),
                num: 882,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 90,
                    def: 100,
                    spa: 70,
                    spd: 80,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("sandrush")),
                },
                height_m: 2.3,
                weight_kg: 215.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arctovish"),
            SpeciesData {
                name: "Arctovish".to_owned(),
                num: 883,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 90,
                    def: 100,
                    spa: 80,
                    spd: 90,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("slushrush")),
                },
                height_m: 2.0,
                weight_kg: 175.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("duraludon"),
            SpeciesData {
                name: "Duraludon".to_owned(),
                num: 884,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 70,
                    atk: 95,
                    def: 115,
                    spa: 120,
                    spd: 50,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightmetal")),
                    secondary: Some(Id::from_known("heavymetal")),
                    hidden: Some(Id::from_known("stalwart")),
                },
                height_m: 1.8,
                weight_kg: 40.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("duraludongmax"),
            SpeciesData {
                name: "Duraludon-Gmax".to_owned(),
                num: 884,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 70,
                    atk: 95,
                    def: 115,
                    spa: 120,
                    spd: 50,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightmetal")),
                    secondary: Some(Id::from_known("heavymetal")),
                    hidden: Some(Id::from_known("stalwart")),
                },
                height_m: 43.0,
                weight_kg: 0.0,
                color: Color::White,
                base_species: Some(Id::from_known("duraludon")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dreepy"),
            SpeciesData {
                name: "Dreepy".to_owned(),
                num: 885,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 28,
                    atk: 60,
                    def: 30,
                    spa: 40,
                    spd: 30,
                    spe: 82,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("cursedbody")),
                },
                height_m: 0.5,
                weight_kg: 2.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drakloak"),
            SpeciesData {
                name: "Drakloak".to_owned(),
                num: 886,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 68,
                    atk: 80,
                    def: 50,
                    spa: 60,
                    spd: 50,
                    spe: 102,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("cursedbody")),
                },
                height_m: 1.4,
                weight_kg: 11.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragapult"),
            SpeciesData {
                name: "Dragapult".to_owned(),
                num: 887,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 88,
                    atk: 120,
                    def: 75,
                    spa: 100,
                    spd: 75,
                    spe: 142,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("cursedbody")),
                },
                height_m: 3.0,
                weight_kg: 50.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zacianhero"),
            SpeciesData {
                name: "Zacian".to_owned(),
                num: 888,
                primary_type: Type::Fairy,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 92,
                    atk: 120,
                    def: 115,
                    spa: 80,
                    spd: 115,
                    spe: 138,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intrepidsword")),
                    ..Default::default()
                },
                height_m: 2.8,
                weight_kg: 110.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zaciancrowned"),
            SpeciesData {
                name: "Zacian-Crowned".to_owned(),
                num: 888,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 92,
                    atk: 150,
                    def: 115,
                    spa: 80,
                    spd: 115,
                    spe: 148,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intrepidsword")),
                    ..Default::default()
                },
                height_m: 2.8,
                weight_kg: 355.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("zacianhero")),
                forme: Some("Crowned".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zamazentahero"),
            SpeciesData {
                name: "Zamazenta".to_owned(),
                num: 889,
                primary_type: Type::Fighting,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 92,
                    atk: 120,
                    def: 115,
                    spa: 80,
                    spd: 115,
                    spe: 138,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dauntlessshield")),
                    ..Default::default()
                },
                height_m: 2.9,
                weight_kg: 210.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zamazentacrowned"),
            SpeciesData {
                name: "Zamazenta-Crowned".to_owned(),
                num: 889,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 92,
                    atk: 120,
                    def: 140,
                    spa: 80,
                    spd: 140,
                    spe: 128,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dauntlessshield")),
                    ..Default::default()
                },
                height_m: 2.9,
                weight_kg: 785.0,
                color: Color::Red,
                base_species: Some(Id::from_known("zamazentahero")),
                forme: Some("Crowned".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("eternatus"),
            SpeciesData {
                name: "Eternatus".to_owned(),
                num: 890,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 140,
                    atk: 85,
                    def: 95,
                    spa: 145,
                    spd: 95,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 20.0,
                weight_kg: 950.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eternatuseternamax"),
            SpeciesData {
                name: "Eternatus-Eternamax".to_owned(),
                num: 890,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 255,
                    atk: 115,
                    def: 250,
                    spa: 125,
                    spd: 250,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 100.0,
                weight_kg: 0.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("eternatus")),
                forme: Some("Eternamax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kubfu"),
            SpeciesData {
                name: "Kubfu".to_owned(),
                num: 891,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 60,
                    atk: 90,
                    def: 60,
                    spa: 53,
                    spd: 50,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 12.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("urshifu"),
            SpeciesData {
                name: "Urshifu".to_owned(),
                num: 892,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 100,
                    atk: 130,
                    def: 100,
                    spa: 63,
                    spd: 60,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unseenfist")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 105.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("urshifurapidstrike"),
            SpeciesData {
                name: "Urshifu-Rapid-Strike".to_owned(),
                num: 892,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 100,
                    atk: 130,
                    def: 100,
                    spa: 63,
                    spd: 60,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unseenfist")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 105.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("urshifu")),
                forme: Some("Rapid-Strike".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("urshifugmax"),
            SpeciesData {
                name: "Urshifu-Gmax".to_owned(),
                num: 892,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 100,
                    atk: 130,
                    def: 100,
                    spa: 63,
                    spd: 60,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unseenfist")),
                    ..Default::default()
                },
                height_m: 29.0,
                weight_kg: 0.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("urshifu")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("urshifurapidstrikegmax"),
            SpeciesData {
                name: "Urshifu-Rapid-Strike-Gmax".to_owned(),
                num: 892,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 100,
                    atk: 130,
                    def: 100,
                    spa: 63,
                    spd: 60,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unseenfist")),
                    ..Default::default()
                },
                height_m: 26.0,
                weight_kg: 0.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("urshifu")),
                forme: Some("Rapid-Strike-Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zarude"),
            SpeciesData {
                name: "Zarude".to_owned(),
                num: 893,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 120,
                    def: 105,
                    spa: 70,
                    spd: 95,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 70.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zarudedada"),
            SpeciesData {
                name: "Zarude-Dada".to_owned(),
                num: 893,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 120,
                    def: 105,
                    spa: 70,
                    spd: 95,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 70.0,
                color: Color::Black,
                base_species: Some(Id::from_known("zarude")),
                forme: Some("Dada".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("regieleki"),
            SpeciesData {
                name: "Regieleki".to_owned(),
                num: 894,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 50,
                    spa: 100,
                    spd: 50,
                    spe: 200,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("transistor")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 145.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("regidrago"),
            SpeciesData {
                name: "Regidrago".to_owned(),
                num: 895,
                primary_type: Type::Dragon,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 200,
                    atk: 100,
                    def: 50,
                    spa: 100,
                    spd: 50,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dragonsmaw")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 200.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("glastrier"),
            SpeciesData {
                name: "Glastrier".to_owned(),
                num: 896,
                primary_type: Type::Ice,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 145,
                    def: 130,
                    spa: 65,
                    spd: 110,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chillingneigh")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 800.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("spectrier"),
            SpeciesData {
                name: "Spectrier".to_owned(),
                num: 897,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 65,
                    def: 60,
                    spa: 145,
                    spd: 80,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("grimneigh")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 44.5,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("calyrex"),
            SpeciesData {
                name: "Calyrex".to_owned(),
                num: 898,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 80,
                    def: 80,
                    spa: 80,
                    spd: 80,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unnerve")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 7.7,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("calyrexice"),
            SpeciesData {
                name: "Calyrex-Ice".to_owned(),
                num: 898,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 165,
                    def: 150,
                    spa: 85,
                    spd: 130,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("asoneglastrier")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 809.1,
                color: Color::White,
                base_species: Some(Id::from_known("calyrex")),
                forme: Some("Ice".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("calyrexshadow"),
            SpeciesData {
                name: "Calyrex-Shadow".to_owned(),
                num: 898,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 85,
                    def: 80,
                    spa: 165,
                    spd: 100,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("asonespectrier")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 53.6,
                color: Color::Black,
                base_species: Some(Id::from_known("calyrex")),
                forme: Some("Shadow".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wyrdeer"),
            SpeciesData {
                name: "Wyrdeer".to_owned(),
                num: 899,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 103,
                    atk: 105,
                    def: 72,
                    spa: 105,
                    spd: 75,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 1.8,
                weight_kg: 95.1,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kleavor"),
            SpeciesData {
                name: "Kleavor".to_owned(),
                num: 900,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 70,
                    atk: 135,
                    def: 95,
                    spa: 45,
                    spd: 70,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("sharpness")),
                },
                height_m: 1.8,
                weight_kg: 89.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
    ])
}
