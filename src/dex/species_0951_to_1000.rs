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

/// Species numbered 951 to 1000.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("capsakid"),
            SpeciesData {
                name: "Capsakid".to_owned(),
                num: 951,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 50,
                    atk: 62,
                    def: 40,
                    spa: 62,
                    spd: 40,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("klutz")),
                },
                height_m: 0.3,
                weight_kg: 3.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("scovillain"),
            SpeciesData {
                name: "Scovillain".to_owned(),
                num: 952,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 65,
                    atk: 108,
                    def: 65,
                    spa: 108,
                    spd: 65,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 0.9,
                weight_kg: 15.0,
                color: Color::Green,
                prevo: Some(Id::from_known("capsakid")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rellor"),
            SpeciesData {
                name: "Rellor".to_owned(),
                num: 953,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 41,
                    atk: 50,
                    def: 60,
                    spa: 31,
                    spd: 58,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 1.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rabsca"),
            SpeciesData {
                name: "Rabsca".to_owned(),
                num: 954,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 75,
                    atk: 50,
                    def: 85,
                    spa: 115,
                    spd: 100,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.5,
                color: Color::Green,
                prevo: Some(Id::from_known("rellor")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("flittle"),
            SpeciesData {
                name: "Flittle".to_owned(),
                num: 955,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 30,
                    atk: 35,
                    def: 30,
                    spa: 55,
                    spd: 30,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("speedboost")),
                },
                height_m: 0.2,
                weight_kg: 1.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("espathra"),
            SpeciesData {
                name: "Espathra".to_owned(),
                num: 956,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 95,
                    atk: 60,
                    def: 60,
                    spa: 101,
                    spd: 60,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("opportunist")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("speedboost")),
                },
                height_m: 1.9,
                weight_kg: 90.0,
                color: Color::Yellow,
                prevo: Some(Id::from_known("flittle")),
                evo_level: Some(35),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tinkatink"),
            SpeciesData {
                name: "Tinkatink".to_owned(),
                num: 957,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 50,
                    atk: 45,
                    def: 45,
                    spa: 35,
                    spd: 64,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.4,
                weight_kg: 8.9,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tinkatuff"),
            SpeciesData {
                name: "Tinkatuff".to_owned(),
                num: 958,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 65,
                    atk: 55,
                    def: 55,
                    spa: 45,
                    spd: 82,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.7,
                weight_kg: 59.1,
                color: Color::Pink,
                prevo: Some(Id::from_known("tinkatink")),
                evo_level: Some(24),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tinkaton"),
            SpeciesData {
                name: "Tinkaton".to_owned(),
                num: 959,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 85,
                    atk: 75,
                    def: 77,
                    spa: 70,
                    spd: 105,
                    spe: 94,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.7,
                weight_kg: 112.8,
                color: Color::Pink,
                prevo: Some(Id::from_known("tinkatuff")),
                evo_level: Some(38),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wiglett"),
            SpeciesData {
                name: "Wiglett".to_owned(),
                num: 960,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 10,
                    atk: 55,
                    def: 25,
                    spa: 35,
                    spd: 25,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gooey")),
                    secondary: Some(Id::from_known("rattled")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 1.2,
                weight_kg: 1.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wugtrio"),
            SpeciesData {
                name: "Wugtrio".to_owned(),
                num: 961,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 35,
                    atk: 100,
                    def: 50,
                    spa: 50,
                    spd: 70,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gooey")),
                    secondary: Some(Id::from_known("rattled")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 1.2,
                weight_kg: 5.4,
                color: Color::Red,
                prevo: Some(Id::from_known("wiglett")),
                evo_level: Some(26),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bombirdier"),
            SpeciesData {
                name: "Bombirdier".to_owned(),
                num: 962,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 70,
                    atk: 103,
                    def: 85,
                    spa: 60,
                    spd: 85,
                    spe: 82,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("rockypayload")),
                },
                height_m: 1.5,
                weight_kg: 42.9,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("finizen"),
            SpeciesData {
                name: "Finizen".to_owned(),
                num: 963,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 45,
                    def: 40,
                    spa: 45,
                    spd: 40,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterveil")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 60.2,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("palafin"),
            SpeciesData {
                name: "Palafin".to_owned(),
                num: 964,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 100,
                    atk: 70,
                    def: 72,
                    spa: 53,
                    spd: 62,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("zerotohero")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 60.2,
                color: Color::Blue,
                base_forme: Some("Zero".to_owned()),
                prevo: Some(Id::from_known("finizen")),
                evo_level: Some(38),
                other_formes: Vec::from(["Hero".to_owned()]),
                forme_order: Vec::from(["Zero".to_owned(), "Hero".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("palafinhero"),
            SpeciesData {
                name: "Palafin-Hero".to_owned(),
                num: 964,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 100,
                    atk: 160,
                    def: 97,
                    spa: 106,
                    spd: 87,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("zerotohero")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 97.4,
                color: Color::Blue,
                base_species: Some(Id::from_known("palafin")),
                forme: Some("Hero".to_owned()),
                battle_only: Some("Zero".to_owned()),
                required_ability: Some(Id::from_known("zerotohero")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("varoom"),
            SpeciesData {
                name: "Varoom".to_owned(),
                num: 965,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 70,
                    def: 63,
                    spa: 30,
                    spd: 45,
                    spe: 47,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    hidden: Some(Id::from_known("slowstart")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 35.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("revavroom"),
            SpeciesData {
                name: "Revavroom".to_owned(),
                num: 966,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 119,
                    def: 90,
                    spa: 54,
                    spd: 67,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    hidden: Some(Id::from_known("filter")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 120.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("varoom")),
                evo_level: Some(40),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cyclizar"),
            SpeciesData {
                name: "Cyclizar".to_owned(),
                num: 967,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 70,
                    atk: 95,
                    def: 65,
                    spa: 85,
                    spd: 65,
                    spe: 121,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("regenerator")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 63.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("orthworm"),
            SpeciesData {
                name: "Orthworm".to_owned(),
                num: 968,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 145,
                    spa: 60,
                    spd: 55,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("eartheater")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 310.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("glimmet"),
            SpeciesData {
                name: "Glimmet".to_owned(),
                num: 969,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 48,
                    atk: 35,
                    def: 42,
                    spa: 105,
                    spd: 60,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toxicdebris")),
                    hidden: Some(Id::from_known("corrosion")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 8.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("glimmora"),
            SpeciesData {
                name: "Glimmora".to_owned(),
                num: 970,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 83,
                    atk: 55,
                    def: 90,
                    spa: 130,
                    spd: 81,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toxicdebris")),
                    hidden: Some(Id::from_known("corrosion")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 45.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("glimmet")),
                evo_level: Some(35),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greavard"),
            SpeciesData {
                name: "Greavard".to_owned(),
                num: 971,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 50,
                    atk: 61,
                    def: 60,
                    spa: 30,
                    spd: 55,
                    spe: 34,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("fluffy")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 35.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("houndstone"),
            SpeciesData {
                name: "Houndstone".to_owned(),
                num: 972,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 72,
                    atk: 101,
                    def: 100,
                    spa: 50,
                    spd: 97,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandrush")),
                    hidden: Some(Id::from_known("fluffy")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 15.0,
                color: Color::White,
                prevo: Some(Id::from_known("greavard")),
                evo_level: Some(30),
                ..Default::default()
            },
        ),
        (
            Id::from_known("flamigo"),
            SpeciesData {
                name: "Flamigo".to_owned(),
                num: 973,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 82,
                    atk: 115,
                    def: 74,
                    spa: 75,
                    spd: 64,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("scrappy")),
                    secondary: Some(Id::from_known("tangledfeet")),
                    hidden: Some(Id::from_known("costar")),
                },
                height_m: 1.6,
                weight_kg: 37.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cetoddle"),
            SpeciesData {
                name: "Cetoddle".to_owned(),
                num: 974,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 108,
                    atk: 68,
                    def: 45,
                    spa: 30,
                    spd: 40,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.2,
                weight_kg: 45.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cetitan"),
            SpeciesData {
                name: "Cetitan".to_owned(),
                num: 975,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 170,
                    atk: 113,
                    def: 65,
                    spa: 45,
                    spd: 55,
                    spe: 73,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("slushrush")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 4.5,
                weight_kg: 700.0,
                color: Color::White,
                prevo: Some(Id::from_known("cetoddle")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironhands"),
            SpeciesData {
                name: "Iron Hands".to_owned(),
                num: 992,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Electric),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 154,
                    atk: 140,
                    def: 108,
                    spa: 50,
                    spd: 68,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 380.7,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("veluza"),
            SpeciesData {
                name: "Veluza".to_owned(),
                num: 976,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 90,
                    atk: 102,
                    def: 73,
                    spa: 78,
                    spd: 65,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("sharpness")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 90.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dondozo"),
            SpeciesData {
                name: "Dondozo".to_owned(),
                num: 977,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 150,
                    atk: 100,
                    def: 115,
                    spa: 65,
                    spd: 65,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unaware")),
                    secondary: Some(Id::from_known("oblivious")),
                    hidden: Some(Id::from_known("waterveil")),
                },
                height_m: 12.0,
                weight_kg: 220.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tatsugiri"),
            SpeciesData {
                name: "Tatsugiri".to_owned(),
                num: 978,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 68,
                    atk: 50,
                    def: 60,
                    spa: 120,
                    spd: 95,
                    spe: 82,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("commander")),
                    hidden: Some(Id::from_known("stormdrain")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 8.0,
                color: Color::Red,
                base_forme: Some("Curly".to_owned()),
                cosmetic_formes: Vec::from(["Droopy".to_owned(), "Stretchy".to_owned()]),
                forme_order: Vec::from([
                    "Curly".to_owned(),
                    "Droopy".to_owned(),
                    "Stretchy".to_owned(),
                ]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("annihilape"),
            SpeciesData {
                name: "Annihilape".to_owned(),
                num: 979,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 110,
                    atk: 115,
                    def: 80,
                    spa: 50,
                    spd: 90,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 1.2,
                weight_kg: 56.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("primeape")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("clodsire"),
            SpeciesData {
                name: "Clodsire".to_owned(),
                num: 980,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 130,
                    atk: 75,
                    def: 60,
                    spa: 45,
                    spd: 100,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 1.8,
                weight_kg: 223.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("wooperpaldea")),
                evo_level: Some(20),
                ..Default::default()
            },
        ),
        (
            Id::from_known("farigiraf"),
            SpeciesData {
                name: "Farigiraf".to_owned(),
                num: 981,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 120,
                    atk: 90,
                    def: 70,
                    spa: 110,
                    spd: 70,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cudchew")),
                    secondary: Some(Id::from_known("armortail")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 3.2,
                weight_kg: 160.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("girafarig")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dudunsparce"),
            SpeciesData {
                name: "Dudunsparce".to_owned(),
                num: 982,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 125,
                    atk: 100,
                    def: 80,
                    spa: 85,
                    spd: 75,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 3.6,
                weight_kg: 39.2,
                color: Color::Yellow,
                base_forme: Some("Two-Segment".to_owned()),
                prevo: Some(Id::from_known("dunsparce")),
                other_formes: Vec::from(["Three-Segment".to_owned()]),
                forme_order: Vec::from(["Two-Segment".to_owned(), "Three-Segment".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dudunsparcethreesegment"),
            SpeciesData {
                name: "Dudunsparce-Three-Segment".to_owned(),
                num: 982,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 125,
                    atk: 100,
                    def: 80,
                    spa: 85,
                    spd: 75,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 4.5,
                weight_kg: 47.4,
                color: Color::Yellow,
                base_species: Some(Id::from_known("dudunsparce")),
                forme: Some("Three-Segment".to_owned()),
                prevo: Some(Id::from_known("dunsparce")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kingambit"),
            SpeciesData {
                name: "Kingambit".to_owned(),
                num: 983,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 100,
                    atk: 135,
                    def: 120,
                    spa: 60,
                    spd: 85,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defiant")),
                    secondary: Some(Id::from_known("supremeoverlord")),
                    hidden: Some(Id::from_known("pressure")),
                },
                height_m: 2.0,
                weight_kg: 120.0,
                color: Color::Black,
                prevo: Some(Id::from_known("bisharp")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greattusk"),
            SpeciesData {
                name: "Great Tusk".to_owned(),
                num: 984,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 115,
                    atk: 131,
                    def: 131,
                    spa: 53,
                    spd: 53,
                    spe: 87,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 320.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("screamtail"),
            SpeciesData {
                name: "Scream Tail".to_owned(),
                num: 985,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 115,
                    atk: 65,
                    def: 99,
                    spa: 65,
                    spd: 115,
                    spe: 111,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 8.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("brutebonnet"),
            SpeciesData {
                name: "Brute Bonnet".to_owned(),
                num: 986,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dark),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 111,
                    atk: 127,
                    def: 99,
                    spa: 79,
                    spd: 99,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 21.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("fluttermane"),
            SpeciesData {
                name: "Flutter Mane".to_owned(),
                num: 987,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 55,
                    spa: 135,
                    spd: 135,
                    spe: 135,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 4.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slitherwing"),
            SpeciesData {
                name: "Slither Wing".to_owned(),
                num: 988,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 85,
                    atk: 135,
                    def: 79,
                    spa: 85,
                    spd: 105,
                    spe: 81,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 3.2,
                weight_kg: 92.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandyshocks"),
            SpeciesData {
                name: "Sandy Shocks".to_owned(),
                num: 989,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 85,
                    atk: 81,
                    def: 97,
                    spa: 121,
                    spd: 85,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 60.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("irontreads"),
            SpeciesData {
                name: "Iron Treads".to_owned(),
                num: 990,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 112,
                    def: 120,
                    spa: 72,
                    spd: 70,
                    spe: 106,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 240.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironbundle"),
            SpeciesData {
                name: "Iron Bundle".to_owned(),
                num: 991,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 56,
                    atk: 80,
                    def: 114,
                    spa: 124,
                    spd: 60,
                    spe: 136,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 11.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironjugulis"),
            SpeciesData {
                name: "Iron Jugulis".to_owned(),
                num: 993,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 94,
                    atk: 80,
                    def: 86,
                    spa: 122,
                    spd: 80,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 111.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironmoth"),
            SpeciesData {
                name: "Iron Moth".to_owned(),
                num: 994,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Poison),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 70,
                    def: 60,
                    spa: 140,
                    spd: 110,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 36.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironthorns"),
            SpeciesData {
                name: "Iron Thorns".to_owned(),
                num: 995,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Electric),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 134,
                    def: 110,
                    spa: 70,
                    spd: 84,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 303.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("frigibax"),
            SpeciesData {
                name: "Frigibax".to_owned(),
                num: 996,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 65,
                    atk: 75,
                    def: 45,
                    spa: 35,
                    spd: 45,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thermalexchange")),
                    hidden: Some(Id::from_known("icebody")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 17.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arctibax"),
            SpeciesData {
                name: "Arctibax".to_owned(),
                num: 997,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 90,
                    atk: 95,
                    def: 66,
                    spa: 45,
                    spd: 65,
                    spe: 62,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thermalexchange")),
                    hidden: Some(Id::from_known("icebody")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 30.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("frigibax")),
                evo_level: Some(35),
                ..Default::default()
            },
        ),
        (
            Id::from_known("baxcalibur"),
            SpeciesData {
                name: "Baxcalibur".to_owned(),
                num: 998,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 115,
                    atk: 145,
                    def: 92,
                    spa: 75,
                    spd: 86,
                    spe: 87,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thermalexchange")),
                    hidden: Some(Id::from_known("icebody")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 210.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("arctibax")),
                evo_level: Some(54),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gimmighoul"),
            SpeciesData {
                name: "Gimmighoul".to_owned(),
                num: 999,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 70,
                    spa: 75,
                    spd: 70,
                    spe: 10,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rattled")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 5.0,
                color: Color::Red,
                base_forme: Some("Chest".to_owned()),
                other_formes: Vec::from(["Roaming".to_owned()]),
                forme_order: Vec::from(["Chest".to_owned(), "Roaming".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gimmighoulroaming"),
            SpeciesData {
                name: "Gimmighoul-Roaming".to_owned(),
                num: 999,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 25,
                    spa: 75,
                    spd: 45,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 0.1,
                color: Color::Gray,
                base_species: Some(Id::from_known("gimmighoul")),
                forme: Some("Roaming".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gholdengo"),
            SpeciesData {
                name: "Gholdengo".to_owned(),
                num: 1000,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 87,
                    atk: 60,
                    def: 95,
                    spa: 133,
                    spd: 91,
                    spe: 84,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("goodasgold")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 30.0,
                color: Color::Yellow,
                prevo: Some(Id::from_known("gimmighoul")),
                ..Default::default()
            },
        ),
    ])
}
