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

/// Species numbered 101 to 150.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("electrode"),
            SpeciesData {
                name: "Electrode".to_owned(),
                num: 101,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 70,
                    spa: 80,
                    spd: 80,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 1.2,
                weight_kg: 66.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("electrodehisui"),
            SpeciesData {
                name: "Electrode-Hisui".to_owned(),
                num: 101,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 70,
                    spa: 80,
                    spd: 80,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 1.2,
                weight_kg: 71.0,
                color: Color::Red,
                base_species: Some(Id::from_known("electrode")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("exeggcute"),
            SpeciesData {
                name: "Exeggcute".to_owned(),
                num: 102,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 60,
                    atk: 40,
                    def: 80,
                    spa: 60,
                    spd: 45,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 2.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("exeggutor"),
            SpeciesData {
                name: "Exeggutor".to_owned(),
                num: 103,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 85,
                    spa: 125,
                    spd: 75,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 120.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("exeggutoralola"),
            SpeciesData {
                name: "Exeggutor-Alola".to_owned(),
                num: 103,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 95,
                    atk: 105,
                    def: 85,
                    spa: 125,
                    spd: 75,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 10.9,
                weight_kg: 415.6,
                color: Color::Yellow,
                base_species: Some(Id::from_known("exeggutor")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cubone"),
            SpeciesData {
                name: "Cubone".to_owned(),
                num: 104,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 95,
                    spa: 40,
                    spd: 50,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("lightningrod")),
                    hidden: Some(Id::from_known("battlearmor")),
                },
                height_m: 0.4,
                weight_kg: 6.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("marowak"),
            SpeciesData {
                name: "Marowak".to_owned(),
                num: 105,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 60,
                    atk: 80,
                    def: 110,
                    spa: 50,
                    spd: 80,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("lightningrod")),
                    hidden: Some(Id::from_known("battlearmor")),
                },
                height_m: 1.0,
                weight_kg: 45.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("marowakalola"),
            SpeciesData {
                name: "Marowak-Alola".to_owned(),
                num: 105,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 60,
                    atk: 80,
                    def: 110,
                    spa: 50,
                    spd: 80,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cursedbody")),
                    secondary: Some(Id::from_known("lightningrod")),
                    hidden: Some(Id::from_known("rockhead")),
                },
                height_m: 1.0,
                weight_kg: 34.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("marowak")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("marowakalolatotem"),
            SpeciesData {
                name: "Marowak-Alola-Totem".to_owned(),
                num: 105,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 60,
                    atk: 80,
                    def: 110,
                    spa: 50,
                    spd: 80,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 98.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("marowak")),
                forme: Some("Alola-Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("hitmonlee"),
            SpeciesData {
                name: "Hitmonlee".to_owned(),
                num: 106,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 50,
                    atk: 120,
                    def: 53,
                    spa: 35,
                    spd: 110,
                    spe: 87,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("reckless")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.5,
                weight_kg: 49.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hitmonchan"),
            SpeciesData {
                name: "Hitmonchan".to_owned(),
                num: 107,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 50,
                    atk: 105,
                    def: 79,
                    spa: 35,
                    spd: 110,
                    spe: 76,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("hypercutter")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 1.4,
                weight_kg: 50.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lickitung"),
            SpeciesData {
                name: "Lickitung".to_owned(),
                num: 108,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 90,
                    atk: 55,
                    def: 75,
                    spa: 60,
                    spd: 75,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("oblivious")),
                    hidden: Some(Id::from_known("cloudnine")),
                },
                height_m: 1.2,
                weight_kg: 65.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("koffing"),
            SpeciesData {
                name: "Koffing".to_owned(),
                num: 109,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 40,
                    atk: 65,
                    def: 95,
                    spa: 60,
                    spd: 45,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    secondary: Some(Id::from_known("neutralizinggas")),
                    hidden: Some(Id::from_known("stench")),
                },
                height_m: 0.6,
                weight_kg: 1.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("weezing"),
            SpeciesData {
                name: "Weezing".to_owned(),
                num: 110,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 120,
                    spa: 85,
                    spd: 70,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    secondary: Some(Id::from_known("neutralizinggas")),
                    hidden: Some(Id::from_known("stench")),
                },
                height_m: 1.2,
                weight_kg: 9.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("weezinggalar"),
            SpeciesData {
                name: "Weezing-Galar".to_owned(),
                num: 110,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 120,
                    spa: 85,
                    spd: 70,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    secondary: Some(Id::from_known("neutralizinggas")),
                    hidden: Some(Id::from_known("mistysurge")),
                },
                height_m: 3.0,
                weight_kg: 16.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("weezing")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rhyhorn"),
            SpeciesData {
                name: "Rhyhorn".to_owned(),
                num: 111,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 80,
                    atk: 85,
                    def: 95,
                    spa: 30,
                    spd: 30,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    secondary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("reckless")),
                },
                height_m: 1.0,
                weight_kg: 115.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rhydon"),
            SpeciesData {
                name: "Rhydon".to_owned(),
                num: 112,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 105,
                    atk: 130,
                    def: 120,
                    spa: 45,
                    spd: 45,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    secondary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("reckless")),
                },
                height_m: 1.9,
                weight_kg: 120.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("chansey"),
            SpeciesData {
                name: "Chansey".to_owned(),
                num: 113,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 250,
                    atk: 5,
                    def: 5,
                    spa: 35,
                    spd: 105,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("serenegrace")),
                    hidden: Some(Id::from_known("healer")),
                },
                height_m: 1.1,
                weight_kg: 34.6,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tangela"),
            SpeciesData {
                name: "Tangela".to_owned(),
                num: 114,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 65,
                    atk: 55,
                    def: 115,
                    spa: 100,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.0,
                weight_kg: 35.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kangaskhan"),
            SpeciesData {
                name: "Kangaskhan".to_owned(),
                num: 115,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 105,
                    atk: 95,
                    def: 80,
                    spa: 40,
                    spd: 80,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("earlybird")),
                    secondary: Some(Id::from_known("scrappy")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 2.2,
                weight_kg: 80.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kangaskhanmega"),
            SpeciesData {
                name: "Kangaskhan-Mega".to_owned(),
                num: 115,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 105,
                    atk: 125,
                    def: 100,
                    spa: 60,
                    spd: 100,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("parentalbond")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 100.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("kangaskhan")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("horsea"),
            SpeciesData {
                name: "Horsea".to_owned(),
                num: 116,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 30,
                    atk: 40,
                    def: 70,
                    spa: 70,
                    spd: 25,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 0.4,
                weight_kg: 8.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("seadra"),
            SpeciesData {
                name: "Seadra".to_owned(),
                num: 117,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 65,
                    def: 95,
                    spa: 95,
                    spd: 45,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 1.2,
                weight_kg: 25.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("goldeen"),
            SpeciesData {
                name: "Goldeen".to_owned(),
                num: 118,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 45,
                    atk: 67,
                    def: 60,
                    spa: 35,
                    spd: 50,
                    spe: 63,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("waterveil")),
                    hidden: Some(Id::from_known("lightningrod")),
                },
                height_m: 0.6,
                weight_kg: 15.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("seaking"),
            SpeciesData {
                name: "Seaking".to_owned(),
                num: 119,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 80,
                    atk: 92,
                    def: 65,
                    spa: 65,
                    spd: 80,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("waterveil")),
                    hidden: Some(Id::from_known("lightningrod")),
                },
                height_m: 1.3,
                weight_kg: 39.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("staryu"),
            SpeciesData {
                name: "Staryu".to_owned(),
                num: 120,
                primary_type: Type::Water,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 30,
                    atk: 45,
                    def: 55,
                    spa: 70,
                    spd: 55,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.8,
                weight_kg: 34.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("starmie"),
            SpeciesData {
                name: "Starmie".to_owned(),
                num: 121,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 75,
                    def: 85,
                    spa: 100,
                    spd: 85,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 1.1,
                weight_kg: 80.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("starmiemega"),
            SpeciesData {
                name: "Starmie-Mega".to_owned(),
                num: 121,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 140,
                    def: 105,
                    spa: 130,
                    spd: 105,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 2.3,
                weight_kg: 80.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("starmie")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mrmime"),
            SpeciesData {
                name: "Mr. Mime".to_owned(),
                num: 122,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 65,
                    spa: 100,
                    spd: 120,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    secondary: Some(Id::from_known("filter")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 1.3,
                weight_kg: 54.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mrmimegalar"),
            SpeciesData {
                name: "Mr. Mime-Galar".to_owned(),
                num: 122,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 65,
                    spa: 90,
                    spd: 90,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("screencleaner")),
                    hidden: Some(Id::from_known("icebody")),
                },
                height_m: 1.4,
                weight_kg: 56.8,
                color: Color::White,
                base_species: Some(Id::from_known("mrmime")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("scyther"),
            SpeciesData {
                name: "Scyther".to_owned(),
                num: 123,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 70,
                    atk: 110,
                    def: 80,
                    spa: 55,
                    spd: 80,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 1.5,
                weight_kg: 56.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("jynx"),
            SpeciesData {
                name: "Jynx".to_owned(),
                num: 124,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 65,
                    atk: 50,
                    def: 35,
                    spa: 115,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("forewarn")),
                    hidden: Some(Id::from_known("dryskin")),
                },
                height_m: 1.4,
                weight_kg: 40.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("electabuzz"),
            SpeciesData {
                name: "Electabuzz".to_owned(),
                num: 125,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 65,
                    atk: 83,
                    def: 57,
                    spa: 95,
                    spd: 85,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 30.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("magmar"),
            SpeciesData {
                name: "Magmar".to_owned(),
                num: 126,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 95,
                    def: 57,
                    spa: 100,
                    spd: 85,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 44.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pinsir"),
            SpeciesData {
                name: "Pinsir".to_owned(),
                num: 127,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 65,
                    atk: 125,
                    def: 100,
                    spa: 55,
                    spd: 70,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 1.5,
                weight_kg: 55.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pinsirmega"),
            SpeciesData {
                name: "Pinsir-Mega".to_owned(),
                num: 127,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 155,
                    def: 120,
                    spa: 65,
                    spd: 90,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aerilate")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 59.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("pinsir")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tauros"),
            SpeciesData {
                name: "Tauros".to_owned(),
                num: 128,
                primary_type: Type::Normal,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 75,
                    atk: 100,
                    def: 95,
                    spa: 40,
                    spd: 70,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.4,
                weight_kg: 88.4,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("taurospaldeacombat"),
            SpeciesData {
                name: "Tauros-Paldea-Combat".to_owned(),
                num: 128,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 75,
                    atk: 110,
                    def: 105,
                    spa: 30,
                    spd: 70,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("cudchew")),
                },
                height_m: 1.4,
                weight_kg: 115.0,
                color: Color::Black,
                base_species: Some(Id::from_known("tauros")),
                forme: Some("Paldea-Combat".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("taurospaldeablaze"),
            SpeciesData {
                name: "Tauros-Paldea-Blaze".to_owned(),
                num: 128,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 75,
                    atk: 110,
                    def: 105,
                    spa: 30,
                    spd: 70,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("cudchew")),
                },
                height_m: 1.4,
                weight_kg: 85.0,
                color: Color::Black,
                base_species: Some(Id::from_known("tauros")),
                forme: Some("Paldea-Blaze".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("taurospaldeaaqua"),
            SpeciesData {
                name: "Tauros-Paldea-Aqua".to_owned(),
                num: 128,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 75,
                    atk: 110,
                    def: 105,
                    spa: 30,
                    spd: 70,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("cudchew")),
                },
                height_m: 1.4,
                weight_kg: 110.0,
                color: Color::Black,
                base_species: Some(Id::from_known("tauros")),
                forme: Some("Paldea-Aqua".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("magikarp"),
            SpeciesData {
                name: "Magikarp".to_owned(),
                num: 129,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 20,
                    atk: 10,
                    def: 55,
                    spa: 15,
                    spd: 20,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("rattled")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 10.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gyarados"),
            SpeciesData {
                name: "Gyarados".to_owned(),
                num: 130,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 95,
                    atk: 125,
                    def: 79,
                    spa: 60,
                    spd: 100,
                    spe: 81,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("moxie")),
                    ..Default::default()
                },
                height_m: 6.5,
                weight_kg: 235.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gyaradosmega"),
            SpeciesData {
                name: "Gyarados-Mega".to_owned(),
                num: 130,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 95,
                    atk: 155,
                    def: 109,
                    spa: 70,
                    spd: 130,
                    spe: 81,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    ..Default::default()
                },
                height_m: 6.5,
                weight_kg: 305.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("gyarados")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lapras"),
            SpeciesData {
                name: "Lapras".to_owned(),
                num: 131,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 130,
                    atk: 85,
                    def: 80,
                    spa: 85,
                    spd: 95,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("hydration")),
                },
                height_m: 2.5,
                weight_kg: 220.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("laprasgmax"),
            SpeciesData {
                name: "Lapras-Gmax".to_owned(),
                num: 131,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 130,
                    atk: 85,
                    def: 80,
                    spa: 85,
                    spd: 95,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("hydration")),
                },
                height_m: 24.0,
                weight_kg: 0.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("lapras")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ditto"),
            SpeciesData {
                name: "Ditto".to_owned(),
                num: 132,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 48,
                    atk: 48,
                    def: 48,
                    spa: 48,
                    spd: 48,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("imposter")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 4.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eevee"),
            SpeciesData {
                name: "Eevee".to_owned(),
                num: 133,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 50,
                    spa: 45,
                    spd: 65,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("anticipation")),
                },
                height_m: 0.3,
                weight_kg: 6.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eeveestarter"),
            SpeciesData {
                name: "Eevee-Starter".to_owned(),
                num: 133,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 65,
                    atk: 75,
                    def: 70,
                    spa: 65,
                    spd: 85,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("anticipation")),
                },
                height_m: 0.3,
                weight_kg: 6.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("eevee")),
                forme: Some("Starter".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("eeveegmax"),
            SpeciesData {
                name: "Eevee-Gmax".to_owned(),
                num: 133,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 50,
                    spa: 45,
                    spd: 65,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("anticipation")),
                },
                height_m: 18.0,
                weight_kg: 0.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("eevee")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vaporeon"),
            SpeciesData {
                name: "Vaporeon".to_owned(),
                num: 134,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 130,
                    atk: 65,
                    def: 60,
                    spa: 110,
                    spd: 95,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("hydration")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 29.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("jolteon"),
            SpeciesData {
                name: "Jolteon".to_owned(),
                num: 135,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 65,
                    atk: 65,
                    def: 60,
                    spa: 110,
                    spd: 95,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    hidden: Some(Id::from_known("quickfeet")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 24.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("flareon"),
            SpeciesData {
                name: "Flareon".to_owned(),
                num: 136,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 130,
                    def: 60,
                    spa: 95,
                    spd: 110,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("guts")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 25.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("porygon"),
            SpeciesData {
                name: "Porygon".to_owned(),
                num: 137,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 70,
                    spa: 85,
                    spd: 75,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("trace")),
                    secondary: Some(Id::from_known("download")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.8,
                weight_kg: 36.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("omanyte"),
            SpeciesData {
                name: "Omanyte".to_owned(),
                num: 138,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 35,
                    atk: 40,
                    def: 100,
                    spa: 90,
                    spd: 55,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.4,
                weight_kg: 7.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("omastar"),
            SpeciesData {
                name: "Omastar".to_owned(),
                num: 139,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 70,
                    atk: 60,
                    def: 125,
                    spa: 115,
                    spd: 70,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.0,
                weight_kg: 35.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kabuto"),
            SpeciesData {
                name: "Kabuto".to_owned(),
                num: 140,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 30,
                    atk: 80,
                    def: 90,
                    spa: 55,
                    spd: 45,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("battlearmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.5,
                weight_kg: 11.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kabutops"),
            SpeciesData {
                name: "Kabutops".to_owned(),
                num: 141,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 60,
                    atk: 115,
                    def: 105,
                    spa: 65,
                    spd: 70,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("battlearmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.3,
                weight_kg: 40.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("aerodactyl"),
            SpeciesData {
                name: "Aerodactyl".to_owned(),
                num: 142,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 105,
                    def: 65,
                    spa: 60,
                    spd: 75,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.8,
                weight_kg: 59.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("aerodactylmega"),
            SpeciesData {
                name: "Aerodactyl-Mega".to_owned(),
                num: 142,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 135,
                    def: 85,
                    spa: 70,
                    spd: 95,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 79.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("aerodactyl")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("snorlax"),
            SpeciesData {
                name: "Snorlax".to_owned(),
                num: 143,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 160,
                    atk: 110,
                    def: 65,
                    spa: 65,
                    spd: 110,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("immunity")),
                    secondary: Some(Id::from_known("thickfat")),
                    hidden: Some(Id::from_known("gluttony")),
                },
                height_m: 2.1,
                weight_kg: 460.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("snorlaxgmax"),
            SpeciesData {
                name: "Snorlax-Gmax".to_owned(),
                num: 143,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 160,
                    atk: 110,
                    def: 65,
                    spa: 65,
                    spd: 110,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("immunity")),
                    secondary: Some(Id::from_known("thickfat")),
                    hidden: Some(Id::from_known("gluttony")),
                },
                height_m: 35.0,
                weight_kg: 0.0,
                color: Color::Black,
                base_species: Some(Id::from_known("snorlax")),
                forme: Some("Gmax".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("articuno"),
            SpeciesData {
                name: "Articuno".to_owned(),
                num: 144,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 85,
                    def: 100,
                    spa: 95,
                    spd: 125,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("snowcloak")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 55.4,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("articunogalar"),
            SpeciesData {
                name: "Articuno-Galar".to_owned(),
                num: 144,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 85,
                    def: 85,
                    spa: 125,
                    spd: 100,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("competitive")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 50.9,
                color: Color::Purple,
                base_species: Some(Id::from_known("articuno")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zapdos"),
            SpeciesData {
                name: "Zapdos".to_owned(),
                num: 145,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 90,
                    def: 85,
                    spa: 125,
                    spd: 90,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("static")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 52.6,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zapdosgalar"),
            SpeciesData {
                name: "Zapdos-Galar".to_owned(),
                num: 145,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 125,
                    def: 90,
                    spa: 85,
                    spd: 90,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 58.2,
                color: Color::Yellow,
                base_species: Some(Id::from_known("zapdos")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("moltres"),
            SpeciesData {
                name: "Moltres".to_owned(),
                num: 146,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 100,
                    def: 90,
                    spa: 125,
                    spd: 85,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("flamebody")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 60.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("moltresgalar"),
            SpeciesData {
                name: "Moltres-Galar".to_owned(),
                num: 146,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 85,
                    def: 90,
                    spa: 100,
                    spd: 125,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("berserk")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 66.0,
                color: Color::Red,
                base_species: Some(Id::from_known("moltres")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dratini"),
            SpeciesData {
                name: "Dratini".to_owned(),
                num: 147,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 41,
                    atk: 64,
                    def: 45,
                    spa: 50,
                    spd: 50,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("marvelscale")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 3.3,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragonair"),
            SpeciesData {
                name: "Dragonair".to_owned(),
                num: 148,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 61,
                    atk: 84,
                    def: 65,
                    spa: 70,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("marvelscale")),
                    ..Default::default()
                },
                height_m: 4.0,
                weight_kg: 16.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragonite"),
            SpeciesData {
                name: "Dragonite".to_owned(),
                num: 149,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 91,
                    atk: 134,
                    def: 95,
                    spa: 100,
                    spd: 100,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("multiscale")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 210.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragonitemega"),
            SpeciesData {
                name: "Dragonite-Mega".to_owned(),
                num: 149,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 91,
                    atk: 124,
                    def: 115,
                    spa: 145,
                    spd: 125,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("multiscale")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 290.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("dragonite")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mewtwo"),
            SpeciesData {
                name: "Mewtwo".to_owned(),
                num: 150,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 106,
                    atk: 110,
                    def: 90,
                    spa: 154,
                    spd: 90,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("unnerve")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 122.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mewtwomegax"),
            SpeciesData {
                name: "Mewtwo-Mega-X".to_owned(),
                num: 150,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 106,
                    atk: 190,
                    def: 100,
                    spa: 154,
                    spd: 100,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steadfast")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 127.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("mewtwo")),
                forme: Some("Mega-X".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mewtwomegay"),
            SpeciesData {
                name: "Mewtwo-Mega-Y".to_owned(),
                num: 150,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 106,
                    atk: 150,
                    def: 70,
                    spa: 194,
                    spd: 120,
                    spe: 140,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 33.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("mewtwo")),
                forme: Some("Mega-Y".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
