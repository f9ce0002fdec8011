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

/// Species numbered 601 to 650.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("klinklang"),
            SpeciesData {
                name: "Klinklang".to_owned(),
                num: 601,
                primary_type: Type::Steel,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 100,
                    def: 115,
                    spa: 70,
                    spd: 85,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("plus")),
                    secondary: Some(Id::from_known("minus")),
                    hidden: Some(Id::from_known("clearbody")),
                },
                height_m: 0.6,
                weight_kg: 81.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("klang")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tynamo"),
            SpeciesData {
                name: "Tynamo".to_owned(),
                num: 602,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 45,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.3,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("eelektrik"),
            SpeciesData {
                name: "Eelektrik".to_owned(),
                num: 603,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 65,
                    atk: 85,
                    def: 70,
                    spa: 75,
                    spd: 70,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 22.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("tynamo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("eelektross"),
            SpeciesData {
                name: "Eelektross".to_owned(),
                num: 604,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 85,
                    atk: 115,
                    def: 80,
                    spa: 105,
                    spd: 80,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 80.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("eelektrik")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("eelektrossmega"),
            SpeciesData {
                name: "Eelektross-Mega".to_owned(),
                num: 604,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 85,
                    atk: 145,
                    def: 80,
                    spa: 135,
                    spd: 90,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 160.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("eelektross")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("elgyem"),
            SpeciesData {
                name: "Elgyem".to_owned(),
                num: 605,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 55,
                    spa: 85,
                    spd: 55,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("telepathy")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.5,
                weight_kg: 9.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("beheeyem"),
            SpeciesData {
                name: "Beheeyem".to_owned(),
                num: 606,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 75,
                    atk: 75,
                    def: 75,
                    spa: 125,
                    spd: 95,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("telepathy")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 1.0,
                weight_kg: 34.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("elgyem")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("litwick"),
            SpeciesData {
                name: "Litwick".to_owned(),
                num: 607,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 50,
                    atk: 30,
                    def: 55,
                    spa: 65,
                    spd: 55,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.3,
                weight_kg: 3.1,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lampent"),
            SpeciesData {
                name: "Lampent".to_owned(),
                num: 608,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 60,
                    atk: 40,
                    def: 60,
                    spa: 95,
                    spd: 60,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.6,
                weight_kg: 13.0,
                color: Color::Black,
                prevo: Some(Id::from_known("litwick")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chandelure"),
            SpeciesData {
                name: "Chandelure".to_owned(),
                num: 609,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 90,
                    spa: 145,
                    spd: 90,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 1.0,
                weight_kg: 34.3,
                color: Color::Black,
                prevo: Some(Id::from_known("lampent")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chandeluremega"),
            SpeciesData {
                name: "Chandelure-Mega".to_owned(),
                num: 609,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 60,
                    atk: 75,
                    def: 110,
                    spa: 175,
                    spd: 110,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    secondary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 2.5,
                weight_kg: 69.6,
                color: Color::Black,
                base_species: Some(Id::from_known("chandelure")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("axew"),
            SpeciesData {
                name: "Axew".to_owned(),
                num: 610,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 46,
                    atk: 87,
                    def: 60,
                    spa: 30,
                    spd: 40,
                    spe: 57,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 0.6,
                weight_kg: 18.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("fraxure"),
            SpeciesData {
                name: "Fraxure".to_owned(),
                num: 611,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 66,
                    atk: 117,
                    def: 70,
                    spa: 40,
                    spd: 50,
                    spe: 67,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.0,
                weight_kg: 36.0,
                color: Color::Green,
                prevo: Some(Id::from_known("axew")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("haxorus"),
            SpeciesData {
                name: "Haxorus".to_owned(),
                num: 612,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 76,
                    atk: 147,
                    def: 90,
                    spa: 60,
                    spd: 70,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.8,
                weight_kg: 105.5,
                color: Color::Yellow,
                prevo: Some(Id::from_known("fraxure")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cubchoo"),
            SpeciesData {
                name: "Cubchoo".to_owned(),
                num: 613,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 55,
                    atk: 70,
                    def: 40,
                    spa: 60,
                    spd: 40,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    secondary: Some(Id::from_known("slushrush")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 0.5,
                weight_kg: 8.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("beartic"),
            SpeciesData {
                name: "Beartic".to_owned(),
                num: 614,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 95,
                    atk: 130,
                    def: 80,
                    spa: 70,
                    spd: 80,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    secondary: Some(Id::from_known("slushrush")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 2.6,
                weight_kg: 260.0,
                color: Color::White,
                prevo: Some(Id::from_known("cubchoo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cryogonal"),
            SpeciesData {
                name: "Cryogonal".to_owned(),
                num: 615,
                primary_type: Type::Ice,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 50,
                    def: 50,
                    spa: 95,
                    spd: 135,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 148.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shelmet"),
            SpeciesData {
                name: "Shelmet".to_owned(),
                num: 616,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 50,
                    atk: 40,
                    def: 85,
                    spa: 40,
                    spd: 65,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hydration")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 0.4,
                weight_kg: 7.7,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("accelgor"),
            SpeciesData {
                name: "Accelgor".to_owned(),
                num: 617,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 80,
                    atk: 70,
                    def: 40,
                    spa: 100,
                    spd: 60,
                    spe: 145,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hydration")),
                    secondary: Some(Id::from_known("stickyhold")),
                    hidden: Some(Id::from_known("unburden")),
                },
                height_m: 0.8,
                weight_kg: 25.3,
                color: Color::Red,
                prevo: Some(Id::from_known("shelmet")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("stunfisk"),
            SpeciesData {
                name: "Stunfisk".to_owned(),
                num: 618,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 109,
                    atk: 66,
                    def: 84,
                    spa: 81,
                    spd: 99,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    secondary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 0.7,
                weight_kg: 11.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("stunfiskgalar"),
            SpeciesData {
                name: "Stunfisk-Galar".to_owned(),
                num: 618,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 109,
                    atk: 81,
                    def: 99,
                    spa: 66,
                    spd: 84,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("mimicry")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 20.5,
                color: Color::Green,
                base_species: Some(Id::from_known("stunfisk")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mienfoo"),
            SpeciesData {
                name: "Mienfoo".to_owned(),
                num: 619,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 45,
                    atk: 85,
                    def: 50,
                    spa: 55,
                    spd: 50,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("reckless")),
                },
                height_m: 0.9,
                weight_kg: 20.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mienshao"),
            SpeciesData {
                name: "Mienshao".to_owned(),
                num: 620,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 65,
                    atk: 125,
                    def: 60,
                    spa: 95,
                    spd: 60,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("reckless")),
                },
                height_m: 1.4,
                weight_kg: 35.5,
                color: Color::Purple,
                prevo: Some(Id::from_known("mienfoo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("druddigon"),
            SpeciesData {
                name: "Druddigon".to_owned(),
                num: 621,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 77,
                    atk: 120,
                    def: 90,
                    spa: 60,
                    spd: 90,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("roughskin")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.6,
                weight_kg: 139.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golett"),
            SpeciesData {
                name: "Golett".to_owned(),
                num: 622,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 59,
                    atk: 74,
                    def: 50,
                    spa: 35,
                    spd: 50,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironfist")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("noguard")),
                },
                height_m: 1.0,
                weight_kg: 92.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golurk"),
            SpeciesData {
                name: "Golurk".to_owned(),
                num: 623,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 89,
                    atk: 124,
                    def: 80,
                    spa: 55,
                    spd: 80,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironfist")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("noguard")),
                },
                height_m: 2.8,
                weight_kg: 330.0,
                color: Color::Green,
                prevo: Some(Id::from_known("golett")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pawniard"),
            SpeciesData {
                name: "Pawniard".to_owned(),
                num: 624,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 45,
                    atk: 85,
                    def: 70,
                    spa: 40,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defiant")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("pressure")),
                },
                height_m: 0.5,
                weight_kg: 10.2,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bisharp"),
            SpeciesData {
                name: "Bisharp".to_owned(),
                num: 625,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 65,
                    atk: 125,
                    def: 100,
                    spa: 60,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defiant")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("pressure")),
                },
                height_m: 1.6,
                weight_kg: 70.0,
                color: Color::Red,
                prevo: Some(Id::from_known("pawniard")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bouffalant"),
            SpeciesData {
                name: "Bouffalant".to_owned(),
                num: 626,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 95,
                    atk: 110,
                    def: 95,
                    spa: 40,
                    spd: 95,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("reckless")),
                    secondary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("soundproof")),
                },
                height_m: 1.6,
                weight_kg: 94.6,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rufflet"),
            SpeciesData {
                name: "Rufflet".to_owned(),
                num: 627,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 70,
                    atk: 83,
                    def: 50,
                    spa: 37,
                    spd: 50,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.5,
                weight_kg: 10.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("braviary"),
            SpeciesData {
                name: "Braviary".to_owned(),
                num: 628,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 100,
                    atk: 123,
                    def: 75,
                    spa: 57,
                    spd: 75,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 1.5,
                weight_kg: 41.0,
                color: Color::Red,
                prevo: Some(Id::from_known("rufflet")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("braviaryhisui"),
            SpeciesData {
                name: "Braviary-Hisui".to_owned(),
                num: 628,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 110,
                    atk: 83,
                    def: 70,
                    spa: 112,
                    spd: 70,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("tintedlens")),
                },
                height_m: 1.7,
                weight_kg: 43.4,
                color: Color::White,
                base_species: Some(Id::from_known("braviary")),
                forme: Some("Hisui".to_owned()),
                prevo: Some(Id::from_known("rufflet")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vullaby"),
            SpeciesData {
                name: "Vullaby".to_owned(),
                num: 629,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 55,
                    def: 75,
                    spa: 45,
                    spd: 65,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("overcoat")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.5,
                weight_kg: 9.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mandibuzz"),
            SpeciesData {
                name: "Mandibuzz".to_owned(),
                num: 630,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 110,
                    atk: 65,
                    def: 105,
                    spa: 55,
                    spd: 95,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("overcoat")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.2,
                weight_kg: 39.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("vullaby")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("heatmor"),
            SpeciesData {
                name: "Heatmor".to_owned(),
                num: 631,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 85,
                    atk: 97,
                    def: 66,
                    spa: 105,
                    spd: 66,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("whitesmoke")),
                },
                height_m: 1.4,
                weight_kg: 58.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("durant"),
            SpeciesData {
                name: "Durant".to_owned(),
                num: 632,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 58,
                    atk: 109,
                    def: 112,
                    spa: 48,
                    spd: 48,
                    spe: 109,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("truant")),
                },
                height_m: 0.3,
                weight_kg: 33.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("deino"),
            SpeciesData {
                name: "Deino".to_owned(),
                num: 633,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 52,
                    atk: 65,
                    def: 50,
                    spa: 45,
                    spd: 50,
                    spe: 38,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 17.3,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zweilous"),
            SpeciesData {
                name: "Zweilous".to_owned(),
                num: 634,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 72,
                    atk: 85,
                    def: 70,
                    spa: 65,
                    spd: 70,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 50.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("deino")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("hydreigon"),
            SpeciesData {
                name: "Hydreigon".to_owned(),
                num: 635,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 92,
                    atk: 105,
                    def: 90,
                    spa: 125,
                    spd: 90,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 160.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("zweilous")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("larvesta"),
            SpeciesData {
                name: "Larvesta".to_owned(),
                num: 636,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 55,
                    atk: 85,
                    def: 55,
                    spa: 50,
                    spd: 55,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("swarm")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 28.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("volcarona"),
            SpeciesData {
                name: "Volcarona".to_owned(),
                num: 637,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 85,
                    atk: 60,
                    def: 65,
                    spa: 135,
                    spd: 105,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("swarm")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 46.0,
                color: Color::White,
                prevo: Some(Id::from_known("larvesta")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cobalion"),
            SpeciesData {
                name: "Cobalion".to_owned(),
                num: 638,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 91,
                    atk: 90,
                    def: 129,
                    spa: 90,
                    spd: 72,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("justified")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 250.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("terrakion"),
            SpeciesData {
                name: "Terrakion".to_owned(),
                num: 639,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 91,
                    atk: 129,
                    def: 90,
                    spa: 72,
                    spd: 90,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("justified")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 260.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("virizion"),
            SpeciesData {
                name: "Virizion".to_owned(),
                num: 640,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 91,
                    atk: 90,
                    def: 72,
                    spa: 90,
                    spd: 129,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("justified")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 200.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tornadus"),
            SpeciesData {
                name: "Tornadus".to_owned(),
                num: 641,
                primary_type: Type::Flying,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 79,
                    atk: 115,
                    def: 70,
                    spa: 125,
                    spd: 80,
                    spe: 111,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    hidden: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 63.0,
                color: Color::Green,
                base_forme: Some("Incarnate".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tornadustherian"),
            SpeciesData {
                name: "Tornadus-Therian".to_owned(),
                num: 641,
                primary_type: Type::Flying,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 79,
                    atk: 100,
                    def: 80,
                    spa: 110,
                    spd: 90,
                    spe: 121,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("regenerator")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 63.0,
                color: Color::Green,
                base_species: Some(Id::from_known("tornadus")),
                forme: Some("Therian".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("thundurus"),
            SpeciesData {
                name: "Thundurus".to_owned(),
                num: 642,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 79,
                    atk: 115,
                    def: 70,
                    spa: 125,
                    spd: 80,
                    spe: 111,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    hidden: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 61.0,
                color: Color::Blue,
                base_forme: Some("Incarnate".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("thundurustherian"),
            SpeciesData {
                name: "Thundurus-Therian".to_owned(),
                num: 642,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 79,
                    atk: 105,
                    def: 70,
                    spa: 145,
                    spd: 80,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 61.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("thundurus")),
                forme: Some("Therian".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("reshiram"),
            SpeciesData {
                name: "Reshiram".to_owned(),
                num: 643,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 120,
                    def: 100,
                    spa: 150,
                    spd: 120,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("turboblaze")),
                    ..Default::default()
                },
                height_m: 3.2,
                weight_kg: 330.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zekrom"),
            SpeciesData {
                name: "Zekrom".to_owned(),
                num: 644,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Electric),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 150,
                    def: 120,
                    spa: 120,
                    spd: 100,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("teravolt")),
                    ..Default::default()
                },
                height_m: 2.9,
                weight_kg: 345.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("landorus"),
            SpeciesData {
                name: "Landorus".to_owned(),
                num: 645,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 89,
                    atk: 125,
                    def: 90,
                    spa: 115,
                    spd: 80,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandforce")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 68.0,
                color: Color::Brown,
                base_forme: Some("Incarnate".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("landorustherian"),
            SpeciesData {
                name: "Landorus-Therian".to_owned(),
                num: 645,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 89,
                    atk: 145,
                    def: 90,
                    spa: 105,
                    spd: 80,
                    spe: 91,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 68.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("landorus")),
                forme: Some("Therian".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kyurem"),
            SpeciesData {
                name: "Kyurem".to_owned(),
                num: 646,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 125,
                    atk: 130,
                    def: 90,
                    spa: 130,
                    spd: 90,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 325.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kyuremblack"),
            SpeciesData {
                name: "Kyurem-Black".to_owned(),
                num: 646,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 125,
                    atk: 170,
                    def: 100,
                    spa: 120,
                    spd: 90,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("teravolt")),
                    ..Default::default()
                },
                height_m: 3.3,
                weight_kg: 325.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("kyurem")),
                forme: Some("Black".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kyuremwhite"),
            SpeciesData {
                name: "Kyurem-White".to_owned(),
                num: 646,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 125,
                    atk: 120,
                    def: 90,
                    spa: 170,
                    spd: 100,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("turboblaze")),
                    ..Default::default()
                },
                height_m: 3.6,
                weight_kg: 325.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("kyurem")),
                forme: Some("White".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("keldeo"),
            SpeciesData {
                name: "Keldeo".to_owned(),
                num: 647,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 91,
                    atk: 72,
                    def: 90,
                    spa: 129,
                    spd: 90,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("justified")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 48.5,
                color: Color::Yellow,
                base_forme: Some("Ordinary".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("keldeoresolute"),
            SpeciesData {
                name: "Keldeo-Resolute".to_owned(),
                num: 647,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 91,
                    atk: 72,
                    def: 90,
                    spa: 129,
                    spd: 90,
                    spe: 108,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("justified")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 48.5,
                color: Color::Yellow,
                base_species: Some(Id::from_known("keldeo")),
                forme: Some("Resolute".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meloetta"),
            SpeciesData {
                name: "Meloetta".to_owned(),
                num: 648,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 77,
                    def: 77,
                    spa: 128,
                    spd: 128,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 6.5,
                color: Color::White,
                base_forme: Some("Aria".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meloettapirouette"),
            SpeciesData {
                name: "Meloetta-Pirouette".to_owned(),
                num: 648,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 128,
                    def: 90,
                    spa: 77,
                    spd: 77,
                    spe: 128,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 6.5,
                color: Color::White,
                base_species: Some(Id::from_known("meloetta")),
                forme: Some("Pirouette".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("genesect"),
            SpeciesData {
                name: "Genesect".to_owned(),
                num: 649,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 120,
                    def: 95,
                    spa: 120,
                    spd: 95,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("download")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 82.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("genesectdouse"),
            SpeciesData {
                name: "Genesect-Douse".to_owned(),
                num: 649,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 120,
                    def: 95,
                    spa: 120,
                    spd: 95,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("download")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 82.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("genesect")),
                forme: Some("Douse".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("genesectshock"),
            SpeciesData {
                name: "Genesect-Shock".to_owned(),
                num: 649,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 120,
                    def: 95,
                    spa: 120,
                    spd: 95,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("download")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 82.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("genesect")),
                forme: Some("Shock".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("genesectburn"),
            SpeciesData {
                name: "Genesect-Burn".to_owned(),
                num: 649,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 120,
                    def: 95,
                    spa: 120,
                    spd: 95,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("download")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 82.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("genesect")),
                forme: Some("Burn".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("genesectchill"),
            SpeciesData {
                name: "Genesect-Chill".to_owned(),
                num: 649,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 120,
                    def: 95,
                    spa: 120,
                    spd: 95,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("download")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 82.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("genesect")),
                forme: Some("Chill".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
