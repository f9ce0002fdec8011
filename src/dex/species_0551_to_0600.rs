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

/// Species numbered 551 to 600.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("cottonee"),
            SpeciesData {
                name: "Cottonee".to_owned(),
                num: 546,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 40,
                    atk: 27,
                    def: 60,
                    spa: 37,
                    spd: 50,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("chlorophyll")),
                },
                height_m: 0.3,
                weight_kg: 0.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("whimsicott"),
            SpeciesData {
                name: "Whimsicott".to_owned(),
                num: 547,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 60,
                    atk: 67,
                    def: 85,
                    spa: 77,
                    spd: 75,
                    spe: 116,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("chlorophyll")),
                },
                height_m: 0.7,
                weight_kg: 6.6,
                color: Color::Green,
                prevo: Some(Id::from_known("cottonee")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("petilil"),
            SpeciesData {
                name: "Petilil".to_owned(),
                num: 548,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 45,
                    atk: 35,
                    def: 50,
                    spa: 70,
                    spd: 50,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("leafguard")),
                },
                height_m: 0.5,
                weight_kg: 6.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lilligant"),
            SpeciesData {
                name: "Lilligant".to_owned(),
                num: 549,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 60,
                    def: 75,
                    spa: 110,
                    spd: 75,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("leafguard")),
                },
                height_m: 1.1,
                weight_kg: 16.3,
                color: Color::Green,
                prevo: Some(Id::from_known("petilil")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lilliganthisui"),
            SpeciesData {
                name: "Lilligant-Hisui".to_owned(),
                num: 549,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 105,
                    def: 75,
                    spa: 50,
                    spd: 75,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("leafguard")),
                },
                height_m: 1.2,
                weight_kg: 19.2,
                color: Color::Green,
                base_species: Some(Id::from_known("lilligant")),
                forme: Some("Hisui".to_owned()),
                prevo: Some(Id::from_known("petilil")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("basculin"),
            SpeciesData {
                name: "Basculin".to_owned(),
                num: 550,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 92,
                    def: 65,
                    spa: 80,
                    spd: 55,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("reckless")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.0,
                weight_kg: 18.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("basculinbluestriped"),
            SpeciesData {
                name: "Basculin-Blue-Striped".to_owned(),
                num: 550,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 92,
                    def: 65,
                    spa: 80,
                    spd: 55,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.0,
                weight_kg: 18.0,
                color: Color::Green,
                base_species: Some(Id::from_known("basculin")),
                forme: Some("Blue-Striped".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("basculinwhitestriped"),
            SpeciesData {
                name: "Basculin-White-Striped".to_owned(),
                num: 550,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 92,
                    def: 65,
                    spa: 80,
                    spd: 55,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rattled")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.0,
                weight_kg: 18.0,
                color: Color::Green,
                base_species: Some(Id::from_known("basculin")),
                forme: Some("White-Striped".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandile"),
            SpeciesData {
                name: "Sandile".to_owned(),
                num: 551,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 50,
                    atk: 72,
                    def: 35,
                    spa: 35,
                    spd: 35,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("angerpoint")),
                },
                height_m: 0.7,
                weight_kg: 15.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("krokorok"),
            SpeciesData {
                name: "Krokorok".to_owned(),
                num: 552,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 60,
                    atk: 82,
                    def: 45,
                    spa: 45,
                    spd: 45,
                    spe: 74,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("angerpoint")),
                },
                height_m: 1.0,
                weight_kg: 33.4,
                color: Color::Brown,
                prevo: Some(Id::from_known("sandile")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("krookodile"),
            SpeciesData {
                name: "Krookodile".to_owned(),
                num: 553,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 95,
                    atk: 117,
                    def: 80,
                    spa: 65,
                    spd: 70,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("angerpoint")),
                },
                height_m: 1.5,
                weight_kg: 96.3,
                color: Color::Red,
                prevo: Some(Id::from_known("krokorok")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("darumaka"),
            SpeciesData {
                name: "Darumaka".to_owned(),
                num: 554,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 70,
                    atk: 90,
                    def: 45,
                    spa: 15,
                    spd: 45,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 37.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("darumakagalar"),
            SpeciesData {
                name: "Darumaka-Galar".to_owned(),
                num: 554,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 70,
                    atk: 90,
                    def: 45,
                    spa: 15,
                    spd: 45,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 40.0,
                color: Color::White,
                base_species: Some(Id::from_known("darumaka")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("darmanitan"),
            SpeciesData {
                name: "Darmanitan".to_owned(),
                num: 555,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 105,
                    atk: 140,
                    def: 55,
                    spa: 30,
                    spd: 55,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("zenmode")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 92.9,
                color: Color::Red,
                prevo: Some(Id::from_known("darumaka")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("darmanitanzen"),
            SpeciesData {
                name: "Darmanitan-Zen".to_owned(),
                num: 555,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 105,
                    atk: 30,
                    def: 105,
                    spa: 140,
                    spd: 105,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("zenmode")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 92.9,
                color: Color::Blue,
                base_species: Some(Id::from_known("darmanitan")),
                forme: Some("Zen".to_owned()),
                changes_from: Some("Standard".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("darmanitangalar"),
            SpeciesData {
                name: "Darmanitan-Galar".to_owned(),
                num: 555,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 105,
                    atk: 140,
                    def: 55,
                    spa: 30,
                    spd: 55,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gorillatactics")),
                    hidden: Some(Id::from_known("zenmode")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 120.0,
                color: Color::White,
                base_species: Some(Id::from_known("darmanitan")),
                forme: Some("Galar".to_owned()),
                prevo: Some(Id::from_known("darumakagalar")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("darmanitangalarzen"),
            SpeciesData {
                name: "Darmanitan-Galar-Zen".to_owned(),
                num: 555,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 105,
                    atk: 160,
                    def: 55,
                    spa: 30,
                    spd: 55,
                    spe: 135,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("zenmode")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 120.0,
                color: Color::White,
                base_species: Some(Id::from_known("darmanitan")),
                forme: Some("Galar-Zen".to_owned()),
                changes_from: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("maractus"),
            SpeciesData {
                name: "Maractus".to_owned(),
                num: 556,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 75,
                    atk: 86,
                    def: 67,
                    spa: 106,
                    spd: 67,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("stormdrain")),
                },
                height_m: 1.0,
                weight_kg: 28.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dwebble"),
            SpeciesData {
                name: "Dwebble".to_owned(),
                num: 557,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 85,
                    spa: 35,
                    spd: 35,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.3,
                weight_kg: 14.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("crustle"),
            SpeciesData {
                name: "Crustle".to_owned(),
                num: 558,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 70,
                    atk: 105,
                    def: 125,
                    spa: 65,
                    spd: 75,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.4,
                weight_kg: 200.0,
                color: Color::Red,
                prevo: Some(Id::from_known("dwebble")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("scraggy"),
            SpeciesData {
                name: "Scraggy".to_owned(),
                num: 559,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 50,
                    atk: 75,
                    def: 70,
                    spa: 35,
                    spd: 70,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 0.6,
                weight_kg: 11.8,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("scrafty"),
            SpeciesData {
                name: "Scrafty".to_owned(),
                num: 560,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 115,
                    spa: 45,
                    spd: 115,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 1.1,
                weight_kg: 30.0,
                color: Color::Red,
                prevo: Some(Id::from_known("scraggy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("scraftymega"),
            SpeciesData {
                name: "Scrafty-Mega".to_owned(),
                num: 560,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 65,
                    atk: 130,
                    def: 135,
                    spa: 55,
                    spd: 135,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    secondary: Some(Id::from_known("moxie")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 1.1,
                weight_kg: 31.0,
                color: Color::Red,
                base_species: Some(Id::from_known("scrafty")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sigilyph"),
            SpeciesData {
                name: "Sigilyph".to_owned(),
                num: 561,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 72,
                    atk: 58,
                    def: 80,
                    spa: 103,
                    spd: 80,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wonderskin")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("tintedlens")),
                },
                height_m: 1.4,
                weight_kg: 14.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("yamask"),
            SpeciesData {
                name: "Yamask".to_owned(),
                num: 562,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 38,
                    atk: 30,
                    def: 85,
                    spa: 55,
                    spd: 65,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("mummy")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 1.5,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("yamaskgalar"),
            SpeciesData {
                name: "Yamask-Galar".to_owned(),
                num: 562,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 38,
                    atk: 55,
                    def: 85,
                    spa: 30,
                    spd: 65,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wanderingspirit")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 1.5,
                color: Color::Black,
                base_species: Some(Id::from_known("yamask")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cofagrigus"),
            SpeciesData {
                name: "Cofagrigus".to_owned(),
                num: 563,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 58,
                    atk: 50,
                    def: 145,
                    spa: 95,
                    spd: 105,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("mummy")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 76.5,
                color: Color::Yellow,
                prevo: Some(Id::from_known("yamask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tirtouga"),
            SpeciesData {
                name: "Tirtouga".to_owned(),
                num: 564,
                primary_type: Type::Water,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 54,
                    atk: 78,
                    def: 103,
                    spa: 53,
                    spd: 45,
                    spe: 22,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("solidrock")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 0.7,
                weight_kg: 16.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("carracosta"),
            SpeciesData {
                name: "Carracosta".to_owned(),
                num: 565,
                primary_type: Type::Water,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 74,
                    atk: 108,
                    def: 133,
                    spa: 83,
                    spd: 65,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("solidrock")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 1.2,
                weight_kg: 81.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("tirtouga")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("archen"),
            SpeciesData {
                name: "Archen".to_owned(),
                num: 566,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 112,
                    def: 45,
                    spa: 74,
                    spd: 45,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defeatist")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("archeops"),
            SpeciesData {
                name: "Archeops".to_owned(),
                num: 567,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 140,
                    def: 65,
                    spa: 112,
                    spd: 65,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defeatist")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 32.0,
                color: Color::Yellow,
                prevo: Some(Id::from_known("archen")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("trubbish"),
            SpeciesData {
                name: "Trubbish".to_owned(),
                num: 568,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 62,
                    spa: 40,
                    spd: 62,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stench")),
                    secondary: Some(Id::from_known("stickyhold")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 0.6,
                weight_kg: 31.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("garbodor"),
            SpeciesData {
                name: "Garbodor".to_owned(),
                num: 569,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 80,
                    atk: 95,
                    def: 82,
                    spa: 60,
                    spd: 82,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stench")),
                    secondary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 1.9,
                weight_kg: 107.3,
                color: Color::Green,
                prevo: Some(Id::from_known("trubbish")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("garbodorgmax"),
            SpeciesData {
                name: "Garbodor-Gmax".to_owned(),
                num: 569,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 80,
                    atk: 95,
                    def: 82,
                    spa: 60,
                    spd: 82,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stench")),
                    secondary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 21.0,
                weight_kg: 0.0,
                color: Color::Green,
                base_species: Some(Id::from_known("garbodor")),
                forme: Some("Gmax".to_owned()),
                changes_from: Some("Standard".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zorua"),
            SpeciesData {
                name: "Zorua".to_owned(),
                num: 570,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 40,
                    atk: 65,
                    def: 40,
                    spa: 80,
                    spd: 40,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illusion")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 12.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zoruahisui"),
            SpeciesData {
                name: "Zorua-Hisui".to_owned(),
                num: 570,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 35,
                    atk: 60,
                    def: 40,
                    spa: 85,
                    spd: 40,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illusion")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 12.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("zorua")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zoroark"),
            SpeciesData {
                name: "Zoroark".to_owned(),
                num: 571,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 60,
                    atk: 105,
                    def: 60,
                    spa: 120,
                    spd: 60,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illusion")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 81.1,
                color: Color::Gray,
                prevo: Some(Id::from_known("zorua")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zoroarkhisui"),
            SpeciesData {
                name: "Zoroark-Hisui".to_owned(),
                num: 571,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 55,
                    atk: 100,
                    def: 60,
                    spa: 125,
                    spd: 60,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illusion")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 73.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("zoroark")),
                forme: Some("Hisui".to_owned()),
                prevo: Some(Id::from_known("zoruahisui")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("minccino"),
            SpeciesData {
                name: "Minccino".to_owned(),
                num: 572,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 50,
                    def: 40,
                    spa: 40,
                    spd: 40,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("skilllink")),
                },
                height_m: 0.4,
                weight_kg: 5.8,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cinccino"),
            SpeciesData {
                name: "Cinccino".to_owned(),
                num: 573,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 75,
                    atk: 95,
                    def: 60,
                    spa: 65,
                    spd: 60,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("skilllink")),
                },
                height_m: 0.5,
                weight_kg: 7.5,
                color: Color::Gray,
                prevo: Some(Id::from_known("minccino")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gothita"),
            SpeciesData {
                name: "Gothita".to_owned(),
                num: 574,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 50,
                    spa: 55,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("shadowtag")),
                },
                height_m: 0.4,
                weight_kg: 5.8,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gothorita"),
            SpeciesData {
                name: "Gothorita".to_owned(),
                num: 575,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 60,
                    atk: 45,
                    def: 70,
                    spa: 75,
                    spd: 85,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("shadowtag")),
                },
                height_m: 0.7,
                weight_kg: 18.0,
                color: Color::Purple,
                prevo: Some(Id::from_known("gothita")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gothitelle"),
            SpeciesData {
                name: "Gothitelle".to_owned(),
                num: 576,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 70,
                    atk: 55,
                    def: 95,
                    spa: 95,
                    spd: 110,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("shadowtag")),
                },
                height_m: 1.5,
                weight_kg: 44.0,
                color: Color::Purple,
                prevo: Some(Id::from_known("gothorita")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("solosis"),
            SpeciesData {
                name: "Solosis".to_owned(),
                num: 577,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 40,
                    spa: 105,
                    spd: 50,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 0.3,
                weight_kg: 1.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("duosion"),
            SpeciesData {
                name: "Duosion".to_owned(),
                num: 578,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 65,
                    atk: 40,
                    def: 50,
                    spa: 125,
                    spd: 60,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 0.6,
                weight_kg: 8.0,
                color: Color::Green,
                prevo: Some(Id::from_known("solosis")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("reuniclus"),
            SpeciesData {
                name: "Reuniclus".to_owned(),
                num: 579,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 110,
                    atk: 65,
                    def: 75,
                    spa: 125,
                    spd: 85,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.0,
                weight_kg: 20.1,
                color: Color::Green,
                prevo: Some(Id::from_known("duosion")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ducklett"),
            SpeciesData {
                name: "Ducklett".to_owned(),
                num: 580,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 62,
                    atk: 44,
                    def: 50,
                    spa: 44,
                    spd: 50,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("bigpecks")),
                    hidden: Some(Id::from_known("hydration")),
                },
                height_m: 0.5,
                weight_kg: 5.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swanna"),
            SpeciesData {
                name: "Swanna".to_owned(),
                num: 581,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 87,
                    def: 63,
                    spa: 87,
                    spd: 63,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("bigpecks")),
                    hidden: Some(Id::from_known("hydration")),
                },
                height_m: 1.3,
                weight_kg: 24.2,
                color: Color::White,
                prevo: Some(Id::from_known("ducklett")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vanillite"),
            SpeciesData {
                name: "Vanillite".to_owned(),
                num: 582,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 36,
                    atk: 50,
                    def: 50,
                    spa: 65,
                    spd: 60,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("icebody")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 0.4,
                weight_kg: 5.7,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vanillish"),
            SpeciesData {
                name: "Vanillish".to_owned(),
                num: 583,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 51,
                    atk: 65,
                    def: 65,
                    spa: 80,
                    spd: 75,
                    spe: 59,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("icebody")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.1,
                weight_kg: 41.0,
                color: Color::White,
                prevo: Some(Id::from_known("vanillite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vanilluxe"),
            SpeciesData {
                name: "Vanilluxe".to_owned(),
                num: 584,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 71,
                    atk: 95,
                    def: 85,
                    spa: 110,
                    spd: 95,
                    spe: 79,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("icebody")),
                    secondary: Some(Id::from_known("snowwarning")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 1.3,
                weight_kg: 57.5,
                color: Color::White,
                prevo: Some(Id::from_known("vanillish")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("deerling"),
            SpeciesData {
                name: "Deerling".to_owned(),
                num: 585,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("serenegrace")),
                },
                height_m: 0.6,
                weight_kg: 19.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sawsbuck"),
            SpeciesData {
                name: "Sawsbuck".to_owned(),
                num: 586,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 70,
                    spa: 60,
                    spd: 70,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("serenegrace")),
                },
                height_m: 1.9,
                weight_kg: 92.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("deerling")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("emolga"),
            SpeciesData {
                name: "Emolga".to_owned(),
                num: 587,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 75,
                    def: 60,
                    spa: 75,
                    spd: 60,
                    spe: 103,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("motordrive")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 5.0,
                color: Color::White,
                ..Default::default()
            },
        ),
    ])
}
