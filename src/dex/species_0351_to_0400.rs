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

/// Species numbered 351 to 400.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("castform"),
            SpeciesData {
                name: "Castform".to_owned(),
                num: 351,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 70,
                    spa: 70,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forecast")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.8,
                color: Color::Gray,
                other_formes: Vec::from([
                    "Sunny".to_owned(),
                    "Rainy".to_owned(),
                    "Snowy".to_owned(),
                ]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("castformsunny"),
            SpeciesData {
                name: "Castform-Sunny".to_owned(),
                num: 351,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 70,
                    spa: 70,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forecast")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.8,
                color: Color::Red,
                base_species: Some(Id::from_known("castform")),
                forme: Some("Sunny".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("castformrainy"),
            SpeciesData {
                name: "Castform-Rainy".to_owned(),
                num: 351,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 70,
                    spa: 70,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forecast")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.8,
                color: Color::Blue,
                base_species: Some(Id::from_known("castform")),
                forme: Some("Rainy".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("castformsnowy"),
            SpeciesData {
                name: "Castform-Snowy".to_owned(),
                num: 351,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 70,
                    spa: 70,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forecast")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.8,
                color: Color::White,
                base_species: Some(Id::from_known("castform")),
                forme: Some("Snowy".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kecleon"),
            SpeciesData {
                name: "Kecleon".to_owned(),
                num: 352,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 60,
                    atk: 90,
                    def: 70,
                    spa: 60,
                    spd: 120,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("colorchange")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 22.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shuppet"),
            SpeciesData {
                name: "Shuppet".to_owned(),
                num: 353,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 44,
                    atk: 75,
                    def: 35,
                    spa: 63,
                    spd: 33,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("cursedbody")),
                },
                height_m: 0.6,
                weight_kg: 2.3,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("banette"),
            SpeciesData {
                name: "Banette".to_owned(),
                num: 354,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 64,
                    atk: 115,
                    def: 65,
                    spa: 83,
                    spd: 63,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("cursedbody")),
                },
                height_m: 1.1,
                weight_kg: 12.5,
                color: Color::Black,
                prevo: Some(Id::from_known("shuppet")),
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("banettemega"),
            SpeciesData {
                name: "Banette-Mega".to_owned(),
                num: 354,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 64,
                    atk: 165,
                    def: 75,
                    spa: 93,
                    spd: 83,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 13.0,
                color: Color::Black,
                base_species: Some(Id::from_known("banette")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("banettite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("duskull"),
            SpeciesData {
                name: "Duskull".to_owned(),
                num: 355,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 20,
                    atk: 40,
                    def: 90,
                    spa: 30,
                    spd: 90,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    hidden: Some(Id::from_known("frisk")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 15.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dusclops"),
            SpeciesData {
                name: "Dusclops".to_owned(),
                num: 356,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 40,
                    atk: 70,
                    def: 130,
                    spa: 60,
                    spd: 130,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("frisk")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 30.6,
                color: Color::Black,
                prevo: Some(Id::from_known("duskull")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tropius"),
            SpeciesData {
                name: "Tropius".to_owned(),
                num: 357,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 99,
                    atk: 68,
                    def: 83,
                    spa: 72,
                    spd: 87,
                    spe: 51,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("solarpower")),
                    hidden: Some(Id::from_known("harvest")),
                },
                height_m: 2.0,
                weight_kg: 100.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("chimecho"),
            SpeciesData {
                name: "Chimecho".to_owned(),
                num: 358,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 75,
                    atk: 50,
                    def: 80,
                    spa: 95,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 1.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("absol"),
            SpeciesData {
                name: "Absol".to_owned(),
                num: 359,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 65,
                    atk: 130,
                    def: 60,
                    spa: 75,
                    spd: 60,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    secondary: Some(Id::from_known("superluck")),
                    hidden: Some(Id::from_known("justified")),
                },
                height_m: 1.2,
                weight_kg: 47.0,
                color: Color::White,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("absolmega"),
            SpeciesData {
                name: "Absol-Mega".to_owned(),
                num: 359,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 65,
                    atk: 150,
                    def: 60,
                    spa: 115,
                    spd: 60,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magicbounce")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 49.0,
                color: Color::White,
                base_species: Some(Id::from_known("absol")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("absolite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wynaut"),
            SpeciesData {
                name: "Wynaut".to_owned(),
                num: 360,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 95,
                    atk: 23,
                    def: 48,
                    spa: 23,
                    spd: 48,
                    spe: 23,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shadowtag")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 14.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("snorunt"),
            SpeciesData {
                name: "Snorunt".to_owned(),
                num: 361,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 50,
                    spa: 50,
                    spd: 50,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 0.7,
                weight_kg: 16.8,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("glalie"),
            SpeciesData {
                name: "Glalie".to_owned(),
                num: 362,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 80,
                    spa: 80,
                    spd: 80,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("moody")),
                },
                height_m: 1.5,
                weight_kg: 256.5,
                color: Color::Gray,
                prevo: Some(Id::from_known("snorunt")),
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("glaliemega"),
            SpeciesData {
                name: "Glalie-Mega".to_owned(),
                num: 362,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 80,
                    spa: 120,
                    spd: 80,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("refrigerate")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 350.2,
                color: Color::Gray,
                base_species: Some(Id::from_known("glalie")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("glalitite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("spheal"),
            SpeciesData {
                name: "Spheal".to_owned(),
                num: 363,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 70,
                    atk: 40,
                    def: 50,
                    spa: 55,
                    spd: 50,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("oblivious")),
                },
                height_m: 0.8,
                weight_kg: 39.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sealeo"),
            SpeciesData {
                name: "Sealeo".to_owned(),
                num: 364,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 90,
                    atk: 60,
                    def: 70,
                    spa: 75,
                    spd: 70,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("oblivious")),
                },
                height_m: 1.1,
                weight_kg: 87.6,
                color: Color::Blue,
                prevo: Some(Id::from_known("spheal")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("walrein"),
            SpeciesData {
                name: "Walrein".to_owned(),
                num: 365,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 110,
                    atk: 80,
                    def: 90,
                    spa: 95,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("oblivious")),
                },
                height_m: 1.4,
                weight_kg: 150.6,
                color: Color::Blue,
                prevo: Some(Id::from_known("sealeo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("clamperl"),
            SpeciesData {
                name: "Clamperl".to_owned(),
                num: 366,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 35,
                    atk: 64,
                    def: 85,
                    spa: 74,
                    spd: 55,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("rattled")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 52.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("huntail"),
            SpeciesData {
                name: "Huntail".to_owned(),
                num: 367,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 104,
                    def: 105,
                    spa: 94,
                    spd: 75,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("waterveil")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 27.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("clamperl")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gorebyss"),
            SpeciesData {
                name: "Gorebyss".to_owned(),
                num: 368,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 84,
                    def: 105,
                    spa: 114,
                    spd: 75,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("hydration")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 22.6,
                color: Color::Pink,
                prevo: Some(Id::from_known("clamperl")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("relicanth"),
            SpeciesData {
                name: "Relicanth".to_owned(),
                num: 369,
                primary_type: Type::Water,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 100,
                    atk: 90,
                    def: 130,
                    spa: 45,
                    spd: 65,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("sturdy")),
                },
                height_m: 1.0,
                weight_kg: 23.4,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("luvdisc"),
            SpeciesData {
                name: "Luvdisc".to_owned(),
                num: 370,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 43,
                    atk: 30,
                    def: 55,
                    spa: 40,
                    spd: 65,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("hydration")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 8.7,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bagon"),
            SpeciesData {
                name: "Bagon".to_owned(),
                num: 371,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 45,
                    atk: 75,
                    def: 60,
                    spa: 40,
                    spd: 30,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 42.1,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shelgon"),
            SpeciesData {
                name: "Shelgon".to_owned(),
                num: 372,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 65,
                    atk: 95,
                    def: 100,
                    spa: 60,
                    spd: 50,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 110.5,
                color: Color::White,
                prevo: Some(Id::from_known("bagon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("salamence"),
            SpeciesData {
                name: "Salamence".to_owned(),
                num: 373,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 95,
                    atk: 135,
                    def: 80,
                    spa: 110,
                    spd: 80,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("moxie")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 102.6,
                color: Color::Blue,
                prevo: Some(Id::from_known("shelgon")),
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("salamencemega"),
            SpeciesData {
                name: "Salamence-Mega".to_owned(),
                num: 373,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 95,
                    atk: 145,
                    def: 130,
                    spa: 120,
                    spd: 90,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aerilate")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 112.6,
                color: Color::Blue,
                base_species: Some(Id::from_known("salamence")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("salamencite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("beldum"),
            SpeciesData {
                name: "Beldum".to_owned(),
                num: 374,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 40,
                    atk: 55,
                    def: 80,
                    spa: 35,
                    spd: 60,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("lightmetal")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 95.2,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("metang"),
            SpeciesData {
                name: "Metang".to_owned(),
                num: 375,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 75,
                    def: 100,
                    spa: 55,
                    spd: 80,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("lightmetal")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 202.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("beldum")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("metagross"),
            SpeciesData {
                name: "Metagross".to_owned(),
                num: 376,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 135,
                    def: 130,
                    spa: 95,
                    spd: 90,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("lightmetal")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 550.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("metang")),
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("metagrossmega"),
            SpeciesData {
                name: "Metagross-Mega".to_owned(),
                num: 376,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 145,
                    def: 150,
                    spa: 105,
                    spd: 110,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 942.9,
                color: Color::Blue,
                base_species: Some(Id::from_known("metagross")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("metagrossite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("regirock"),
            SpeciesData {
                name: "Regirock".to_owned(),
                num: 377,
                primary_type: Type::Rock,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 200,
                    spa: 50,
                    spd: 100,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 230.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("regice"),
            SpeciesData {
                name: "Regice".to_owned(),
                num: 378,
                primary_type: Type::Ice,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 50,
                    def: 100,
                    spa: 100,
                    spd: 200,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("icebody")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 175.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("registeel"),
            SpeciesData {
                name: "Registeel".to_owned(),
                num: 379,
                primary_type: Type::Steel,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 75,
                    def: 150,
                    spa: 75,
                    spd: 150,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("lightmetal")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 205.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("latias"),
            SpeciesData {
                name: "Latias".to_owned(),
                num: 380,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 90,
                    spa: 110,
                    spd: 130,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 40.0,
                color: Color::Red,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("latiasmega"),
            SpeciesData {
                name: "Latias-Mega".to_owned(),
                num: 380,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 120,
                    spa: 140,
                    spd: 150,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 52.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("latias")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("latiasite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("latios"),
            SpeciesData {
                name: "Latios".to_owned(),
                num: 381,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 80,
                    atk: 90,
                    def: 80,
                    spa: 130,
                    spd: 110,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 60.0,
                color: Color::Blue,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("latiosmega"),
            SpeciesData {
                name: "Latios-Mega".to_owned(),
                num: 381,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 80,
                    atk: 130,
                    def: 100,
                    spa: 160,
                    spd: 120,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 70.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("latios")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("latiosite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kyogre"),
            SpeciesData {
                name: "Kyogre".to_owned(),
                num: 382,
                primary_type: Type::Water,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 100,
                    def: 90,
                    spa: 150,
                    spd: 140,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("drizzle")),
                    ..Default::default()
                },
                height_m: 4.5,
                weight_kg: 352.0,
                color: Color::Blue,
                other_formes: Vec::from(["Primal".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("kyogreprimal"),
            SpeciesData {
                name: "Kyogre-Primal".to_owned(),
                num: 382,
                primary_type: Type::Water,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 150,
                    def: 90,
                    spa: 180,
                    spd: 160,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("primordialsea")),
                    ..Default::default()
                },
                height_m: 9.8,
                weight_kg: 430.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("kyogre")),
                forme: Some("Primal".to_owned()),
                required_item: Some(Id::from_known("blueorb")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("groudon"),
            SpeciesData {
                name: "Groudon".to_owned(),
                num: 383,
                primary_type: Type::Ground,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 150,
                    def: 140,
                    spa: 100,
                    spd: 90,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("drought")),
                    ..Default::default()
                },
                height_m: 3.5,
                weight_kg: 950.0,
                color: Color::Red,
                other_formes: Vec::from(["Primal".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("groudonprimal"),
            SpeciesData {
                name: "Groudon-Primal".to_owned(),
                num: 383,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 180,
                    def: 160,
                    spa: 150,
                    spd: 90,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("desolateland")),
                    ..Default::default()
                },
                height_m: 5.0,
                weight_kg: 999.7,
                color: Color::Red,
                base_species: Some(Id::from_known("groudon")),
                forme: Some("Primal".to_owned()),
                required_item: Some(Id::from_known("redorb")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rayquaza"),
            SpeciesData {
                name: "Rayquaza".to_owned(),
                num: 384,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 150,
                    def: 90,
                    spa: 150,
                    spd: 90,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("airlock")),
                    ..Default::default()
                },
                height_m: 7.0,
                weight_kg: 206.5,
                color: Color::Green,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rayquazamega"),
            SpeciesData {
                name: "Rayquaza-Mega".to_owned(),
                num: 384,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 180,
                    def: 100,
                    spa: 180,
                    spd: 100,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("deltastream")),
                    ..Default::default()
                },
                height_m: 10.8,
                weight_kg: 392.0,
                color: Color::Green,
                base_species: Some(Id::from_known("rayquaza")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("jirachi"),
            SpeciesData {
                name: "Jirachi".to_owned(),
                num: 385,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 100,
                    def: 100,
                    spa: 100,
                    spd: 100,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("serenegrace")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.1,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("deoxys"),
            SpeciesData {
                name: "Deoxys".to_owned(),
                num: 386,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 150,
                    def: 50,
                    spa: 150,
                    spd: 50,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 60.8,
                color: Color::Red,
                other_formes: Vec::from([
                    "Attack".to_owned(),
                    "Defense".to_owned(),
                    "Speed".to_owned(),
                ]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("deoxysattack"),
            SpeciesData {
                name: "Deoxys-Attack".to_owned(),
                num: 386,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 180,
                    def: 20,
                    spa: 180,
                    spd: 20,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 60.8,
                color: Color::Red,
                base_species: Some(Id::from_known("deoxys")),
                forme: Some("Attack".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("deoxysdefense"),
            SpeciesData {
                name: "Deoxys-Defense".to_owned(),
                num: 386,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 70,
                    def: 160,
                    spa: 70,
                    spd: 160,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 60.8,
                color: Color::Red,
                base_species: Some(Id::from_known("deoxys")),
                forme: Some("Defense".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("deoxysspeed"),
            SpeciesData {
                name: "Deoxys-Speed".to_owned(),
                num: 386,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 95,
                    def: 90,
                    spa: 95,
                    spd: 90,
                    spe: 180,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 60.8,
                color: Color::Red,
                base_species: Some(Id::from_known("deoxys")),
                forme: Some("Speed".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
