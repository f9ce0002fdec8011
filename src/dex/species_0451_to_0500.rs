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

/// Species numbered 451 to 500.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("skorupi"),
            SpeciesData {
                name: "Skorupi".to_owned(),
                num: 451,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 40,
                    atk: 50,
                    def: 90,
                    spa: 30,
                    spd: 55,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("keeneye")),
                },
                height_m: 0.8,
                weight_kg: 12.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drapion"),
            SpeciesData {
                name: "Drapion".to_owned(),
                num: 452,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 70,
                    atk: 90,
                    def: 110,
                    spa: 60,
                    spd: 75,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("keeneye")),
                },
                height_m: 1.3,
                weight_kg: 61.5,
                color: Color::Purple,
                prevo: Some(Id::from_known("skorupi")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("croagunk"),
            SpeciesData {
                name: "Croagunk".to_owned(),
                num: 453,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 48,
                    atk: 61,
                    def: 40,
                    spa: 61,
                    spd: 40,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    secondary: Some(Id::from_known("dryskin")),
                    hidden: Some(Id::from_known("poisontouch")),
                },
                height_m: 0.7,
                weight_kg: 23.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toxicroak"),
            SpeciesData {
                name: "Toxicroak".to_owned(),
                num: 454,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 83,
                    atk: 106,
                    def: 65,
                    spa: 86,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("anticipation")),
                    secondary: Some(Id::from_known("dryskin")),
                    hidden: Some(Id::from_known("poisontouch")),
                },
                height_m: 1.3,
                weight_kg: 44.4,
                color: Color::Blue,
                prevo: Some(Id::from_known("croagunk")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("carnivine"),
            SpeciesData {
                name: "Carnivine".to_owned(),
                num: 455,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 74,
                    atk: 100,
                    def: 72,
                    spa: 90,
                    spd: 72,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 27.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("finneon"),
            SpeciesData {
                name: "Finneon".to_owned(),
                num: 456,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 49,
                    atk: 49,
                    def: 56,
                    spa: 49,
                    spd: 61,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("stormdrain")),
                    hidden: Some(Id::from_known("waterveil")),
                },
                height_m: 0.4,
                weight_kg: 7.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lumineon"),
            SpeciesData {
                name: "Lumineon".to_owned(),
                num: 457,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 69,
                    atk: 69,
                    def: 76,
                    spa: 69,
                    spd: 86,
                    spe: 91,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("stormdrain")),
                    hidden: Some(Id::from_known("waterveil")),
                },
                height_m: 1.2,
                weight_kg: 24.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("finneon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mantyke"),
            SpeciesData {
                name: "Mantyke".to_owned(),
                num: 458,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 45,
                    atk: 20,
                    def: 50,
                    spa: 60,
                    spd: 120,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("waterveil")),
                },
                height_m: 1.0,
                weight_kg: 65.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("snover"),
            SpeciesData {
                name: "Snover".to_owned(),
                num: 459,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 60,
                    atk: 62,
                    def: 50,
                    spa: 62,
                    spd: 60,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowwarning")),
                    hidden: Some(Id::from_known("soundproof")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 50.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("abomasnow"),
            SpeciesData {
                name: "Abomasnow".to_owned(),
                num: 460,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 90,
                    atk: 92,
                    def: 75,
                    spa: 92,
                    spd: 85,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowwarning")),
                    hidden: Some(Id::from_known("soundproof")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 135.5,
                color: Color::White,
                prevo: Some(Id::from_known("snover")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("abomasnowmega"),
            SpeciesData {
                name: "Abomasnow-Mega".to_owned(),
                num: 460,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 90,
                    atk: 132,
                    def: 105,
                    spa: 132,
                    spd: 105,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowwarning")),
                    ..Default::default()
                },
                height_m: 2.7,
                weight_kg: 185.0,
                color: Color::White,
                base_species: Some(Id::from_known("abomasnow")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("weavile"),
            SpeciesData {
                name: "Weavile".to_owned(),
                num: 461,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 70,
                    atk: 120,
                    def: 65,
                    spa: 45,
                    spd: 85,
                    spe: 125,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("pickpocket")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 34.0,
                color: Color::Black,
                prevo: Some(Id::from_known("sneasel")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("magnezone"),
            SpeciesData {
                name: "Magnezone".to_owned(),
                num: 462,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 115,
                    spa: 130,
                    spd: 90,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 1.2,
                weight_kg: 180.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("magneton")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lickilicky"),
            SpeciesData {
                name: "Lickilicky".to_owned(),
                num: 463,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 110,
                    atk: 85,
                    def: 95,
                    spa: 80,
                    spd: 95,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("oblivious")),
                    hidden: Some(Id::from_known("cloudnine")),
                },
                height_m: 1.7,
                weight_kg: 140.0,
                color: Color::Pink,
                prevo: Some(Id::from_known("lickitung")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rhyperior"),
            SpeciesData {
                name: "Rhyperior".to_owned(),
                num: 464,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 115,
                    atk: 140,
                    def: 130,
                    spa: 55,
                    spd: 55,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    secondary: Some(Id::from_known("solidrock")),
                    hidden: Some(Id::from_known("reckless")),
                },
                height_m: 2.4,
                weight_kg: 282.8,
                color: Color::Gray,
                prevo: Some(Id::from_known("rhydon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tangrowth"),
            SpeciesData {
                name: "Tangrowth".to_owned(),
                num: 465,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 100,
                    atk: 100,
                    def: 125,
                    spa: 110,
                    spd: 50,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 2.0,
                weight_kg: 128.6,
                color: Color::Blue,
                prevo: Some(Id::from_known("tangela")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("electivire"),
            SpeciesData {
                name: "Electivire".to_owned(),
                num: 466,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 75,
                    atk: 123,
                    def: 67,
                    spa: 95,
                    spd: 85,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("motordrive")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 138.6,
                color: Color::Yellow,
                prevo: Some(Id::from_known("electabuzz")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("magmortar"),
            SpeciesData {
                name: "Magmortar".to_owned(),
                num: 467,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 75,
                    atk: 95,
                    def: 67,
                    spa: 125,
                    spd: 95,
                    spe: 83,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 68.0,
                color: Color::Red,
                prevo: Some(Id::from_known("magmar")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("togekiss"),
            SpeciesData {
                name: "Togekiss".to_owned(),
                num: 468,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 85,
                    atk: 50,
                    def: 95,
                    spa: 120,
                    spd: 115,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    secondary: Some(Id::from_known("serenegrace")),
                    hidden: Some(Id::from_known("superluck")),
                },
                height_m: 1.5,
                weight_kg: 38.0,
                color: Color::White,
                prevo: Some(Id::from_known("togetic")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("yanmega"),
            SpeciesData {
                name: "Yanmega".to_owned(),
                num: 469,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 86,
                    atk: 76,
                    def: 86,
                    spa: 116,
                    spd: 56,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("speedboost")),
                    secondary: Some(Id::from_known("tintedlens")),
                    hidden: Some(Id::from_known("frisk")),
                },
                height_m: 1.9,
                weight_kg: 51.5,
                color: Color::Green,
                prevo: Some(Id::from_known("yanma")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("leafeon"),
            SpeciesData {
                name: "Leafeon".to_owned(),
                num: 470,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 65,
                    atk: 110,
                    def: 130,
                    spa: 60,
                    spd: 65,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("chlorophyll")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 25.5,
                color: Color::Green,
                prevo: Some(Id::from_known("eevee")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("glaceon"),
            SpeciesData {
                name: "Glaceon".to_owned(),
                num: 471,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 110,
                    spa: 130,
                    spd: 95,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("icebody")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 25.9,
                color: Color::Blue,
                prevo: Some(Id::from_known("eevee")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gliscor"),
            SpeciesData {
                name: "Gliscor".to_owned(),
                num: 472,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 95,
                    def: 125,
                    spa: 45,
                    spd: 75,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("poisonheal")),
                },
                height_m: 2.0,
                weight_kg: 42.5,
                color: Color::Purple,
                prevo: Some(Id::from_known("gligar")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mamoswine"),
            SpeciesData {
                name: "Mamoswine".to_owned(),
                num: 473,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 110,
                    atk: 130,
                    def: 80,
                    spa: 70,
                    spd: 60,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 2.5,
                weight_kg: 291.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("piloswine")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("porygonz"),
            SpeciesData {
                name: "Porygon-Z".to_owned(),
                num: 474,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 85,
                    atk: 80,
                    def: 70,
                    spa: 135,
                    spd: 75,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("adaptability")),
                    secondary: Some(Id::from_known("download")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.9,
                weight_kg: 34.0,
                color: Color::Red,
                prevo: Some(Id::from_known("porygon2")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gallade"),
            SpeciesData {
                name: "Gallade".to_owned(),
                num: 475,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 68,
                    atk: 125,
                    def: 65,
                    spa: 65,
                    spd: 115,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steadfast")),
                    secondary: Some(Id::from_known("sharpness")),
                    hidden: Some(Id::from_known("justified")),
                },
                height_m: 1.6,
                weight_kg: 52.0,
                color: Color::White,
                prevo: Some(Id::from_known("kirlia")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gallademega"),
            SpeciesData {
                name: "Gallade-Mega".to_owned(),
                num: 475,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 68,
                    atk: 165,
                    def: 95,
                    spa: 65,
                    spd: 115,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 56.4,
                color: Color::White,
                base_species: Some(Id::from_known("gallade")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("probopass"),
            SpeciesData {
                name: "Probopass".to_owned(),
                num: 476,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 145,
                    spa: 75,
                    spd: 150,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("magnetpull")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 1.4,
                weight_kg: 340.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("nosepass")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dusknoir"),
            SpeciesData {
                name: "Dusknoir".to_owned(),
                num: 477,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 45,
                    atk: 100,
                    def: 135,
                    spa: 65,
                    spd: 135,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    hidden: Some(Id::from_known("frisk")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 106.6,
                color: Color::Black,
                prevo: Some(Id::from_known("dusclops")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("froslass"),
            SpeciesData {
                name: "Froslass".to_owned(),
                num: 478,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 80,
                    def: 70,
                    spa: 80,
                    spd: 70,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 26.6,
                color: Color::White,
                prevo: Some(Id::from_known("snorunt")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("froslassmega"),
            SpeciesData {
                name: "Froslass-Mega".to_owned(),
                num: 478,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 80,
                    def: 70,
                    spa: 140,
                    spd: 100,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 2.6,
                weight_kg: 29.6,
                color: Color::White,
                base_species: Some(Id::from_known("froslass")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotom"),
            SpeciesData {
                name: "Rotom".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 77,
                    spa: 95,
                    spd: 77,
                    spe: 91,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotomheat"),
            SpeciesData {
                name: "Rotom-Heat".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 107,
                    spa: 105,
                    spd: 107,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                base_species: Some(Id::from_known("rotom")),
                forme: Some("Heat".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotomwash"),
            SpeciesData {
                name: "Rotom-Wash".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 107,
                    spa: 105,
                    spd: 107,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                base_species: Some(Id::from_known("rotom")),
                forme: Some("Wash".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotomfrost"),
            SpeciesData {
                name: "Rotom-Frost".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 107,
                    spa: 105,
                    spd: 107,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                base_species: Some(Id::from_known("rotom")),
                forme: Some("Frost".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotomfan"),
            SpeciesData {
                name: "Rotom-Fan".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 107,
                    spa: 105,
                    spd: 107,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                base_species: Some(Id::from_known("rotom")),
                forme: Some("Fan".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rotommow"),
            SpeciesData {
                name: "Rotom-Mow".to_owned(),
                num: 479,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 107,
                    spa: 105,
                    spd: 107,
                    spe: 86,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                base_species: Some(Id::from_known("rotom")),
                forme: Some("Mow".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("uxie"),
            SpeciesData {
                name: "Uxie".to_owned(),
                num: 480,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 75,
                    atk: 75,
                    def: 130,
                    spa: 75,
                    spd: 130,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
    ])
}
