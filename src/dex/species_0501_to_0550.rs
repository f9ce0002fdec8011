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

/// Species numbered 501 to 550.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("victini"),
            SpeciesData {
                name: "Victini".to_owned(),
                num: 494,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fire),
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
                    primary: Some(Id::from_known("victorystar")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("snivy"),
            SpeciesData {
                name: "Snivy".to_owned(),
                num: 495,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 45,
                    atk: 45,
                    def: 55,
                    spa: 45,
                    spd: 55,
                    spe: 63,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 8.1,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("servine"),
            SpeciesData {
                name: "Servine".to_owned(),
                num: 496,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 75,
                    spa: 60,
                    spd: 75,
                    spe: 83,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 16.0,
                color: Color::Green,
                prevo: Some(Id::from_known("snivy")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("serperior"),
            SpeciesData {
                name: "Serperior".to_owned(),
                num: 497,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 75,
                    atk: 75,
                    def: 95,
                    spa: 75,
                    spd: 95,
                    spe: 113,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 3.3,
                weight_kg: 63.0,
                color: Color::Green,
                prevo: Some(Id::from_known("servine")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tepig"),
            SpeciesData {
                name: "Tepig".to_owned(),
                num: 498,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 63,
                    def: 45,
                    spa: 45,
                    spd: 45,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("thickfat")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.9,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pignite"),
            SpeciesData {
                name: "Pignite".to_owned(),
                num: 499,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 90,
                    atk: 93,
                    def: 55,
                    spa: 70,
                    spd: 55,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("thickfat")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 55.5,
                color: Color::Red,
                prevo: Some(Id::from_known("tepig")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("emboar"),
            SpeciesData {
                name: "Emboar".to_owned(),
                num: 500,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 110,
                    atk: 123,
                    def: 65,
                    spa: 100,
                    spd: 65,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("reckless")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 150.0,
                color: Color::Red,
                prevo: Some(Id::from_known("pignite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("emboarmega"),
            SpeciesData {
                name: "Emboar-Mega".to_owned(),
                num: 500,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 110,
                    atk: 163,
                    def: 85,
                    spa: 130,
                    spd: 85,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("reckless")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 165.0,
                color: Color::Red,
                base_species: Some(Id::from_known("emboar")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("oshawott"),
            SpeciesData {
                name: "Oshawott".to_owned(),
                num: 501,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 45,
                    spa: 63,
                    spd: 45,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("shellarmor")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 5.9,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dewott"),
            SpeciesData {
                name: "Dewott".to_owned(),
                num: 502,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 75,
                    atk: 75,
                    def: 60,
                    spa: 83,
                    spd: 60,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("shellarmor")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 24.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("oshawott")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("samurott"),
            SpeciesData {
                name: "Samurott".to_owned(),
                num: 503,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 95,
                    atk: 100,
                    def: 85,
                    spa: 108,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("shellarmor")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 94.6,
                color: Color::Blue,
                prevo: Some(Id::from_known("dewott")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("samurotthisui"),
            SpeciesData {
                name: "Samurott-Hisui".to_owned(),
                num: 503,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 90,
                    atk: 108,
                    def: 80,
                    spa: 100,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sharpness")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 58.2,
                color: Color::Blue,
                base_species: Some(Id::from_known("samurott")),
                forme: Some("Hisui".to_owned()),
                prevo: Some(Id::from_known("dewott")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("patrat"),
            SpeciesData {
                name: "Patrat".to_owned(),
                num: 504,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 45,
                    atk: 55,
                    def: 39,
                    spa: 35,
                    spd: 39,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.5,
                weight_kg: 11.6,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("watchog"),
            SpeciesData {
                name: "Watchog".to_owned(),
                num: 505,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 69,
                    spa: 60,
                    spd: 69,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 1.1,
                weight_kg: 27.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("patrat")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lillipup"),
            SpeciesData {
                name: "Lillipup".to_owned(),
                num: 506,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 45,
                    atk: 60,
                    def: 45,
                    spa: 25,
                    spd: 45,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("runaway")),
                },
                height_m: 0.4,
                weight_kg: 4.1,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("herdier"),
            SpeciesData {
                name: "Herdier".to_owned(),
                num: 507,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 65,
                    atk: 80,
                    def: 65,
                    spa: 35,
                    spd: 65,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("sandrush")),
                    hidden: Some(Id::from_known("scrappy")),
                },
                height_m: 0.9,
                weight_kg: 14.7,
                color: Color::Gray,
                prevo: Some(Id::from_known("lillipup")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("stoutland"),
            SpeciesData {
                name: "Stoutland".to_owned(),
                num: 508,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 85,
                    atk: 110,
                    def: 90,
                    spa: 45,
                    spd: 90,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("sandrush")),
                    hidden: Some(Id::from_known("scrappy")),
                },
                height_m: 1.2,
                weight_kg: 61.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("herdier")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("purrloin"),
            SpeciesData {
                name: "Purrloin".to_owned(),
                num: 509,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 41,
                    atk: 50,
                    def: 37,
                    spa: 50,
                    spd: 37,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 0.4,
                weight_kg: 10.1,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("liepard"),
            SpeciesData {
                name: "Liepard".to_owned(),
                num: 510,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 64,
                    atk: 88,
                    def: 50,
                    spa: 88,
                    spd: 50,
                    spe: 106,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 1.1,
                weight_kg: 37.5,
                color: Color::Purple,
                prevo: Some(Id::from_known("purrloin")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pansage"),
            SpeciesData {
                name: "Pansage".to_owned(),
                num: 511,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 50,
                    atk: 53,
                    def: 48,
                    spa: 53,
                    spd: 48,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("overgrow")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 10.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("simisage"),
            SpeciesData {
                name: "Simisage".to_owned(),
                num: 512,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 75,
                    atk: 98,
                    def: 63,
                    spa: 98,
                    spd: 63,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("overgrow")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 30.5,
                color: Color::Green,
                prevo: Some(Id::from_known("pansage")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pansear"),
            SpeciesData {
                name: "Pansear".to_owned(),
                num: 513,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 50,
                    atk: 53,
                    def: 48,
                    spa: 53,
                    spd: 48,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("blaze")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 11.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("simisear"),
            SpeciesData {
                name: "Simisear".to_owned(),
                num: 514,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 75,
                    atk: 98,
                    def: 63,
                    spa: 98,
                    spd: 63,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("blaze")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 28.0,
                color: Color::Red,
                prevo: Some(Id::from_known("pansear")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("panpour"),
            SpeciesData {
                name: "Panpour".to_owned(),
                num: 515,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 53,
                    def: 48,
                    spa: 53,
                    spd: 48,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("torrent")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 13.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("simipour"),
            SpeciesData {
                name: "Simipour".to_owned(),
                num: 516,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 75,
                    atk: 98,
                    def: 63,
                    spa: 98,
                    spd: 63,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("torrent")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 29.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("panpour")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("munna"),
            SpeciesData {
                name: "Munna".to_owned(),
                num: 517,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 76,
                    atk: 25,
                    def: 45,
                    spa: 67,
                    spd: 55,
                    spe: 24,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forewarn")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.6,
                weight_kg: 23.3,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("musharna"),
            SpeciesData {
                name: "Musharna".to_owned(),
                num: 518,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 116,
                    atk: 55,
                    def: 85,
                    spa: 107,
                    spd: 95,
                    spe: 29,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("forewarn")),
                    secondary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 1.1,
                weight_kg: 60.5,
                color: Color::Pink,
                prevo: Some(Id::from_known("munna")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pidove"),
            SpeciesData {
                name: "Pidove".to_owned(),
                num: 519,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 50,
                    atk: 55,
                    def: 50,
                    spa: 36,
                    spd: 30,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("superluck")),
                    hidden: Some(Id::from_known("rivalry")),
                },
                height_m: 0.3,
                weight_kg: 2.1,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tranquill"),
            SpeciesData {
                name: "Tranquill".to_owned(),
                num: 520,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 62,
                    atk: 77,
                    def: 62,
                    spa: 50,
                    spd: 42,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("superluck")),
                    hidden: Some(Id::from_known("rivalry")),
                },
                height_m: 0.6,
                weight_kg: 15.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("pidove")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("unfezant"),
            SpeciesData {
                name: "Unfezant".to_owned(),
                num: 521,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 115,
                    def: 80,
                    spa: 65,
                    spd: 55,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    secondary: Some(Id::from_known("superluck")),
                    hidden: Some(Id::from_known("rivalry")),
                },
                height_m: 1.2,
                weight_kg: 29.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("tranquill")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("blitzle"),
            SpeciesData {
                name: "Blitzle".to_owned(),
                num: 522,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 45,
                    atk: 60,
                    def: 32,
                    spa: 50,
                    spd: 32,
                    spe: 76,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    secondary: Some(Id::from_known("motordrive")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 0.8,
                weight_kg: 29.8,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zebstrika"),
            SpeciesData {
                name: "Zebstrika".to_owned(),
                num: 523,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 75,
                    atk: 100,
                    def: 63,
                    spa: 80,
                    spd: 63,
                    spe: 116,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    secondary: Some(Id::from_known("motordrive")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 1.6,
                weight_kg: 79.5,
                color: Color::Black,
                prevo: Some(Id::from_known("blitzle")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("roggenrola"),
            SpeciesData {
                name: "Roggenrola".to_owned(),
                num: 524,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 55,
                    atk: 75,
                    def: 85,
                    spa: 25,
                    spd: 25,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.4,
                weight_kg: 18.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("boldore"),
            SpeciesData {
                name: "Boldore".to_owned(),
                num: 525,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 70,
                    atk: 105,
                    def: 105,
                    spa: 50,
                    spd: 40,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("weakarmor")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.9,
                weight_kg: 102.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("roggenrola")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gigalith"),
            SpeciesData {
                name: "Gigalith".to_owned(),
                num: 526,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 85,
                    atk: 135,
                    def: 130,
                    spa: 60,
                    spd: 80,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("sandstream")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 1.7,
                weight_kg: 260.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("boldore")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("woobat"),
            SpeciesData {
                name: "Woobat".to_owned(),
                num: 527,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 45,
                    def: 43,
                    spa: 55,
                    spd: 43,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unaware")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("simple")),
                },
                height_m: 0.4,
                weight_kg: 2.1,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swoobat"),
            SpeciesData {
                name: "Swoobat".to_owned(),
                num: 528,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 67,
                    atk: 57,
                    def: 55,
                    spa: 77,
                    spd: 55,
                    spe: 114,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unaware")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("simple")),
                },
                height_m: 0.9,
                weight_kg: 10.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("woobat")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("drilbur"),
            SpeciesData {
                name: "Drilbur".to_owned(),
                num: 529,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 40,
                    spa: 30,
                    spd: 45,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandrush")),
                    secondary: Some(Id::from_known("sandforce")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 0.3,
                weight_kg: 8.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("excadrill"),
            SpeciesData {
                name: "Excadrill".to_owned(),
                num: 530,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 110,
                    atk: 135,
                    def: 60,
                    spa: 50,
                    spd: 65,
                    spe: 88,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandrush")),
                    secondary: Some(Id::from_known("sandforce")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 0.7,
                weight_kg: 40.4,
                color: Color::Gray,
                prevo: Some(Id::from_known("drilbur")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("excadrillmega"),
            SpeciesData {
                name: "Excadrill-Mega".to_owned(),
                num: 530,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 110,
                    atk: 165,
                    def: 100,
                    spa: 65,
                    spd: 65,
                    spe: 103,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandrush")),
                    secondary: Some(Id::from_known("sandforce")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 0.9,
                weight_kg: 60.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("excadrill")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("audino"),
            SpeciesData {
                name: "Audino".to_owned(),
                num: 531,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 103,
                    atk: 60,
                    def: 86,
                    spa: 60,
                    spd: 86,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("klutz")),
                },
                height_m: 1.1,
                weight_kg: 31.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("audinomega"),
            SpeciesData {
                name: "Audino-Mega".to_owned(),
                num: 531,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 103,
                    atk: 60,
                    def: 126,
                    spa: 80,
                    spd: 126,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 32.0,
                color: Color::White,
                base_species: Some(Id::from_known("audino")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("timburr"),
            SpeciesData {
                name: "Timburr".to_owned(),
                num: 532,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 55,
                    spa: 25,
                    spd: 35,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 0.6,
                weight_kg: 12.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gurdurr"),
            SpeciesData {
                name: "Gurdurr".to_owned(),
                num: 533,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 85,
                    atk: 105,
                    def: 85,
                    spa: 40,
                    spd: 50,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 1.2,
                weight_kg: 40.0,
                color: Color::Gray,
                prevo: Some(Id::from_known("timburr")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("conkeldurr"),
            SpeciesData {
                name: "Conkeldurr".to_owned(),
                num: 534,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 105,
                    atk: 140,
                    def: 95,
                    spa: 55,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("sheerforce")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 1.4,
                weight_kg: 87.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("gurdurr")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tympole"),
            SpeciesData {
                name: "Tympole".to_owned(),
                num: 535,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 40,
                    spa: 50,
                    spd: 40,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("waterabsorb")),
                },
                height_m: 0.5,
                weight_kg: 4.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("palpitoad"),
            SpeciesData {
                name: "Palpitoad".to_owned(),
                num: 536,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 75,
                    atk: 65,
                    def: 55,
                    spa: 65,
                    spd: 55,
                    spe: 69,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("waterabsorb")),
                },
                height_m: 0.8,
                weight_kg: 17.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("tympole")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("seismitoad"),
            SpeciesData {
                name: "Seismitoad".to_owned(),
                num: 537,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 105,
                    atk: 95,
                    def: 75,
                    spa: 85,
                    spd: 75,
                    spe: 74,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("poisontouch")),
                    hidden: Some(Id::from_known("waterabsorb")),
                },
                height_m: 1.5,
                weight_kg: 62.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("palpitoad")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("throh"),
            SpeciesData {
                name: "Throh".to_owned(),
                num: 538,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 120,
                    atk: 100,
                    def: 85,
                    spa: 30,
                    spd: 85,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.3,
                weight_kg: 55.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sawk"),
            SpeciesData {
                name: "Sawk".to_owned(),
                num: 539,
                primary_type: Type::Fighting,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 75,
                    atk: 125,
                    def: 75,
                    spa: 30,
                    spd: 75,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.4,
                weight_kg: 51.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sewaddle"),
            SpeciesData {
                name: "Sewaddle".to_owned(),
                num: 540,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 45,
                    atk: 53,
                    def: 70,
                    spa: 40,
                    spd: 60,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 0.3,
                weight_kg: 2.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swadloon"),
            SpeciesData {
                name: "Swadloon".to_owned(),
                num: 541,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 55,
                    atk: 63,
                    def: 90,
                    spa: 50,
                    spd: 80,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    secondary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 0.5,
                weight_kg: 7.3,
                color: Color::Green,
                prevo: Some(Id::from_known("sewaddle")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("leavanny"),
            SpeciesData {
                name: "Leavanny".to_owned(),
                num: 542,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 75,
                    atk: 103,
                    def: 80,
                    spa: 70,
                    spd: 80,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 1.2,
                weight_kg: 20.5,
                color: Color::Yellow,
                prevo: Some(Id::from_known("swadloon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("venipede"),
            SpeciesData {
                name: "Venipede".to_owned(),
                num: 543,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 30,
                    atk: 45,
                    def: 59,
                    spa: 30,
                    spd: 39,
                    spe: 57,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("speedboost")),
                },
                height_m: 0.4,
                weight_kg: 5.3,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("whirlipede"),
            SpeciesData {
                name: "Whirlipede".to_owned(),
                num: 544,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 55,
                    def: 99,
                    spa: 40,
                    spd: 79,
                    spe: 47,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("speedboost")),
                },
                height_m: 1.2,
                weight_kg: 58.5,
                color: Color::Gray,
                prevo: Some(Id::from_known("venipede")),
                ..Default::default()
            },
        ),
    ])
}
