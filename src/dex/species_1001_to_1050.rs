use crate::{
    AbilitySlots,
    Color,
    Gender,
    Id,
    SpeciesData,
    SpeciesFlag,
    StatTable,
    Type,
    dex::SpeciesTable,
};

/// Species numbered 1001 to 1050.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("wochien"),
            SpeciesData {
                name: "Wo-Chien".to_owned(),
                num: 1001,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 85,
                    atk: 85,
                    def: 100,
                    spa: 95,
                    spd: 135,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("tabletsofruin")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 74.2,
                color: Color::Brown,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chienpao"),
            SpeciesData {
                name: "Chien-Pao".to_owned(),
                num: 1002,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Ice),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 80,
                    spa: 90,
                    spd: 65,
                    spe: 135,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swordofruin")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 152.2,
                color: Color::White,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tinglu"),
            SpeciesData {
                name: "Ting-Lu".to_owned(),
                num: 1003,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 155,
                    atk: 110,
                    def: 125,
                    spa: 55,
                    spd: 80,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vesselofruin")),
                    ..Default::default()
                },
                height_m: 2.7,
                weight_kg: 699.7,
                color: Color::Brown,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chiyu"),
            SpeciesData {
                name: "Chi-Yu".to_owned(),
                num: 1004,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 55,
                    atk: 80,
                    def: 80,
                    spa: 135,
                    spd: 120,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beadsofruin")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.9,
                color: Color::Red,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("roaringmoon"),
            SpeciesData {
                name: "Roaring Moon".to_owned(),
                num: 1005,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Dark),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 139,
                    def: 71,
                    spa: 55,
                    spd: 101,
                    spe: 119,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 380.0,
                color: Color::Blue,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironvaliant"),
            SpeciesData {
                name: "Iron Valiant".to_owned(),
                num: 1006,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 74,
                    atk: 130,
                    def: 90,
                    spa: 120,
                    spd: 60,
                    spe: 116,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 35.0,
                color: Color::White,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("koraidon"),
            SpeciesData {
                name: "Koraidon".to_owned(),
                num: 1007,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 135,
                    def: 115,
                    spa: 85,
                    spd: 100,
                    spe: 135,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("orichalcumpulse")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 303.0,
                color: Color::Red,
                tags: Vec::from([SpeciesFlag::RestrictedLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("miraidon"),
            SpeciesData {
                name: "Miraidon".to_owned(),
                num: 1008,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 100,
                    atk: 85,
                    def: 100,
                    spa: 135,
                    spd: 115,
                    spe: 135,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hadronengine")),
                    ..Default::default()
                },
                height_m: 3.5,
                weight_kg: 240.0,
                color: Color::Purple,
                tags: Vec::from([SpeciesFlag::RestrictedLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("walkingwake"),
            SpeciesData {
                name: "Walking Wake".to_owned(),
                num: 1009,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 99,
                    atk: 83,
                    def: 91,
                    spa: 125,
                    spd: 83,
                    spe: 109,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 3.5,
                weight_kg: 280.0,
                color: Color::Blue,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironleaves"),
            SpeciesData {
                name: "Iron Leaves".to_owned(),
                num: 1010,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 130,
                    def: 88,
                    spa: 70,
                    spd: 108,
                    spe: 104,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 125.0,
                color: Color::Green,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dipplin"),
            SpeciesData {
                name: "Dipplin".to_owned(),
                num: 1011,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 110,
                    spa: 95,
                    spd: 80,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("supersweetsyrup")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("stickyhold")),
                },
                height_m: 0.4,
                weight_kg: 4.4,
                color: Color::Green,
                prevo: Some(Id::from_known("applin")),
                evos: Vec::from([Id::from_known("hydrapple")]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("poltchageist"),
            SpeciesData {
                name: "Poltchageist".to_owned(),
                num: 1012,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
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
                    primary: Some(Id::from_known("hospitality")),
                    hidden: Some(Id::from_known("heatproof")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 1.1,
                color: Color::Green,
                base_forme: Some("Counterfeit".to_owned()),
                evos: Vec::from([Id::from_known("sinistcha")]),
                other_formes: Vec::from(["Artisan".to_owned()]),
                forme_order: Vec::from(["Counterfeit".to_owned(), "Artisan".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("poltchageistartisan"),
            SpeciesData {
                name: "Poltchageist-Artisan".to_owned(),
                num: 1012,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
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
                    primary: Some(Id::from_known("hospitality")),
                    hidden: Some(Id::from_known("heatproof")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 1.1,
                color: Color::Green,
                base_species: Some(Id::from_known("poltchageist")),
                forme: Some("Artisan".to_owned()),
                evos: Vec::from([Id::from_known("sinistchamasterpiece")]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sinistcha"),
            SpeciesData {
                name: "Sinistcha".to_owned(),
                num: 1013,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 60,
                    def: 106,
                    spa: 121,
                    spd: 80,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hospitality")),
                    hidden: Some(Id::from_known("heatproof")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 2.2,
                color: Color::Green,
                base_forme: Some("Unremarkable".to_owned()),
                prevo: Some(Id::from_known("poltchageist")),
                other_formes: Vec::from(["Masterpiece".to_owned()]),
                forme_order: Vec::from(["Unremarkable".to_owned(), "Masterpiece".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sinistchamasterpiece"),
            SpeciesData {
                name: "Sinistcha-Masterpiece".to_owned(),
                num: 1013,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 60,
                    def: 106,
                    spa: 121,
                    spd: 80,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hospitality")),
                    hidden: Some(Id::from_known("heatproof")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 2.2,
                color: Color::Green,
                base_species: Some(Id::from_known("sinistcha")),
                forme: Some("Masterpiece".to_owned()),
                prevo: Some(Id::from_known("poltchageistartisan")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("okidogi"),
            SpeciesData {
                name: "Okidogi".to_owned(),
                num: 1014,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 88,
                    atk: 128,
                    def: 115,
                    spa: 58,
                    spd: 86,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toxicchain")),
                    hidden: Some(Id::from_known("guarddog")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 92.0,
                color: Color::Black,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("munkidori"),
            SpeciesData {
                name: "Munkidori".to_owned(),
                num: 1015,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 88,
                    atk: 75,
                    def: 66,
                    spa: 130,
                    spd: 90,
                    spe: 106,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toxicchain")),
                    hidden: Some(Id::from_known("frisk")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 12.2,
                color: Color::Black,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("fezandipiti"),
            SpeciesData {
                name: "Fezandipiti".to_owned(),
                num: 1016,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 88,
                    atk: 91,
                    def: 82,
                    spa: 70,
                    spd: 125,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toxicchain")),
                    hidden: Some(Id::from_known("technician")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 30.1,
                color: Color::Black,
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerpon"),
            SpeciesData {
                name: "Ogerpon".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Green,
                base_forme: Some("Teal".to_owned()),
                other_formes: Vec::from([
                    "Wellspring".to_owned(),
                    "Hearthflame".to_owned(),
                    "Cornerstone".to_owned(),
                    "Teal-Tera".to_owned(),
                    "Wellspring-Tera".to_owned(),
                    "Hearthflame-Tera".to_owned(),
                    "Cornerstone-Tera".to_owned(),
                ]),
                forme_order: Vec::from([
                    "Teal".to_owned(),
                    "Wellspring".to_owned(),
                    "Hearthflame".to_owned(),
                    "Cornerstone".to_owned(),
                    "Teal-Tera".to_owned(),
                    "Wellspring-Tera".to_owned(),
                    "Hearthflame-Tera".to_owned(),
                    "Cornerstone-Tera".to_owned(),
                ]),
                tags: Vec::from([SpeciesFlag::SubLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponwellspring"),
            SpeciesData {
                name: "Ogerpon-Wellspring".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Blue,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Wellspring".to_owned()),
                changes_from: Some("Teal".to_owned()),
                required_item: Some(Id::from_known("wellspringmask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponhearthflame"),
            SpeciesData {
                name: "Ogerpon-Hearthflame".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Red,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Hearthflame".to_owned()),
                changes_from: Some("Teal".to_owned()),
                required_item: Some(Id::from_known("hearthflamemask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponcornerstone"),
            SpeciesData {
                name: "Ogerpon-Cornerstone".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Rock),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Gray,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Cornerstone".to_owned()),
                changes_from: Some("Teal".to_owned()),
                required_item: Some(Id::from_known("cornerstonemask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerpontealtera"),
            SpeciesData {
                name: "Ogerpon-Teal-Tera".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("embodyaspectteal")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Green,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Teal-Tera".to_owned()),
                battle_only: Some("Teal".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponwellspringtera"),
            SpeciesData {
                name: "Ogerpon-Wellspring-Tera".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("embodyaspectwellspring")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Blue,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Wellspring-Tera".to_owned()),
                battle_only: Some("Wellspring".to_owned()),
                required_item: Some(Id::from_known("wellspringmask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponhearthflametera"),
            SpeciesData {
                name: "Ogerpon-Hearthflame-Tera".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("embodyaspecthearthflame")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Red,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Hearthflame-Tera".to_owned()),
                battle_only: Some("Hearthflame".to_owned()),
                required_item: Some(Id::from_known("hearthflamemask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ogerponcornerstonetera"),
            SpeciesData {
                name: "Ogerpon-Cornerstone-Tera".to_owned(),
                num: 1017,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Rock),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 84,
                    spa: 60,
                    spd: 96,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("embodyaspectcornerstone")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 39.8,
                color: Color::Gray,
                base_species: Some(Id::from_known("ogerpon")),
                forme: Some("Cornerstone-Tera".to_owned()),
                battle_only: Some("Cornerstone".to_owned()),
                required_item: Some(Id::from_known("cornerstonemask")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("archaludon"),
            SpeciesData {
                name: "Archaludon".to_owned(),
                num: 1018,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 90,
                    atk: 105,
                    def: 130,
                    spa: 125,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stamina")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("stalwart")),
                },
                height_m: 2.0,
                weight_kg: 60.0,
                color: Color::White,
                prevo: Some(Id::from_known("duraludon")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("hydrapple"),
            SpeciesData {
                name: "Hydrapple".to_owned(),
                num: 1019,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 106,
                    atk: 80,
                    def: 110,
                    spa: 120,
                    spd: 80,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("supersweetsyrup")),
                    secondary: Some(Id::from_known("regenerator")),
                    hidden: Some(Id::from_known("stickyhold")),
                },
                height_m: 1.8,
                weight_kg: 93.0,
                color: Color::Green,
                prevo: Some(Id::from_known("dipplin")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gougingfire"),
            SpeciesData {
                name: "Gouging Fire".to_owned(),
                num: 1020,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 105,
                    atk: 115,
                    def: 121,
                    spa: 65,
                    spd: 93,
                    spe: 91,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 3.5,
                weight_kg: 590.0,
                color: Color::Brown,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ragingbolt"),
            SpeciesData {
                name: "Raging Bolt".to_owned(),
                num: 1021,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 125,
                    atk: 73,
                    def: 91,
                    spa: 137,
                    spd: 89,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("protosynthesis")),
                    ..Default::default()
                },
                height_m: 5.2,
                weight_kg: 480.0,
                color: Color::Yellow,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironboulder"),
            SpeciesData {
                name: "Iron Boulder".to_owned(),
                num: 1022,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 120,
                    def: 80,
                    spa: 68,
                    spd: 108,
                    spe: 124,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 162.5,
                color: Color::Gray,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ironcrown"),
            SpeciesData {
                name: "Iron Crown".to_owned(),
                num: 1023,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Psychic),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 90,
                    atk: 72,
                    def: 100,
                    spa: 122,
                    spd: 108,
                    spe: 98,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quarkdrive")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 156.0,
                color: Color::Blue,
                tags: Vec::from([SpeciesFlag::Paradox]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("terapagos"),
            SpeciesData {
                name: "Terapagos".to_owned(),
                num: 1024,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 90,
                    atk: 65,
                    def: 85,
                    spa: 65,
                    spd: 85,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("terashift")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 6.5,
                color: Color::Blue,
                other_formes: Vec::from(["Terastal".to_owned(), "Stellar".to_owned()]),
                forme_order: Vec::from([
                    "None".to_owned(),
                    "Terastal".to_owned(),
                    "Stellar".to_owned(),
                ]),
                tags: Vec::from([SpeciesFlag::RestrictedLegendary]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("terapagosterastal"),
            SpeciesData {
                name: "Terapagos-Terastal".to_owned(),
                num: 1024,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 110,
                    spa: 105,
                    spd: 110,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("terashell")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 16.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("terapagos")),
                forme: Some("Terastal".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("terapagosstellar"),
            SpeciesData {
                name: "Terapagos-Stellar".to_owned(),
                num: 1024,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 160,
                    atk: 105,
                    def: 110,
                    spa: 130,
                    spd: 110,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("teraformzero")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 77.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("terapagos")),
                forme: Some("Stellar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pecharunt"),
            SpeciesData {
                name: "Pecharunt".to_owned(),
                num: 1025,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 88,
                    atk: 88,
                    def: 160,
                    spa: 88,
                    spd: 88,
                    spe: 88,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpuppeteer")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Purple,
                tags: Vec::from([SpeciesFlag::Mythical]),
                ..Default::default()
            },
        ),
    ])
}
