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

/// Species numbered 901 to 950.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("ursaluna"),
            SpeciesData {
                name: "Ursaluna".to_owned(),
                num: 901,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 130,
                    atk: 140,
                    def: 105,
                    spa: 45,
                    spd: 80,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("bulletproof")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 2.4,
                weight_kg: 290.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ursalunabloodmoon"),
            SpeciesData {
                name: "Ursaluna-Bloodmoon".to_owned(),
                num: 901,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Normal),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 113,
                    atk: 70,
                    def: 120,
                    spa: 135,
                    spd: 65,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("mindseye")),
                    ..Default::default()
                },
                height_m: 2.7,
                weight_kg: 333.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("ursaluna")),
                forme: Some("Bloodmoon".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("basculegion"),
            SpeciesData {
                name: "Basculegion".to_owned(),
                num: 902,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 120,
                    atk: 112,
                    def: 65,
                    spa: 80,
                    spd: 75,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 3.0,
                weight_kg: 110.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("basculegionf"),
            SpeciesData {
                name: "Basculegion-F".to_owned(),
                num: 902,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 120,
                    atk: 92,
                    def: 65,
                    spa: 100,
                    spd: 75,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("adaptability")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 3.0,
                weight_kg: 110.0,
                color: Color::Green,
                base_species: Some(Id::from_known("basculegion")),
                forme: Some("F".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sneasler"),
            SpeciesData {
                name: "Sneasler".to_owned(),
                num: 903,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 130,
                    def: 60,
                    spa: 40,
                    spd: 80,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pressure")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("poisontouch")),
                },
                height_m: 1.3,
                weight_kg: 43.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("overqwil"),
            SpeciesData {
                name: "Overqwil".to_owned(),
                num: 904,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 85,
                    atk: 115,
                    def: 95,
                    spa: 65,
                    spd: 65,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("intimidate")),
                },
                height_m: 2.5,
                weight_kg: 60.5,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("enamorus"),
            SpeciesData {
                name: "Enamorus".to_owned(),
                num: 905,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 74,
                    atk: 115,
                    def: 70,
                    spa: 135,
                    spd: 80,
                    spe: 106,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 48.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("enamorustherian"),
            SpeciesData {
                name: "Enamorus-Therian".to_owned(),
                num: 905,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 74,
                    atk: 115,
                    def: 110,
                    spa: 135,
                    spd: 100,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 48.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("enamorus")),
                forme: Some("Therian".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sprigatito"),
            SpeciesData {
                name: "Sprigatito".to_owned(),
                num: 906,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 40,
                    atk: 61,
                    def: 54,
                    spa: 45,
                    spd: 45,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.1,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("floragato"),
            SpeciesData {
                name: "Floragato".to_owned(),
                num: 907,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 61,
                    atk: 80,
                    def: 63,
                    spa: 60,
                    spd: 63,
                    spe: 83,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 12.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowscarada"),
            SpeciesData {
                name: "Meowscarada".to_owned(),
                num: 908,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 76,
                    atk: 110,
                    def: 70,
                    spa: 81,
                    spd: 70,
                    spe: 123,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 31.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("fuecoco"),
            SpeciesData {
                name: "Fuecoco".to_owned(),
                num: 909,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 67,
                    atk: 45,
                    def: 59,
                    spa: 63,
                    spd: 40,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("unaware")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 9.8,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("crocalor"),
            SpeciesData {
                name: "Crocalor".to_owned(),
                num: 910,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 81,
                    atk: 55,
                    def: 78,
                    spa: 90,
                    spd: 58,
                    spe: 49,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("unaware")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 30.7,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("skeledirge"),
            SpeciesData {
                name: "Skeledirge".to_owned(),
                num: 911,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 104,
                    atk: 75,
                    def: 100,
                    spa: 110,
                    spd: 75,
                    spe: 66,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("unaware")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 326.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("quaxly"),
            SpeciesData {
                name: "Quaxly".to_owned(),
                num: 912,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 65,
                    def: 45,
                    spa: 50,
                    spd: 45,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("moxie")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 6.1,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("quaxwell"),
            SpeciesData {
                name: "Quaxwell".to_owned(),
                num: 913,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 65,
                    spa: 65,
                    spd: 60,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("moxie")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 21.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("quaquaval"),
            SpeciesData {
                name: "Quaquaval".to_owned(),
                num: 914,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 85,
                    atk: 120,
                    def: 80,
                    spa: 85,
                    spd: 75,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("moxie")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 61.9,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lechonk"),
            SpeciesData {
                name: "Lechonk".to_owned(),
                num: 915,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 54,
                    atk: 45,
                    def: 40,
                    spa: 35,
                    spd: 45,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aromaveil")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 0.5,
                weight_kg: 10.2,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oinkologne"),
            SpeciesData {
                name: "Oinkologne".to_owned(),
                num: 916,
                primary_type: Type::Normal,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 110,
                    atk: 100,
                    def: 75,
                    spa: 59,
                    spd: 80,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lingeringaroma")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 1.0,
                weight_kg: 120.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oinkolognef"),
            SpeciesData {
                name: "Oinkologne-F".to_owned(),
                num: 916,
                primary_type: Type::Normal,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 115,
                    atk: 90,
                    def: 70,
                    spa: 59,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aromaveil")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 1.0,
                weight_kg: 120.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("oinkologne")),
                forme: Some("F".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tarountula"),
            SpeciesData {
                name: "Tarountula".to_owned(),
                num: 917,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 35,
                    atk: 41,
                    def: 45,
                    spa: 29,
                    spd: 40,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("stakeout")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 4.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("spidops"),
            SpeciesData {
                name: "Spidops".to_owned(),
                num: 918,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 60,
                    atk: 79,
                    def: 92,
                    spa: 52,
                    spd: 86,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("stakeout")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 16.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nymble"),
            SpeciesData {
                name: "Nymble".to_owned(),
                num: 919,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 33,
                    atk: 46,
                    def: 40,
                    spa: 21,
                    spd: 25,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("tintedlens")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 1.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lokix"),
            SpeciesData {
                name: "Lokix".to_owned(),
                num: 920,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 71,
                    atk: 102,
                    def: 78,
                    spa: 52,
                    spd: 55,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("tintedlens")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 17.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pawmi"),
            SpeciesData {
                name: "Pawmi".to_owned(),
                num: 921,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 45,
                    atk: 50,
                    def: 20,
                    spa: 40,
                    spd: 25,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 0.3,
                weight_kg: 2.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pawmo"),
            SpeciesData {
                name: "Pawmo".to_owned(),
                num: 922,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 60,
                    atk: 75,
                    def: 40,
                    spa: 50,
                    spd: 40,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 0.4,
                weight_kg: 6.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pawmot"),
            SpeciesData {
                name: "Pawmot".to_owned(),
                num: 923,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 70,
                    atk: 115,
                    def: 70,
                    spa: 70,
                    spd: 60,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("naturalcure")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 0.9,
                weight_kg: 41.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tandemaus"),
            SpeciesData {
                name: "Tandemaus".to_owned(),
                num: 924,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 45,
                    spa: 40,
                    spd: 45,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("owntempo")),
                },
                height_m: 0.3,
                weight_kg: 1.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("maushold"),
            SpeciesData {
                name: "Maushold".to_owned(),
                num: 925,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 74,
                    atk: 75,
                    def: 70,
                    spa: 65,
                    spd: 75,
                    spe: 111,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("friendguard")),
                    secondary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 0.3,
                weight_kg: 2.3,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mausholdfour"),
            SpeciesData {
                name: "Maushold-Four".to_owned(),
                num: 925,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 74,
                    atk: 75,
                    def: 70,
                    spa: 65,
                    spd: 75,
                    spe: 111,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("friendguard")),
                    secondary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 0.3,
                weight_kg: 2.8,
                color: Color::White,
                base_species: Some(Id::from_known("maushold")),
                forme: Some("Four".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("fidough"),
            SpeciesData {
                name: "Fidough".to_owned(),
                num: 926,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 37,
                    atk: 55,
                    def: 70,
                    spa: 30,
                    spd: 55,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("klutz")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 10.9,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dachsbun"),
            SpeciesData {
                name: "Dachsbun".to_owned(),
                num: 927,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 57,
                    atk: 80,
                    def: 115,
                    spa: 50,
                    spd: 80,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wellbakedbody")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 14.9,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("smoliv"),
            SpeciesData {
                name: "Smoliv".to_owned(),
                num: 928,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 41,
                    atk: 35,
                    def: 45,
                    spa: 58,
                    spd: 51,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 6.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dolliv"),
            SpeciesData {
                name: "Dolliv".to_owned(),
                num: 929,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 52,
                    atk: 53,
                    def: 60,
                    spa: 78,
                    spd: 78,
                    spe: 33,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 11.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arboliva"),
            SpeciesData {
                name: "Arboliva".to_owned(),
                num: 930,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 78,
                    atk: 69,
                    def: 90,
                    spa: 125,
                    spd: 109,
                    spe: 39,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("seedsower")),
                    hidden: Some(Id::from_known("harvest")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 48.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("squawkabilly"),
            SpeciesData {
                name: "Squawkabilly".to_owned(),
                num: 931,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 82,
                    atk: 96,
                    def: 51,
                    spa: 45,
                    spd: 51,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("guts")),
                },
                height_m: 0.6,
                weight_kg: 2.4,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("squawkabillyblue"),
            SpeciesData {
                name: "Squawkabilly-Blue".to_owned(),
                num: 931,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 82,
                    atk: 96,
                    def: 51,
                    spa: 45,
                    spd: 51,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("guts")),
                },
                height_m: 0.6,
                weight_kg: 2.4,
                color: Color::Blue,
                base_species: Some(Id::from_known("squawkabilly")),
                forme: Some("Blue".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("squawkabillyyellow"),
            SpeciesData {
                name: "Squawkabilly-Yellow".to_owned(),
                num: 931,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 82,
                    atk: 96,
                    def: 51,
                    spa: 45,
                    spd: 51,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 0.6,
                weight_kg: 2.4,
                color: Color::Yellow,
                base_species: Some(Id::from_known("squawkabilly")),
                forme: Some("Yellow".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("squawkabillywhite"),
            SpeciesData {
                name: "Squawkabilly-White".to_owned(),
                num: 931,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 82,
                    atk: 96,
                    def: 51,
                    spa: 45,
                    spd: 51,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 0.6,
                weight_kg: 2.4,
                color: Color::White,
                base_species: Some(Id::from_known("squawkabilly")),
                forme: Some("White".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("nacli"),
            SpeciesData {
                name: "Nacli".to_owned(),
                num: 932,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 75,
                    spa: 35,
                    spd: 35,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("purifyingsalt")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("clearbody")),
                },
                height_m: 0.4,
                weight_kg: 16.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("naclstack"),
            SpeciesData {
                name: "Naclstack".to_owned(),
                num: 933,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 100,
                    spa: 35,
                    spd: 65,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("purifyingsalt")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("clearbody")),
                },
                height_m: 0.6,
                weight_kg: 105.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("garganacl"),
            SpeciesData {
                name: "Garganacl".to_owned(),
                num: 934,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 100,
                    atk: 100,
                    def: 130,
                    spa: 45,
                    spd: 90,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("purifyingsalt")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("clearbody")),
                },
                height_m: 2.3,
                weight_kg: 240.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("charcadet"),
            SpeciesData {
                name: "Charcadet".to_owned(),
                num: 935,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 40,
                    atk: 50,
                    def: 40,
                    spa: 50,
                    spd: 40,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("flamebody")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 10.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("armarouge"),
            SpeciesData {
                name: "Armarouge".to_owned(),
                num: 936,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 85,
                    atk: 60,
                    def: 100,
                    spa: 125,
                    spd: 80,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("weakarmor")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 85.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ceruledge"),
            SpeciesData {
                name: "Ceruledge".to_owned(),
                num: 937,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 75,
                    atk: 125,
                    def: 80,
                    spa: 60,
                    spd: 100,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("weakarmor")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 62.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tadbulb"),
            SpeciesData {
                name: "Tadbulb".to_owned(),
                num: 938,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 61,
                    atk: 31,
                    def: 41,
                    spa: 59,
                    spd: 35,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 0.3,
                weight_kg: 0.4,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bellibolt"),
            SpeciesData {
                name: "Bellibolt".to_owned(),
                num: 939,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 109,
                    atk: 64,
                    def: 91,
                    spa: 103,
                    spd: 83,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("electromorphosis")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 1.2,
                weight_kg: 113.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wattrel"),
            SpeciesData {
                name: "Wattrel".to_owned(),
                num: 940,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 35,
                    spa: 55,
                    spd: 40,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("windpower")),
                    secondary: Some(Id::from_known("voltabsorb")),
                    hidden: Some(Id::from_known("competitive")),
                },
                height_m: 0.4,
                weight_kg: 3.6,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kilowattrel"),
            SpeciesData {
                name: "Kilowattrel".to_owned(),
                num: 941,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 60,
                    spa: 105,
                    spd: 60,
                    spe: 125,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("windpower")),
                    secondary: Some(Id::from_known("voltabsorb")),
                    hidden: Some(Id::from_known("competitive")),
                },
                height_m: 1.4,
                weight_kg: 38.6,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("maschiff"),
            SpeciesData {
                name: "Maschiff".to_owned(),
                num: 942,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 60,
                    atk: 78,
                    def: 60,
                    spa: 40,
                    spd: 51,
                    spe: 51,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("runaway")),
                    hidden: Some(Id::from_known("stakeout")),
                },
                height_m: 0.5,
                weight_kg: 16.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mabosstiff"),
            SpeciesData {
                name: "Mabosstiff".to_owned(),
                num: 943,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 90,
                    spa: 60,
                    spd: 70,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("guarddog")),
                    hidden: Some(Id::from_known("stakeout")),
                },
                height_m: 1.1,
                weight_kg: 61.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shroodle"),
            SpeciesData {
                name: "Shroodle".to_owned(),
                num: 944,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 40,
                    atk: 65,
                    def: 35,
                    spa: 40,
                    spd: 35,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unburden")),
                    secondary: Some(Id::from_known("pickpocket")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 0.2,
                weight_kg: 0.7,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grafaiai"),
            SpeciesData {
                name: "Grafaiai".to_owned(),
                num: 945,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 63,
                    atk: 95,
                    def: 65,
                    spa: 80,
                    spd: 72,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unburden")),
                    secondary: Some(Id::from_known("poisontouch")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 0.7,
                weight_kg: 27.2,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bramblin"),
            SpeciesData {
                name: "Bramblin".to_owned(),
                num: 946,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 40,
                    atk: 65,
                    def: 30,
                    spa: 45,
                    spd: 35,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("windrider")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 0.6,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("brambleghast"),
            SpeciesData {
                name: "Brambleghast".to_owned(),
                num: 947,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 55,
                    atk: 115,
                    def: 70,
                    spa: 80,
                    spd: 70,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("windrider")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 6.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toedscool"),
            SpeciesData {
                name: "Toedscool".to_owned(),
                num: 948,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 35,
                    spa: 50,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("myceliummight")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 33.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toedscruel"),
            SpeciesData {
                name: "Toedscruel".to_owned(),
                num: 949,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 80,
                    atk: 70,
                    def: 65,
                    spa: 80,
                    spd: 120,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("myceliummight")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 58.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("klawf"),
            SpeciesData {
                name: "Klawf".to_owned(),
                num: 950,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 70,
                    atk: 100,
                    def: 115,
                    spa: 35,
                    spd: 55,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("angershell")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.3,
                weight_kg: 79.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
    ])
}
