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

/// Species numbered 51 to 100.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("dugtrio"),
            SpeciesData {
                name: "Dugtrio".to_owned(),
                num: 51,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 35,
                    atk: 100,
                    def: 50,
                    spa: 50,
                    spd: 70,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    secondary: Some(Id::from_known("arenatrap")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.7,
                weight_kg: 33.3,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dugtrioalola"),
            SpeciesData {
                name: "Dugtrio-Alola".to_owned(),
                num: 51,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 35,
                    atk: 100,
                    def: 60,
                    spa: 50,
                    spd: 70,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    secondary: Some(Id::from_known("tanglinghair")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.7,
                weight_kg: 66.6,
                color: Color::Brown,
                base_species: Some(Id::from_known("dugtrio")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowth"),
            SpeciesData {
                name: "Meowth".to_owned(),
                num: 52,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 35,
                    spa: 40,
                    spd: 40,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 0.4,
                weight_kg: 4.2,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowthalola"),
            SpeciesData {
                name: "Meowth-Alola".to_owned(),
                num: 52,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 40,
                    atk: 35,
                    def: 35,
                    spa: 50,
                    spd: 40,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 0.4,
                weight_kg: 4.2,
                color: Color::Blue,
                base_species: Some(Id::from_known("meowth")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowthgalar"),
            SpeciesData {
                name: "Meowth-Galar".to_owned(),
                num: 52,
                primary_type: Type::Steel,
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 55,
                    spa: 40,
                    spd: 40,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("toughclaws")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 0.4,
                weight_kg: 7.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("meowth")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("persian"),
            SpeciesData {
                name: "Persian".to_owned(),
                num: 53,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 65,
                    atk: 70,
                    def: 60,
                    spa: 65,
                    spd: 65,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 1.0,
                weight_kg: 32.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("persianalola"),
            SpeciesData {
                name: "Persian-Alola".to_owned(),
                num: 53,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 65,
                    atk: 60,
                    def: 60,
                    spa: 75,
                    spd: 65,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("furcoat")),
                    secondary: Some(Id::from_known("technician")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 1.1,
                weight_kg: 33.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("persian")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("psyduck"),
            SpeciesData {
                name: "Psyduck".to_owned(),
                num: 54,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 52,
                    def: 48,
                    spa: 65,
                    spd: 50,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("damp")),
                    secondary: Some(Id::from_known("cloudnine")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 0.8,
                weight_kg: 19.6,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golduck"),
            SpeciesData {
                name: "Golduck".to_owned(),
                num: 55,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 80,
                    atk: 82,
                    def: 78,
                    spa: 95,
                    spd: 80,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("damp")),
                    secondary: Some(Id::from_known("cloudnine")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 1.7,
                weight_kg: 76.6,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mankey"),
            SpeciesData {
                name: "Mankey".to_owned(),
                num: 56,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 40,
                    atk: 80,
                    def: 35,
                    spa: 35,
                    spd: 45,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 0.5,
                weight_kg: 28.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("primeape"),
            SpeciesData {
                name: "Primeape".to_owned(),
                num: 57,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 65,
                    atk: 105,
                    def: 60,
                    spa: 60,
                    spd: 70,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    secondary: Some(Id::from_known("angerpoint")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 1.0,
                weight_kg: 32.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("growlithe"),
            SpeciesData {
                name: "Growlithe".to_owned(),
                num: 58,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 55,
                    atk: 70,
                    def: 45,
                    spa: 70,
                    spd: 50,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("justified")),
                },
                height_m: 0.7,
                weight_kg: 19.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("growlithehisui"),
            SpeciesData {
                name: "Growlithe-Hisui".to_owned(),
                num: 58,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 60,
                    atk: 75,
                    def: 45,
                    spa: 65,
                    spd: 50,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("rockhead")),
                },
                height_m: 0.8,
                weight_kg: 22.7,
                color: Color::Brown,
                base_species: Some(Id::from_known("growlithe")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("arcanine"),
            SpeciesData {
                name: "Arcanine".to_owned(),
                num: 59,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 90,
                    atk: 110,
                    def: 80,
                    spa: 100,
                    spd: 80,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("justified")),
                },
                height_m: 1.9,
                weight_kg: 155.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arcaninehisui"),
            SpeciesData {
                name: "Arcanine-Hisui".to_owned(),
                num: 59,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 95,
                    atk: 115,
                    def: 80,
                    spa: 95,
                    spd: 80,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("rockhead")),
                },
                height_m: 2.0,
                weight_kg: 168.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("arcanine")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("poliwag"),
            SpeciesData {
                name: "Poliwag".to_owned(),
                num: 60,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 40,
                    atk: 50,
                    def: 40,
                    spa: 40,
                    spd: 40,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("damp")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 0.6,
                weight_kg: 12.4,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("poliwhirl"),
            SpeciesData {
                name: "Poliwhirl".to_owned(),
                num: 61,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 65,
                    atk: 65,
                    def: 65,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("damp")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 1.0,
                weight_kg: 20.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("poliwrath"),
            SpeciesData {
                name: "Poliwrath".to_owned(),
                num: 62,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 90,
                    atk: 95,
                    def: 95,
                    spa: 70,
                    spd: 90,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("damp")),
                    hidden: Some(Id::from_known("swiftswim")),
                },
                height_m: 1.3,
                weight_kg: 54.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("abra"),
            SpeciesData {
                name: "Abra".to_owned(),
                num: 63,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 25,
                    atk: 20,
                    def: 15,
                    spa: 105,
                    spd: 55,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("magicguard")),
                },
                height_m: 0.9,
                weight_kg: 19.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kadabra"),
            SpeciesData {
                name: "Kadabra".to_owned(),
                num: 64,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 40,
                    atk: 35,
                    def: 30,
                    spa: 120,
                    spd: 70,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("magicguard")),
                },
                height_m: 1.3,
                weight_kg: 56.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("alakazam"),
            SpeciesData {
                name: "Alakazam".to_owned(),
                num: 65,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 55,
                    atk: 50,
                    def: 45,
                    spa: 135,
                    spd: 95,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("magicguard")),
                },
                height_m: 1.5,
                weight_kg: 48.0,
                color: Color::Brown,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("alakazammega"),
            SpeciesData {
                name: "Alakazam-Mega".to_owned(),
                num: 65,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 55,
                    atk: 50,
                    def: 65,
                    spa: 175,
                    spd: 105,
                    spe: 150,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("trace")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 48.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("alakazam")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("alakazite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("machop"),
            SpeciesData {
                name: "Machop".to_owned(),
                num: 66,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 70,
                    atk: 80,
                    def: 50,
                    spa: 35,
                    spd: 35,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("noguard")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 0.8,
                weight_kg: 19.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("machoke"),
            SpeciesData {
                name: "Machoke".to_owned(),
                num: 67,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 70,
                    spa: 50,
                    spd: 60,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("noguard")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 1.5,
                weight_kg: 70.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("machamp"),
            SpeciesData {
                name: "Machamp".to_owned(),
                num: 68,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 90,
                    atk: 130,
                    def: 80,
                    spa: 65,
                    spd: 85,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    secondary: Some(Id::from_known("noguard")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 1.6,
                weight_kg: 130.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bellsprout"),
            SpeciesData {
                name: "Bellsprout".to_owned(),
                num: 69,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 50,
                    atk: 75,
                    def: 35,
                    spa: 70,
                    spd: 30,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 4.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("weepinbell"),
            SpeciesData {
                name: "Weepinbell".to_owned(),
                num: 70,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 50,
                    spa: 85,
                    spd: 45,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 6.4,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("victreebel"),
            SpeciesData {
                name: "Victreebel".to_owned(),
                num: 71,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 105,
                    def: 65,
                    spa: 100,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 15.5,
                color: Color::Green,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("victreebelmega"),
            SpeciesData {
                name: "Victreebel-Mega".to_owned(),
                num: 71,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 125,
                    def: 85,
                    spa: 135,
                    spd: 95,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("gluttony")),
                    ..Default::default()
                },
                height_m: 4.5,
                weight_kg: 125.5,
                color: Color::Green,
                base_species: Some(Id::from_known("victreebel")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("victrebelite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tentacool"),
            SpeciesData {
                name: "Tentacool".to_owned(),
                num: 72,
                primary_type: Type::Water,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 35,
                    spa: 50,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    secondary: Some(Id::from_known("liquidooze")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 0.9,
                weight_kg: 45.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tentacruel"),
            SpeciesData {
                name: "Tentacruel".to_owned(),
                num: 73,
                primary_type: Type::Water,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 70,
                    def: 65,
                    spa: 80,
                    spd: 120,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    secondary: Some(Id::from_known("liquidooze")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 1.6,
                weight_kg: 55.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("geodude"),
            SpeciesData {
                name: "Geodude".to_owned(),
                num: 74,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 40,
                    atk: 80,
                    def: 100,
                    spa: 30,
                    spd: 30,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 0.4,
                weight_kg: 20.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("geodudealola"),
            SpeciesData {
                name: "Geodude-Alola".to_owned(),
                num: 74,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 40,
                    atk: 80,
                    def: 100,
                    spa: 30,
                    spd: 30,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("galvanize")),
                },
                height_m: 0.4,
                weight_kg: 20.3,
                color: Color::Gray,
                base_species: Some(Id::from_known("geodude")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("graveler"),
            SpeciesData {
                name: "Graveler".to_owned(),
                num: 75,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 55,
                    atk: 95,
                    def: 115,
                    spa: 45,
                    spd: 45,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 1.0,
                weight_kg: 105.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("graveleralola"),
            SpeciesData {
                name: "Graveler-Alola".to_owned(),
                num: 75,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 55,
                    atk: 95,
                    def: 115,
                    spa: 45,
                    spd: 45,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("galvanize")),
                },
                height_m: 1.0,
                weight_kg: 110.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("graveler")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("golem"),
            SpeciesData {
                name: "Golem".to_owned(),
                num: 76,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 130,
                    spa: 55,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("sandveil")),
                },
                height_m: 1.4,
                weight_kg: 300.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golemalola"),
            SpeciesData {
                name: "Golem-Alola".to_owned(),
                num: 76,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 130,
                    spa: 55,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("galvanize")),
                },
                height_m: 1.7,
                weight_kg: 316.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("golem")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ponyta"),
            SpeciesData {
                name: "Ponyta".to_owned(),
                num: 77,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 50,
                    atk: 85,
                    def: 55,
                    spa: 65,
                    spd: 65,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("flamebody")),
                },
                height_m: 1.0,
                weight_kg: 30.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ponytagalar"),
            SpeciesData {
                name: "Ponyta-Galar".to_owned(),
                num: 77,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 50,
                    atk: 85,
                    def: 55,
                    spa: 65,
                    spd: 65,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("pastelveil")),
                    hidden: Some(Id::from_known("anticipation")),
                },
                height_m: 0.8,
                weight_kg: 24.0,
                color: Color::White,
                base_species: Some(Id::from_known("ponyta")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rapidash"),
            SpeciesData {
                name: "Rapidash".to_owned(),
                num: 78,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 100,
                    def: 70,
                    spa: 80,
                    spd: 80,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("flamebody")),
                },
                height_m: 1.7,
                weight_kg: 95.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rapidashgalar"),
            SpeciesData {
                name: "Rapidash-Galar".to_owned(),
                num: 78,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 65,
                    atk: 100,
                    def: 70,
                    spa: 80,
                    spd: 80,
                    spe: 105,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("pastelveil")),
                    hidden: Some(Id::from_known("anticipation")),
                },
                height_m: 1.7,
                weight_kg: 80.0,
                color: Color::White,
                base_species: Some(Id::from_known("rapidash")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowpoke"),
            SpeciesData {
                name: "Slowpoke".to_owned(),
                num: 79,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 90,
                    atk: 65,
                    def: 65,
                    spa: 40,
                    spd: 40,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.2,
                weight_kg: 36.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowpokegalar"),
            SpeciesData {
                name: "Slowpoke-Galar".to_owned(),
                num: 79,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 90,
                    atk: 65,
                    def: 65,
                    spa: 40,
                    spd: 40,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.2,
                weight_kg: 36.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("slowpoke")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowbro"),
            SpeciesData {
                name: "Slowbro".to_owned(),
                num: 80,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 75,
                    def: 110,
                    spa: 100,
                    spd: 80,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.6,
                weight_kg: 78.5,
                color: Color::Pink,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowbromega"),
            SpeciesData {
                name: "Slowbro-Mega".to_owned(),
                num: 80,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 75,
                    def: 180,
                    spa: 130,
                    spd: 80,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shellarmor")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 120.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("slowbro")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("slowbronite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowbrogalar"),
            SpeciesData {
                name: "Slowbro-Galar".to_owned(),
                num: 80,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 100,
                    def: 95,
                    spa: 100,
                    spd: 70,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("quickdraw")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.6,
                weight_kg: 70.5,
                color: Color::Pink,
                base_species: Some(Id::from_known("slowbro")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("magnemite"),
            SpeciesData {
                name: "Magnemite".to_owned(),
                num: 81,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 25,
                    atk: 35,
                    def: 70,
                    spa: 95,
                    spd: 55,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 0.3,
                weight_kg: 6.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("magneton"),
            SpeciesData {
                name: "Magneton".to_owned(),
                num: 82,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 60,
                    def: 95,
                    spa: 120,
                    spd: 70,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magnetpull")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("analytic")),
                },
                height_m: 1.0,
                weight_kg: 60.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("farfetchd"),
            SpeciesData {
                name: "Farfetch’d".to_owned(),
                num: 83,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 52,
                    atk: 90,
                    def: 55,
                    spa: 58,
                    spd: 62,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("defiant")),
                },
                height_m: 0.8,
                weight_kg: 15.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("farfetchdgalar"),
            SpeciesData {
                name: "Farfetch’d-Galar".to_owned(),
                num: 83,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 52,
                    atk: 95,
                    def: 55,
                    spa: 58,
                    spd: 62,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steadfast")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 42.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("farfetchd")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("doduo"),
            SpeciesData {
                name: "Doduo".to_owned(),
                num: 84,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 35,
                    atk: 85,
                    def: 45,
                    spa: 35,
                    spd: 35,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("tangledfeet")),
                },
                height_m: 1.4,
                weight_kg: 39.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dodrio"),
            SpeciesData {
                name: "Dodrio".to_owned(),
                num: 85,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 110,
                    def: 70,
                    spa: 60,
                    spd: 60,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("tangledfeet")),
                },
                height_m: 1.8,
                weight_kg: 85.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("seel"),
            SpeciesData {
                name: "Seel".to_owned(),
                num: 86,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 65,
                    atk: 45,
                    def: 55,
                    spa: 45,
                    spd: 70,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("icebody")),
                },
                height_m: 1.1,
                weight_kg: 90.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dewgong"),
            SpeciesData {
                name: "Dewgong".to_owned(),
                num: 87,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 90,
                    atk: 70,
                    def: 80,
                    spa: 70,
                    spd: 95,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("icebody")),
                },
                height_m: 1.7,
                weight_kg: 120.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grimer"),
            SpeciesData {
                name: "Grimer".to_owned(),
                num: 88,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stench")),
                    secondary: Some(Id::from_known("stickyhold")),
                    hidden: Some(Id::from_known("poisontouch")),
                },
                height_m: 0.9,
                weight_kg: 30.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grimeralola"),
            SpeciesData {
                name: "Grimer-Alola".to_owned(),
                num: 88,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisontouch")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("powerofalchemy")),
                },
                height_m: 0.7,
                weight_kg: 42.0,
                color: Color::Green,
                base_species: Some(Id::from_known("grimer")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("muk"),
            SpeciesData {
                name: "Muk".to_owned(),
                num: 89,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 105,
                    atk: 105,
                    def: 75,
                    spa: 65,
                    spd: 100,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stench")),
                    secondary: Some(Id::from_known("stickyhold")),
                    hidden: Some(Id::from_known("poisontouch")),
                },
                height_m: 1.2,
                weight_kg: 30.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mukalola"),
            SpeciesData {
                name: "Muk-Alola".to_owned(),
                num: 89,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 105,
                    atk: 105,
                    def: 75,
                    spa: 65,
                    spd: 100,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisontouch")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("powerofalchemy")),
                },
                height_m: 1.0,
                weight_kg: 52.0,
                color: Color::Green,
                base_species: Some(Id::from_known("muk")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("shellder"),
            SpeciesData {
                name: "Shellder".to_owned(),
                num: 90,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 30,
                    atk: 65,
                    def: 100,
                    spa: 45,
                    spd: 25,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shellarmor")),
                    secondary: Some(Id::from_known("skilllink")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 0.3,
                weight_kg: 4.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cloyster"),
            SpeciesData {
                name: "Cloyster".to_owned(),
                num: 91,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 50,
                    atk: 95,
                    def: 180,
                    spa: 85,
                    spd: 45,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shellarmor")),
                    secondary: Some(Id::from_known("skilllink")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 1.5,
                weight_kg: 132.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gastly"),
            SpeciesData {
                name: "Gastly".to_owned(),
                num: 92,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 30,
                    atk: 35,
                    def: 30,
                    spa: 100,
                    spd: 35,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 0.1,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("haunter"),
            SpeciesData {
                name: "Haunter".to_owned(),
                num: 93,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 50,
                    def: 45,
                    spa: 115,
                    spd: 55,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 0.1,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gengar"),
            SpeciesData {
                name: "Gengar".to_owned(),
                num: 94,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 60,
                    spa: 130,
                    spd: 75,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cursedbody")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 40.5,
                color: Color::Purple,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gengarmega"),
            SpeciesData {
                name: "Gengar-Mega".to_owned(),
                num: 94,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 80,
                    spa: 170,
                    spd: 95,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shadowtag")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 40.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("gengar")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("gengarite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("onix"),
            SpeciesData {
                name: "Onix".to_owned(),
                num: 95,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 35,
                    atk: 45,
                    def: 160,
                    spa: 30,
                    spd: 45,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rockhead")),
                    secondary: Some(Id::from_known("sturdy")),
                    hidden: Some(Id::from_known("weakarmor")),
                },
                height_m: 8.8,
                weight_kg: 210.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drowzee"),
            SpeciesData {
                name: "Drowzee".to_owned(),
                num: 96,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 60,
                    atk: 48,
                    def: 45,
                    spa: 43,
                    spd: 90,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("forewarn")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 1.0,
                weight_kg: 32.4,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hypno"),
            SpeciesData {
                name: "Hypno".to_owned(),
                num: 97,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 85,
                    atk: 73,
                    def: 70,
                    spa: 73,
                    spd: 115,
                    spe: 67,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("forewarn")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 1.6,
                weight_kg: 75.6,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("krabby"),
            SpeciesData {
                name: "Krabby".to_owned(),
                num: 98,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 30,
                    atk: 105,
                    def: 90,
                    spa: 25,
                    spd: 25,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 0.4,
                weight_kg: 6.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kingler"),
            SpeciesData {
                name: "Kingler".to_owned(),
                num: 99,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 130,
                    def: 115,
                    spa: 50,
                    spd: 50,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.3,
                weight_kg: 60.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("voltorb"),
            SpeciesData {
                name: "Voltorb".to_owned(),
                num: 100,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 50,
                    spa: 55,
                    spd: 55,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 0.5,
                weight_kg: 10.4,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("voltorbhisui"),
            SpeciesData {
                name: "Voltorb-Hisui".to_owned(),
                num: 100,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 50,
                    spa: 55,
                    spd: 55,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    secondary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("aftermath")),
                },
                height_m: 0.5,
                weight_kg: 13.0,
                color: Color::Red,
                base_species: Some(Id::from_known("voltorb")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
