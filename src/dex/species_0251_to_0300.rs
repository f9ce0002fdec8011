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

/// Species numbered 251 to 300.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("celebi"),
            SpeciesData {
                name: "Celebi".to_owned(),
                num: 251,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Grass),
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
                    primary: Some(Id::from_known("naturalcure")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 5.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("treecko"),
            SpeciesData {
                name: "Treecko".to_owned(),
                num: 252,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 35,
                    spa: 65,
                    spd: 55,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("unburden")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 5.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("grovyle"),
            SpeciesData {
                name: "Grovyle".to_owned(),
                num: 253,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 45,
                    spa: 85,
                    spd: 65,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("unburden")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 21.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sceptile"),
            SpeciesData {
                name: "Sceptile".to_owned(),
                num: 254,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 65,
                    spa: 105,
                    spd: 85,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("unburden")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 52.2,
                color: Color::Green,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sceptilemega"),
            SpeciesData {
                name: "Sceptile-Mega".to_owned(),
                num: 254,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 70,
                    atk: 110,
                    def: 75,
                    spa: 145,
                    spd: 85,
                    spe: 145,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 55.2,
                color: Color::Green,
                base_species: Some(Id::from_known("sceptile")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("sceptilite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("torchic"),
            SpeciesData {
                name: "Torchic".to_owned(),
                num: 255,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 45,
                    atk: 60,
                    def: 40,
                    spa: 70,
                    spd: 50,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("speedboost")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 2.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("combusken"),
            SpeciesData {
                name: "Combusken".to_owned(),
                num: 256,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 60,
                    spa: 85,
                    spd: 60,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("speedboost")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 19.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blaziken"),
            SpeciesData {
                name: "Blaziken".to_owned(),
                num: 257,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 70,
                    spa: 110,
                    spd: 70,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("speedboost")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 52.0,
                color: Color::Red,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("blazikenmega"),
            SpeciesData {
                name: "Blaziken-Mega".to_owned(),
                num: 257,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 80,
                    atk: 160,
                    def: 80,
                    spa: 130,
                    spd: 80,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("speedboost")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 52.0,
                color: Color::Red,
                base_species: Some(Id::from_known("blaziken")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("blazikenite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mudkip"),
            SpeciesData {
                name: "Mudkip".to_owned(),
                num: 258,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 70,
                    def: 50,
                    spa: 50,
                    spd: 50,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("damp")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 7.6,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("marshtomp"),
            SpeciesData {
                name: "Marshtomp".to_owned(),
                num: 259,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 70,
                    spa: 60,
                    spd: 70,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("damp")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 28.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swampert"),
            SpeciesData {
                name: "Swampert".to_owned(),
                num: 260,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 100,
                    atk: 110,
                    def: 90,
                    spa: 85,
                    spd: 90,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("damp")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 81.9,
                color: Color::Blue,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("swampertmega"),
            SpeciesData {
                name: "Swampert-Mega".to_owned(),
                num: 260,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 100,
                    atk: 150,
                    def: 110,
                    spa: 95,
                    spd: 110,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 102.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("swampert")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("swampertite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("poochyena"),
            SpeciesData {
                name: "Poochyena".to_owned(),
                num: 261,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 35,
                    spa: 30,
                    spd: 30,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("quickfeet")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 0.5,
                weight_kg: 13.6,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mightyena"),
            SpeciesData {
                name: "Mightyena".to_owned(),
                num: 262,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 70,
                    atk: 90,
                    def: 70,
                    spa: 60,
                    spd: 60,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("quickfeet")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 1.0,
                weight_kg: 37.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zigzagoon"),
            SpeciesData {
                name: "Zigzagoon".to_owned(),
                num: 263,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 38,
                    atk: 30,
                    def: 41,
                    spa: 30,
                    spd: 41,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("quickfeet")),
                },
                height_m: 0.4,
                weight_kg: 17.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zigzagoongalar"),
            SpeciesData {
                name: "Zigzagoon-Galar".to_owned(),
                num: 263,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 38,
                    atk: 30,
                    def: 41,
                    spa: 30,
                    spd: 41,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("quickfeet")),
                },
                height_m: 0.4,
                weight_kg: 17.5,
                color: Color::White,
                base_species: Some(Id::from_known("zigzagoon")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("linoone"),
            SpeciesData {
                name: "Linoone".to_owned(),
                num: 264,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 78,
                    atk: 70,
                    def: 61,
                    spa: 50,
                    spd: 61,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("quickfeet")),
                },
                height_m: 0.5,
                weight_kg: 32.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("linoonegalar"),
            SpeciesData {
                name: "Linoone-Galar".to_owned(),
                num: 264,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 78,
                    atk: 70,
                    def: 61,
                    spa: 50,
                    spd: 61,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("gluttony")),
                    hidden: Some(Id::from_known("quickfeet")),
                },
                height_m: 0.5,
                weight_kg: 32.5,
                color: Color::White,
                base_species: Some(Id::from_known("linoone")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wurmple"),
            SpeciesData {
                name: "Wurmple".to_owned(),
                num: 265,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 45,
                    atk: 45,
                    def: 35,
                    spa: 20,
                    spd: 30,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("silcoon"),
            SpeciesData {
                name: "Silcoon".to_owned(),
                num: 266,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 50,
                    atk: 35,
                    def: 55,
                    spa: 25,
                    spd: 25,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 10.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("beautifly"),
            SpeciesData {
                name: "Beautifly".to_owned(),
                num: 267,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 70,
                    def: 50,
                    spa: 100,
                    spd: 50,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("rivalry")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 28.4,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cascoon"),
            SpeciesData {
                name: "Cascoon".to_owned(),
                num: 268,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 50,
                    atk: 35,
                    def: 55,
                    spa: 25,
                    spd: 25,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 11.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dustox"),
            SpeciesData {
                name: "Dustox".to_owned(),
                num: 269,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 70,
                    spa: 50,
                    spd: 90,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("compoundeyes")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 31.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lotad"),
            SpeciesData {
                name: "Lotad".to_owned(),
                num: 270,
                primary_type: Type::Water,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 30,
                    spa: 40,
                    spd: 50,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("raindish")),
                    hidden: Some(Id::from_known("owntempo")),
                },
                height_m: 0.5,
                weight_kg: 2.6,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lombre"),
            SpeciesData {
                name: "Lombre".to_owned(),
                num: 271,
                primary_type: Type::Water,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 50,
                    spa: 60,
                    spd: 70,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("raindish")),
                    hidden: Some(Id::from_known("owntempo")),
                },
                height_m: 1.2,
                weight_kg: 32.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ludicolo"),
            SpeciesData {
                name: "Ludicolo".to_owned(),
                num: 272,
                primary_type: Type::Water,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 80,
                    atk: 70,
                    def: 70,
                    spa: 90,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    secondary: Some(Id::from_known("raindish")),
                    hidden: Some(Id::from_known("owntempo")),
                },
                height_m: 1.5,
                weight_kg: 55.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("seedot"),
            SpeciesData {
                name: "Seedot".to_owned(),
                num: 273,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 40,
                    atk: 40,
                    def: 50,
                    spa: 30,
                    spd: 30,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.5,
                weight_kg: 4.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nuzleaf"),
            SpeciesData {
                name: "Nuzleaf".to_owned(),
                num: 274,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 70,
                    atk: 70,
                    def: 40,
                    spa: 60,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 1.0,
                weight_kg: 28.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shiftry"),
            SpeciesData {
                name: "Shiftry".to_owned(),
                num: 275,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 90,
                    atk: 100,
                    def: 60,
                    spa: 90,
                    spd: 60,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("windrider")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 1.3,
                weight_kg: 59.6,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("taillow"),
            SpeciesData {
                name: "Taillow".to_owned(),
                num: 276,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 55,
                    def: 30,
                    spa: 30,
                    spd: 30,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.3,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("swellow"),
            SpeciesData {
                name: "Swellow".to_owned(),
                num: 277,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 60,
                    spa: 75,
                    spd: 50,
                    spe: 125,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 19.8,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wingull"),
            SpeciesData {
                name: "Wingull".to_owned(),
                num: 278,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 30,
                    spa: 55,
                    spd: 30,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 0.6,
                weight_kg: 9.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pelipper"),
            SpeciesData {
                name: "Pelipper".to_owned(),
                num: 279,
                primary_type: Type::Water,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 100,
                    spa: 95,
                    spd: 70,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("drizzle")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 1.2,
                weight_kg: 28.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ralts"),
            SpeciesData {
                name: "Ralts".to_owned(),
                num: 280,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 28,
                    atk: 25,
                    def: 25,
                    spa: 45,
                    spd: 35,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("trace")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.4,
                weight_kg: 6.6,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kirlia"),
            SpeciesData {
                name: "Kirlia".to_owned(),
                num: 281,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 38,
                    atk: 35,
                    def: 35,
                    spa: 65,
                    spd: 55,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("trace")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.8,
                weight_kg: 20.2,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gardevoir"),
            SpeciesData {
                name: "Gardevoir".to_owned(),
                num: 282,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 68,
                    atk: 65,
                    def: 65,
                    spa: 125,
                    spd: 115,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("trace")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 1.6,
                weight_kg: 48.4,
                color: Color::White,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gardevoirmega"),
            SpeciesData {
                name: "Gardevoir-Mega".to_owned(),
                num: 282,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 68,
                    atk: 85,
                    def: 65,
                    spa: 165,
                    spd: 135,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pixilate")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 48.4,
                color: Color::White,
                base_species: Some(Id::from_known("gardevoir")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("gardevoirite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("surskit"),
            SpeciesData {
                name: "Surskit".to_owned(),
                num: 283,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 32,
                    spa: 50,
                    spd: 52,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swiftswim")),
                    hidden: Some(Id::from_known("raindish")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 1.7,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("masquerain"),
            SpeciesData {
                name: "Masquerain".to_owned(),
                num: 284,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 70,
                    atk: 60,
                    def: 62,
                    spa: 100,
                    spd: 82,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    hidden: Some(Id::from_known("unnerve")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 3.6,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shroomish"),
            SpeciesData {
                name: "Shroomish".to_owned(),
                num: 285,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 60,
                    atk: 40,
                    def: 60,
                    spa: 40,
                    spd: 60,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("effectspore")),
                    secondary: Some(Id::from_known("poisonheal")),
                    hidden: Some(Id::from_known("quickfeet")),
                },
                height_m: 0.4,
                weight_kg: 4.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("breloom"),
            SpeciesData {
                name: "Breloom".to_owned(),
                num: 286,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 60,
                    atk: 130,
                    def: 80,
                    spa: 60,
                    spd: 60,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("effectspore")),
                    secondary: Some(Id::from_known("poisonheal")),
                    hidden: Some(Id::from_known("technician")),
                },
                height_m: 1.2,
                weight_kg: 39.2,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slakoth"),
            SpeciesData {
                name: "Slakoth".to_owned(),
                num: 287,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 60,
                    spa: 35,
                    spd: 35,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("truant")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 24.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vigoroth"),
            SpeciesData {
                name: "Vigoroth".to_owned(),
                num: 288,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 80,
                    atk: 80,
                    def: 80,
                    spa: 55,
                    spd: 55,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("vitalspirit")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 46.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slaking"),
            SpeciesData {
                name: "Slaking".to_owned(),
                num: 289,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 150,
                    atk: 160,
                    def: 100,
                    spa: 95,
                    spd: 65,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("truant")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 130.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nincada"),
            SpeciesData {
                name: "Nincada".to_owned(),
                num: 290,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 31,
                    atk: 45,
                    def: 90,
                    spa: 30,
                    spd: 30,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 5.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ninjask"),
            SpeciesData {
                name: "Ninjask".to_owned(),
                num: 291,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 61,
                    atk: 90,
                    def: 45,
                    spa: 50,
                    spd: 50,
                    spe: 160,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("speedboost")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 12.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shedinja"),
            SpeciesData {
                name: "Shedinja".to_owned(),
                num: 292,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 1,
                    atk: 90,
                    def: 45,
                    spa: 30,
                    spd: 30,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wonderguard")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 1.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("whismur"),
            SpeciesData {
                name: "Whismur".to_owned(),
                num: 293,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 64,
                    atk: 51,
                    def: 23,
                    spa: 51,
                    spd: 23,
                    spe: 28,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("rattled")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 16.3,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("loudred"),
            SpeciesData {
                name: "Loudred".to_owned(),
                num: 294,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 84,
                    atk: 71,
                    def: 43,
                    spa: 71,
                    spd: 43,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 40.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("exploud"),
            SpeciesData {
                name: "Exploud".to_owned(),
                num: 295,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 104,
                    atk: 91,
                    def: 63,
                    spa: 91,
                    spd: 73,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 84.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("makuhita"),
            SpeciesData {
                name: "Makuhita".to_owned(),
                num: 296,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 72,
                    atk: 60,
                    def: 30,
                    spa: 20,
                    spd: 30,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.0,
                weight_kg: 86.4,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hariyama"),
            SpeciesData {
                name: "Hariyama".to_owned(),
                num: 297,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 144,
                    atk: 120,
                    def: 60,
                    spa: 40,
                    spd: 60,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 2.3,
                weight_kg: 253.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("azurill"),
            SpeciesData {
                name: "Azurill".to_owned(),
                num: 298,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 50,
                    atk: 20,
                    def: 40,
                    spa: 20,
                    spd: 40,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("hugepower")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 0.2,
                weight_kg: 2.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nosepass"),
            SpeciesData {
                name: "Nosepass".to_owned(),
                num: 299,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 30,
                    atk: 45,
                    def: 135,
                    spa: 45,
                    spd: 90,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("magnetpull")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 1.0,
                weight_kg: 97.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
    ])
}
