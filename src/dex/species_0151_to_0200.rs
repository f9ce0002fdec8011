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

/// Species numbered 151 to 200.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("mew"),
            SpeciesData {
                name: "Mew".to_owned(),
                num: 151,
                primary_type: Type::Psychic,
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
                    primary: Some(Id::from_known("synchronize")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("chikorita"),
            SpeciesData {
                name: "Chikorita".to_owned(),
                num: 152,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 45,
                    atk: 49,
                    def: 65,
                    spa: 49,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 6.4,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bayleef"),
            SpeciesData {
                name: "Bayleef".to_owned(),
                num: 153,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 60,
                    atk: 62,
                    def: 80,
                    spa: 63,
                    spd: 80,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 15.8,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("meganium"),
            SpeciesData {
                name: "Meganium".to_owned(),
                num: 154,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 80,
                    atk: 82,
                    def: 100,
                    spa: 83,
                    spd: 100,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 100.5,
                color: Color::Green,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meganiummmega"),
            SpeciesData {
                name: "Meganium-Mega".to_owned(),
                num: 154,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 80,
                    atk: 92,
                    def: 115,
                    spa: 143,
                    spd: 115,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 201.0,
                color: Color::Green,
                base_species: Some(Id::from_known("meganium")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("meganiummite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cyndaquil"),
            SpeciesData {
                name: "Cyndaquil".to_owned(),
                num: 155,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 39,
                    atk: 52,
                    def: 43,
                    spa: 60,
                    spd: 50,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("flashfire")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 7.9,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("quilava"),
            SpeciesData {
                name: "Quilava".to_owned(),
                num: 156,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 58,
                    atk: 64,
                    def: 58,
                    spa: 80,
                    spd: 65,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("flashfire")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 19.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("typhlosion"),
            SpeciesData {
                name: "Typhlosion".to_owned(),
                num: 157,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 78,
                    atk: 84,
                    def: 78,
                    spa: 109,
                    spd: 85,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("flashfire")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 79.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("typhlosionhisui"),
            SpeciesData {
                name: "Typhlosion-Hisui".to_owned(),
                num: 157,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 73,
                    atk: 84,
                    def: 78,
                    spa: 119,
                    spd: 85,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("frisk")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 69.8,
                color: Color::Yellow,
                base_species: Some(Id::from_known("typhlosion")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("totodile"),
            SpeciesData {
                name: "Totodile".to_owned(),
                num: 158,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 65,
                    def: 64,
                    spa: 44,
                    spd: 48,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 9.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("croconaw"),
            SpeciesData {
                name: "Croconaw".to_owned(),
                num: 159,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 65,
                    atk: 80,
                    def: 80,
                    spa: 59,
                    spd: 63,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 25.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("feraligatr"),
            SpeciesData {
                name: "Feraligatr".to_owned(),
                num: 160,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 85,
                    atk: 105,
                    def: 100,
                    spa: 79,
                    spd: 83,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 88.8,
                color: Color::Blue,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("feraligatrmega"),
            SpeciesData {
                name: "Feraligatr-Mega".to_owned(),
                num: 160,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 85,
                    atk: 160,
                    def: 125,
                    spa: 89,
                    spd: 93,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("sheerforce")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 108.8,
                color: Color::Blue,
                base_species: Some(Id::from_known("feraligatr")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("feraligatrite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sentret"),
            SpeciesData {
                name: "Sentret".to_owned(),
                num: 161,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 35,
                    atk: 46,
                    def: 34,
                    spa: 35,
                    spd: 45,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("frisk")),
                },
                height_m: 0.8,
                weight_kg: 6.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("furret"),
            SpeciesData {
                name: "Furret".to_owned(),
                num: 162,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 85,
                    atk: 76,
                    def: 64,
                    spa: 45,
                    spd: 55,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("frisk")),
                },
                height_m: 1.8,
                weight_kg: 32.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hoothoot"),
            SpeciesData {
                name: "Hoothoot".to_owned(),
                num: 163,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 30,
                    def: 30,
                    spa: 36,
                    spd: 56,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("tintedlens")),
                },
                height_m: 0.7,
                weight_kg: 21.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("noctowl"),
            SpeciesData {
                name: "Noctowl".to_owned(),
                num: 164,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 100,
                    atk: 50,
                    def: 50,
                    spa: 86,
                    spd: 96,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("tintedlens")),
                },
                height_m: 1.6,
                weight_kg: 40.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ledyba"),
            SpeciesData {
                name: "Ledyba".to_owned(),
                num: 165,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 20,
                    def: 30,
                    spa: 40,
                    spd: 80,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 1.0,
                weight_kg: 10.8,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ledian"),
            SpeciesData {
                name: "Ledian".to_owned(),
                num: 166,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 35,
                    def: 50,
                    spa: 55,
                    spd: 110,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("ironfist")),
                },
                height_m: 1.4,
                weight_kg: 35.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("spinarak"),
            SpeciesData {
                name: "Spinarak".to_owned(),
                num: 167,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 60,
                    def: 40,
                    spa: 40,
                    spd: 40,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("sniper")),
                },
                height_m: 0.5,
                weight_kg: 8.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ariados"),
            SpeciesData {
                name: "Ariados".to_owned(),
                num: 168,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 70,
                    atk: 90,
                    def: 70,
                    spa: 60,
                    spd: 70,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    secondary: Some(Id::from_known("insomnia")),
                    hidden: Some(Id::from_known("sniper")),
                },
                height_m: 1.1,
                weight_kg: 33.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("crobat"),
            SpeciesData {
                name: "Crobat".to_owned(),
                num: 169,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 85,
                    atk: 90,
                    def: 80,
                    spa: 70,
                    spd: 80,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 75.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("chinchou"),
            SpeciesData {
                name: "Chinchou".to_owned(),
                num: 170,
                primary_type: Type::Water,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 75,
                    atk: 38,
                    def: 38,
                    spa: 56,
                    spd: 56,
                    spe: 67,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("illuminate")),
                    hidden: Some(Id::from_known("waterabsorb")),
                },
                height_m: 0.5,
                weight_kg: 12.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lanturn"),
            SpeciesData {
                name: "Lanturn".to_owned(),
                num: 171,
                primary_type: Type::Water,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 125,
                    atk: 58,
                    def: 58,
                    spa: 76,
                    spd: 76,
                    spe: 67,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("voltabsorb")),
                    secondary: Some(Id::from_known("illuminate")),
                    hidden: Some(Id::from_known("waterabsorb")),
                },
                height_m: 1.2,
                weight_kg: 22.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pichu"),
            SpeciesData {
                name: "Pichu".to_owned(),
                num: 172,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 20,
                    atk: 40,
                    def: 15,
                    spa: 35,
                    spd: 35,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pichuspikyeared"),
            SpeciesData {
                name: "Pichu-Spiky-eared".to_owned(),
                num: 172,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 20,
                    atk: 40,
                    def: 15,
                    spa: 35,
                    spd: 35,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pichu")),
                forme: Some("Spiky-eared".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cleffa"),
            SpeciesData {
                name: "Cleffa".to_owned(),
                num: 173,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 50,
                    atk: 25,
                    def: 28,
                    spa: 45,
                    spd: 55,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 0.3,
                weight_kg: 3.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("igglybuff"),
            SpeciesData {
                name: "Igglybuff".to_owned(),
                num: 174,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 90,
                    atk: 30,
                    def: 15,
                    spa: 40,
                    spd: 20,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 0.3,
                weight_kg: 1.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("togepi"),
            SpeciesData {
                name: "Togepi".to_owned(),
                num: 175,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 35,
                    atk: 20,
                    def: 65,
                    spa: 40,
                    spd: 65,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    secondary: Some(Id::from_known("serenegrace")),
                    hidden: Some(Id::from_known("superluck")),
                },
                height_m: 0.3,
                weight_kg: 1.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("togetic"),
            SpeciesData {
                name: "Togetic".to_owned(),
                num: 176,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 40,
                    def: 85,
                    spa: 80,
                    spd: 105,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hustle")),
                    secondary: Some(Id::from_known("serenegrace")),
                    hidden: Some(Id::from_known("superluck")),
                },
                height_m: 0.6,
                weight_kg: 3.2,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("natu"),
            SpeciesData {
                name: "Natu".to_owned(),
                num: 177,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 50,
                    def: 45,
                    spa: 70,
                    spd: 45,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 0.2,
                weight_kg: 2.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("xatu"),
            SpeciesData {
                name: "Xatu".to_owned(),
                num: 178,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 75,
                    def: 70,
                    spa: 95,
                    spd: 70,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    secondary: Some(Id::from_known("earlybird")),
                    hidden: Some(Id::from_known("magicbounce")),
                },
                height_m: 1.5,
                weight_kg: 15.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mareep"),
            SpeciesData {
                name: "Mareep".to_owned(),
                num: 179,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 55,
                    atk: 40,
                    def: 40,
                    spa: 65,
                    spd: 45,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("plus")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 7.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("flaaffy"),
            SpeciesData {
                name: "Flaaffy".to_owned(),
                num: 180,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 70,
                    atk: 55,
                    def: 55,
                    spa: 80,
                    spd: 60,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("plus")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 13.3,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ampharos"),
            SpeciesData {
                name: "Ampharos".to_owned(),
                num: 181,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 90,
                    atk: 75,
                    def: 85,
                    spa: 115,
                    spd: 90,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("plus")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 61.5,
                color: Color::Yellow,
                other_formes: Vec::from(["Mega".to_owned()]),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ampharosmega"),
            SpeciesData {
                name: "Ampharos-Mega".to_owned(),
                num: 181,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 90,
                    atk: 95,
                    def: 105,
                    spa: 165,
                    spd: 110,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("moldbreaker")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 61.5,
                color: Color::Yellow,
                base_species: Some(Id::from_known("ampharos")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("ampharosite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bellossom"),
            SpeciesData {
                name: "Bellossom".to_owned(),
                num: 182,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 95,
                    spa: 90,
                    spd: 100,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("healer")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 5.8,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("marill"),
            SpeciesData {
                name: "Marill".to_owned(),
                num: 183,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 70,
                    atk: 20,
                    def: 50,
                    spa: 20,
                    spd: 50,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("hugepower")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 0.4,
                weight_kg: 8.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("azumarill"),
            SpeciesData {
                name: "Azumarill".to_owned(),
                num: 184,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 100,
                    atk: 50,
                    def: 80,
                    spa: 60,
                    spd: 80,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    secondary: Some(Id::from_known("hugepower")),
                    hidden: Some(Id::from_known("sapsipper")),
                },
                height_m: 0.8,
                weight_kg: 28.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sudowoodo"),
            SpeciesData {
                name: "Sudowoodo".to_owned(),
                num: 185,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 70,
                    atk: 100,
                    def: 115,
                    spa: 30,
                    spd: 65,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    secondary: Some(Id::from_known("rockhead")),
                    hidden: Some(Id::from_known("rattled")),
                },
                height_m: 1.2,
                weight_kg: 38.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("politoed"),
            SpeciesData {
                name: "Politoed".to_owned(),
                num: 186,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 90,
                    atk: 75,
                    def: 75,
                    spa: 90,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    secondary: Some(Id::from_known("damp")),
                    hidden: Some(Id::from_known("drizzle")),
                },
                height_m: 1.1,
                weight_kg: 33.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hoppip"),
            SpeciesData {
                name: "Hoppip".to_owned(),
                num: 187,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 35,
                    atk: 35,
                    def: 40,
                    spa: 35,
                    spd: 55,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.4,
                weight_kg: 0.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("skiploom"),
            SpeciesData {
                name: "Skiploom".to_owned(),
                num: 188,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 45,
                    def: 50,
                    spa: 45,
                    spd: 65,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.6,
                weight_kg: 1.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("jumpluff"),
            SpeciesData {
                name: "Jumpluff".to_owned(),
                num: 189,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 55,
                    def: 70,
                    spa: 55,
                    spd: 95,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.8,
                weight_kg: 3.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("aipom"),
            SpeciesData {
                name: "Aipom".to_owned(),
                num: 190,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 70,
                    def: 55,
                    spa: 40,
                    spd: 55,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("skilllink")),
                },
                height_m: 0.8,
                weight_kg: 11.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sunkern"),
            SpeciesData {
                name: "Sunkern".to_owned(),
                num: 191,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 30,
                    atk: 30,
                    def: 30,
                    spa: 30,
                    spd: 30,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("solarpower")),
                    hidden: Some(Id::from_known("earlybird")),
                },
                height_m: 0.3,
                weight_kg: 1.8,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sunflora"),
            SpeciesData {
                name: "Sunflora".to_owned(),
                num: 192,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 75,
                    atk: 75,
                    def: 55,
                    spa: 105,
                    spd: 85,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    secondary: Some(Id::from_known("solarpower")),
                    hidden: Some(Id::from_known("earlybird")),
                },
                height_m: 0.8,
                weight_kg: 8.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("yanma"),
            SpeciesData {
                name: "Yanma".to_owned(),
                num: 193,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 65,
                    def: 45,
                    spa: 75,
                    spd: 45,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("speedboost")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("frisk")),
                },
                height_m: 1.2,
                weight_kg: 38.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wooper"),
            SpeciesData {
                name: "Wooper".to_owned(),
                num: 194,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 55,
                    atk: 45,
                    def: 45,
                    spa: 25,
                    spd: 25,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("damp")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 0.4,
                weight_kg: 8.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wooperpaldea"),
            SpeciesData {
                name: "Wooper-Paldea".to_owned(),
                num: 194,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 55,
                    atk: 45,
                    def: 45,
                    spa: 25,
                    spd: 25,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 0.4,
                weight_kg: 11.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("wooper")),
                forme: Some("Paldea".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("quagsire"),
            SpeciesData {
                name: "Quagsire".to_owned(),
                num: 195,
                primary_type: Type::Water,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 95,
                    atk: 85,
                    def: 85,
                    spa: 65,
                    spd: 65,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("damp")),
                    secondary: Some(Id::from_known("waterabsorb")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 1.4,
                weight_kg: 75.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("espeon"),
            SpeciesData {
                name: "Espeon".to_owned(),
                num: 196,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 65,
                    atk: 65,
                    def: 60,
                    spa: 130,
                    spd: 95,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("magicbounce")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 26.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("umbreon"),
            SpeciesData {
                name: "Umbreon".to_owned(),
                num: 197,
                primary_type: Type::Dark,
                base_stats: StatTable {
                    hp: 95,
                    atk: 65,
                    def: 110,
                    spa: 60,
                    spd: 130,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("synchronize")),
                    hidden: Some(Id::from_known("innerfocus")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 27.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("murkrow"),
            SpeciesData {
                name: "Murkrow".to_owned(),
                num: 198,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 42,
                    spa: 85,
                    spd: 42,
                    spe: 91,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("insomnia")),
                    secondary: Some(Id::from_known("superluck")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 0.5,
                weight_kg: 2.1,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowking"),
            SpeciesData {
                name: "Slowking".to_owned(),
                num: 199,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 75,
                    def: 80,
                    spa: 100,
                    spd: 110,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("oblivious")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 2.0,
                weight_kg: 79.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slowkinggalar"),
            SpeciesData {
                name: "Slowking-Galar".to_owned(),
                num: 199,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 95,
                    atk: 65,
                    def: 80,
                    spa: 110,
                    spd: 110,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("curiousmedicine")),
                    secondary: Some(Id::from_known("owntempo")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 1.8,
                weight_kg: 79.5,
                color: Color::Pink,
                base_species: Some(Id::from_known("slowking")),
                forme: Some("Galar".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("misdreavus"),
            SpeciesData {
                name: "Misdreavus".to_owned(),
                num: 200,
                primary_type: Type::Ghost,
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 60,
                    spa: 85,
                    spd: 85,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 1.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
    ])
}
