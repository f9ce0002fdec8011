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

/// Species numbered 1 to 50.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("bulbasaur"),
            SpeciesData {
                name: "Bulbasaur".to_owned(),
                num: 1,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 49,
                    def: 49,
                    spa: 65,
                    spd: 65,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("chlorophyll")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 6.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ivysaur"),
            SpeciesData {
                name: "Ivysaur".to_owned(),
                num: 2,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 62,
                    def: 63,
                    spa: 80,
                    spd: 80,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("chlorophyll")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 13.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("venusaur"),
            SpeciesData {
                name: "Venusaur".to_owned(),
                num: 3,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 82,
                    def: 83,
                    spa: 100,
                    spd: 100,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("chlorophyll")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 100.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("venusaurmega"),
            SpeciesData {
                name: "Venusaur-Mega".to_owned(),
                num: 3,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 123,
                    spa: 122,
                    spd: 120,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 155.5,
                color: Color::Green,
                base_species: Some(Id::from_known("venusaur")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("charmander"),
            SpeciesData {
                name: "Charmander".to_owned(),
                num: 4,
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
                    hidden: Some(Id::from_known("solarpower")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 8.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("charmeleon"),
            SpeciesData {
                name: "Charmeleon".to_owned(),
                num: 5,
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
                    hidden: Some(Id::from_known("solarpower")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 19.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("charizard"),
            SpeciesData {
                name: "Charizard".to_owned(),
                num: 6,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
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
                    hidden: Some(Id::from_known("solarpower")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 90.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("charizardmegax"),
            SpeciesData {
                name: "Charizard-Mega-X".to_owned(),
                num: 6,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 78,
                    atk: 130,
                    def: 111,
                    spa: 130,
                    spd: 85,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 110.5,
                color: Color::Black,
                base_species: Some(Id::from_known("charizard")),
                forme: Some("Mega-X".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("charizardmegay"),
            SpeciesData {
                name: "Charizard-Mega-Y".to_owned(),
                num: 6,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 78,
                    atk: 104,
                    def: 78,
                    spa: 159,
                    spd: 115,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("drought")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 100.5,
                color: Color::Red,
                base_species: Some(Id::from_known("charizard")),
                forme: Some("Mega-Y".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("squirtle"),
            SpeciesData {
                name: "Squirtle".to_owned(),
                num: 7,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 44,
                    atk: 48,
                    def: 65,
                    spa: 50,
                    spd: 64,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("raindish")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wartortle"),
            SpeciesData {
                name: "Wartortle".to_owned(),
                num: 8,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 59,
                    atk: 63,
                    def: 80,
                    spa: 65,
                    spd: 80,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("raindish")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 22.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blastoise"),
            SpeciesData {
                name: "Blastoise".to_owned(),
                num: 9,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 79,
                    atk: 83,
                    def: 100,
                    spa: 85,
                    spd: 105,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("raindish")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 85.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("blastoisemega"),
            SpeciesData {
                name: "Blastoise-Mega".to_owned(),
                num: 9,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 79,
                    atk: 103,
                    def: 120,
                    spa: 135,
                    spd: 115,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("megalauncher")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 101.1,
                color: Color::Blue,
                base_species: Some(Id::from_known("blastoise")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("caterpie"),
            SpeciesData {
                name: "Caterpie".to_owned(),
                num: 10,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 45,
                    atk: 30,
                    def: 35,
                    spa: 20,
                    spd: 20,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("metapod"),
            SpeciesData {
                name: "Metapod".to_owned(),
                num: 11,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 50,
                    atk: 20,
                    def: 55,
                    spa: 25,
                    spd: 25,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 9.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("butterfree"),
            SpeciesData {
                name: "Butterfree".to_owned(),
                num: 12,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 60,
                    atk: 45,
                    def: 50,
                    spa: 90,
                    spd: 80,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("tintedlens")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 32.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("weedle"),
            SpeciesData {
                name: "Weedle".to_owned(),
                num: 13,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 40,
                    atk: 35,
                    def: 30,
                    spa: 20,
                    spd: 20,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 3.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kakuna"),
            SpeciesData {
                name: "Kakuna".to_owned(),
                num: 14,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 25,
                    def: 50,
                    spa: 25,
                    spd: 25,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 10.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("beedrill"),
            SpeciesData {
                name: "Beedrill".to_owned(),
                num: 15,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 40,
                    spa: 45,
                    spd: 80,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 29.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("beedrillmega"),
            SpeciesData {
                name: "Beedrill-Mega".to_owned(),
                num: 15,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 65,
                    atk: 150,
                    def: 40,
                    spa: 15,
                    spd: 80,
                    spe: 145,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("adaptability")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 40.5,
                color: Color::Yellow,
                base_species: Some(Id::from_known("beedrill")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pidgey"),
            SpeciesData {
                name: "Pidgey".to_owned(),
                num: 16,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 40,
                    spa: 35,
                    spd: 35,
                    spe: 56,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("tangledfeet")),
                    hidden: Some(Id::from_known("bigpecks")),
                },
                height_m: 0.3,
                weight_kg: 1.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pidgeotto"),
            SpeciesData {
                name: "Pidgeotto".to_owned(),
                num: 17,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 63,
                    atk: 60,
                    def: 55,
                    spa: 50,
                    spd: 50,
                    spe: 71,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("tangledfeet")),
                    hidden: Some(Id::from_known("bigpecks")),
                },
                height_m: 1.1,
                weight_kg: 30.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pidgeot"),
            SpeciesData {
                name: "Pidgeot".to_owned(),
                num: 18,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 83,
                    atk: 80,
                    def: 75,
                    spa: 70,
                    spd: 70,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("tangledfeet")),
                    hidden: Some(Id::from_known("bigpecks")),
                },
                height_m: 1.5,
                weight_kg: 39.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pidgeotmega"),
            SpeciesData {
                name: "Pidgeot-Mega".to_owned(),
                num: 18,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 83,
                    atk: 80,
                    def: 80,
                    spa: 135,
                    spd: 80,
                    spe: 121,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("noguard")),
                    ..Default::default()
                },
                height_m: 2.2,
                weight_kg: 50.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("pidgeot")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rattata"),
            SpeciesData {
                name: "Rattata".to_owned(),
                num: 19,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 30,
                    atk: 56,
                    def: 35,
                    spa: 25,
                    spd: 35,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.3,
                weight_kg: 3.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rattataalola"),
            SpeciesData {
                name: "Rattata-Alola".to_owned(),
                num: 19,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 30,
                    atk: 56,
                    def: 35,
                    spa: 25,
                    spd: 35,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 0.3,
                weight_kg: 3.8,
                color: Color::Black,
                base_species: Some(Id::from_known("rattata")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("raticate"),
            SpeciesData {
                name: "Raticate".to_owned(),
                num: 20,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 55,
                    atk: 81,
                    def: 60,
                    spa: 50,
                    spd: 70,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("runaway")),
                    secondary: Some(Id::from_known("guts")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.7,
                weight_kg: 18.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("raticatealola"),
            SpeciesData {
                name: "Raticate-Alola".to_owned(),
                num: 20,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 75,
                    atk: 71,
                    def: 70,
                    spa: 40,
                    spd: 80,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("gluttony")),
                    secondary: Some(Id::from_known("hustle")),
                    hidden: Some(Id::from_known("thickfat")),
                },
                height_m: 0.7,
                weight_kg: 25.5,
                color: Color::Black,
                base_species: Some(Id::from_known("raticate")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("raticatealolatotem"),
            SpeciesData {
                name: "Raticate-Alola-Totem".to_owned(),
                num: 20,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 75,
                    atk: 71,
                    def: 70,
                    spa: 40,
                    spd: 80,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("thickfat")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 105.0,
                color: Color::Black,
                base_species: Some(Id::from_known("raticate")),
                forme: Some("Alola-Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("spearow"),
            SpeciesData {
                name: "Spearow".to_owned(),
                num: 21,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 60,
                    def: 30,
                    spa: 31,
                    spd: 31,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 2.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("fearow"),
            SpeciesData {
                name: "Fearow".to_owned(),
                num: 22,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 65,
                    spa: 61,
                    spd: 61,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    hidden: Some(Id::from_known("sniper")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 38.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ekans"),
            SpeciesData {
                name: "Ekans".to_owned(),
                num: 23,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 35,
                    atk: 60,
                    def: 44,
                    spa: 40,
                    spd: 54,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 2.0,
                weight_kg: 6.9,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("arbok"),
            SpeciesData {
                name: "Arbok".to_owned(),
                num: 24,
                primary_type: Type::Poison,
                base_stats: StatTable {
                    hp: 60,
                    atk: 95,
                    def: 69,
                    spa: 65,
                    spd: 79,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("intimidate")),
                    secondary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 3.5,
                weight_kg: 65.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachu"),
            SpeciesData {
                name: "Pikachu".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachucosplay"),
            SpeciesData {
                name: "Pikachu-Cosplay".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Cosplay".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachurockstar"),
            SpeciesData {
                name: "Pikachu-Rock-Star".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Rock-Star".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachubelle"),
            SpeciesData {
                name: "Pikachu-Belle".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Belle".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachupopstar"),
            SpeciesData {
                name: "Pikachu-Pop-Star".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Pop-Star".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachuphd"),
            SpeciesData {
                name: "Pikachu-PhD".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("PhD".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachulibre"),
            SpeciesData {
                name: "Pikachu-Libre".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Libre".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachuoriginal"),
            SpeciesData {
                name: "Pikachu-Original".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Original".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachuhoenn"),
            SpeciesData {
                name: "Pikachu-Hoenn".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Hoenn".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachusinnoh"),
            SpeciesData {
                name: "Pikachu-Sinnoh".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Sinnoh".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachuunova"),
            SpeciesData {
                name: "Pikachu-Unova".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Unova".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachukalos"),
            SpeciesData {
                name: "Pikachu-Kalos".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Kalos".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachualola"),
            SpeciesData {
                name: "Pikachu-Alola".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachupartner"),
            SpeciesData {
                name: "Pikachu-Partner".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Partner".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachustarter"),
            SpeciesData {
                name: "Pikachu-Starter".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 45,
                    atk: 80,
                    def: 50,
                    spa: 75,
                    spd: 60,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("Starter".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikachuworld"),
            SpeciesData {
                name: "Pikachu-World".to_owned(),
                num: 25,
                primary_type: Type::Electric,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 35,
                    atk: 55,
                    def: 40,
                    spa: 50,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("pikachu")),
                forme: Some("World".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("raichu"),
            SpeciesData {
                name: "Raichu".to_owned(),
                num: 26,
                primary_type: Type::Electric,
                base_stats: StatTable {
                    hp: 60,
                    atk: 90,
                    def: 55,
                    spa: 90,
                    spd: 80,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("static")),
                    hidden: Some(Id::from_known("lightningrod")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 30.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("raichualola"),
            SpeciesData {
                name: "Raichu-Alola".to_owned(),
                num: 26,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 60,
                    atk: 85,
                    def: 50,
                    spa: 95,
                    spd: 85,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("surgesurfer")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 21.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("raichu")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandshrew"),
            SpeciesData {
                name: "Sandshrew".to_owned(),
                num: 27,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 50,
                    atk: 75,
                    def: 85,
                    spa: 20,
                    spd: 30,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("sandrush")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 12.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandshrewalola"),
            SpeciesData {
                name: "Sandshrew-Alola".to_owned(),
                num: 27,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 50,
                    atk: 75,
                    def: 90,
                    spa: 10,
                    spd: 35,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("slushrush")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 40.0,
                color: Color::White,
                base_species: Some(Id::from_known("sandshrew")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandslash"),
            SpeciesData {
                name: "Sandslash".to_owned(),
                num: 28,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 75,
                    atk: 100,
                    def: 110,
                    spa: 45,
                    spd: 55,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("sandrush")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 29.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandslashalola"),
            SpeciesData {
                name: "Sandslash-Alola".to_owned(),
                num: 28,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 75,
                    atk: 100,
                    def: 120,
                    spa: 25,
                    spd: 65,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("slushrush")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 55.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("sandslash")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidoranf"),
            SpeciesData {
                name: "Nidoran-F".to_owned(),
                num: 29,
                primary_type: Type::Poison,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 55,
                    atk: 47,
                    def: 52,
                    spa: 40,
                    spd: 40,
                    spe: 41,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.4,
                weight_kg: 7.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidorina"),
            SpeciesData {
                name: "Nidorina".to_owned(),
                num: 30,
                primary_type: Type::Poison,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 70,
                    atk: 62,
                    def: 67,
                    spa: 55,
                    spd: 55,
                    spe: 56,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.8,
                weight_kg: 20.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidoqueen"),
            SpeciesData {
                name: "Nidoqueen".to_owned(),
                num: 31,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 90,
                    atk: 92,
                    def: 87,
                    spa: 75,
                    spd: 85,
                    spe: 76,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.3,
                weight_kg: 60.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidoranm"),
            SpeciesData {
                name: "Nidoran-M".to_owned(),
                num: 32,
                primary_type: Type::Poison,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 46,
                    atk: 57,
                    def: 40,
                    spa: 40,
                    spd: 40,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.5,
                weight_kg: 9.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidorino"),
            SpeciesData {
                name: "Nidorino".to_owned(),
                num: 33,
                primary_type: Type::Poison,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 61,
                    atk: 72,
                    def: 57,
                    spa: 55,
                    spd: 55,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("hustle")),
                },
                height_m: 0.9,
                weight_kg: 19.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nidoking"),
            SpeciesData {
                name: "Nidoking".to_owned(),
                num: 34,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 81,
                    atk: 102,
                    def: 77,
                    spa: 85,
                    spd: 75,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("rivalry")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.4,
                weight_kg: 62.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("clefairy"),
            SpeciesData {
                name: "Clefairy".to_owned(),
                num: 35,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 70,
                    atk: 45,
                    def: 48,
                    spa: 60,
                    spd: 65,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 0.6,
                weight_kg: 7.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("clefable"),
            SpeciesData {
                name: "Clefable".to_owned(),
                num: 36,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 95,
                    atk: 70,
                    def: 73,
                    spa: 95,
                    spd: 90,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 1.3,
                weight_kg: 40.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("clefablemega"),
            SpeciesData {
                name: "Clefable-Mega".to_owned(),
                num: 36,
                primary_type: Type::Fairy,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 95,
                    atk: 80,
                    def: 93,
                    spa: 135,
                    spd: 110,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("magicguard")),
                    hidden: Some(Id::from_known("unaware")),
                },
                height_m: 1.7,
                weight_kg: 42.3,
                color: Color::Pink,
                base_species: Some(Id::from_known("clefable")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vulpix"),
            SpeciesData {
                name: "Vulpix".to_owned(),
                num: 37,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 38,
                    atk: 41,
                    def: 40,
                    spa: 50,
                    spd: 65,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("drought")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 9.9,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vulpixalola"),
            SpeciesData {
                name: "Vulpix-Alola".to_owned(),
                num: 37,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 38,
                    atk: 41,
                    def: 40,
                    spa: 50,
                    spd: 65,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("snowwarning")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 9.9,
                color: Color::White,
                base_species: Some(Id::from_known("vulpix")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("ninetales"),
            SpeciesData {
                name: "Ninetales".to_owned(),
                num: 38,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 73,
                    atk: 76,
                    def: 75,
                    spa: 81,
                    spd: 100,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flashfire")),
                    hidden: Some(Id::from_known("drought")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 19.9,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ninetalesalola"),
            SpeciesData {
                name: "Ninetales-Alola".to_owned(),
                num: 38,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 73,
                    atk: 67,
                    def: 75,
                    spa: 81,
                    spd: 100,
                    spe: 109,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("snowcloak")),
                    hidden: Some(Id::from_known("snowwarning")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 19.9,
                color: Color::Blue,
                base_species: Some(Id::from_known("ninetales")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("jigglypuff"),
            SpeciesData {
                name: "Jigglypuff".to_owned(),
                num: 39,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 115,
                    atk: 45,
                    def: 20,
                    spa: 45,
                    spd: 25,
                    spe: 20,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 0.5,
                weight_kg: 5.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wigglytuff"),
            SpeciesData {
                name: "Wigglytuff".to_owned(),
                num: 40,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 140,
                    atk: 70,
                    def: 45,
                    spa: 85,
                    spd: 50,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    secondary: Some(Id::from_known("competitive")),
                    hidden: Some(Id::from_known("frisk")),
                },
                height_m: 1.0,
                weight_kg: 12.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zubat"),
            SpeciesData {
                name: "Zubat".to_owned(),
                num: 41,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 35,
                    spa: 30,
                    spd: 40,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 7.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golbat"),
            SpeciesData {
                name: "Golbat".to_owned(),
                num: 42,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 70,
                    spa: 65,
                    spd: 75,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    hidden: Some(Id::from_known("infiltrator")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 55.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oddish"),
            SpeciesData {
                name: "Oddish".to_owned(),
                num: 43,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 45,
                    atk: 50,
                    def: 55,
                    spa: 75,
                    spd: 65,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("runaway")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 5.4,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gloom"),
            SpeciesData {
                name: "Gloom".to_owned(),
                num: 44,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 65,
                    def: 70,
                    spa: 85,
                    spd: 75,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("stench")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 8.6,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vileplume"),
            SpeciesData {
                name: "Vileplume".to_owned(),
                num: 45,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 85,
                    spa: 110,
                    spd: 90,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("chlorophyll")),
                    hidden: Some(Id::from_known("effectspore")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 18.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("paras"),
            SpeciesData {
                name: "Paras".to_owned(),
                num: 46,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 35,
                    atk: 70,
                    def: 55,
                    spa: 45,
                    spd: 55,
                    spe: 25,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("effectspore")),
                    secondary: Some(Id::from_known("dryskin")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 0.3,
                weight_kg: 5.4,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("parasect"),
            SpeciesData {
                name: "Parasect".to_owned(),
                num: 47,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 60,
                    atk: 95,
                    def: 80,
                    spa: 60,
                    spd: 80,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("effectspore")),
                    secondary: Some(Id::from_known("dryskin")),
                    hidden: Some(Id::from_known("damp")),
                },
                height_m: 1.0,
                weight_kg: 29.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("venonat"),
            SpeciesData {
                name: "Venonat".to_owned(),
                num: 48,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 50,
                    spa: 40,
                    spd: 55,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("compoundeyes")),
                    secondary: Some(Id::from_known("tintedlens")),
                    hidden: Some(Id::from_known("runaway")),
                },
                height_m: 1.0,
                weight_kg: 30.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("venomoth"),
            SpeciesData {
                name: "Venomoth".to_owned(),
                num: 49,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Poison),
                base_stats: StatTable {
                    hp: 70,
                    atk: 65,
                    def: 60,
                    spa: 90,
                    spd: 75,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    secondary: Some(Id::from_known("tintedlens")),
                    hidden: Some(Id::from_known("wonderskin")),
                },
                height_m: 1.5,
                weight_kg: 12.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("diglett"),
            SpeciesData {
                name: "Diglett".to_owned(),
                num: 50,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 10,
                    atk: 55,
                    def: 25,
                    spa: 35,
                    spd: 45,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    secondary: Some(Id::from_known("arenatrap")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.2,
                weight_kg: 0.8,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("diglettalola"),
            SpeciesData {
                name: "Diglett-Alola".to_owned(),
                num: 50,
                primary_type: Type::Ground,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 10,
                    atk: 55,
                    def: 30,
                    spa: 35,
                    spd: 45,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sandveil")),
                    secondary: Some(Id::from_known("tanglinghair")),
                    hidden: Some(Id::from_known("sandforce")),
                },
                height_m: 0.2,
                weight_kg: 1.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("diglett")),
                forme: Some("Alola".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
