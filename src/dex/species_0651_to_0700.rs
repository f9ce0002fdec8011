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

/// Species numbered 651 to 700.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("quilladin"),
            SpeciesData {
                name: "Quilladin".to_owned(),
                num: 651,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 61,
                    atk: 78,
                    def: 95,
                    spa: 56,
                    spd: 58,
                    spe: 57,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("bulletproof")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 29.0,
                color: Color::Green,
                prevo: Some(Id::from_known("chespin")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chesnaught"),
            SpeciesData {
                name: "Chesnaught".to_owned(),
                num: 652,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 88,
                    atk: 107,
                    def: 122,
                    spa: 74,
                    spd: 75,
                    spe: 64,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("bulletproof")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 90.0,
                color: Color::Green,
                prevo: Some(Id::from_known("quilladin")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("chesnaughtmega"),
            SpeciesData {
                name: "Chesnaught-Mega".to_owned(),
                num: 652,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 88,
                    atk: 137,
                    def: 172,
                    spa: 74,
                    spd: 115,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("bulletproof")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 90.0,
                color: Color::Green,
                base_species: Some(Id::from_known("chesnaught")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("chesnaughtite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("fennekin"),
            SpeciesData {
                name: "Fennekin".to_owned(),
                num: 653,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 40,
                    spa: 62,
                    spd: 60,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 9.4,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("braixen"),
            SpeciesData {
                name: "Braixen".to_owned(),
                num: 654,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 59,
                    atk: 59,
                    def: 58,
                    spa: 90,
                    spd: 70,
                    spe: 73,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 14.5,
                color: Color::Red,
                prevo: Some(Id::from_known("fennekin")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("delphox"),
            SpeciesData {
                name: "Delphox".to_owned(),
                num: 655,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 75,
                    atk: 69,
                    def: 72,
                    spa: 114,
                    spd: 100,
                    spe: 104,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 39.0,
                color: Color::Red,
                prevo: Some(Id::from_known("braixen")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("delphoxmega"),
            SpeciesData {
                name: "Delphox-Mega".to_owned(),
                num: 655,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 75,
                    atk: 69,
                    def: 72,
                    spa: 159,
                    spd: 125,
                    spe: 134,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 39.0,
                color: Color::Red,
                base_species: Some(Id::from_known("delphox")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("delphoxite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("froakie"),
            SpeciesData {
                name: "Froakie".to_owned(),
                num: 656,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 41,
                    atk: 56,
                    def: 40,
                    spa: 62,
                    spd: 44,
                    spe: 71,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 7.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("frogadier"),
            SpeciesData {
                name: "Frogadier".to_owned(),
                num: 657,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 54,
                    atk: 63,
                    def: 52,
                    spa: 83,
                    spd: 56,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 10.9,
                color: Color::Blue,
                prevo: Some(Id::from_known("froakie")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greninja"),
            SpeciesData {
                name: "Greninja".to_owned(),
                num: 658,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 72,
                    atk: 95,
                    def: 67,
                    spa: 103,
                    spd: 71,
                    spe: 122,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 40.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("frogadier")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greninjabond"),
            SpeciesData {
                name: "Greninja-Bond".to_owned(),
                num: 658,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 72,
                    atk: 95,
                    def: 67,
                    spa: 103,
                    spd: 71,
                    spe: 122,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlebond")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 40.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("greninja")),
                forme: Some("Bond".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greninjaash"),
            SpeciesData {
                name: "Greninja-Ash".to_owned(),
                num: 658,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 72,
                    atk: 145,
                    def: 67,
                    spa: 153,
                    spd: 71,
                    spe: 132,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlebond")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 40.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("greninja")),
                forme: Some("Ash".to_owned()),
                battle_only: Some("Bond".to_owned()),
                required_ability: Some(Id::from_known("battlebond")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("greninjamega"),
            SpeciesData {
                name: "Greninja-Mega".to_owned(),
                num: 658,
                primary_type: Type::Water,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 72,
                    atk: 125,
                    def: 77,
                    spa: 133,
                    spd: 81,
                    spe: 142,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("protean")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 40.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("greninja")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("greninjite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bunnelby"),
            SpeciesData {
                name: "Bunnelby".to_owned(),
                num: 659,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 38,
                    atk: 36,
                    def: 38,
                    spa: 32,
                    spd: 36,
                    spe: 57,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("hugepower")),
                },
                height_m: 0.4,
                weight_kg: 5.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("diggersby"),
            SpeciesData {
                name: "Diggersby".to_owned(),
                num: 660,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 85,
                    atk: 56,
                    def: 77,
                    spa: 50,
                    spd: 77,
                    spe: 78,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("cheekpouch")),
                    hidden: Some(Id::from_known("hugepower")),
                },
                height_m: 1.0,
                weight_kg: 42.4,
                color: Color::Brown,
                prevo: Some(Id::from_known("bunnelby")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("fletchling"),
            SpeciesData {
                name: "Fletchling".to_owned(),
                num: 661,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 45,
                    atk: 50,
                    def: 43,
                    spa: 40,
                    spd: 38,
                    spe: 62,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bigpecks")),
                    hidden: Some(Id::from_known("galewings")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.7,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("fletchinder"),
            SpeciesData {
                name: "Fletchinder".to_owned(),
                num: 662,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 62,
                    atk: 73,
                    def: 55,
                    spa: 56,
                    spd: 52,
                    spe: 84,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("galewings")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 16.0,
                color: Color::Red,
                prevo: Some(Id::from_known("fletchling")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("talonflame"),
            SpeciesData {
                name: "Talonflame".to_owned(),
                num: 663,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 78,
                    atk: 81,
                    def: 71,
                    spa: 74,
                    spd: 69,
                    spe: 126,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flamebody")),
                    hidden: Some(Id::from_known("galewings")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 24.5,
                color: Color::Red,
                prevo: Some(Id::from_known("fletchinder")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("scatterbug"),
            SpeciesData {
                name: "Scatterbug".to_owned(),
                num: 664,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 38,
                    atk: 35,
                    def: 40,
                    spa: 27,
                    spd: 25,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 0.3,
                weight_kg: 2.5,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("spewpa"),
            SpeciesData {
                name: "Spewpa".to_owned(),
                num: 665,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 45,
                    atk: 22,
                    def: 60,
                    spa: 27,
                    spd: 30,
                    spe: 29,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shedskin")),
                    hidden: Some(Id::from_known("friendguard")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 8.4,
                color: Color::Black,
                prevo: Some(Id::from_known("scatterbug")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vivillon"),
            SpeciesData {
                name: "Vivillon".to_owned(),
                num: 666,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 52,
                    def: 50,
                    spa: 90,
                    spd: 50,
                    spe: 89,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 1.2,
                weight_kg: 17.0,
                color: Color::Pink,
                prevo: Some(Id::from_known("spewpa")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vivillonfancy"),
            SpeciesData {
                name: "Vivillon-Fancy".to_owned(),
                num: 666,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 52,
                    def: 50,
                    spa: 90,
                    spd: 50,
                    spe: 89,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 1.2,
                weight_kg: 17.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("vivillon")),
                forme: Some("Fancy".to_owned()),
                prevo: Some(Id::from_known("spewpa")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("vivillonpokeball"),
            SpeciesData {
                name: "Vivillon-Pokeball".to_owned(),
                num: 666,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 52,
                    def: 50,
                    spa: 90,
                    spd: 50,
                    spe: 89,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shielddust")),
                    secondary: Some(Id::from_known("compoundeyes")),
                    hidden: Some(Id::from_known("friendguard")),
                },
                height_m: 1.2,
                weight_kg: 17.0,
                color: Color::Red,
                base_species: Some(Id::from_known("vivillon")),
                forme: Some("Pokeball".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("litleo"),
            SpeciesData {
                name: "Litleo".to_owned(),
                num: 667,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 62,
                    atk: 50,
                    def: 58,
                    spa: 73,
                    spd: 54,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 0.6,
                weight_kg: 13.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pyroar"),
            SpeciesData {
                name: "Pyroar".to_owned(),
                num: 668,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 86,
                    atk: 68,
                    def: 72,
                    spa: 109,
                    spd: 66,
                    spe: 106,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 1.5,
                weight_kg: 81.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("litleo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pyroarmega"),
            SpeciesData {
                name: "Pyroar-Mega".to_owned(),
                num: 668,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 86,
                    atk: 88,
                    def: 92,
                    spa: 129,
                    spd: 86,
                    spe: 126,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rivalry")),
                    secondary: Some(Id::from_known("unnerve")),
                    hidden: Some(Id::from_known("moxie")),
                },
                height_m: 1.5,
                weight_kg: 93.3,
                color: Color::Brown,
                base_species: Some(Id::from_known("pyroar")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("pyroarite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("flabebe"),
            SpeciesData {
                name: "Flabébé".to_owned(),
                num: 669,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 44,
                    atk: 38,
                    def: 39,
                    spa: 61,
                    spd: 79,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    hidden: Some(Id::from_known("symbiosis")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 0.1,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("floette"),
            SpeciesData {
                name: "Floette".to_owned(),
                num: 670,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 54,
                    atk: 45,
                    def: 47,
                    spa: 75,
                    spd: 98,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    hidden: Some(Id::from_known("symbiosis")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.9,
                color: Color::White,
                prevo: Some(Id::from_known("flabebe")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("floetteeternal"),
            SpeciesData {
                name: "Floette-Eternal".to_owned(),
                num: 670,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 74,
                    atk: 65,
                    def: 67,
                    spa: 125,
                    spd: 128,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    hidden: Some(Id::from_known("symbiosis")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.9,
                color: Color::White,
                base_species: Some(Id::from_known("floette")),
                forme: Some("Eternal".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("floettemega"),
            SpeciesData {
                name: "Floette-Mega".to_owned(),
                num: 670,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 74,
                    atk: 85,
                    def: 87,
                    spa: 155,
                    spd: 148,
                    spe: 102,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    hidden: Some(Id::from_known("symbiosis")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 100.8,
                color: Color::White,
                base_species: Some(Id::from_known("floette")),
                forme: Some("Mega".to_owned()),
                battle_only: Some("Eternal".to_owned()),
                required_item: Some(Id::from_known("floettite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("florges"),
            SpeciesData {
                name: "Florges".to_owned(),
                num: 671,
                primary_type: Type::Fairy,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 78,
                    atk: 65,
                    def: 68,
                    spa: 112,
                    spd: 154,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    hidden: Some(Id::from_known("symbiosis")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 10.0,
                color: Color::White,
                prevo: Some(Id::from_known("floette")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("skiddo"),
            SpeciesData {
                name: "Skiddo".to_owned(),
                num: 672,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 66,
                    atk: 65,
                    def: 48,
                    spa: 62,
                    spd: 57,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("grasspelt")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 31.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gogoat"),
            SpeciesData {
                name: "Gogoat".to_owned(),
                num: 673,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 123,
                    atk: 100,
                    def: 62,
                    spa: 97,
                    spd: 81,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("grasspelt")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 91.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("skiddo")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pancham"),
            SpeciesData {
                name: "Pancham".to_owned(),
                num: 674,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 67,
                    atk: 82,
                    def: 62,
                    spa: 46,
                    spd: 48,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironfist")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("scrappy")),
                },
                height_m: 0.6,
                weight_kg: 8.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pangoro"),
            SpeciesData {
                name: "Pangoro".to_owned(),
                num: 675,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 95,
                    atk: 124,
                    def: 78,
                    spa: 69,
                    spd: 71,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironfist")),
                    secondary: Some(Id::from_known("moldbreaker")),
                    hidden: Some(Id::from_known("scrappy")),
                },
                height_m: 2.1,
                weight_kg: 136.0,
                color: Color::White,
                prevo: Some(Id::from_known("pancham")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("furfrou"),
            SpeciesData {
                name: "Furfrou".to_owned(),
                num: 676,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 75,
                    atk: 80,
                    def: 60,
                    spa: 65,
                    spd: 90,
                    spe: 102,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("furcoat")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 28.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("espurr"),
            SpeciesData {
                name: "Espurr".to_owned(),
                num: 677,
                primary_type: Type::Psychic,
                base_stats: StatTable {
                    hp: 62,
                    atk: 48,
                    def: 54,
                    spa: 63,
                    spd: 60,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("owntempo")),
                },
                height_m: 0.3,
                weight_kg: 3.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowstic"),
            SpeciesData {
                name: "Meowstic".to_owned(),
                num: 678,
                primary_type: Type::Psychic,
                gender: Some(Gender::Male),
                base_stats: StatTable {
                    hp: 74,
                    atk: 48,
                    def: 76,
                    spa: 83,
                    spd: 81,
                    spe: 104,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("prankster")),
                },
                height_m: 0.6,
                weight_kg: 8.5,
                color: Color::Blue,
                prevo: Some(Id::from_known("espurr")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("meowsticf"),
            SpeciesData {
                name: "Meowstic-F".to_owned(),
                num: 678,
                primary_type: Type::Psychic,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 74,
                    atk: 48,
                    def: 76,
                    spa: 83,
                    spd: 81,
                    spe: 104,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("competitive")),
                },
                height_m: 0.6,
                weight_kg: 8.5,
                color: Color::White,
                base_species: Some(Id::from_known("meowstic")),
                forme: Some("F".to_owned()),
                prevo: Some(Id::from_known("espurr")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("honedge"),
            SpeciesData {
                name: "Honedge".to_owned(),
                num: 679,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 45,
                    atk: 80,
                    def: 100,
                    spa: 35,
                    spd: 37,
                    spe: 28,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("noguard")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 2.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("doublade"),
            SpeciesData {
                name: "Doublade".to_owned(),
                num: 680,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 59,
                    atk: 110,
                    def: 150,
                    spa: 45,
                    spd: 49,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("noguard")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 4.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("honedge")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("aegislash"),
            SpeciesData {
                name: "Aegislash".to_owned(),
                num: 681,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 60,
                    atk: 50,
                    def: 140,
                    spa: 50,
                    spd: 140,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stancechange")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 53.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("doublade")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("aegislashblade"),
            SpeciesData {
                name: "Aegislash-Blade".to_owned(),
                num: 681,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 60,
                    atk: 140,
                    def: 50,
                    spa: 140,
                    spd: 50,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stancechange")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 53.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("aegislash")),
                forme: Some("Blade".to_owned()),
                battle_only: Some("Shield".to_owned()),
                required_ability: Some(Id::from_known("stancechange")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("spritzee"),
            SpeciesData {
                name: "Spritzee".to_owned(),
                num: 682,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 78,
                    atk: 52,
                    def: 60,
                    spa: 63,
                    spd: 65,
                    spe: 23,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("aromatisse"),
            SpeciesData {
                name: "Aromatisse".to_owned(),
                num: 683,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 101,
                    atk: 72,
                    def: 72,
                    spa: 99,
                    spd: 89,
                    spe: 29,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("healer")),
                    hidden: Some(Id::from_known("aromaveil")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 15.5,
                color: Color::Pink,
                prevo: Some(Id::from_known("spritzee")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("swirlix"),
            SpeciesData {
                name: "Swirlix".to_owned(),
                num: 684,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 62,
                    atk: 48,
                    def: 66,
                    spa: 59,
                    spd: 57,
                    spe: 49,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    hidden: Some(Id::from_known("unburden")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 3.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("slurpuff"),
            SpeciesData {
                name: "Slurpuff".to_owned(),
                num: 685,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 82,
                    atk: 80,
                    def: 86,
                    spa: 85,
                    spd: 75,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    hidden: Some(Id::from_known("unburden")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 5.0,
                color: Color::White,
                prevo: Some(Id::from_known("swirlix")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("inkay"),
            SpeciesData {
                name: "Inkay".to_owned(),
                num: 686,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 53,
                    atk: 54,
                    def: 53,
                    spa: 37,
                    spd: 46,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("contrary")),
                    secondary: Some(Id::from_known("suctioncups")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 0.4,
                weight_kg: 3.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("malamar"),
            SpeciesData {
                name: "Malamar".to_owned(),
                num: 687,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 86,
                    atk: 92,
                    def: 88,
                    spa: 68,
                    spd: 75,
                    spe: 73,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("contrary")),
                    secondary: Some(Id::from_known("suctioncups")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 1.5,
                weight_kg: 47.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("inkay")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("malamarmega"),
            SpeciesData {
                name: "Malamar-Mega".to_owned(),
                num: 687,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 86,
                    atk: 102,
                    def: 88,
                    spa: 98,
                    spd: 120,
                    spe: 88,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("contrary")),
                    secondary: Some(Id::from_known("suctioncups")),
                    hidden: Some(Id::from_known("infiltrator")),
                },
                height_m: 2.9,
                weight_kg: 69.8,
                color: Color::Blue,
                base_species: Some(Id::from_known("malamar")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("malamarite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("binacle"),
            SpeciesData {
                name: "Binacle".to_owned(),
                num: 688,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 42,
                    atk: 52,
                    def: 67,
                    spa: 39,
                    spd: 56,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 0.5,
                weight_kg: 31.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("barbaracle"),
            SpeciesData {
                name: "Barbaracle".to_owned(),
                num: 689,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 72,
                    atk: 105,
                    def: 115,
                    spa: 54,
                    spd: 86,
                    spe: 68,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 1.3,
                weight_kg: 96.0,
                color: Color::Brown,
                prevo: Some(Id::from_known("binacle")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("barbaraclemega"),
            SpeciesData {
                name: "Barbaracle-Mega".to_owned(),
                num: 689,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 72,
                    atk: 140,
                    def: 130,
                    spa: 64,
                    spd: 106,
                    spe: 88,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    secondary: Some(Id::from_known("sniper")),
                    hidden: Some(Id::from_known("pickpocket")),
                },
                height_m: 2.2,
                weight_kg: 100.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("barbaracle")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("barbaracite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("skrelp"),
            SpeciesData {
                name: "Skrelp".to_owned(),
                num: 690,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 50,
                    atk: 60,
                    def: 60,
                    spa: 60,
                    spd: 60,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("poisontouch")),
                    hidden: Some(Id::from_known("adaptability")),
                },
                height_m: 0.5,
                weight_kg: 7.3,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragalge"),
            SpeciesData {
                name: "Dragalge".to_owned(),
                num: 691,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 65,
                    atk: 75,
                    def: 90,
                    spa: 97,
                    spd: 123,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("poisontouch")),
                    hidden: Some(Id::from_known("adaptability")),
                },
                height_m: 1.8,
                weight_kg: 81.5,
                color: Color::Brown,
                prevo: Some(Id::from_known("skrelp")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dragalgemega"),
            SpeciesData {
                name: "Dragalge-Mega".to_owned(),
                num: 691,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 65,
                    atk: 85,
                    def: 105,
                    spa: 132,
                    spd: 163,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("poisonpoint")),
                    secondary: Some(Id::from_known("poisontouch")),
                    hidden: Some(Id::from_known("adaptability")),
                },
                height_m: 2.1,
                weight_kg: 100.3,
                color: Color::Brown,
                base_species: Some(Id::from_known("dragalge")),
                forme: Some("Mega".to_owned()),
                required_item: Some(Id::from_known("dragalgite")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("clauncher"),
            SpeciesData {
                name: "Clauncher".to_owned(),
                num: 692,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 53,
                    def: 62,
                    spa: 58,
                    spd: 63,
                    spe: 44,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("megalauncher")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 8.3,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("clawitzer"),
            SpeciesData {
                name: "Clawitzer".to_owned(),
                num: 693,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 71,
                    atk: 73,
                    def: 88,
                    spa: 120,
                    spd: 89,
                    spe: 59,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("megalauncher")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 35.3,
                color: Color::Blue,
                prevo: Some(Id::from_known("clauncher")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("helioptile"),
            SpeciesData {
                name: "Helioptile".to_owned(),
                num: 694,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 44,
                    atk: 38,
                    def: 33,
                    spa: 61,
                    spd: 43,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dryskin")),
                    secondary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("solarpower")),
                },
                height_m: 0.5,
                weight_kg: 6.0,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("heliolisk"),
            SpeciesData {
                name: "Heliolisk".to_owned(),
                num: 695,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Normal),
                base_stats: StatTable {
                    hp: 62,
                    atk: 55,
                    def: 52,
                    spa: 109,
                    spd: 94,
                    spe: 109,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dryskin")),
                    secondary: Some(Id::from_known("sandveil")),
                    hidden: Some(Id::from_known("solarpower")),
                },
                height_m: 1.0,
                weight_kg: 21.0,
                color: Color::Yellow,
                prevo: Some(Id::from_known("helioptile")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tyrunt"),
            SpeciesData {
                name: "Tyrunt".to_owned(),
                num: 696,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 58,
                    atk: 89,
                    def: 77,
                    spa: 45,
                    spd: 45,
                    spe: 48,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 26.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tyrantrum"),
            SpeciesData {
                name: "Tyrantrum".to_owned(),
                num: 697,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 82,
                    atk: 121,
                    def: 119,
                    spa: 69,
                    spd: 59,
                    spe: 71,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("rockhead")),
                    ..Default::default()
                },
                height_m: 2.5,
                weight_kg: 270.0,
                color: Color::Red,
                prevo: Some(Id::from_known("tyrunt")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("amaura"),
            SpeciesData {
                name: "Amaura".to_owned(),
                num: 698,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 77,
                    atk: 59,
                    def: 50,
                    spa: 67,
                    spd: 63,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("refrigerate")),
                    hidden: Some(Id::from_known("snowwarning")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 25.2,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("aurorus"),
            SpeciesData {
                name: "Aurorus".to_owned(),
                num: 699,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 123,
                    atk: 77,
                    def: 72,
                    spa: 99,
                    spd: 92,
                    spe: 58,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("refrigerate")),
                    hidden: Some(Id::from_known("snowwarning")),
                    ..Default::default()
                },
                height_m: 2.7,
                weight_kg: 225.0,
                color: Color::Blue,
                prevo: Some(Id::from_known("amaura")),
                ..Default::default()
            },
        ),
        (
            Id::from_known("sylveon"),
            SpeciesData {
                name: "Sylveon".to_owned(),
                num: 700,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 95,
                    atk: 65,
                    def: 65,
                    spa: 110,
                    spd: 130,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cutecharm")),
                    hidden: Some(Id::from_known("pixilate")),
                    ..Default::default()
                },
                height_m: 1.0,
                weight_kg: 23.5,
                color: Color::Pink,
                prevo: Some(Id::from_known("eevee")),
                ..Default::default()
            },
        ),
    ])
}
