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

/// Species numbered 751 to 800.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("dewpider"),
            SpeciesData {
                name: "Dewpider".to_owned(),
                num: 751,
                primary_type: Type::Water,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 38,
                    atk: 40,
                    def: 52,
                    spa: 40,
                    spd: 72,
                    spe: 27,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterbubble")),
                    hidden: Some(Id::from_known("waterabsorb")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 4.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("araquanid"),
            SpeciesData {
                name: "Araquanid".to_owned(),
                num: 752,
                primary_type: Type::Water,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 68,
                    atk: 70,
                    def: 92,
                    spa: 50,
                    spd: 132,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterbubble")),
                    hidden: Some(Id::from_known("waterabsorb")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 82.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("araquanidtotem"),
            SpeciesData {
                name: "Araquanid-Totem".to_owned(),
                num: 752,
                primary_type: Type::Water,
                secondary_type: Some(Type::Bug),
                base_stats: StatTable {
                    hp: 68,
                    atk: 70,
                    def: 92,
                    spa: 50,
                    spd: 132,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterbubble")),
                    ..Default::default()
                },
                height_m: 3.1,
                weight_kg: 217.5,
                color: Color::Green,
                base_species: Some(Id::from_known("araquanid")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("fomantis"),
            SpeciesData {
                name: "Fomantis".to_owned(),
                num: 753,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 40,
                    atk: 55,
                    def: 35,
                    spa: 50,
                    spd: 35,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lurantis"),
            SpeciesData {
                name: "Lurantis".to_owned(),
                num: 754,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 105,
                    def: 90,
                    spa: 80,
                    spd: 90,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    hidden: Some(Id::from_known("contrary")),
                    ..Default::default()
                },
                height_m: 0.9,
                weight_kg: 18.5,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lurantistotem"),
            SpeciesData {
                name: "Lurantis-Totem".to_owned(),
                num: 754,
                primary_type: Type::Grass,
                base_stats: StatTable {
                    hp: 70,
                    atk: 105,
                    def: 90,
                    spa: 80,
                    spd: 90,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 58.0,
                color: Color::Pink,
                base_species: Some(Id::from_known("lurantis")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("morelull"),
            SpeciesData {
                name: "Morelull".to_owned(),
                num: 755,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 40,
                    atk: 35,
                    def: 55,
                    spa: 65,
                    spd: 75,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("effectspore")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 0.2,
                weight_kg: 1.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("shiinotic"),
            SpeciesData {
                name: "Shiinotic".to_owned(),
                num: 756,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 60,
                    atk: 45,
                    def: 80,
                    spa: 90,
                    spd: 100,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("illuminate")),
                    secondary: Some(Id::from_known("effectspore")),
                    hidden: Some(Id::from_known("raindish")),
                },
                height_m: 1.0,
                weight_kg: 11.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("salandit"),
            SpeciesData {
                name: "Salandit".to_owned(),
                num: 757,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fire),
                base_stats: StatTable {
                    hp: 48,
                    atk: 44,
                    def: 40,
                    spa: 71,
                    spd: 40,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("corrosion")),
                    hidden: Some(Id::from_known("oblivious")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 4.8,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("salazzle"),
            SpeciesData {
                name: "Salazzle".to_owned(),
                num: 758,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 68,
                    atk: 64,
                    def: 60,
                    spa: 111,
                    spd: 60,
                    spe: 117,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("corrosion")),
                    hidden: Some(Id::from_known("oblivious")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 22.2,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("salazzletotem"),
            SpeciesData {
                name: "Salazzle-Totem".to_owned(),
                num: 758,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Fire),
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 68,
                    atk: 64,
                    def: 60,
                    spa: 111,
                    spd: 60,
                    spe: 117,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("corrosion")),
                    ..Default::default()
                },
                height_m: 2.1,
                weight_kg: 81.0,
                color: Color::Black,
                base_species: Some(Id::from_known("salazzle")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("stufful"),
            SpeciesData {
                name: "Stufful".to_owned(),
                num: 759,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 70,
                    atk: 75,
                    def: 50,
                    spa: 45,
                    spd: 50,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fluffy")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("cutecharm")),
                },
                height_m: 0.5,
                weight_kg: 6.8,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bewear"),
            SpeciesData {
                name: "Bewear".to_owned(),
                num: 760,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 120,
                    atk: 125,
                    def: 80,
                    spa: 55,
                    spd: 60,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fluffy")),
                    secondary: Some(Id::from_known("klutz")),
                    hidden: Some(Id::from_known("unnerve")),
                },
                height_m: 2.1,
                weight_kg: 135.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("bounsweet"),
            SpeciesData {
                name: "Bounsweet".to_owned(),
                num: 761,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 42,
                    atk: 30,
                    def: 38,
                    spa: 30,
                    spd: 38,
                    spe: 32,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    secondary: Some(Id::from_known("oblivious")),
                    hidden: Some(Id::from_known("sweetveil")),
                },
                height_m: 0.3,
                weight_kg: 3.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("steenee"),
            SpeciesData {
                name: "Steenee".to_owned(),
                num: 762,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 52,
                    atk: 40,
                    def: 48,
                    spa: 40,
                    spd: 48,
                    spe: 62,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    secondary: Some(Id::from_known("oblivious")),
                    hidden: Some(Id::from_known("sweetveil")),
                },
                height_m: 0.7,
                weight_kg: 8.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tsareena"),
            SpeciesData {
                name: "Tsareena".to_owned(),
                num: 763,
                primary_type: Type::Grass,
                gender: Some(Gender::Female),
                base_stats: StatTable {
                    hp: 72,
                    atk: 120,
                    def: 98,
                    spa: 50,
                    spd: 98,
                    spe: 72,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("leafguard")),
                    secondary: Some(Id::from_known("queenlymajesty")),
                    hidden: Some(Id::from_known("sweetveil")),
                },
                height_m: 1.2,
                weight_kg: 21.4,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("comfey"),
            SpeciesData {
                name: "Comfey".to_owned(),
                num: 764,
                primary_type: Type::Fairy,
                base_stats: StatTable {
                    hp: 51,
                    atk: 52,
                    def: 90,
                    spa: 82,
                    spd: 110,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("flowerveil")),
                    secondary: Some(Id::from_known("triage")),
                    hidden: Some(Id::from_known("naturalcure")),
                },
                height_m: 0.1,
                weight_kg: 0.3,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oranguru"),
            SpeciesData {
                name: "Oranguru".to_owned(),
                num: 765,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 90,
                    atk: 60,
                    def: 80,
                    spa: 90,
                    spd: 110,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innerfocus")),
                    secondary: Some(Id::from_known("telepathy")),
                    hidden: Some(Id::from_known("symbiosis")),
                },
                height_m: 1.5,
                weight_kg: 76.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("passimian"),
            SpeciesData {
                name: "Passimian".to_owned(),
                num: 766,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 100,
                    atk: 120,
                    def: 90,
                    spa: 40,
                    spd: 60,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("receiver")),
                    hidden: Some(Id::from_known("defiant")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 82.8,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wimpod"),
            SpeciesData {
                name: "Wimpod".to_owned(),
                num: 767,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 25,
                    atk: 35,
                    def: 40,
                    spa: 20,
                    spd: 30,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("wimpout")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 12.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("golisopod"),
            SpeciesData {
                name: "Golisopod".to_owned(),
                num: 768,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 75,
                    atk: 125,
                    def: 140,
                    spa: 60,
                    spd: 90,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("emergencyexit")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 108.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sandygast"),
            SpeciesData {
                name: "Sandygast".to_owned(),
                num: 769,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 55,
                    atk: 55,
                    def: 80,
                    spa: 70,
                    spd: 45,
                    spe: 15,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("watercompaction")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 70.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("palossand"),
            SpeciesData {
                name: "Palossand".to_owned(),
                num: 770,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Ground),
                base_stats: StatTable {
                    hp: 85,
                    atk: 75,
                    def: 110,
                    spa: 100,
                    spd: 75,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("watercompaction")),
                    hidden: Some(Id::from_known("sandveil")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 250.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pyukumuku"),
            SpeciesData {
                name: "Pyukumuku".to_owned(),
                num: 771,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 55,
                    atk: 60,
                    def: 130,
                    spa: 30,
                    spd: 130,
                    spe: 5,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("innardsout")),
                    hidden: Some(Id::from_known("unaware")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.2,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("typenull"),
            SpeciesData {
                name: "Type: Null".to_owned(),
                num: 772,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 59,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battlearmor")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 120.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvally"),
            SpeciesData {
                name: "Silvally".to_owned(),
                num: 773,
                primary_type: Type::Normal,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallybug"),
            SpeciesData {
                name: "Silvally-Bug".to_owned(),
                num: 773,
                primary_type: Type::Bug,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Bug".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallydark"),
            SpeciesData {
                name: "Silvally-Dark".to_owned(),
                num: 773,
                primary_type: Type::Dark,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Dark".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallydragon"),
            SpeciesData {
                name: "Silvally-Dragon".to_owned(),
                num: 773,
                primary_type: Type::Dragon,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Dragon".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyelectric"),
            SpeciesData {
                name: "Silvally-Electric".to_owned(),
                num: 773,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Electric".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyfairy"),
            SpeciesData {
                name: "Silvally-Fairy".to_owned(),
                num: 773,
                primary_type: Type::Fairy,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Fairy".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyfighting"),
            SpeciesData {
                name: "Silvally-Fighting".to_owned(),
                num: 773,
                primary_type: Type::Fighting,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Fighting".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyfire"),
            SpeciesData {
                name: "Silvally-Fire".to_owned(),
                num: 773,
                primary_type: Type::Fire,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Fire".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyflying"),
            SpeciesData {
                name: "Silvally-Flying".to_owned(),
                num: 773,
                primary_type: Type::Flying,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Flying".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyghost"),
            SpeciesData {
                name: "Silvally-Ghost".to_owned(),
                num: 773,
                primary_type: Type::Ghost,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Ghost".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallygrass"),
            SpeciesData {
                name: "Silvally-Grass".to_owned(),
                num: 773,
                primary_type: Type::Grass,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Grass".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyground"),
            SpeciesData {
                name: "Silvally-Ground".to_owned(),
                num: 773,
                primary_type: Type::Ground,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Ground".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyice"),
            SpeciesData {
                name: "Silvally-Ice".to_owned(),
                num: 773,
                primary_type: Type::Ice,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Ice".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallypoison"),
            SpeciesData {
                name: "Silvally-Poison".to_owned(),
                num: 773,
                primary_type: Type::Poison,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Poison".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallypsychic"),
            SpeciesData {
                name: "Silvally-Psychic".to_owned(),
                num: 773,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Psychic".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallyrock"),
            SpeciesData {
                name: "Silvally-Rock".to_owned(),
                num: 773,
                primary_type: Type::Rock,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Rock".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallysteel"),
            SpeciesData {
                name: "Silvally-Steel".to_owned(),
                num: 773,
                primary_type: Type::Steel,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Steel".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("silvallywater"),
            SpeciesData {
                name: "Silvally-Water".to_owned(),
                num: 773,
                primary_type: Type::Water,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 95,
                    atk: 95,
                    def: 95,
                    spa: 95,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("rkssystem")),
                    ..Default::default()
                },
                height_m: 2.3,
                weight_kg: 100.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("silvally")),
                forme: Some("Water".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("minior"),
            SpeciesData {
                name: "Minior".to_owned(),
                num: 774,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 100,
                    def: 60,
                    spa: 100,
                    spd: 60,
                    spe: 120,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shieldsdown")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.3,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("miniormeteor"),
            SpeciesData {
                name: "Minior-Meteor".to_owned(),
                num: 774,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 60,
                    atk: 60,
                    def: 100,
                    spa: 60,
                    spd: 100,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shieldsdown")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 40.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("minior")),
                forme: Some("Meteor".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("komala"),
            SpeciesData {
                name: "Komala".to_owned(),
                num: 775,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 65,
                    atk: 115,
                    def: 65,
                    spa: 75,
                    spd: 95,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("comatose")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 19.9,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("turtonator"),
            SpeciesData {
                name: "Turtonator".to_owned(),
                num: 776,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 60,
                    atk: 78,
                    def: 135,
                    spa: 91,
                    spd: 85,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shellarmor")),
                    ..Default::default()
                },
                height_m: 2.0,
                weight_kg: 212.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("togedemaru"),
            SpeciesData {
                name: "Togedemaru".to_owned(),
                num: 777,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 65,
                    atk: 98,
                    def: 63,
                    spa: 40,
                    spd: 73,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("ironbarbs")),
                    secondary: Some(Id::from_known("lightningrod")),
                    hidden: Some(Id::from_known("sturdy")),
                },
                height_m: 0.3,
                weight_kg: 3.3,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("togedemarutotem"),
            SpeciesData {
                name: "Togedemaru-Totem".to_owned(),
                num: 777,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Steel),
                base_stats: StatTable {
                    hp: 65,
                    atk: 98,
                    def: 63,
                    spa: 40,
                    spd: 73,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 13.0,
                color: Color::Gray,
                base_species: Some(Id::from_known("togedemaru")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mimikyu"),
            SpeciesData {
                name: "Mimikyu".to_owned(),
                num: 778,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 55,
                    atk: 90,
                    def: 80,
                    spa: 50,
                    spd: 105,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("disguise")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.7,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mimikyubusted"),
            SpeciesData {
                name: "Mimikyu-Busted".to_owned(),
                num: 778,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 55,
                    atk: 90,
                    def: 80,
                    spa: 50,
                    spd: 105,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("disguise")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.7,
                color: Color::Yellow,
                base_species: Some(Id::from_known("mimikyu")),
                forme: Some("Busted".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mimikyutotem"),
            SpeciesData {
                name: "Mimikyu-Totem".to_owned(),
                num: 778,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 55,
                    atk: 90,
                    def: 80,
                    spa: 50,
                    spd: 105,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("disguise")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 2.8,
                color: Color::Yellow,
                base_species: Some(Id::from_known("mimikyu")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mimikyubustedtotem"),
            SpeciesData {
                name: "Mimikyu-Busted-Totem".to_owned(),
                num: 778,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 55,
                    atk: 90,
                    def: 80,
                    spa: 50,
                    spd: 105,
                    spe: 96,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("disguise")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 2.8,
                color: Color::Yellow,
                base_species: Some(Id::from_known("mimikyu")),
                forme: Some("Busted-Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bruxish"),
            SpeciesData {
                name: "Bruxish".to_owned(),
                num: 779,
                primary_type: Type::Water,
                secondary_type: Some(Type::Psychic),
                base_stats: StatTable {
                    hp: 68,
                    atk: 105,
                    def: 70,
                    spa: 70,
                    spd: 70,
                    spe: 92,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dazzling")),
                    secondary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("wonderskin")),
                },
                height_m: 0.9,
                weight_kg: 19.0,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drampa"),
            SpeciesData {
                name: "Drampa".to_owned(),
                num: 780,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 78,
                    atk: 60,
                    def: 85,
                    spa: 135,
                    spd: 91,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("berserk")),
                    secondary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("cloudnine")),
                },
                height_m: 3.0,
                weight_kg: 185.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("drampamega"),
            SpeciesData {
                name: "Drampa-Mega".to_owned(),
                num: 780,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 78,
                    atk: 85,
                    def: 110,
                    spa: 160,
                    spd: 116,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("berserk")),
                    secondary: Some(Id::from_known("sapsipper")),
                    hidden: Some(Id::from_known("cloudnine")),
                },
                height_m: 3.0,
                weight_kg: 185.0,
                color: Color::White,
                base_species: Some(Id::from_known("drampa")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dhelmise"),
            SpeciesData {
                name: "Dhelmise".to_owned(),
                num: 781,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 131,
                    def: 100,
                    spa: 86,
                    spd: 90,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("steelworker")),
                    ..Default::default()
                },
                height_m: 3.9,
                weight_kg: 210.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("jangmoo"),
            SpeciesData {
                name: "Jangmo-o".to_owned(),
                num: 782,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 45,
                    atk: 55,
                    def: 65,
                    spa: 45,
                    spd: 45,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bulletproof")),
                    secondary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 0.6,
                weight_kg: 29.7,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hakamoo"),
            SpeciesData {
                name: "Hakamo-o".to_owned(),
                num: 783,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 55,
                    atk: 75,
                    def: 90,
                    spa: 65,
                    spd: 70,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bulletproof")),
                    secondary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 1.2,
                weight_kg: 47.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kommoo"),
            SpeciesData {
                name: "Kommo-o".to_owned(),
                num: 784,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 75,
                    atk: 110,
                    def: 125,
                    spa: 100,
                    spd: 105,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("bulletproof")),
                    secondary: Some(Id::from_known("soundproof")),
                    hidden: Some(Id::from_known("overcoat")),
                },
                height_m: 1.6,
                weight_kg: 78.2,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kommoototem"),
            SpeciesData {
                name: "Kommo-o-Totem".to_owned(),
                num: 784,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 75,
                    atk: 110,
                    def: 125,
                    spa: 100,
                    spd: 105,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overcoat")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 207.5,
                color: Color::Gray,
                base_species: Some(Id::from_known("kommoo")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("tapukoko"),
            SpeciesData {
                name: "Tapu Koko".to_owned(),
                num: 785,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 115,
                    def: 85,
                    spa: 95,
                    spd: 75,
                    spe: 130,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("electricsurge")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 20.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tapulele"),
            SpeciesData {
                name: "Tapu Lele".to_owned(),
                num: 786,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 85,
                    def: 75,
                    spa: 130,
                    spd: 115,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("psychicsurge")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 18.6,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tapubulu"),
            SpeciesData {
                name: "Tapu Bulu".to_owned(),
                num: 787,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 130,
                    def: 115,
                    spa: 85,
                    spd: 95,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("grassysurge")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 1.9,
                weight_kg: 45.5,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("tapufini"),
            SpeciesData {
                name: "Tapu Fini".to_owned(),
                num: 788,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 70,
                    atk: 75,
                    def: 115,
                    spa: 95,
                    spd: 130,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("mistysurge")),
                    hidden: Some(Id::from_known("telepathy")),
                    ..Default::default()
                },
                height_m: 1.3,
                weight_kg: 21.2,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cosmog"),
            SpeciesData {
                name: "Cosmog".to_owned(),
                num: 789,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 43,
                    atk: 29,
                    def: 31,
                    spa: 29,
                    spd: 31,
                    spe: 37,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("unaware")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.1,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("cosmoem"),
            SpeciesData {
                name: "Cosmoem".to_owned(),
                num: 790,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 43,
                    atk: 29,
                    def: 131,
                    spa: 29,
                    spd: 131,
                    spe: 37,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 0.1,
                weight_kg: 999.9,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("solgaleo"),
            SpeciesData {
                name: "Solgaleo".to_owned(),
                num: 791,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 137,
                    atk: 137,
                    def: 107,
                    spa: 113,
                    spd: 89,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fullmetalbody")),
                    ..Default::default()
                },
                height_m: 3.4,
                weight_kg: 230.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lunala"),
            SpeciesData {
                name: "Lunala".to_owned(),
                num: 792,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 137,
                    atk: 113,
                    def: 89,
                    spa: 137,
                    spd: 107,
                    spe: 97,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("shadowshield")),
                    ..Default::default()
                },
                height_m: 4.0,
                weight_kg: 120.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("nihilego"),
            SpeciesData {
                name: "Nihilego".to_owned(),
                num: 793,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Poison),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 109,
                    atk: 53,
                    def: 47,
                    spa: 127,
                    spd: 131,
                    spe: 103,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 55.5,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("buzzwole"),
            SpeciesData {
                name: "Buzzwole".to_owned(),
                num: 794,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 107,
                    atk: 139,
                    def: 139,
                    spa: 53,
                    spd: 53,
                    spe: 79,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 333.6,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pheromosa"),
            SpeciesData {
                name: "Pheromosa".to_owned(),
                num: 795,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fighting),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 71,
                    atk: 137,
                    def: 37,
                    spa: 137,
                    spd: 37,
                    spe: 151,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 25.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("xurkitree"),
            SpeciesData {
                name: "Xurkitree".to_owned(),
                num: 796,
                primary_type: Type::Electric,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 83,
                    atk: 89,
                    def: 71,
                    spa: 173,
                    spd: 71,
                    spe: 83,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 3.8,
                weight_kg: 100.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("celesteela"),
            SpeciesData {
                name: "Celesteela".to_owned(),
                num: 797,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 97,
                    atk: 101,
                    def: 103,
                    spa: 107,
                    spd: 101,
                    spe: 61,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 9.2,
                weight_kg: 999.9,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("kartana"),
            SpeciesData {
                name: "Kartana".to_owned(),
                num: 798,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 59,
                    atk: 181,
                    def: 131,
                    spa: 59,
                    spd: 31,
                    spe: 109,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 0.1,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("guzzlord"),
            SpeciesData {
                name: "Guzzlord".to_owned(),
                num: 799,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 223,
                    atk: 101,
                    def: 53,
                    spa: 97,
                    spd: 53,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("beastboost")),
                    ..Default::default()
                },
                height_m: 5.5,
                weight_kg: 888.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("necrozma"),
            SpeciesData {
                name: "Necrozma".to_owned(),
                num: 800,
                primary_type: Type::Psychic,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 97,
                    atk: 107,
                    def: 101,
                    spa: 127,
                    spd: 89,
                    spe: 79,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prismarmor")),
                    ..Default::default()
                },
                height_m: 2.4,
                weight_kg: 230.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("necrozmaduskmane"),
            SpeciesData {
                name: "Necrozma-Dusk-Mane".to_owned(),
                num: 800,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Steel),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 97,
                    atk: 157,
                    def: 127,
                    spa: 113,
                    spd: 109,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prismarmor")),
                    ..Default::default()
                },
                height_m: 3.8,
                weight_kg: 460.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("necrozma")),
                forme: Some("Dusk-Mane".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("necrozmadawnwings"),
            SpeciesData {
                name: "Necrozma-Dawn-Wings".to_owned(),
                num: 800,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 97,
                    atk: 113,
                    def: 109,
                    spa: 157,
                    spd: 127,
                    spe: 77,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prismarmor")),
                    ..Default::default()
                },
                height_m: 4.2,
                weight_kg: 350.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("necrozma")),
                forme: Some("Dawn-Wings".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("necrozmaultra"),
            SpeciesData {
                name: "Necrozma-Ultra".to_owned(),
                num: 800,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Dragon),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 97,
                    atk: 167,
                    def: 97,
                    spa: 167,
                    spd: 97,
                    spe: 129,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("neuroforce")),
                    ..Default::default()
                },
                height_m: 7.5,
                weight_kg: 230.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("necrozma")),
                forme: Some("Ultra".to_owned()),
                ..Default::default()
            },
        ),
    ])
}
