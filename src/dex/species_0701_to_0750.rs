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

/// Species numbered 701 to 750.
pub(crate) fn table() -> SpeciesTable {
    SpeciesTable::from_iter([
        (
            Id::from_known("hawlucha"),
            SpeciesData {
                name: "Hawlucha".to_owned(),
                num: 701,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 78,
                    atk: 92,
                    def: 75,
                    spa: 74,
                    spd: 63,
                    spe: 118,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 0.8,
                weight_kg: 21.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hawluchamega"),
            SpeciesData {
                name: "Hawlucha-Mega".to_owned(),
                num: 701,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 78,
                    atk: 137,
                    def: 100,
                    spa: 74,
                    spd: 93,
                    spe: 118,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("limber")),
                    secondary: Some(Id::from_known("unburden")),
                    hidden: Some(Id::from_known("moldbreaker")),
                },
                height_m: 1.0,
                weight_kg: 25.0,
                color: Color::Green,
                base_species: Some(Id::from_known("hawlucha")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("dedenne"),
            SpeciesData {
                name: "Dedenne".to_owned(),
                num: 702,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 67,
                    atk: 58,
                    def: 57,
                    spa: 81,
                    spd: 67,
                    spe: 101,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("cheekpouch")),
                    secondary: Some(Id::from_known("pickup")),
                    hidden: Some(Id::from_known("plus")),
                },
                height_m: 0.2,
                weight_kg: 2.2,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("carbink"),
            SpeciesData {
                name: "Carbink".to_owned(),
                num: 703,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 50,
                    def: 150,
                    spa: 50,
                    spd: 150,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    hidden: Some(Id::from_known("sturdy")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 5.7,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("goomy"),
            SpeciesData {
                name: "Goomy".to_owned(),
                num: 704,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 45,
                    atk: 50,
                    def: 35,
                    spa: 55,
                    spd: 75,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("gooey")),
                },
                height_m: 0.3,
                weight_kg: 2.8,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sliggoo"),
            SpeciesData {
                name: "Sliggoo".to_owned(),
                num: 705,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 68,
                    atk: 75,
                    def: 53,
                    spa: 83,
                    spd: 113,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("gooey")),
                },
                height_m: 0.8,
                weight_kg: 17.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("sliggoohisui"),
            SpeciesData {
                name: "Sliggoo-Hisui".to_owned(),
                num: 705,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 58,
                    atk: 75,
                    def: 83,
                    spa: 83,
                    spd: 113,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("gooey")),
                },
                height_m: 0.7,
                weight_kg: 68.5,
                color: Color::Purple,
                base_species: Some(Id::from_known("sliggoo")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("goodra"),
            SpeciesData {
                name: "Goodra".to_owned(),
                num: 706,
                primary_type: Type::Dragon,
                base_stats: StatTable {
                    hp: 90,
                    atk: 100,
                    def: 70,
                    spa: 110,
                    spd: 150,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    secondary: Some(Id::from_known("hydration")),
                    hidden: Some(Id::from_known("gooey")),
                },
                height_m: 2.0,
                weight_kg: 150.5,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("goodrahisui"),
            SpeciesData {
                name: "Goodra-Hisui".to_owned(),
                num: 706,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 80,
                    atk: 100,
                    def: 100,
                    spa: 110,
                    spd: 150,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sapsipper")),
                    secondary: Some(Id::from_known("shellarmor")),
                    hidden: Some(Id::from_known("gooey")),
                },
                height_m: 1.7,
                weight_kg: 334.1,
                color: Color::Purple,
                base_species: Some(Id::from_known("goodra")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("klefki"),
            SpeciesData {
                name: "Klefki".to_owned(),
                num: 707,
                primary_type: Type::Steel,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 57,
                    atk: 80,
                    def: 91,
                    spa: 80,
                    spd: 87,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("prankster")),
                    hidden: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 3.0,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("phantump"),
            SpeciesData {
                name: "Phantump".to_owned(),
                num: 708,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 43,
                    atk: 70,
                    def: 48,
                    spa: 50,
                    spd: 60,
                    spe: 38,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("harvest")),
                },
                height_m: 0.4,
                weight_kg: 7.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("trevenant"),
            SpeciesData {
                name: "Trevenant".to_owned(),
                num: 709,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 85,
                    atk: 110,
                    def: 76,
                    spa: 65,
                    spd: 82,
                    spe: 56,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("naturalcure")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("harvest")),
                },
                height_m: 1.5,
                weight_kg: 71.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pumpkaboo"),
            SpeciesData {
                name: "Pumpkaboo".to_owned(),
                num: 710,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 49,
                    atk: 66,
                    def: 70,
                    spa: 44,
                    spd: 55,
                    spe: 51,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.4,
                weight_kg: 5.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pumpkaboosmall"),
            SpeciesData {
                name: "Pumpkaboo-Small".to_owned(),
                num: 710,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 44,
                    atk: 66,
                    def: 70,
                    spa: 44,
                    spd: 55,
                    spe: 56,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.3,
                weight_kg: 3.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("pumpkaboo")),
                forme: Some("Small".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pumpkaboolarge"),
            SpeciesData {
                name: "Pumpkaboo-Large".to_owned(),
                num: 710,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 54,
                    atk: 66,
                    def: 70,
                    spa: 44,
                    spd: 55,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.5,
                weight_kg: 7.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("pumpkaboo")),
                forme: Some("Large".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("pumpkaboosuper"),
            SpeciesData {
                name: "Pumpkaboo-Super".to_owned(),
                num: 710,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 59,
                    atk: 66,
                    def: 70,
                    spa: 44,
                    spd: 55,
                    spe: 41,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.8,
                weight_kg: 15.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("pumpkaboo")),
                forme: Some("Super".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gourgeist"),
            SpeciesData {
                name: "Gourgeist".to_owned(),
                num: 711,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 65,
                    atk: 90,
                    def: 122,
                    spa: 58,
                    spd: 75,
                    spe: 84,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.9,
                weight_kg: 12.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gourgeistsmall"),
            SpeciesData {
                name: "Gourgeist-Small".to_owned(),
                num: 711,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 55,
                    atk: 85,
                    def: 122,
                    spa: 58,
                    spd: 75,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 0.7,
                weight_kg: 9.5,
                color: Color::Brown,
                base_species: Some(Id::from_known("gourgeist")),
                forme: Some("Small".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gourgeistlarge"),
            SpeciesData {
                name: "Gourgeist-Large".to_owned(),
                num: 711,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 75,
                    atk: 95,
                    def: 122,
                    spa: 58,
                    spd: 75,
                    spe: 69,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 1.1,
                weight_kg: 14.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("gourgeist")),
                forme: Some("Large".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("gourgeistsuper"),
            SpeciesData {
                name: "Gourgeist-Super".to_owned(),
                num: 711,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Grass),
                base_stats: StatTable {
                    hp: 85,
                    atk: 100,
                    def: 122,
                    spa: 58,
                    spd: 75,
                    spe: 54,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("pickup")),
                    secondary: Some(Id::from_known("frisk")),
                    hidden: Some(Id::from_known("insomnia")),
                },
                height_m: 1.7,
                weight_kg: 39.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("gourgeist")),
                forme: Some("Super".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("bergmite"),
            SpeciesData {
                name: "Bergmite".to_owned(),
                num: 712,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 55,
                    atk: 69,
                    def: 85,
                    spa: 32,
                    spd: 35,
                    spe: 28,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("sturdy")),
                },
                height_m: 1.0,
                weight_kg: 99.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("avalugg"),
            SpeciesData {
                name: "Avalugg".to_owned(),
                num: 713,
                primary_type: Type::Ice,
                base_stats: StatTable {
                    hp: 95,
                    atk: 117,
                    def: 184,
                    spa: 44,
                    spd: 46,
                    spe: 28,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("sturdy")),
                },
                height_m: 2.0,
                weight_kg: 505.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("avalugghisui"),
            SpeciesData {
                name: "Avalugg-Hisui".to_owned(),
                num: 713,
                primary_type: Type::Ice,
                secondary_type: Some(Type::Rock),
                base_stats: StatTable {
                    hp: 95,
                    atk: 127,
                    def: 184,
                    spa: 34,
                    spd: 36,
                    spe: 38,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("strongjaw")),
                    secondary: Some(Id::from_known("icebody")),
                    hidden: Some(Id::from_known("sturdy")),
                },
                height_m: 1.4,
                weight_kg: 262.4,
                color: Color::Blue,
                base_species: Some(Id::from_known("avalugg")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("noibat"),
            SpeciesData {
                name: "Noibat".to_owned(),
                num: 714,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 40,
                    atk: 30,
                    def: 35,
                    spa: 45,
                    spd: 40,
                    spe: 55,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 0.5,
                weight_kg: 8.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("noivern"),
            SpeciesData {
                name: "Noivern".to_owned(),
                num: 715,
                primary_type: Type::Flying,
                secondary_type: Some(Type::Dragon),
                base_stats: StatTable {
                    hp: 85,
                    atk: 70,
                    def: 80,
                    spa: 97,
                    spd: 80,
                    spe: 123,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("frisk")),
                    secondary: Some(Id::from_known("infiltrator")),
                    hidden: Some(Id::from_known("telepathy")),
                },
                height_m: 1.5,
                weight_kg: 85.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("xerneas"),
            SpeciesData {
                name: "Xerneas".to_owned(),
                num: 716,
                primary_type: Type::Fairy,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 126,
                    atk: 131,
                    def: 95,
                    spa: 131,
                    spd: 98,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fairyaura")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 215.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("xerneasneutral"),
            SpeciesData {
                name: "Xerneas-Neutral".to_owned(),
                num: 716,
                primary_type: Type::Fairy,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 126,
                    atk: 131,
                    def: 95,
                    spa: 131,
                    spd: 98,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fairyaura")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 215.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("xerneas")),
                forme: Some("Neutral".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("xerneasactive"),
            SpeciesData {
                name: "Xerneas-Active".to_owned(),
                num: 716,
                primary_type: Type::Fairy,
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 126,
                    atk: 131,
                    def: 95,
                    spa: 131,
                    spd: 98,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("fairyaura")),
                    ..Default::default()
                },
                height_m: 3.0,
                weight_kg: 215.0,
                color: Color::Blue,
                base_species: Some(Id::from_known("xerneas")),
                forme: Some("Active".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("yveltal"),
            SpeciesData {
                name: "Yveltal".to_owned(),
                num: 717,
                primary_type: Type::Dark,
                secondary_type: Some(Type::Flying),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 126,
                    atk: 131,
                    def: 95,
                    spa: 131,
                    spd: 98,
                    spe: 99,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("darkaura")),
                    ..Default::default()
                },
                height_m: 5.8,
                weight_kg: 203.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zygarde"),
            SpeciesData {
                name: "Zygarde".to_owned(),
                num: 718,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 108,
                    atk: 100,
                    def: 121,
                    spa: 81,
                    spd: 95,
                    spe: 95,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aurabreak")),
                    ..Default::default()
                },
                height_m: 5.0,
                weight_kg: 305.0,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("zygarde10"),
            SpeciesData {
                name: "Zygarde-10%".to_owned(),
                num: 718,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 54,
                    atk: 100,
                    def: 71,
                    spa: 61,
                    spd: 85,
                    spe: 115,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aurabreak")),
                    ..Default::default()
                },
                height_m: 1.2,
                weight_kg: 33.5,
                color: Color::Black,
                base_species: Some(Id::from_known("zygarde")),
                forme: Some("10%".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zygardecomplete"),
            SpeciesData {
                name: "Zygarde-Complete".to_owned(),
                num: 718,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 216,
                    atk: 100,
                    def: 121,
                    spa: 91,
                    spd: 95,
                    spe: 85,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("powerconstruct")),
                    ..Default::default()
                },
                height_m: 4.5,
                weight_kg: 610.0,
                color: Color::Black,
                base_species: Some(Id::from_known("zygarde")),
                forme: Some("Complete".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("zygardemega"),
            SpeciesData {
                name: "Zygarde-Mega".to_owned(),
                num: 718,
                primary_type: Type::Dragon,
                secondary_type: Some(Type::Ground),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 216,
                    atk: 70,
                    def: 91,
                    spa: 216,
                    spd: 85,
                    spe: 100,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("aurabreak")),
                    ..Default::default()
                },
                height_m: 7.7,
                weight_kg: 610.0,
                color: Color::Green,
                base_species: Some(Id::from_known("zygarde")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("diancie"),
            SpeciesData {
                name: "Diancie".to_owned(),
                num: 719,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 100,
                    def: 150,
                    spa: 100,
                    spd: 150,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("clearbody")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 8.8,
                color: Color::Pink,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dianciemega"),
            SpeciesData {
                name: "Diancie-Mega".to_owned(),
                num: 719,
                primary_type: Type::Rock,
                secondary_type: Some(Type::Fairy),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 50,
                    atk: 160,
                    def: 110,
                    spa: 160,
                    spd: 110,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magicbounce")),
                    ..Default::default()
                },
                height_m: 1.1,
                weight_kg: 27.8,
                color: Color::Pink,
                base_species: Some(Id::from_known("diancie")),
                forme: Some("Mega".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("hoopa"),
            SpeciesData {
                name: "Hoopa".to_owned(),
                num: 720,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Ghost),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 110,
                    def: 60,
                    spa: 150,
                    spd: 130,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("hoopaunbound"),
            SpeciesData {
                name: "Hoopa-Unbound".to_owned(),
                num: 720,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Dark),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 160,
                    def: 60,
                    spa: 170,
                    spd: 130,
                    spe: 80,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("magician")),
                    ..Default::default()
                },
                height_m: 6.5,
                weight_kg: 490.0,
                color: Color::Purple,
                base_species: Some(Id::from_known("hoopa")),
                forme: Some("Unbound".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("volcanion"),
            SpeciesData {
                name: "Volcanion".to_owned(),
                num: 721,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Water),
                gender: Some(Gender::Unknown),
                base_stats: StatTable {
                    hp: 80,
                    atk: 110,
                    def: 120,
                    spa: 130,
                    spd: 90,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("waterabsorb")),
                    ..Default::default()
                },
                height_m: 1.7,
                weight_kg: 195.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rowlet"),
            SpeciesData {
                name: "Rowlet".to_owned(),
                num: 722,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 68,
                    atk: 55,
                    def: 55,
                    spa: 50,
                    spd: 50,
                    spe: 42,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("longreach")),
                    ..Default::default()
                },
                height_m: 0.3,
                weight_kg: 1.5,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("dartrix"),
            SpeciesData {
                name: "Dartrix".to_owned(),
                num: 723,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 78,
                    atk: 75,
                    def: 75,
                    spa: 70,
                    spd: 70,
                    spe: 52,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("longreach")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 16.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("decidueye"),
            SpeciesData {
                name: "Decidueye".to_owned(),
                num: 724,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Ghost),
                base_stats: StatTable {
                    hp: 78,
                    atk: 107,
                    def: 75,
                    spa: 100,
                    spd: 100,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("longreach")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 36.6,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("decidueyehisui"),
            SpeciesData {
                name: "Decidueye-Hisui".to_owned(),
                num: 724,
                primary_type: Type::Grass,
                secondary_type: Some(Type::Fighting),
                base_stats: StatTable {
                    hp: 88,
                    atk: 112,
                    def: 80,
                    spa: 95,
                    spd: 95,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("overgrow")),
                    hidden: Some(Id::from_known("scrappy")),
                    ..Default::default()
                },
                height_m: 1.6,
                weight_kg: 37.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("decidueye")),
                forme: Some("Hisui".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("litten"),
            SpeciesData {
                name: "Litten".to_owned(),
                num: 725,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 45,
                    atk: 65,
                    def: 40,
                    spa: 60,
                    spd: 40,
                    spe: 70,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("intimidate")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.3,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("torracat"),
            SpeciesData {
                name: "Torracat".to_owned(),
                num: 726,
                primary_type: Type::Fire,
                base_stats: StatTable {
                    hp: 65,
                    atk: 85,
                    def: 50,
                    spa: 80,
                    spd: 50,
                    spe: 90,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("intimidate")),
                    ..Default::default()
                },
                height_m: 0.7,
                weight_kg: 25.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("incineroar"),
            SpeciesData {
                name: "Incineroar".to_owned(),
                num: 727,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Dark),
                base_stats: StatTable {
                    hp: 95,
                    atk: 115,
                    def: 90,
                    spa: 80,
                    spd: 90,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("blaze")),
                    hidden: Some(Id::from_known("intimidate")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 83.0,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("popplio"),
            SpeciesData {
                name: "Popplio".to_owned(),
                num: 728,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 50,
                    atk: 54,
                    def: 54,
                    spa: 66,
                    spd: 56,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("liquidvoice")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 7.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("brionne"),
            SpeciesData {
                name: "Brionne".to_owned(),
                num: 729,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 60,
                    atk: 69,
                    def: 69,
                    spa: 91,
                    spd: 81,
                    spe: 50,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("liquidvoice")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 17.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("primarina"),
            SpeciesData {
                name: "Primarina".to_owned(),
                num: 730,
                primary_type: Type::Water,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 80,
                    atk: 74,
                    def: 74,
                    spa: 126,
                    spd: 116,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("torrent")),
                    hidden: Some(Id::from_known("liquidvoice")),
                    ..Default::default()
                },
                height_m: 1.8,
                weight_kg: 44.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("pikipek"),
            SpeciesData {
                name: "Pikipek".to_owned(),
                num: 731,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 35,
                    atk: 75,
                    def: 30,
                    spa: 30,
                    spd: 30,
                    spe: 65,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("skilllink")),
                    hidden: Some(Id::from_known("pickup")),
                },
                height_m: 0.3,
                weight_kg: 1.2,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("trumbeak"),
            SpeciesData {
                name: "Trumbeak".to_owned(),
                num: 732,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 55,
                    atk: 85,
                    def: 50,
                    spa: 40,
                    spd: 50,
                    spe: 75,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("skilllink")),
                    hidden: Some(Id::from_known("pickup")),
                },
                height_m: 0.6,
                weight_kg: 14.8,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toucannon"),
            SpeciesData {
                name: "Toucannon".to_owned(),
                num: 733,
                primary_type: Type::Normal,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 80,
                    atk: 120,
                    def: 75,
                    spa: 75,
                    spd: 75,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("skilllink")),
                    hidden: Some(Id::from_known("sheerforce")),
                },
                height_m: 1.1,
                weight_kg: 26.0,
                color: Color::Black,
                ..Default::default()
            },
        ),
        (
            Id::from_known("yungoos"),
            SpeciesData {
                name: "Yungoos".to_owned(),
                num: 734,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 48,
                    atk: 70,
                    def: 30,
                    spa: 30,
                    spd: 30,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stakeout")),
                    secondary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("adaptability")),
                },
                height_m: 0.4,
                weight_kg: 6.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gumshoos"),
            SpeciesData {
                name: "Gumshoos".to_owned(),
                num: 735,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 88,
                    atk: 110,
                    def: 60,
                    spa: 55,
                    spd: 60,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("stakeout")),
                    secondary: Some(Id::from_known("strongjaw")),
                    hidden: Some(Id::from_known("adaptability")),
                },
                height_m: 0.7,
                weight_kg: 14.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("gumshoostotem"),
            SpeciesData {
                name: "Gumshoos-Totem".to_owned(),
                num: 735,
                primary_type: Type::Normal,
                base_stats: StatTable {
                    hp: 88,
                    atk: 110,
                    def: 60,
                    spa: 55,
                    spd: 60,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("adaptability")),
                    ..Default::default()
                },
                height_m: 1.4,
                weight_kg: 60.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("gumshoos")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("grubbin"),
            SpeciesData {
                name: "Grubbin".to_owned(),
                num: 736,
                primary_type: Type::Bug,
                base_stats: StatTable {
                    hp: 47,
                    atk: 62,
                    def: 45,
                    spa: 55,
                    spd: 45,
                    spe: 46,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("swarm")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 4.4,
                color: Color::Gray,
                ..Default::default()
            },
        ),
        (
            Id::from_known("charjabug"),
            SpeciesData {
                name: "Charjabug".to_owned(),
                num: 737,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 57,
                    atk: 82,
                    def: 95,
                    spa: 55,
                    spd: 75,
                    spe: 36,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("battery")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 10.5,
                color: Color::Green,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vikavolt"),
            SpeciesData {
                name: "Vikavolt".to_owned(),
                num: 738,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 77,
                    atk: 70,
                    def: 90,
                    spa: 145,
                    spd: 75,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 1.5,
                weight_kg: 45.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("vikavolttotem"),
            SpeciesData {
                name: "Vikavolt-Totem".to_owned(),
                num: 738,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Electric),
                base_stats: StatTable {
                    hp: 77,
                    atk: 70,
                    def: 90,
                    spa: 145,
                    spd: 75,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("levitate")),
                    ..Default::default()
                },
                height_m: 2.6,
                weight_kg: 147.5,
                color: Color::Blue,
                base_species: Some(Id::from_known("vikavolt")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("crabrawler"),
            SpeciesData {
                name: "Crabrawler".to_owned(),
                num: 739,
                primary_type: Type::Fighting,
                base_stats: StatTable {
                    hp: 47,
                    atk: 82,
                    def: 57,
                    spa: 42,
                    spd: 47,
                    spe: 63,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("ironfist")),
                    hidden: Some(Id::from_known("angerpoint")),
                },
                height_m: 0.6,
                weight_kg: 7.0,
                color: Color::Purple,
                ..Default::default()
            },
        ),
        (
            Id::from_known("crabominable"),
            SpeciesData {
                name: "Crabominable".to_owned(),
                num: 740,
                primary_type: Type::Fighting,
                secondary_type: Some(Type::Ice),
                base_stats: StatTable {
                    hp: 97,
                    atk: 132,
                    def: 77,
                    spa: 62,
                    spd: 67,
                    spe: 43,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("hypercutter")),
                    secondary: Some(Id::from_known("ironfist")),
                    hidden: Some(Id::from_known("angerpoint")),
                },
                height_m: 1.7,
                weight_kg: 180.0,
                color: Color::White,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oricorio"),
            SpeciesData {
                name: "Oricorio".to_owned(),
                num: 741,
                primary_type: Type::Fire,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 70,
                    def: 70,
                    spa: 98,
                    spd: 70,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dancer")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 3.4,
                color: Color::Red,
                ..Default::default()
            },
        ),
        (
            Id::from_known("oricoriopompom"),
            SpeciesData {
                name: "Oricorio-Pom-Pom".to_owned(),
                num: 741,
                primary_type: Type::Electric,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 70,
                    def: 70,
                    spa: 98,
                    spd: 70,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dancer")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 3.4,
                color: Color::Yellow,
                base_species: Some(Id::from_known("oricorio")),
                forme: Some("Pom-Pom".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("oricoriopau"),
            SpeciesData {
                name: "Oricorio-Pa'u".to_owned(),
                num: 741,
                primary_type: Type::Psychic,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 70,
                    def: 70,
                    spa: 98,
                    spd: 70,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dancer")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 3.4,
                color: Color::Pink,
                base_species: Some(Id::from_known("oricorio")),
                forme: Some("Pa'u".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("oricoriosensu"),
            SpeciesData {
                name: "Oricorio-Sensu".to_owned(),
                num: 741,
                primary_type: Type::Ghost,
                secondary_type: Some(Type::Flying),
                base_stats: StatTable {
                    hp: 75,
                    atk: 70,
                    def: 70,
                    spa: 98,
                    spd: 70,
                    spe: 93,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("dancer")),
                    ..Default::default()
                },
                height_m: 0.6,
                weight_kg: 3.4,
                color: Color::Purple,
                base_species: Some(Id::from_known("oricorio")),
                forme: Some("Sensu".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("cutiefly"),
            SpeciesData {
                name: "Cutiefly".to_owned(),
                num: 742,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 40,
                    atk: 45,
                    def: 40,
                    spa: 55,
                    spd: 40,
                    spe: 84,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("honeygather")),
                    secondary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("sweetveil")),
                },
                height_m: 0.1,
                weight_kg: 0.2,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ribombee"),
            SpeciesData {
                name: "Ribombee".to_owned(),
                num: 743,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 60,
                    spa: 95,
                    spd: 70,
                    spe: 124,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("honeygather")),
                    secondary: Some(Id::from_known("shielddust")),
                    hidden: Some(Id::from_known("sweetveil")),
                },
                height_m: 0.2,
                weight_kg: 0.5,
                color: Color::Yellow,
                ..Default::default()
            },
        ),
        (
            Id::from_known("ribombeetotem"),
            SpeciesData {
                name: "Ribombee-Totem".to_owned(),
                num: 743,
                primary_type: Type::Bug,
                secondary_type: Some(Type::Fairy),
                base_stats: StatTable {
                    hp: 60,
                    atk: 55,
                    def: 60,
                    spa: 95,
                    spd: 70,
                    spe: 124,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("sweetveil")),
                    ..Default::default()
                },
                height_m: 0.4,
                weight_kg: 2.0,
                color: Color::Yellow,
                base_species: Some(Id::from_known("ribombee")),
                forme: Some("Totem".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("rockruff"),
            SpeciesData {
                name: "Rockruff".to_owned(),
                num: 744,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 45,
                    atk: 65,
                    def: 40,
                    spa: 30,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("vitalspirit")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 0.5,
                weight_kg: 9.2,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("rockruffdusk"),
            SpeciesData {
                name: "Rockruff-Dusk".to_owned(),
                num: 744,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 45,
                    atk: 65,
                    def: 40,
                    spa: 30,
                    spd: 40,
                    spe: 60,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    ..Default::default()
                },
                height_m: 0.5,
                weight_kg: 9.2,
                color: Color::Brown,
                base_species: Some(Id::from_known("rockruff")),
                forme: Some("Dusk".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lycanroc"),
            SpeciesData {
                name: "Lycanroc".to_owned(),
                num: 745,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 75,
                    atk: 115,
                    def: 65,
                    spa: 55,
                    spd: 65,
                    spe: 112,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("sandrush")),
                    hidden: Some(Id::from_known("steadfast")),
                },
                height_m: 0.8,
                weight_kg: 25.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("lycanrocmidnight"),
            SpeciesData {
                name: "Lycanroc-Midnight".to_owned(),
                num: 745,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 85,
                    atk: 115,
                    def: 75,
                    spa: 55,
                    spd: 75,
                    spe: 82,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("keeneye")),
                    secondary: Some(Id::from_known("vitalspirit")),
                    hidden: Some(Id::from_known("noguard")),
                },
                height_m: 1.1,
                weight_kg: 25.0,
                color: Color::Red,
                base_species: Some(Id::from_known("lycanroc")),
                forme: Some("Midnight".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("lycanrocdusk"),
            SpeciesData {
                name: "Lycanroc-Dusk".to_owned(),
                num: 745,
                primary_type: Type::Rock,
                base_stats: StatTable {
                    hp: 75,
                    atk: 117,
                    def: 65,
                    spa: 55,
                    spd: 65,
                    spe: 110,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("toughclaws")),
                    ..Default::default()
                },
                height_m: 0.8,
                weight_kg: 25.0,
                color: Color::Brown,
                base_species: Some(Id::from_known("lycanroc")),
                forme: Some("Dusk".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("wishiwashi"),
            SpeciesData {
                name: "Wishiwashi".to_owned(),
                num: 746,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 45,
                    atk: 20,
                    def: 20,
                    spa: 25,
                    spd: 25,
                    spe: 40,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("schooling")),
                    ..Default::default()
                },
                height_m: 0.2,
                weight_kg: 0.3,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("wishiwashischool"),
            SpeciesData {
                name: "Wishiwashi-School".to_owned(),
                num: 746,
                primary_type: Type::Water,
                base_stats: StatTable {
                    hp: 45,
                    atk: 140,
                    def: 130,
                    spa: 140,
                    spd: 135,
                    spe: 30,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("schooling")),
                    ..Default::default()
                },
                height_m: 8.2,
                weight_kg: 78.6,
                color: Color::Blue,
                base_species: Some(Id::from_known("wishiwashi")),
                forme: Some("School".to_owned()),
                ..Default::default()
            },
        ),
        (
            Id::from_known("mareanie"),
            SpeciesData {
                name: "Mareanie".to_owned(),
                num: 747,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 50,
                    atk: 53,
                    def: 62,
                    spa: 43,
                    spd: 52,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("merciless")),
                    secondary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 0.4,
                weight_kg: 8.0,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("toxapex"),
            SpeciesData {
                name: "Toxapex".to_owned(),
                num: 748,
                primary_type: Type::Poison,
                secondary_type: Some(Type::Water),
                base_stats: StatTable {
                    hp: 50,
                    atk: 63,
                    def: 152,
                    spa: 53,
                    spd: 142,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("merciless")),
                    secondary: Some(Id::from_known("limber")),
                    hidden: Some(Id::from_known("regenerator")),
                },
                height_m: 0.7,
                weight_kg: 14.5,
                color: Color::Blue,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mudbray"),
            SpeciesData {
                name: "Mudbray".to_owned(),
                num: 749,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 70,
                    atk: 100,
                    def: 70,
                    spa: 45,
                    spd: 55,
                    spe: 45,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("stamina")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 1.0,
                weight_kg: 110.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
        (
            Id::from_known("mudsdale"),
            SpeciesData {
                name: "Mudsdale".to_owned(),
                num: 750,
                primary_type: Type::Ground,
                base_stats: StatTable {
                    hp: 100,
                    atk: 125,
                    def: 100,
                    spa: 55,
                    spd: 85,
                    spe: 35,
                },
                abilities: AbilitySlots {
                    primary: Some(Id::from_known("owntempo")),
                    secondary: Some(Id::from_known("stamina")),
                    hidden: Some(Id::from_known("innerfocus")),
                },
                height_m: 2.5,
                weight_kg: 920.0,
                color: Color::Brown,
                ..Default::default()
            },
        ),
    ])
}
