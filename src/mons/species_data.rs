use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AbilitySlots,
    Color,
    Gender,
    Id,
    SpeciesFlag,
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all Mons of a given species or forme. Data about a specific Mon
/// (such as its nature, level, or battle-specific conditions) does not belong here.
///
/// Alternate formes are full entries of their own: they share the national number of their base
/// species and point back to it through [`base_species`][`SpeciesData::base_species`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species plus any forme name (e.g., "Venusaur-Mega").
    ///
    /// The name should be unique across all species and formes.
    pub name: String,
    /// National dex number.
    ///
    /// Shared by all formes of the same base species, so it is not unique across entries.
    pub num: u16,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Fixed gender of the species, for single-gender and genderless species.
    ///
    /// Unset for species with an ordinary gender ratio.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Ability slots.
    pub abilities: AbilitySlots,
    /// Height in meters (m).
    pub height_m: f64,
    /// Weight in kilograms (kg).
    pub weight_kg: f64,
    /// The primary color of the species.
    pub color: Color,

    /// The base species this forme belongs to, if this entry is an alternate forme.
    #[serde(default)]
    pub base_species: Option<Id>,
    /// The forme name, if it exists.
    #[serde(default)]
    pub forme: Option<String>,
    /// The name of the default forme of this species, if its formes are named (e.g., Giratina's
    /// base forme is "Altered").
    #[serde(default)]
    pub base_forme: Option<String>,
    /// Pre-evolution, if it exists.
    #[serde(default)]
    pub prevo: Option<Id>,
    /// Evolutions.
    #[serde(default)]
    pub evos: Vec<Id>,
    /// The level at which this species evolves from its pre-evolution, if it evolves by level.
    #[serde(default)]
    pub evo_level: Option<u8>,

    /// Alternate formes of this species, by forme name.
    #[serde(default)]
    pub other_formes: Vec<String>,
    /// Cosmetic formes, which have no impact on species data.
    #[serde(default)]
    pub cosmetic_formes: Vec<String>,
    /// Canonical ordering of this species' formes.
    #[serde(default)]
    pub forme_order: Vec<String>,
    /// The forme this battle-only forme reverts to outside of battle, if this forme is only
    /// available in battles.
    #[serde(default)]
    pub battle_only: Option<String>,
    /// The forme this forme transforms from, for transformations that persist outside of battle.
    #[serde(default)]
    pub changes_from: Option<String>,

    /// Held item required for accessing this forme.
    #[serde(default)]
    pub required_item: Option<Id>,
    /// Ability required for accessing this forme.
    #[serde(default)]
    pub required_ability: Option<Id>,

    /// Tags.
    #[serde(default)]
    pub tags: Vec<SpeciesFlag>,
}

impl SpeciesData {
    /// The display name of the species, with the forme name in parentheses.
    pub fn display_name(&self) -> String {
        match &self.forme {
            Some(forme) => match self.name.strip_suffix(&format!("-{forme}")) {
                Some(base) => format!("{base} ({forme})"),
                None => self.name.clone(),
            },
            None => self.name.clone(),
        }
    }

    /// Utility method for returning the species' two types.
    pub fn types(&self) -> (Type, Option<Type>) {
        (self.primary_type, self.secondary_type)
    }

    /// The base stat total (BST) of the species.
    pub fn bst(&self) -> u32 {
        self.base_stats.sum()
    }

    /// Weight in integer hectograms (0.1 kg).
    pub fn weight_hg(&self) -> u32 {
        (self.weight_kg * 10.0) as u32
    }

    /// Is this entry an alternate forme of another species?
    pub fn is_forme(&self) -> bool {
        self.base_species.is_some()
    }

    /// Is this forme available only in battles?
    pub fn battle_only_forme(&self) -> bool {
        self.battle_only.is_some()
    }

    /// Is the species not fully evolved (has an evolution)?
    pub fn nfe(&self) -> bool {
        !self.evos.is_empty()
    }
}

#[cfg(test)]
mod species_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        AbilitySlots,
        Color,
        Id,
        SpeciesData,
        StatTable,
        Type,
    };

    fn venusaur_mega() -> SpeciesData {
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
                primary: Some(Id::from("thickfat")),
                ..Default::default()
            },
            height_m: 2.4,
            weight_kg: 155.5,
            color: Color::Green,
            base_species: Some(Id::from("venusaur")),
            forme: Some("Mega".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn formats_display_name_with_forme() {
        assert_eq!(venusaur_mega().display_name(), "Venusaur (Mega)");

        let mut plain = venusaur_mega();
        plain.name = "Venusaur".to_owned();
        plain.forme = None;
        assert_eq!(plain.display_name(), "Venusaur");
    }

    #[test]
    fn sums_base_stat_total() {
        assert_eq!(venusaur_mega().bst(), 625);
    }

    #[test]
    fn converts_weight_to_hectograms() {
        assert_eq!(venusaur_mega().weight_hg(), 1555);
    }

    #[test]
    fn forme_entries_reference_their_base_species() {
        let species = venusaur_mega();
        assert!(species.is_forme());
        assert!(!species.nfe());
    }

    #[test]
    fn deserializes_from_json() {
        let species = serde_json::from_str::<SpeciesData>(
            r#"{
                "name": "Bulbasaur",
                "num": 1,
                "primary_type": "Grass",
                "secondary_type": "Poison",
                "base_stats": { "hp": 45, "atk": 49, "def": 49, "spa": 65, "spd": 65, "spe": 45 },
                "abilities": { "primary": "overgrow", "hidden": "chlorophyll" },
                "height_m": 0.7,
                "weight_kg": 6.9,
                "color": "Green",
                "evos": ["ivysaur"]
            }"#,
        )
        .unwrap();
        assert_eq!(species.name, "Bulbasaur");
        assert_eq!(species.types(), (Type::Grass, Some(Type::Poison)));
        assert_eq!(species.bst(), 318);
        assert_eq!(species.evos, Vec::from([Id::from("ivysaur")]));
        assert_eq!(species.forme, None);
        assert!(species.nfe());
    }
}
