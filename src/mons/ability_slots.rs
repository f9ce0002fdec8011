use serde::{
    Deserialize,
    Serialize,
};

use crate::Id;

/// The ability slots of a species.
///
/// A species has up to three named slots: two standard abilities and one hidden ability. Any slot
/// may be unpopulated.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlots {
    /// The first standard ability slot.
    #[serde(default)]
    pub primary: Option<Id>,
    /// The second standard ability slot.
    #[serde(default)]
    pub secondary: Option<Id>,
    /// The hidden ability.
    #[serde(default)]
    pub hidden: Option<Id>,
}

impl AbilitySlots {
    /// Creates an iterator over all populated slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        [&self.primary, &self.secondary, &self.hidden]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    /// Is the given ability in any slot?
    pub fn contains(&self, id: &Id) -> bool {
        self.iter().any(|ability| ability == id)
    }
}

#[cfg(test)]
mod ability_slots_test {
    use crate::{
        AbilitySlots,
        Id,
    };

    fn slots() -> AbilitySlots {
        AbilitySlots {
            primary: Some(Id::from("Overgrow")),
            hidden: Some(Id::from("Chlorophyll")),
            ..Default::default()
        }
    }

    #[test]
    fn iterates_over_populated_slots() {
        assert_eq!(
            slots().iter().cloned().collect::<Vec<_>>(),
            Vec::from([Id::from("overgrow"), Id::from("chlorophyll")]),
        );
    }

    #[test]
    fn contains_matches_any_slot() {
        assert!(slots().contains(&Id::from("chlorophyll")));
        assert!(!slots().contains(&Id::from("thickfat")));
    }
}
