use anyhow::Result;

use crate::{
    DataStore,
    DataStoreByName,
    Id,
    SpeciesData,
    species_table,
};

/// An implementation of [`DataStore`] that reads from the species tables compiled into this
/// crate.
///
/// The underlying table is built once and never mutated, so this store is trivially cloneable and
/// safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticDataStore;

impl StaticDataStore {
    /// Creates a new instance of [`StaticDataStore`].
    pub fn new() -> Self {
        Self
    }
}

impl DataStore for StaticDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>> {
        let mut species_ids = Vec::new();
        for (id, species) in species_table() {
            if filter(species) {
                species_ids.push(id.clone());
            }
        }
        Ok(species_ids)
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(species_table().get(id).cloned())
    }
}

impl DataStoreByName for StaticDataStore {
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        self.get_species(&Id::from(name))
    }
}

#[cfg(test)]
mod static_store_test {
    use assert_matches::assert_matches;

    use crate::{
        DataStore,
        DataStoreByName,
        Id,
        StaticDataStore,
    };

    #[test]
    fn gets_species_by_id() {
        let store = StaticDataStore::new();
        assert_matches!(store.get_species(&Id::from("pikachu")), Ok(Some(species)) => {
            assert_eq!(species.name, "Pikachu");
            assert_eq!(species.num, 25);
        });
    }

    #[test]
    fn missing_species_is_not_an_error() {
        let store = StaticDataStore::new();
        assert_matches!(store.get_species(&Id::from("missingno")), Ok(None));
    }

    #[test]
    fn gets_species_by_name() {
        let store = StaticDataStore::new();
        assert_matches!(store.get_species_by_name("Venusaur-Mega"), Ok(Some(species)) => {
            assert_eq!(species.forme, Some("Mega".to_owned()));
            assert_eq!(species.base_species, Some(Id::from("venusaur")));
        });
    }

    #[test]
    fn filters_all_species_ids() {
        let store = StaticDataStore::new();
        assert_matches!(store.all_species_ids(&|species| species.num == 1), Ok(ids) => {
            assert_eq!(ids, Vec::from([Id::from("bulbasaur")]));
        });
    }
}
