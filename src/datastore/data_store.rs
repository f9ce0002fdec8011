use anyhow::Result;

use crate::{
    Id,
    SpeciesData,
};

/// Collection of species data tables.
///
/// This trait can be implemented for different data sources, such as an external database or
/// tables compiled directly into a crate.
///
/// This collection is used for "raw lookup" of species by ID. Individual dexes may implement
/// specialized lookup rules over this table, such as resolving a forme entry to its base species.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, applying the given filter on the underlying data.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>>;

    /// Gets a species by ID.
    ///
    /// An unknown ID is not an error: it produces `Ok(None)`.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}

/// An extension of [`DataStore`] for looking up species by name.
pub trait DataStoreByName: DataStore {
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;
}
