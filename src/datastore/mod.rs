mod data_store;
mod static_store;

pub use data_store::{
    DataStore,
    DataStoreByName,
};
pub use static_store::StaticDataStore;
