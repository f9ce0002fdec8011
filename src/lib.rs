mod common;
mod datastore;
mod dex;
mod mons;

#[cfg(test)]
pub mod test_util;

pub use common::*;
pub use datastore::*;
pub use dex::*;
pub use mons::*;
