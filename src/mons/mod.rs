mod ability_slots;
mod color;
mod gender;
mod species_data;
mod species_flag;
mod stat;
mod r#type;

pub use ability_slots::AbilitySlots;
pub use color::Color;
pub use gender::Gender;
pub use species_data::SpeciesData;
pub use species_flag::SpeciesFlag;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::Type;
