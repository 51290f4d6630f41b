mod generate;
mod localize;
pub mod types;

pub use generate::{generate_time_slots, SLOTS_PER_DAY, SLOT_MINUTES};
pub use localize::localize_time_slots;
