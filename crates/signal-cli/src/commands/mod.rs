pub mod analyze;
pub mod inspect;
pub mod strength;
