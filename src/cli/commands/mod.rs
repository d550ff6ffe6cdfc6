//! Command implementations

pub mod import;
pub mod inspect;
pub mod parts;
