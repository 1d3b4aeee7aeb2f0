pub mod domain;
pub mod error;
pub mod roster;
pub mod transform;
