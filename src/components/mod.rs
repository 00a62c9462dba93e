//! Page components.

pub mod particle_field;
pub mod profile;
