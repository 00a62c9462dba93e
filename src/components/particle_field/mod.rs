//! Ambient particle field.
//!
//! A few dozen slow particles drift across a canvas, bouncing off its edges,
//! with faint lines joining any two that come close:
//! - Particles are scattered once per mount and never added or removed
//! - Each frame moves them in place and reflects them at the surface edges
//! - Lines fade linearly with distance and vanish at the link distance
//! - The canvas follows its container on window resize without
//!   disturbing the particles
//!
//! # Example
//!
//! ```ignore
//! use particle_landing::components::particle_field::ParticleFieldCanvas;
//!
//! view! {
//!     <div class="field-frame">
//!         <ParticleFieldCanvas />
//!     </div>
//! }
//! ```

mod component;
pub mod particles;
pub mod render;
pub mod scheduler;
pub mod sizing;
pub mod style;

pub use component::ParticleFieldCanvas;
pub use particles::{Bounds, Particle, ParticleField};
pub use style::FieldConfig;
