//! Ambient particle field drawn behind the page.
//!
//! A fixed set of points drifts across a full-viewport canvas, bouncing off
//! the edges, with faint lines joining any two points closer than
//! [`FieldConfig::connection_distance`]:
//! - Population scales with viewport area up to [`FieldConfig::cap`]
//! - Motion is a plain per-frame velocity step with wall reflection
//! - Drawing and frame scheduling go through the [`Surface`] and
//!   [`FrameScheduler`] ports, so the loop runs without a browser in tests
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <ParticleBackground />
//!     <main class="content">"..."</main>
//! }
//! ```

mod browser;
mod component;
pub mod config;
pub mod frame_loop;
pub mod particles;
pub mod render;

pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use frame_loop::{FieldLoop, FrameHandle, FrameScheduler};
pub use particles::{Particle, ParticleField};
pub use render::{Surface, connection_alpha};
