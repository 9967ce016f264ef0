//! Page views and the browser plumbing they share.

mod language_toggle;
pub mod lifecycle;
pub mod particle_field;
mod project_card;
mod project_detail;
pub mod theme;
mod typewriter;

pub use language_toggle::LanguageToggle;
pub use particle_field::ParticleBackground;
pub use project_card::{ProjectCard, TagSummary, Tilt};
pub use project_detail::ProjectDetail;
pub use theme::Theme;
pub use typewriter::{Typewriter, TypewriterTitle};
