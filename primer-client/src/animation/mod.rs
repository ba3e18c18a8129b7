// Primer animation engine
// Step-based concept animations and the shimmer indicator

pub mod concepts;
pub mod engine;
pub mod registry;
pub mod shimmer;

pub use engine::{AnimationEngine, AnimationFrame, FrameLine, StepCounter, Tone};
pub use registry::{animation_for, animation_for_key};
pub use shimmer::Shimmer;
