// Primer concept animations
//
// One engine per catalog concept, grouped by catalog category. Every engine
// owns a StepCounter; a few also run a detail effect (typing, progress bars)
// on a faster timer while a step condition holds.

mod applications;
mod career;
mod components;
mod foundation;
mod models;

pub use applications::{AgenticAnimation, ChatbotsAnimation, GenerativeAnimation, SearchAnimation};
pub use career::EngineerAnimation;
pub use components::{
    AiModelAnimation, InputAnimation, PipelineAnimation, TrainingDataAnimation,
};
pub use foundation::{AiAnimation, AutomationAnimation, RuleBasedAnimation};
pub use models::{LanguageAnimation, PredictionAnimation, VisionAnimation};

use super::engine::{AnimationFrame, Tone};

/// Final summary panel shown on the last steps
pub(crate) fn insight(frame: &mut AnimationFrame, text: &str) {
    frame.blank();
    frame.line(text, Tone::Insight);
}

/// `width`-cell progress bar for a percentage
pub(crate) fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// First `count` characters of `text`
pub(crate) fn typed(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "[░░░░]");
        assert_eq!(progress_bar(50, 4), "[██░░]");
        assert_eq!(progress_bar(250, 4), "[████]");
    }

    #[test]
    fn test_typed_counts_chars() {
        assert_eq!(typed("Paris 🗼", 0), "");
        assert_eq!(typed("Paris 🗼", 5), "Paris");
        assert_eq!(typed("Paris 🗼", 7), "Paris 🗼");
        assert_eq!(typed("Paris 🗼", 99), "Paris 🗼");
    }
}
