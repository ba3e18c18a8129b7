// Core components: input, training data, the model and the pipeline
use std::time::Duration;

use primer_utils::catalog::ConceptId;

use super::{insight, progress_bar};
use crate::animation::engine::{AnimationEngine, AnimationFrame, StepCounter, Tone};
use crate::animation::shimmer::Shimmer;

/// The kinds of data an AI system can take in
#[derive(Debug, Clone)]
pub struct InputAnimation {
    counter: StepCounter,
}

impl InputAnimation {
    pub const MAX_STEP: u32 = 4;

    const INPUTS: [(&'static str, &'static str, &'static str); 3] = [
        ("📷", "Images", "Photos, Drawings, X-rays"),
        ("📝", "Text", "Questions, Documents, Emails"),
        ("🔢", "Numbers", "Temperatures, Prices, Measurements"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for InputAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for InputAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::Input
    }

    fn step(&self) -> u32 {
        self.counter.get()
    }

    fn max_step(&self) -> u32 {
        self.counter.max()
    }

    fn advance(&mut self) -> bool {
        self.counter.advance()
    }

    fn reset(&mut self) {
        self.counter.reset();
    }

    fn render(&self, _beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("What can we feed to AI? 📥");

        for (i, (icon, kind, examples)) in Self::INPUTS.iter().enumerate() {
            let current = step == i as u32 + 1;
            let marker = if current { "▸" } else { " " };
            frame.lit(format!("{marker} {icon} {kind:<8} {examples}"), step > i as u32);
        }
        let sparkle = if step >= 2 { " ✨" } else { "" };
        frame.blank().line(format!("    ➡️  🤖 AI System{sparkle}"), Tone::Accent);

        if step < Self::MAX_STEP {
            frame.caption(
                "Input is the data we give to AI to process. It can be photos, text, numbers, or sounds!",
            );
        } else {
            insight(&mut frame, "🎯 Input is the first ingredient in every AI system!");
        }
        frame
    }
}

/// Labeled examples feeding a model, with a training progress bar
#[derive(Debug, Clone)]
pub struct TrainingDataAnimation {
    counter: StepCounter,
    /// Training progress in percent
    trained: u32,
}

impl TrainingDataAnimation {
    pub const MAX_STEP: u32 = 5;
    const DETAIL_INTERVAL: Duration = Duration::from_millis(100);
    const SHIMMER: Shimmer = Shimmer::new("Learning...");

    /// Example image, label, and the progress after which it counts as learned
    const EXAMPLES: [(&'static str, &'static str, u32); 6] = [
        ("🐱", "Cat", 10),
        ("🐕", "Dog", 25),
        ("🐈", "Cat", 40),
        ("🐶", "Dog", 55),
        ("😺", "Cat", 70),
        ("🦮", "Dog", 85),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
            trained: 0,
        }
    }

    pub fn trained(&self) -> u32 {
        self.trained
    }

    fn training(&self) -> bool {
        self.step() >= 2 && self.trained < 100
    }
}

impl Default for TrainingDataAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for TrainingDataAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::TrainingData
    }

    fn step(&self) -> u32 {
        self.counter.get()
    }

    fn max_step(&self) -> u32 {
        self.counter.max()
    }

    fn advance(&mut self) -> bool {
        self.counter.advance()
    }

    fn detail_interval(&self) -> Option<Duration> {
        self.training().then_some(Self::DETAIL_INTERVAL)
    }

    fn tick_detail(&mut self) -> bool {
        if !self.training() {
            return false;
        }
        self.trained = (self.trained + 5).min(100);
        true
    }

    fn reset(&mut self) {
        self.counter.reset();
        self.trained = 0;
    }

    fn render(&self, beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("How AI Learns From Examples 📚");

        let examples: Vec<String> = Self::EXAMPLES
            .iter()
            .map(|(image, label, threshold)| {
                let mark = if self.trained > *threshold { "✓" } else { " " };
                format!("{image} {label}{mark}")
            })
            .collect();
        frame.plain(examples[..3].join("  ")).plain(examples[3..].join("  "));

        if step >= 2 {
            frame.blank().line(format!("  ➡️  🧠 {}", Self::SHIMMER.render(beat)), Tone::Accent);
            frame.plain(format!(
                "{}  {}% trained",
                progress_bar(self.trained, 20),
                self.trained
            ));
        }
        if step >= 3 {
            frame.line("💭 \"Whiskers!\"   💭 \"Fur patterns!\"", Tone::Muted);
        }

        match step {
            0 => {}
            1 => {
                frame.caption("Training data is a collection of labeled examples");
            }
            2 => {
                frame.caption("The AI looks at thousands of examples to find patterns");
            }
            3 => {
                frame.caption("It learns features like whiskers, fur, and ear shapes!");
            }
            _ => insight(
                &mut frame,
                "🎯 Good training data = Smart AI! The more examples, the better it learns!",
            ),
        }
        frame
    }
}

/// Three kinds of model around one brain
#[derive(Debug, Clone)]
pub struct AiModelAnimation {
    counter: StepCounter,
}

impl AiModelAnimation {
    pub const MAX_STEP: u32 = 4;

    const MODELS: [(&'static str, &'static str, &'static str); 3] = [
        ("👁️", "Vision Model", "Sees images"),
        ("💬", "Language Model", "Reads text"),
        ("📊", "Prediction Model", "Finds patterns"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for AiModelAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for AiModelAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::AiModel
    }

    fn step(&self) -> u32 {
        self.counter.get()
    }

    fn max_step(&self) -> u32 {
        self.counter.max()
    }

    fn advance(&mut self) -> bool {
        self.counter.advance()
    }

    fn reset(&mut self) {
        self.counter.reset();
    }

    fn render(&self, _beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("The AI Model: The Brain of the System 🧠");

        frame.lit("           🧠", step >= 1).blank();
        for (i, (icon, name, task)) in Self::MODELS.iter().enumerate() {
            let link = if step > i as u32 { "│" } else { " " };
            frame.lit(format!("{link} {icon} {name:<17} {task}"), step > i as u32);
        }

        match step {
            0 => {}
            1 => {
                frame.caption("Vision models are trained to understand images");
            }
            2 => {
                frame.caption("Language models are trained to understand and write text");
            }
            3 => {
                frame.caption("Prediction models find patterns in numbers");
            }
            _ => insight(
                &mut frame,
                "🎯 Different AI models are designed for different tasks!",
            ),
        }
        frame
    }
}

/// Input, model, training data and output assembled one at a time
#[derive(Debug, Clone)]
pub struct PipelineAnimation {
    counter: StepCounter,
}

impl PipelineAnimation {
    pub const MAX_STEP: u32 = 5;

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for PipelineAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for PipelineAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::AiPipeline
    }

    fn step(&self) -> u32 {
        self.counter.get()
    }

    fn max_step(&self) -> u32 {
        self.counter.max()
    }

    fn advance(&mut self) -> bool {
        self.counter.advance()
    }

    fn reset(&mut self) {
        self.counter.reset();
    }

    fn render(&self, _beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("The AI Pipeline: 3 Key Ingredients 🔄");

        let input = if step >= 1 { "① 📥 Input (A cat photo 🐱)" } else { "📥 Input" };
        let model = if step >= 2 { "② 🤖 AI Model (Processes data)" } else { "🤖 AI Model" };
        let output = if step >= 4 { "✅ Output \"It's a cat!\"" } else { "Output" };

        frame.lit(input, step >= 1).lit("   ➡️", step >= 2).lit(model, step >= 2);
        if step >= 3 {
            frame.line("   ⬆ ③ 📚 Training Data", Tone::Accent);
        }
        frame.lit("   ➡️", step >= 4);
        frame.line(output, if step >= 4 { Tone::Success } else { Tone::Muted });

        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Every AI system has this structure: Input → Model (trained on data) → Output!",
            );
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_details(anim: &mut dyn AnimationEngine) -> usize {
        let mut ticks = 0;
        while anim.detail_interval().is_some() {
            assert!(anim.tick_detail());
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_input_highlights_one_type_per_step() {
        let mut anim = InputAnimation::new();
        anim.advance();
        let frame = anim.render(0);
        assert!(frame.lines[0].text.starts_with("▸ 📷"));
        assert_eq!(frame.lines[0].tone, Tone::Accent);
        assert_eq!(frame.lines[1].tone, Tone::Muted);

        for _ in 0..3 {
            anim.advance();
        }
        assert!(anim.render(0).contains("🎯 Input is the first ingredient"));
    }

    #[test]
    fn test_training_data_reaches_summary_after_five_ticks() {
        let mut anim = TrainingDataAnimation::new();
        for _ in 0..5 {
            assert!(anim.advance());
        }
        assert_eq!(anim.step(), 5);
        assert!(anim.is_complete());
        assert!(anim.render(0).contains("🎯 Good training data = Smart AI!"));

        // a sixth tick changes nothing
        let before = anim.render(0).to_text();
        assert!(!anim.advance());
        assert_eq!(anim.step(), 5);
        assert_eq!(anim.render(0).to_text(), before);
    }

    #[test]
    fn test_training_progress_runs_from_step_two() {
        let mut anim = TrainingDataAnimation::new();
        anim.advance();
        assert_eq!(anim.detail_interval(), None);
        assert!(!anim.tick_detail());

        anim.advance();
        assert_eq!(anim.detail_interval(), Some(Duration::from_millis(100)));
        assert_eq!(run_details(&mut anim), 20);
        assert_eq!(anim.trained(), 100);
        assert_eq!(anim.detail_interval(), None);

        let frame = anim.render(0);
        assert!(frame.contains("100% trained"));
        assert!(frame.contains("🦮 Dog✓"));
    }

    #[test]
    fn test_training_examples_marked_past_threshold() {
        let mut anim = TrainingDataAnimation::new();
        anim.advance();
        anim.advance();
        // 15%: only the first example is past its threshold
        for _ in 0..3 {
            anim.tick_detail();
        }
        let frame = anim.render(0);
        assert!(frame.contains("🐱 Cat✓"));
        assert!(frame.contains("🐕 Dog "));
    }

    #[test]
    fn test_training_reset_clears_progress() {
        let mut anim = TrainingDataAnimation::new();
        anim.advance();
        anim.advance();
        anim.tick_detail();
        anim.reset();
        assert_eq!(anim.step(), 0);
        assert_eq!(anim.trained(), 0);
    }

    #[test]
    fn test_ai_model_captions() {
        let mut anim = AiModelAnimation::new();
        anim.advance();
        anim.advance();
        assert_eq!(
            anim.render(0).caption.as_deref(),
            Some("Language models are trained to understand and write text")
        );
        anim.advance();
        anim.advance();
        assert!(anim.render(0).contains("🎯 Different AI models"));
        assert!(!anim.advance());
    }

    #[test]
    fn test_pipeline_assembles_in_order() {
        let mut anim = PipelineAnimation::new();
        anim.advance();
        let frame = anim.render(0);
        assert!(frame.contains("(A cat photo 🐱)"));
        assert!(!frame.contains("Training Data"));

        anim.advance();
        anim.advance();
        assert!(anim.render(0).contains("Training Data"));

        anim.advance();
        assert!(anim.render(0).contains("\"It's a cat!\""));
        assert!(!anim.render(0).contains("🎯"));

        anim.advance();
        assert!(anim.render(0).contains("🎯 Every AI system has this structure"));
    }
}
