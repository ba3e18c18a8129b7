// Model types: prediction, language and vision
use std::time::Duration;

use primer_utils::catalog::ConceptId;

use super::{insight, progress_bar, typed};
use crate::animation::engine::{AnimationEngine, AnimationFrame, StepCounter, Tone};
use crate::animation::shimmer::Shimmer;

/// Forecasting tomorrow's temperature from the week so far
#[derive(Debug, Clone)]
pub struct PredictionAnimation {
    counter: StepCounter,
    /// Model confidence, grows to `PREDICTION_TARGET`
    prediction: u32,
}

impl PredictionAnimation {
    pub const MAX_STEP: u32 = 5;
    const PREDICTION_TARGET: u32 = 85;
    const DETAIL_INTERVAL: Duration = Duration::from_millis(100);

    const HISTORY: [(&'static str, u32, &'static str); 5] = [
        ("Mon", 22, "☀️"),
        ("Tue", 24, "⛅"),
        ("Wed", 21, "🌤️"),
        ("Thu", 26, "☀️"),
        ("Fri", 28, "🔥"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
            prediction: 0,
        }
    }

    pub fn prediction(&self) -> u32 {
        self.prediction
    }

    /// Tomorrow's temperature: 27 + prediction / 10, rounded half up
    pub fn forecast(&self) -> u32 {
        (275 + self.prediction) / 10
    }

    fn predicting(&self) -> bool {
        self.step() >= 3 && self.prediction < Self::PREDICTION_TARGET
    }
}

impl Default for PredictionAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for PredictionAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::PredictionModels
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
        self.predicting().then_some(Self::DETAIL_INTERVAL)
    }

    fn tick_detail(&mut self) -> bool {
        if !self.predicting() {
            return false;
        }
        self.prediction = (self.prediction + 2).min(Self::PREDICTION_TARGET);
        true
    }

    fn reset(&mut self) {
        self.counter.reset();
        self.prediction = 0;
    }

    fn render(&self, _beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("Predicting Tomorrow's Weather 🌤️");

        for (day, temp, icon) in Self::HISTORY {
            let bar = "▇".repeat((temp / 4) as usize);
            frame.lit(format!("{day} {icon} {bar} {temp}°"), step >= 1);
        }
        let icon = if step >= 4 { "📊" } else { "❓" };
        let tomorrow = if step >= 4 {
            format!("{}°", self.forecast())
        } else {
            "?".to_string()
        };
        let bar = if step >= 3 { "▇".repeat(7) } else { String::new() };
        frame.line(
            format!("??? {icon} {bar} {tomorrow}"),
            if step >= 4 { Tone::Accent } else { Tone::Muted },
        );

        if step >= 2 {
            frame
                .blank()
                .line("📈 Pattern Found! Temperature rising +2° per day", Tone::Warning)
                .plain("   ➡️")
                .line(
                    format!("🔮 Prediction  Tomorrow: ~{}°C", self.forecast()),
                    Tone::Accent,
                );
        }

        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Prediction models find patterns in past data to forecast the future!",
            );
        }
        frame
    }
}

/// A question answered one character at a time
#[derive(Debug, Clone)]
pub struct LanguageAnimation {
    counter: StepCounter,
    /// Characters of the answer typed so far
    typed: usize,
}

impl LanguageAnimation {
    pub const MAX_STEP: u32 = 5;
    pub const ANSWER: &'static str = "Paris is the capital of France! 🗼";
    const DETAIL_INTERVAL: Duration = Duration::from_millis(80);
    const SHIMMER: Shimmer = Shimmer::new("💭 Thinking...");

    const SOURCES: [(&'static str, &'static str); 4] = [
        ("📚", "Books"),
        ("📰", "News"),
        ("🌐", "Wikipedia"),
        ("💻", "Websites"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
            typed: 0,
        }
    }

    pub fn typed_answer(&self) -> &'static str {
        typed(Self::ANSWER, self.typed)
    }

    fn typing(&self) -> bool {
        self.step() >= 3 && self.typed < Self::ANSWER.chars().count()
    }
}

impl Default for LanguageAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for LanguageAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::LanguageModels
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
        self.typing().then_some(Self::DETAIL_INTERVAL)
    }

    fn tick_detail(&mut self) -> bool {
        if !self.typing() {
            return false;
        }
        self.typed += 1;
        true
    }

    fn reset(&mut self) {
        self.counter.reset();
        self.typed = 0;
    }

    fn render(&self, beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("Language Models: AI That Reads & Writes 💬");

        let question = if step >= 1 {
            "What is the capital of France? 🤔"
        } else {
            "..."
        };
        frame.plain(format!("👤 {question}")).plain("   ➡️  💬 Language Model");
        if (2..4).contains(&step) {
            frame.line(format!("   {}", Self::SHIMMER.render(beat)), Tone::Accent);
        }
        let cursor = if self.typing() { "▌" } else { "" };
        frame.lit(format!("🤖 {}{cursor}", self.typed_answer()), step >= 3);

        if step >= 1 {
            let sources: Vec<String> = Self::SOURCES
                .iter()
                .map(|(icon, name)| format!("{icon} {name}"))
                .collect();
            frame
                .blank()
                .line("Trained on millions of text examples:", Tone::Muted)
                .plain(sources.join("  "));
        }

        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Language Models understand and generate text by learning from massive amounts of writing!",
            );
        }
        frame
    }
}

/// Scanning a photo for the features of a cat
#[derive(Debug, Clone)]
pub struct VisionAnimation {
    counter: StepCounter,
    /// Scan position in percent
    scan: u32,
}

impl VisionAnimation {
    pub const MAX_STEP: u32 = 5;
    const DETAIL_INTERVAL: Duration = Duration::from_millis(100);
    const LABEL_AT: u32 = 80;
    const SHIMMER: Shimmer = Shimmer::new("Analyzing...");

    const FEATURES: [(&'static str, u32); 4] =
        [("Whiskers", 30), ("Fur", 50), ("Ears", 70), ("Eyes", 90)];

    const USES: [&'static str; 3] = ["🚗 Self-driving cars", "🏥 Medical scans", "📱 Face unlock"];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
            scan: 0,
        }
    }

    pub fn scan(&self) -> u32 {
        self.scan
    }

    fn scanning(&self) -> bool {
        self.step() >= 2 && self.scan < 100
    }
}

impl Default for VisionAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for VisionAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::ComputerVision
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
        self.scanning().then_some(Self::DETAIL_INTERVAL)
    }

    fn tick_detail(&mut self) -> bool {
        if !self.scanning() {
            return false;
        }
        self.scan = (self.scan + 5).min(100);
        true
    }

    fn reset(&mut self) {
        self.counter.reset();
        self.scan = 0;
    }

    fn render(&self, beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("Computer Vision: AI That Sees 👁️");

        let label = if self.scan >= Self::LABEL_AT { "  [CAT]" } else { "" };
        frame.plain(format!("   🐱{label}"));
        if step >= 2 {
            frame.line(format!("{} scan", progress_bar(self.scan, 20)), Tone::Accent);
            let status = if self.scanning() {
                Self::SHIMMER.render(beat)
            } else {
                "⚙️ Done".to_string()
            };
            frame.plain(status);
        }

        frame.blank().line("Features Found:", Tone::Muted);
        for (feature, threshold) in Self::FEATURES {
            let found = self.scan > threshold;
            let mark = if found { "✓" } else { "○" };
            frame.line(
                format!("  {mark} {feature}"),
                if found { Tone::Success } else { Tone::Muted },
            );
        }

        if step >= 4 {
            frame.blank().plain(Self::USES.join("   "));
        }
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Computer Vision enables AI to see and understand images like humans do!",
            );
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance_to(anim: &mut dyn AnimationEngine, step: u32) {
        while anim.step() < step {
            assert!(anim.advance());
        }
    }

    #[test]
    fn test_prediction_grows_to_target_from_step_three() {
        let mut anim = PredictionAnimation::new();
        advance_to(&mut anim, 2);
        assert_eq!(anim.detail_interval(), None);

        anim.advance();
        let mut ticks = 0;
        while anim.detail_interval().is_some() {
            anim.tick_detail();
            ticks += 1;
        }
        // 2 per tick, clamped at 85
        assert_eq!(ticks, 43);
        assert_eq!(anim.prediction(), 85);
        assert_eq!(anim.forecast(), 36);
        assert!(!anim.tick_detail());
    }

    #[test]
    fn test_prediction_forecast_rounding() {
        let mut anim = PredictionAnimation::new();
        assert_eq!(anim.forecast(), 27);
        advance_to(&mut anim, 3);
        for _ in 0..7 {
            anim.tick_detail();
        }
        // 27 + 1.4
        assert_eq!(anim.forecast(), 28);
    }

    #[test]
    fn test_prediction_reveals_forecast_at_step_four() {
        let mut anim = PredictionAnimation::new();
        advance_to(&mut anim, 3);
        assert!(anim.render(0).contains("??? ❓"));

        anim.advance();
        assert!(anim.render(0).contains("??? 📊"));
        anim.advance();
        assert!(anim.render(0).contains("🎯 Prediction models"));
    }

    #[test]
    fn test_language_types_answer_from_step_three() {
        let mut anim = LanguageAnimation::new();
        advance_to(&mut anim, 2);
        assert!(anim.render(0).contains("Thinking..."));
        assert_eq!(anim.detail_interval(), None);

        anim.advance();
        assert_eq!(anim.detail_interval(), Some(Duration::from_millis(80)));
        for _ in 0..5 {
            anim.tick_detail();
        }
        assert_eq!(anim.typed_answer(), "Paris");

        while anim.detail_interval().is_some() {
            anim.tick_detail();
        }
        assert_eq!(anim.typed_answer(), LanguageAnimation::ANSWER);
        assert!(anim.render(0).contains("France! 🗼"));
    }

    #[test]
    fn test_language_sources_shown_from_step_one() {
        let mut anim = LanguageAnimation::new();
        assert!(!anim.render(0).contains("Wikipedia"));
        anim.advance();
        assert!(anim.render(0).contains("🌐 Wikipedia"));
    }

    #[test]
    fn test_vision_detects_features_as_scan_progresses() {
        let mut anim = VisionAnimation::new();
        advance_to(&mut anim, 2);
        for _ in 0..7 {
            anim.tick_detail();
        }
        // 35%: whiskers only
        let frame = anim.render(0);
        assert!(frame.contains("✓ Whiskers"));
        assert!(frame.contains("○ Fur"));
        assert!(!frame.contains("[CAT]"));

        while anim.detail_interval().is_some() {
            anim.tick_detail();
        }
        assert_eq!(anim.scan(), 100);
        let frame = anim.render(0);
        assert!(frame.contains("✓ Eyes"));
        assert!(frame.contains("[CAT]"));
    }

    #[test]
    fn test_vision_uses_and_summary() {
        let mut anim = VisionAnimation::new();
        advance_to(&mut anim, 4);
        assert!(anim.render(0).contains("🏥 Medical scans"));
        anim.advance();
        assert!(anim.render(0).contains("🎯 Computer Vision"));
        assert!(anim.is_complete());
    }
}
