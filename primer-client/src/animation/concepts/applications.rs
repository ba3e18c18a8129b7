// Applications: search, chatbots, generative and agentic AI
use std::time::Duration;

use primer_utils::catalog::ConceptId;

use super::{insight, typed};
use crate::animation::engine::{AnimationEngine, AnimationFrame, StepCounter, Tone};
use crate::animation::shimmer::Shimmer;

/// A search query typed out, then ranked results
#[derive(Debug, Clone)]
pub struct SearchAnimation {
    counter: StepCounter,
    /// Characters of the query typed so far
    typed: usize,
}

impl SearchAnimation {
    pub const MAX_STEP: u32 = 5;
    pub const QUERY: &'static str = "best pizza recipes";
    const DETAIL_INTERVAL: Duration = Duration::from_millis(100);

    const RESULTS: [&'static str; 3] = [
        "Classic Margherita Pizza 🍕",
        "Easy Homemade Pizza Dough",
        "Best Pizza Toppings Guide",
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
            typed: 0,
        }
    }

    pub fn query(&self) -> &'static str {
        typed(Self::QUERY, self.typed)
    }

    fn typing(&self) -> bool {
        self.step() >= 1 && self.typed < Self::QUERY.chars().count()
    }
}

impl Default for SearchAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for SearchAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::SearchSystems
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

    fn render(&self, _beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("Search Systems: AI-Powered Finding 🔍");

        let cursor = if self.typing() { "▌" } else { "" };
        frame.plain(format!("🔍 [ {}{cursor} ]", self.query()));

        if step >= 2 {
            frame
                .blank()
                .line("🧠 AI is helping:", Tone::Accent)
                .plain("   • Understanding your intent")
                .plain("   • Ranking best results");
        }
        if step >= 3 {
            frame.blank();
            for (rank, title) in Self::RESULTS.iter().enumerate() {
                let tone = if rank == 0 { Tone::Success } else { Tone::Plain };
                frame.line(format!("{}. {title}", rank + 1), tone);
            }
        }
        if step >= 4 {
            frame.blank().line(
                "Important: Search finds existing content - it's a \"finder,\" not a \"creator\"!",
                Tone::Warning,
            );
        }
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Search systems use AI to find and rank the best existing information!",
            );
        }
        frame
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    User,
    Bot,
}

/// A support conversation, one message per step
#[derive(Debug, Clone)]
pub struct ChatbotsAnimation {
    counter: StepCounter,
}

impl ChatbotsAnimation {
    pub const MAX_STEP: u32 = 6;

    const CONVERSATION: [(Speaker, &'static str); 4] = [
        (Speaker::User, "Hi! I need help with my order 📦"),
        (Speaker::Bot, "Hello! I'd be happy to help! What's your order number? 😊"),
        (Speaker::User, "It's #12345"),
        (Speaker::Bot, "Found it! Your order ships tomorrow and arrives Friday! 🚚"),
    ];

    const STATS: [(&'static str, &'static str); 3] = [
        ("80%", "Questions solved"),
        ("24/7", "Always available"),
        ("<1s", "Response time"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }

    /// Messages revealed so far
    pub fn visible_messages(&self) -> usize {
        (self.step() as usize).min(Self::CONVERSATION.len())
    }
}

impl Default for ChatbotsAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for ChatbotsAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::Chatbots
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
        let mut frame = AnimationFrame::new("Chatbots: Your AI Helper 🤝");
        frame
            .line("🤖 Support Bot", Tone::Accent)
            .line("   Online - Replies instantly", Tone::Success)
            .blank();

        let shown = self.visible_messages();
        for (speaker, text) in &Self::CONVERSATION[..shown] {
            match speaker {
                Speaker::User => frame.line(format!("{text:>60}"), Tone::Plain),
                Speaker::Bot => frame.line(format!("🤖 {text}"), Tone::Accent),
            };
        }
        // the bot answers every user message
        if shown % 2 == 1 && shown < Self::CONVERSATION.len() {
            frame.line("🤖 ● ● ●", Tone::Muted);
        }

        if step >= 5 {
            let stats: Vec<String> = Self::STATS
                .iter()
                .map(|(value, label)| format!("{value} {label}"))
                .collect();
            frame.blank().line(stats.join("  |  "), Tone::Success);
        }
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Chatbots use Language Models to understand and help users instantly!",
            );
        }
        frame
    }
}

/// A prompt turned into brand new content
#[derive(Debug, Clone)]
pub struct GenerativeAnimation {
    counter: StepCounter,
}

impl GenerativeAnimation {
    pub const MAX_STEP: u32 = 6;
    const SHIMMER: Shimmer = Shimmer::new("⭐ Creating... 💫");

    const CREATIONS: [(&'static str, &'static str, &'static str, &'static str); 4] = [
        ("📝", "Text", "Write a poem", "🌟 Roses are red..."),
        ("🖼️", "Image", "A sunset beach", "🏖️ 🌅"),
        ("🎵", "Music", "Happy melody", "🎶 ♪ ♫"),
        ("💻", "Code", "Make a button", "< /> ✨"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for GenerativeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for GenerativeAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::GenerativeAi
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

    fn render(&self, beat: u64) -> AnimationFrame {
        let step = self.step();
        let mut frame = AnimationFrame::new("Generative AI: Creating Something New ✨");

        let prompt = if step >= 1 {
            "\"Create a magical forest\""
        } else {
            "..."
        };
        frame.plain(format!("✍️  {prompt}"));
        if step == 2 {
            frame.line(format!("   ➡️  🤖 {}", Self::SHIMMER.render(beat)), Tone::Accent);
        } else {
            frame.lit("   ➡️  🤖", step >= 2);
        }
        frame.line("AI Creates:", if step >= 3 { Tone::Plain } else { Tone::Muted });
        if step >= 3 {
            frame.line("   🌲🦋🍄🌸🌙", Tone::Success);
        }

        if step >= 4 {
            frame.blank();
            for (icon, kind, prompt, result) in Self::CREATIONS {
                frame.plain(format!("{icon} {kind:<6} \"{prompt}\" → {result}"));
            }
        }
        if step >= 5 {
            frame.blank().line(
                "Key difference: It creates NEW content, not just finding existing things!",
                Tone::Warning,
            );
        }
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Generative AI creates brand new content - text, images, music, and more!",
            );
        }
        frame
    }
}

/// An agent planning a trip across several tools
#[derive(Debug, Clone)]
pub struct AgenticAnimation {
    counter: StepCounter,
}

impl AgenticAnimation {
    pub const MAX_STEP: u32 = 7;

    const TOOLS: [&'static str; 3] = ["✈️ Flights", "🏨 Hotels", "📅 Calendar"];

    const TASKS: [(&'static str, &'static str, &'static str); 5] = [
        ("🎯", "Understanding task", "Book a trip to Paris"),
        ("🔍", "Searching flights", "Finding best prices..."),
        ("🏨", "Booking hotel", "Selecting 4-star hotels..."),
        ("📅", "Creating schedule", "Optimizing itinerary..."),
        ("✅", "Task complete!", "Trip booked!"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }

    /// Tool `i` is finished once the step has moved past its turn
    pub fn tool_done(&self, i: usize) -> bool {
        self.step() as usize > i + 1
    }
}

impl Default for AgenticAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for AgenticAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::AgenticAi
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
        let mut frame = AnimationFrame::new("Agentic AI: AI That Takes Action 🚀");

        let thinking = if (1..6).contains(&step) { " 💭" } else { "" };
        frame.plain(format!("👤 \"Plan my Paris trip\"  ➡️  🤖{thinking}"));

        let tools: Vec<String> = Self::TOOLS
            .iter()
            .enumerate()
            .map(|(i, tool)| {
                if self.tool_done(i) {
                    format!("[{tool} ✓]")
                } else {
                    format!("[{tool}]")
                }
            })
            .collect();
        frame.plain(tools.join(" "));

        let shown = (step as usize).min(Self::TASKS.len());
        if shown > 0 {
            frame.blank();
        }
        for (icon, action, detail) in &Self::TASKS[..shown] {
            frame.line(format!("{icon} {action} - {detail} ✓"), Tone::Success);
        }

        if step >= 6 {
            frame.blank().line(
                "⚠️ Note: Agentic AI is still emerging - it needs human oversight for important tasks!",
                Tone::Warning,
            );
        }
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Agentic AI can plan steps and use multiple tools to complete complex tasks!",
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
    fn test_search_types_query_from_step_one() {
        let mut anim = SearchAnimation::new();
        assert_eq!(anim.detail_interval(), None);
        assert_eq!(anim.query(), "");

        anim.advance();
        assert_eq!(anim.detail_interval(), Some(Duration::from_millis(100)));
        let mut ticks = 0;
        while anim.detail_interval().is_some() {
            anim.tick_detail();
            ticks += 1;
        }
        assert_eq!(ticks, SearchAnimation::QUERY.len());
        assert_eq!(anim.query(), "best pizza recipes");
    }

    #[test]
    fn test_search_results_and_finder_note() {
        let mut anim = SearchAnimation::new();
        advance_to(&mut anim, 3);
        let frame = anim.render(0);
        assert!(frame.contains("1. Classic Margherita Pizza 🍕"));
        assert!(!frame.contains("Important:"));

        anim.advance();
        assert!(anim.render(0).contains("not a \"creator\""));
    }

    #[test]
    fn test_chatbots_reveal_one_message_per_step() {
        let mut anim = ChatbotsAnimation::new();
        assert_eq!(anim.visible_messages(), 0);

        anim.advance();
        assert_eq!(anim.visible_messages(), 1);
        assert!(anim.render(0).contains("● ● ●"));

        advance_to(&mut anim, 4);
        assert_eq!(anim.visible_messages(), 4);
        let frame = anim.render(0);
        assert!(frame.contains("arrives Friday! 🚚"));
        assert!(!frame.contains("● ● ●"));

        advance_to(&mut anim, 6);
        assert_eq!(anim.visible_messages(), 4);
        let frame = anim.render(0);
        assert!(frame.contains("24/7 Always available"));
        assert!(frame.contains("🎯 Chatbots use Language Models"));
        assert!(!anim.advance());
    }

    #[test]
    fn test_generative_steps() {
        let mut anim = GenerativeAnimation::new();
        assert!(anim.render(0).contains("✍️  ..."));

        advance_to(&mut anim, 2);
        assert!(anim.render(0).contains("Creating..."));

        advance_to(&mut anim, 4);
        let frame = anim.render(0);
        assert!(frame.contains("🌲🦋🍄🌸🌙"));
        assert!(frame.contains("\"Make a button\" → < /> ✨"));

        advance_to(&mut anim, 6);
        assert!(anim.render(0).contains("🎯 Generative AI creates brand new content"));
    }

    #[test]
    fn test_agentic_tools_complete_in_turn() {
        let mut anim = AgenticAnimation::new();
        advance_to(&mut anim, 2);
        assert!(anim.tool_done(0));
        assert!(!anim.tool_done(1));
        assert!(anim.render(0).contains("[✈️ Flights ✓]"));

        advance_to(&mut anim, 5);
        let frame = anim.render(0);
        assert!(frame.contains("Task complete! - Trip booked!"));
        assert!(!frame.contains("⚠️"));

        advance_to(&mut anim, 7);
        let frame = anim.render(0);
        assert!(frame.contains("human oversight"));
        assert!(frame.contains("🎯 Agentic AI"));
        assert!(anim.is_complete());
    }
}
