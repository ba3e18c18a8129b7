// Foundation: automation, rule-based systems and AI itself
use primer_utils::catalog::ConceptId;

use super::insight;
use crate::animation::engine::{AnimationEngine, AnimationFrame, StepCounter, Tone};

/// A washing machine running the same cycle every time
#[derive(Debug, Clone)]
pub struct AutomationAnimation {
    counter: StepCounter,
}

impl AutomationAnimation {
    pub const MAX_STEP: u32 = 4;

    const STEPS: [&'static str; 5] = [
        "Step 1: Press the button to start",
        "Step 2: The machine follows fixed rules",
        "Step 3: It always does the same thing - fill water, spin, drain",
        "Step 4: It doesn't learn or adapt - it just follows instructions!",
        "Step 4: It doesn't learn or adapt - it just follows instructions!",
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for AutomationAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for AutomationAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::Automation
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
        let mut frame = AnimationFrame::new("Automation: The Washing Machine ⚙️");

        // the drum turns once the water is in
        let drum = if step >= 2 {
            ["👕 👖 🧦", "🧦 👕 👖", "👖 🧦 👕"][(beat / 4 % 3) as usize]
        } else {
            "👕 👖 🧦"
        };
        frame
            .plain("╭────────────────╮")
            .plain(format!("│   ( {drum} )   │"))
            .plain("╰────────────────╯");
        if step == 0 {
            frame.line("👆 press start", Tone::Accent);
        }
        frame
            .lit("● Power", step >= 1)
            .lit("● Water", step >= 2)
            .lit("● Spin", step >= 3);

        frame.caption(Self::STEPS[step as usize]);
        if step >= Self::MAX_STEP {
            insight(
                &mut frame,
                "🎯 Key Insight: Automation follows fixed rules - it doesn't learn!",
            );
        }
        frame
    }
}

struct Scene {
    title: &'static str,
    rule: &'static str,
    input: &'static str,
    output: &'static str,
}

/// A thermostat applying if-then rules, cycling through three scenes
#[derive(Debug, Clone)]
pub struct RuleBasedAnimation {
    counter: StepCounter,
}

impl RuleBasedAnimation {
    const SCENES: [Scene; 3] = [
        Scene {
            title: "Input",
            rule: "IF temperature < 18°C",
            input: "Temperature = 16°C",
            output: "Turn heating ON",
        },
        Scene {
            title: "Input",
            rule: "IF temperature ≥ 18°C",
            input: "Temperature = 21°C",
            output: "Turn heating OFF",
        },
        Scene {
            title: "Key idea",
            rule: "Same input → same output",
            input: "No learning",
            output: "Just rules",
        },
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::cycling(Self::SCENES.len() as u32 - 1),
        }
    }
}

impl Default for RuleBasedAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for RuleBasedAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::RuleBased
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

    fn is_complete(&self) -> bool {
        self.counter.is_complete()
    }

    fn render(&self, _beat: u64) -> AnimationFrame {
        let scene = &Self::SCENES[self.step() as usize];
        let mut frame = AnimationFrame::new("Rule-Based Systems: If This, Then That 📋");
        frame
            .line(format!("[{}]", scene.title), Tone::Muted)
            .blank()
            .line("Sensor reading", Tone::Muted)
            .plain(format!("  {}", scene.input))
            .line("Rule", Tone::Muted)
            .line(format!("  {}", scene.rule), Tone::Accent)
            .line("Decision", Tone::Muted)
            .line(format!("  {}", scene.output), Tone::Success)
            .blank()
            .plain("Rule-based systems are deterministic: they apply predefined rules to inputs.")
            .line(
                "They don't learn from data - changing behavior requires changing the rules.",
                Tone::Muted,
            );
        frame
    }
}

/// Learning to tell cats from dogs
#[derive(Debug, Clone)]
pub struct AiAnimation {
    counter: StepCounter,
}

impl AiAnimation {
    pub const MAX_STEP: u32 = 5;

    const CATS: &'static str = "🐱 🐈 😺 🐈‍⬛ 😸";
    const DOGS: &'static str = "🐕 🐶 🦮 🐕‍🦺 🐩";

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for AiAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for AiAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::Ai
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
        let mut frame = AnimationFrame::new("AI: Learning From Examples 🧠");

        frame.lit("        🧠", step >= 1);
        if step >= 1 {
            frame
                .plain(format!("Cats: {}", Self::CATS))
                .plain(format!("Dogs: {}", Self::DOGS));
        }
        if step >= 2 {
            frame.line("  ↳ whiskers · ears · face shape", Tone::Accent);
        }
        if step >= 3 {
            frame
                .blank()
                .plain("New photo: 🐱  →")
                .line("It's a CAT! 🎉", Tone::Success);
        }

        match step {
            0 => {}
            1 => {
                frame.caption("AI learns patterns from lots of examples");
            }
            2 => {
                frame.caption("It finds what makes cats different from dogs - whiskers, ears, face shape...");
            }
            3 => {
                frame.caption("Now when it sees a new photo, it can recognize it!");
            }
            _ => insight(
                &mut frame,
                "🎯 AI LEARNS from data - that's what makes it different from automation!",
            ),
        }
        frame
    }
}
