// Career: the AI engineer
use primer_utils::catalog::ConceptId;

use super::insight;
use crate::animation::engine::{AnimationEngine, AnimationFrame, StepCounter, Tone};

/// What an AI engineer does, knows and earns
#[derive(Debug, Clone)]
pub struct EngineerAnimation {
    counter: StepCounter,
}

impl EngineerAnimation {
    pub const MAX_STEP: u32 = 6;

    const SKILLS: [(&'static str, &'static str); 4] = [
        ("🐍", "Python"),
        ("📐", "Math"),
        ("📊", "Data"),
        ("🧠", "ML Models"),
    ];

    const PROJECTS: [(&'static str, &'static str, &'static str); 3] = [
        ("🎬", "Netflix Recommendations", "What to watch next?"),
        ("🏥", "Medical Diagnosis", "Detecting diseases early"),
        ("🚗", "Self-Driving Cars", "Safe autonomous driving"),
    ];

    const STATS: [(&'static str, &'static str); 3] = [
        ("$120K+", "Average salary"),
        ("🌍 Global", "High demand"),
        ("📈 Growing", "Hot career"),
    ];

    pub fn new() -> Self {
        Self {
            counter: StepCounter::bounded(Self::MAX_STEP),
        }
    }
}

impl Default for EngineerAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for EngineerAnimation {
    fn concept(&self) -> ConceptId {
        ConceptId::AiEngineer
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
        let mut frame = AnimationFrame::new("AI Engineer: Building the Future 👩‍💻");

        frame.lit("👩‍💻 💻", step >= 1);
        if step >= 2 {
            frame
                .line("   > data.load()", Tone::Accent)
                .line("   > model.train()", Tone::Accent);
        }
        if step >= 3 {
            let skills: Vec<String> = Self::SKILLS
                .iter()
                .map(|(icon, skill)| format!("{icon} {skill}"))
                .collect();
            frame.blank().plain(format!("Skills: {}", skills.join("  ")));
        }
        if step >= 4 {
            frame.blank();
            for (icon, project, detail) in Self::PROJECTS {
                frame.plain(format!("{icon} {project} - {detail}"));
            }
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
                "🎯 AI Engineers build AI systems that solve real-world problems - and get paid well to do it!",
            );
        }
        frame
    }
}
