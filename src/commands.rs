// Primer non-interactive subcommands
//
// Each command builds its whole output as a string; `main` prints it.

use ansi_term::{Colour, Style};
use primer_client::animation::{animation_for, AnimationEngine, AnimationFrame, Tone};
use primer_client::pipeline::PipelineExplorer;
use primer_utils::catalog::{catalog, Category, Concept};
use primer_utils::icons::icon_for;
use primer_utils::stages::PipelineStage;

/// Upper bound on detail ticks between two steps
const MAX_DETAIL_TICKS: usize = 1_000;

/// Paints text, or leaves it alone when color is off
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn tone(&self, tone: Tone, text: &str) -> String {
        let style = match tone {
            Tone::Plain => return text.to_string(),
            Tone::Muted => Style::new().dimmed(),
            Tone::Accent => Colour::Cyan.bold(),
            Tone::Success => Colour::Green.bold(),
            Tone::Warning => Colour::Yellow.normal(),
            Tone::Insight => Colour::Purple.italic(),
        };
        self.paint(style, text)
    }

    fn bold(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    fn category(&self, category: &Category, text: &str) -> String {
        self.paint(Colour::Fixed(category.color.ansi256()).bold(), text)
    }
}

/// `primer list`
pub fn list(painter: Painter) -> String {
    let mut out = String::new();
    for category in catalog().categories() {
        let header = format!("{} ({})", category.name, category.concepts.len());
        out.push_str(&painter.category(category, &header));
        out.push('\n');
        for concept in &category.concepts {
            out.push_str(&format!("  {:<18} {}\n", concept.id.to_string(), concept.term));
        }
    }
    out
}

/// `primer list --json`
pub fn list_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(catalog().categories())
}

fn push_frame(out: &mut String, frame: &AnimationFrame, painter: Painter) {
    out.push_str(&painter.bold(&frame.title));
    out.push('\n');
    for line in &frame.lines {
        out.push_str(&painter.tone(line.tone, &line.text));
        out.push('\n');
    }
    if let Some(caption) = &frame.caption {
        out.push_str(&painter.tone(Tone::Muted, caption));
        out.push('\n');
    }
}

/// Start screen of the modal for `concept`
pub fn idle_card(concept: &Concept, painter: Painter) -> String {
    let mut out = String::new();
    for row in icon_for(concept).rows() {
        out.push_str(&format!("  {row}\n"));
    }
    let category = catalog().category(concept.category);
    let category_name = category.map(|c| c.name).unwrap_or_default();
    let header = format!("{} · {}", concept.term, category_name);
    match category {
        Some(category) => out.push_str(&painter.category(category, &header)),
        None => out.push_str(&header),
    }
    out.push_str("\n\n");
    out.push_str(&painter.bold(&format!("Ready to learn about {}?", concept.term)));
    out.push('\n');
    out.push_str(concept.definition);
    out.push_str("\n\n▶ Start Learning\n");
    if !concept.examples.is_empty() {
        out.push_str(&painter.tone(
            Tone::Muted,
            &format!("Real-world examples: {}", concept.examples.join(" · ")),
        ));
        out.push('\n');
    }
    out
}

/// Run detail effects until they settle
fn settle(engine: &mut dyn AnimationEngine) {
    let mut ticks = 0;
    while engine.detail_interval().is_some() && ticks < MAX_DETAIL_TICKS {
        if !engine.tick_detail() {
            break;
        }
        ticks += 1;
    }
}

fn push_step(out: &mut String, engine: &dyn AnimationEngine, painter: Painter) {
    out.push('\n');
    out.push_str(&painter.tone(
        Tone::Muted,
        &format!("── Step {} of {} ──", engine.step(), engine.max_step()),
    ));
    out.push('\n');
    push_frame(out, &engine.render(0), painter);
}

/// `primer show <concept>`: the start screen, then one frame per step tick.
///
/// Without `ticks` this runs until the animation completes; animations that
/// loop forever show one full cycle.
pub fn show(concept: &Concept, ticks: Option<u32>, painter: Painter) -> String {
    let mut out = idle_card(concept, painter);
    let mut engine = animation_for(concept.id);
    let ticks = ticks.unwrap_or_else(|| engine.max_step());

    settle(engine.as_mut());
    push_step(&mut out, engine.as_ref(), painter);
    for _ in 0..ticks {
        if !engine.advance() {
            break;
        }
        settle(engine.as_mut());
        push_step(&mut out, engine.as_ref(), painter);
    }
    out
}

/// `primer pipeline`: the intro, then every stage in order
pub fn pipeline(painter: Painter) -> String {
    let mut explorer = PipelineExplorer::default();
    let mut out = String::new();
    push_frame(&mut out, &explorer.render(0), painter);

    for index in 0..PipelineStage::COUNT {
        explorer.jump(index);
        let Some(stage) = explorer.current() else {
            continue;
        };
        out.push('\n');
        out.push_str(&painter.bold(&format!(
            "{}. {}",
            stage.index() + 1,
            stage.label()
        )));
        out.push('\n');
        let frame = explorer.render_stage(0);
        for line in &frame.lines {
            out.push_str(&painter.tone(line.tone, &line.text));
            out.push('\n');
        }
        if let Some(caption) = &frame.caption {
            out.push_str(&painter.tone(Tone::Muted, caption));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_utils::catalog::ConceptId;

    #[test]
    fn test_list_text() {
        insta::assert_snapshot!(list(Painter::new(false)), @r###"
        Foundation (3)
          automation         Automation
          rule-based         Rule-Based Systems
          ai                 AI (Artificial Intelligence)
        Core Components (4)
          input              Input
          training-data      Training Data
          ai-model           AI Model
          ai-pipeline        AI Pipeline
        Model Types (3)
          prediction-models  Prediction Models
          language-models    Language Models
          computer-vision    Computer Vision
        Applications (4)
          search-systems     Search / Retrieval Systems
          chatbots           Chatbots
          generative-ai      Generative AI
          agentic-ai         Agentic AI
        Career (1)
          ai-engineer        AI Engineer
        "###);
    }

    #[test]
    fn test_list_json() {
        let json = list_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let categories = value.as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0]["id"], "foundation");
        assert_eq!(categories[0]["color"], "coral");
        assert_eq!(categories[1]["concepts"][1]["id"], "training-data");
        let total: usize = categories
            .iter()
            .map(|c| c["concepts"].as_array().unwrap().len())
            .sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn test_show_runs_until_complete() {
        let concept = catalog().get(ConceptId::TrainingData);
        let out = show(concept, None, Painter::new(false));
        assert!(out.contains("Ready to learn about Training Data?"));
        assert!(out.contains("── Step 0 of 5 ──"));
        assert!(out.contains("── Step 5 of 5 ──"));
        assert!(!out.contains("── Step 6"));
    }

    #[test]
    fn test_show_with_ticks() {
        let concept = catalog().get(ConceptId::AiEngineer);
        let out = show(concept, Some(2), Painter::new(false));
        assert!(out.contains("── Step 2 of 6 ──"));
        assert!(!out.contains("── Step 3 of 6 ──"));
    }

    #[test]
    fn test_show_loops_once_for_cycling_animation() {
        let concept = catalog().get(ConceptId::RuleBased);
        let out = show(concept, None, Painter::new(false));
        assert!(out.contains("── Step 2 of 2 ──"));
        assert_eq!(out.matches("── Step ").count(), 3);
    }

    #[test]
    fn test_pipeline_lists_every_stage() {
        let out = pipeline(Painter::new(false));
        assert!(out.contains("Press play to start"));
        assert!(out.contains("1. Prompt"));
        assert!(out.contains("7. Next Word"));
        assert!(out.contains("Hello, how are you? doing"));
    }

    #[test]
    fn test_no_color_output_is_plain() {
        let out = list(Painter::new(false));
        assert!(!out.contains('\u{1b}'));
        let out = list(Painter::new(true));
        assert!(out.contains('\u{1b}'));
    }
}
