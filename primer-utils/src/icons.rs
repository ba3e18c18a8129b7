// Primer icon registry
//
// Small three-line glyphs drawn next to concept cards and on the modal start
// screen. Keyed by ConceptId; string lookups that miss fall back to an emoji.

use std::str::FromStr;

use crate::catalog::{Concept, ConceptId};

/// Fallback shown for keys with no registry entry
pub const FALLBACK_EMOJI: &str = "❔";

/// A fixed-size text glyph (3 rows, 7 columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [&'static str; 3],
}

/// What to draw for a concept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Glyph(&'static Glyph),
    Emoji(&'static str),
}

impl Icon {
    /// Rows to draw; an emoji occupies the middle row
    pub fn rows(&self) -> [&'static str; 3] {
        match self {
            Icon::Glyph(glyph) => glyph.rows,
            Icon::Emoji(emoji) => ["", *emoji, ""],
        }
    }

    /// Single-line form, for list output
    pub fn inline(&self) -> &'static str {
        match self {
            Icon::Glyph(glyph) => glyph.rows[1].trim(),
            Icon::Emoji(emoji) => *emoji,
        }
    }
}

static AUTOMATION: Glyph = Glyph { rows: [" ╭─┴─╮ ", "─┤ ⚙ ├─", " ╰─┬─╯ "] };
static RULE_BASED: Glyph = Glyph { rows: ["  [?]  ", "  ╱ ╲  ", "[Y] [N]"] };
static AI_BRAIN: Glyph = Glyph { rows: [" ╭~~~╮ ", "( o o )", " ╰─┬─╯ "] };
static INPUT: Glyph = Glyph { rows: [" ╲ │ ╱ ", "  ╲│╱  ", " [███] "] };
static TRAINING_DATA: Glyph = Glyph { rows: [" ▤ ▤ ▤ ", " ▤ ▤ ▤ ", " ───── "] };
static AI_MODEL: Glyph = Glyph { rows: [" ┌───┐ ", " │◉ ◉│ ", " └┬─┬┘ "] };
static AI_PIPELINE: Glyph = Glyph { rows: ["       ", "▢→◆→▣ ", "  ↑    "] };
static PREDICTION: Glyph = Glyph { rows: ["     ▆ ", "   ▄ █ ", " ▂ █ █ "] };
static LANGUAGE_MODEL: Glyph = Glyph { rows: [" ╭───╮ ", " │ … │ ", " ╰─┬─╯ "] };
static COMPUTER_VISION: Glyph = Glyph { rows: ["  ___  ", " ( ◉ ) ", "  ‾‾‾  "] };
static SEARCH: Glyph = Glyph { rows: ["  ╭─╮  ", "  ╰─╯  ", "     ╲ "] };
static CHATBOTS: Glyph = Glyph { rows: ["╭──╮   ", "╰┬─╯╭─╮", "   ╰┴─╯"] };
static GENERATIVE_AI: Glyph = Glyph { rows: ["  ✦    ", " ✦ ✧ ✦ ", "    ✧  "] };
static AGENTIC_AI: Glyph = Glyph { rows: ["   ▲   ", "  ╱█╲  ", "  ╲▼╱  "] };
static AI_ENGINEER: Glyph = Glyph { rows: ["  (•)  ", " ╭┴─┴╮ ", " │</>│ "] };

/// Registry entry for an id
pub fn glyph_for(id: ConceptId) -> &'static Glyph {
    match id {
        ConceptId::Automation => &AUTOMATION,
        ConceptId::RuleBased => &RULE_BASED,
        ConceptId::Ai => &AI_BRAIN,
        ConceptId::Input => &INPUT,
        ConceptId::TrainingData => &TRAINING_DATA,
        ConceptId::AiModel => &AI_MODEL,
        ConceptId::AiPipeline => &AI_PIPELINE,
        ConceptId::PredictionModels => &PREDICTION,
        ConceptId::LanguageModels => &LANGUAGE_MODEL,
        ConceptId::ComputerVision => &COMPUTER_VISION,
        ConceptId::SearchSystems => &SEARCH,
        ConceptId::Chatbots => &CHATBOTS,
        ConceptId::GenerativeAi => &GENERATIVE_AI,
        ConceptId::AgenticAi => &AGENTIC_AI,
        ConceptId::AiEngineer => &AI_ENGINEER,
    }
}

/// Icon for a catalog concept, resolved by key. A concept without a glyph
/// shows its own emoji.
pub fn icon_for(concept: &Concept) -> Icon {
    match icon_for_key(concept.id.as_ref()) {
        Icon::Emoji(_) => Icon::Emoji(concept.icon),
        glyph => glyph,
    }
}

/// Icon for an arbitrary key; unknown keys get the fallback emoji
pub fn icon_for_key(key: &str) -> Icon {
    match ConceptId::from_str(key) {
        Ok(id) => Icon::Glyph(glyph_for(id)),
        Err(_) => Icon::Emoji(FALLBACK_EMOJI),
    }
}
