// Primer LLM pipeline stages
//
// Content for the pipeline explorer: the seven stages of producing one word,
// and the worked example ("Hello, how are you?" -> "doing") shown at each.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// One stage of text generation, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Prompt,
    Tokens,
    Embeddings,
    Transformer,
    Logits,
    Softmax,
    Output,
}

impl PipelineStage {
    pub const COUNT: usize = 7;

    /// Position in the pipeline, 0-based
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        PipelineStage::iter().nth(index)
    }

    pub fn first() -> Self {
        PipelineStage::Prompt
    }

    pub fn last() -> Self {
        PipelineStage::Output
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Prompt => "Prompt",
            PipelineStage::Tokens => "Tokens",
            PipelineStage::Embeddings => "Embeddings",
            PipelineStage::Transformer => "Transformer",
            PipelineStage::Logits => "Logits",
            PipelineStage::Softmax => "Softmax",
            PipelineStage::Output => "Next Word",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PipelineStage::Prompt => "You type a prompt - your question or instruction to the AI",
            PipelineStage::Tokens => "Your prompt gets split into small pieces called TOKENS",
            PipelineStage::Embeddings => {
                "Each token becomes a number pattern called an EMBEDDING"
            }
            PipelineStage::Transformer => "Transformer layers process and understand the meaning",
            PipelineStage::Logits => {
                "The model calculates LOGITS - scores for each possible next word"
            }
            PipelineStage::Softmax => {
                "SOFTMAX converts scores to probabilities (must add up to 100%)"
            }
            PipelineStage::Output => "The model picks the most likely NEXT WORD!",
        }
    }
}

pub const INTRO: &str =
    "Let's see how a Large Language Model (LLM) works inside! Press play to start";
pub const COMPLETION: &str = "This process repeats for every word the AI generates!";
pub const HEADLINE: &str = "Inside an LLM: How Words Become AI Magic";
pub const ROUTE: &str = "Prompt → Tokens → Embeddings → Transformer → Logits → Softmax → Next Word";

pub const PROMPT: &str = "Hello, how are you?";
pub const TOKENS: [&str; 6] = ["Hello", ",", " how", " are", " you", "?"];
pub const NEXT_WORD: &str = "doing";
pub const ATTENTION_LAYERS: usize = 5;

/// Embedding vectors for the first four tokens
pub const EMBEDDINGS: [[f32; 3]; 4] = [
    [0.42, -0.17, 0.88],
    [-0.05, 0.31, -0.62],
    [0.73, 0.12, -0.29],
    [-0.38, 0.94, 0.07],
];

/// Raw scores for candidate next words, highest first
pub const LOGITS: [(&str, f32); 4] = [
    ("doing", 4.2),
    ("feeling", 3.1),
    ("today", 1.8),
    ("fine", 1.2),
];

/// Probabilities (percent) after softmax, highest first
pub const PROBABILITIES: [(&str, u8); 4] = [
    ("doing", 52),
    ("feeling", 28),
    ("today", 12),
    ("other...", 8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let labels: Vec<&str> = PipelineStage::iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Prompt",
                "Tokens",
                "Embeddings",
                "Transformer",
                "Logits",
                "Softmax",
                "Next Word"
            ]
        );
        assert_eq!(PipelineStage::iter().count(), PipelineStage::COUNT);
    }

    #[test]
    fn test_index_round_trip() {
        for stage in PipelineStage::iter() {
            assert_eq!(PipelineStage::from_index(stage.index()), Some(stage));
        }
        assert_eq!(PipelineStage::from_index(7), None);
    }

    #[test]
    fn test_next_and_prev_at_the_edges() {
        assert_eq!(PipelineStage::Output.next(), None);
        assert_eq!(PipelineStage::Prompt.prev(), None);
        assert_eq!(PipelineStage::Logits.next(), Some(PipelineStage::Softmax));
        assert_eq!(PipelineStage::Logits.prev(), Some(PipelineStage::Transformer));
        assert!(PipelineStage::Output.is_last());
    }

    #[test]
    fn test_probabilities_sum_to_100() {
        let total: u32 = PROBABILITIES.iter().map(|(_, p)| *p as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_top_logit_is_the_next_word() {
        let best = LOGITS
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(word, _)| *word);
        assert_eq!(best, Some(NEXT_WORD));
        assert_eq!(PROBABILITIES[0].0, NEXT_WORD);
    }

    #[test]
    fn test_tokens_rebuild_the_prompt() {
        assert_eq!(TOKENS.concat(), PROMPT);
    }
}
