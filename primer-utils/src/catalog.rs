// Primer catalog
//
// The concepts taught by Primer, in learning order, and the categories they
// are grouped into. Built once and never mutated.

use std::str::FromStr;

use lazy_static::lazy_static;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

use crate::errors::{PrimerError, PrimerResult};
use crate::palette::CategoryColor;

/// Identifier of a concept. Doubles as the lookup key into the icon and
/// animation registries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter, EnumString,
    strum_macros::Display, strum_macros::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptId {
    #[strum(to_string = "automation")]
    Automation,
    #[strum(to_string = "rule-based")]
    RuleBased,
    #[strum(to_string = "ai")]
    Ai,
    #[strum(to_string = "input")]
    Input,
    #[strum(to_string = "training-data")]
    TrainingData,
    #[strum(to_string = "ai-model")]
    AiModel,
    #[strum(to_string = "ai-pipeline")]
    AiPipeline,
    #[strum(to_string = "prediction-models")]
    PredictionModels,
    #[strum(to_string = "language-models")]
    LanguageModels,
    #[strum(to_string = "computer-vision")]
    ComputerVision,
    #[strum(to_string = "search-systems")]
    SearchSystems,
    #[strum(to_string = "chatbots")]
    Chatbots,
    #[strum(to_string = "generative-ai")]
    GenerativeAi,
    #[strum(to_string = "agentic-ai")]
    AgenticAi,
    #[strum(to_string = "ai-engineer")]
    AiEngineer,
}

impl ConceptId {
    /// Resolve a key given by the user, listing the valid keys on failure.
    pub fn parse(key: &str) -> PrimerResult<Self> {
        ConceptId::from_str(key.trim()).map_err(|_| PrimerError::UnknownConcept {
            key: key.to_string(),
            valid: ConceptId::iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Descriptive tag for the style of an animation. Never drives behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnimationKind {
    Comparison,
    Flow,
    Visual,
    Example,
    Process,
}

/// Category a concept belongs to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Foundation,
    CoreComponents,
    ModelTypes,
    Applications,
    Career,
}

impl CategoryId {
    pub fn name(&self) -> &'static str {
        match self {
            CategoryId::Foundation => "Foundation",
            CategoryId::CoreComponents => "Core Components",
            CategoryId::ModelTypes => "Model Types",
            CategoryId::Applications => "Applications",
            CategoryId::Career => "Career",
        }
    }

    pub fn color(&self) -> CategoryColor {
        match self {
            CategoryId::Foundation => CategoryColor::Coral,
            CategoryId::CoreComponents => CategoryColor::Teal,
            CategoryId::ModelTypes => CategoryColor::Purple,
            CategoryId::Applications => CategoryColor::Amber,
            CategoryId::Career => CategoryColor::Coral,
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub id: ConceptId,
    pub term: &'static str,
    pub definition: &'static str,
    /// Emoji shown when no registry glyph is available
    pub icon: &'static str,
    pub category: CategoryId,
    /// Learning order; categories list their concepts by ascending order
    pub order: u32,
    pub button_text: &'static str,
    pub animation_kind: AnimationKind,
    pub examples: &'static [&'static str],
}

/// A named group of concepts
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub color: CategoryColor,
    pub concepts: Vec<&'static Concept>,
}

/// One entry per `ConceptId`, in declaration order, so an id is its index
static CONCEPTS: [Concept; 15] = [
    // Foundation: what is AI and what is not
    Concept {
        id: ConceptId::Automation,
        term: "Automation",
        definition: "A system that follows fixed instructions or \"if-then\" rules to produce the same output every time. It does not learn or adapt from data.",
        icon: "⚙️",
        category: CategoryId::Foundation,
        order: 1,
        button_text: "See Automation",
        animation_kind: AnimationKind::Comparison,
        examples: &[
            "A washing machine always runs the same cycle",
            "A calculator gives the same answer for 2+2",
        ],
    },
    Concept {
        id: ConceptId::RuleBased,
        term: "Rule-Based Systems",
        definition: "Systems that operate on fixed \"if-then\" rules and do not learn. Examples include calculators and old traffic lights. They are considered automation, not AI.",
        icon: "📋",
        category: CategoryId::Foundation,
        order: 2,
        button_text: "Explore Rules",
        animation_kind: AnimationKind::Flow,
        examples: &["If light is red, then stop", "If password wrong, then show error"],
    },
    Concept {
        id: ConceptId::Ai,
        term: "AI (Artificial Intelligence)",
        definition: "An umbrella term for systems that learn patterns from data to make predictions or decisions, as opposed to simply following fixed instructions.",
        icon: "🧠",
        category: CategoryId::Foundation,
        order: 3,
        button_text: "Discover AI",
        animation_kind: AnimationKind::Visual,
        examples: &[
            "Learning to recognize cats from thousands of photos",
            "Predicting weather from past patterns",
        ],
    },
    // Core components: the building blocks
    Concept {
        id: ConceptId::Input,
        term: "Input",
        definition: "The data fed into an AI system for processing. This can be in the form of images, text, or numbers.",
        icon: "📥",
        category: CategoryId::CoreComponents,
        order: 4,
        button_text: "See Inputs",
        animation_kind: AnimationKind::Example,
        examples: &[
            "A photo you upload",
            "A question you type",
            "Temperature readings from sensors",
        ],
    },
    Concept {
        id: ConceptId::TrainingData,
        term: "Training Data",
        definition: "The collection of examples that an AI model learns from. For example, a Computer Vision model would be trained on a photo database, while a Language Model might use a news database.",
        icon: "📚",
        category: CategoryId::CoreComponents,
        order: 5,
        button_text: "Start Training",
        animation_kind: AnimationKind::Process,
        examples: &[
            "Millions of cat and dog photos with labels",
            "Thousands of medical X-rays reviewed by doctors",
        ],
    },
    Concept {
        id: ConceptId::AiModel,
        term: "AI Model",
        definition: "The \"brain\" of the AI system that processes data. Different models are used for different tasks, such as Computer Vision, Language Models, and Prediction Models.",
        icon: "🤖",
        category: CategoryId::CoreComponents,
        order: 6,
        button_text: "Meet the Model",
        animation_kind: AnimationKind::Visual,
        examples: &["GPT for understanding text", "YOLO for detecting objects in images"],
    },
    Concept {
        id: ConceptId::AiPipeline,
        term: "AI Pipeline",
        definition: "The fundamental structure of every AI system, consisting of three key ingredients: Input, an AI Model, and Training Data.",
        icon: "🔄",
        category: CategoryId::CoreComponents,
        order: 7,
        button_text: "Build Pipeline",
        animation_kind: AnimationKind::Flow,
        examples: &[
            "Photo → Image Model → \"This is a cat\"",
            "Question → Language Model → Answer",
        ],
    },
    // Model types
    Concept {
        id: ConceptId::PredictionModels,
        term: "Prediction Models",
        definition: "A type of AI model that finds patterns in historical numerical data to forecast future outcomes. It is used to predict events like wildfires, floods, and energy usage patterns.",
        icon: "📊",
        category: CategoryId::ModelTypes,
        order: 8,
        button_text: "Make Predictions",
        animation_kind: AnimationKind::Process,
        examples: &[
            "Predicting tomorrow's weather",
            "Forecasting stock prices",
            "Estimating traffic congestion",
        ],
    },
    Concept {
        id: ConceptId::LanguageModels,
        term: "Language Models",
        definition: "A type of AI model that is taught to \"read and write\" by processing text. Applications include fake news detection, translation services, and chatbots.",
        icon: "💬",
        category: CategoryId::ModelTypes,
        order: 9,
        button_text: "Learn Language",
        animation_kind: AnimationKind::Example,
        examples: &[
            "ChatGPT answering questions",
            "Google Translate",
            "Auto-complete on your phone",
        ],
    },
    Concept {
        id: ConceptId::ComputerVision,
        term: "Computer Vision",
        definition: "A type of AI model that is taught to \"see\" by processing images. It is used for tasks like detecting plastic in oceans, identifying tumors in X-rays, and enabling self-driving cars.",
        icon: "👁️",
        category: CategoryId::ModelTypes,
        order: 11,
        button_text: "See Vision",
        animation_kind: AnimationKind::Visual,
        examples: &[
            "Face unlock on phones",
            "Self-driving cars detecting pedestrians",
            "Medical scan analysis",
        ],
    },
    // Applications
    Concept {
        id: ConceptId::SearchSystems,
        term: "Search / Retrieval Systems",
        definition: "Systems whose main job is to find and retrieve existing information. Modern search engines use AI internally to rank results and understand user intent but are primarily \"finders,\" not \"creators.\"",
        icon: "🔍",
        category: CategoryId::Applications,
        order: 11,
        button_text: "Try Search",
        animation_kind: AnimationKind::Flow,
        examples: &[
            "Google Search finding relevant websites",
            "Finding songs with Shazam",
        ],
    },
    Concept {
        id: ConceptId::Chatbots,
        term: "Chatbots",
        definition: "AI systems, often using Language Models, designed to interact with users and answer questions. AI chatbots can solve up to 80% of customer questions instantly.",
        icon: "🤝",
        category: CategoryId::Applications,
        order: 12,
        button_text: "Chat Now",
        animation_kind: AnimationKind::Example,
        examples: &[
            "Customer support on websites",
            "Siri, Alexa, and Google Assistant",
            "ChatGPT",
        ],
    },
    Concept {
        id: ConceptId::GenerativeAi,
        term: "Generative AI",
        definition: "A type of AI that creates new, original content such as text, images, audio, or code based on patterns it has learned from training data.",
        icon: "✨",
        category: CategoryId::Applications,
        order: 13,
        button_text: "Create Magic",
        animation_kind: AnimationKind::Visual,
        examples: &[
            "DALL-E creating images from descriptions",
            "ChatGPT writing stories",
            "AI composing music",
        ],
    },
    Concept {
        id: ConceptId::AgenticAi,
        term: "Agentic AI",
        definition: "An emerging type of AI that can plan steps and take actions across different applications and tools to complete a task for a user. It is not yet fully reliable and requires human safeguards.",
        icon: "🚀",
        category: CategoryId::Applications,
        order: 14,
        button_text: "Meet Agents",
        animation_kind: AnimationKind::Process,
        examples: &[
            "AI assistant booking flights and hotels",
            "AI that can browse the web and fill forms",
        ],
    },
    // Career
    Concept {
        id: ConceptId::AiEngineer,
        term: "AI Engineer",
        definition: "A professional who designs AI pipelines to solve real-world problems. The career has extremely high worldwide demand with salaries of $120,000+ per year.",
        icon: "👩‍💻",
        category: CategoryId::Career,
        order: 15,
        button_text: "Explore Career",
        animation_kind: AnimationKind::Flow,
        examples: &[
            "Building recommendation systems for Netflix",
            "Creating medical diagnosis tools",
            "Developing autonomous vehicles",
        ],
    },
];

lazy_static! {
    static ref CATALOG: Catalog = Catalog::build(&CONCEPTS);
}

/// Process-wide catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// The flat concept list plus the derived per-category grouping
#[derive(Debug)]
pub struct Catalog {
    concepts: &'static [Concept; 15],
    categories: Vec<Category>,
}

impl Catalog {
    fn build(concepts: &'static [Concept; 15]) -> Self {
        let categories = CategoryId::iter()
            .map(|id| {
                let mut members: Vec<&'static Concept> =
                    concepts.iter().filter(|c| c.category == id).collect();
                // stable: equal ranks keep catalog order
                members.sort_by_key(|c| c.order);
                Category {
                    id,
                    name: id.name(),
                    color: id.color(),
                    concepts: members,
                }
            })
            .collect();

        Self {
            concepts,
            categories,
        }
    }

    pub fn concepts(&self) -> &'static [Concept] {
        self.concepts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Get concept by id. The table holds every `ConceptId` at its own index.
    pub fn get(&self, id: ConceptId) -> &'static Concept {
        &self.concepts[id as usize]
    }

    /// Get concept by string key (None for unknown keys)
    pub fn lookup(&self, key: &str) -> Option<&'static Concept> {
        ConceptId::from_str(key).ok().map(|id| self.get(id))
    }
}
