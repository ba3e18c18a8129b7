// Primer animation registry
// Maps concept ids to freshly constructed animation engines

use std::str::FromStr;

use primer_utils::catalog::ConceptId;

use super::concepts::*;
use super::engine::AnimationEngine;

/// New engine for a concept, at step 0
pub fn animation_for(id: ConceptId) -> Box<dyn AnimationEngine> {
    match id {
        ConceptId::Automation => Box::new(AutomationAnimation::new()),
        ConceptId::RuleBased => Box::new(RuleBasedAnimation::new()),
        ConceptId::Ai => Box::new(AiAnimation::new()),
        ConceptId::Input => Box::new(InputAnimation::new()),
        ConceptId::TrainingData => Box::new(TrainingDataAnimation::new()),
        ConceptId::AiModel => Box::new(AiModelAnimation::new()),
        ConceptId::AiPipeline => Box::new(PipelineAnimation::new()),
        ConceptId::PredictionModels => Box::new(PredictionAnimation::new()),
        ConceptId::LanguageModels => Box::new(LanguageAnimation::new()),
        ConceptId::ComputerVision => Box::new(VisionAnimation::new()),
        ConceptId::SearchSystems => Box::new(SearchAnimation::new()),
        ConceptId::Chatbots => Box::new(ChatbotsAnimation::new()),
        ConceptId::GenerativeAi => Box::new(GenerativeAnimation::new()),
        ConceptId::AgenticAi => Box::new(AgenticAnimation::new()),
        ConceptId::AiEngineer => Box::new(EngineerAnimation::new()),
    }
}

/// Engine for a string key; `None` when nothing is registered under it
pub fn animation_for_key(key: &str) -> Option<Box<dyn AnimationEngine>> {
    ConceptId::from_str(key).ok().map(animation_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_utils::catalog::catalog;

    #[test]
    fn test_every_concept_has_an_animation() {
        for concept in catalog().concepts() {
            let anim = animation_for(concept.id);
            assert_eq!(anim.concept(), concept.id);
            assert_eq!(anim.step(), 0);
            assert!(!anim.render(0).title.is_empty());
        }
    }

    #[test]
    fn test_unknown_key_has_no_animation() {
        assert!(animation_for_key("quantum").is_none());
        let anim = animation_for_key("training-data").unwrap();
        assert_eq!(anim.concept(), ConceptId::TrainingData);
    }

    #[test]
    fn test_step_caps() {
        let caps = [
            (ConceptId::Automation, 4),
            (ConceptId::Ai, 5),
            (ConceptId::Input, 4),
            (ConceptId::TrainingData, 5),
            (ConceptId::AiModel, 4),
            (ConceptId::AiPipeline, 5),
            (ConceptId::PredictionModels, 5),
            (ConceptId::LanguageModels, 5),
            (ConceptId::ComputerVision, 5),
            (ConceptId::SearchSystems, 5),
            (ConceptId::Chatbots, 6),
            (ConceptId::GenerativeAi, 6),
            (ConceptId::AgenticAi, 7),
            (ConceptId::AiEngineer, 6),
        ];
        for (id, cap) in caps {
            let mut anim = animation_for(id);
            for _ in 0..20 {
                anim.advance();
            }
            assert_eq!(anim.step(), cap, "{id}");
            assert!(anim.is_complete(), "{id}");
        }

        // the thermostat cycles forever
        let mut rules = animation_for(ConceptId::RuleBased);
        for _ in 0..20 {
            rules.advance();
        }
        assert!(!rules.is_complete());
        assert!(rules.step() <= 2);
    }

    #[test]
    fn test_last_step_shows_summary() {
        for concept in catalog().concepts() {
            if concept.id == ConceptId::RuleBased {
                continue;
            }
            let mut anim = animation_for(concept.id);
            while anim.advance() {}
            assert!(anim.render(0).contains("🎯"), "{} has no summary", concept.id);
        }
    }

    #[test]
    fn test_reset_returns_to_initial_frame() {
        for concept in catalog().concepts() {
            let mut anim = animation_for(concept.id);
            let initial = anim.render(0).to_text();
            for _ in 0..3 {
                anim.advance();
                while anim.tick_detail() {}
            }
            anim.reset();
            assert_eq!(anim.step(), 0);
            assert_eq!(anim.detail_interval(), None, "{}", concept.id);
            assert_eq!(anim.render(0).to_text(), initial, "{}", concept.id);
        }
    }
}
