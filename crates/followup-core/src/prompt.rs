//! Classification request assembly.
//!
//! The system segment is the taxonomy's instruction text, quoted as-is for every
//! record; the user segment is the record's query, unmodified. Worked examples
//! live inside the instruction text; replaying them as turns is opt-in.

use crate::model::{ChatRequest, ChatTurn, TranscriptRecord};
use crate::taxonomy::Taxonomy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Attach worked examples as alternating user/assistant turns.
    pub few_shot: bool,
}

/// Built once per run; `build` only clones the shared parts.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system: String,
    examples: Vec<ChatTurn>,
}

impl PromptBuilder {
    pub fn new(taxonomy: &Taxonomy, options: PromptOptions) -> Self {
        let examples = if options.few_shot {
            taxonomy
                .worked_examples
                .iter()
                .flat_map(|ex| {
                    [
                        ChatTurn::user(ex.transcript.clone()),
                        ChatTurn::assistant(ex.label.clone()),
                    ]
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            system: taxonomy.instructions.clone(),
            examples,
        }
    }

    pub fn build(&self, record: &TranscriptRecord) -> ChatRequest {
        ChatRequest {
            system: self.system.clone(),
            examples: self.examples.clone(),
            user: record.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChatRole;
    use crate::taxonomy::Axis;

    fn record(query: &str) -> TranscriptRecord {
        TranscriptRecord {
            row: 1,
            query: query.to_string(),
            ground_truth: "4".to_string(),
        }
    }

    #[test]
    fn system_segment_is_constant_and_user_is_the_query() {
        let taxonomy = Axis::Axis2.taxonomy();
        let builder = PromptBuilder::new(&taxonomy, PromptOptions::default());
        let a = builder.build(&record("Q1: X R: Y Q2: Z"));
        let b = builder.build(&record("  another\nquery  "));
        assert_eq!(a.system, taxonomy.instructions);
        assert_eq!(a.system, b.system);
        assert_eq!(a.user, "Q1: X R: Y Q2: Z");
        assert_eq!(b.user, "  another\nquery  ");
        assert!(a.examples.is_empty());
    }

    #[test]
    fn few_shot_replays_worked_examples_as_turns() {
        let taxonomy = Axis::Axis1.taxonomy();
        let builder = PromptBuilder::new(&taxonomy, PromptOptions { few_shot: true });
        let req = builder.build(&record("q"));
        assert_eq!(req.examples.len(), taxonomy.worked_examples.len() * 2);
        assert_eq!(req.examples[0].role, ChatRole::User);
        assert_eq!(req.examples[1].role, ChatRole::Assistant);
        assert_eq!(req.examples[1].content, "Clarifying Queries");
        assert_eq!(req.system, taxonomy.instructions);
    }

    #[test]
    fn few_shot_without_examples_adds_nothing() {
        let taxonomy = Axis::Axis2.taxonomy();
        let builder = PromptBuilder::new(&taxonomy, PromptOptions { few_shot: true });
        assert!(builder.build(&record("q")).examples.is_empty());
    }
}
