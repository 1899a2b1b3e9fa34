use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::TemplateError;
use crate::models::{Group, Question, QuestionType, ScoringStrategy};

/// A reusable questionnaire definition: ordered groups, ordered
/// questions, options per question, and the scoring strategy.
///
/// Templates are immutable once built. A test instance clones its
/// template at creation, so editing a template never affects
/// administrations already in flight.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub strategy: ScoringStrategy,
    pub groups: Vec<Group>,
    pub questions: Vec<Question>,
    pub created_at: jiff::Timestamp,
}

impl Template {
    /// Build a template, refusing any definition that violates the
    /// domain invariants. An inconsistent template must never reach a
    /// respondent.
    pub fn new(
        name: impl Into<String>,
        strategy: ScoringStrategy,
        groups: Vec<Group>,
        questions: Vec<Question>,
    ) -> Result<Self, TemplateError> {
        let group_ids: HashSet<Uuid> = groups.iter().map(|g| g.id).collect();
        let mut seen_orders = HashSet::new();

        for question in &questions {
            if !seen_orders.insert(question.order) {
                return Err(TemplateError::DuplicateOrder {
                    order: question.order,
                });
            }
            if question.kind.requires_options() && question.options.is_empty() {
                return Err(TemplateError::MissingOptions {
                    question_id: question.id,
                });
            }
            if !question.kind.requires_options() && !question.options.is_empty() {
                return Err(TemplateError::UnexpectedOptions {
                    question_id: question.id,
                });
            }
            match (question.kind, &question.bounds) {
                (QuestionType::Range, Some(b)) => {
                    if b.min >= b.max || b.step <= 0.0 {
                        return Err(TemplateError::BadRangeBounds {
                            question_id: question.id,
                        });
                    }
                }
                (QuestionType::Range, None) => {
                    return Err(TemplateError::BadRangeBounds {
                        question_id: question.id,
                    });
                }
                (_, Some(_)) => {
                    return Err(TemplateError::BadRangeBounds {
                        question_id: question.id,
                    });
                }
                (_, None) => {}
            }
            if question.weight < 0.0 {
                return Err(TemplateError::NegativeWeight {
                    question_id: question.id,
                });
            }
            if let Some(group_id) = question.group_id
                && !group_ids.contains(&group_id)
            {
                return Err(TemplateError::UnknownGroup {
                    question_id: question.id,
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            strategy,
            groups,
            questions,
            created_at: jiff::Timestamp::now(),
        })
    }

    pub fn question_by_id(&self, question_id: Uuid) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Questions in presentation order: each group's questions in group
    /// declaration order, then ungrouped questions, each run sorted by
    /// `order`.
    pub fn ordered_questions(&self) -> Vec<&Question> {
        let mut ordered = Vec::with_capacity(self.questions.len());
        for group in &self.groups {
            ordered.extend(self.questions_in_group(Some(group.id)));
        }
        ordered.extend(self.questions_in_group(None));
        ordered
    }

    /// The questions of one group (or the ungrouped ones), sorted by
    /// `order`.
    pub fn questions_in_group(&self, group_id: Option<Uuid>) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.group_id == group_id)
            .collect();
        questions.sort_by_key(|q| q.order);
        questions
    }
}
