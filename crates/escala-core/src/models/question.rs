use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The closed set of answerable question shapes. Every per-type branch
/// in the engine dispatches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionType {
    /// Exactly one option selected.
    SingleChoice,
    /// Zero or more options selected, toggle semantics.
    MultiChoice,
    /// Free text, scored only by professional judgment.
    ShortText,
    /// Dropdown; behaves like SingleChoice.
    Select,
    /// Numeric slider within declared bounds.
    Range,
}

impl QuestionType {
    /// True for the kinds that carry a non-empty option list.
    pub fn requires_options(&self) -> bool {
        matches!(
            self,
            QuestionType::SingleChoice | QuestionType::MultiChoice | QuestionType::Select
        )
    }

    /// True for the kinds a professional must score by hand.
    pub fn is_subjective(&self) -> bool {
        matches!(self, QuestionType::ShortText)
    }
}

/// One selectable option of a choice-kind question.
///
/// `value` only carries scoring meaning under the Baremo strategy;
/// under the other strategies it is informational.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub id: Uuid,
    pub text: String,
    pub value: f64,
    pub order: u32,
    pub is_other: bool,
}

/// Valid numeric window for a Range question. `step` is presentation
/// metadata for the host's slider; submission validity checks bounds only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A single question within a template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    /// Subscale this question belongs to, if the template defines groups.
    pub group_id: Option<Uuid>,
    pub kind: QuestionType,
    pub text: String,
    /// Display position, unique within the owning template.
    pub order: u32,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Present iff `kind` is Range.
    pub bounds: Option<RangeBounds>,
    /// Fixed contribution under EqualWeight; override ceiling for
    /// subjective questions under Baremo.
    pub weight: f64,
    pub options: Vec<ChoiceOption>,
}

impl Question {
    pub fn option_by_id(&self, option_id: Uuid) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
