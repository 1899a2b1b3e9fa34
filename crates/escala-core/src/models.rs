pub mod answer;
pub mod banding;
pub mod group;
pub mod question;
pub mod strategy;
pub mod template;

pub use answer::{Answer, AnswerPayload};
pub use banding::{Band, BandingTable};
pub use group::Group;
pub use question::{ChoiceOption, Question, QuestionType, RangeBounds};
pub use strategy::ScoringStrategy;
pub use template::Template;
