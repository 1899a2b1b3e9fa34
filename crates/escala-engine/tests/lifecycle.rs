//! Lifecycle derivation through the instance facade: forward
//! transitions, demotion on edit before evaluation, and the terminal
//! lock.

use escala_core::models::{
    AnswerPayload, BandingTable, ChoiceOption, Question, QuestionType, ScoringStrategy, Template,
};
use escala_engine::error::EngineError;
use escala_engine::instance::TestInstance;
use escala_engine::lifecycle::InstanceState;
use escala_engine::scoring::Overrides;
use uuid::Uuid;

fn multi_question(order: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        group_id: None,
        kind: QuestionType::MultiChoice,
        text: format!("question {order}"),
        order,
        required: true,
        placeholder: None,
        bounds: None,
        weight: 1.0,
        options: vec![ChoiceOption {
            id: Uuid::new_v4(),
            text: "yes".to_string(),
            value: 1.0,
            order: 0,
            is_other: false,
        }],
    }
}

fn text_question(order: u32) -> Question {
    Question {
        id: Uuid::new_v4(),
        group_id: None,
        kind: QuestionType::ShortText,
        text: format!("question {order}"),
        order,
        required: true,
        placeholder: None,
        bounds: None,
        weight: 1.0,
        options: Vec::new(),
    }
}

fn two_question_instance() -> (TestInstance, Question, Question) {
    let toggle = multi_question(1);
    let text = text_question(2);
    let template = Template::new(
        "lifecycle",
        ScoringStrategy::EqualWeight,
        Vec::new(),
        vec![toggle.clone(), text.clone()],
    )
    .unwrap();
    (TestInstance::new(&template), toggle, text)
}

#[test]
fn new_instance_starts_not_started() {
    let (instance, _, _) = two_question_instance();
    assert_eq!(instance.state(), InstanceState::NotStarted);
    assert_eq!(instance.progress().percent, 0);
}

#[test]
fn first_answer_moves_to_in_progress_with_a_transition() {
    let (mut instance, toggle, _) = two_question_instance();
    let option = toggle.options[0].id;

    let submission = instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();
    assert_eq!(submission.state, InstanceState::InProgress);
    let transition = submission.transition.expect("state should have changed");
    assert_eq!(transition.from, InstanceState::NotStarted);
    assert_eq!(transition.to, InstanceState::InProgress);
}

#[test]
fn completing_the_form_moves_to_completed() {
    let (mut instance, toggle, text) = two_question_instance();
    let option = toggle.options[0].id;

    instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();
    let submission = instance
        .submit_answer(
            text.id,
            AnswerPayload::Text {
                text: "done".to_string(),
            },
        )
        .unwrap();
    assert_eq!(submission.progress.percent, 100);
    assert_eq!(submission.state, InstanceState::Completed);
    let transition = submission.transition.expect("state should have changed");
    assert_eq!(transition.from, InstanceState::InProgress);
    assert_eq!(transition.to, InstanceState::Completed);
}

#[test]
fn editing_below_full_progress_demotes_to_in_progress() {
    let (mut instance, toggle, text) = two_question_instance();
    let option = toggle.options[0].id;

    instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();
    instance
        .submit_answer(
            text.id,
            AnswerPayload::Text {
                text: "done".to_string(),
            },
        )
        .unwrap();
    assert_eq!(instance.state(), InstanceState::Completed);

    // Toggling the only selected option off un-answers the question.
    let submission = instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();
    assert_eq!(submission.state, InstanceState::InProgress);
    let transition = submission.transition.expect("state should have changed");
    assert_eq!(transition.from, InstanceState::Completed);
    assert_eq!(transition.to, InstanceState::InProgress);
}

#[test]
fn evaluate_before_completion_is_not_ready() {
    let (mut instance, toggle, _) = two_question_instance();
    let option = toggle.options[0].id;
    instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();

    let err = instance
        .evaluate(Overrides::new(), "too early", &BandingTable::default())
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::NotReady {
            state: InstanceState::InProgress
        }
    );
    assert!(instance.evaluation().is_none());
}

#[test]
fn evaluated_instance_rejects_further_answers() {
    let (mut instance, toggle, text) = two_question_instance();
    let option = toggle.options[0].id;
    instance
        .submit_answer(toggle.id, AnswerPayload::Choice { option_id: option })
        .unwrap();
    instance
        .submit_answer(
            text.id,
            AnswerPayload::Text {
                text: "done".to_string(),
            },
        )
        .unwrap();

    let mut overrides = Overrides::new();
    overrides.insert(text.id, 1.0);
    instance
        .evaluate(overrides, "reviewed", &BandingTable::default())
        .unwrap();
    assert_eq!(instance.state(), InstanceState::Evaluated);

    let err = instance
        .submit_answer(
            text.id,
            AnswerPayload::Text {
                text: "late edit".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err, EngineError::InstanceLocked);
}
