//! Tests for the question sequencer.

use super::*;
use crate::error::CrxError;
use crate::features::Feature;
use crate::test_support::{BrokenInput, ScriptedInput};

fn all_questions() -> Vec<Question> {
    Question::sequence(&Feature::ALL)
}

fn completed(outcome: Outcome) -> ConfigRecord {
    match outcome {
        Outcome::Completed(record) => record,
        Outcome::Aborted(reason) => panic!("sequence aborted: {:?}", reason),
    }
}

#[test]
fn test_question_sequence_order() {
    let keys: Vec<_> = all_questions().iter().map(|q| q.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "description",
            "background",
            "contentScripts",
            "popup",
            "options"
        ]
    );
}

#[test]
fn test_question_sequence_without_content_scripts() {
    let questions = Question::sequence(&[Feature::Background, Feature::Popup, Feature::Options]);
    let prompts: Vec<_> = questions.iter().map(|q| q.prompt).collect();
    assert_eq!(
        prompts,
        vec![
            "Enter the name of your extension: ",
            "Enter the description of your extension: ",
            "Include background service worker? (y/n): ",
            "Include popup? (y/n): ",
            "Include options page? (y/n): ",
        ]
    );
}

#[test]
fn test_completed_record_has_one_entry_per_question() {
    let questions = all_questions();
    let mut input = ScriptedInput::new(["My Tool", "Does things", "y", "n", "y", "n"]);

    let record = completed(run_sequence(&questions, &mut input).unwrap());

    assert_eq!(record.len(), questions.len());
    for question in &questions {
        assert!(record.contains(question.key), "missing {:?}", question.key);
    }
    assert_eq!(record.name(), "My Tool");
    assert_eq!(record.description(), "Does things");
    assert_eq!(
        record.enabled_features(),
        vec![Feature::Background, Feature::Popup]
    );
    assert!(input.closed);
}

#[test]
fn test_prompts_are_asked_in_order() {
    let questions = all_questions();
    let mut input = ScriptedInput::new(["a", "b", "n", "n", "n", "n"]);

    run_sequence(&questions, &mut input).unwrap();

    let expected: Vec<_> = questions.iter().map(|q| q.prompt.to_string()).collect();
    assert_eq!(input.prompts, expected);
}

#[test]
fn test_flag_answers_require_exact_affirmative() {
    let cases = [
        ("y", true),
        ("Y", true),
        ("  y  ", true),
        ("Y ", true),
        ("", false),
        ("n", false),
        ("yes", false),
        ("Yes", false),
        ("yy", false),
        ("1", false),
    ];

    let questions = Question::sequence(&[Feature::Popup]);
    for (raw, expected) in cases {
        let mut input = ScriptedInput::new(["Demo", "", raw]);
        let record = completed(run_sequence(&questions, &mut input).unwrap());
        assert_eq!(
            record.get(QuestionKey::Feature(Feature::Popup)),
            Some(&Answer::Flag(expected)),
            "answer {:?}",
            raw
        );
    }
}

#[test]
fn test_text_answers_keep_case_and_spacing() {
    let questions = Question::sequence(&[]);
    let mut input = ScriptedInput::new(["  My   COOL Tool ", "  A  description "]);

    let record = completed(run_sequence(&questions, &mut input).unwrap());

    assert_eq!(record.name(), "  My   COOL Tool ");
    assert_eq!(record.description(), "  A  description ");
}

#[test]
fn test_empty_description_is_accepted() {
    let questions = Question::sequence(&[]);
    let mut input = ScriptedInput::new(["Demo", ""]);

    let record = completed(run_sequence(&questions, &mut input).unwrap());

    assert_eq!(record.description(), "");
    assert!(record.contains(QuestionKey::Description));
}

#[test]
fn test_blank_name_aborts_immediately() {
    for blank in ["", "   ", "\t"] {
        let questions = all_questions();
        let mut input = ScriptedInput::new([blank, "desc", "y", "y", "y", "y"]);

        let outcome = run_sequence(&questions, &mut input).unwrap();

        assert_eq!(outcome, Outcome::Aborted(Abort::MissingRequiredField("name")));
        assert_eq!(input.prompts.len(), 1, "no question after the name");
        assert!(input.closed);
    }
}

#[test]
fn test_end_of_input_at_name_aborts() {
    let questions = all_questions();
    let mut input = ScriptedInput::new(Vec::<String>::new());

    let outcome = run_sequence(&questions, &mut input).unwrap();

    assert!(matches!(outcome, Outcome::Aborted(_)));
}

#[test]
fn test_end_of_input_after_name_defaults_flags_to_false() {
    let questions = all_questions();
    let mut input = ScriptedInput::new(["Demo"]);

    let record = completed(run_sequence(&questions, &mut input).unwrap());

    assert_eq!(record.len(), questions.len());
    assert!(record.enabled_features().is_empty());
}

#[test]
fn test_read_error_is_input_error() {
    let questions = all_questions();
    let err = run_sequence(&questions, &mut BrokenInput).unwrap_err();
    assert!(matches!(err, CrxError::InputError(_)));
}

#[test]
fn test_abort_message() {
    let abort = Abort::MissingRequiredField("name");
    assert_eq!(
        abort.to_string(),
        "(Warning) Extension name is required. Please run the CLI again and enter the correct details."
    );
}

#[test]
fn test_sequencer_state_transitions() {
    let questions = Question::sequence(&[Feature::Background]);
    let mut sequencer = Sequencer::new(&questions);

    assert_eq!(sequencer.state(), SequenceState::AwaitingQuestion(0));
    assert_eq!(sequencer.current().map(|q| q.key), Some(QuestionKey::Name));
    assert_eq!(sequencer.answer("Demo"), SequenceState::AwaitingQuestion(1));
    assert_eq!(sequencer.answer("desc"), SequenceState::AwaitingQuestion(2));
    assert_eq!(sequencer.answer("y"), SequenceState::Completed);
    assert!(sequencer.current().is_none());

    // Terminal states ignore further answers.
    assert_eq!(sequencer.answer("n"), SequenceState::Completed);
    assert!(sequencer.into_record().is_enabled(Feature::Background));
}

#[test]
fn test_sequencer_aborted_is_terminal() {
    let questions = all_questions();
    let mut sequencer = Sequencer::new(&questions);

    let aborted = SequenceState::Aborted(Abort::MissingRequiredField("name"));
    assert_eq!(sequencer.answer(" "), aborted);
    assert_eq!(sequencer.answer("Demo"), aborted);
    assert!(sequencer.into_record().is_empty());
}

#[test]
fn test_name_check_only_applies_to_name_question() {
    // A blank answer anywhere else is stored, not rejected.
    let questions = all_questions();
    let mut sequencer = Sequencer::new(&questions);

    sequencer.answer("Demo");
    assert_eq!(sequencer.answer(""), SequenceState::AwaitingQuestion(2));
    assert_eq!(sequencer.answer(""), SequenceState::AwaitingQuestion(3));
}

#[test]
fn test_empty_question_list_completes_immediately() {
    let mut input = ScriptedInput::new(["unused"]);
    let record = completed(run_sequence(&[], &mut input).unwrap());
    assert!(record.is_empty());
    assert!(input.prompts.is_empty());
}
