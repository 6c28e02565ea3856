use crate::{Question, QuestionType};

use serde_json::json;

#[test]
fn test_retype_resets_options_and_statistics() {
    let mut question = Question::new("1".into(), "Favourite colour?".into(), QuestionType::Alternative);
    question.options = Some(vec!["Red".into(), "Blue".into()]);
    question.statistics = Some(json!({ "Red": 3 }));

    question.retype(QuestionType::MultipleChoice);

    assert_eq!(question.question_type, QuestionType::MultipleChoice);
    assert_eq!(question.options, Some(vec![]));
    assert!(question.statistics.is_none());
    assert_eq!(question.text, "Favourite colour?");
}

#[test]
fn test_question_serializes_type_field() {
    let question = Question::new("7".into(), "Comments".into(), QuestionType::Text);
    let value = serde_json::to_value(&question).unwrap();

    assert_eq!(value["type"], "TEXT");
    assert!(value["options"].is_null());
    assert!(value["statistics"].is_null());
}

#[test]
fn test_option_count() {
    let text = Question::new("1".into(), String::new(), QuestionType::Text);
    let rating = Question::new("2".into(), String::new(), QuestionType::Rating);

    assert_eq!(text.option_count(), 0);
    assert_eq!(rating.option_count(), 5);
}
