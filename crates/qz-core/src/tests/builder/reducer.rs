use crate::{BuilderAction, HistoryState, Question, QuestionType, RATING_SCALE, reduce};

use chrono::NaiveDate;

fn draft_with_choice_question() -> HistoryState {
    let mut state = HistoryState::default();
    state.dispatch(BuilderAction::AddQuestion);
    state
}

// =========================================================================
// Scenario
// =========================================================================

#[test]
fn given_default_draft_when_add_retype_undo_undo_redo_then_history_walks_back_and_forth() {
    // Given
    let mut state = HistoryState::default();

    // When / Then
    state.dispatch(BuilderAction::AddQuestion);
    assert_eq!(state.present.questions.len(), 2);
    let added = &state.present.questions[1];
    assert_eq!(added.id, "2");
    assert_eq!(added.question_type, QuestionType::MultipleChoice);
    assert_eq!(added.options, Some(vec![]));

    state.dispatch(BuilderAction::UpdateQuestionType {
        id: "2".into(),
        question_type: QuestionType::Rating,
    });
    assert_eq!(
        state.present.questions[1].options,
        Some(RATING_SCALE.iter().map(|s| s.to_string()).collect())
    );

    state.dispatch(BuilderAction::Undo);
    assert_eq!(state.present.questions.len(), 2);
    assert_eq!(
        state.present.questions[1].question_type,
        QuestionType::MultipleChoice
    );
    assert_eq!(state.present.questions[1].options, Some(vec![]));

    state.dispatch(BuilderAction::Undo);
    assert_eq!(state.present.questions.len(), 1);
    assert_eq!(state.present.questions[0].id, "1");
    assert!(!state.can_undo());

    state.dispatch(BuilderAction::Redo);
    assert_eq!(state.present.questions.len(), 2);
    assert_eq!(state.present.questions[1].id, "2");
    assert_eq!(
        state.present.questions[1].question_type,
        QuestionType::MultipleChoice
    );
    assert!(state.can_redo());
}

// =========================================================================
// History bookkeeping
// =========================================================================

#[test]
fn given_empty_past_when_undo_then_state_unchanged() {
    // Given
    let state = HistoryState::default();

    // When
    let next = reduce(&state, BuilderAction::Undo);

    // Then
    assert_eq!(next, state);
}

#[test]
fn given_empty_future_when_redo_then_state_unchanged() {
    // Given
    let state = draft_with_choice_question();

    // When
    let next = reduce(&state, BuilderAction::Redo);

    // Then
    assert_eq!(next, state);
}

#[test]
fn given_tracked_action_when_reduced_then_previous_present_is_pushed() {
    // Given
    let state = HistoryState::default();

    // When
    let next = reduce(&state, BuilderAction::SetTitle("Onboarding".into()));

    // Then
    assert_eq!(next.present.title, "Onboarding");
    assert_eq!(next.past, vec![state.present.clone()]);
    assert!(next.future.is_empty());
    assert!(state.past.is_empty(), "input state must not be mutated");
}

#[test]
fn given_undone_steps_when_new_edit_then_future_is_discarded() {
    // Given
    let mut state = HistoryState::default();
    state.dispatch(BuilderAction::SetTitle("a".into()));
    state.dispatch(BuilderAction::SetTitle("b".into()));
    state.dispatch(BuilderAction::Undo);
    state.dispatch(BuilderAction::Undo);
    assert_eq!(state.future.len(), 2);

    // When
    state.dispatch(BuilderAction::SetTitle("c".into()));

    // Then
    assert!(state.future.is_empty());
    assert!(!state.can_redo());
    assert_eq!(state.present.title, "c");
}

#[test]
fn given_undo_when_redo_stack_inspected_then_most_recent_is_first() {
    // Given
    let mut state = HistoryState::default();
    state.dispatch(BuilderAction::SetTitle("a".into()));
    state.dispatch(BuilderAction::SetTitle("b".into()));

    // When
    state.dispatch(BuilderAction::Undo);
    state.dispatch(BuilderAction::Undo);

    // Then
    assert_eq!(state.future[0].title, "a");
    assert_eq!(state.future[1].title, "b");
}

#[test]
fn given_missing_id_when_edited_then_step_recorded_but_draft_unchanged() {
    // Given
    let state = HistoryState::default();

    // When
    let next = reduce(
        &state,
        BuilderAction::UpdateQuestionTitle {
            id: "42".into(),
            title: "ghost".into(),
        },
    );

    // Then
    assert_eq!(next.present, state.present);
    assert_eq!(next.past.len(), 1);
}

// =========================================================================
// Question editing
// =========================================================================

#[test]
fn given_question_when_title_updated_then_only_that_question_changes() {
    // Given
    let mut state = draft_with_choice_question();

    // When
    state.dispatch(BuilderAction::UpdateQuestionTitle {
        id: "2".into(),
        title: "Which tools do you use?".into(),
    });

    // Then
    assert_eq!(state.present.questions[0].text, "");
    assert_eq!(state.present.questions[1].text, "Which tools do you use?");
}

#[test]
fn given_rating_question_when_retyped_to_text_then_options_removed() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::UpdateQuestionType {
        id: "2".into(),
        question_type: QuestionType::Rating,
    });

    // When
    state.dispatch(BuilderAction::UpdateQuestionType {
        id: "2".into(),
        question_type: QuestionType::Text,
    });

    // Then
    assert!(state.present.questions[1].options.is_none());
}

#[test]
fn given_choice_question_when_add_option_then_empty_option_appended() {
    // Given
    let mut state = draft_with_choice_question();

    // When
    state.dispatch(BuilderAction::AddOption { id: "2".into() });
    state.dispatch(BuilderAction::AddOption { id: "2".into() });

    // Then
    assert_eq!(
        state.present.questions[1].options,
        Some(vec![String::new(), String::new()])
    );
}

#[test]
fn given_text_or_rating_question_when_add_option_then_ignored() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::UpdateQuestionType {
        id: "2".into(),
        question_type: QuestionType::Rating,
    });

    // When
    state.dispatch(BuilderAction::AddOption { id: "1".into() });
    state.dispatch(BuilderAction::AddOption { id: "2".into() });

    // Then
    assert!(state.present.questions[0].options.is_none());
    assert_eq!(state.present.questions[1].option_count(), 5);
}

#[test]
fn given_option_when_updated_then_value_replaced() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::AddOption { id: "2".into() });
    state.dispatch(BuilderAction::AddOption { id: "2".into() });

    // When
    state.dispatch(BuilderAction::UpdateOption {
        id: "2".into(),
        index: 1,
        value: "Rust".into(),
    });

    // Then
    assert_eq!(
        state.present.questions[1].options,
        Some(vec![String::new(), "Rust".to_string()])
    );
}

#[test]
fn given_no_options_or_bad_index_when_update_option_then_noop() {
    // Given
    let mut state = draft_with_choice_question();
    let before = state.present.clone();

    // When
    state.dispatch(BuilderAction::UpdateOption {
        id: "1".into(),
        index: 0,
        value: "x".into(),
    });
    state.dispatch(BuilderAction::UpdateOption {
        id: "2".into(),
        index: 3,
        value: "x".into(),
    });

    // Then
    assert_eq!(state.present, before);
}

#[test]
fn given_options_when_remove_option_then_index_removed() {
    // Given
    let mut state = draft_with_choice_question();
    for value in ["a", "b", "c"] {
        state.dispatch(BuilderAction::AddOption { id: "2".into() });
        let index = state.present.questions[1].option_count() - 1;
        state.dispatch(BuilderAction::UpdateOption {
            id: "2".into(),
            index,
            value: value.into(),
        });
    }

    // When
    state.dispatch(BuilderAction::RemoveOption {
        id: "2".into(),
        index: 1,
    });
    state.dispatch(BuilderAction::RemoveOption {
        id: "2".into(),
        index: 9,
    });

    // Then
    assert_eq!(
        state.present.questions[1].options,
        Some(vec!["a".to_string(), "c".to_string()])
    );
}

#[test]
fn given_question_when_cloned_then_copy_follows_source_with_fresh_id() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::AddQuestion);
    state.dispatch(BuilderAction::UpdateQuestionTitle {
        id: "2".into(),
        title: "Team size".into(),
    });
    let source = state.present.questions[1].clone();

    // When
    state.dispatch(BuilderAction::CloneQuestion { id: "2".into() });

    // Then
    let ids: Vec<&str> = state.present.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "3"]);
    assert_eq!(state.present.questions[1], source);
    assert_eq!(state.present.questions[2].text, "Copy of Team size");
    assert_eq!(state.present.questions[2].question_type, source.question_type);
}

#[test]
fn given_removed_question_when_new_one_added_then_ids_do_not_collide() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::AddQuestion);
    state.dispatch(BuilderAction::RemoveQuestion { id: "2".into() });

    // When
    state.dispatch(BuilderAction::AddQuestion);

    // Then
    let ids: Vec<&str> = state.present.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn given_missing_id_when_remove_question_then_count_unchanged() {
    // Given
    let mut state = draft_with_choice_question();

    // When
    state.dispatch(BuilderAction::RemoveQuestion { id: "99".into() });

    // Then
    assert_eq!(state.present.questions.len(), 2);
}

#[test]
fn given_new_order_when_reorder_then_list_replaced() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::AddQuestion);
    let mut reordered = state.present.questions.clone();
    reordered.reverse();

    // When
    state.dispatch(BuilderAction::ReorderQuestions(reordered.clone()));

    // Then
    assert_eq!(state.present.questions, reordered);
}

#[test]
fn given_reorder_with_higher_numeric_id_when_add_question_then_counter_follows() {
    // Given
    let mut state = HistoryState::default();
    let mut reordered = state.present.questions.clone();
    reordered.insert(
        0,
        Question::new("9".into(), String::new(), QuestionType::Boolean),
    );
    state.dispatch(BuilderAction::ReorderQuestions(reordered));

    // When
    state.dispatch(BuilderAction::AddQuestion);

    // Then
    let ids: Vec<&str> = state.present.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "1", "10"]);
}

#[test]
fn given_reorder_with_largest_possible_id_when_add_and_clone_then_ids_stay_unique() {
    // Given
    let huge = Question::new(u64::MAX.to_string(), String::new(), QuestionType::Text);
    let almost = Question::new((u64::MAX - 1).to_string(), String::new(), QuestionType::Text);

    // When
    let mut state = reduce(
        &HistoryState::default(),
        BuilderAction::ReorderQuestions(vec![almost, huge.clone()]),
    );
    state.dispatch(BuilderAction::AddQuestion);
    state.dispatch(BuilderAction::CloneQuestion { id: huge.id.clone() });
    state.dispatch(BuilderAction::AddQuestion);

    // Then
    let mut ids: Vec<&str> = state.present.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(state.present.next_question_id, u64::MAX);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn given_move_question_when_in_range_then_question_moved() {
    // Given
    let mut state = draft_with_choice_question();
    state.dispatch(BuilderAction::AddQuestion);

    // When
    state.dispatch(BuilderAction::MoveQuestion { from: 0, to: 2 });
    state.dispatch(BuilderAction::MoveQuestion { from: 0, to: 7 });

    // Then
    let ids: Vec<&str> = state.present.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
}

// =========================================================================
// Draft settings
// =========================================================================

#[test]
fn given_settings_actions_when_dispatched_then_options_updated() {
    // Given
    let mut state = HistoryState::default();
    let start = NaiveDate::from_ymd_opt(2026, 5, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 5, 15)
        .unwrap()
        .and_hms_opt(17, 30, 0)
        .unwrap();

    // When
    state.dispatch_all([
        BuilderAction::SetDepartmentId(12),
        BuilderAction::SetValidity {
            start: Some(start),
            end: Some(end),
        },
        BuilderAction::SetAnswersLimit(Some(40)),
        BuilderAction::SetAnonymous(false),
    ]);

    // Then
    let draft = &state.present;
    assert_eq!(draft.department_id, Some(12));
    assert_eq!(draft.options.validity(), Some((start, end)));
    assert_eq!(draft.options.answers_limit, Some(40));
    assert!(!draft.options.is_anonymous());
    assert_eq!(state.past.len(), 4);
}
