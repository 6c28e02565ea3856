use crate::{BuilderAction, HistoryState, Question, QuestionType, Questionary};

/// Pure transition function of the questionnaire builder.
///
/// Tracked actions push the previous `present` onto `past` and discard the
/// redo branch, whether or not they changed anything. Unknown question ids
/// and out-of-range indices are tolerated as no-ops.
pub fn reduce(state: &HistoryState, action: BuilderAction) -> HistoryState {
    match action {
        BuilderAction::Undo => undo(state),
        BuilderAction::Redo => redo(state),
        action => {
            let mut next = state.present.clone();
            apply_edit(&mut next, action);

            let mut past = state.past.clone();
            past.push(state.present.clone());

            HistoryState {
                past,
                present: next,
                future: Default::default(),
            }
        }
    }
}

fn undo(state: &HistoryState) -> HistoryState {
    let mut past = state.past.clone();
    let Some(previous) = past.pop() else {
        return state.clone();
    };

    let mut future = state.future.clone();
    future.push_front(state.present.clone());

    HistoryState {
        past,
        present: previous,
        future,
    }
}

fn redo(state: &HistoryState) -> HistoryState {
    let mut future = state.future.clone();
    let Some(next) = future.pop_front() else {
        return state.clone();
    };

    let mut past = state.past.clone();
    past.push(state.present.clone());

    HistoryState {
        past,
        present: next,
        future,
    }
}

fn apply_edit(draft: &mut Questionary, action: BuilderAction) {
    match action {
        BuilderAction::SetTitle(title) => draft.title = title,

        BuilderAction::AddQuestion => {
            let id = draft.allocate_question_id();
            draft
                .questions
                .push(Question::new(id, String::new(), QuestionType::MultipleChoice));
        }

        BuilderAction::UpdateQuestionTitle { id, title } => {
            if let Some(question) = draft.question_mut(&id) {
                question.text = title;
            }
        }

        BuilderAction::UpdateQuestionType { id, question_type } => {
            if let Some(question) = draft.question_mut(&id) {
                question.retype(question_type);
            }
        }

        BuilderAction::AddOption { id } => {
            if let Some(question) = draft
                .question_mut(&id)
                .filter(|q| q.question_type.accepts_custom_options())
            {
                question.options.get_or_insert_with(Vec::new).push(String::new());
            }
        }

        BuilderAction::UpdateOption { id, index, value } => {
            if let Some(slot) = draft
                .question_mut(&id)
                .and_then(|q| q.options.as_mut())
                .and_then(|options| options.get_mut(index))
            {
                *slot = value;
            }
        }

        BuilderAction::RemoveOption { id, index } => {
            if let Some(options) = draft
                .question_mut(&id)
                .and_then(|q| q.options.as_mut())
                .filter(|options| index < options.len())
            {
                options.remove(index);
            }
        }

        BuilderAction::CloneQuestion { id } => {
            if let Some(position) = draft.position_of(&id) {
                let mut copy = draft.questions[position].clone();
                copy.id = draft.allocate_question_id();
                copy.text = format!("Copy of {}", copy.text);
                draft.questions.insert(position + 1, copy);
            }
        }

        BuilderAction::RemoveQuestion { id } => draft.questions.retain(|q| q.id != id),

        BuilderAction::ReorderQuestions(questions) => {
            draft.questions = questions;
            draft.sync_question_counter();
        }

        BuilderAction::MoveQuestion { from, to } => {
            let len = draft.questions.len();
            if from < len && to < len {
                let question = draft.questions.remove(from);
                draft.questions.insert(to, question);
            }
        }

        BuilderAction::SetDepartmentId(department_id) => {
            draft.department_id = Some(department_id);
        }

        BuilderAction::SetValidity { start, end } => {
            draft.options.start_date = start;
            draft.options.end_date = end;
        }

        BuilderAction::SetAnswersLimit(limit) => draft.options.answers_limit = limit,

        BuilderAction::SetAnonymous(anonymous) => draft.options.anonymous = Some(anonymous),


        // History navigation never reaches the editor
        BuilderAction::Undo | BuilderAction::Redo => {}
    }
}
