use crate::{Question, QuestionType, QuestionaryOptions};

use serde::{Deserialize, Serialize};

/// Draft questionnaire edited client-side before submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionary {
    /// Department the questionnaire is bound to
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: QuestionaryOptions,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Monotonic source of question ids; never reused within a draft
    #[serde(default = "first_free_id")]
    pub next_question_id: u64,
}

fn first_free_id() -> u64 {
    1
}

impl Default for Questionary {
    /// A fresh draft holds a single blank TEXT question.
    fn default() -> Self {
        Self {
            department_id: None,
            title: String::new(),
            options: QuestionaryOptions::default(),
            questions: vec![Question::new(
                String::from("1"),
                String::new(),
                QuestionType::Text,
            )],
            next_question_id: 2,
        }
    }
}

impl Questionary {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn question_mut(&mut self, id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Hand out the next question id and advance the counter.
    ///
    /// Once the counter is exhausted the lowest numeric id not present in the
    /// draft is used instead.
    pub fn allocate_question_id(&mut self) -> String {
        if let Some(next) = self.next_question_id.checked_add(1) {
            let id = self.next_question_id;
            self.next_question_id = next;
            return id.to_string();
        }

        // At most `len` ids are taken, so 1..=len+1 always holds a free one
        let upper = (self.questions.len() as u64).saturating_add(1);
        (1..=upper)
            .map(|n| n.to_string())
            .find(|id| self.question(id).is_none())
            .unwrap_or_else(|| upper.to_string())
    }

    /// Keep the counter ahead of every numeric id currently in the draft.
    pub fn sync_question_counter(&mut self) {
        let highest = self
            .questions
            .iter()
            .filter_map(|q| q.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_question_id = self.next_question_id.max(highest.saturating_add(1));
    }
}
