use crate::{
    draft_commands::DraftCommands, questionary_commands::QuestionaryCommands,
    respondent_commands::RespondentCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build and submit questionnaire drafts
    Draft {
        #[command(subcommand)]
        action: DraftCommands,
    },

    /// Department members available as respondents
    Respondents {
        #[command(subcommand)]
        action: RespondentCommands,
    },

    /// Existing questionnaires
    Questionaries {
        #[command(subcommand)]
        action: QuestionaryCommands,
    },
}
