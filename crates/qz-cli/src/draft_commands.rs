use crate::script::parse_backend_datetime;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DraftCommands {
    /// Replay a builder action script and print the resulting draft
    Apply {
        /// JSON array of builder actions
        #[arg(long)]
        actions: PathBuf,
    },

    /// Replay a builder action script and submit the result
    Submit {
        /// JSON array of builder actions
        #[arg(long)]
        actions: PathBuf,

        /// Department whose members answer the questionnaire
        #[arg(long)]
        department_id: i64,

        /// Member ids to select as respondents (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<i64>,

        /// Start of the answering period, e.g. 2026-06-01T09:00:00
        #[arg(long, value_parser = parse_backend_datetime, requires = "end")]
        start: Option<NaiveDateTime>,

        /// End of the answering period
        #[arg(long, value_parser = parse_backend_datetime, requires = "start")]
        end: Option<NaiveDateTime>,

        /// Banner image to attach after creation
        #[arg(long)]
        banner: Option<PathBuf>,
    },
}
