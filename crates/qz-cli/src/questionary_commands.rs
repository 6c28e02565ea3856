use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum QuestionaryCommands {
    /// List questionnaires of a department
    List {
        #[arg(long)]
        department_id: i64,

        /// Only active questionnaires
        #[arg(long)]
        active: bool,

        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
}
