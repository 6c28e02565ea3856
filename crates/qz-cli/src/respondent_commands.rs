use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RespondentCommands {
    /// List members of a department
    List {
        #[arg(long)]
        department_id: i64,
    },
}
