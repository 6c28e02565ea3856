use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "qz")]
#[command(about = "Questionize questionnaire builder CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Session token (overrides api.token from config)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
