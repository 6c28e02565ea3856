//! qz - Questionize questionnaire builder CLI
//!
//! Replays builder action scripts and submits the resulting drafts to the
//! Questionize backend. Command output is JSON on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Preview a draft
//! qz draft apply --actions survey.json --pretty
//!
//! # Submit it to department 7 with two respondents and a banner
//! qz draft submit --actions survey.json --department-id 7 --members 1,2 \
//!     --start 2026-06-01T09:00:00 --end 2026-06-30T18:00:00 --banner banner.png
//!
//! # Active questionnaires of department 7
//! qz questionaries list --department-id 7 --active
//! ```

mod cli;
mod commands;
mod draft_commands;
mod error;
mod logger;
mod questionary_commands;
mod respondent_commands;
mod script;


use crate::{
    cli::Cli,
    commands::Commands,
    draft_commands::DraftCommands,
    error::{CliError, Result as CliResult},
    questionary_commands::QuestionaryCommands,
    respondent_commands::RespondentCommands,
    script::{DraftView, load_actions, replay, select_respondents},
};

use qz_client::{
    ApiClient, BannerImage, DraftSubmitter, QuestionaryApi, QuestionaryQuery, Session,
    SubmissionRequest, TitleMatchResolver, ValidityWindow,
};
use qz_config::Config;
use qz_core::BuilderAction;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match prepare(&cli) {
        Ok((config, client)) => run(cli.command, &config, &client).await,
        Err(e) => Err(e),
    };

    let output = result.and_then(|value| {
        let json = if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        json.map_err(CliError::from)
    });

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load config, apply flag overrides, start logging and build the client.
fn prepare(cli: &Cli) -> CliResult<(Config, ApiClient)> {
    let mut config = Config::load()?;
    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    if let Some(ref token) = cli.token {
        config.api.token = Some(token.clone());
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let session = match config.api.token {
        Some(ref token) => Session::with_token(token.as_str()),
        None => Session::anonymous(),
    };
    let client = ApiClient::from_config(&config.api, &config.retry, session)?;

    Ok((config, client))
}

async fn run(command: Commands, config: &Config, client: &ApiClient) -> CliResult<Value> {
    match command {
        Commands::Draft { action } => match action {
            DraftCommands::Apply { actions } => {
                let history = replay(load_actions(&actions)?);
                Ok(serde_json::to_value(DraftView::of(&history))?)
            }
            DraftCommands::Submit {
                actions,
                department_id,
                members,
                start,
                end,
                banner,
            } => {
                let mut history = replay(load_actions(&actions)?);
                history.dispatch(BuilderAction::SetDepartmentId(department_id));

                let (respondents, unknown) =
                    select_respondents(client.list_respondents(department_id).await?, &members);
                if !unknown.is_empty() {
                    warn!(
                        "Ignoring ids that are not members of department {}: {:?}",
                        department_id, unknown
                    );
                }

                let mut request = SubmissionRequest::new(&history.present, &respondents);
                if let (Some(start), Some(end)) = (start, end) {
                    request = request.validity(ValidityWindow::new(start, end));
                }
                if let Some(ref path) = banner {
                    request = request.banner(read_banner(path)?);
                }

                let outcome = DraftSubmitter::new(client)
                    .with_resolver(TitleMatchResolver::new(config.api.page_size))
                    .submit(request)
                    .await?;
                match outcome.warning() {
                    Some(warning) => warn!("{}", warning),
                    None => info!("Submission complete"),
                }

                Ok(serde_json::to_value(&outcome)?)
            }
        },

        Commands::Respondents { action } => match action {
            RespondentCommands::List { department_id } => {
                let respondents = client.list_respondents(department_id).await?;
                Ok(serde_json::to_value(&respondents)?)
            }
        },

        Commands::Questionaries { action } => match action {
            QuestionaryCommands::List {
                department_id,
                active,
                page,
            } => {
                let query = QuestionaryQuery::for_department(department_id, config.api.page_size)
                    .page(page)
                    .active(active.then_some(true));
                let listing = client.list_questionaries(&query).await?;
                Ok(serde_json::to_value(&listing)?)
            }
        },
    }
}

fn read_banner(path: &Path) -> CliResult<BannerImage> {
    let bytes = std::fs::read(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("banner"));

    Ok(BannerImage::new(file_name, bytes))
}
