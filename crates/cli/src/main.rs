//! `ghprojects` entry point.
//!
//! This binary is the composition root:
//!
//! 1. **Parse configuration** from flags and environment (`GITHUB_TOKEN`,
//!    `GITHUB_GRAPHQL_URL`, `GHPROJECTS_TIMEOUT_SECS`).
//! 2. **Wire observability** through [`telemetry::init`].
//! 3. **Construct infrastructure** with [`github::connect`].
//! 4. **Dispatch** the subcommand to the engine and print the rendered
//!    result, or a single `Error: ... Details: ...` line on stderr and a
//!    non-zero exit.

mod args;
mod render;
mod telemetry;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use github::{GatewayConfig, GraphQlGateway};
use projects::{
    FieldId, InputValue, InvocationId, ItemId, ItemQuery, ItemStateFilter, ProjectSettingsUpdate,
    ProjectsEngine, ProjectsError, ProjectsResult,
};
use tracing::{debug, info_span, Instrument};

use crate::args::{Cli, Command};

fn engine(cli: &Cli) -> anyhow::Result<ProjectsEngine<GraphQlGateway>> {
    let mut config =
        GatewayConfig::new(cli.token.clone()).context("cannot configure GitHub access")?;
    if let Some(url) = &cli.api_url {
        config = config.with_endpoint(url.clone());
    }
    if let Some(timeout) = cli.timeout() {
        config = config.with_timeout(timeout);
    }
    Ok(github::connect(config))
}

fn item_id(raw: &str) -> ProjectsResult<ItemId> {
    ItemId::new(raw).ok_or_else(|| ProjectsError::InvalidInput {
        message: "item id must not be empty".to_string(),
    })
}

fn field_id(raw: &str) -> ProjectsResult<FieldId> {
    FieldId::new(raw).ok_or_else(|| ProjectsError::InvalidInput {
        message: "field id must not be empty".to_string(),
    })
}

async fn dispatch(
    engine: &ProjectsEngine<GraphQlGateway>,
    command: &Command,
) -> ProjectsResult<String> {
    let text = match command {
        Command::Projects { owner } => render::projects(owner, &engine.list_projects(owner).await?),
        Command::Fields { owner, number } => {
            render::fields(owner, *number, &engine.list_fields(owner, *number).await?)
        }
        Command::Items {
            owner,
            number,
            limit,
            state,
        } => {
            let query = ItemQuery {
                limit: *limit,
                state: state.as_deref().and_then(ItemStateFilter::new),
            };
            let items = engine.list_items(owner, *number, &query).await?;
            render::items(owner, *number, query.state.as_ref(), &items)
        }
        Command::Search {
            owner,
            number,
            query,
            limit,
        } => {
            let items = engine.search_items(owner, *number, query, *limit).await?;
            render::search(*number, query, &items)
        }
        Command::CreateIssue {
            owner,
            repo,
            title,
            body,
        } => {
            let issue = engine.create_issue(owner, repo, title, body).await?;
            render::created_issue(owner, repo, &issue)
        }
        Command::AddIssue {
            owner,
            number,
            issue_owner,
            issue_repo,
            issue_number,
        } => {
            let added = engine
                .add_issue_to_project(owner, *number, issue_owner, issue_repo, *issue_number)
                .await?;
            render::added_issue(*number, issue_owner, issue_repo, *issue_number, &added)
        }
        Command::AddDraft {
            owner,
            number,
            title,
            body,
        } => {
            let id = engine.add_draft_issue(owner, *number, title, body).await?;
            render::draft_issue(*number, id.as_str(), title)
        }
        Command::UpdateField {
            owner,
            number,
            item_id: item,
            field_id: field,
            value,
        } => {
            let updated = engine
                .update_item_field(
                    owner,
                    *number,
                    &item_id(item)?,
                    &field_id(field)?,
                    InputValue::parse(value),
                )
                .await?;
            render::field_update(*number, updated.as_str(), field, value)
        }
        Command::DeleteItem {
            owner,
            number,
            item_id: item,
        } => {
            let deleted = engine.delete_item(owner, *number, &item_id(item)?).await?;
            render::deleted_item(*number, deleted.as_str())
        }
        Command::UpdateProject {
            owner,
            number,
            title,
            description,
            public,
        } => {
            let settings = ProjectSettingsUpdate {
                title: title.clone(),
                description: description.clone(),
                public: *public,
            };
            let updated = engine
                .update_project_settings(owner, *number, &settings)
                .await?;
            render::updated_project(&updated)
        }
    };
    Ok(text)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let engine = engine(&cli)?;
    match dispatch(&engine, &cli.command).await {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(error = %err, "command failed");
            eprintln!("{}", render::failure(&cli.command.failure_summary(), &err));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let provider = match telemetry::init() {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let invocation_id = InvocationId::new_random();
    let span = info_span!(
        "ghprojects",
        invocation_id = %invocation_id,
        command = cli.command.name()
    );
    let code = match run(cli).instrument(span).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    };

    if let Some(provider) = provider {
        if let Err(err) = telemetry::shutdown(&provider) {
            eprintln!("Error: {err:#}");
        }
    }
    code
}
