//! Workspace command handlers for the wsctl CLI.
//!
//! This module implements the workspace commands:
//! - [`handle_list`] - List workspaces (`wsctl list`)
//! - [`handle_current`] - Show the current workspace (`wsctl current`)
//! - [`handle_rename`] - Rename the current workspace (`wsctl rename`)
//! - [`handle_switch`] - Switch the current workspace (`wsctl switch`)
//! - [`handle_create`] - Create a workspace and switch to it (`wsctl create`)
//! - [`handle_delete`] - Delete a workspace (`wsctl delete`)
//!
//! Switch, create and delete fetch a fresh workspace list, then hand the
//! mutation to [`crate::flow::WorkspaceFlow`]. Handlers return `Ok(false)` when
//! the flow already told the user about a failure.

use std::io::{self, Write};

use crate::cli::terminal::{BrowserNavigator, TerminalNotifier};
use crate::client::{ConsoleApiClient, WorkspaceApi};
use crate::config::WsctlConfig;
use crate::error::Result;
use crate::flow::{NavigationTargets, SwitchOutcome, WorkspaceFlow};
use crate::workspace::{validate_name, Workspace, WorkspaceList};

type ConsoleFlow = WorkspaceFlow<ConsoleApiClient, TerminalNotifier, BrowserNavigator>;

/// Fetches the workspace list and wires the flow to the terminal.
async fn load_flow(config: &WsctlConfig, open_browser: bool) -> Result<ConsoleFlow> {
    let client = ConsoleApiClient::new(&config.api)?;
    let workspaces = fetch_workspaces(&client).await?;

    Ok(WorkspaceFlow::new(
        client,
        TerminalNotifier,
        BrowserNavigator::new(open_browser),
        NavigationTargets::from(&config.console),
        workspaces,
    ))
}

async fn fetch_workspaces(client: &ConsoleApiClient) -> Result<WorkspaceList> {
    let workspaces = client.list_workspaces().await?;
    tracing::debug!("fetched {} workspaces", workspaces.len());
    Ok(WorkspaceList::new(workspaces)?)
}

/// Handles the `wsctl list` command.
///
/// # Errors
///
/// Returns an error if the workspace list cannot be fetched.
pub async fn handle_list(config: &WsctlConfig, json: bool) -> Result<bool> {
    let client = ConsoleApiClient::new(&config.api)?;
    let workspaces = fetch_workspaces(&client).await?;

    if json {
        let all: Vec<_> = workspaces.iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(true);
    }

    if workspaces.is_empty() {
        println!("No workspaces found.");
        return Ok(true);
    }

    println!("  {:<28} {:<16} {:<12} ID", "NAME", "ROLE", "PLAN");
    for ws in workspaces.iter() {
        let marker = if ws.current { '*' } else { ' ' };
        println!(
            "{marker} {:<28} {:<16} {:<12} {}",
            ws.name, ws.role, ws.plan, ws.id
        );
    }

    Ok(true)
}

fn print_workspace(ws: &Workspace) {
    println!("Name:    {}", ws.name);
    println!("ID:      {}", ws.id);
    println!("Role:    {}", ws.role);
    println!("Plan:    {}", ws.plan);
    if let Some(status) = &ws.status {
        println!("Status:  {status}");
    }
    if let Some(created_at) = ws.created_at {
        println!("Created: {}", created_at.format("%Y-%m-%d %H:%M UTC"));
    }
}

/// Handles the `wsctl current` command.
///
/// # Errors
///
/// Returns an error if the current workspace cannot be fetched.
pub async fn handle_current(config: &WsctlConfig, json: bool) -> Result<bool> {
    let client = ConsoleApiClient::new(&config.api)?;
    let workspace = client.current_workspace().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workspace)?);
    } else {
        print_workspace(&workspace);
    }

    Ok(true)
}

/// Handles the `wsctl rename <name>` command.
///
/// Renames the current workspace; switch first to rename another one.
///
/// # Errors
///
/// Returns an error if `name` is blank or the console rejects the rename.
pub async fn handle_rename(config: &WsctlConfig, name: &str) -> Result<bool> {
    let name = validate_name(name)?;
    let client = ConsoleApiClient::new(&config.api)?;

    let workspace = client.rename_workspace(name).await?;
    tracing::info!("renamed workspace {} to {}", workspace.id, workspace.name);
    println!("✓ Renamed the current workspace to '{}'", workspace.name);

    Ok(true)
}

/// Handles the `wsctl switch <workspace>` command.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched or `workspace` matches no
/// single workspace.
pub async fn handle_switch(
    config: &WsctlConfig,
    open_browser: bool,
    workspace: &str,
) -> Result<bool> {
    let mut flow = load_flow(config, open_browser).await?;
    let target = flow.workspaces().resolve(workspace)?.clone();

    let outcome = flow.switch(&target.id).await;
    if outcome == SwitchOutcome::AlreadyCurrent {
        println!("'{}' is already the current workspace.", target.name);
    }

    Ok(outcome.is_success())
}

/// Handles the `wsctl create <name>` command.
///
/// # Errors
///
/// Returns an error if the workspace list cannot be fetched.
pub async fn handle_create(config: &WsctlConfig, open_browser: bool, name: &str) -> Result<bool> {
    let mut flow = load_flow(config, open_browser).await?;

    flow.open_create();
    let outcome = flow.create(name).await;

    Ok(outcome.is_success())
}

/// Handles the `wsctl delete <workspace>` command.
///
/// Asks for confirmation unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched, `workspace` matches no
/// single workspace, the account does not own it, or it is current.
pub async fn handle_delete(
    config: &WsctlConfig,
    open_browser: bool,
    workspace: &str,
    yes: bool,
) -> Result<bool> {
    let mut flow = load_flow(config, open_browser).await?;
    let target = flow.workspaces().deletable(workspace)?.clone();

    flow.request_delete(&target);

    if !yes {
        print!(
            "Delete workspace '{}'? This cannot be undone. [y/N] ",
            target.name
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            flow.cancel_delete();
            println!("Cancelled.");
            return Ok(true);
        }
    }

    Ok(flow.confirm_delete().await.is_success())
}
