//! CLI Tooling
//!
//! Command-line front end over the dispatcher. Nodes are addressed by slash
//! paths; every structural command dispatches exactly one action and prints the
//! toasts it produced.

use crate::config::{ConfigLoader, PindoConfig};
use crate::error::{ApiError, StorageError};
use crate::state::{Action, Dispatcher};
use crate::store::{SledSnapshotStore, SnapshotStore};
use crate::toast::{Toast, ToastKind};
use crate::tree::path::{
    node_path, render_tree, resolve_file_path, resolve_folder_path, resolve_path,
};
use crate::tree::{Node, Tree};
use crate::types::{NodeId, ToastId};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Pindo CLI - virtual file tree manager
#[derive(Parser)]
#[command(name = "pindo")]
#[command(about = "Manage a persistent virtual tree of folders and files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Snapshot database directory (overrides storage.path)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags into a loaded configuration.
    pub fn apply_logging_overrides(&self, config: &mut PindoConfig) {
        let logging = &mut config.logging;
        if self.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the whole tree as an indented outline
    Tree,
    /// List the contents of a folder
    Ls {
        /// Folder path
        #[arg(default_value = "/")]
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create a folder
    Mkdir {
        /// Parent folder path
        parent: String,
        /// Folder name
        name: String,
    },
    /// Create a file
    Touch {
        /// Parent folder path
        parent: String,
        /// File base name
        name: String,
        /// File extension
        ext: String,
    },
    /// Rename a file
    RenameFile {
        /// File path, e.g. /Documents/notes.txt
        path: String,
        /// New base name
        name: String,
        /// New extension
        ext: String,
    },
    /// Rename a folder
    RenameFolder {
        /// Folder path
        path: String,
        /// New name
        name: String,
    },
    /// Delete a file, or a folder with all of its contents
    Rm {
        /// Node path
        path: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Dispatch a raw JSON action
    Dispatch {
        /// Action as {"type": ..., "payload": ...}
        json: String,
    },
    /// Print the current snapshot as JSON
    Export,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

/// Rendered result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// False when the command produced an error toast
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// CLI context for executing commands
pub struct CliContext {
    dispatcher: Dispatcher,
    config: PindoConfig,
}

impl CliContext {
    /// Load configuration, from `config_path` when given.
    pub fn load_config(config_path: Option<&Path>) -> Result<PindoConfig, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(config)
    }

    /// Open the sled store named by `config` (or `store_override`).
    pub fn from_config(config: PindoConfig, store_override: Option<PathBuf>) -> Result<Self, ApiError> {
        let store_path = match store_override {
            Some(path) => path,
            None => config.storage.resolve_path()?,
        };
        debug!(path = %store_path.display(), key = %config.storage.key, "Opening snapshot store");
        let store = SledSnapshotStore::open(&store_path, &config.storage.key)?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    pub fn with_store(store: Arc<dyn SnapshotStore>, config: PindoConfig) -> Self {
        let dispatcher = Dispatcher::from_config(store, &config.toasts);
        Self { dispatcher, config }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Tree => Ok(CommandOutput::ok(render_tree(self.tree()))),
            Commands::Ls { path, format } => self.handle_ls(path, format).map(CommandOutput::ok),
            Commands::Mkdir { parent, name } => {
                let parent_id = self.resolve_or_raw(parent, resolve_folder_path);
                Ok(self.run_action(Action::CreateFolder {
                    parent_id,
                    name: name.clone(),
                }))
            }
            Commands::Touch { parent, name, ext } => {
                let parent_id = self.resolve_or_raw(parent, resolve_folder_path);
                Ok(self.run_action(Action::CreateFile {
                    parent_id,
                    name: name.clone(),
                    ext: ext.clone(),
                }))
            }
            Commands::RenameFile { path, name, ext } => {
                let file_id = self.resolve_or_raw(path, resolve_file_path);
                Ok(self.run_action(Action::RenameFile {
                    file_id,
                    new_name: name.clone(),
                    new_ext: ext.clone(),
                }))
            }
            Commands::RenameFolder { path, name } => {
                let folder_id = self.resolve_or_raw(path, resolve_folder_path);
                Ok(self.run_action(Action::RenameFolder {
                    folder_id,
                    new_name: name.clone(),
                }))
            }
            Commands::Rm { path, yes } => self.handle_rm(path, *yes),
            Commands::Dispatch { json } => {
                let action = Action::from_json(json)?;
                Ok(self.run_action(action))
            }
            Commands::Export => serde_json::to_string_pretty(self.tree())
                .map(CommandOutput::ok)
                .map_err(|e| ApiError::StorageError(StorageError::Serialization(e))),
            Commands::Config { command } => match command {
                ConfigCommands::Show => toml::to_string_pretty(&self.config)
                    .map(CommandOutput::ok)
                    .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
            },
        }
    }

    fn tree(&self) -> &Tree {
        self.dispatcher.state().tree()
    }

    /// Unresolved paths are passed through so the reducer reports them.
    fn resolve_or_raw(&self, path: &str, resolve: fn(&Tree, &str) -> Option<NodeId>) -> NodeId {
        resolve(self.tree(), path).unwrap_or_else(|| path.to_string())
    }

    fn run_action(&mut self, action: Action) -> CommandOutput {
        let before: HashSet<ToastId> = self
            .dispatcher
            .state()
            .toasts()
            .iter()
            .map(|toast| toast.id.clone())
            .collect();

        let state = self.dispatcher.dispatch(action);
        let fresh: Vec<&Toast> = state
            .toasts()
            .iter()
            .filter(|toast| !before.contains(&toast.id))
            .collect();

        if fresh.is_empty() {
            return CommandOutput::ok("No changes");
        }
        CommandOutput {
            text: fresh.iter().map(|toast| format_toast(toast)).collect::<Vec<_>>().join("\n"),
            success: fresh.iter().all(|toast| !toast.is_error()),
        }
    }

    fn handle_ls(&self, path: &str, format: &str) -> Result<String, ApiError> {
        let tree = self.tree();
        let id = resolve_folder_path(tree, path)
            .or_else(|| resolve_file_path(tree, path))
            .ok_or_else(|| ApiError::PathNotInTree(path.to_string()))?;
        let entries: Vec<&Node> = match tree.get(&id) {
            Some(node @ Node::File(_)) => vec![node],
            Some(Node::Folder(_)) => tree.children(&id),
            None => return Err(ApiError::PathNotInTree(path.to_string())),
        };

        match format {
            "json" => format_listing_json(tree, &entries),
            "text" => Ok(format_listing_table(tree, &entries)),
            other => Err(ApiError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_rm(&mut self, path: &str, yes: bool) -> Result<CommandOutput, ApiError> {
        let node_id = self.resolve_or_raw(path, resolve_path);

        if !yes && !self.tree().is_root(&node_id) {
            if let Some(description) = self.tree().get(&node_id).map(describe_for_delete) {
                use dialoguer::Confirm;
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {}?", description))
                    .default(false)
                    .interact()
                    .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;

                if !confirmed {
                    info!(path, "Deletion cancelled");
                    return Ok(CommandOutput::ok("Deletion cancelled"));
                }
            }
        }

        Ok(self.run_action(Action::DeleteNode { node_id }))
    }
}

/// Confirmation wording for deleting `node`
pub fn describe_for_delete(node: &Node) -> String {
    match node {
        Node::File(file) => format!("file \"{}\"", file.file_name()),
        Node::Folder(folder) => format!("folder \"{}\" and all of its contents", folder.name),
    }
}

fn format_toast(toast: &Toast) -> String {
    match toast.kind {
        ToastKind::Success => format!("{} {}", "✓".green(), toast.message.green()),
        ToastKind::Error => format!("{} {}", "✗".red(), toast.message.red()),
    }
}

fn kind_label(node: &Node) -> &'static str {
    if node.is_folder() {
        "folder"
    } else {
        "file"
    }
}

fn format_listing_table(tree: &Tree, entries: &[&Node]) -> String {
    if entries.is_empty() {
        return "(empty)".to_string();
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Type", "Path", "Node ID"]);
    for node in entries {
        let path = node_path(tree, node.id()).unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            node.display_name(),
            kind_label(node).to_string(),
            path,
            node.id().to_string(),
        ]);
    }
    table.to_string()
}

fn format_listing_json(tree: &Tree, entries: &[&Node]) -> Result<String, ApiError> {
    let arr: Vec<serde_json::Value> = entries
        .iter()
        .map(|node| {
            serde_json::json!({
                "id": node.id(),
                "name": node.display_name(),
                "type": kind_label(node),
                "path": node_path(tree, node.id()),
            })
        })
        .collect();
    serde_json::to_string_pretty(&arr).map_err(|e| ApiError::StorageError(StorageError::Serialization(e)))
}
