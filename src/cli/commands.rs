//! Command registry, dispatch, and shell context for the ledger CLI.

use std::{collections::HashMap, io, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::LedgerManager,
    display::{format_transaction, format_transaction_list},
    domain::TransactionFactory,
    errors::LedgerError,
    reports::{CategoryReport, MonthlyReport, ReportBuilder},
    storage::JsonStorage,
};

use super::output;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandEntry>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense transaction",
            "add <income|expense> <amount> <category>",
            cmd_add,
        ),
        CommandEntry::new("list", "List recorded transactions", "list", cmd_list),
        CommandEntry::new(
            "report",
            "Render an aggregated report",
            "report [category|month]",
            cmd_report,
        ),
        CommandEntry::new(
            "remove",
            "Remove a transaction by index",
            "remove <index>",
            cmd_remove,
        ),
        CommandEntry::new("clear", "Remove all transactions", "clear", cmd_clear),
        CommandEntry::new("save", "Write the ledger to disk", "save", cmd_save),
        CommandEntry::new("load", "Reload the ledger from disk", "load", cmd_load),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: LedgerManager,
    pub config: Config,
    pub store_path: PathBuf,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let registry = CommandRegistry::new(definitions());
        let config = ConfigManager::new().load()?;
        let storage = match config.ledger_file.clone() {
            Some(path) => JsonStorage::new(path),
            None => JsonStorage::new_default(),
        };
        let store_path = storage.path().to_path_buf();
        let mut manager = LedgerManager::new(Box::new(storage));

        match manager.load() {
            Ok(()) => {
                if !manager.is_empty() {
                    output::info(format!(
                        "Loaded {} transactions from {}.",
                        manager.len(),
                        store_path.display()
                    ));
                }
            }
            Err(err) => output::warning(format!("Starting with an empty ledger: {err}")),
        }

        Ok(Self {
            mode,
            registry,
            manager,
            config,
            store_path,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: add <income|expense> <amount> <category>".into(),
        ));
    }
    let kind = args[0].to_lowercase();
    let amount: f64 = args[1].parse().map_err(|_| {
        CommandError::InvalidArguments(format!("amount must be numeric, got `{}`", args[1]))
    })?;
    let category = args[2..].join(" ");

    let transaction = TransactionFactory::create(&kind, amount, &category)?;
    let row = format_transaction(&transaction, &context.config.currency);
    context.manager.add(transaction);
    output::success(format!("Recorded {row}"));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.manager.list();
    if transactions.is_empty() {
        output::warning("No transactions recorded.");
        return Ok(());
    }
    output::info(format_transaction_list(
        transactions,
        &context.config.currency,
    ));
    Ok(())
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let which = args.first().copied().unwrap_or("category");
    let rendered = match which {
        "category" => ReportBuilder::new()
            .with_title("Category Report")
            .with_body(&CategoryReport, context.manager.list())
            .build(),
        "month" => ReportBuilder::new()
            .with_title("Monthly Report")
            .with_body(&MonthlyReport, context.manager.list())
            .build(),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown report `{}` (expected `category` or `month`)",
                other
            )))
        }
    };
    for line in rendered.lines() {
        output::info(line);
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: remove <index>".into()));
    };
    let index: usize = raw.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("index must be numeric, got `{raw}`"))
    })?;

    if index >= context.manager.len() {
        output::warning(format!("No transaction at index {index}."));
        return Ok(());
    }
    context.manager.remove(index);
    output::success(format!("Removed transaction {index}."));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Interactive {
        let confirmed = Confirm::with_theme(&context.theme)
            .with_prompt("Remove all transactions?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Clear cancelled.");
            return Ok(());
        }
    }
    context.manager.clear();
    output::success("All transactions removed.");
    Ok(())
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.manager.save()?;
    output::success(format!(
        "Saved {} transactions to {}.",
        context.manager.len(),
        context.store_path.display()
    ));
    Ok(())
}

fn cmd_load(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.manager.load()?;
    output::success(format!(
        "Loaded {} transactions from {}.",
        context.manager.len(),
        context.store_path.display()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.registry.get(&name) {
            print_command_help(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    print_overview(&context.registry);
    Ok(())
}

fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.iter() {
        output::info(format!("  {:<10} {}", entry.name, entry.description));
    }
    output::info("Use `help <command>` for details.");
}

fn print_command_help(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section(format!("Finance Core {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
