//! Expense Tracker CLI
//!
//! Command-line client for the expense tracker API:
//! - List expenses
//! - Show daily, monthly and yearly totals
//! - Add and delete expenses
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_tracker::config::{generate_default_config, Config};
use expense_tracker::logging::init_logging;
use expense_tracker::{
    ActionError, ClickOutcome, ClickTarget, ClientController, ExpenseId, FormInput,
    HttpExpenseApi, TerminalView,
};

#[derive(Parser)]
#[command(name = "expense-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record and review personal expenses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all expenses
    List,

    /// Show daily, monthly and yearly totals
    Summary,

    /// List expenses and show totals
    Show,

    /// Record an expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount spent
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Date of the expense, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging)?;
    tracing::debug!(base_url = %config.api.base_url, "Using expense API");

    let api = HttpExpenseApi::new(&config.api.base_url, config.api.request_timeout())?;
    let controller =
        ClientController::new(api, TerminalView::stdio()).with_chart_style(config.charts.style());

    match cli.command {
        Commands::List => {
            controller.refresh_list().await?;
        }

        Commands::Summary => {
            controller.init_charts();
            controller.refresh_summary().await?;
        }

        Commands::Show => {
            controller.init_charts();
            controller.refresh_all().await?;
        }

        Commands::Add {
            description,
            amount,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            controller
                .view()
                .fill_form(FormInput::new(&description, &amount, &date));

            controller.init_charts();
            controller
                .submit_expense()
                .await
                .map_err(|e| action_error(e, "Failed to add expense"))?;
        }

        Commands::Delete { id } => {
            let target = ClickTarget::delete_button(&ExpenseId::new(id));

            controller.init_charts();
            let outcome = controller
                .handle_table_click(&target)
                .await
                .map_err(|e| action_error(e, "Failed to delete expense"))?;

            if let ClickOutcome::Deleted(id) = outcome {
                println!("\nDeleted expense {}", id);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Attach `failed` only when the change itself did not go through
fn action_error(error: ActionError, failed: &'static str) -> anyhow::Error {
    match error {
        ActionError::Request(e) => anyhow::Error::new(e).context(failed),
        ActionError::Refresh(e) => {
            anyhow::Error::new(e).context("Change saved, but refreshing failed")
        }
    }
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}
