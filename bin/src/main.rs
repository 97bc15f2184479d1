//! ratecard CLI - Project cost estimates for technology services.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use ratecard_lib::prelude::*;
use std::path::PathBuf;

mod app;
mod commands;
mod config;
mod display;
mod logging;

use app::App;
use config::Config;

#[derive(Parser)]
#[command(name = "ratecard")]
#[command(about = "Project cost estimates for technology services", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Price against this catalog file instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a project's monthly rate and total cost
    Estimate {
        /// Service category (e.g., development, ai-ml)
        category: String,

        /// Sub-service within the category (e.g., web-development)
        sub_service: String,

        /// Complexity tier (low, medium, high). Defaults to the configured tier.
        #[arg(short = 'x', long)]
        complexity: Option<String>,

        /// Project duration in months (1-12)
        #[arg(short, long, default_value = "3")]
        duration: u32,

        /// Team size (1-10)
        #[arg(short, long, default_value = "3")]
        team_size: u32,

        /// Currency (inr, usd, eur, gbp). Defaults to the configured currency.
        #[arg(short, long)]
        currency: Option<String>,

        /// Output format (text, json, ndjson, csv)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the unrounded calculation steps (text format)
        #[arg(long)]
        breakdown: bool,

        /// Save the estimate to the quote book
        #[arg(long)]
        save: bool,

        /// Label for the saved quote
        #[arg(long, requires = "save")]
        label: Option<String>,
    },

    /// Fill in an estimate interactively
    Interactive,

    /// List service categories and sub-services
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Search sub-services by id or name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show sub-service details with estimates across durations and tiers
    Info {
        /// Service category
        category: String,

        /// Sub-service within the category
        sub_service: String,

        /// Currency (inr, usd, eur, gbp). Defaults to the configured currency.
        #[arg(short, long)]
        currency: Option<String>,

        /// Team size used for the tables (1-10)
        #[arg(short, long, default_value = "3")]
        team_size: u32,
    },

    /// Manage saved quotes
    Quotes {
        #[command(subcommand)]
        action: QuoteAction,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for managing saved quotes.
#[derive(Subcommand)]
enum QuoteAction {
    /// List saved quotes, newest first
    List,

    /// Show a saved quote
    Show {
        /// Quote ID or unique prefix. Prompts when omitted.
        quote_id: Option<String>,

        /// Output format (text, json, ndjson, csv)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a saved quote
    Delete {
        /// Quote ID or unique prefix. Prompts when omitted.
        quote_id: Option<String>,
    },

    /// Delete all saved quotes
    Clean {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Actions for the config file.
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = Config::load(cli.config.as_deref())?;

    logging::init(cli.verbose, cli.quiet, config.log_level.as_deref());
    tracing::debug!(config = ?config_path, "configuration loaded");

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let custom_catalog;
    let catalog = match cli.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => {
            custom_catalog = Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            &custom_catalog
        }
        None => Catalog::global(),
    };

    let app = App::new(catalog, config, cli.quiet);

    match command {
        Commands::Estimate {
            category,
            sub_service,
            complexity,
            duration,
            team_size,
            currency,
            format,
            output,
            breakdown,
            save,
            label,
        } => commands::estimate::estimate(
            &app,
            &category,
            &sub_service,
            complexity.as_deref(),
            duration,
            team_size,
            currency.as_deref(),
            format,
            output.as_deref(),
            breakdown,
            save,
            label,
        ),
        Commands::Interactive => commands::interactive::interactive(&app),
        Commands::List { category, search } => {
            commands::list::list_services(&app, category.as_deref(), search.as_deref())
        }
        Commands::Info {
            category,
            sub_service,
            currency,
            team_size,
        } => commands::info::show_info(
            &app,
            &category,
            &sub_service,
            currency.as_deref(),
            team_size,
        ),
        Commands::Quotes { action } => match action {
            QuoteAction::List => commands::quotes::list_quotes(&app),
            QuoteAction::Show { quote_id, format } => {
                commands::quotes::show_quote(&app, quote_id.as_deref(), format)
            }
            QuoteAction::Delete { quote_id } => {
                commands::quotes::delete_quote(&app, quote_id.as_deref())
            }
            QuoteAction::Clean { yes } => commands::quotes::clean_quotes(&app, yes),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&app),
            ConfigAction::Path => commands::config::path(config_path.as_deref()),
            ConfigAction::Init { force } => commands::config::init(config_path.as_deref(), force),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_uses_output_format() {
        let cli = Cli::try_parse_from([
            "ratecard",
            "estimate",
            "development",
            "web-development",
            "-f",
            "JSONL",
        ])
        .unwrap();
        let Some(Commands::Estimate { format, .. }) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(format, OutputFormat::Ndjson);

        assert!(
            Cli::try_parse_from(["ratecard", "quotes", "show", "-f", "xml"]).is_err()
        );
    }

    #[test]
    fn test_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["ratecard", "quotes", "show"]).unwrap();
        let Some(Commands::Quotes {
            action: QuoteAction::Show { format, quote_id },
        }) = cli.command
        else {
            panic!("expected quotes show");
        };
        assert_eq!(format, OutputFormat::Text);
        assert!(quote_id.is_none());
    }
}
