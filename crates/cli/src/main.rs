use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use expression_render::{LookupStyle, RenderOptions, render, render_filter};
use model::{Expression, MigrationDefinition};
use report::DefinitionReport;
use tracing::{Level, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "stratum-console",
    version = "0.1.0",
    about = "Migration definition viewer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Describe {
            config,
            output,
            json,
        } => {
            let source = std::fs::read_to_string(&config)?;
            let definition = MigrationDefinition::from_json(&source)?;
            info!(
                "Loaded migration definition '{}' with {} item(s)",
                definition.name,
                definition.items.len()
            );

            let report = DefinitionReport::from_definition(&definition, &RenderOptions::default());
            let text = if json {
                serde_json::to_string_pretty(&report).map_err(CliError::JsonSerialize)?
            } else {
                output::describe_text(&report)
            };
            output::emit(&text, output)?;
        }
        Commands::Expr {
            json,
            filter,
            at_prefixed,
            compact,
        } => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            let expr = Expression::from_value(&value);

            let mut options = if compact {
                RenderOptions::compact()
            } else {
                RenderOptions::default()
            };
            if at_prefixed {
                options.lookup_style = LookupStyle::AtPrefixed;
            }

            let rendered = if filter {
                render_filter(Some(&expr), &options)
            } else {
                render(Some(&expr), &options)
            };
            println!("{rendered}");
        }
    }

    Ok(())
}
