// command line interface

use crate::output::Output;
use crate::{Api, Language};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(name = "profcheck", about = "Check text for profanity from your terminal")]
struct Cli {
    /// base url of the profanity-check api
    #[arg(long, short, env = "PROFANITY_API_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// run a single check and print the result
    Check {
        /// text to classify
        text: String,

        /// use the multilingual transformer model
        #[arg(long, short)]
        transformer: bool,

        /// language hint for the transformer model
        #[arg(long, short)]
        language: Option<Language>,

        /// print raw json instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// detect whether text is english or indic
    Detect {
        /// text to examine
        text: String,

        /// print raw json instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// get a second opinion from the llm validator
    Verify {
        /// text to verify
        text: String,

        /// print raw json instead of a summary
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = Api::new(cli.base_url);

    match cli.command {
        Some(Commands::Check {
            text,
            transformer,
            language,
            json,
        }) => {
            let text = non_empty(&text)?;
            let result = if transformer {
                api.check_transformer(text, language).await
            } else {
                api.check_basic(text).await
            }
            .into_diagnostic()?;
            if json {
                Output::raw(&result);
            } else {
                Output::check(text, &result);
            }
            Ok(())
        }

        Some(Commands::Detect { text, json }) => {
            let text = non_empty(&text)?;
            let result = api.detect_language(text).await.into_diagnostic()?;
            if json {
                Output::raw(&result);
            } else {
                Output::detection(text, &result);
            }
            Ok(())
        }

        Some(Commands::Verify { text, json }) => {
            let text = non_empty(&text)?;
            let result = api.verify_llm(text).await.into_diagnostic()?;
            if json {
                Output::raw(&result);
            } else {
                Output::verification(text, &result);
            }
            Ok(())
        }

        // no subcommand: interactive TUI
        None => crate::tui::run(api).await.into_diagnostic(),
    }
}

// empty input never reaches the network
fn non_empty(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(miette::miette!("Please enter a word to check"));
    }
    Ok(trimmed)
}
