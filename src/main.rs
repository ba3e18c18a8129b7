mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info};
use miette::{miette, IntoDiagnostic, Result};

use primer_utils::catalog::{catalog, ConceptId};
use primer_utils::config::{Config, StartView};

use crate::commands::Painter;
use crate::logging::LogTarget;

#[derive(Parser, Debug)]
#[clap(name = "primer", version, about = "Learn AI concepts in your terminal")]
struct Cli {
    /// Config file (KDL)
    #[clap(long, global = true, env = "PRIMER_CONFIG", value_parser)]
    config: Option<PathBuf>,

    /// Disable colors (NO_COLOR is honored too)
    #[clap(long, global = true, action)]
    no_color: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the catalog and play animations (default)
    Run {
        /// View to open on
        #[clap(long, value_parser = parse_view)]
        view: Option<StartView>,
    },
    /// Print the catalog grouped by category
    List {
        #[clap(long, action)]
        json: bool,
    },
    /// Print a concept's start screen and animation frames
    Show {
        /// Concept id, e.g. training-data
        #[clap(value_parser)]
        concept: String,
        /// Number of step ticks (default: until complete)
        #[clap(long, value_parser)]
        ticks: Option<u32>,
    },
    /// Print every stage of the LLM pipeline
    Pipeline,
}

fn parse_view(s: &str) -> std::result::Result<StartView, String> {
    s.parse()
        .map_err(|_| format!("unknown view `{s}`, expected `catalog` or `pipeline`"))
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color || no_color_env() {
        config.color = false;
    }

    let command = cli.command.unwrap_or(Command::Run { view: None });
    let interactive = matches!(command, Command::Run { .. });
    logging::init(LogTarget::choose(config.log_file.clone(), interactive))?;
    debug!("Config: {:?}", config);

    let painter = Painter::new(config.color);
    match command {
        Command::Run { view } => {
            if let Some(view) = view {
                config.start_view = view;
            }
            info!("primer {} starting", env!("CARGO_PKG_VERSION"));
            primer_client::start_client(&config).map_err(|e| miette!("{e:#}"))?;
        }
        Command::List { json } => {
            if json {
                println!("{}", commands::list_json().into_diagnostic()?);
            } else {
                print!("{}", commands::list(painter));
            }
        }
        Command::Show { concept, ticks } => {
            let id = ConceptId::parse(&concept)?;
            print!("{}", commands::show(catalog().get(id), ticks, painter));
        }
        Command::Pipeline => print!("{}", commands::pipeline(painter)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["primer", "show", "training-data", "--ticks", "3"]);
        match cli.command {
            Some(Command::Show { concept, ticks }) => {
                assert_eq!(concept, "training-data");
                assert_eq!(ticks, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from(["primer", "run", "--view", "pipeline", "--no-color"]);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Some(Command::Run {
                view: Some(StartView::Pipeline)
            })
        ));
    }

    #[test]
    fn test_bad_view_is_rejected() {
        assert!(Cli::try_parse_from(["primer", "run", "--view", "chat"]).is_err());
    }
}
