use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use matchform::app::Session;
use matchform::config::{ConfigStore, Settings};
use matchform::editor::Editor;
use matchform::platform::HeadlessSurface;
use matchform_ipc::MatcherNode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Matchform - edit window-matcher trees as forms
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Edit(EditCmd),
    Render(RenderCmd),
    Check(CheckCmd),
    Version(VersionCmd),
}

/// Run an editing session over JSON lines on stdin/stdout
#[derive(FromArgs)]
#[argh(subcommand, name = "edit")]
struct EditCmd {
    /// config file (default: <config dir>/matchform/config.json)
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Print the form outline for the stored matchers
#[derive(FromArgs)]
#[argh(subcommand, name = "render")]
struct RenderCmd {
    /// config file (default: <config dir>/matchform/config.json)
    #[argh(option)]
    config: Option<PathBuf>,
    /// read a JSON matcher array from this file instead of the config
    #[argh(option)]
    file: Option<PathBuf>,
}

/// Build and extract the matchers, printing the normalized document
#[derive(FromArgs)]
#[argh(subcommand, name = "check")]
struct CheckCmd {
    /// config file (default: <config dir>/matchform/config.json)
    #[argh(option)]
    config: Option<PathBuf>,
    /// read a JSON matcher array from this file instead of the config
    #[argh(option)]
    file: Option<PathBuf>,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["matchform", "--help"];
            match Cli::from_args(&args[..1], &args[1..]) {
                Ok(_) => {}
                Err(e) => {
                    println!("{}", e.output);
                }
            }
            Ok(())
        }
        Some(SubCommand::Version(_)) => {
            println!("matchform {}", VERSION);
            Ok(())
        }
        Some(subcmd) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr)
                .init();
            run(subcmd)
        }
    }
}

fn run(subcmd: SubCommand) -> Result<()> {
    match subcmd {
        SubCommand::Edit(cmd) => {
            let store = open_store(cmd.config)?;
            tracing::info!("matchform session starting");
            let mut session = Session::new(store)?;
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())
        }
        SubCommand::Render(cmd) => {
            let matchers = read_matchers(cmd.config, cmd.file)?;
            let mut editor = Editor::new(HeadlessSurface::new());
            editor.load(&matchers);
            for line in editor.outline() {
                println!("{}", line);
            }
            Ok(())
        }
        SubCommand::Check(cmd) => {
            let matchers = read_matchers(cmd.config, cmd.file)?;
            let mut editor = Editor::new(HeadlessSurface::new());
            editor.load(&matchers);
            let extracted = editor.extract()?;
            println!("{}", serde_json::to_string_pretty(&extracted)?);
            if extracted != matchers {
                bail!("Round trip changed the matcher document");
            }
            Ok(())
        }
        SubCommand::Version(_) => unreachable!("handled in main"),
    }
}

fn open_store(config: Option<PathBuf>) -> Result<ConfigStore> {
    let settings = Settings::resolve(config)?;
    ConfigStore::open(&settings.config_path)
}

fn read_matchers(config: Option<PathBuf>, file: Option<PathBuf>) -> Result<Vec<MatcherNode>> {
    match file {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid matchers in {}", path.display()))
        }
        None => open_store(config)?.matchers(),
    }
}
