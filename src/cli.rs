//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{self, Session};
use testmapper::core::models::MappingRule;
use testmapper::core::services::Direction;
use testmapper::output::OutputMode;

/// testmapper - Jump between source files and their tests
#[derive(Parser, Debug)]
#[command(
    name = "testmapper",
    version,
    about = "Jump between source files and their tests",
    long_about = "Map source files to their test files and back.\n\n\
                  Mapping rules in .testmapper.toml say where tests live: in a\n\
                  centralized tree mirroring the sources, or next to each source\n\
                  file in a sub-directory such as __tests__."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .testmapper.toml in the workspace)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Workspace directory (defaults to the current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(flatten)]
    pub rule: RuleArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An extra mapping rule given on the command line, tried after the configured ones
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// Source root of an extra mapping rule
    #[arg(long, global = true, value_name = "DIR")]
    pub src_root: Option<String>,

    /// Test root of the extra rule
    #[arg(long, global = true, value_name = "DIR")]
    pub test_root: Option<String>,

    /// Test suffix of the extra rule
    #[arg(long, global = true, value_name = "SUFFIX", default_value = ".test")]
    pub suffix: String,

    /// Resolve the extra rule's test root next to each source file
    #[arg(long, global = true)]
    pub sibling: bool,
}

impl RuleArgs {
    /// The extra rule, if both roots were given
    pub fn to_rule(&self) -> anyhow::Result<Option<MappingRule>> {
        match (&self.src_root, &self.test_root) {
            (Some(src), Some(test)) => Ok(Some(MappingRule {
                src_root: src.clone(),
                test_root: test.clone(),
                test_suffix: self.suffix.clone(),
                sibling: self.sibling,
            })),
            (None, None) => Ok(None),
            _ => anyhow::bail!("--src-root and --test-root must be given together"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a starter .testmapper.toml in the workspace
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the candidate test files for a source file
    Tests {
        /// Source file (relative paths resolve against the current directory)
        file: PathBuf,
    },

    /// Print the source file for a test file
    Source {
        /// Test file (relative paths resolve against the current directory)
        file: PathBuf,
    },

    /// Open the test file for a source file, offering to create it
    OpenTest(OpenArgs),

    /// Open the source file for a test file, offering to create it
    OpenSource(OpenArgs),

    /// Show the effective mapping rules
    Rules,
}

/// Arguments shared by the open commands
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// File to start from
    pub file: PathBuf,

    /// Create a missing file without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Editor command to open the file with (defaults to $TESTMAPPER_EDITOR)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("testmapper v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'testmapper --help' for usage");
            println!("Run 'testmapper init' to get started");
        }
        return Ok(());
    };

    let workspace = cli.workspace.as_deref();
    let config = cli.config.as_deref();
    let load = || -> anyhow::Result<Session> {
        Session::load(workspace, config, cli.rule.to_rule()?)
    };

    match command {
        Command::Init { force } => commands::init(workspace, config, force, output_mode),
        Command::Tests { file } => commands::tests(&mut load()?, &file, output_mode),
        Command::Source { file } => commands::source(&mut load()?, &file, output_mode),
        Command::OpenTest(args) => {
            commands::open(&mut load()?, &args, Direction::ToTest, output_mode)
        },
        Command::OpenSource(args) => {
            commands::open(&mut load()?, &args, Direction::ToSource, output_mode)
        },
        Command::Rules => commands::rules(&load()?, output_mode),
    }
}
