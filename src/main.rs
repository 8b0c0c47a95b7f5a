//! CLI entry point for treecat

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use treecat::{
    ColorMode, Console, FlattenConfig, Flattener, ReportConfig, ReportWriter, Result, SkipReason,
    SkippedFile, TreeGlyphs, WalkerConfig,
};

#[derive(Parser, Debug)]
#[command(name = "treecat")]
#[command(about = "Dump a directory as a tree plus file contents, or flatten it into one folder")]
#[command(version)]
struct Cli {
    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Print a JSON run summary instead of the completion message
    #[arg(long = "json", global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a tree listing followed by the contents of every file into one text file
    Tree(TreeArgs),
    /// Copy every file into one folder, named after its relative path
    Flatten(FlattenArgs),
}

// Traversal options shared by both commands
#[derive(Args, Debug)]
struct WalkArgs {
    /// Directory to process
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Also exclude entries with this name or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Include hidden entries (names starting with '.')
    #[arg(long = "hidden")]
    hidden: bool,

    /// Keep filesystem listing order instead of sorting by name
    #[arg(long = "no-sort")]
    no_sort: bool,
}

impl WalkArgs {
    fn walker_config(&self) -> WalkerConfig {
        let mut config = WalkerConfig {
            skip_hidden: !self.hidden,
            sort: !self.no_sort,
            ..Default::default()
        };
        config.excluded_names.extend(self.ignore.iter().cloned());
        config
    }

    /// Resolve the root against the working directory, dropping `.` components.
    fn root(&self) -> PathBuf {
        let root = if self.path.is_absolute() {
            self.path.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(&self.path)
        };
        root.components().collect()
    }
}

#[derive(Args, Debug)]
struct TreeArgs {
    #[command(flatten)]
    walk: WalkArgs,

    /// Name of the report file created in the directory
    #[arg(short = 'o', long = "output", default_value = treecat::report::DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Also print the tree to stdout
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Draw the tree with ASCII characters only
    #[arg(long = "ascii")]
    ascii: bool,
}

#[derive(Args, Debug)]
struct FlattenArgs {
    #[command(flatten)]
    walk: WalkArgs,

    /// Name of the destination folder created in the directory
    #[arg(short = 'd', long = "dest", default_value = treecat::flatten::DEFAULT_DEST_DIR)]
    dest: String,
}

/// Set up the tracing subscriber; RUST_LOG takes precedence over -v/-q.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treecat={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// File name of the running executable, left out of report sections.
fn own_file_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
}

fn skip_message(skip: &SkippedFile) -> String {
    match skip.reason {
        SkipReason::Encoding => format!("cannot read file: {} (encoding error)", skip.path),
        SkipReason::Io => format!("error reading file: {} ({})", skip.path, skip.detail),
    }
}

fn run_tree(args: &TreeArgs, json: bool, console: &mut Console) -> Result<()> {
    let root = args.walk.root();
    let config = ReportConfig {
        output_name: args.output.clone(),
        walker: args.walk.walker_config(),
        self_name: own_file_name(),
        glyphs: if args.ascii {
            TreeGlyphs::ascii()
        } else {
            TreeGlyphs::unicode()
        },
        ..Default::default()
    };
    let writer = ReportWriter::new(config);

    let summary = writer.write(&root, |skip| {
        if let Err(e) = console.warn(&skip_message(skip)) {
            tracing::debug!(error = %e, "failed to print warning");
        }
    })?;

    if args.print {
        console.print(&writer.render_tree(&root)?)?;
    }

    if json {
        console.print(&format!("{}\n", serde_json::to_string_pretty(&summary)?))?;
    } else {
        console.success(&format!(
            "Files merged into {} ({} directories, {} files)",
            display(&summary.output),
            summary.directories,
            summary.files
        ))?;
    }
    Ok(())
}

fn run_flatten(args: &FlattenArgs, json: bool, console: &mut Console) -> Result<()> {
    let root = args.walk.root();
    let flattener = Flattener::new(FlattenConfig {
        dest_dir_name: args.dest.clone(),
        walker: args.walk.walker_config(),
    })?;

    let summary = flattener.run(&root)?;

    if json {
        console.print(&format!("{}\n", serde_json::to_string_pretty(&summary)?))?;
    } else {
        console.success(&format!(
            "Flattened {} files into {}",
            summary.copied + summary.unchanged,
            display(&summary.destination)
        ))?;
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Render an error with its source chain, e.g. "failed to copy ...: Permission denied".
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        message.push_str(": ");
        message.push_str(&s.to_string());
        source = s.source();
    }
    message
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let mut console = Console::new(cli.color, cli.quiet);

    let result = match &cli.command {
        Command::Tree(args) => run_tree(args, cli.json, &mut console),
        Command::Flatten(args) => run_flatten(args, cli.json, &mut console),
    };

    if let Err(e) = result {
        eprintln!("treecat: {}", error_chain(&e));
        process::exit(1);
    }
}
