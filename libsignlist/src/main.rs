use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libsignlist::{Candidate, CompositionInput, Engine, SignListConfig};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "libsignlist")]
#[command(about = "Ordering keys and transcription hints for cuneiform sign input with sign-list references")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Single composition for quick testing
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pretty transcription hint of a composition
    Hint {
        input: String,
        /// Number of characters typed so far (default: all)
        #[arg(short, long)]
        entered: Option<usize>,
    },
    /// Print the ordering key of a composition
    Key {
        input: String,
        /// Print the key as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sort `composition<TAB>text` candidate lines from a file or stdin
    Sort { file: Option<PathBuf> },
    /// List the configured sign-list catalogues
    Lists,
    /// Interactive REPL mode
    Repl,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SignListConfig> {
    match path {
        Some(path) => {
            let config = SignListConfig::load_toml(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            info!(path = %path.display(), lists = config.sign_lists.len(), "loaded config");
            Ok(config)
        }
        None => Ok(SignListConfig::default()),
    }
}

fn handle_hint_command(engine: &Engine, input: &str, entered: Option<usize>) {
    let len = input.chars().count();
    let hint = match entered {
        Some(n) if n <= len => engine.pretty_hint(input, n),
        Some(n) => {
            warn!(entered = n, len, "entered size exceeds the composition, showing no caret");
            let hint = engine.pretty_hint(input, len);
            hint.trim_end_matches(engine.config().caret_marker).to_string()
        }
        None => engine.pretty_hint(input, len),
    };
    println!("{hint}");
}

fn handle_key_command(engine: &Engine, input: &str, json: bool) -> Result<()> {
    let key = engine.ordering_key(input);
    if json {
        println!("{}", serde_json::to_string(&key)?);
    } else {
        println!("{key}");
    }
    Ok(())
}

fn handle_sort_command(engine: &Engine, file: Option<&Path>) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read candidate line")?;
        match Candidate::parse_line(&line) {
            Some(cand) => candidates.push(cand),
            None => debug!(line = %line, "skipping line without a composition"),
        }
    }
    engine.sort_candidates(&mut candidates);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for cand in &candidates {
        let hint = engine.hint_for(&CompositionInput::from_text(&cand.composition));
        let hint = hint.trim_end_matches(engine.config().caret_marker);
        writeln!(out, "{}\t{}\t{}", cand.composition, cand.text, hint)?;
    }
    Ok(())
}

fn handle_lists_command(engine: &Engine) {
    for entry in engine.table().entries() {
        println!("x{}\t{}", entry.prefix, entry.name);
    }
}

fn print_composition(engine: &Engine, input: &str) {
    let comp = CompositionInput::from_text(input);
    println!("  key:  {}", engine.key_for(&comp));
    println!("  hint: {}", engine.hint_for(&comp));
}

fn run_repl(engine: &Engine) -> Result<()> {
    println!("libsignlist demo CLI: type a composition and press Enter");
    println!("Example: d+utu, an2, xmzl839");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line.context("error reading stdin")?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        print_composition(engine, input);
        println!();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    let engine = libsignlist::install(config)?;

    match cli.command {
        Some(Commands::Hint { input, entered }) => handle_hint_command(engine, &input, entered),
        Some(Commands::Key { input, json }) => handle_key_command(engine, &input, json)?,
        Some(Commands::Sort { file }) => handle_sort_command(engine, file.as_deref())?,
        Some(Commands::Lists) => handle_lists_command(engine),
        Some(Commands::Repl) => run_repl(engine)?,
        None => {
            // A bare input argument shows its key and hint
            if let Some(input) = cli.input {
                print_composition(engine, &input);
            } else {
                run_repl(engine)?;
            }
        }
    }
    Ok(())
}
