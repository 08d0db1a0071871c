use anyhow::Context;
use clap::{Parser, ValueEnum};
use recipelang_engine::cli::{self, ExitReason, FileOptions, ReplOptions, StdOutput};
use recipelang_engine::config::{ConfigLoader, OutputFormat};
use recipelang_engine::executor::Interpreter;
use recipelang_engine::formatter::{FAREWELL_MESSAGE, format_cli_error};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const BANNER: &[&str] = &[
    "==================================================",
    "  Welcome to RecipeLang Interactive Mode!",
    "==================================================",
    "Type 'help' for commands, 'quit' to exit\n",
];

#[derive(Parser)]
#[command(name = "recipelang", version, about = "RecipeLang recipe interpreter")]
struct Args {
    /// Recipe script to execute. Starts interactive mode when omitted.
    file: Option<PathBuf>,

    /// Config file (defaults to $RECIPELANG_CONFIG, ./recipelang.yaml or
    /// ~/.recipelang/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How the finished recipe is printed
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stderr keeps stdout limited to interpreter output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigLoader::load_default().await?,
    };
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);

    let mut interpreter = Interpreter::new();
    let mut output = StdOutput;

    if let Some(path) = args.file {
        let options = FileOptions {
            stop_on_error: config.batch.stop_on_error,
            format,
        };
        match cli::run_file(&mut interpreter, &mut output, &path, options).await {
            Ok(outcome) => info!("Batch finished: {:?}", outcome),
            Err(e) => {
                println!("{}", format_cli_error(&e));
                std::process::exit(1);
            }
        }
    } else {
        let banner_lines: &[&str] = if config.repl.show_banner { BANNER } else { &[] };
        let repl_options = ReplOptions {
            banner_lines,
            prompt: &config.repl.prompt,
            exit_commands: &["quit", "exit"],
            handle_ctrl_c: config.repl.handle_ctrl_c,
            farewell: Some(FAREWELL_MESSAGE),
            format,
        };

        let stdin = BufReader::new(tokio::io::stdin());
        let reason = cli::run_repl(stdin, &mut interpreter, &mut output, repl_options).await?;
        if reason == ExitReason::Interrupted {
            // tokio's stdin read runs on a blocking thread that the runtime
            // waits for on shutdown; it only returns once a line arrives.
            std::io::stdout().flush()?;
            std::process::exit(0);
        }
    }

    Ok(())
}
