use crate::config::OutputFormat;
use crate::executor::Interpreter;
use crate::formatter::{CLEARED_MESSAGE, format_error};
use crate::help;
use recipelang_parser::is_blank_or_comment;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render recipe: {0}")]
    Render(#[from] serde_json::Error),
}

/// Where driver output goes.
pub trait Output {
    fn out(&mut self, msg: &str);
    fn err(&mut self, msg: &str);
    fn prompt(&mut self, prompt: &str) -> io::Result<()>;
}

/// Writes everything to stdout, the way the interpreter has always printed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOutput;

impl Output for StdOutput {
    fn out(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn err(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()
    }
}

pub struct FileOptions {
    pub stop_on_error: bool,
    pub format: OutputFormat,
}

/// How a batch run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every line was processed and the recipe printed. Lists rejected lines
    /// when `stop_on_error` is off.
    Completed { failed_lines: Vec<usize> },
    /// Stopped at the given 1-based line; no recipe printed.
    Halted { line: usize },
}

pub struct ReplOptions<'a> {
    pub banner_lines: &'a [&'a str],
    pub prompt: &'a str,
    pub exit_commands: &'a [&'a str],
    pub handle_ctrl_c: bool,
    pub farewell: Option<&'a str>,
    pub format: OutputFormat,
}

/// Run every command in a script file.
pub async fn run_file<O: Output + ?Sized>(
    interpreter: &mut Interpreter,
    output: &mut O,
    path: &Path,
    options: FileOptions,
) -> Result<BatchOutcome, CliError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CliError::NotFound(path.to_path_buf())
        } else {
            CliError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    info!("Executing {}", path.display());
    output.out(&format!("Executing recipe from: {}\n", path.display()));

    let mut failed_lines = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();
        if is_blank_or_comment(trimmed) {
            continue;
        }

        output.out(&format!("[Line {}] {}", line_num, trimmed));
        match interpreter.execute_line(trimmed) {
            Ok(Some(result)) => output.out(&format!("  → {}", result.output)),
            Ok(None) => {}
            Err(e) => {
                output.err(&format!("  → {}", format_error(&e)));
                if options.stop_on_error {
                    output.err(&format!("\nExecution stopped at line {}", line_num));
                    info!("Halted at line {}", line_num);
                    return Ok(BatchOutcome::Halted { line: line_num });
                }
                failed_lines.push(line_num);
            }
        }
    }

    output.out(&interpreter.render(options.format)?);
    info!("Finished with {} steps", interpreter.recipe().len());
    Ok(BatchOutcome::Completed { failed_lines })
}

/// Why the interactive loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed an exit command.
    Command,
    /// The reader reached end of input.
    EndOfInput,
    /// Ctrl-C arrived while waiting for a line. The pending read may still
    /// be blocked on the terminal, so callers should exit the process.
    Interrupted,
}

/// Possible outcomes from reading a single REPL line.
enum ReadLineResult {
    /// A non-empty input line to process.
    Input(String),
    /// Empty line -- skip and re-prompt.
    Skip,
    Exit(ExitReason),
    /// I/O error while reading.
    Error(io::Error),
}

/// Session commands understood by the interactive driver.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Help,
    ShowRecipe,
    Clear,
    Statement(&'a str),
}

impl<'a> ReplCommand<'a> {
    fn classify(input: &'a str) -> Self {
        match input.to_lowercase().as_str() {
            "help" => ReplCommand::Help,
            "recipe" => ReplCommand::ShowRecipe,
            "clear" => ReplCommand::Clear,
            _ => ReplCommand::Statement(input),
        }
    }
}

async fn read_line<R: AsyncBufRead + Unpin>(
    reader: &mut Lines<R>,
    exit_commands: &[&str],
    handle_ctrl_c: bool,
) -> ReadLineResult {
    if handle_ctrl_c {
        tokio::select! {
            line = reader.next_line() => {
                classify_line(line, exit_commands)
            }
            _ = tokio::signal::ctrl_c() => {
                ReadLineResult::Exit(ExitReason::Interrupted)
            }
        }
    } else {
        classify_line(reader.next_line().await, exit_commands)
    }
}

fn classify_line(
    result: Result<Option<String>, io::Error>,
    exit_commands: &[&str],
) -> ReadLineResult {
    match result {
        Ok(Some(input)) => {
            let trimmed = input.trim().to_string();
            if trimmed.is_empty() {
                ReadLineResult::Skip
            } else if exit_commands
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&trimmed))
            {
                ReadLineResult::Exit(ExitReason::Command)
            } else {
                ReadLineResult::Input(trimmed)
            }
        }
        Ok(None) => ReadLineResult::Exit(ExitReason::EndOfInput),
        Err(e) => ReadLineResult::Error(e),
    }
}

fn handle_input<O: Output + ?Sized>(
    interpreter: &mut Interpreter,
    output: &mut O,
    input: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    match ReplCommand::classify(input) {
        ReplCommand::Help => output.out(&help::usage()),
        ReplCommand::ShowRecipe => output.out(&interpreter.render(format)?),
        ReplCommand::Clear => {
            interpreter.reset();
            output.out(CLEARED_MESSAGE);
        }
        ReplCommand::Statement(line) => match interpreter.execute_line(line) {
            Ok(Some(result)) => output.out(&result.output),
            Ok(None) => {}
            Err(e) => output.err(&format_error(&e)),
        },
    }
    Ok(())
}

/// Interactive loop over `reader` until an exit command, end of input or
/// Ctrl-C. Returns why the loop stopped.
pub async fn run_repl<R, O>(
    reader: R,
    interpreter: &mut Interpreter,
    output: &mut O,
    options: ReplOptions<'_>,
) -> Result<ExitReason, CliError>
where
    R: AsyncBufRead + Unpin,
    O: Output + ?Sized,
{
    for line in options.banner_lines {
        output.out(line);
    }

    let mut reader = reader.lines();

    loop {
        output.prompt(options.prompt)?;

        match read_line(&mut reader, options.exit_commands, options.handle_ctrl_c).await {
            ReadLineResult::Input(line) => {
                handle_input(interpreter, output, &line, options.format)?
            }
            ReadLineResult::Skip => continue,
            ReadLineResult::Exit(reason) => {
                debug!("Leaving interactive mode: {:?}", reason);
                if let Some(message) = options.farewell {
                    match reason {
                        ExitReason::Command => output.out(&format!("\n{}", message)),
                        ExitReason::EndOfInput | ExitReason::Interrupted => {
                            output.out(&format!("\n\n{}", message))
                        }
                    }
                }
                return Ok(reason);
            }
            ReadLineResult::Error(e) => return Err(e.into()),
        }
    }
}
