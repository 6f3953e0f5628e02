//! Park trip planner CLI library.
//!
//! Argument parsing and the glue that loads park files and hands stdin and
//! stdout to the library's interpreter. Kept separate from `main.rs` so the
//! option handling can be unit tested.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use parktrip_lib::interpreter::DEFAULT_PROMPT;
use parktrip_lib::{Catalog, Interpreter, InterpreterOptions, RenderMode, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse park catalogs and plan a trip")]
pub struct Cli {
    /// Park files to load, in order.
    #[arg(required = true, value_name = "PARK_FILE")]
    pub files: Vec<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prompt written before each command is read.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Do not echo each command line before its output.
    #[arg(long)]
    pub no_echo: bool,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned tables.
    Text,
    /// One JSON object per command.
    Json,
}

impl From<OutputFormat> for RenderMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => RenderMode::PlainText,
            OutputFormat::Json => RenderMode::Json,
        }
    }
}

impl Cli {
    /// Interpreter settings implied by the arguments. JSON output never
    /// carries a prompt or echo so every stdout line parses.
    pub fn interpreter_options(&self) -> InterpreterOptions {
        match self.format {
            OutputFormat::Text => InterpreterOptions {
                prompt: self.prompt.clone(),
                echo: !self.no_echo,
                mode: RenderMode::PlainText,
            },
            OutputFormat::Json => InterpreterOptions {
                prompt: String::new(),
                echo: false,
                mode: self.format.into(),
            },
        }
    }
}

/// Load every park file named on the command line into one catalog.
pub fn load_catalog(files: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for path in files {
        catalog
            .load_path(path)
            .with_context(|| format!("failed to load park file {}", path.display()))?;
    }
    info!(parks = catalog.len(), files = files.len(), "catalog loaded");
    Ok(catalog)
}

/// Load the catalog and run the interactive loop until `quit` or end of input.
pub fn run<R, W>(cli: &Cli, input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let catalog = load_catalog(&cli.files)?;
    let mut interpreter = Interpreter::new(Session::new(catalog), cli.interpreter_options());
    interpreter
        .run(input, output)
        .context("failed to read commands or write results")
}

/// Run against the process's standard streams.
pub fn run_stdio(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, stdin.lock(), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["parks"]).is_err());
    }

    #[test]
    fn defaults_to_text_with_prompt_and_echo() {
        let cli = Cli::try_parse_from(["parks", "a.txt", "b.txt"]).expect("valid args");
        assert_eq!(cli.files.len(), 2);
        let options = cli.interpreter_options();
        assert_eq!(options.prompt, "cmd> ");
        assert!(options.echo);
        assert_eq!(options.mode, RenderMode::PlainText);
    }

    #[test]
    fn json_format_drops_prompt_and_echo() {
        let cli = Cli::try_parse_from(["parks", "--format", "json", "--prompt", "> ", "a.txt"])
            .expect("valid args");
        let options = cli.interpreter_options();
        assert_eq!(options.mode, RenderMode::Json);
        assert!(options.prompt.is_empty());
        assert!(!options.echo);
    }

    #[test]
    fn no_echo_flag_is_honoured() {
        let cli = Cli::try_parse_from(["parks", "--no-echo", "a.txt"]).expect("valid args");
        assert!(!cli.interpreter_options().echo);
    }
}
