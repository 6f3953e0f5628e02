//! Read–dispatch–report loop.
//!
//! The interpreter is the only component that touches I/O. It reads one line
//! at a time, runs it through the [`Session`], and writes the rendered result.
//! Rejected commands are reported and the loop carries on; only `quit` or end
//! of input stop it.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::output::{render_error, RenderMode};
use crate::session::{Response, Session};

/// Default prompt written before each command is read.
pub const DEFAULT_PROMPT: &str = "cmd> ";

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterOptions {
    pub prompt: String,
    /// Echo each command line back before its output, so a transcript of a
    /// piped session reads like an interactive one.
    pub echo: bool,
    pub mode: RenderMode,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            echo: true,
            mode: RenderMode::PlainText,
        }
    }
}

#[derive(Debug)]
pub struct Interpreter {
    session: Session,
    options: InterpreterOptions,
    state: LoopState,
}

impl Interpreter {
    pub fn new(session: Session, options: InterpreterOptions) -> Self {
        Self {
            session,
            options,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process commands until `quit` or end of input.
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buffer = Vec::new();
        while self.state == LoopState::Running {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                self.state = LoopState::Terminated;
                break;
            }
            // Undecodable bytes become U+FFFD and the line is rejected by the
            // parser like any other unknown command.
            let line = String::from_utf8_lossy(&buffer);
            let command_line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            self.step(command_line, output)?;
        }
        output.flush()
    }

    /// Execute a single command line and write its output.
    pub fn step<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<LoopState> {
        if self.options.echo {
            writeln!(output, "{line}")?;
        }

        let mode = self.options.mode;
        let (rendered, next) = match self.session.execute_line(line) {
            Ok(Response::Quit) => (Response::Quit.render(mode), LoopState::Terminated),
            Ok(response) => (response.render(mode), LoopState::Running),
            Err(err) => {
                debug!(line, reason = %err, "rejected command");
                (render_error(&err, mode), LoopState::Running)
            }
        };

        output.write_all(rendered.as_bytes())?;
        if next == LoopState::Running && mode == RenderMode::PlainText {
            writeln!(output)?;
        }
        self.state = next;
        Ok(next)
    }
}
