//! Interactive read-evaluate-print loop.

use super::command::Command;
use super::Calculator;
use crate::config::CalculatorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, error, info};

const HELP_TEXT: &str = "
Available Commands:
  <number> <operation> <number>  - Perform calculation
  help                           - Show this help message
  history                        - Show calculation history
  clear                          - Clear calculation history
  exit                           - Exit the calculator

Operations:
  +, add        - Addition
  -, subtract   - Subtraction
  *, multiply   - Multiplication
  /, divide     - Division

Examples:
  5 + 3
  10.5 subtract 2.3
  7 * 8
  15 divide 3
";

/// Why a line could not be read.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The user pressed Ctrl-C while typing
    #[error("input interrupted")]
    Interrupted,

    /// No more input (Ctrl-D or a closed stream)
    #[error("end of input")]
    Eof,

    #[error("failed to read input: {0}")]
    Io(String),
}

/// Source of input lines for a [`Repl`].
pub trait LineReader {
    /// Show `prompt` and read one line, without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.add_history_entry(line.as_str()) {
                        debug!(%err, "failed to record line in editor history");
                    }
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(ReadError::Interrupted),
            Err(ReadlineError::Eof) => Err(ReadError::Eof),
            Err(err) => Err(ReadError::Io(err.to_string())),
        }
    }
}

/// Whether the loop keeps going after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive calculator session.
///
/// Every input error is reported on `output` and the loop continues; only
/// `exit`, end of input, or a failure to read or write the terminal end it.
pub struct Repl<R, W> {
    calculator: Calculator,
    reader: R,
    output: W,
    config: CalculatorConfig,
}

impl<R: LineReader, W: Write> Repl<R, W> {
    pub fn new(reader: R, output: W, config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            reader,
            output,
            config,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("calculator session started");
        if self.config.show_banner {
            self.print_banner()?;
        }

        loop {
            let line = match self.reader.read_line(&self.config.prompt) {
                Ok(line) => line,
                Err(ReadError::Interrupted) => {
                    writeln!(
                        self.output,
                        "\n\nCalculator interrupted. Type 'exit' to quit gracefully."
                    )?;
                    continue;
                }
                Err(ReadError::Eof) => {
                    writeln!(self.output, "\n\nExiting calculator...")?;
                    break;
                }
                Err(err @ ReadError::Io(_)) => {
                    error!(%err, "terminal input failed");
                    return Err(io::Error::new(io::ErrorKind::Other, err));
                }
            };

            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }

        info!(
            calculations = self.calculator.history().len(),
            "calculator session ended"
        );
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let Some(command) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Exit => {
                writeln!(self.output, "Thank you for using the calculator. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
            Command::History => self.print_history()?,
            Command::Clear => {
                self.calculator.clear_history();
                writeln!(self.output, "Calculation history cleared.")?;
            }
            Command::Calculate(input) => self.print_calculation(input)?,
        }

        Ok(Flow::Continue)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Professional Calculator!")?;
        writeln!(
            self.output,
            "Type 'help' for available commands or 'exit' to quit."
        )?;
        writeln!(self.output, "{}", "-".repeat(50))
    }

    fn print_calculation(&mut self, input: &str) -> io::Result<()> {
        match self.calculator.evaluate(input) {
            Ok(calculation) => writeln!(self.output, "Result: {}", calculation),
            Err(err) => {
                debug!(input, %err, "calculation rejected");
                writeln!(self.output, "Error: {}", err)?;
                if err.is_input_error() {
                    writeln!(self.output, "Use 'help' command for usage instructions.")?;
                }
                Ok(())
            }
        }
    }

    fn print_history(&mut self) -> io::Result<()> {
        let history = self.calculator.history();
        if history.is_empty() {
            return writeln!(self.output, "No calculations in history.");
        }

        writeln!(self.output, "\nCalculation History:")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        for (index, calculation) in history.iter().enumerate() {
            writeln!(self.output, "{:2}. {}", index + 1, calculation)?;
        }
        Ok(())
    }
}
