//! User-facing console messages
//!
//! Warnings go to stderr in yellow, completion messages to stdout in green.
//! Diagnostics go through `tracing` instead.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against the environment.
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org/
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                    return false;
                }
                io::stdout().is_terminal()
            }
        }
    }

    fn choice(self) -> ColorChoice {
        if self.use_color() {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

pub struct Console {
    stdout: StandardStream,
    stderr: StandardStream,
    quiet: bool,
}

impl Console {
    pub fn new(mode: ColorMode, quiet: bool) -> Self {
        let choice = mode.choice();
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
            quiet,
        }
    }

    /// Print a warning to stderr. Shown even in quiet mode.
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self.stderr, "warning:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", message)
    }

    /// Print a completion message to stdout.
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.stdout, "{}", message)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }

    /// Print plain text to stdout as-is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }
}
