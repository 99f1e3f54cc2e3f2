//! Terminal rendering module for command results
//!
//! Results go to stdout either as a pretty-printed JSON envelope or as
//! markdown rendered with termimad, with optional fallback to plain text.

use std::fmt::Display;

use anyhow::{Context, Result};
use roachctl_core::OperationStatus;
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

use crate::args::OutputFormat;

/// Envelope printed on stdout when a command fails in JSON mode
#[derive(Serialize)]
struct Failure<'a> {
    failed: bool,
    msg: &'a str,
}

/// Terminal renderer that switches between JSON, rich and plain text output
pub struct TerminalRenderer {
    format: OutputFormat,
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(format: OutputFormat, rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            format,
            rich_enabled,
            skin,
        }
    }

    /// Print a command result in the selected format
    pub fn render_result<T: Serialize + Display>(&self, result: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(result),
            OutputFormat::Text => {
                self.render(&result.to_string());
                Ok(())
            }
        }
    }

    /// Report a failed command: the envelope on stdout in JSON mode, the
    /// error chain on stderr otherwise
    pub fn render_failure(&self, error: &anyhow::Error) {
        let msg = format!("{error:#}");
        match self.format {
            OutputFormat::Json => {
                let failure = Failure {
                    failed: true,
                    msg: &msg,
                };
                if self.render_json(&failure).is_err() {
                    eprintln!("Error: {msg}");
                }
            }
            OutputFormat::Text => eprint!("{}", OperationStatus::failure(msg)),
        }
    }

    fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        println!("{json}");
        Ok(())
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            // Headers keep their hash symbols
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }
}
