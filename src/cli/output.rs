use colored::Colorize;
use std::fmt;
use std::io::{self, Stdout, Write};

use crate::utils::build_info::BuildMetadata;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "✔",
        MessageKind::Warning => "!",
        MessageKind::Error => "✘",
        MessageKind::Info | MessageKind::Section => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, styled: bool) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("--- {} ---", text.trim()),
        _ => {
            let icon = icon(kind);
            if icon.is_empty() {
                text
            } else {
                format!("{icon} {text}")
            }
        }
    };

    if !styled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

/// Formats an amount with the configured currency symbol and two decimals.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Line-oriented writer for shell output. Colours are applied only when `styled`.
pub struct Output<W: Write> {
    writer: W,
    styled: bool,
}

impl Output<Stdout> {
    pub fn stdout(styled: bool) -> Self {
        Self::new(io::stdout(), styled)
    }
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, styled: bool) -> Self {
        Self { writer, styled }
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = apply_style(kind, message, self.styled);
        match kind {
            MessageKind::Section => writeln!(self.writer, "\n{}", formatted)?,
            _ => writeln!(self.writer, "{}", formatted)?,
        }
        self.writer.flush()
    }

    pub fn line(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    /// Startup banner: application name with version, then the build details.
    pub fn banner(&mut self, app: &str, build: &BuildMetadata) -> io::Result<()> {
        self.info(format!("{app} {}", build.short_label()))?;
        self.line(build.details_line())
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Output<Vec<u8>>) -> io::Result<()>) -> String {
        let mut out = Output::new(Vec::new(), false);
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn plain_output_has_icons_but_no_escape_codes() {
        let text = render(|out| {
            out.success("Saved")?;
            out.error("Broken")?;
            out.info("Plain")
        });
        assert_eq!(text, "✔ Saved\n✘ Broken\nPlain\n");
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn sections_are_framed_and_spaced() {
        let text = render(|out| out.section("Expense Summary"));
        assert_eq!(text, "\n--- Expense Summary ---\n");
    }

    #[test]
    fn banner_shows_label_then_build_details() {
        let build = BuildMetadata {
            version: "0.1.0",
            git_hash: "abc1234",
            git_status: "clean",
            timestamp: "2024-06-15T10:00:00Z",
            target: "x86_64-unknown-linux-gnu",
            profile: "debug",
            rustc: "rustc 1.80.0",
        };
        let text = render(|out| out.banner("Pocketbook to-do list", &build));
        assert_eq!(
            text,
            "Pocketbook to-do list v0.1.0 (abc1234)\n\
             built 2024-06-15T10:00:00Z for x86_64-unknown-linux-gnu [debug] with rustc 1.80.0\n"
        );
    }

    #[test]
    fn amounts_use_symbol_and_two_decimals() {
        assert_eq!(format_amount("₹", 180.0), "₹180.00");
        assert_eq!(format_amount("$", 0.5), "$0.50");
    }
}
