//! Driver-facing terminal lines.
//!
//! Info and success go to stdout, warnings and errors to stderr so that
//! `path` and `sheet` output stays pipeable. Colors are dropped when the
//! stream is not a terminal or `NO_COLOR` is set.

use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[1;34m", "ℹ️"),
            Level::Success => ("\x1b[1;32m", "✅"),
            Level::Warning => ("\x1b[1;33m", "⚠️"),
            Level::Error => ("\x1b[1;31m", "❌"),
        }
    }

    fn to_stderr(&self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn colors_enabled(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let to_stderr = level.to_stderr();
    let (color, icon) = level.style();

    let line = if colors_enabled(to_stderr) {
        format!("{color}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    };

    // write errors (closed pipe) are ignored
    let _ = if to_stderr {
        writeln!(io::stderr(), "{line}")
    } else {
        writeln!(io::stdout(), "{line}")
    };
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Section header printed above summary output
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled(false) {
        println!("\x1b[1;34m=== {msg} ==={RESET}");
    } else {
        println!("=== {msg} ===");
    }
}
