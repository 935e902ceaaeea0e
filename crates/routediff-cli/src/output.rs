use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a machine-readable payload to stdout.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// Print the human summary line, tinted by whether the diff escalated.
pub fn summary_line(text: &str, escalated: bool) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = if escalated { Color::Yellow } else { Color::Green };
    stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(stdout, "{text}")?;
    stdout.reset()?;
    Ok(())
}
