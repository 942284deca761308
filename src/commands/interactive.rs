//! Line-driven front end for [`ConverterShell`].
//!
//! Each stdin line is one user event. Plain text is typed into the value
//! field followed by Return; `:`-prefixed lines operate the other controls.
//! The screen is redrawn after every event.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::shell::ConverterShell;
use crate::units::Unit;

const HELP: &str = "\
commands:
  <value>        type a value and press Return
  :convert       press the convert button
  :unit <name|n> pick a unit (name or position 1-6)
  :lang          toggle the interface language
  :show          redraw the screen
  :quit          exit";

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Type(String),
    Convert,
    SelectUnit(String),
    ToggleLanguage,
    Show,
    Help,
    Quit,
}

fn parse_event(line: &str) -> Event {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Event::Type(line.to_string());
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "convert" | "c" => Event::Convert,
        "unit" | "u" => Event::SelectUnit(arg.to_string()),
        "lang" | "l" => Event::ToggleLanguage,
        "show" => Event::Show,
        "quit" | "q" => Event::Quit,
        _ => Event::Help,
    }
}

fn pick_unit(arg: &str) -> Option<Unit> {
    if let Ok(position) = arg.parse::<usize>() {
        return position.checked_sub(1).and_then(Unit::from_index);
    }
    arg.parse().ok()
}

fn draw<W: Write>(shell: &ConverterShell, out: &mut W) -> Result<()> {
    writeln!(out, "{}", shell.view()).context("Failed to write screen")
}

pub fn run<R: BufRead, W: Write>(shell: &mut ConverterShell, input: R, out: &mut W) -> Result<()> {
    info!(language = %shell.current_language(), unit = %shell.current_unit(), "interactive session");
    draw(shell, out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let event = parse_event(&line);
        debug!(?event, "event");

        match event {
            Event::Type(text) => {
                shell.input_changed(&text);
                shell.submit_if_enabled();
            }
            Event::Convert => shell.submit(),
            Event::SelectUnit(arg) => match pick_unit(&arg) {
                Some(unit) => shell.select_unit(unit),
                None => {
                    writeln!(out, "unknown unit: {arg}")?;
                    continue;
                }
            },
            Event::ToggleLanguage => shell.toggle_language(),
            Event::Show => {}
            Event::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Event::Quit => break,
        }
        draw(shell, out)?;
    }

    out.flush().context("Failed to flush output")
}
