//! Presentation controller for the single converter screen.
//!
//! Owns all mutable screen state (the typed text, selected unit, language
//! and last outcome) and reacts to one user event at a time. A front end
//! only forwards events and draws [`View`] snapshots.

use std::fmt;

use tracing::debug;

use crate::convert::{ConversionResult, convert};
use crate::format::format_decimal;
use crate::i18n::Language;
use crate::units::Unit;
use crate::validate::{InputState, validate};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Empty,
    Converted(ConversionResult),
    Invalid,
}

#[derive(Debug, Clone)]
pub struct ConverterShell {
    input: String,
    input_state: InputState,
    current_unit: Unit,
    current_language: Language,
    outcome: Outcome,
}

impl Default for ConverterShell {
    fn default() -> Self {
        Self::new(Language::default(), Unit::default())
    }
}

impl ConverterShell {
    pub fn new(language: Language, unit: Unit) -> Self {
        Self {
            input: String::new(),
            input_state: InputState::Incomplete,
            current_unit: unit,
            current_language: language,
            outcome: Outcome::Empty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn current_unit(&self) -> Unit {
        self.current_unit
    }

    pub fn current_language(&self) -> Language {
        self.current_language
    }

    /// The submit control is enabled only while the field holds a valid value.
    pub fn submit_enabled(&self) -> bool {
        self.input_state.is_valid()
    }

    /// Field edited. Re-validates but never touches the output area.
    pub fn input_changed(&mut self, text: &str) {
        self.input = text.to_string();
        self.input_state = validate(text);
        debug!(input = %self.input, state = ?self.input_state, "input changed");
    }

    pub fn select_unit(&mut self, unit: Unit) {
        debug!(from = %self.current_unit, to = %unit, "unit selected");
        self.current_unit = unit;
    }

    /// Explicit conversion request. Anything but a valid value replaces the
    /// output area with the translated error message.
    pub fn submit(&mut self) {
        self.outcome = match self.input_state {
            InputState::Valid(value) => Outcome::Converted(convert(value, self.current_unit)),
            _ => Outcome::Invalid,
        };
        debug!(unit = %self.current_unit, valid = self.submit_enabled(), "submitted");
    }

    /// Return-key path: converts only when the submit control is enabled.
    /// Returns whether a conversion ran.
    pub fn submit_if_enabled(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        self.submit();
        true
    }

    /// Switches every label to the other language. Input, unit and any
    /// shown result are kept; only their rendering changes.
    pub fn toggle_language(&mut self) {
        self.current_language = self.current_language.other();
        debug!(language = %self.current_language, "language toggled");
    }

    /// Text of the output area in the current language.
    pub fn output(&self) -> String {
        match &self.outcome {
            Outcome::Empty => String::new(),
            Outcome::Converted(result) => render_result(result, self.current_language),
            Outcome::Invalid => self.current_language.strings().error_invalid.to_string(),
        }
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        match &self.outcome {
            Outcome::Converted(result) => Some(result),
            _ => None,
        }
    }

    pub fn view(&self) -> View {
        let t = self.current_language.strings();
        View {
            title: t.title,
            subtitle: t.subtitle,
            toggle_label: t.toggle_lang,
            value_label: t.enter_value,
            value_help: t.value_help,
            input: self.input.clone(),
            unit_label: t.select_unit,
            unit_options: t.unit_names(),
            selected_unit: self.current_unit.index(),
            submit_label: t.convert,
            submit_enabled: self.submit_enabled(),
            output: self.output(),
        }
    }
}

/// Output area text for a conversion: a header naming the source quantity,
/// then one `– value name` line per other unit in canonical order.
pub fn render_result(result: &ConversionResult, language: Language) -> String {
    let t = language.strings();
    let source = result.source();
    let mut lines = Vec::with_capacity(Unit::ALL.len());
    lines.push(format!(
        "{} {} {}",
        format_decimal(source.value),
        t.unit_name(source.unit),
        t.result_intro
    ));
    for (unit, value) in result.others() {
        lines.push(format!("– {} {}", format_decimal(value), t.unit_name(unit)));
    }
    lines.join("\n")
}

/// Everything the screen shows at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub toggle_label: &'static str,
    pub value_label: &'static str,
    pub value_help: &'static str,
    pub input: String,
    pub unit_label: &'static str,
    pub unit_options: [&'static str; 6],
    pub selected_unit: usize,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub output: String,
}

impl View {
    pub fn selected_unit_name(&self) -> &'static str {
        self.unit_options[self.selected_unit]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  [{}]", self.title, self.toggle_label)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;
        writeln!(f, "{}: {}", self.value_label, self.input)?;
        writeln!(f, "  ({})", self.value_help)?;
        writeln!(f, "{}: {}", self.unit_label, self.selected_unit_name())?;
        for (i, name) in self.unit_options.iter().enumerate() {
            let marker = if i == self.selected_unit { '>' } else { ' ' };
            writeln!(f, " {marker} {}. {name}", i + 1)?;
        }
        if self.submit_enabled {
            writeln!(f, "[ {} ]", self.submit_label)?;
        } else {
            writeln!(f, "[ {} ] -", self.submit_label)?;
        }
        if !self.output.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_with(input: &str, unit: Unit) -> ConverterShell {
        let mut shell = ConverterShell::new(Language::En, unit);
        shell.input_changed(input);
        shell
    }

    #[test]
    fn test_one_year_output() {
        let mut shell = shell_with("1", Unit::Year);
        shell.submit();
        assert_eq!(
            shell.output(),
            "1 Years is:\n\
             – 31536000 Seconds\n\
             – 525600 Minutes\n\
             – 8760 Hours\n\
             – 365 Days\n\
             – 12.16666667 Months"
        );
    }

    #[test]
    fn test_sixty_minutes_output() {
        let mut shell = shell_with("60", Unit::Minute);
        shell.submit();
        let output = shell.output();
        assert!(output.contains("– 3600 Seconds"));
        assert!(output.contains("– 1 Hours"));
        assert!(output.starts_with("60 Minutes is:"));
    }

    #[test]
    fn test_negative_submit_shows_only_error() {
        let mut shell = shell_with("-1", Unit::Second);
        assert!(!shell.submit_enabled());
        shell.submit();
        assert_eq!(shell.output(), "Please enter a valid non-negative number");
        assert!(shell.last_result().is_none());
    }

    #[test]
    fn test_incomplete_input_disables_submit_without_message() {
        let mut shell = ConverterShell::default();
        for partial in ["", "-", "."] {
            shell.input_changed(partial);
            assert!(!shell.submit_enabled());
            assert_eq!(shell.output(), "");
        }
        shell.input_changed("5");
        assert!(shell.submit_enabled());
    }

    #[test]
    fn test_typing_does_not_touch_previous_output() {
        let mut shell = shell_with("2", Unit::Hour);
        shell.submit();
        let before = shell.output();
        shell.input_changed("abc");
        assert_eq!(shell.output(), before);
    }

    #[test]
    fn test_submit_if_enabled_skips_invalid() {
        let mut shell = shell_with("abc", Unit::Second);
        assert!(!shell.submit_if_enabled());
        assert_eq!(shell.output(), "");

        shell.input_changed("90");
        assert!(shell.submit_if_enabled());
        assert!(shell.output().contains("– 1.5 Minutes"));
    }

    #[test]
    fn test_toggle_language_keeps_numbers() {
        let mut shell = shell_with("1", Unit::Day);
        shell.submit();
        let english = shell.output();

        shell.toggle_language();
        let polish = shell.output();
        assert_eq!(shell.current_language(), Language::Pl);
        assert_eq!(shell.input(), "1");
        assert_eq!(shell.current_unit(), Unit::Day);
        assert!(polish.starts_with("1 Dni to:"));
        assert!(polish.contains("– 86400 Sekund"));
        assert!(polish.contains("– 24 Godzin"));

        let digits = |s: &str| -> Vec<String> {
            s.lines()
                .map(|l| {
                    l.split_whitespace()
                        .find(|w| w.chars().next().is_some_and(|c| c.is_ascii_digit()))
                        .unwrap_or_default()
                        .to_string()
                })
                .collect()
        };
        assert_eq!(digits(&english), digits(&polish));

        shell.toggle_language();
        assert_eq!(shell.output(), english);
    }

    #[test]
    fn test_toggle_language_translates_error() {
        let mut shell = shell_with("abc", Unit::Second);
        shell.submit();
        shell.toggle_language();
        assert_eq!(shell.output(), "Wprowadź poprawną nieujemną wartość");
    }

    #[test]
    fn test_view_labels_follow_language() {
        let mut shell = ConverterShell::new(Language::En, Unit::Hour);
        let view = shell.view();
        assert_eq!(view.title, "Time Converter");
        assert_eq!(view.toggle_label, "PL");
        assert_eq!(view.selected_unit, 2);
        assert_eq!(view.selected_unit_name(), "Hours");
        assert!(!view.submit_enabled);

        shell.toggle_language();
        let view = shell.view();
        assert_eq!(view.title, "Konwerter Czasu");
        assert_eq!(view.toggle_label, "EN");
        assert_eq!(view.submit_label, "Konwertuj");
        assert_eq!(view.selected_unit_name(), "Godzin");
    }

    #[test]
    fn test_unit_change_applies_on_next_submit() {
        let mut shell = shell_with("2", Unit::Hour);
        shell.submit();
        shell.select_unit(Unit::Day);
        assert!(shell.output().starts_with("2 Hours is:"));
        shell.submit();
        assert!(shell.output().starts_with("2 Days is:"));
    }
}
