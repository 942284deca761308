//! Static display strings for the two interface languages.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TimeconvError;
use crate::units::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pl];

    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }

    pub const fn other(self) -> Language {
        match self {
            Language::En => Language::Pl,
            Language::Pl => Language::En,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Pl => &PL,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TimeconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pl" => Ok(Language::Pl),
            _ => Err(TimeconvError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Every piece of text the screen shows for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub enter_value: &'static str,
    pub value_help: &'static str,
    pub select_unit: &'static str,
    pub convert: &'static str,
    /// Label of the language toggle: the code of the language it switches to.
    pub toggle_lang: &'static str,
    pub result_intro: &'static str,
    pub error_invalid: &'static str,
    units: [&'static str; 6],
}

impl Strings {
    pub fn unit_name(&self, unit: Unit) -> &'static str {
        self.units[unit.index()]
    }

    /// Unit names in canonical order, as listed in the dropdown.
    pub fn unit_names(&self) -> [&'static str; 6] {
        self.units
    }
}

static EN: Strings = Strings {
    title: "Time Converter",
    subtitle: "Quickly convert seconds, minutes, hours, days, months, and years – for example, find out how many seconds are in a year or how many days are in a month.",
    enter_value: "Enter value",
    value_help: "Non-negative number",
    select_unit: "Select unit",
    convert: "Convert",
    toggle_lang: "PL",
    result_intro: "is:",
    error_invalid: "Please enter a valid non-negative number",
    units: ["Seconds", "Minutes", "Hours", "Days", "Months", "Years"],
};

static PL: Strings = Strings {
    title: "Konwerter Czasu",
    subtitle: "Szybko zamieniaj sekundy, minuty, godziny, dni, miesiące i lata – np. sprawdź, ile sekund ma rok lub ile dni ma miesiąc.",
    enter_value: "Wpisz wartość",
    value_help: "Nieujemna liczba",
    select_unit: "Wybierz jednostkę",
    convert: "Konwertuj",
    toggle_lang: "EN",
    result_intro: "to:",
    error_invalid: "Wprowadź poprawną nieujemną wartość",
    units: ["Sekund", "Minut", "Godzin", "Dni", "Miesięcy", "Lat"],
};
