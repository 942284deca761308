use rust_decimal::Decimal;
use std::str::FromStr;
use timeconv::{ConverterShell, InputState, Language, Unit, convert, format_decimal, validate};

fn line_for<'a>(output: &'a str, name: &str) -> &'a str {
    output
        .lines()
        .find(|l| l.starts_with("– ") && l.ends_with(name))
        .unwrap_or_else(|| panic!("no line for {name} in:\n{output}"))
}

#[test]
fn test_one_year_in_seconds_and_minutes() {
    let mut shell = ConverterShell::new(Language::En, Unit::Year);
    shell.input_changed("1");
    shell.submit();
    let output = shell.output();

    assert_eq!(line_for(&output, "Seconds"), "– 31536000 Seconds");
    assert_eq!(line_for(&output, "Minutes"), "– 525600 Minutes");
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn test_sixty_minutes_in_hours_and_seconds() {
    let mut shell = ConverterShell::new(Language::En, Unit::Minute);
    shell.input_changed("60");
    shell.submit();
    let output = shell.output();

    assert_eq!(line_for(&output, "Hours"), "– 1 Hours");
    assert_eq!(line_for(&output, "Seconds"), "– 3600 Seconds");
}

#[test]
fn test_negative_input_shows_only_error() {
    for language in Language::ALL {
        let mut shell = ConverterShell::new(language, Unit::Second);
        shell.input_changed("-1");
        shell.submit();
        assert_eq!(shell.output(), language.strings().error_invalid);
    }
}

#[test]
fn test_language_toggle_swaps_labels_not_numbers() {
    let mut shell = ConverterShell::new(Language::En, Unit::Hour);
    shell.input_changed("36");
    shell.submit();
    let before = shell.view();

    shell.toggle_language();
    let after = shell.view();

    assert_ne!(before.title, after.title);
    assert_ne!(before.submit_label, after.submit_label);
    assert_eq!(before.input, after.input);
    assert_eq!(before.selected_unit, after.selected_unit);
    assert_eq!(after.output.lines().count(), before.output.lines().count());

    for (en, pl) in before.output.lines().zip(after.output.lines()) {
        let number = |l: &str| {
            l.split_whitespace()
                .find(|w| Decimal::from_str(w).is_ok())
                .map(str::to_string)
        };
        assert_eq!(number(en), number(pl));
    }
    assert!(after.output.contains("– 1.5 Dni"));
}

#[test]
fn test_validator_tiers() {
    for raw in ["", ".", "-"] {
        assert_eq!(validate(raw), InputState::Incomplete);
    }
    for raw in ["abc", "-5", "NaN"] {
        assert!(matches!(validate(raw), InputState::Invalid(_)), "{raw}");
    }
    for raw in ["5", "5.25", "0"] {
        assert!(validate(raw).is_valid(), "{raw}");
    }
}

#[test]
fn test_formatted_results_are_stable_when_reparsed() {
    let value = Decimal::from_str("7.3").unwrap();
    for source in Unit::ALL {
        for (_, converted) in convert(value, source).iter() {
            let shown = format_decimal(converted);
            let reparsed = Decimal::from_str(&shown).unwrap();
            assert_eq!(format_decimal(reparsed), shown);
            assert!(!shown.contains('e') && !shown.contains('E'));
        }
    }
}
