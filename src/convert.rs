//! Exact conversion through seconds as the common base unit.

use rust_decimal::Decimal;

use crate::units::Unit;

/// A validated, non-negative amount of a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub value: Decimal,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn convert(&self) -> ConversionResult {
        convert(self.value, self.unit)
    }
}

/// One value per unit, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    source: Quantity,
    total_seconds: Decimal,
    values: [Decimal; 6],
}

impl ConversionResult {
    pub fn source(&self) -> Quantity {
        self.source
    }

    pub fn total_seconds(&self) -> Decimal {
        self.total_seconds
    }

    pub fn get(&self, unit: Unit) -> Decimal {
        self.values[unit.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Unit, Decimal)> + '_ {
        Unit::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Every entry except the source unit's.
    pub fn others(&self) -> impl Iterator<Item = (Unit, Decimal)> + '_ {
        let source = self.source.unit;
        self.iter().filter(move |(unit, _)| *unit != source)
    }
}

/// Re-expresses `value` of `source` in every unit.
///
/// `value` must already be validated (non-negative and small enough that
/// `value * factor` does not overflow); see [`crate::validate::validate`].
/// The source unit's entry is the input itself, so it round-trips exactly
/// even when the intermediate product needed rescaling.
pub fn convert(value: Decimal, source: Unit) -> ConversionResult {
    let total_seconds = value * source.factor();
    let values = Unit::ALL.map(|unit| {
        if unit == source {
            value
        } else {
            total_seconds / unit.factor()
        }
    });

    ConversionResult {
        source: Quantity::new(value, source),
        total_seconds,
        values,
    }
}
