use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept on display.
pub const DISPLAY_PLACES: u32 = 8;

/// Renders a value for display: rounded half-to-even to eight places, then
/// trailing zeros and a dangling decimal point removed. Plain positional
/// notation only.
pub fn format_decimal(value: Decimal) -> String {
    value
        .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointNearestEven)
        .normalize()
        .to_string()
}
