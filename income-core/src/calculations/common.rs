//! Common helpers for presenting calculated amounts.
//!
//! Calculations themselves never round; these functions are applied only when
//! an amount is shown to the user.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as MYR with two decimal places, e.g. `"3000.00"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::common::format_myr;
///
/// assert_eq!(format_myr(dec!(3000)), "3000.00");
/// assert_eq!(format_myr(dec!(-12.345)), "-12.35");
/// ```
pub fn format_myr(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_settles_cents_of_socso_style_amounts() {
        assert_eq!(round_half_up(dec!(19.754)), dec!(19.75));
        assert_eq!(round_half_up(dec!(19.755)), dec!(19.76));
        assert_eq!(round_half_up(dec!(19.75)), dec!(19.75));
    }

    #[test]
    fn round_half_up_moves_negative_midpoints_away_from_zero() {
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round_half_up(dec!(-310.125)), dec!(-310.13));
    }

    #[test]
    fn format_myr_pads_whole_numbers() {
        assert_eq!(format_myr(dec!(3000)), "3000.00");
        assert_eq!(format_myr(dec!(0)), "0.00");
    }

    #[test]
    fn format_myr_pads_single_decimal() {
        assert_eq!(format_myr(dec!(2450.5)), "2450.50");
    }

    #[test]
    fn format_myr_rounds_extra_precision() {
        assert_eq!(format_myr(dec!(1999.995)), "2000.00");
        assert_eq!(format_myr(dec!(1999.994)), "1999.99");
    }

    #[test]
    fn format_myr_keeps_sign_of_negative_net_income() {
        assert_eq!(format_myr(dec!(-250)), "-250.00");
    }
}
