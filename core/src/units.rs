// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Milliliters per fluid ounce, the fixed ratio used across the app.
pub const ML_PER_OZ: f64 = 29.574;

/// Converts milliliters to fluid ounces.
///
/// With `precision` set the result is rounded to that many decimal digits;
/// otherwise the full-precision float is returned. Negative and zero inputs
/// pass through arithmetically.
pub fn ml_to_oz(ml: f64, precision: Option<u32>) -> f64 {
    round_opt(ml / ML_PER_OZ, precision)
}

/// Converts fluid ounces to milliliters. Same precision contract as [`ml_to_oz`].
pub fn oz_to_ml(oz: f64, precision: Option<u32>) -> f64 {
    round_opt(oz * ML_PER_OZ, precision)
}

fn round_opt(val: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(digits) => {
            let factor = 10f64.powi(digits as i32);
            (val * factor).round() / factor
        }
        None => val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_oz_is_the_fixed_ratio() {
        assert_eq!(ml_to_oz(29.574, None), 1.0);
        assert_eq!(oz_to_ml(1.0, None), 29.574);
    }

    #[test]
    fn test_round_trip() {
        for ml in [0.0, 1.0, 60.0, 120.5, 29.574, 1000.0] {
            let back = oz_to_ml(ml_to_oz(ml, None), None);
            assert!((back - ml).abs() < 1e-9, "round trip failed for {ml}");
        }
    }

    #[test]
    fn test_precision_rounds_to_digits() {
        assert_eq!(ml_to_oz(100.0, Some(2)), 3.38);
        assert_eq!(oz_to_ml(2.0, Some(1)), 59.1);
        assert_eq!(ml_to_oz(100.0, Some(0)), 3.0);
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        assert_eq!(oz_to_ml(-1.0, None), -29.574);
        assert_eq!(ml_to_oz(-29.574, None), -1.0);
    }
}
