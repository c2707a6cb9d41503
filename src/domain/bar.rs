//! Bar and column chart value axes.

use super::continuous::{Domain, resolve_domain};
use crate::error::Result;
use crate::number::FormatTag;

/// True when the series has both a strictly negative and a strictly positive
/// value.
#[must_use]
pub fn is_diverging(values: &[f64]) -> bool {
    values.iter().any(|&v| v < 0.0) && values.iter().any(|&v| v > 0.0)
}

/// Value axis for bars. Bars always start at zero unless the series diverges.
///
/// # Errors
/// See [`resolve_domain`].
pub fn value_domain(values: &[f64], format: Option<FormatTag>) -> Result<Domain> {
    resolve_domain(values, format, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverging_needs_both_signs() {
        assert!(is_diverging(&[-5.0, 3.0]));
        assert!(!is_diverging(&[0.0, 3.0]));
        assert!(!is_diverging(&[-1.0, 0.0, -4.0]));
        assert!(!is_diverging(&[]));
    }

    #[test]
    fn positive_bars_start_at_zero() {
        let domain = value_domain(&[12.0, 48.0], None).unwrap();
        assert_eq!(domain.min, 0.0);
        assert!(domain.max > 48.0);
    }

    #[test]
    fn negative_bars_end_at_zero() {
        let domain = value_domain(&[-12.0, -48.0], None).unwrap();
        assert_eq!(domain.max, 0.0);
        assert!(domain.min < -48.0);
    }

    #[test]
    fn diverging_bars_pad_both_sides() {
        let domain = value_domain(&[-30.0, 70.0], Some(FormatTag::Percent)).unwrap();
        assert!(domain.min < -30.0);
        assert!(domain.max > 70.0);
    }
}
