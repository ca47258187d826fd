//! Clamped piecewise-linear lookup shared by every reference table.
//!
//! A lookup resolves in this order:
//! 1. a row whose key is within `tol` of the query (stored value, not interpolated)
//! 2. query at or below the first key, or at or above the last (boundary row, not interpolated)
//! 3. the bracketing pair of rows (linear interpolation)

use crate::error::{TableError, TableResult};

/// Where a query landed relative to a table's keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// Matched row `i` within tolerance.
    Exact(usize),
    /// At or below the first key (also returned for NaN).
    ClampLow,
    /// At or above the last key.
    ClampHigh,
    /// Strictly between rows `lo` and `lo + 1`, `ratio` in (0, 1).
    Between { lo: usize, ratio: f64 },
}

impl Bracket {
    pub fn is_interpolated(&self) -> bool {
        matches!(self, Bracket::Between { .. })
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, Bracket::ClampLow | Bracket::ClampHigh)
    }
}

/// Locate `x` in `rows` ordered strictly ascending by `key`.
///
/// `rows` must be non-empty; every table type checks this on construction.
pub fn locate<T>(rows: &[T], key: impl Fn(&T) -> f64, x: f64, tol: f64) -> Bracket {
    debug_assert!(!rows.is_empty());
    let last = rows.len() - 1;

    // First index whose key is >= x; the only exact-match candidates are it and its predecessor.
    let idx = rows.partition_point(|r| key(r) < x);
    for candidate in [idx.checked_sub(1), Some(idx)].into_iter().flatten() {
        if candidate <= last && (x - key(&rows[candidate])).abs() < tol {
            return Bracket::Exact(candidate);
        }
    }

    if x.is_nan() || x <= key(&rows[0]) {
        return Bracket::ClampLow;
    }
    if x >= key(&rows[last]) {
        return Bracket::ClampHigh;
    }

    let lo = idx - 1;
    let k0 = key(&rows[lo]);
    let k1 = key(&rows[idx]);
    Bracket::Between {
        lo,
        ratio: (x - k0) / (k1 - k0),
    }
}

/// Resolve a bracket to a value using `value` as the column accessor.
pub fn resolve<T>(rows: &[T], bracket: Bracket, value: impl Fn(&T) -> f64) -> f64 {
    match bracket {
        Bracket::Exact(i) => value(&rows[i]),
        Bracket::ClampLow => value(&rows[0]),
        Bracket::ClampHigh => value(&rows[rows.len() - 1]),
        Bracket::Between { lo, ratio } => lerp(value(&rows[lo]), value(&rows[lo + 1]), ratio),
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + ratio * (b - a)
}

/// Check that a column is non-empty, finite and strictly increasing.
pub(crate) fn validate_keys(
    table: &'static str,
    key_name: &'static str,
    keys: impl IntoIterator<Item = f64>,
) -> TableResult<()> {
    let mut prev: Option<f64> = None;
    let mut count = 0usize;
    for (index, k) in keys.into_iter().enumerate() {
        count += 1;
        if !k.is_finite() {
            return Err(TableError::NonFinite { table, index });
        }
        if let Some(p) = prev {
            if k <= p {
                return Err(TableError::NotMonotonic {
                    table,
                    key: key_name,
                    index,
                });
            }
        }
        prev = Some(k);
    }
    if count == 0 {
        return Err(TableError::Empty { table });
    }
    Ok(())
}

/// Check that every value in a column is finite.
pub(crate) fn validate_finite(
    table: &'static str,
    values: impl IntoIterator<Item = f64>,
) -> TableResult<()> {
    for (index, v) in values.into_iter().enumerate() {
        if !v.is_finite() {
            return Err(TableError::NonFinite { table, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

    fn at(x: f64) -> Bracket {
        locate(&KEYS, |k| *k, x, 1e-4)
    }

    #[test]
    fn exact_keys_are_not_interpolated() {
        assert_eq!(at(1.0), Bracket::Exact(0));
        assert_eq!(at(4.00005), Bracket::Exact(2));
        assert_eq!(at(7.99995), Bracket::Exact(3));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(at(0.5), Bracket::ClampLow);
        assert_eq!(at(-1e9), Bracket::ClampLow);
        assert_eq!(at(9.0), Bracket::ClampHigh);
        assert_eq!(at(f64::NAN), Bracket::ClampLow);
        assert!(at(9.0).is_clamped());
        assert!(!at(9.0).is_interpolated());
    }

    #[test]
    fn interior_points_interpolate() {
        match at(3.0) {
            Bracket::Between { lo, ratio } => {
                assert_eq!(lo, 1);
                assert!((ratio - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected bracket {other:?}"),
        }
        let v = resolve(&KEYS, at(6.0), |k| k * 10.0);
        assert!((v - 60.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_table_always_clamps_or_matches() {
        let one = [5.0];
        assert_eq!(locate(&one, |k| *k, 5.0, 1e-3), Bracket::Exact(0));
        assert_eq!(locate(&one, |k| *k, 4.0, 1e-3), Bracket::ClampLow);
        assert_eq!(locate(&one, |k| *k, 6.0, 1e-3), Bracket::ClampHigh);
    }

    #[test]
    fn key_validation() {
        assert!(validate_keys("t", "k", KEYS).is_ok());
        assert_eq!(
            validate_keys("t", "k", [1.0, 1.0]),
            Err(TableError::NotMonotonic {
                table: "t",
                key: "k",
                index: 1
            })
        );
        assert_eq!(
            validate_keys("t", "k", Vec::<f64>::new()),
            Err(TableError::Empty { table: "t" })
        );
        assert_eq!(
            validate_keys("t", "k", [1.0, f64::INFINITY]),
            Err(TableError::NonFinite { table: "t", index: 1 })
        );
        assert!(validate_finite("t", [f64::NAN]).is_err());
    }
}
