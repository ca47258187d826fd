//! Consistency between the bbl/d and t/d forms of a steam rate.

use serde::Serialize;
use sf_core::{bbl_per_day_to_metric_tons_per_day, metric_tons_per_day_to_bbl_per_day};
use sf_engine::SteamRateCase;

/// Largest disagreement, in either unit, accepted between the two rate forms.
pub const RATE_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteamRateValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    /// t/d equivalent when the case carries no t/d rate.
    pub calculated_tons_per_day: Option<f64>,
    /// bbl/d equivalent of the supplied t/d rate.
    pub calculated_bbl_per_day: Option<f64>,
}

pub fn validate_steam_rate(case: &SteamRateCase) -> SteamRateValidation {
    let mut errors = Vec::new();
    let bbl = case.rate_bbl_per_day;

    if bbl.is_nan() || bbl <= 0.0 {
        errors.push("Rate in bbl/d must be greater than zero".to_string());
    }
    if let Some(tons) = case.rate_tons_per_day {
        if tons.is_nan() || tons <= 0.0 {
            errors.push("Rate in t/d must be greater than zero".to_string());
        } else if bbl > 0.0 {
            let expected = bbl_per_day_to_metric_tons_per_day(bbl);
            if (expected - tons).abs() > RATE_TOLERANCE {
                errors.push(format!(
                    "Inconsistent rates: {bbl} bbl/d ≈ {expected:.2} t/d, but {tons} t/d was given"
                ));
            }
        }
    }

    SteamRateValidation {
        valid: errors.is_empty(),
        errors,
        calculated_tons_per_day: case
            .rate_tons_per_day
            .is_none()
            .then(|| bbl_per_day_to_metric_tons_per_day(bbl)),
        calculated_bbl_per_day: case
            .rate_tons_per_day
            .filter(|t| *t > 0.0)
            .map(metric_tons_per_day_to_bbl_per_day),
    }
}

/// Bring both rate forms into agreement.
///
/// A missing t/d rate is derived from bbl/d. When both are given and the
/// t/d rate implies a bbl/d rate more than 0.5 bbl/d away, the t/d rate wins
/// and bbl/d is recomputed.
pub fn sync_steam_rate_units(case: &SteamRateCase) -> SteamRateCase {
    let bbl = case.rate_bbl_per_day;
    match case.rate_tons_per_day {
        Some(tons) if tons != 0.0 && bbl != 0.0 => {
            let from_tons = metric_tons_per_day_to_bbl_per_day(tons);
            if (from_tons - bbl).abs() > RATE_TOLERANCE {
                SteamRateCase {
                    rate_bbl_per_day: from_tons,
                    rate_tons_per_day: Some(tons),
                }
            } else {
                *case
            }
        }
        _ if bbl != 0.0 => SteamRateCase {
            rate_bbl_per_day: bbl,
            rate_tons_per_day: Some(bbl_per_day_to_metric_tons_per_day(bbl)),
        },
        _ => *case,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(bbl: f64, tons: Option<f64>) -> SteamRateCase {
        SteamRateCase {
            rate_bbl_per_day: bbl,
            rate_tons_per_day: tons,
        }
    }

    #[test]
    fn bbl_only_is_valid_and_derives_tons() {
        let v = validate_steam_rate(&case(565.0, None));
        assert!(v.valid);
        assert!((v.calculated_tons_per_day.unwrap() - 89.698).abs() < 1e-3);
        assert_eq!(v.calculated_bbl_per_day, None);
    }

    #[test]
    fn consistent_pair_is_valid() {
        let v = validate_steam_rate(&case(565.0, Some(89.698)));
        assert!(v.valid, "{:?}", v.errors);
        assert_eq!(v.calculated_tons_per_day, None);
        assert!((v.calculated_bbl_per_day.unwrap() - 565.0).abs() < 0.01);
    }

    #[test]
    fn non_positive_rates_rejected() {
        let v = validate_steam_rate(&case(0.0, None));
        assert!(!v.valid);
        let v = validate_steam_rate(&case(565.0, Some(-1.0)));
        assert!(!v.valid);
        assert_eq!(v.errors.len(), 1);
        assert!(v.errors[0].contains("t/d"));
    }

    #[test]
    fn sync_fills_missing_tons() {
        let synced = sync_steam_rate_units(&case(755.0, None));
        assert_eq!(synced.rate_bbl_per_day, 755.0);
        assert!((synced.rate_tons_per_day.unwrap() - 119.862).abs() < 1e-3);
    }

    #[test]
    fn sync_keeps_consistent_pair() {
        let c = case(565.0, Some(89.698));
        assert_eq!(sync_steam_rate_units(&c), c);
    }

    #[test]
    fn sync_leaves_zero_rate_alone() {
        let c = case(0.0, None);
        assert_eq!(sync_steam_rate_units(&c), c);
    }
}
