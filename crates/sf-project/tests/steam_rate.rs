use sf_engine::SteamRateCase;
use sf_project::{sync_steam_rate_units, validate_steam_rate};

#[test]
fn disagreement_beyond_half_ton_is_flagged() {
    let within = SteamRateCase {
        rate_bbl_per_day: 565.0,
        rate_tons_per_day: Some(90.1),
    };
    assert!(validate_steam_rate(&within).valid);

    let beyond = SteamRateCase {
        rate_bbl_per_day: 565.0,
        rate_tons_per_day: Some(90.3),
    };
    let v = validate_steam_rate(&beyond);
    assert!(!v.valid);
    assert_eq!(v.errors.len(), 1);
    assert!(v.errors[0].contains("Inconsistent"));
    assert!(v.errors[0].contains("89.70"));
}

#[test]
fn sync_recomputes_bbl_from_tons() {
    let inconsistent = SteamRateCase {
        rate_bbl_per_day: 500.0,
        rate_tons_per_day: Some(89.698),
    };
    assert!(!validate_steam_rate(&inconsistent).valid);

    let synced = sync_steam_rate_units(&inconsistent);
    assert_eq!(synced.rate_tons_per_day, Some(89.698));
    assert!((synced.rate_bbl_per_day - 565.0).abs() < 0.01);
    assert!(validate_steam_rate(&synced).valid);
}

#[test]
fn benchmark_conversions() {
    for (tons, bbl) in [(90.0, 566.902), (120.0, 755.870)] {
        let synced = sync_steam_rate_units(&SteamRateCase {
            rate_bbl_per_day: 1.0,
            rate_tons_per_day: Some(tons),
        });
        assert!((synced.rate_bbl_per_day - bbl).abs() < 1e-3);
    }
}

#[test]
fn synced_cases_always_validate() {
    for bbl in [1.0, 50.0, 565.0, 755.0, 10_000.0] {
        for tons in [None, Some(1.0), Some(89.698), Some(500.0)] {
            let synced = sync_steam_rate_units(&SteamRateCase {
                rate_bbl_per_day: bbl,
                rate_tons_per_day: tons,
            });
            assert!(
                validate_steam_rate(&synced).valid,
                "bbl={bbl} tons={tons:?} -> {synced:?}"
            );
        }
    }
}
