// sf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Energy as UomEnergy, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Energy = UomEnergy;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

/// Mass of one barrel of water, lb.
pub const LB_PER_BBL_WATER: f64 = 350.0;
/// Pounds per metric ton.
pub const LB_PER_METRIC_TON: f64 = 2204.62;
/// Pounds per short ton.
pub const LB_PER_SHORT_TON: f64 = 2000.0;
/// Cubic feet per barrel.
pub const FT3_PER_BBL: f64 = 5.615;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

#[inline]
pub fn bbl_per_day_to_metric_tons_per_day(bbl_per_day: f64) -> f64 {
    bbl_per_day * LB_PER_BBL_WATER / LB_PER_METRIC_TON
}

#[inline]
pub fn metric_tons_per_day_to_bbl_per_day(tons_per_day: f64) -> f64 {
    tons_per_day * LB_PER_METRIC_TON / LB_PER_BBL_WATER
}

#[inline]
pub fn bbl_per_day_to_short_tons_per_day(bbl_per_day: f64) -> f64 {
    bbl_per_day * LB_PER_BBL_WATER / LB_PER_SHORT_TON
}

#[inline]
pub fn short_tons_per_day_to_bbl_per_day(tons_per_day: f64) -> f64 {
    tons_per_day * LB_PER_SHORT_TON / LB_PER_BBL_WATER
}

/// True when `tons_per_day` is the metric-ton equivalent of `bbl_per_day`
/// within `tolerance` t/d.
pub fn validate_bbl_to_tons_conversion(bbl_per_day: f64, tons_per_day: f64, tolerance: f64) -> bool {
    (bbl_per_day_to_metric_tons_per_day(bbl_per_day) - tons_per_day).abs() <= tolerance
}

#[inline]
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

#[inline]
pub fn years_to_hours(years: f64) -> f64 {
    years_to_days(years) * HOURS_PER_DAY
}

#[inline]
pub fn ft2(v: f64) -> Area {
    use uom::si::area::square_foot;
    Area::new::<square_foot>(v)
}

#[inline]
pub fn btu(v: f64) -> Energy {
    use uom::si::energy::btu_it;
    Energy::new::<btu_it>(v)
}

#[inline]
pub fn bbl(v: f64) -> Volume {
    use uom::si::volume::barrel;
    Volume::new::<barrel>(v)
}

#[inline]
pub fn ft3(v: f64) -> Volume {
    use uom::si::volume::cubic_foot;
    Volume::new::<cubic_foot>(v)
}

#[inline]
pub fn deg_f(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn psia(v: f64) -> Pressure {
    use uom::si::pressure::psi;
    Pressure::new::<psi>(v)
}

/// Unit system used when reporting results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// ft², Btu, bbl, °F, psia
    #[default]
    Field,
    /// m², J, m³, °C, Pa
    Si,
}

pub mod si {
    //! Field-unit to SI scalar conversions for reporting.
    use super::*;

    pub fn square_meters(ft2_value: f64) -> f64 {
        use uom::si::area::square_meter;
        ft2(ft2_value).get::<square_meter>()
    }

    pub fn joules(btu_value: f64) -> f64 {
        use uom::si::energy::joule;
        btu(btu_value).get::<joule>()
    }

    pub fn cubic_meters_from_bbl(bbl_value: f64) -> f64 {
        use uom::si::volume::cubic_meter;
        bbl(bbl_value).get::<cubic_meter>()
    }

    pub fn cubic_meters_from_ft3(ft3_value: f64) -> f64 {
        use uom::si::volume::cubic_meter;
        ft3(ft3_value).get::<cubic_meter>()
    }

    pub fn celsius(deg_f_value: f64) -> f64 {
        use uom::si::thermodynamic_temperature::degree_celsius;
        deg_f(deg_f_value).get::<degree_celsius>()
    }

    pub fn pascals(psia_value: f64) -> f64 {
        use uom::si::pressure::pascal;
        psia(psia_value).get::<pascal>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_rates_convert() {
        assert!((bbl_per_day_to_metric_tons_per_day(565.0) - 89.698).abs() < 1e-3);
        assert!((bbl_per_day_to_metric_tons_per_day(755.0) - 119.862).abs() < 1e-3);
        assert!((metric_tons_per_day_to_bbl_per_day(90.0) - 566.902).abs() < 1e-3);
        assert!((metric_tons_per_day_to_bbl_per_day(120.0) - 755.870).abs() < 1e-3);
        assert!((bbl_per_day_to_short_tons_per_day(565.0) - 98.875).abs() < 1e-9);
        assert!((short_tons_per_day_to_bbl_per_day(98.875) - 565.0).abs() < 1e-9);
    }

    #[test]
    fn conversion_check_uses_tolerance() {
        assert!(validate_bbl_to_tons_conversion(565.0, 89.7, 0.1));
        assert!(!validate_bbl_to_tons_conversion(565.0, 90.0, 0.1));
    }

    #[test]
    fn injection_period_in_hours() {
        assert_eq!(years_to_hours(2.5), 21_900.0);
    }

    #[test]
    fn si_conversions() {
        assert!((si::square_meters(1.0) - 0.092_903_04).abs() < 1e-9);
        assert!((si::celsius(212.0) - 100.0).abs() < 1e-9);
        assert!((si::celsius(32.0)).abs() < 1e-9);
        assert!((si::pascals(14.695_95) - 101_325.0).abs() < 1.0);
        assert!((si::cubic_meters_from_bbl(1.0) - 0.158_987).abs() < 1e-5);
        assert!((si::cubic_meters_from_ft3(1.0) - 0.028_316_8).abs() < 1e-6);
        assert!((si::joules(1.0) - 1055.06).abs() < 0.1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn metric_ton_roundtrip(x in 1e-3f64..1e6) {
            let back = metric_tons_per_day_to_bbl_per_day(bbl_per_day_to_metric_tons_per_day(x));
            prop_assert!((back - x).abs() < 1e-2);
        }

        #[test]
        fn short_ton_roundtrip(x in 1e-3f64..1e6) {
            let back = short_tons_per_day_to_bbl_per_day(bbl_per_day_to_short_tons_per_day(x));
            prop_assert!((back - x).abs() < 1e-2);
        }
    }
}
