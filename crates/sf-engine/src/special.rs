//! Special functions for the Marx–Langenheim and Mandl–Volek models.

use std::f64::consts::PI;

/// Beyond this argument exp(−x²) underflows and erfc is returned as 0.
const ERFC_CUTOFF: f64 = 26.0;

/// Chebyshev-fitted coefficients, fractional error below 1.2e-7 everywhere.
const ERFC_COEFFS: [f64; 10] = [
    -1.265_512_23,
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

/// Complementary error function.
///
/// Negative arguments reflect through erfc(−x) = 2 − erfc(x).
pub fn erfc(x: f64) -> f64 {
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x == 0.0 {
        return 1.0;
    }
    if x > ERFC_CUTOFF {
        return 0.0;
    }

    let t = 1.0 / (1.0 + 0.5 * x);
    let poly = ERFC_COEFFS[1..]
        .iter()
        .rev()
        .fold(0.0, |acc, &c| c + t * acc);
    t * (-x * x + ERFC_COEFFS[0] + t * poly).exp()
}

/// Marx–Langenheim heat-fraction function:
/// G(t_d) = e^{t_d}·erfc(√t_d) + 2√(t_d/π) − 1, zero for t_d ≤ 0.
pub fn g_td(td: f64) -> f64 {
    if td <= 0.0 {
        return 0.0;
    }
    g1(td) + 2.0 * (td / PI).sqrt() - 1.0
}

/// Mandl–Volek function: G1(t_cd) = e^{t_cd}·erfc(√t_cd), zero for t_cd ≤ 0.
pub fn g1(tcd: f64) -> f64 {
    if tcd <= 0.0 {
        return 0.0;
    }
    let tail = erfc(tcd.sqrt());
    // e^{t_cd} overflows long after erfc has been cut to zero
    if tail == 0.0 {
        return 0.0;
    }
    tcd.exp() * tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erfc_reference_values() {
        assert_eq!(erfc(0.0), 1.0);
        // Reference values from the exact function.
        assert!((erfc(0.5) - 0.479_500_122_186_953_5).abs() < 2e-7);
        assert!((erfc(1.0) - 0.157_299_207_050_285_1).abs() < 2e-7);
        assert!((erfc(2.0) - 0.004_677_734_981_047_266).abs() < 1e-8);
        assert!((erfc(-1.0) - 1.842_700_792_949_715).abs() < 2e-7);
    }

    #[test]
    fn erfc_tail() {
        assert_eq!(erfc(26.5), 0.0);
        assert_eq!(erfc(1e6), 0.0);
        assert_eq!(erfc(-30.0), 2.0);
        assert!(erfc(6.0) < 1e-15);
    }

    #[test]
    fn g_functions_vanish_at_and_below_zero() {
        assert_eq!(g_td(0.0), 0.0);
        assert_eq!(g_td(-3.0), 0.0);
        assert_eq!(g1(0.0), 0.0);
        assert_eq!(g1(-1.0), 0.0);
    }

    #[test]
    fn efficiency_curve_points() {
        let cases = [
            (0.1, 0.8040),
            (0.5, 0.6421),
            (1.0, 0.5560),
            (2.0, 0.4660),
            (5.0, 0.3511),
            (10.0, 0.2739),
        ];
        for (td, expected) in cases {
            let et = g_td(td) / td;
            assert!((et - expected).abs() < 1e-3, "td={td}: {et}");
        }
    }

    #[test]
    fn g1_decreases_from_one() {
        assert!((g1(1e-12) - 1.0).abs() < 1e-5);
        assert!(g1(1.0) < g1(0.5));
        assert!((1.0 - g1(1.0) - 0.572_416).abs() < 1e-5);
    }

    #[test]
    fn large_td_stays_bounded() {
        let g = g_td(1000.0);
        assert!(g.is_finite());
        assert!(g / 1000.0 > 0.0 && g / 1000.0 < 0.05);
    }
}
