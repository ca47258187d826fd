//! Mandl–Volek fhv → t_cd correlation, tabulated from fhv = 1 − G1(t_cd).

use crate::fhv_tcd::FhvTcdEntry;

const fn row(fhv: f64, tcd: f64) -> FhvTcdEntry {
    FhvTcdEntry { fhv, tcd }
}

#[rustfmt::skip]
pub(crate) const FHV_TCD: &[FhvTcdEntry] = &[
    row(0.000000, 0.0),
    row(0.075042, 0.005),
    row(0.103543, 0.01),
    row(0.141520, 0.02),
    row(0.168943, 0.03),
    row(0.209623, 0.05),
    row(0.247060, 0.075),
    row(0.276422, 0.1),
    row(0.321625, 0.15),
    row(0.356212, 0.2),
    row(0.384310, 0.25),
    row(0.407982, 0.3),
    row(0.446394, 0.4),
    row(0.476843, 0.5),
    row(0.501975, 0.6),
    row(0.523297, 0.7),
    row(0.541754, 0.8),
    row(0.557979, 0.9),
    row(0.572416, 1.0),
    row(0.597153, 1.2),
    row(0.617739, 1.4),
    row(0.635267, 1.6),
    row(0.650454, 1.8),
    row(0.663796, 2.0),
    row(0.691206, 2.5),
    row(0.712659, 3.0),
    row(0.730077, 3.5),
    row(0.744604, 4.0),
    row(0.767674, 5.0),
    row(0.785374, 6.0),
    row(0.799524, 7.0),
    row(0.811179, 8.0),
    row(0.829422, 10.0),
    row(0.843209, 12.0),
    row(0.858763, 15.0),
    row(0.876786, 20.0),
    row(0.889295, 25.0),
    row(0.898631, 30.0),
    row(0.911869, 40.0),
    row(0.920987, 50.0),
    row(0.927756, 60.0),
    row(0.937309, 80.0),
    row(0.943859, 100.0),
];
