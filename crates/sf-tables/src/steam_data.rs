//! Saturated-steam reference data, English units.
//!
//! Columns: temperature (°F), absolute pressure (psia), liquid enthalpy hf,
//! latent heat hfg, vapor enthalpy hg (Btu/lb, datum liquid water at 32 °F).
//! Derived from the IAPWS-IF97 saturation line.

use crate::steam::SaturatedSteamEntry;

const fn row(temperature_f: f64, pressure_psia: f64, hf: f64, hfg: f64, hg: f64) -> SaturatedSteamEntry {
    SaturatedSteamEntry {
        temperature_f,
        pressure_psia,
        hf,
        hfg,
        hg,
    }
}

#[rustfmt::skip]
pub(crate) const SATURATED_STEAM: &[SaturatedSteamEntry] = &[
    row(32.0, 0.0887, 0.00, 1075.20, 1075.20),
    row(35.0, 0.1000, 3.00, 1073.50, 1076.51),
    row(40.0, 0.1217, 8.03, 1070.67, 1078.70),
    row(45.0, 0.1476, 13.05, 1067.84, 1080.89),
    row(50.0, 0.1781, 18.07, 1065.01, 1083.07),
    row(60.0, 0.2564, 28.08, 1059.36, 1087.44),
    row(70.0, 0.3633, 38.08, 1053.71, 1091.78),
    row(80.0, 0.5074, 48.07, 1048.05, 1096.11),
    row(90.0, 0.6990, 58.05, 1042.37, 1100.43),
    row(100.0, 0.9504, 68.04, 1036.68, 1104.71),
    row(110.0, 1.2766, 78.02, 1030.96, 1108.98),
    row(120.0, 1.6949, 88.00, 1025.22, 1113.22),
    row(130.0, 2.2258, 97.99, 1019.44, 1117.43),
    row(140.0, 2.8929, 107.98, 1013.62, 1121.60),
    row(150.0, 3.7231, 117.97, 1007.77, 1125.74),
    row(160.0, 4.7472, 127.98, 1001.86, 1129.83),
    row(170.0, 5.9998, 137.99, 995.90, 1133.89),
    row(180.0, 7.5196, 148.01, 989.87, 1137.89),
    row(190.0, 9.3497, 158.05, 983.78, 1141.83),
    row(200.0, 11.5376, 168.10, 977.62, 1145.71),
    row(212.0, 14.7094, 180.18, 970.11, 1150.29),
    row(220.0, 17.2008, 188.25, 965.03, 1153.28),
    row(230.0, 20.7949, 198.35, 958.60, 1156.95),
    row(240.0, 24.9849, 208.47, 952.06, 1160.54),
    row(250.0, 29.8426, 218.62, 945.41, 1164.03),
    row(260.0, 35.4450, 228.79, 938.65, 1167.44),
    row(270.0, 41.8742, 238.99, 931.75, 1170.73),
    row(280.0, 49.2175, 249.21, 924.71, 1173.92),
    row(290.0, 57.5672, 259.47, 917.53, 1177.00),
    row(300.0, 67.0206, 269.76, 910.20, 1179.96),
    row(310.0, 77.6802, 280.08, 902.70, 1182.79),
    row(320.0, 89.6535, 290.44, 895.04, 1185.48),
    row(330.0, 103.0528, 300.85, 887.19, 1188.04),
    row(340.0, 117.9954, 311.30, 879.15, 1190.45),
    row(350.0, 134.6032, 321.79, 870.92, 1192.71),
    row(360.0, 153.0032, 332.34, 862.47, 1194.81),
    row(370.0, 173.3267, 342.94, 853.81, 1196.74),
    row(380.0, 195.7097, 353.59, 844.91, 1198.50),
    row(390.0, 220.2928, 364.31, 835.77, 1200.08),
    row(400.0, 247.2210, 375.10, 826.37, 1201.46),
    row(410.0, 276.6436, 385.95, 816.69, 1202.65),
    row(420.0, 308.7146, 396.89, 806.73, 1203.62),
    row(430.0, 343.5920, 407.90, 796.46, 1204.37),
    row(440.0, 381.4383, 419.01, 785.88, 1204.88),
    row(450.0, 422.4205, 430.20, 774.95, 1205.16),
    row(460.0, 466.7098, 441.50, 763.66, 1205.17),
    row(470.0, 514.4822, 452.91, 752.00, 1204.91),
    row(480.0, 565.9182, 464.44, 739.92, 1204.36),
    row(490.0, 621.2031, 476.10, 727.42, 1203.51),
    row(500.0, 680.5274, 487.89, 714.45, 1202.34),
    row(510.0, 744.0870, 499.83, 701.00, 1200.82),
    row(520.0, 812.0836, 511.93, 687.01, 1198.94),
    row(530.0, 884.7251, 524.21, 672.46, 1196.67),
    row(540.0, 962.2266, 536.69, 657.29, 1193.98),
    row(550.0, 1044.8107, 549.37, 641.46, 1190.83),
    row(560.0, 1132.7089, 562.29, 624.90, 1187.19),
    row(570.0, 1226.1624, 575.48, 607.53, 1183.01),
    row(580.0, 1325.4242, 588.95, 589.28, 1178.23),
    row(590.0, 1430.7604, 602.75, 570.04, 1172.80),
    row(600.0, 1542.4529, 616.93, 549.69, 1166.62),
    row(610.0, 1660.8026, 631.53, 528.08, 1159.60),
    row(620.0, 1786.1326, 646.62, 504.99, 1151.61),
    row(630.0, 1918.7940, 662.30, 480.18, 1142.47),
    row(640.0, 2059.1715, 678.69, 453.26, 1131.95),
];
