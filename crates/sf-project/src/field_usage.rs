//! Which common-data fields each reported item reads.
//!
//! Requirements are derived from one table: every item lists the fields it
//! reads directly and the items it is built on. Asking for an item pulls in
//! the fields of all its prerequisites.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::schema::PresetData;

/// The reported quantities, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ReportItem {
    /// Heated area
    A,
    /// Critical time
    B,
    /// Thermal efficiency
    C,
    /// Heat lost to adjacent layers
    D,
    /// Steam volume required
    E,
    /// Oil-steam ratio
    F,
    /// Equivalent oil-steam ratio
    G,
    /// Energy balance
    H,
}

impl ReportItem {
    pub const ALL: [ReportItem; 8] = [
        ReportItem::A,
        ReportItem::B,
        ReportItem::C,
        ReportItem::D,
        ReportItem::E,
        ReportItem::F,
        ReportItem::G,
        ReportItem::H,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportItem::A => "Heated area",
            ReportItem::B => "Critical time",
            ReportItem::C => "Thermal efficiency",
            ReportItem::D => "Heat lost",
            ReportItem::E => "Steam volume required",
            ReportItem::F => "Oil-steam ratio",
            ReportItem::G => "Equivalent oil-steam ratio",
            ReportItem::H => "Energy balance",
        }
    }

    /// Fields this item reads itself.
    pub fn direct_fields(self) -> &'static [&'static str] {
        match self {
            ReportItem::A => &[
                "tYears", "Ts", "Tr", "zt", "rho1C1", "Ps", "fsd", "K2", "rho2C2",
            ],
            ReportItem::B => &["Ps", "Tr", "fsd", "Lv", "K2", "rho1C1", "rho2C2", "zn"],
            ReportItem::C => &["tYears", "K2", "rho1C1", "rho2C2", "zt"],
            ReportItem::D => &[],
            ReportItem::E => &["Ts", "Tr", "fsd", "Lv", "rhoW", "CwTs", "CwTr"],
            ReportItem::F => &["So", "Sor", "phi", "zn"],
            ReportItem::G => &["CwTs", "CwTb", "Fsb", "Lv"],
            ReportItem::H => &["Eb", "gammaO", "So", "Sor", "phi", "zn"],
        }
    }

    /// Items whose results this item is computed from.
    pub fn prerequisites(self) -> &'static [ReportItem] {
        match self {
            ReportItem::A | ReportItem::B | ReportItem::C => &[],
            ReportItem::D | ReportItem::E => &[ReportItem::A, ReportItem::C],
            ReportItem::F => &[ReportItem::E],
            ReportItem::G => &[ReportItem::F],
            ReportItem::H => &[ReportItem::A, ReportItem::C],
        }
    }

    /// Every field needed to compute this item, prerequisites included.
    pub fn required_fields(self) -> BTreeSet<&'static str> {
        let mut out: BTreeSet<&'static str> = self.direct_fields().iter().copied().collect();
        for item in self.prerequisites() {
            out.extend(item.required_fields());
        }
        out
    }
}

impl fmt::Display for ReportItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item {:?}", self)
    }
}

impl FromStr for ReportItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportItem::ALL
            .into_iter()
            .find(|item| format!("{item:?}").eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown report item '{s}' (expected A-H)"))
    }
}

/// Fields read by the pattern-area summary rather than by a report item.
pub const PATTERN_FIELDS: [&str; 4] = ["tYears", "fPVRef", "zn", "phi"];

/// Physical range a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldRange {
    /// In [0, 1]
    Fraction,
    /// Strictly positive
    Positive,
    /// Any finite number
    Any,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldUsage {
    pub field: &'static str,
    pub used_in: Vec<ReportItem>,
    pub pattern: bool,
    /// Needed by at least one item or by the pattern summary.
    pub required: bool,
    pub range: FieldRange,
    pub description: &'static str,
}

const FIELD_INFO: [(&str, FieldRange, &str); 23] = [
    ("Eb", FieldRange::Fraction, "Steam generator efficiency"),
    ("Tb", FieldRange::Any, "Boiler feed-water temperature, °F (informational; enters through CwTb)"),
    ("Ts", FieldRange::Positive, "Steam zone temperature, °F"),
    ("Tr", FieldRange::Positive, "Original reservoir temperature, °F"),
    ("Ps", FieldRange::Positive, "Steam injection pressure, psia"),
    ("K2", FieldRange::Positive, "Thermal conductivity of adjacent layers, Btu/(ft·h·°F)"),
    ("rho1C1", FieldRange::Positive, "Volumetric heat capacity of the steam zone, Btu/(ft³·°F)"),
    ("rho2C2", FieldRange::Positive, "Volumetric heat capacity of adjacent layers, Btu/(ft³·°F)"),
    ("tYears", FieldRange::Positive, "Injection period, years"),
    ("So", FieldRange::Fraction, "Initial oil saturation"),
    ("Sor", FieldRange::Fraction, "Residual oil saturation in the steam zone"),
    ("gammaO", FieldRange::Positive, "Oil specific gravity"),
    ("phi", FieldRange::Fraction, "Porosity"),
    ("zn", FieldRange::Positive, "Net thickness, ft"),
    ("zt", FieldRange::Positive, "Gross thickness, ft"),
    ("fsd", FieldRange::Fraction, "Steam quality at the sandface"),
    ("Fsb", FieldRange::Fraction, "Steam quality at the boiler outlet"),
    ("Lv", FieldRange::Positive, "Latent heat of vaporization at Ts, Btu/lb"),
    ("rhoW", FieldRange::Positive, "Water density, lb/ft³"),
    ("CwTs", FieldRange::Any, "Water enthalpy at Ts, Btu/lb"),
    ("CwTr", FieldRange::Any, "Water enthalpy at Tr, Btu/lb"),
    ("CwTb", FieldRange::Any, "Water enthalpy at Tb, Btu/lb"),
    ("fPVRef", FieldRange::Fraction, "Reference injected pore-volume fraction"),
];

/// Usage of every common-data field, in document order.
pub fn common_data_field_usage() -> Vec<FieldUsage> {
    FIELD_INFO
        .iter()
        .map(|&(field, range, description)| {
            let used_in: Vec<ReportItem> = ReportItem::ALL
                .into_iter()
                .filter(|item| item.direct_fields().contains(&field))
                .collect();
            let pattern = PATTERN_FIELDS.contains(&field);
            FieldUsage {
                field,
                required: !used_in.is_empty() || pattern,
                used_in,
                pattern,
                range,
                description,
            }
        })
        .collect()
}

pub fn field_range(field: &str) -> Option<FieldRange> {
    FIELD_INFO
        .iter()
        .find(|(name, _, _)| *name == field)
        .map(|&(_, range, _)| range)
}

/// Union of the required fields of `items`, in document order.
pub fn required_fields_for(items: &[ReportItem]) -> Vec<&'static str> {
    let mut needed = BTreeSet::new();
    for item in items {
        needed.extend(item.required_fields());
    }
    in_document_order(&needed)
}

pub fn required_fields_for_item_a() -> Vec<&'static str> {
    required_fields_for(&[ReportItem::A])
}

/// Fields needed by every item plus the pattern summary.
pub fn required_fields_for_all_items() -> Vec<&'static str> {
    let mut needed: BTreeSet<&'static str> = required_fields_for(&ReportItem::ALL)
        .into_iter()
        .collect();
    needed.extend(PATTERN_FIELDS);
    in_document_order(&needed)
}

fn in_document_order(set: &BTreeSet<&'static str>) -> Vec<&'static str> {
    FIELD_INFO
        .iter()
        .map(|(name, _, _)| *name)
        .filter(|name| set.contains(name))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub missing_fields: Vec<&'static str>,
    /// Present, but read by none of the requested items.
    pub unused_fields: Vec<&'static str>,
}

/// Check `data` has every field the requested items read.
pub fn validate_fields_for_calculation(data: &PresetData, items: &[ReportItem]) -> FieldCheck {
    let required = required_fields_for(items);
    let missing_fields: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|f| data.common.get(f).is_none())
        .collect();
    let unused_fields = data
        .common
        .present_keys()
        .into_iter()
        .filter(|f| !required.contains(f))
        .collect();
    FieldCheck {
        valid: missing_fields.is_empty(),
        missing_fields,
        unused_fields,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelFieldCheck {
    pub valid: bool,
    pub missing_fields: Vec<&'static str>,
}

/// Check `data` has every field any calculation reads.
pub fn validate_all_model_fields(data: &PresetData) -> ModelFieldCheck {
    let missing_fields: Vec<&'static str> = required_fields_for_all_items()
        .into_iter()
        .filter(|f| data.common.get(f).is_none())
        .collect();
    ModelFieldCheck {
        valid: missing_fields.is_empty(),
        missing_fields,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCompleteness {
    pub all_fields_present: bool,
    pub missing_fields: Vec<&'static str>,
    pub fields_for_item_a: Vec<&'static str>,
    pub fields_for_other_items: Vec<&'static str>,
    pub total_fields: usize,
    pub present_fields: usize,
}

pub fn check_model_completeness(data: &PresetData) -> ModelCompleteness {
    let check = validate_all_model_fields(data);
    let fields_for_item_a = required_fields_for_item_a();
    let fields_for_other_items = required_fields_for_all_items()
        .into_iter()
        .filter(|f| !fields_for_item_a.contains(f))
        .collect();
    ModelCompleteness {
        all_fields_present: check.valid,
        missing_fields: check.missing_fields,
        fields_for_item_a,
        fields_for_other_items,
        total_fields: FIELD_INFO.len(),
        present_fields: data.common.present_keys().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CommonDataDef;

    #[test]
    fn field_info_matches_schema_keys() {
        let names: Vec<&str> = FIELD_INFO.iter().map(|(n, _, _)| *n).collect();
        assert_eq!(names, CommonDataDef::KEYS);
    }

    #[test]
    fn item_fields_are_schema_keys() {
        for item in ReportItem::ALL {
            for f in item.direct_fields() {
                assert!(CommonDataDef::KEYS.contains(f), "{item}: {f}");
            }
        }
    }

    #[test]
    fn item_a_fields() {
        assert_eq!(
            required_fields_for_item_a(),
            vec!["Ts", "Tr", "Ps", "K2", "rho1C1", "rho2C2", "tYears", "zt", "fsd"]
        );
    }

    #[test]
    fn prerequisites_are_transitive() {
        let g = ReportItem::G.required_fields();
        for f in ReportItem::A.required_fields() {
            assert!(g.contains(f));
        }
        assert!(g.contains("rhoW"));
        assert!(g.contains("So"));
        assert!(!g.contains("Eb"));
    }

    #[test]
    fn only_boiler_temperature_is_informational() {
        let usage = common_data_field_usage();
        let optional: Vec<&str> = usage.iter().filter(|u| !u.required).map(|u| u.field).collect();
        assert_eq!(optional, vec!["Tb"]);
        assert_eq!(required_fields_for_all_items().len(), 22);
    }

    #[test]
    fn parse_report_item() {
        assert_eq!("a".parse::<ReportItem>(), Ok(ReportItem::A));
        assert_eq!(" H ".parse::<ReportItem>(), Ok(ReportItem::H));
        assert!("Z".parse::<ReportItem>().is_err());
        assert_eq!(ReportItem::B.to_string(), "Item B");
    }

    #[test]
    fn ranges() {
        assert_eq!(field_range("phi"), Some(FieldRange::Fraction));
        assert_eq!(field_range("Ps"), Some(FieldRange::Positive));
        assert_eq!(field_range("CwTb"), Some(FieldRange::Any));
        assert_eq!(field_range("nope"), None);
    }
}
