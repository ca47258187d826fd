//! Preset document schema.

use serde::{Deserialize, Serialize};
use sf_engine::{CommonData, SteamRateCase};

/// A named, versioned set of inputs for one field study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(default = "default_version")]
    pub version: u32,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub data: PresetData,
}

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetData {
    pub common: CommonDataDef,
    #[serde(default)]
    pub cases: Vec<SteamRateCase>,
}

/// Common data as written in a preset; any field may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CommonDataDef {
    #[serde(rename = "Eb", default, skip_serializing_if = "Option::is_none")]
    pub eb: Option<f64>,
    #[serde(rename = "Tb", default, skip_serializing_if = "Option::is_none")]
    pub tb: Option<f64>,
    #[serde(rename = "Ts", default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(rename = "Tr", default, skip_serializing_if = "Option::is_none")]
    pub tr: Option<f64>,
    #[serde(rename = "Ps", default, skip_serializing_if = "Option::is_none")]
    pub ps: Option<f64>,
    #[serde(rename = "K2", default, skip_serializing_if = "Option::is_none")]
    pub k2: Option<f64>,
    #[serde(rename = "rho1C1", default, skip_serializing_if = "Option::is_none")]
    pub rho1_c1: Option<f64>,
    #[serde(rename = "rho2C2", default, skip_serializing_if = "Option::is_none")]
    pub rho2_c2: Option<f64>,
    #[serde(rename = "tYears", default, skip_serializing_if = "Option::is_none")]
    pub t_years: Option<f64>,
    #[serde(rename = "So", default, skip_serializing_if = "Option::is_none")]
    pub so: Option<f64>,
    #[serde(rename = "Sor", default, skip_serializing_if = "Option::is_none")]
    pub sor: Option<f64>,
    #[serde(rename = "gammaO", default, skip_serializing_if = "Option::is_none")]
    pub gamma_o: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zn: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fsd: Option<f64>,
    #[serde(rename = "Fsb", default, skip_serializing_if = "Option::is_none")]
    pub fsb: Option<f64>,
    #[serde(rename = "Lv", default, skip_serializing_if = "Option::is_none")]
    pub lv: Option<f64>,
    #[serde(rename = "rhoW", default, skip_serializing_if = "Option::is_none")]
    pub rho_w: Option<f64>,
    #[serde(rename = "CwTs", default, skip_serializing_if = "Option::is_none")]
    pub cw_ts: Option<f64>,
    #[serde(rename = "CwTr", default, skip_serializing_if = "Option::is_none")]
    pub cw_tr: Option<f64>,
    #[serde(rename = "CwTb", default, skip_serializing_if = "Option::is_none")]
    pub cw_tb: Option<f64>,
    #[serde(rename = "fPVRef", default, skip_serializing_if = "Option::is_none")]
    pub f_pv_ref: Option<f64>,
}

impl CommonDataDef {
    /// Field keys in document order.
    pub const KEYS: [&'static str; 23] = [
        "Eb",
        "Tb",
        "Ts",
        "Tr",
        "Ps",
        "K2",
        "rho1C1",
        "rho2C2",
        "tYears",
        "So",
        "Sor",
        "gammaO",
        "phi",
        "zn",
        "zt",
        "fsd",
        "Fsb",
        "Lv",
        "rhoW",
        "CwTs",
        "CwTr",
        "CwTb",
        "fPVRef",
    ];

    /// Value of the field stored under document key `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "Eb" => self.eb,
            "Tb" => self.tb,
            "Ts" => self.ts,
            "Tr" => self.tr,
            "Ps" => self.ps,
            "K2" => self.k2,
            "rho1C1" => self.rho1_c1,
            "rho2C2" => self.rho2_c2,
            "tYears" => self.t_years,
            "So" => self.so,
            "Sor" => self.sor,
            "gammaO" => self.gamma_o,
            "phi" => self.phi,
            "zn" => self.zn,
            "zt" => self.zt,
            "fsd" => self.fsd,
            "Fsb" => self.fsb,
            "Lv" => self.lv,
            "rhoW" => self.rho_w,
            "CwTs" => self.cw_ts,
            "CwTr" => self.cw_tr,
            "CwTb" => self.cw_tb,
            "fPVRef" => self.f_pv_ref,
            _ => None,
        }
    }

    /// Set the field stored under `key`; returns false for an unknown key.
    pub fn set(&mut self, key: &str, value: Option<f64>) -> bool {
        let slot = match key {
            "Eb" => &mut self.eb,
            "Tb" => &mut self.tb,
            "Ts" => &mut self.ts,
            "Tr" => &mut self.tr,
            "Ps" => &mut self.ps,
            "K2" => &mut self.k2,
            "rho1C1" => &mut self.rho1_c1,
            "rho2C2" => &mut self.rho2_c2,
            "tYears" => &mut self.t_years,
            "So" => &mut self.so,
            "Sor" => &mut self.sor,
            "gammaO" => &mut self.gamma_o,
            "phi" => &mut self.phi,
            "zn" => &mut self.zn,
            "zt" => &mut self.zt,
            "fsd" => &mut self.fsd,
            "Fsb" => &mut self.fsb,
            "Lv" => &mut self.lv,
            "rhoW" => &mut self.rho_w,
            "CwTs" => &mut self.cw_ts,
            "CwTr" => &mut self.cw_tr,
            "CwTb" => &mut self.cw_tb,
            "fPVRef" => &mut self.f_pv_ref,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Keys of the fields that are present.
    pub fn present_keys(&self) -> Vec<&'static str> {
        Self::KEYS
            .into_iter()
            .filter(|k| self.get(k).is_some())
            .collect()
    }

    /// Engine record; absent fields become NaN and are rejected by the
    /// engine wherever a calculation needs them.
    pub fn to_common_data(&self) -> CommonData {
        CommonData {
            eb: self.eb.unwrap_or(f64::NAN),
            tb: self.tb.unwrap_or(f64::NAN),
            ts: self.ts.unwrap_or(f64::NAN),
            tr: self.tr.unwrap_or(f64::NAN),
            ps: self.ps.unwrap_or(f64::NAN),
            k2: self.k2.unwrap_or(f64::NAN),
            rho1_c1: self.rho1_c1.unwrap_or(f64::NAN),
            rho2_c2: self.rho2_c2.unwrap_or(f64::NAN),
            t_years: self.t_years.unwrap_or(f64::NAN),
            so: self.so.unwrap_or(f64::NAN),
            sor: self.sor.unwrap_or(f64::NAN),
            gamma_o: self.gamma_o.unwrap_or(f64::NAN),
            phi: self.phi.unwrap_or(f64::NAN),
            zn: self.zn.unwrap_or(f64::NAN),
            zt: self.zt.unwrap_or(f64::NAN),
            fsd: self.fsd.unwrap_or(f64::NAN),
            fsb: self.fsb.unwrap_or(f64::NAN),
            lv: self.lv.unwrap_or(f64::NAN),
            rho_w: self.rho_w.unwrap_or(f64::NAN),
            cw_ts: self.cw_ts.unwrap_or(f64::NAN),
            cw_tr: self.cw_tr.unwrap_or(f64::NAN),
            cw_tb: self.cw_tb.unwrap_or(f64::NAN),
            f_pv_ref: self.f_pv_ref.unwrap_or(f64::NAN),
        }
    }
}

impl From<&CommonData> for CommonDataDef {
    fn from(c: &CommonData) -> Self {
        let keep = |v: f64| v.is_finite().then_some(v);
        Self {
            eb: keep(c.eb),
            tb: keep(c.tb),
            ts: keep(c.ts),
            tr: keep(c.tr),
            ps: keep(c.ps),
            k2: keep(c.k2),
            rho1_c1: keep(c.rho1_c1),
            rho2_c2: keep(c.rho2_c2),
            t_years: keep(c.t_years),
            so: keep(c.so),
            sor: keep(c.sor),
            gamma_o: keep(c.gamma_o),
            phi: keep(c.phi),
            zn: keep(c.zn),
            zt: keep(c.zt),
            fsd: keep(c.fsd),
            fsb: keep(c.fsb),
            lv: keep(c.lv),
            rho_w: keep(c.rho_w),
            cw_ts: keep(c.cw_ts),
            cw_tr: keep(c.cw_tr),
            cw_tb: keep(c.cw_tb),
            f_pv_ref: keep(c.f_pv_ref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_key() {
        let mut def = CommonDataDef::default();
        for (i, key) in CommonDataDef::KEYS.iter().enumerate() {
            assert!(def.set(key, Some(i as f64 + 1.0)));
        }
        for (i, key) in CommonDataDef::KEYS.iter().enumerate() {
            assert_eq!(def.get(key), Some(i as f64 + 1.0));
        }
        assert_eq!(def.present_keys().len(), 23);
        assert!(!def.set("bogus", Some(1.0)));
        assert_eq!(def.get("bogus"), None);
    }

    #[test]
    fn absent_fields_become_nan() {
        let def = CommonDataDef {
            ts: Some(500.0),
            ..Default::default()
        };
        let common = def.to_common_data();
        assert_eq!(common.ts, 500.0);
        assert!(common.ps.is_nan());
        assert_eq!(CommonDataDef::from(&common), def);
    }

    #[test]
    fn document_keys_are_preserved() {
        let def = CommonDataDef {
            rho1_c1: Some(35.0),
            t_years: Some(2.5),
            f_pv_ref: Some(0.54),
            ..Default::default()
        };
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"rho1C1":35.0,"tYears":2.5,"fPVRef":0.54}"#);
        let back: CommonDataDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}
