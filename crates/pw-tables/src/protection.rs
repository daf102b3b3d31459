//! Protection-scheme multipliers. An unknown scheme counts as unprotected.

use crate::error::TablesResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectionTable {
    pub schemes: BTreeMap<String, f64>,
    pub unprotected: f64,
}

impl Default for ProtectionTable {
    fn default() -> Self {
        let schemes = [
            ("без защиты", 1.0),
            ("ППУ изоляц.", 0.05),
            ("эпоксид. покр.", 0.03),
            ("битум. изоляц.", 0.30),
            ("катод. з. + изоляц.", 0.01),
            ("бетонное покрытие", 0.20),
            ("полимер. изоляц. усилен.", 0.02),
            ("катод. защ. + протекторы", 0.005),
            ("двойная изоляция + мониторинг", 0.001),
            ("комплекс. защ.", 0.0001),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self {
            schemes,
            unprotected: 1.0,
        }
    }
}

impl ProtectionTable {
    pub fn factor(&self, scheme: &str) -> f64 {
        self.schemes
            .get(scheme.trim())
            .copied()
            .unwrap_or(self.unprotected)
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains_key(scheme.trim())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    pub fn validate(&self) -> TablesResult<()> {
        for (k, v) in &self.schemes {
            crate::check_factor(*v, &format!("protection '{k}'"))?;
        }
        crate::check_factor(self.unprotected, "protection default")
    }
}
