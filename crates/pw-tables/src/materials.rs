//! Material corrosion-resistance factors (NACE MR0175 / ISO 15156 grading).
//!
//! Resolution order:
//! 1. first grade whose name is contained in the material string
//!    (case-insensitive), in table order;
//! 2. first fallback rule with a marker contained in the material string;
//! 3. `default_factor` (plain carbon steel).
//!
//! Order matters in both lists: it is the tie-break between overlapping names.

use crate::error::TablesResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    pub name: String,
    pub factor: f64,
}

/// Heuristic class of an unlisted material, recognised by composition markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRule {
    pub class: String,
    pub markers: Vec<String>,
    pub factor: f64,
}

impl MaterialRule {
    fn matches(&self, upper: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| upper.contains(&marker.to_uppercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialTable {
    pub grades: Vec<MaterialGrade>,
    pub fallback_rules: Vec<MaterialRule>,
    pub default_factor: f64,
}

fn grade(name: &str, factor: f64) -> MaterialGrade {
    MaterialGrade {
        name: name.to_string(),
        factor,
    }
}

fn rule(class: &str, markers: &[&str], factor: f64) -> MaterialRule {
    MaterialRule {
        class: class.to_string(),
        markers: markers.iter().map(|m| m.to_string()).collect(),
        factor,
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self {
            grades: vec![
                // carbon steels
                grade("Ст20", 1.00),
                grade("Ст45", 0.95),
                // low-alloy
                grade("09Г2С", 0.85),
                grade("17Г1С", 0.80),
                grade("10Г2", 0.88),
                // API 5L line pipe
                grade("X42", 0.90),
                grade("X46", 0.88),
                grade("X52", 0.85),
                grade("X56", 0.82),
                grade("X60", 0.80),
                grade("X65", 0.75),
                grade("X70", 0.70),
                grade("X80", 0.65),
                // stainless
                grade("13ХФА", 0.50),
                grade("08Х18Н10Т", 0.30),
                grade("AISI 304", 0.25),
                grade("AISI 316", 0.20),
                grade("Duplex 2205", 0.15),
                grade("Super Duplex 2507", 0.10),
                // nickel alloys
                grade("Inconel 625", 0.05),
                grade("Hastelloy C276", 0.03),
            ],
            fallback_rules: vec![
                // Cyrillic Х marks chromium in GOST grade names
                rule("stainless", &["Х", "CR", "NI", "MO", "INCONEL"], 0.30),
                // Cyrillic Г marks manganese; Latin X marks API grades
                rule("low-alloy", &["Г", "MN", "X"], 0.80),
            ],
            default_factor: 1.00,
        }
    }
}

impl MaterialTable {
    pub fn factor(&self, material: &str) -> f64 {
        let upper = material.to_uppercase();
        if let Some(g) = self
            .grades
            .iter()
            .find(|g| upper.contains(&g.name.to_uppercase()))
        {
            return g.factor;
        }
        if let Some(r) = self.fallback_rules.iter().find(|r| r.matches(&upper)) {
            tracing::trace!(material, class = %r.class, factor = r.factor, "material resolved by rule");
            return r.factor;
        }
        tracing::trace!(material, factor = self.default_factor, "material defaulted");
        self.default_factor
    }

    pub fn validate(&self) -> TablesResult<()> {
        for g in &self.grades {
            if g.name.trim().is_empty() {
                return Err(crate::TablesError::Invalid {
                    what: "material grade with empty name".to_string(),
                });
            }
            crate::check_factor(g.factor, &format!("material '{}'", g.name))?;
        }
        for r in &self.fallback_rules {
            crate::check_factor(r.factor, &format!("material rule '{}'", r.class))?;
        }
        crate::check_factor(self.default_factor, "material default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_grades() {
        let t = MaterialTable::default();
        assert_eq!(t.factor("Ст20"), 1.00);
        assert_eq!(t.factor("09Г2С"), 0.85);
        assert_eq!(t.factor("X65"), 0.75);
        assert_eq!(t.factor("Hastelloy C276"), 0.03);
    }

    #[test]
    fn substring_and_case_insensitive() {
        let t = MaterialTable::default();
        assert_eq!(t.factor("сталь ст20 ГОСТ 1050"), 1.00);
        assert_eq!(t.factor("труба x52 psl2"), 0.85);
        assert_eq!(t.factor("aisi 316L"), 0.20);
    }

    #[test]
    fn fallback_rules_in_order() {
        let t = MaterialTable::default();
        // Cyrillic Х (chromium) wins over Г
        assert_eq!(t.factor("12Х2Г"), 0.30);
        assert_eq!(t.factor("Monel"), 0.30);
        assert_eq!(t.factor("14Г2АФ"), 0.80);
        assert_eq!(t.factor("API X100"), 0.80);
        assert_eq!(t.factor("сталь"), 1.00);
        assert_eq!(t.factor(""), 1.00);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_name_resolves_to_a_positive_factor(name in "\\PC{0,24}") {
            let f = MaterialTable::default().factor(&name);
            prop_assert!(f > 0.0 && f <= 1.0);
        }

        #[test]
        fn case_does_not_matter(name in "[a-zA-Z0-9 ]{0,16}") {
            let t = MaterialTable::default();
            prop_assert_eq!(t.factor(&name.to_lowercase()), t.factor(&name.to_uppercase()));
        }
    }
}
