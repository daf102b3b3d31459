//! Wall condition classification by remaining thickness.

use crate::units::Millimeters;
use std::fmt;

/// Discrete wall condition, ordered from worst to best.
///
/// The derived `Ord` is the "worst of" order used by aggregation:
/// `Critical < Poor < Satisfactory < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionLevel {
    #[cfg_attr(feature = "serde", serde(rename = "аварийное"))]
    Critical,
    #[cfg_attr(feature = "serde", serde(rename = "плохое"))]
    Poor,
    #[cfg_attr(feature = "serde", serde(rename = "удовлетворительное"))]
    Satisfactory,
    #[cfg_attr(feature = "serde", serde(rename = "хорошее"))]
    Good,
    #[cfg_attr(feature = "serde", serde(rename = "отличное"))]
    Excellent,
}

/// Display color token paired with a condition level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    LightGreen,
    Green,
}

/// Lower bounds (inclusive) of each band, best band first.
const BANDS: [(Millimeters, ConditionLevel); 4] = [
    (10.0, ConditionLevel::Excellent),
    (8.0, ConditionLevel::Good),
    (6.0, ConditionLevel::Satisfactory),
    (4.0, ConditionLevel::Poor),
];

/// Map remaining wall thickness to its condition level and color.
pub fn classify(remaining: Millimeters) -> (ConditionLevel, ColorTag) {
    let level = BANDS
        .iter()
        .find(|(min, _)| remaining >= *min)
        .map(|(_, level)| *level)
        .unwrap_or(ConditionLevel::Critical);
    (level, level.color())
}

impl ConditionLevel {
    pub const ALL: [ConditionLevel; 5] = [
        ConditionLevel::Critical,
        ConditionLevel::Poor,
        ConditionLevel::Satisfactory,
        ConditionLevel::Good,
        ConditionLevel::Excellent,
    ];

    /// Russian label, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "аварийное",
            Self::Poor => "плохое",
            Self::Satisfactory => "удовлетворительное",
            Self::Good => "хорошее",
            Self::Excellent => "отличное",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Short English tag, used for row styling.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Poor => "poor",
            Self::Satisfactory => "satisfactory",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            Self::Critical => ColorTag::Red,
            Self::Poor => ColorTag::Orange,
            Self::Satisfactory => ColorTag::Yellow,
            Self::Good => ColorTag::LightGreen,
            Self::Excellent => ColorTag::Green,
        }
    }

    /// Poor and critical walls need unplanned work.
    pub fn is_urgent(self) -> bool {
        self <= Self::Poor
    }
}

impl ColorTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::LightGreen => "lightgreen",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for ConditionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worst level among `levels`, `None` when empty.
pub fn worst<I>(levels: I) -> Option<ConditionLevel>
where
    I: IntoIterator<Item = ConditionLevel>,
{
    levels.into_iter().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(classify(10.0), (ConditionLevel::Excellent, ColorTag::Green));
        assert_eq!(classify(9.99).0, ConditionLevel::Good);
        assert_eq!(classify(8.0).0, ConditionLevel::Good);
        assert_eq!(classify(6.0).0, ConditionLevel::Satisfactory);
        assert_eq!(classify(5.999).0, ConditionLevel::Poor);
        assert_eq!(classify(4.0), (ConditionLevel::Poor, ColorTag::Orange));
        assert_eq!(classify(3.99), (ConditionLevel::Critical, ColorTag::Red));
        assert_eq!(classify(0.1).0, ConditionLevel::Critical);
    }

    #[test]
    fn order_is_worst_first() {
        assert!(ConditionLevel::Critical < ConditionLevel::Poor);
        assert!(ConditionLevel::Poor < ConditionLevel::Satisfactory);
        assert!(ConditionLevel::Good < ConditionLevel::Excellent);
        let w = worst([
            ConditionLevel::Excellent,
            ConditionLevel::Poor,
            ConditionLevel::Critical,
        ]);
        assert_eq!(w, Some(ConditionLevel::Critical));
        assert_eq!(worst(std::iter::empty()), None);
    }

    #[test]
    fn labels_round_trip() {
        for level in ConditionLevel::ALL {
            assert_eq!(ConditionLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(ConditionLevel::Good.color().as_str(), "lightgreen");
        assert!(ConditionLevel::Poor.is_urgent());
        assert!(!ConditionLevel::Satisfactory.is_urgent());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classify_is_monotone(a in 0.0_f64..20.0, b in 0.0_f64..20.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(lo).0 <= classify(hi).0);
        }
    }
}
