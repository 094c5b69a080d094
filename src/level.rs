//! Comfort Levels
//!
//! Six tiers read top-down with inclusive lower bounds. Only the first five
//! carry a level number; `Severe` sits below Level 5 without one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComfortLevel {
    /// >= 90
    Excellent,
    /// >= 75
    Comfortable,
    /// >= 60
    Acceptable,
    /// >= 45
    Uncomfortable,
    /// >= 30
    Poor,
    /// < 30
    Severe,
}

impl ComfortLevel {
    /// Classify a clamped CEI value
    pub fn classify(cei: f64) -> Self {
        if cei >= 90.0 {
            ComfortLevel::Excellent
        } else if cei >= 75.0 {
            ComfortLevel::Comfortable
        } else if cei >= 60.0 {
            ComfortLevel::Acceptable
        } else if cei >= 45.0 {
            ComfortLevel::Uncomfortable
        } else if cei >= 30.0 {
            ComfortLevel::Poor
        } else {
            ComfortLevel::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => "Excellent",
            ComfortLevel::Comfortable => "Comfortable",
            ComfortLevel::Acceptable => "Acceptable",
            ComfortLevel::Uncomfortable => "Uncomfortable",
            ComfortLevel::Poor => "Poor",
            ComfortLevel::Severe => "Severe",
        }
    }

    /// Level number 1-5; `None` for Severe
    pub fn tier(&self) -> Option<u8> {
        match self {
            ComfortLevel::Excellent => Some(1),
            ComfortLevel::Comfortable => Some(2),
            ComfortLevel::Acceptable => Some(3),
            ComfortLevel::Uncomfortable => Some(4),
            ComfortLevel::Poor => Some(5),
            ComfortLevel::Severe => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => "Ideal conditions for being outdoors",
            ComfortLevel::Comfortable => "Pleasant with minor drawbacks",
            ComfortLevel::Acceptable => "Tolerable for most people",
            ComfortLevel::Uncomfortable => "Noticeably unpleasant, limit exposure",
            ComfortLevel::Poor => "Unpleasant for most people",
            ComfortLevel::Severe => "Avoid prolonged time outdoors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(ComfortLevel::classify(100.0), ComfortLevel::Excellent);
        assert_eq!(ComfortLevel::classify(90.0), ComfortLevel::Excellent);
        assert_eq!(ComfortLevel::classify(89.99), ComfortLevel::Comfortable);
        assert_eq!(ComfortLevel::classify(75.0), ComfortLevel::Comfortable);
        assert_eq!(ComfortLevel::classify(60.0), ComfortLevel::Acceptable);
        assert_eq!(ComfortLevel::classify(59.54), ComfortLevel::Uncomfortable);
        assert_eq!(ComfortLevel::classify(45.0), ComfortLevel::Uncomfortable);
        assert_eq!(ComfortLevel::classify(30.0), ComfortLevel::Poor);
        assert_eq!(ComfortLevel::classify(29.99), ComfortLevel::Severe);
        assert_eq!(ComfortLevel::classify(0.0), ComfortLevel::Severe);
    }

    #[test]
    fn test_severe_has_no_level_number() {
        assert_eq!(ComfortLevel::Excellent.tier(), Some(1));
        assert_eq!(ComfortLevel::Poor.tier(), Some(5));
        assert_eq!(ComfortLevel::Severe.tier(), None);
    }

    #[test]
    fn test_serializes_as_label() {
        for level in [ComfortLevel::Comfortable, ComfortLevel::Severe] {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, serde_json::Value::from(level.label()));
        }
    }
}
