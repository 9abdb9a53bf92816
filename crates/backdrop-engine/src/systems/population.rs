//! How many particles a surface should hold.

use serde::{Deserialize, Serialize};

/// One breakpoint of a width-stepped population: surfaces narrower than
/// `below` hold `count` particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthStep {
    pub below: f32,
    pub count: usize,
}

/// Population target for a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopulationRule {
    /// Same count regardless of surface size.
    Fixed { count: usize },
    /// First step whose `below` exceeds the width wins; `otherwise` past the last.
    /// Steps must be sorted by ascending `below`.
    StepByWidth { steps: Vec<WidthStep>, otherwise: usize },
}

impl PopulationRule {
    /// The breakpoints the portfolio page uses: <500→10, <900→15, <1300→20,
    /// <1700→30, else 40.
    pub fn responsive() -> Self {
        PopulationRule::StepByWidth {
            steps: vec![
                WidthStep { below: 500.0, count: 10 },
                WidthStep { below: 900.0, count: 15 },
                WidthStep { below: 1300.0, count: 20 },
                WidthStep { below: 1700.0, count: 30 },
            ],
            otherwise: 40,
        }
    }

    /// Target particle count for a surface `width` pixels wide.
    pub fn target_for_width(&self, width: f32) -> usize {
        match self {
            PopulationRule::Fixed { count } => *count,
            PopulationRule::StepByWidth { steps, otherwise } => steps
                .iter()
                .find(|step| width < step.below)
                .map(|step| step.count)
                .unwrap_or(*otherwise),
        }
    }

    /// Whether step breakpoints are strictly increasing.
    pub fn is_sorted(&self) -> bool {
        match self {
            PopulationRule::Fixed { .. } => true,
            PopulationRule::StepByWidth { steps, .. } => {
                steps.windows(2).all(|w| w[0].below < w[1].below)
            }
        }
    }
}

impl Default for PopulationRule {
    fn default() -> Self {
        Self::responsive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_breakpoints() {
        let rule = PopulationRule::responsive();
        assert_eq!(rule.target_for_width(320.0), 10);
        assert_eq!(rule.target_for_width(499.9), 10);
        assert_eq!(rule.target_for_width(500.0), 15);
        assert_eq!(rule.target_for_width(899.0), 15);
        assert_eq!(rule.target_for_width(1000.0), 20);
        assert_eq!(rule.target_for_width(1300.0), 30);
        assert_eq!(rule.target_for_width(1699.0), 30);
        assert_eq!(rule.target_for_width(1700.0), 40);
        assert_eq!(rule.target_for_width(3840.0), 40);
    }

    #[test]
    fn fixed_ignores_width() {
        let rule = PopulationRule::Fixed { count: 30 };
        assert_eq!(rule.target_for_width(0.0), 30);
        assert_eq!(rule.target_for_width(5000.0), 30);
    }

    #[test]
    fn zero_width_uses_first_step() {
        assert_eq!(PopulationRule::responsive().target_for_width(0.0), 10);
    }

    #[test]
    fn sortedness() {
        assert!(PopulationRule::responsive().is_sorted());
        let unsorted = PopulationRule::StepByWidth {
            steps: vec![
                WidthStep { below: 900.0, count: 15 },
                WidthStep { below: 500.0, count: 10 },
            ],
            otherwise: 20,
        };
        assert!(!unsorted.is_sorted());
    }

    #[test]
    fn parse_tagged_json() {
        let fixed: PopulationRule = serde_json::from_str(r#"{ "kind": "fixed", "count": 12 }"#).unwrap();
        assert_eq!(fixed, PopulationRule::Fixed { count: 12 });

        let stepped: PopulationRule = serde_json::from_str(
            r#"{ "kind": "step_by_width", "steps": [{ "below": 600, "count": 8 }], "otherwise": 16 }"#,
        )
        .unwrap();
        assert_eq!(stepped.target_for_width(599.0), 8);
        assert_eq!(stepped.target_for_width(600.0), 16);
    }
}
