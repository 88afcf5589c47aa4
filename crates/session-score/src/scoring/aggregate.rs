use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::numeric::round1;
use super::pillars::PillarScore;
use super::rubric::{Pillar, Rubric};

/// Human-readable band for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Light,
    Solid,
    Strong,
    Excellent,
    Peak,
}

impl Tier {
    /// First matching threshold wins, highest first.
    pub fn from_total(total: f64) -> Self {
        if total >= 85.0 {
            Tier::Peak
        } else if total >= 70.0 {
            Tier::Excellent
        } else if total >= 50.0 {
            Tier::Strong
        } else if total >= 30.0 {
            Tier::Solid
        } else {
            Tier::Light
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Light => "Light",
            Tier::Solid => "Solid",
            Tier::Strong => "Strong",
            Tier::Excellent => "Excellent",
            Tier::Peak => "Peak",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub total: f64,
    pub label: Tier,
    pub data_completeness: f64,
}

pub fn aggregate(rubric: Rubric, pillars: &BTreeMap<Pillar, PillarScore>) -> Aggregate {
    let raw: f64 = pillars.values().map(|pillar| pillar.score).sum();
    let total = round1(raw).clamp(0.0, 100.0);

    let defined = rubric.pillar_count();
    let data_completeness = if defined == 0 {
        0.0
    } else {
        pillars.len() as f64 / defined as f64
    };

    Aggregate {
        total,
        label: Tier::from_total(total),
        data_completeness,
    }
}
