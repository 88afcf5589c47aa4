use std::collections::BTreeSet;

use super::numeric::round1;
use super::rubric::{Pillar, PillarSpec};

const TOTAL_TENTHS: i64 = 1000;
/// Rounded tables may drift from 100 by this many tenths before correction.
const TOLERANCE_TENTHS: i64 = 1;

/// Redistributed pillar weights, in rubric order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    entries: Vec<(Pillar, f64)>,
}

impl WeightTable {
    pub fn get(&self, pillar: Pillar) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == pillar)
            .map(|(_, weight)| *weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }
}

/// Drop unavailable optional pillars and rescale the rest to 100, each
/// weight rounded to one decimal.
///
/// Required pillars are never dropped. When the rounded weights miss 100 by
/// more than a tenth, the table is nudged back to exactly 100.0 one tenth at
/// a time, starting with the weights whose rounding moved them furthest. A
/// zero remaining sum yields zeros.
pub fn redistribute(base: &[PillarSpec], unavailable: &BTreeSet<Pillar>) -> WeightTable {
    let remaining: Vec<&PillarSpec> = base
        .iter()
        .filter(|spec| !(spec.optional && unavailable.contains(&spec.pillar)))
        .collect();

    let remaining_sum: f64 = remaining.iter().map(|spec| spec.base_weight).sum();
    if remaining_sum <= 0.0 {
        return WeightTable {
            entries: remaining.iter().map(|spec| (spec.pillar, 0.0)).collect(),
        };
    }

    let factor = 100.0 / remaining_sum;
    let scaled: Vec<f64> = remaining
        .iter()
        .map(|spec| spec.base_weight * factor)
        .collect();
    let mut tenths: Vec<i64> = scaled
        .iter()
        .map(|weight| (round1(*weight) * 10.0).round() as i64)
        .collect();

    let drift = tenths.iter().sum::<i64>() - TOTAL_TENTHS;
    if drift.abs() > TOLERANCE_TENTHS {
        correct_drift(&scaled, &mut tenths, drift);
    }

    WeightTable {
        entries: remaining
            .iter()
            .zip(tenths)
            .map(|(spec, tenth)| (spec.pillar, tenth as f64 / 10.0))
            .collect(),
    }
}

/// Move `drift` tenths back out of (or into) the table. A surplus comes off
/// the weights rounded up the most, later pillars first on ties; a deficit
/// goes to the weights rounded down the most, earlier pillars first.
fn correct_drift(scaled: &[f64], tenths: &mut [i64], drift: i64) {
    let error = |index: usize| tenths[index] as f64 - scaled[index] * 10.0;
    let mut order: Vec<usize> = (0..tenths.len()).collect();
    if drift > 0 {
        order.sort_by(|&a, &b| error(b).total_cmp(&error(a)).then(b.cmp(&a)));
    } else {
        order.sort_by(|&a, &b| error(a).total_cmp(&error(b)).then(a.cmp(&b)));
    }

    let step = -drift.signum();
    for index in order.into_iter().take(drift.unsigned_abs() as usize) {
        tenths[index] += step;
    }
}
