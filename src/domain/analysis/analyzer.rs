//! Five-number analyzer - negativity, average threshold, parity and subset.

use serde::{Deserialize, Serialize};

use super::FiveNumbers;

/// Average strictly above this value sets `average_gt_50`.
pub const AVERAGE_THRESHOLD: f64 = 50.0;

/// Values strictly above this value land in `gt10_sorted`.
pub const SUBSET_THRESHOLD: f64 = 10.0;

/// Immutable output of one analysis.
///
/// Field names are part of the stored document and the HTTP view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Always true; numeric input is guaranteed before analysis runs.
    pub all_numeric: bool,
    pub original: Vec<f64>,
    pub has_negative: bool,
    /// Values below zero, in input order.
    pub negatives: Vec<f64>,
    pub average: f64,
    pub average_gt_50: bool,
    /// Count of values strictly above zero.
    pub positive_count: u32,
    /// Zero positives counts as even.
    pub positive_count_is_even: bool,
    /// Values strictly above 10, ascending.
    pub gt10_sorted: Vec<f64>,
}

impl AnalysisResult {
    /// Number of inputs that are exactly zero.
    ///
    /// `negatives.len() + zero_count() + positive_count` always equals 5.
    pub fn zero_count(&self) -> usize {
        self.original.iter().filter(|v| **v == 0.0).count()
    }
}

/// Analyzes five values.
///
/// # Edge Cases
/// - Zero is neither negative nor positive
/// - A value of exactly 10 is excluded from `gt10_sorted`
/// - Equal values keep their duplicates in `gt10_sorted`
/// - Inputs near `f64::MAX` still give a finite average
pub fn analyze(numbers: &FiveNumbers) -> AnalysisResult {
    let original = numbers.values().to_vec();

    let negatives: Vec<f64> = original.iter().copied().filter(|v| *v < 0.0).collect();
    let has_negative = !negatives.is_empty();

    let average = mean(&original);
    let average_gt_50 = average > AVERAGE_THRESHOLD;

    let positive_count = original.iter().filter(|v| **v > 0.0).count() as u32;
    let positive_count_is_even = positive_count & 1 == 0;

    let mut gt10_sorted: Vec<f64> = original
        .iter()
        .copied()
        .filter(|v| *v > SUBSET_THRESHOLD)
        .collect();
    gt10_sorted.sort_by(f64::total_cmp);

    AnalysisResult {
        all_numeric: true,
        original,
        has_negative,
        negatives,
        average,
        average_gt_50,
        positive_count,
        positive_count_is_even,
        gt10_sorted,
    }
}

/// Arithmetic mean that stays finite for finite input.
///
/// The plain sum can overflow for large magnitudes. The fallback scales
/// each value first and clamps to the input range, which bounds the mean.
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| v / n).sum::<f64>().clamp(lo, hi)
}
