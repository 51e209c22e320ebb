use crate::config::FairnessParameters;
use crate::models::{TradeAsset, TradeResult, Verdict};
use tracing::debug;

/// Fairness calculator for two-sided trades
#[derive(Debug, Clone, Default)]
pub struct FairnessCalculator {
    params: FairnessParameters,
}

/// Evaluate a trade with the default fairness thresholds
pub fn evaluate(team_a: &[TradeAsset], team_b: &[TradeAsset]) -> TradeResult {
    FairnessCalculator::default().evaluate(team_a, team_b)
}

/// Sum of asset values; zero for an empty bundle, saturating at the `i64` bounds
pub fn total_value(assets: &[TradeAsset]) -> i64 {
    assets.iter().fold(0i64, |total, asset| total.saturating_add(asset.value()))
}

/// Round half up to one decimal place; infinities pass through
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

impl FairnessCalculator {
    /// Create a new fairness calculator
    pub fn new(params: FairnessParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FairnessParameters {
        &self.params
    }

    /// Fairness percentage before rounding
    ///
    /// 100 minus the difference as a share of the average total, floored at 0.
    /// Two empty (or zero valued) sides are perfectly fair.
    pub fn fairness(team_a_value: i64, team_b_value: i64) -> f64 {
        let difference = team_a_value as f64 - team_b_value as f64;
        let average = (team_a_value as f64 + team_b_value as f64) / 2.0;

        if average == 0.0 {
            100.0
        } else {
            (100.0 - (difference.abs() / average * 100.0).min(100.0)).clamp(0.0, 100.0)
        }
    }

    /// Compare the two bundles and pick a verdict
    pub fn evaluate(&self, team_a: &[TradeAsset], team_b: &[TradeAsset]) -> TradeResult {
        let team_a_value = total_value(team_a);
        let team_b_value = total_value(team_b);
        let difference = team_a_value.saturating_sub(team_b_value);
        let gap = team_a_value as f64 - team_b_value as f64;
        let average = (team_a_value as f64 + team_b_value as f64) / 2.0;
        let fairness = Self::fairness(team_a_value, team_b_value);

        let (winner, message) = if fairness >= self.params.very_fair_threshold {
            (Verdict::Fair, "This is a very fair trade!".to_string())
        } else if gap.abs() < average * self.params.fair_band {
            (Verdict::Fair, "Fair trade".to_string())
        } else if difference > 0 {
            // team B total of zero reports an infinite gain
            let gain = round_to_tenth(gap / team_b_value as f64 * 100.0);
            (Verdict::SideA, format!("Team A gains +{gain:.1}% value"))
        } else {
            let gain = round_to_tenth(gap.abs() / team_a_value as f64 * 100.0);
            (Verdict::SideB, format!("Team B gains +{gain:.1}% value"))
        };

        debug!(
            "Evaluated trade: A={} B={} diff={} fairness={:.2} verdict={:?}",
            team_a_value, team_b_value, difference, fairness, winner
        );

        TradeResult {
            team_a_value,
            team_b_value,
            difference,
            fairness_percentage: (fairness + 0.5).floor() as u32,
            winner,
            message,
        }
    }
}
