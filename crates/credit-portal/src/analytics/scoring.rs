use serde::{Deserialize, Serialize};

/// Ceiling of the composite credit score scale.
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Raw factor readings (0-100) behind a composite credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactors {
    pub composite_score: u16,
    pub repayment_history: u8,
    pub utility_data: u8,
    pub recharge_data: u8,
    pub income_stability: u8,
    pub confidence_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

pub fn score_tier(score: u16) -> ScoreTier {
    match score {
        750.. => ScoreTier::Good,
        650..=749 => ScoreTier::Fair,
        _ => ScoreTier::Poor,
    }
}

/// Score as a rounded percentage of [`MAX_CREDIT_SCORE`].
pub fn score_percentage(score: u16) -> u8 {
    let percent = (f64::from(score) / f64::from(MAX_CREDIT_SCORE) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStrength {
    Strong,
    Moderate,
    Weak,
}

impl FactorStrength {
    fn of(value: u8) -> Self {
        match value {
            75.. => Self::Strong,
            50..=74 => Self::Moderate,
            _ => Self::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub name: &'static str,
    pub value: u8,
    pub weight: u8,
    pub contribution: f64,
    pub strength: FactorStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub composite_score: u16,
    pub score_percentage: u8,
    pub tier: ScoreTier,
    pub confidence_level: u8,
    pub factors: Vec<FactorContribution>,
    pub weighted_factor_score: f64,
}

pub fn breakdown(factors: &ScoreFactors) -> ScoreBreakdown {
    let weighted = [
        ("Repayment History", factors.repayment_history, 35),
        ("Utility Data", factors.utility_data, 30),
        ("Recharge Patterns", factors.recharge_data, 25),
        ("Income Stability", factors.income_stability, 10),
    ];

    let contributions: Vec<FactorContribution> = weighted
        .into_iter()
        .map(|(name, value, weight)| FactorContribution {
            name,
            value,
            weight,
            contribution: f64::from(value) * f64::from(weight) / 100.0,
            strength: FactorStrength::of(value),
        })
        .collect();

    let weighted_factor_score = contributions.iter().map(|factor| factor.contribution).sum();

    ScoreBreakdown {
        composite_score: factors.composite_score,
        score_percentage: score_percentage(factors.composite_score),
        tier: score_tier(factors.composite_score),
        confidence_level: factors.confidence_level,
        factors: contributions,
        weighted_factor_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(score_tier(750), ScoreTier::Good);
        assert_eq!(score_tier(749), ScoreTier::Fair);
        assert_eq!(score_tier(650), ScoreTier::Fair);
        assert_eq!(score_tier(649), ScoreTier::Poor);
    }

    #[test]
    fn percentage_is_relative_to_850() {
        assert_eq!(score_percentage(742), 87);
        assert_eq!(score_percentage(850), 100);
        assert_eq!(score_percentage(0), 0);
    }

    #[test]
    fn weighted_factors_sum_contributions() {
        let result = breakdown(&ScoreFactors {
            composite_score: 742,
            repayment_history: 85,
            utility_data: 78,
            recharge_data: 82,
            income_stability: 75,
            confidence_level: 88,
        });

        let weights: u32 = result.factors.iter().map(|f| u32::from(f.weight)).sum();
        assert_eq!(weights, 100);
        assert!((result.factors[0].contribution - 29.75).abs() < 1e-9);
        assert!((result.weighted_factor_score - 81.15).abs() < 1e-9);
        assert_eq!(result.factors[1].strength, FactorStrength::Strong);
    }
}
