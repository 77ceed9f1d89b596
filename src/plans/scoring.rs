// Plan comparison scoring
//
// Ranks a candidate set with a weighted sum over min-max normalized
// features: data per day, price (inverted, cheaper is better), validity
// and perk count. Scores are comparable only within one candidate set.

use serde::Serialize;
use thiserror::Error;

use super::catalog::{plans_for, Plan};
use crate::reference::operators::OperatorId;

/// Relative importance of each plan feature
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanWeights {
    pub data: f64,
    pub price: f64,
    pub validity: f64,
    pub perks: f64,
}

impl Default for PlanWeights {
    fn default() -> Self {
        Self {
            data: 0.35,
            price: 0.30,
            validity: 0.25,
            perks: 0.10,
        }
    }
}

impl PlanWeights {
    fn total(&self) -> f64 {
        self.data + self.price + self.validity + self.perks
    }

    fn valid(&self) -> bool {
        let non_negative =
            self.data >= 0.0 && self.price >= 0.0 && self.validity >= 0.0 && self.perks >= 0.0;
        non_negative && self.total() > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("plan weights must be non-negative and sum to a positive value")]
    InvalidWeights,
}

/// A plan with its score within one candidate set
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPlan {
    pub plan: &'static Plan,
    /// 0.0..=1.0 within the candidate set
    pub score: f64,
}

// Min-max normalization; a feature with no spread counts fully for everyone
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        1.0
    }
}

/// Score a candidate set, best first
///
/// Ties are broken by lower price, then plan id, so the ordering is
/// deterministic for identical inputs.
pub fn score_plans(
    candidates: &[&'static Plan],
    weights: &PlanWeights,
) -> Result<Vec<ScoredPlan>, PlanError> {
    if !weights.valid() {
        return Err(PlanError::InvalidWeights);
    }
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let data: Vec<f64> = candidates.iter().map(|p| p.data_mb_per_day()).collect();
    let price: Vec<f64> = candidates.iter().map(|p| p.price_inr as f64).collect();
    let validity: Vec<f64> = candidates.iter().map(|p| p.validity_days as f64).collect();
    let perks: Vec<f64> = candidates.iter().map(|p| p.perks.len() as f64).collect();

    let bounds = |values: &[f64]| {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    };
    let (data_min, data_max) = bounds(&data);
    let (price_min, price_max) = bounds(&price);
    let (validity_min, validity_max) = bounds(&validity);
    let (perks_min, perks_max) = bounds(&perks);

    let total = weights.total();
    let mut scored: Vec<ScoredPlan> = candidates
        .iter()
        .enumerate()
        .map(|(i, &plan)| {
            let sum = weights.data * normalize(data[i], data_min, data_max)
                // price is inverted: the cheapest plan gets the full weight
                + weights.price * (1.0 - normalize(price[i], price_min, price_max))
                + weights.validity * normalize(validity[i], validity_min, validity_max)
                + weights.perks * normalize(perks[i], perks_min, perks_max);
            ScoredPlan {
                plan,
                score: sum / total,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.plan.price_inr.cmp(&b.plan.price_inr))
            .then_with(|| a.plan.id.cmp(b.plan.id))
    });
    Ok(scored)
}

/// Rank an operator's catalog and keep the best `top_n`
pub fn recommend(
    operator: OperatorId,
    weights: &PlanWeights,
    top_n: usize,
) -> Result<Vec<ScoredPlan>, PlanError> {
    let candidates = plans_for(operator);
    log::debug!(
        "scoring {} plans for {:?} (weights {:?})",
        candidates.len(),
        operator,
        weights
    );
    let mut scored = score_plans(&candidates, weights)?;
    scored.truncate(top_n);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::catalog::plan_by_id;

    #[test]
    fn test_rejects_zero_weights() {
        let weights = PlanWeights { data: 0.0, price: 0.0, validity: 0.0, perks: 0.0 };
        assert!(matches!(
            score_plans(&[], &weights),
            Err(PlanError::InvalidWeights)
        ));
        let weights = PlanWeights { data: -1.0, price: 1.0, validity: 0.0, perks: 0.0 };
        assert!(score_plans(&[], &weights).is_err());
    }

    #[test]
    fn test_empty_candidates() {
        assert!(score_plans(&[], &PlanWeights::default()).unwrap().is_empty());
    }

    #[test]
    fn test_single_candidate_scores_one() {
        let plan = plan_by_id("jio-239").unwrap();
        let scored = score_plans(&[plan], &PlanWeights::default()).unwrap();
        assert_eq!(scored.len(), 1);
        assert!((scored[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_bounded_and_sorted() {
        let scored = recommend(OperatorId::Jio, &PlanWeights::default(), usize::MAX).unwrap();
        assert_eq!(scored.len(), plans_for(OperatorId::Jio).len());
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for s in &scored {
            assert!((0.0..=1.0).contains(&s.score), "{} out of range", s.score);
        }
    }

    #[test]
    fn test_price_weight_prefers_cheapest() {
        let weights = PlanWeights { data: 0.0, price: 1.0, validity: 0.0, perks: 0.0 };
        let scored = recommend(OperatorId::Bsnl, &weights, 1).unwrap();
        assert_eq!(scored[0].plan.id, "bsnl-107");
    }

    #[test]
    fn test_validity_weight_prefers_longest() {
        let weights = PlanWeights { data: 0.0, price: 0.0, validity: 1.0, perks: 0.0 };
        let scored = recommend(OperatorId::Bsnl, &weights, 1).unwrap();
        assert_eq!(scored[0].plan.id, "bsnl-797");
    }

    #[test]
    fn test_data_weight_prefers_biggest_bundle() {
        let weights = PlanWeights { data: 1.0, price: 0.0, validity: 0.0, perks: 0.0 };
        let scored = recommend(OperatorId::Jio, &weights, 1).unwrap();
        assert_eq!(scored[0].plan.id, "jio-2999");
    }

    #[test]
    fn test_determinism() {
        let a = recommend(OperatorId::Airtel, &PlanWeights::default(), 5).unwrap();
        let b = recommend(OperatorId::Airtel, &PlanWeights::default(), 5).unwrap();
        let ids_a: Vec<&str> = a.iter().map(|s| s.plan.id).collect();
        let ids_b: Vec<&str> = b.iter().map(|s| s.plan.id).collect();
        assert_eq!(ids_a, ids_b);
    }
}
