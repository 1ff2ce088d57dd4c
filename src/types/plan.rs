use serde::{Deserialize, Serialize};

use super::Currency;

/// A purchasable plan from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub name: String,
    pub price: f64,
    /// Validity in days.
    pub duration: u32,
    pub currency: Currency,
    /// Loyalty points credited per purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_per_plan: Option<u64>,
    /// Points needed to redeem one reward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_required_for_reward: Option<u64>,
    /// Free days granted per redeemed reward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_per_reward: Option<u32>,
}

impl ServicePlan {
    pub fn new(name: impl Into<String>, price: f64, duration: u32, currency: Currency) -> Self {
        Self {
            name: name.into(),
            price,
            duration,
            currency,
            points_per_plan: None,
            points_required_for_reward: None,
            duration_per_reward: None,
        }
    }

    pub fn with_rewards(
        mut self,
        points_per_plan: u64,
        points_required_for_reward: u64,
        duration_per_reward: u32,
    ) -> Self {
        self.points_per_plan = Some(points_per_plan);
        self.points_required_for_reward = Some(points_required_for_reward);
        self.duration_per_reward = Some(duration_per_reward);
        self
    }

    /// The reward program, when all three reward fields are set and positive.
    pub fn reward_program(&self) -> Option<RewardProgram> {
        let points_per_plan = self.points_per_plan.filter(|&p| p > 0)?;
        let points_required = self.points_required_for_reward.filter(|&p| p > 0)?;
        let duration_per_reward = self.duration_per_reward.filter(|&d| d > 0)?;

        Some(RewardProgram {
            points_per_plan,
            points_required,
            duration_per_reward,
        })
    }

    /// Some but not all reward fields are set.
    pub fn has_partial_rewards(&self) -> bool {
        let set = [
            self.points_per_plan.is_some(),
            self.points_required_for_reward.is_some(),
            self.duration_per_reward.is_some(),
        ]
        .iter()
        .filter(|&&s| s)
        .count();

        set > 0 && set < 3
    }
}

/// Complete loyalty-point parameters of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardProgram {
    pub points_per_plan: u64,
    pub points_required: u64,
    pub duration_per_reward: u32,
}

/// One comparable row derived from a plan.
///
/// Per-unit figures are in the display currency (or the plan's own currency
/// when nothing is converted) and are `None` when they could not be derived.
/// `price` and `duration` stay in the plan's native currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedEntry {
    pub name: String,
    pub points_used: bool,
    pub price_per_day: Option<f64>,
    pub price_per_month: Option<f64>,
    pub price_per_year: Option<f64>,
    pub price: f64,
    pub duration: u64,
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_program_requires_all_fields() {
        let plan = ServicePlan::new("Real-Debrid", 16.0, 180, Currency::Eur);
        assert!(plan.reward_program().is_none());
        assert!(!plan.has_partial_rewards());

        let plan = plan.with_rewards(800, 1000, 30);
        assert_eq!(
            plan.reward_program(),
            Some(RewardProgram {
                points_per_plan: 800,
                points_required: 1000,
                duration_per_reward: 30,
            })
        );
    }

    #[test]
    fn test_partial_rewards() {
        let mut plan = ServicePlan::new("AllDebrid", 24.99, 300, Currency::Eur);
        plan.points_per_plan = Some(140);
        assert!(plan.has_partial_rewards());
        assert!(plan.reward_program().is_none());
    }

    #[test]
    fn test_zero_reward_fields_disable_program() {
        let plan = ServicePlan::new("Zero", 10.0, 30, Currency::Usd).with_rewards(0, 100, 30);
        assert!(plan.reward_program().is_none());

        let plan = ServicePlan::new("Zero", 10.0, 30, Currency::Usd).with_rewards(10, 100, 0);
        assert!(plan.reward_program().is_none());
    }

    #[test]
    fn test_deserialize_plan_without_rewards() {
        let json = r#"{"name":"Offcloud","price":54.99,"duration":365,"currency":"USD"}"#;
        let plan: ServicePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan, ServicePlan::new("Offcloud", 54.99, 365, Currency::Usd));
    }
}
