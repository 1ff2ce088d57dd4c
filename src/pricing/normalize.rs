//! Expanding catalog plans into comparable per-day/month/year costs.

use tracing::{debug, warn};

use super::ConversionTable;
use crate::types::{DisplayCurrency, PricedEntry, RewardProgram, ServicePlan};

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Greatest common divisor (Euclid).
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, `None` for zero inputs or on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// The shortest run of purchases whose points redeem into whole rewards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardCycle {
    pub plans_required: u64,
    pub rewards_earned: u64,
    /// Paid days plus free reward days.
    pub duration: u64,
    /// Total spend, in the plan's currency.
    pub price: f64,
}

impl RewardCycle {
    pub fn compute(plan: &ServicePlan, program: &RewardProgram) -> Option<Self> {
        let points = lcm(program.points_per_plan, program.points_required)?;
        let plans_required = points / program.points_per_plan;
        let rewards_earned = program
            .points_per_plan
            .checked_mul(plans_required)?
            / program.points_required;

        let paid_days = u64::from(plan.duration).checked_mul(plans_required)?;
        let free_days = rewards_earned.checked_mul(u64::from(program.duration_per_reward))?;

        Some(Self {
            plans_required,
            rewards_earned,
            duration: paid_days.checked_add(free_days)?,
            price: plan.price * plans_required as f64,
        })
    }
}

/// Per-unit costs in a single currency.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitCosts {
    per_day: f64,
    per_month: f64,
    per_year: f64,
}

impl UnitCosts {
    /// `None` when the figures would not be finite (zero duration and friends).
    fn derive(price: f64, duration: u64) -> Option<Self> {
        if duration == 0 {
            return None;
        }
        let per_day = price / duration as f64;
        let per_year = per_day * DAYS_PER_YEAR;
        let per_month = per_year / MONTHS_PER_YEAR;

        [per_day, per_month, per_year]
            .iter()
            .all(|v| v.is_finite())
            .then_some(Self {
                per_day,
                per_month,
                per_year,
            })
    }
}

/// Build the base entry and, for plans with a complete reward program, the
/// reward-amortized entry.
pub fn normalize(
    plan: &ServicePlan,
    display: DisplayCurrency,
    table: &ConversionTable,
) -> Vec<PricedEntry> {
    let mut entries = vec![priced_entry(
        plan,
        plan.price,
        u64::from(plan.duration),
        false,
        display,
        table,
    )];

    if let Some(program) = plan.reward_program() {
        match RewardCycle::compute(plan, &program) {
            Some(cycle) => {
                debug!(
                    plan = %plan.name,
                    plans_required = cycle.plans_required,
                    rewards_earned = cycle.rewards_earned,
                    "reward cycle"
                );
                entries.push(priced_entry(
                    plan,
                    cycle.price,
                    cycle.duration,
                    true,
                    display,
                    table,
                ));
            }
            None => warn!(plan = %plan.name, "reward cycle overflows, skipping points entry"),
        }
    }

    entries
}

/// Normalize every plan, in catalog order.
pub fn normalize_all(
    plans: &[ServicePlan],
    display: DisplayCurrency,
    table: &ConversionTable,
) -> Vec<PricedEntry> {
    plans
        .iter()
        .flat_map(|plan| normalize(plan, display, table))
        .collect()
}

fn priced_entry(
    plan: &ServicePlan,
    price: f64,
    duration: u64,
    points_used: bool,
    display: DisplayCurrency,
    table: &ConversionTable,
) -> PricedEntry {
    let costs = UnitCosts::derive(price, duration);
    let convert = |amount: f64| table.convert(amount, plan.currency, display);

    PricedEntry {
        name: plan.name.clone(),
        points_used,
        price_per_day: costs.and_then(|c| convert(c.per_day)),
        price_per_month: costs.and_then(|c| convert(c.per_month)),
        price_per_year: costs.and_then(|c| convert(c.per_year)),
        price,
        duration,
        currency: plan.currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn real_debrid() -> ServicePlan {
        ServicePlan::new("Real-Debrid", 16.0, 180, Currency::Eur).with_rewards(800, 1000, 30)
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(800, 1000), 200);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(800, 1000), Some(4000));
        assert_eq!(lcm(140, 150), Some(2100));
        assert_eq!(lcm(0, 5), None);
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_reward_cycle() {
        let plan = real_debrid();
        let program = plan.reward_program().unwrap();
        let cycle = RewardCycle::compute(&plan, &program).unwrap();

        assert_eq!(cycle.plans_required, 5);
        assert_eq!(cycle.rewards_earned, 4);
        assert_eq!(cycle.duration, 1020);
        assert!(approx_eq(cycle.price, 80.0));
    }

    #[test]
    fn test_reward_cycle_alldebrid() {
        let plan =
            ServicePlan::new("AllDebrid", 24.99, 300, Currency::Eur).with_rewards(140, 150, 30);
        let program = plan.reward_program().unwrap();
        let cycle = RewardCycle::compute(&plan, &program).unwrap();

        assert_eq!(cycle.plans_required, 15);
        assert_eq!(cycle.rewards_earned, 14);
        assert_eq!(cycle.duration, 300 * 15 + 14 * 30);
    }

    #[test]
    fn test_normalize_without_rewards_yields_one_entry() {
        let plan = ServicePlan::new("Offcloud", 54.99, 365, Currency::Usd);
        let entries = normalize(&plan, DisplayCurrency::Original, &ConversionTable::builtin());

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert!(!entry.points_used);
        assert!(approx_eq(entry.price_per_year.unwrap(), 54.99));
        assert!(approx_eq(entry.price_per_month.unwrap(), 54.99 / 12.0));
        assert!(approx_eq(entry.price_per_day.unwrap(), 54.99 / 365.0));
        assert_eq!(entry.duration, 365);
        assert_eq!(entry.currency, Currency::Usd);
    }

    #[test]
    fn test_normalize_with_rewards_yields_two_entries() {
        let entries = normalize(
            &real_debrid(),
            DisplayCurrency::Original,
            &ConversionTable::builtin(),
        );

        assert_eq!(entries.len(), 2);
        assert!(!entries[0].points_used);
        assert!(approx_eq(entries[0].price, 16.0));
        assert_eq!(entries[0].duration, 180);

        let reward = &entries[1];
        assert!(reward.points_used);
        assert!(approx_eq(reward.price, 80.0));
        assert_eq!(reward.duration, 1020);
        assert!(approx_eq(reward.price_per_day.unwrap(), 80.0 / 1020.0));
        assert!(approx_eq(reward.price_per_year.unwrap(), 80.0 / 1020.0 * 365.0));
    }

    #[test]
    fn test_normalize_converts_unit_costs_only() {
        let entries = normalize(
            &real_debrid(),
            Currency::Gbp.into(),
            &ConversionTable::builtin(),
        );

        let base = &entries[0];
        let expected_year = 16.0 / 180.0 * 365.0 * 0.8404;
        assert!(approx_eq(base.price_per_year.unwrap(), expected_year));
        assert!(approx_eq(base.price, 16.0));
        assert_eq!(base.currency, Currency::Eur);
    }

    #[test]
    fn test_normalize_missing_rate_leaves_figures_absent() {
        let plan = ServicePlan::new("Pound Plan", 10.0, 30, Currency::Gbp);
        let entries = normalize(&plan, Currency::Usd.into(), &ConversionTable::builtin());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].price_per_day, None);
        assert_eq!(entries[0].price_per_month, None);
        assert_eq!(entries[0].price_per_year, None);
        assert!(approx_eq(entries[0].price, 10.0));
    }

    #[test]
    fn test_normalize_zero_duration_is_absent() {
        let plan = ServicePlan::new("Broken", 10.0, 0, Currency::Usd);
        let entries = normalize(&plan, DisplayCurrency::Original, &ConversionTable::builtin());

        assert_eq!(entries[0].price_per_day, None);
        assert_eq!(entries[0].price_per_year, None);
    }

    #[test]
    fn test_normalize_all_flattens() {
        let plans = vec![
            real_debrid(),
            ServicePlan::new("Debrid-Link", 25.0, 300, Currency::Eur),
        ];
        let entries = normalize_all(&plans, Currency::Eur.into(), &ConversionTable::builtin());
        assert_eq!(entries.len(), 3);
    }
}
