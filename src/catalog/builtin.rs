//! Default plan dataset.

use crate::types::{Currency, ServicePlan};

pub fn builtin_plans() -> Vec<ServicePlan> {
    use Currency::{Eur, Usd};

    vec![
        ServicePlan::new("Torbox (Essential)", 33.0, 365, Usd),
        ServicePlan::new("Torbox (Standard)", 55.0, 365, Usd),
        ServicePlan::new("Torbox (Pro)", 110.0, 365, Usd),
        ServicePlan::new("Real-Debrid", 16.0, 180, Eur).with_rewards(800, 1000, 30),
        ServicePlan::new("Debrid-Link", 25.0, 300, Eur),
        ServicePlan::new("AllDebrid", 24.99, 300, Eur).with_rewards(140, 150, 30),
        ServicePlan::new("Offcloud", 54.99, 365, Usd),
        ServicePlan::new("Premiumize", 69.99, 365, Eur),
        ServicePlan::new("put.io (100GB)", 99.0, 365, Usd),
        ServicePlan::new("put.io (1TB)", 199.0, 365, Usd),
    ]
}
