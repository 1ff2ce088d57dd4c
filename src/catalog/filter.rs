//! Keyword exclusion.

use crate::types::ServicePlan;

/// Drop every plan whose name contains any keyword, ignoring case.
///
/// Keywords are matched as given, whitespace included. Empty keywords are ignored.
pub fn exclude<S: AsRef<str>>(plans: Vec<ServicePlan>, keywords: &[S]) -> Vec<ServicePlan> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    if keywords.is_empty() {
        return plans;
    }

    plans
        .into_iter()
        .filter(|plan| {
            let name = plan.name.to_lowercase();
            !keywords.iter().any(|k| name.contains(k.as_str()))
        })
        .collect()
}
