use samarth_config::SamarthConfig;
use samarth_core::{IntentKind, Plan};
use samarth_planner::QueryPlanner;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

/// A plan plus every rule the question matched, in precedence order.
///
/// More than one entry means the question was ambiguous and the first won.
#[derive(Debug, Serialize)]
struct PlanReport {
    #[serde(flatten)]
    plan: Plan,
    matched_rules: Vec<IntentKind>,
}

impl PlanReport {
    fn new(planner: &QueryPlanner<'_>, question: &str) -> Self {
        let matched_rules = QueryPlanner::matching_rules(question);
        if matched_rules.len() > 1 {
            tracing::info!(?matched_rules, "question matches several rules; first wins");
        }
        Self {
            plan: planner.parse(question),
            matched_rules,
        }
    }
}

/// Handle `samarth plan`. The store is consulted for aliases only.
pub fn handle(question: &str, config: &SamarthConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = bootstrap::open_store(config)?;
    let resolver = bootstrap::build_resolver(config, store.as_ref())?;
    let report = PlanReport::new(&QueryPlanner::new(&resolver), question);
    output(&report, flags.format)
}
