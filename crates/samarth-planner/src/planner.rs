//! Question text to [`Plan`].

use samarth_core::{Intent, IntentKind, Plan};
use samarth_resolver::NameResolver;

use crate::grammar::normalize;
use crate::rules::RULES;

/// Rule-based planner over one resolver snapshot.
///
/// The resolver is borrowed for the planner's lifetime, so every name in a
/// single [`parse`](Self::parse) call resolves against the same alias table.
#[derive(Debug, Clone, Copy)]
pub struct QueryPlanner<'r> {
    resolver: &'r NameResolver,
}

impl<'r> QueryPlanner<'r> {
    #[must_use]
    pub const fn new(resolver: &'r NameResolver) -> Self {
        Self { resolver }
    }

    /// Classify `text` and extract its parameters.
    ///
    /// Never fails: text that matches no rule becomes [`Intent::Unknown`]
    /// carrying the original input.
    #[must_use]
    pub fn parse(&self, text: &str) -> Plan {
        let normalized = normalize(text);
        let intent = RULES
            .iter()
            .find_map(|rule| rule.apply(&normalized, self.resolver))
            .unwrap_or_else(|| Intent::Unknown {
                raw_text: text.to_string(),
            });

        tracing::debug!(intent = %intent.kind(), "planned question");
        Plan {
            query: text.to_string(),
            intent,
        }
    }

    /// Every rule whose pattern matches `text`, in precedence order.
    ///
    /// Useful for diagnosing ambiguous questions; [`parse`](Self::parse)
    /// picks the first of these.
    #[must_use]
    pub fn matching_rules(text: &str) -> Vec<IntentKind> {
        let normalized = normalize(text);
        RULES
            .iter()
            .filter(|rule| rule.pattern.is_match(&normalized))
            .map(|rule| rule.kind)
            .collect()
    }
}
