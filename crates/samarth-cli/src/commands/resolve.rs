use samarth_config::SamarthConfig;
use samarth_core::Domain;
use samarth_resolver::Resolution;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ResolveResponse<'a> {
    domain: Domain,
    input: &'a str,
    #[serde(flatten)]
    resolution: Resolution,
}

/// Handle `samarth resolve`.
pub fn handle(
    domain: Domain,
    name: &str,
    config: &SamarthConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = bootstrap::open_store(config)?;
    let resolver = bootstrap::build_resolver(config, store.as_ref())?;
    let response = ResolveResponse {
        domain,
        input: name,
        resolution: resolver.resolve_detailed(name, domain),
    };
    output(&response, flags.format)
}
