use anyhow::Context;
use samarth_config::SamarthConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output_answer;
use crate::pipeline::Pipeline;

/// Handle `samarth ask`.
pub fn handle(question: &str, config: &SamarthConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(store) = bootstrap::open_store(config)? else {
        anyhow::bail!(
            "no store at {}; load data first or pass --store",
            config.store.path
        );
    };
    let resolver = bootstrap::build_resolver(config, Some(&store))?;
    let pipeline = Pipeline::new(&resolver, &store, config.analysis.top_crops);
    let answer = pipeline
        .answer(question)
        .context("failed to answer question")?;
    output_answer(&answer, flags.format)
}
