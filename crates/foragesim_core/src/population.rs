//! Batch evaluation: one independent single-agent episode per population
//! member.

use crate::config::AppConfig;
use crate::decision::DecisionFn;
use crate::episode::Episode;
use crate::error::Result;
use crate::world::episode_rng;

fn member_config(base: &AppConfig, index: usize) -> AppConfig {
    let mut config = base.clone();
    config.agent.count = 1;
    config.world.seed = base.world.seed.map(|seed| seed.wrapping_add(index as u64));
    config
}

fn evaluate_member<C: DecisionFn>(
    base: &AppConfig,
    index: usize,
    controller: &mut C,
) -> Result<f64> {
    let config = member_config(base, index);
    let mut rng = episode_rng(&config);
    let report = Episode::new(config, &mut rng)?.run(std::slice::from_mut(controller))?;
    Ok(report.fitness.first().copied().unwrap_or_default())
}

/// Scores each controller alone in its own world and returns fitness in
/// controller order.
///
/// With a seeded config member `i` uses seed `base + i`, so results do not
/// depend on scheduling. Any failure discards the whole batch.
pub fn evaluate_population<C: DecisionFn>(
    config: &AppConfig,
    controllers: &mut [C],
) -> Result<Vec<f64>> {
    config.validate()?;
    tracing::info!(members = controllers.len(), "Evaluating population");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        controllers
            .par_iter_mut()
            .enumerate()
            .map(|(i, controller)| evaluate_member(config, i, controller))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        controllers
            .iter_mut()
            .enumerate()
            .map(|(i, controller)| evaluate_member(config, i, controller))
            .collect()
    }
}
