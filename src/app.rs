//! Headless episode driver behind the `foragesim` binary.

use crate::model::config::AppConfig;
use crate::model::decision::{DecisionFn, IdleController, RandomController, ScriptedController};
use crate::model::data::Action;
use crate::model::world::episode_rng;
use crate::model::{Episode, EpisodeReport};
use anyhow::{Context, Result};

/// Built-in controllers selectable from the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerKind {
    Idle,
    Forward,
    Random,
}

impl ControllerKind {
    /// One controller per agent. Random controllers are seeded from
    /// `seed` plus the agent index.
    #[must_use]
    pub fn build(self, agents: usize, seed: u64) -> Vec<Box<dyn DecisionFn>> {
        (0..agents)
            .map(|i| -> Box<dyn DecisionFn> {
                match self {
                    Self::Idle => Box::new(IdleController),
                    Self::Forward => Box::new(ScriptedController::constant(Action::FORWARD)),
                    Self::Random => Box::new(RandomController::new(seed.wrapping_add(i as u64))),
                }
            })
            .collect()
    }
}

pub struct App {
    pub config: AppConfig,
    pub controller: ControllerKind,
    pub episodes: usize,
}

impl App {
    pub fn new(config: AppConfig, controller: ControllerKind, episodes: usize) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        Ok(Self {
            config,
            controller,
            episodes,
        })
    }

    /// Runs the requested number of episodes back to back. With a seeded
    /// config episode `n` uses seed `seed + n`.
    pub fn run(&self) -> Result<Vec<EpisodeReport>> {
        (0..self.episodes)
            .map(|n| {
                let mut config = self.config.clone();
                config.world.seed = self.config.world.seed.map(|s| s.wrapping_add(n as u64));
                let controller_seed = config.world.seed.unwrap_or(n as u64);
                let mut controllers = self.controller.build(config.agent.count, controller_seed);
                tracing::info!(
                    episode = n,
                    seed = ?config.world.seed,
                    controller = ?self.controller,
                    "Starting episode"
                );
                let mut rng = episode_rng(&config);
                let report = Episode::new(config, &mut rng)
                    .and_then(|episode| episode.run(&mut controllers))
                    .with_context(|| format!("episode {n} failed"))?;
                Ok(report)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.world.seed = Some(3);
        config.agent.count = 4;
        config.episode.tick_budget = 50;
        config.episode.log_interval = 0;
        config
    }

    #[test]
    fn test_app_runs_each_episode() {
        let app = App::new(test_config(), ControllerKind::Random, 3).expect("app");
        let reports = app.run().expect("run");
        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.fitness.len(), 4);
            assert_eq!(report.ticks, 50);
        }
    }

    #[test]
    fn test_idle_controllers_score_spawn_region() {
        let app = App::new(test_config(), ControllerKind::Idle, 1).expect("app");
        let reports = app.run().expect("run");
        // Idle agents share one spawn cell; only food under the spawn point adds to it.
        for agent in &reports[0].agents {
            assert_eq!(agent.regions_visited, 1);
            assert_eq!(agent.fitness, 1.0 + agent.food_consumed as f64);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = test_config();
        config.world.width = 0;
        assert!(App::new(config, ControllerKind::Idle, 1).is_err());
    }
}
