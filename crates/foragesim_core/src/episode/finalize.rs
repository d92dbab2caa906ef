use super::{Episode, EpisodePhase, NoopObserver, TickObserver};
use crate::decision::{AsyncDecisionFn, DecisionFn};
use crate::error::{Result, SimError};
use crate::systems::fitness;
use foragesim_data::AgentId;
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

/// Final per-agent numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentOutcome {
    pub id: AgentId,
    pub fitness: f64,
    pub food_consumed: usize,
    /// Distinct regions visited, the off-map sentinel included.
    pub regions_visited: usize,
    pub left_map: bool,
}

/// Result of a completed episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeReport {
    pub id: Uuid,
    /// Identifies the parameter set; reports with different fingerprints are
    /// not comparable.
    pub config_fingerprint: String,
    pub ticks: u64,
    /// Final fitness in agent order.
    pub fitness: Vec<f64>,
    pub total_consumed: usize,
    pub agents: Vec<AgentOutcome>,
}

impl Episode {
    /// Applies the exploration bonus and off-map penalty and consumes the
    /// episode.
    ///
    /// Fails if the episode was aborted or has not spent its tick budget.
    pub fn finalize(mut self) -> Result<EpisodeReport> {
        if let EpisodePhase::Aborted(err) = &self.phase {
            return Err(err.clone());
        }
        if !self.is_complete() {
            return Err(SimError::EpisodeIncomplete {
                tick: self.state.world.tick,
                budget: self.config.episode.tick_budget,
            });
        }

        let fitness_config = &self.config.fitness;
        let agents: Vec<AgentOutcome> = self
            .state
            .agents
            .iter_mut()
            .map(|agent| AgentOutcome {
                id: agent.id,
                fitness: fitness::finalize_fitness(agent, fitness_config),
                food_consumed: agent.consumed_food.len(),
                regions_visited: agent.visited_regions.len(),
                left_map: agent.has_left_map(),
            })
            .collect();

        let total_consumed = agents.iter().map(|a| a.food_consumed).sum();
        let best = agents.iter().map(|a| a.fitness).fold(f64::NAN, f64::max);
        tracing::info!(
            episode = %self.id,
            ticks = self.state.world.tick,
            total_consumed,
            best_fitness = best,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Episode finished"
        );

        Ok(EpisodeReport {
            id: self.id,
            config_fingerprint: self.config.fingerprint(),
            ticks: self.state.world.tick,
            fitness: agents.iter().map(|a| a.fitness).collect(),
            total_consumed,
            agents,
        })
    }

    /// Runs every remaining tick, then finalizes.
    pub fn run<C: DecisionFn>(self, controllers: &mut [C]) -> Result<EpisodeReport> {
        self.run_observed(controllers, &mut NoopObserver)
    }

    /// Like [`Episode::run`], calling `observer` after each tick.
    pub fn run_observed<C, O>(
        mut self,
        controllers: &mut [C],
        observer: &mut O,
    ) -> Result<EpisodeReport>
    where
        C: DecisionFn,
        O: TickObserver + ?Sized,
    {
        let span = tracing::info_span!("episode", id = %self.id);
        let _enter = span.enter();
        while self.step(controllers)?.is_some() {
            observer.on_tick(&self.state);
        }
        self.finalize()
    }

    pub async fn run_async<C: AsyncDecisionFn>(
        mut self,
        controllers: &mut [C],
    ) -> Result<EpisodeReport> {
        let span = tracing::info_span!("episode", id = %self.id);
        async move {
            while self.step_async(controllers).await?.is_some() {}
            self.finalize()
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::episode::SimulationState;
    use crate::decision::{IdleController, ScriptedController};
    use foragesim_data::{Action, FoodItem};

    fn config(agents: usize, ticks: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.agent.count = agents;
        config.episode.tick_budget = ticks;
        config.episode.log_interval = 0;
        config
    }

    #[test]
    fn test_idle_agent_scores_one_region() {
        let episode =
            Episode::with_food(config(1, 10), vec![FoodItem::new(0, 10.0, 10.0)]).expect("episode");
        let report = episode.run(&mut [IdleController]).expect("run");
        assert_eq!(report.ticks, 10);
        assert_eq!(report.fitness, vec![1.0]);
        assert_eq!(report.agents[0].regions_visited, 1);
        assert!(!report.agents[0].left_map);
    }

    #[test]
    fn test_finalize_before_budget_fails() {
        let mut episode =
            Episode::with_food(config(1, 10), vec![FoodItem::new(0, 10.0, 10.0)]).expect("episode");
        episode.step(&mut [IdleController]).expect("step");
        assert_eq!(
            episode.finalize(),
            Err(SimError::EpisodeIncomplete { tick: 1, budget: 10 })
        );
    }

    #[test]
    fn test_observer_sees_every_tick() {
        let episode =
            Episode::with_food(config(2, 5), vec![FoodItem::new(0, 10.0, 10.0)]).expect("episode");
        let mut ticks = Vec::new();
        let mut observer = |state: &SimulationState| ticks.push(state.world.tick);
        let mut controllers = vec![
            ScriptedController::constant(Action::FORWARD),
            ScriptedController::constant(Action::IDLE),
        ];
        episode
            .run_observed(&mut controllers, &mut observer)
            .expect("run");
        assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_report_fingerprint_matches_config() {
        let cfg = config(0, 3);
        let expected = {
            let mut c = cfg.clone();
            c.world.food_count = 1;
            c.fingerprint()
        };
        let episode = Episode::with_food(cfg, vec![FoodItem::new(0, 10.0, 10.0)]).expect("episode");
        let report = episode.run(&mut Vec::<IdleController>::new()).expect("run");
        assert!(report.fitness.is_empty());
        assert_eq!(report.config_fingerprint, expected);
    }
}
