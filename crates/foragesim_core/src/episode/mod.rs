//! Episode state machine: Init, then a fixed number of ticks, then Finalize.
//!
//! An [`Episode`] owns the world and its agents for one run. Each tick every
//! agent senses, decides, moves and eats before the tick counter advances.
//! The run either reaches its full tick budget or aborts on the first
//! configuration error; an aborted episode never reports fitness.

use crate::config::AppConfig;
use crate::decision::{AsyncDecisionFn, DecisionFn};
use crate::error::{Result, SimError};
use crate::metrics::EpisodeMetrics;
use crate::snapshot::EpisodeSnapshot;
use crate::systems::region::RegionGrid;
use crate::world::World;
use foragesim_data::Agent;
use rand::Rng;
use uuid::Uuid;

pub mod finalize;
pub mod init;
pub mod update;

pub use finalize::{AgentOutcome, EpisodeReport};
pub use update::{sensor_vector, TickSummary};

/// Everything a tick reads and writes.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub world: World,
    pub agents: Vec<Agent>,
    pub regions: RegionGrid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EpisodePhase {
    /// World and agents allocated, no tick run yet.
    Init,
    Running,
    /// A configuration error stopped the run. Holds the error.
    Aborted(SimError),
}

/// Called after every tick barrier with the settled state.
pub trait TickObserver {
    fn on_tick(&mut self, state: &SimulationState);
}

pub struct NoopObserver;

impl TickObserver for NoopObserver {
    fn on_tick(&mut self, _state: &SimulationState) {}
}

impl<F: FnMut(&SimulationState)> TickObserver for F {
    fn on_tick(&mut self, state: &SimulationState) {
        self(state);
    }
}

pub struct Episode {
    id: Uuid,
    config: AppConfig,
    state: SimulationState,
    phase: EpisodePhase,
    metrics: EpisodeMetrics,
}

impl Episode {
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.state.agents
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.state.world
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.state.world.tick
    }

    #[must_use]
    pub fn phase(&self) -> &EpisodePhase {
        &self.phase
    }

    #[must_use]
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// True once the configured tick budget has been spent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.world.tick >= self.config.episode.tick_budget
    }

    #[must_use]
    pub fn snapshot(&self) -> EpisodeSnapshot {
        EpisodeSnapshot::capture(&self.state)
    }

    fn abort(&mut self, err: SimError) -> SimError {
        tracing::warn!(
            episode = %self.id,
            tick = self.state.world.tick,
            error = %err,
            "Episode aborted"
        );
        self.phase = EpisodePhase::Aborted(err.clone());
        err
    }
}

/// Runs one full episode and returns final fitness in agent order.
///
/// `controllers[i]` drives agent `i`; their count must equal
/// `config.agent.count`. Food is placed with `rng`.
pub fn run_episode<C, R>(config: &AppConfig, controllers: &mut [C], rng: &mut R) -> Result<Vec<f64>>
where
    C: DecisionFn,
    R: Rng + ?Sized,
{
    let report = Episode::new(config.clone(), rng)?.run(controllers)?;
    Ok(report.fitness)
}

/// Async counterpart of [`run_episode`]; each decision is awaited before
/// that agent moves.
pub async fn run_episode_async<C, R>(
    config: &AppConfig,
    controllers: &mut [C],
    rng: &mut R,
) -> Result<Vec<f64>>
where
    C: AsyncDecisionFn,
    R: Rng + ?Sized,
{
    let episode = Episode::new(config.clone(), rng)?;
    let report = episode.run_async(controllers).await?;
    Ok(report.fitness)
}
