use super::{Episode, EpisodePhase};
use crate::config::AppConfig;
use crate::decision::{AsyncDecisionFn, DecisionFn};
use crate::error::{Result, SimError};
use crate::metrics::EpisodeMetrics;
use crate::systems::region::RegionGrid;
use crate::systems::{collision, fitness, movement, perception, region};
use foragesim_data::{Action, Agent, FoodItem, SensorVector, ACTION_COUNT};

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Index of the tick that just ran.
    pub tick: u64,
    /// Food items consumed across all agents during the tick.
    pub consumed: usize,
}

/// Decision-function input for `agent`, in wire order.
#[must_use]
pub fn sensor_vector(agent: &Agent) -> SensorVector {
    [
        f64::from(agent.perception.num_food_seen),
        agent.hunger as f64,
        agent.perception.nearest_food_distance,
        agent.perception.nearest_food_relative_angle,
        agent.nearest_wall_distance,
        f64::from(agent.current_region.index()),
    ]
}

fn parse_action(agent: &Agent, tick: u64, outputs: &[f64]) -> Result<Action> {
    Action::from_outputs(outputs).ok_or(SimError::DecisionLength {
        agent: agent.id.0,
        tick,
        expected: ACTION_COUNT,
        actual: outputs.len(),
    })
}

fn decide_one<C: DecisionFn + ?Sized>(
    agent: &Agent,
    controller: &mut C,
    tick: u64,
) -> Result<Action> {
    let outputs = controller.act(&sensor_vector(agent));
    parse_action(agent, tick, &outputs)
}

/// Read-only data shared by every agent update within a tick.
struct AgentUpdateContext<'a> {
    food: &'a [FoodItem],
    regions: &'a RegionGrid,
    config: &'a AppConfig,
    metrics: &'a EpisodeMetrics,
    tick: u64,
}

/// Movement, hunger, perception, region, collision and fitness for one agent.
/// Returns how many food items it consumed.
fn update_agent(agent: &mut Agent, action: &Action, ctx: &AgentUpdateContext) -> usize {
    movement::movement_system(agent, action, ctx.config.agent.activation_threshold);
    agent.hunger += 1;
    perception::perception_system(agent, ctx.food, &ctx.config.perception);
    region::region_system(agent, ctx.regions);

    let eaten = collision::collision_system(agent, ctx.food, &ctx.config.collision);
    if !eaten.is_empty() {
        fitness::award_consumption(agent, eaten.len(), &ctx.config.fitness);
        ctx.metrics.record_consumption(eaten.len());
        tracing::debug!(
            agent = agent.id.0,
            tick = ctx.tick,
            food = ?eaten,
            fitness = agent.fitness,
            "Food consumed"
        );
    }
    eaten.len()
}

#[cfg(feature = "parallel")]
fn update_all(
    agents: &mut [Agent],
    actions: &[Action],
    ctx: &AgentUpdateContext,
    parallel: bool,
) -> usize {
    use rayon::prelude::*;
    if parallel {
        return agents
            .par_iter_mut()
            .zip(actions.par_iter())
            .map(|(agent, action)| update_agent(agent, action, ctx))
            .sum();
    }
    update_all_sequential(agents, actions, ctx)
}

#[cfg(not(feature = "parallel"))]
fn update_all(
    agents: &mut [Agent],
    actions: &[Action],
    ctx: &AgentUpdateContext,
    _parallel: bool,
) -> usize {
    update_all_sequential(agents, actions, ctx)
}

fn update_all_sequential(
    agents: &mut [Agent],
    actions: &[Action],
    ctx: &AgentUpdateContext,
) -> usize {
    agents
        .iter_mut()
        .zip(actions)
        .map(|(agent, action)| update_agent(agent, action, ctx))
        .sum()
}

impl Episode {
    /// Runs one tick. Returns `Ok(None)` once the tick budget is spent.
    ///
    /// On error the episode moves to [`EpisodePhase::Aborted`] and every
    /// later call returns the same error.
    pub fn step<C: DecisionFn>(&mut self, controllers: &mut [C]) -> Result<Option<TickSummary>> {
        if !self.begin_tick(controllers.len())? {
            return Ok(None);
        }
        match self.decide(controllers) {
            Ok(actions) => Ok(Some(self.apply(&actions))),
            Err(err) => Err(self.abort(err)),
        }
    }

    /// Async variant of [`Episode::step`]. Decisions are awaited one agent at
    /// a time in agent order.
    pub async fn step_async<C: AsyncDecisionFn>(
        &mut self,
        controllers: &mut [C],
    ) -> Result<Option<TickSummary>> {
        if !self.begin_tick(controllers.len())? {
            return Ok(None);
        }
        match self.decide_async(controllers).await {
            Ok(actions) => Ok(Some(self.apply(&actions))),
            Err(err) => Err(self.abort(err)),
        }
    }

    fn begin_tick(&mut self, controllers: usize) -> Result<bool> {
        if let EpisodePhase::Aborted(err) = &self.phase {
            return Err(err.clone());
        }
        if controllers != self.state.agents.len() {
            let err = SimError::ControllerCount {
                expected: self.state.agents.len(),
                actual: controllers,
            };
            return Err(self.abort(err));
        }
        if self.is_complete() {
            return Ok(false);
        }
        self.phase = EpisodePhase::Running;
        Ok(true)
    }

    fn controller_index(&self, agent: &Agent, controllers: usize) -> Result<usize> {
        let idx = agent.controller.0;
        if idx < controllers {
            Ok(idx)
        } else {
            Err(SimError::ControllerCount {
                expected: idx + 1,
                actual: controllers,
            })
        }
    }

    fn decide<C: DecisionFn>(&self, controllers: &mut [C]) -> Result<Vec<Action>> {
        #[cfg(feature = "parallel")]
        if self.config.episode.parallel {
            if let Some(slots) = self.controller_slots(controllers.len())? {
                return self.decide_parallel(controllers, &slots);
            }
        }

        let tick = self.state.world.tick;
        let len = controllers.len();
        self.state
            .agents
            .iter()
            .map(|agent| {
                let idx = self.controller_index(agent, len)?;
                decide_one(agent, &mut controllers[idx], tick)
            })
            .collect()
    }

    /// Agent position for each controller, or `None` when two agents share a
    /// controller and must be decided one after another.
    #[cfg(feature = "parallel")]
    fn controller_slots(&self, controllers: usize) -> Result<Option<Vec<Option<usize>>>> {
        let mut slots = vec![None; controllers];
        for (pos, agent) in self.state.agents.iter().enumerate() {
            let idx = self.controller_index(agent, controllers)?;
            if slots[idx].replace(pos).is_some() {
                return Ok(None);
            }
        }
        Ok(Some(slots))
    }

    /// Calls every controller on the rayon pool. On failure the error of the
    /// lowest agent position is returned, independent of scheduling.
    #[cfg(feature = "parallel")]
    fn decide_parallel<C: DecisionFn>(
        &self,
        controllers: &mut [C],
        slots: &[Option<usize>],
    ) -> Result<Vec<Action>> {
        use rayon::prelude::*;
        let tick = self.state.world.tick;
        let agents = &self.state.agents;

        let decided: Vec<(usize, Result<Action>)> = controllers
            .par_iter_mut()
            .zip(slots.par_iter())
            .filter_map(|(controller, &slot)| {
                slot.map(|pos| (pos, decide_one(&agents[pos], controller, tick)))
            })
            .collect();

        let mut by_agent: Vec<Option<Result<Action>>> = (0..agents.len()).map(|_| None).collect();
        for (pos, result) in decided {
            by_agent[pos] = Some(result);
        }
        by_agent.into_iter().flatten().collect()
    }

    async fn decide_async<C: AsyncDecisionFn>(&self, controllers: &mut [C]) -> Result<Vec<Action>> {
        let tick = self.state.world.tick;
        let mut actions = Vec::with_capacity(self.state.agents.len());
        for agent in &self.state.agents {
            let idx = self.controller_index(agent, controllers.len())?;
            let outputs = controllers[idx].act(sensor_vector(agent)).await;
            actions.push(parse_action(agent, tick, &outputs)?);
        }
        Ok(actions)
    }

    fn apply(&mut self, actions: &[Action]) -> TickSummary {
        let tick = self.state.world.tick;
        let ctx = AgentUpdateContext {
            food: &self.state.world.food,
            regions: &self.state.regions,
            config: &self.config,
            metrics: &self.metrics,
            tick,
        };
        let consumed = update_all(
            &mut self.state.agents,
            actions,
            &ctx,
            self.config.episode.parallel,
        );

        self.state.world.tick += 1;
        self.metrics.record_tick(self.state.agents.len(), consumed);
        TickSummary { tick, consumed }
    }
}
