//! Decision-function contract and a few reference controllers.
//!
//! The engine never looks inside a controller: it hands over a
//! [`SensorVector`] and expects exactly [`ACTION_COUNT`] values back. Anything
//! else aborts the episode.

use async_trait::async_trait;
use foragesim_data::{Action, SensorVector, ACTION_COUNT};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Synchronous controller. Must not depend on or mutate world state beyond
/// what the sensor vector carries.
pub trait DecisionFn: Send {
    fn act(&mut self, inputs: &SensorVector) -> Vec<f64>;
}

impl<T: DecisionFn + ?Sized> DecisionFn for Box<T> {
    fn act(&mut self, inputs: &SensorVector) -> Vec<f64> {
        (**self).act(inputs)
    }
}

/// Controller whose answer arrives asynchronously, e.g. from a remote
/// evaluator. The engine awaits each call before moving that agent.
#[async_trait]
pub trait AsyncDecisionFn: Send {
    async fn act(&mut self, inputs: SensorVector) -> Vec<f64>;
}

#[async_trait]
impl<T: AsyncDecisionFn + ?Sized> AsyncDecisionFn for Box<T> {
    async fn act(&mut self, inputs: SensorVector) -> Vec<f64> {
        (**self).act(inputs).await
    }
}

/// Adapts a closure into a [`DecisionFn`].
pub struct FnDecision<F>(pub F);

impl<F> DecisionFn for FnDecision<F>
where
    F: FnMut(&SensorVector) -> Vec<f64> + Send,
{
    fn act(&mut self, inputs: &SensorVector) -> Vec<f64> {
        (self.0)(inputs)
    }
}

pub fn decision_fn<F>(f: F) -> FnDecision<F>
where
    F: FnMut(&SensorVector) -> Vec<f64> + Send,
{
    FnDecision(f)
}

/// Runs a synchronous controller where an async one is expected.
pub struct Blocking<T>(pub T);

#[async_trait]
impl<T: DecisionFn> AsyncDecisionFn for Blocking<T> {
    async fn act(&mut self, inputs: SensorVector) -> Vec<f64> {
        self.0.act(&inputs)
    }
}

/// Never fires any gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleController;

impl DecisionFn for IdleController {
    fn act(&mut self, _inputs: &SensorVector) -> Vec<f64> {
        Action::IDLE.to_outputs()
    }
}

/// Replays a fixed list of actions, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedController {
    actions: Vec<Action>,
    cursor: usize,
}

impl ScriptedController {
    #[must_use]
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions, cursor: 0 }
    }

    #[must_use]
    pub fn constant(action: Action) -> Self {
        Self::new(vec![action])
    }
}

impl DecisionFn for ScriptedController {
    fn act(&mut self, _inputs: &SensorVector) -> Vec<f64> {
        if self.actions.is_empty() {
            return Action::IDLE.to_outputs();
        }
        let action = self.actions[self.cursor % self.actions.len()];
        self.cursor = self.cursor.wrapping_add(1);
        action.to_outputs()
    }
}

/// Uniform random outputs in `[0, 1)`, reproducible from a seed.
#[derive(Debug, Clone)]
pub struct RandomController {
    rng: ChaCha8Rng,
}

impl RandomController {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionFn for RandomController {
    fn act(&mut self, _inputs: &SensorVector) -> Vec<f64> {
        (0..ACTION_COUNT).map(|_| self.rng.gen::<f64>()).collect()
    }
}
