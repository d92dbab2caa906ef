pub use foragesim_core::{
    evaluate_population, run_episode, run_episode_async, AppConfig, AsyncDecisionFn, DecisionFn,
    Episode, EpisodePhase, EpisodeReport, EpisodeSnapshot, SimError, SimulationState, TickObserver,
};
pub mod config {
    pub use foragesim_core::config::*;
}
pub mod decision {
    pub use foragesim_core::decision::*;
}
pub mod lifecycle {
    pub use foragesim_core::lifecycle::*;
}
pub mod episode {
    pub use foragesim_core::episode::*;
}
pub mod population {
    pub use foragesim_core::population::*;
}
pub mod snapshot {
    pub use foragesim_core::snapshot::*;
}
pub mod systems {
    pub use foragesim_core::systems::*;
}
pub mod world {
    pub use foragesim_core::world::*;
}
pub mod data {
    pub use foragesim_data::*;
}
