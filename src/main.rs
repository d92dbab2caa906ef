use anyhow::Result;
use clap::Parser;
use foragesim_lib::app::{App, ControllerKind};
use foragesim_lib::model::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed for food placement and random controllers
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ticks per episode
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Number of agents
    #[arg(short, long)]
    agents: Option<usize>,

    /// Number of food items
    #[arg(short, long)]
    food: Option<usize>,

    /// Built-in controller driving every agent
    #[arg(long, value_enum, default_value = "random")]
    controller: ControllerKind,

    /// Episodes to run
    #[arg(short, long, default_value_t = 1)]
    episodes: usize,

    /// Print full reports as JSON instead of fitness lines
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        if let Some(ticks) = self.ticks {
            config.episode.tick_budget = ticks;
        }
        if let Some(agents) = self.agents {
            config.agent.count = agents;
        }
        if let Some(food) = self.food {
            config.world.food_count = food;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    foragesim_core::init_logging();

    let mut config = AppConfig::load(std::path::Path::new(&args.config))?;
    args.apply(&mut config);

    let app = App::new(config, args.controller, args.episodes)?;
    let reports = app.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (n, report) in reports.iter().enumerate() {
        println!(
            "episode {n} ({}) ticks={} consumed={}",
            report.id, report.ticks, report.total_consumed
        );
        for outcome in &report.agents {
            println!(
                "  agent {:>3}  fitness {:>7.2}  food {:>3}  regions {}{}",
                outcome.id.0,
                outcome.fitness,
                outcome.food_consumed,
                outcome.regions_visited,
                if outcome.left_map { "  (left map)" } else { "" }
            );
        }
    }
    Ok(())
}
