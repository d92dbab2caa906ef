use criterion::{black_box, criterion_group, criterion_main, Criterion};
use foragesim_core::decision::RandomController;
use foragesim_core::systems::perception::perceive;
use foragesim_core::{lifecycle, AppConfig, Episode, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_config(parallel: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(42);
    config.episode.tick_budget = 1000;
    config.episode.log_interval = 0;
    config.episode.parallel = parallel;
    config
}

fn bench_perception(c: &mut Criterion) {
    let mut config = bench_config(false);
    config.world.food_count = 1000;
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let world = World::generate(&config, &mut rng);
    let agent = lifecycle::create_agent(0, &config);

    c.bench_function("perceive_1000_food", |b| {
        b.iter(|| black_box(perceive(&agent, &world.food, &config.perception)))
    });
}

fn bench_episode(c: &mut Criterion, name: &str, parallel: bool) {
    let config = bench_config(parallel);

    c.bench_function(name, |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut controllers: Vec<_> = (0..config.agent.count as u64)
                .map(RandomController::new)
                .collect();
            let episode = Episode::new(config.clone(), &mut rng).unwrap();
            black_box(episode.run(&mut controllers).unwrap())
        })
    });
}

fn bench_episode_sequential(c: &mut Criterion) {
    bench_episode(c, "episode_50_agents_1000_ticks", false);
}

fn bench_episode_parallel(c: &mut Criterion) {
    bench_episode(c, "episode_50_agents_1000_ticks_parallel", true);
}

criterion_group!(
    benches,
    bench_perception,
    bench_episode_sequential,
    bench_episode_parallel
);
criterion_main!(benches);
