use chase_on::ai::HeuristicAi;
use chase_on::core::{PlayerMap, RulesConfig};
use chase_on::game::{Engine, Intent, Seat, Session};
use chase_on::sim::{PolicyKind, SelfPlayConfig, SelfPlayRunner};
use chase_on::PlayerId;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn complete_match(engine: &Engine, seed: u64) {
    let seats = PlayerMap::new(|_| Seat::ai(HeuristicAi::default()));
    let mut session = Session::new(engine.clone(), seats, seed);
    let _ = session.handle(Intent::StartMatch { first: None });
    black_box(session.run_ai());
}

fn criterion_benchmark(c: &mut Criterion) {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    c.bench_function("heuristic_match", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            complete_match(&engine, seed)
        })
    });

    let mut group = c.benchmark_group("runner");
    for kind in [PolicyKind::Heuristic, PolicyKind::Random] {
        let config = SelfPlayConfig::default()
            .with_matches(10)
            .with_seat(PlayerId::new(1), kind);
        let runner = SelfPlayRunner::new(config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", kind)), &runner, |b, runner| {
            b.iter(|| runner.run())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
