use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sm_engine::{EngineConfig, TransformEngine};
use sm_ir::{EnvelopeStage, UpdateMode};
use strum::IntoEnumIterator;

fn pattern(len: usize) -> (Vec<i32>, Vec<EnvelopeStage>) {
    let pitches = (0..len)
        .map(|i| if i % 5 == 3 { -1 } else { (i * 7 % 48) as i32 + 36 })
        .collect();
    let stages: Vec<_> = EnvelopeStage::iter().collect();
    let envelope = (0..len).map(|i| stages[i % stages.len()]).collect();
    (pitches, envelope)
}

fn bench_transforms(c: &mut Criterion) {
    let (pitches, envelope) = pattern(64);
    for mode in UpdateMode::iter() {
        let mut engine = TransformEngine::with_config(EngineConfig {
            mode,
            modulo_base: 24,
            ..EngineConfig::default()
        })
        .unwrap();
        engine.set_envelope(envelope.clone());
        c.bench_function(&format!("transform_64_{:?}", mode), |b| {
            b.iter(|| engine.transform(black_box(&pitches)).unwrap())
        });
    }
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
