use contour_dsp::{
    EnvelopeFollower, ExponentialEnvelopeFollower, FastEnvelopeFollower, RmsEnvelopeFollower,
    RmsEnvelopeFollowerDb, SmoothedFastEnvelopeFollower,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BLOCK: usize = 512;

fn bench_follower<F: EnvelopeFollower>(c: &mut Criterion, name: &str, mut follower: F) {
    let input: Vec<f32> = (0..BLOCK).map(|i| (i as f32 * 0.05).sin()).collect();
    let mut output = vec![0.0f32; BLOCK];
    c.bench_function(name, |b| {
        b.iter(|| {
            follower.process_block(black_box(&input), &mut output);
            black_box(&output);
        })
    });
}

fn bench_envelopes(c: &mut Criterion) {
    let sps = 48_000.0;
    bench_follower(
        c,
        "exponential 512",
        ExponentialEnvelopeFollower::new(0.001, 0.05, sps),
    );
    bench_follower(c, "staircase 512", FastEnvelopeFollower::new(0.005, sps));
    bench_follower(c, "smoothed 512", SmoothedFastEnvelopeFollower::new(0.005, sps));
    bench_follower(c, "rms 512", RmsEnvelopeFollower::new(0.005, sps));
    bench_follower(c, "rms db 512", RmsEnvelopeFollowerDb::new(0.005, sps));
}

criterion_group!(benches, bench_envelopes);
criterion_main!(benches);
