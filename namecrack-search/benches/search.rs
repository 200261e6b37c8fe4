use criterion::{Criterion, black_box, criterion_group, criterion_main};
use namecrack_search::{
    CandidateSource, RandomNameGenerator, TargetDigest, name_digest, search,
};

// 20 common names, the head of a typical ranked list
const COMMON_NAMES: &[&str] = &[
    "Michael", "Jessica", "Christopher", "Ashley", "Matthew", "Emily", "Joshua", "Sarah",
    "Jacob", "Samantha", "Nicholas", "Hannah", "Andrew", "Amanda", "Daniel", "Brittany", "Tyler",
    "Elizabeth", "Joseph", "Taylor",
];

fn ranked_list(len: usize) -> Vec<String> {
    COMMON_NAMES.iter().cycle().take(len).enumerate().map(|(i, n)| format!("{n}{i}")).collect()
}

fn bench_name_digest(c: &mut Criterion) {
    c.bench_function("name_digest_20", |b| {
        b.iter(|| {
            for name in COMMON_NAMES {
                black_box(name_digest(black_box(name)));
            }
        })
    });
}

/// Full ranked phase with no match, the common case for an unknown digest.
fn bench_ranked_miss(c: &mut Criterion) {
    let target = TargetDigest::from_bytes([0u8; 20]);
    let list = ranked_list(10_000);

    c.bench_function("ranked_miss_10k", |b| {
        b.iter(|| {
            let source = CandidateSource::ranked_only(list.clone());
            black_box(search(&target, 10_000, source))
        })
    });
}

fn bench_fallback_miss(c: &mut Criterion) {
    let target = TargetDigest::from_bytes([0u8; 20]);

    c.bench_function("fallback_miss_10k", |b| {
        b.iter(|| {
            let source = CandidateSource::new(Vec::new(), RandomNameGenerator::seeded(42));
            black_box(search(&target, 10_000, source))
        })
    });
}

criterion_group!(benches, bench_name_digest, bench_ranked_miss, bench_fallback_miss);
criterion_main!(benches);
