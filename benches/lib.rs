use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rand::prelude::*;
use rand::rngs::StdRng;

use taskalign::{
    GapScoring, TaskSequence, hybrid_alignment, needleman_wunsch, rank_layouts,
    rank_layouts_parallel, smith_waterman,
};

/// Synthetic task codes drawn from a small vocabulary, mimicking real layouts
/// (tens of tokens, heavy overlap between layouts).
fn generate_sequence(rng: &mut StdRng, len: usize) -> Vec<String> {
    const VOCAB: [&str; 12] = [
        "vlml", "flayout", "ecpcrev", "eholdcod", "fanrem", "tbocmod", "qecmod", "lpcclean",
        "hptcins", "combrep", "nozguide", "sealrep",
    ];
    (0..len)
        .map(|_| VOCAB[rng.random_range(0..VOCAB.len())].to_string())
        .collect()
}

fn generate_layouts(rng: &mut StdRng, count: usize, len: usize) -> Vec<TaskSequence> {
    (0..count)
        .map(|i| TaskSequence {
            layout_id: format!("layout-{i}"),
            db_layout_id: i as i64,
            tasks: generate_sequence(rng, len),
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let scoring = GapScoring::default();

    let seq1 = generate_sequence(&mut rng, 40);
    let seq2 = generate_sequence(&mut rng, 40);

    c.bench_function("needleman_wunsch/40x40", |b| {
        b.iter(|| needleman_wunsch(black_box(&seq1), black_box(&seq2), &scoring).unwrap())
    });

    let padded = needleman_wunsch(&seq1, &seq2, &scoring).unwrap();
    c.bench_function("smith_waterman/padded", |b| {
        b.iter(|| smith_waterman(black_box(&padded.seq1), black_box(&padded.seq2)).unwrap())
    });

    c.bench_function("hybrid_alignment/40x40", |b| {
        b.iter(|| hybrid_alignment(black_box(&seq1), black_box(&seq2), &scoring).unwrap())
    });

    let reference = TaskSequence {
        layout_id: "reference".to_string(),
        db_layout_id: -1,
        tasks: generate_sequence(&mut rng, 40),
    };
    let candidates = generate_layouts(&mut rng, 1000, 40);

    c.bench_function("rank_layouts/1000", |b| {
        b.iter(|| rank_layouts(black_box(&candidates), &reference, &scoring).unwrap())
    });

    for threads in [2, 4, 8] {
        c.bench_function(&format!("rank_layouts_parallel/1000/{threads}"), |b| {
            b.iter(|| {
                rank_layouts_parallel(black_box(&candidates), &reference, &scoring, threads)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
