use bomsig::{SIGNATURES, detect_prefix, match_bom};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_match_bom(c: &mut Criterion) {
    c.bench_function("match_bom_table", |b| {
        b.iter(|| {
            for sig in &SIGNATURES {
                let _ = match_bom(black_box(sig.bytes()));
            }
        })
    });
    c.bench_function("match_bom_miss", |b| {
        b.iter(|| match_bom(black_box(&[1, 2, 3])).is_err())
    });
}

fn bench_detect_prefix(c: &mut Criterion) {
    let mut data = vec![0xFE, 0xFF, 0x00, 0x00];
    data.extend(std::iter::repeat_n(0x41, 4096));
    c.bench_function("detect_prefix_utf32", |b| {
        b.iter(|| detect_prefix(black_box(&data)))
    });
}

criterion_group!(benches, bench_match_bom, bench_detect_prefix);
criterion_main!(benches);
