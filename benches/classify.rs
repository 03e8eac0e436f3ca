use abp_splitter::processor::classifier::classify;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use csv::ByteRecord;

fn sample_records() -> Vec<ByteRecord> {
    let rows = [
        vec!["21", "I", "1", "100000000001", "1", "2", "2001-01-01"],
        vec!["24", "I", "2", "100000000001", "1780L000001", "ENG", "1"],
        vec!["28", "I", "3", "100000000001", "12345678", "", ""],
        vec!["32", "I", "4", "100000000001", "1780C000001", "RD04"],
        vec!["55", "unknown"],
        vec![""],
    ];
    rows.iter()
        .cycle()
        .take(6_000)
        .map(|fields| ByteRecord::from(fields.clone()))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let records = sample_records();
    c.bench_function("classify_6k_records", |b| {
        b.iter(|| {
            for record in &records {
                black_box(classify(black_box(record)));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
