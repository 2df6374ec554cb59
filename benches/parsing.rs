use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use csv_ingest::ingestion::{LoadOptions, LineReader, load_from_reader, split_fields};

fn synthetic_csv(rows: usize) -> String {
    let mut out = String::from("id,name,score,active\n");
    for i in 0..rows {
        out.push_str(&format!("{i},user{i},{}.5,true\n", i % 100));
    }
    out
}

fn bench_split_fields(c: &mut Criterion) {
    let line = "12345,a somewhat longer field,98.5,true,trailing";
    c.bench_function("split_fields/5_fields", |b| {
        b.iter(|| split_fields(black_box(line), ',', false))
    });
    c.bench_function("split_fields/5_fields_trimmed", |b| {
        b.iter(|| split_fields(black_box(line), ',', true))
    });
}

fn bench_line_reader(c: &mut Criterion) {
    let input = synthetic_csv(1_000);
    c.bench_function("line_reader/1k_lines", |b| {
        b.iter(|| {
            let mut reader = LineReader::new(black_box(input.as_bytes()));
            let mut count = 0usize;
            while reader.next_line().unwrap().is_some() {
                count += 1;
            }
            count
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let input = synthetic_csv(1_000);
    c.bench_function("load_from_reader/1k_rows", |b| {
        b.iter(|| {
            let mut bytes = input.as_bytes();
            load_from_reader(black_box(&mut bytes), &LoadOptions::default()).unwrap()
        })
    });
}

criterion_group!(benches, bench_split_fields, bench_line_reader, bench_load);
criterion_main!(benches);
