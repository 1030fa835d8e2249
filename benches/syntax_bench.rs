use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use tilde::document::Document;
use tilde::row::render;
use tilde::syntax::{highlight_row, select_syntax};

const C_LINE: &[u8] =
    b"static int compute(double x, char *s) { return x > 3.5 ? strlen(\"abc\") : 42; } // done";

fn highlight_single_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_row");
    let profile = select_syntax("bench.c");
    let rendered = render(C_LINE);
    group.throughput(Throughput::Bytes(rendered.len() as u64));

    group.bench_function("c_line", |b| {
        b.iter(|| black_box(highlight_row(profile, &rendered, false)))
    });

    group.bench_function("c_line_in_comment", |b| {
        b.iter(|| black_box(highlight_row(profile, &rendered, true)))
    });

    group.bench_function("no_profile", |b| {
        b.iter(|| black_box(highlight_row(None, &rendered, false)))
    });

    group.finish();
}

fn comment_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("comment_propagation");
    group.sample_size(20);

    let lines: Vec<&[u8]> = (0..5_000).map(|_| C_LINE).collect();

    group.bench_function("open_and_close_block_comment", |b| {
        let mut doc = Document::from_lines(lines.iter().copied());
        doc.set_path("bench.c");
        b.iter(|| {
            // Every following row flips to a block comment and back
            doc.insert_char(0, 0, b'*');
            doc.insert_char(0, 0, b'/');
            doc.delete_char(0, 0);
            doc.delete_char(0, 0);
            black_box(doc.num_rows());
        })
    });

    group.finish();
}

criterion_group!(benches, highlight_single_row, comment_propagation);
criterion_main!(benches);
