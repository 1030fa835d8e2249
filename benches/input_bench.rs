use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::collections::VecDeque;
use std::hint::black_box;
use tilde::input::read_key;

fn decode_stream(bytes: &[u8]) -> usize {
    let mut queue: VecDeque<u8> = bytes.iter().copied().collect();
    let mut keys = 0;
    while !queue.is_empty() {
        if read_key(&mut queue).is_ok() {
            keys += 1;
        }
    }
    keys
}

fn input_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_decoding");

    let typing: Vec<u8> = b"the quick brown fox jumps over the lazy dog\r".repeat(100);
    group.throughput(Throughput::Bytes(typing.len() as u64));
    group.bench_function("printable", |b| b.iter(|| black_box(decode_stream(&typing))));

    let navigation: Vec<u8> =
        b"\x1b[A\x1b[B\x1b[C\x1b[D\x1b[5~\x1b[6~\x1b[3~\x1bOH\x1b[F".repeat(100);
    group.throughput(Throughput::Bytes(navigation.len() as u64));
    group.bench_function("escape_sequences", |b| {
        b.iter(|| black_box(decode_stream(&navigation)))
    });

    group.finish();
}

criterion_group!(benches, input_decoding);
criterion_main!(benches);
