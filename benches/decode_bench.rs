/// Benchmarks for the communication-graph decoder.
///
/// Run with: `cargo bench`
///
/// Covers decode throughput at several graph scales plus an mmap-vs-read
/// comparison for the file loading path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use memmap2::Mmap;
use std::fs::File;
use std::io::{Read, Write};
use tempfile::tempdir;

use commgraph::domain::decode::decode;

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Data Generators
// ═══════════════════════════════════════════════════════════════════════════

/// Build a dump buffer with `num_procs` ranks, each sending `msgs_per_proc`
/// messages round-robin to its neighbours.
fn create_synthetic_dump(num_procs: i32, msgs_per_proc: i32) -> Vec<u8> {
    let mut buf = Vec::new();
    for pid in 0..num_procs {
        buf.extend_from_slice(&pid.to_le_bytes());
        buf.extend_from_slice(&msgs_per_proc.to_le_bytes());
        for m in 0..msgs_per_proc {
            let dest = (pid + m + 1) % num_procs;
            let size = ((m % 16) as f64 + 1.0) * 64.0;
            buf.extend_from_slice(&size.to_le_bytes());
            buf.extend_from_slice(&dest.to_le_bytes());
        }
    }
    buf
}

/// Write a dump to a temporary file and return handle + path.
fn write_dump_to_temp(buf: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.dump");
    let mut file = File::create(&path).unwrap();
    file.write_all(buf).unwrap();
    (dir, path)
}

// ═══════════════════════════════════════════════════════════════════════════
// Decode Throughput
// ═══════════════════════════════════════════════════════════════════════════

fn bench_decode_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode/scaling");

    for num_procs in [16, 64, 256, 1024].iter() {
        let msgs = 32;
        let buf = create_synthetic_dump(*num_procs, msgs);
        group.throughput(Throughput::Bytes(buf.len() as u64));

        group.bench_with_input(BenchmarkId::new("procs", num_procs), &buf, |b, buf| {
            b.iter(|| decode(black_box(buf)).unwrap())
        });
    }

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Mmap vs Traditional Read Comparison
// ═══════════════════════════════════════════════════════════════════════════

fn bench_mmap_vs_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("load/mmap_vs_read");

    let buf = create_synthetic_dump(512, 64);
    let (_dir, path) = write_dump_to_temp(&buf);

    let file_size = std::fs::metadata(&path).unwrap().len();
    group.throughput(Throughput::Bytes(file_size));

    group.bench_function("traditional_read", |b| {
        b.iter(|| {
            let mut file = File::open(&path).unwrap();
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer).unwrap();
            decode(black_box(&buffer)).unwrap()
        })
    });

    group.bench_function("mmap_read", |b| {
        b.iter(|| {
            let file = File::open(&path).unwrap();
            let mmap = unsafe { Mmap::map(&file) }.unwrap();
            decode(black_box(&mmap)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode_scaling, bench_mmap_vs_read);
criterion_main!(benches);
