//! Benchmarks for decode performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oxdec_x86::{Bitness, Decoder};

/// Sample x86-64 code: a small function with various instruction types.
/// This is a realistic mix of mov, arithmetic, control flow, and memory ops.
const X86_64_CODE: &[u8] = &[
    // Function prologue
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x83, 0xec, 0x20, // sub rsp, 0x20
    // Some arithmetic
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x45, 0xf8, // mov rax, [rbp-8]
    0x48, 0x83, 0xc0, 0x01, // add rax, 1
    0x48, 0x89, 0x45, 0xf0, // mov [rbp-16], rax
    // Conditional
    0x48, 0x83, 0x7d, 0xf0, 0x0a, // cmp qword [rbp-16], 10
    0x7e, 0x07, // jle .L1
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xeb, 0x05, // jmp .L2
    // .L1:
    0xb8, 0x00, 0x00, 0x00, 0x00, // mov eax, 0
    // .L2: epilogue
    0x48, 0x83, 0xc4, 0x20, // add rsp, 0x20
    0x5d, // pop rbp
    0xc3, // ret
];

/// Sample AVX-512 code: masked and broadcast vector ops stress the longer
/// prefix paths.
const EVEX_CODE: &[u8] = &[
    0x62, 0xf2, 0xcd, 0x0b, 0x28, 0x50, 0x01, // vpmuldq xmm2{k3}, xmm6, [rax+16]
    0x62, 0xf2, 0xcd, 0x9d, 0x28, 0x50, 0x01, // vpmuldq xmm2{k5}{z}, xmm6, [rax+8]{1to2}
    0x62, 0xf2, 0x4d, 0xdb, 0x2c, 0xd3, // vscalefps zmm2{k3}{z}, zmm6, zmm3, {ru-sae}
    0x62, 0xf1, 0x7c, 0x48, 0x10, 0x40, 0x01, // vmovups zmm0, [rax+64]
    0xc5, 0xf9, 0x6f, 0x04, 0x25, 0x44, 0x33, 0x22, 0x11, // vmovdqa xmm0, [0x11223344]
    0xc4, 0xe2, 0x71, 0xf7, 0xc2, // shlx eax, edx, ecx
];

/// Larger code block for throughput testing (repeated pattern).
fn generate_large_block(pattern: &[u8], size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        let to_copy = remaining.min(pattern.len());
        result.extend_from_slice(&pattern[..to_copy]);
    }
    result
}

fn decode_all(bitness: Bitness, code: &[u8]) -> usize {
    let mut decoder = Decoder::with_ip(bitness, code, 0x1000);
    let mut count = 0usize;
    while decoder.can_decode() {
        if decoder.decode().is_ok() {
            count += 1;
        }
    }
    count
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("x86_decode");

    // Benchmark single instruction decode
    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(Bitness::Bits64, black_box(&X86_64_CODE[1..4]));
            let _ = decoder.decode();
        })
    });

    // Benchmark small function
    group.bench_function("small_function", |b| {
        b.iter(|| decode_all(Bitness::Bits64, black_box(X86_64_CODE)))
    });

    // Benchmark the vector-prefix paths
    group.bench_function("evex_mix", |b| {
        b.iter(|| decode_all(Bitness::Bits64, black_box(EVEX_CODE)))
    });

    // Benchmark various sizes for throughput
    for size in [1024, 4096, 16384, 65536] {
        let code = generate_large_block(X86_64_CODE, size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("throughput", size), &code, |b, code| {
            b.iter(|| decode_all(Bitness::Bits64, black_box(code)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
