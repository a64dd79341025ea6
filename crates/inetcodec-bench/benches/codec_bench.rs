//! Codec benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use inetcodec_core::{InetCodec, ZeroRunPolicy, ipv4};

const IPV4_INPUTS: &[(&str, &str)] = &[
    ("short", "0.0.0.0"),
    ("private", "192.168.1.100"),
    ("widest", "255.255.255.255"),
];

const IPV6_INPUTS: &[(&str, &str)] = &[
    ("unspecified", "::"),
    ("loopback", "::1"),
    ("documentation", "2001:db8::1"),
    ("link_local", "fe80::1ff:fe23:4567:890a"),
    ("full", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
];

// Values whose zero runs make the two policies diverge.
const IPV6_VALUES: &[(&str, u128)] = &[
    ("no_zeros", 0x0001_0002_0003_0004_0005_0006_0007_0008),
    ("single_zero", 0x0001_0002_0003_0004_0005_0006_0000_0008),
    ("longer_second_run", 0x0001_0000_0002_0000_0000_0000_0000_0003),
    ("all_zero", 0),
];

fn bench_ipv4(c: &mut Criterion) {
    let codec = InetCodec::new();
    let mut group = c.benchmark_group("ipv4");

    for &(label, text) in IPV4_INPUTS {
        group.bench_with_input(BenchmarkId::new("inetcodec", label), text, |b, t| {
            b.iter(|| black_box(codec.from_ipv4(black_box(t))));
        });
        group.bench_with_input(BenchmarkId::new("std_net", label), text, |b, t| {
            b.iter(|| black_box(black_box(t).parse::<std::net::Ipv4Addr>()));
        });
    }

    let value = 0xC0A8_0164u32;
    group.bench_function("to_ipv4", |b| {
        b.iter(|| black_box(ipv4::format(black_box(value))));
    });
    group.finish();
}

fn bench_ipv6_parse(c: &mut Criterion) {
    let codec = InetCodec::new();
    let mut group = c.benchmark_group("ipv6_parse");

    for &(label, text) in IPV6_INPUTS {
        group.bench_with_input(BenchmarkId::new("inetcodec", label), text, |b, t| {
            b.iter(|| black_box(codec.from_ipv6(black_box(t))));
        });
        group.bench_with_input(BenchmarkId::new("std_net", label), text, |b, t| {
            b.iter(|| black_box(black_box(t).parse::<std::net::Ipv6Addr>()));
        });
    }
    group.finish();
}

fn bench_ipv6_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipv6_format");

    for policy in [ZeroRunPolicy::FirstRun, ZeroRunPolicy::LongestRun] {
        let codec = InetCodec::new().with_policy(policy);
        for &(label, value) in IPV6_VALUES {
            group.bench_with_input(BenchmarkId::new(policy.as_str(), label), &value, |b, &v| {
                b.iter(|| black_box(codec.to_ipv6(black_box(v))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_ipv4, bench_ipv6_parse, bench_ipv6_format);
criterion_main!(benches);
