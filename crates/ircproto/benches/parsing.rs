//! Benchmarks for IRC line and origin decoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ircproto::{Message, MessageRef, Origin};

/// Simple PING line
const SIMPLE_MESSAGE: &str = "PING :irc.example.com\r\n";

/// Line with a user origin
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!\r\n";

/// Numeric reply from a server
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host\r\n";

/// ISUPPORT line that fills all fifteen arguments
const ISUPPORT_MESSAGE: &str = ":irc.server.net 005 nickname AWAYLEN=200 CASEMAPPING=rfc1459 CHANMODES=b,k,l,imnpst CHANTYPES=# ELIST=CMNTU HOSTLEN=64 KICKLEN=255 MAXLIST=b:100 MODES=4 NETWORK=Test NICKLEN=30 PREFIX=(ov)@+ STATUSMSG=@+ are supported by this server\r\n";

fn benchmark_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Decoding");

    for (name, raw) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("numeric_response", NUMERIC_RESPONSE),
        ("isupport", ISUPPORT_MESSAGE),
    ] {
        group.bench_with_input(BenchmarkId::new("owned", name), raw, |b, raw| {
            b.iter(|| {
                let msg = Message::decode(black_box(raw)).unwrap();
                black_box(msg)
            })
        });

        group.bench_with_input(BenchmarkId::new("borrowed", name), raw, |b, raw| {
            b.iter(|| {
                let msg = MessageRef::decode(black_box(raw)).unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_origins(c: &mut Criterion) {
    let mut group = c.benchmark_group("Origin Decoding");

    for mask in ["nick!user@host.example.com", "irc.example.com", "nickname"] {
        group.bench_with_input(BenchmarkId::from_parameter(mask), mask, |b, mask| {
            b.iter(|| {
                let origin = Origin::decode(black_box(mask)).unwrap();
                black_box(origin)
            })
        });
    }

    group.finish();
}

fn benchmark_rejection(c: &mut Criterion) {
    c.bench_function("reject_missing_crlf", |b| {
        b.iter(|| {
            let result = Message::decode(black_box(":server.test 001 TestUser :Hello"));
            black_box(result)
        })
    });
}

criterion_group!(
    benches,
    benchmark_decoding,
    benchmark_origins,
    benchmark_rejection
);
criterion_main!(benches);
