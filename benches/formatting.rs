use criterion::{Criterion, criterion_group, criterion_main};
use hooklog::fmt::{ensure_newline, tag};
use hooklog::webhook::{Multipart, Notification};
use hooklog::{LogEntry, Severity};
use std::hint::black_box;

fn bench_tag_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag::render");

    group.bench_function("colored", |b| {
        b.iter(|| tag::render(black_box(Severity::Warning), true));
    });
    group.bench_function("plain", |b| {
        b.iter(|| tag::render(black_box(Severity::Warning), false));
    });

    group.finish();
}

fn bench_entry_render(c: &mut Criterion) {
    let entry = LogEntry::new(Severity::Error, "disk full on /var: 97% used, 512 MiB free");

    c.bench_function("LogEntry::render_at", |b| {
        b.iter(|| black_box(&entry).render_at(black_box("2024/03/09 07:05:01"), true));
    });
}

fn bench_ensure_newline(c: &mut Criterion) {
    c.bench_function("ensure_newline", |b| {
        b.iter(|| ensure_newline(black_box("request handled in 12ms\n")));
    });
}

fn bench_payloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload");

    let notification = Notification::new("primary database unreachable", Some("<@12345>"));
    group.bench_function("json", |b| {
        b.iter(|| black_box(&notification).to_json());
    });

    let attachment = vec![b'x'; 4096];
    group.bench_function("multipart_4k", |b| {
        b.iter(|| Multipart::attachment(black_box(&attachment)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tag_render,
    bench_entry_render,
    bench_ensure_newline,
    bench_payloads
);
criterion_main!(benches);
