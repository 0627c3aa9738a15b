//! Performance benchmarks for WikiForum core operations
//!
//! Run with: `cargo bench -p wikiforum-core`
//!
//! These benchmarks measure critical path performance:
//! - Rendering a large forum page (serialize_document)
//! - Reading it back (parse_document)
//! - Locating a deep thread and appending a reply (add_reply)
//! - A full session edit cycle against an in-memory wiki

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;
use wikiforum_core::models::time::FixedTimeProvider;
use wikiforum_core::operations::add_reply;
use wikiforum_core::wikitext::{parse_document, serialize_document};
use wikiforum_core::{
    Collaborators, EditSession, Forum, ForumConfig, InMemoryWiki, StaticUser, Thread, ThreadId,
};

const NOW: &str = "2024-01-01T00:00:00.000Z";

/// Generate a forum with `top_level` threads, each carrying a reply chain
/// `depth` levels deep
fn generate_large_forum(top_level: usize, depth: usize) -> Forum {
    let mut forum = Forum::new(Some(1));
    forum.meta.insert("title", "Benchmark forum");

    for i in 0..top_level {
        let id = ThreadId::top_level(i);
        let mut thread = Thread::new(
            Some(id.clone()),
            format!("Post {} with some descriptive text.", i + 1),
            "Alice",
            NOW,
        );

        let mut cursor = &mut thread;
        for level in 0..depth {
            let child = Thread::new(
                cursor.next_child_id(),
                format!("Reply at level {}", level + 1),
                "Bob",
                NOW,
            );
            cursor.threads.push(child);
            cursor = &mut cursor.threads[0];
        }

        forum.threads.push(thread);
    }

    forum
}

/// Benchmark rendering 1000 threads
fn bench_serialize(c: &mut Criterion) {
    let forums = vec![generate_large_forum(250, 3)];
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("serialize_1000_threads", |b| {
        b.iter(|| serialize_document(black_box(&forums), "Alice", now))
    });
}

/// Benchmark parsing the page written by `bench_serialize`
fn bench_parse(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let text = serialize_document(&[generate_large_forum(250, 3)], "Alice", now);

    c.bench_function("parse_1000_threads", |b| {
        b.iter(|| parse_document(black_box(&text)).unwrap())
    });
}

/// Benchmark locating the last, deepest thread and replying to it
fn bench_add_reply(c: &mut Criterion) {
    let forum = generate_large_forum(250, 3);

    c.bench_function("add_reply_deep_target", |b| {
        b.iter_batched(
            || forum.clone(),
            |mut forum| {
                add_reply(&mut forum, "250-1-1-1", None, "Reply", "Carol", NOW)
                    .map(|_| ())
                    .unwrap()
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

/// Benchmark the mutate → render → submit → reload cycle
fn bench_session_cycle(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let text = serialize_document(&[generate_large_forum(100, 2)], "Alice", now);

    let mut group = c.benchmark_group("session_cycle");
    group.sample_size(10); // Each iteration re-parses the whole page

    group.bench_function("add_reply_300_threads", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let wiki = Arc::new(InMemoryWiki::with_page("Talk:Bench", text.clone()));
                let collaborators = Collaborators::new(
                    wiki.clone(),
                    wiki.clone(),
                    Arc::new(StaticUser::new("Carol")),
                )
                .with_clock(Arc::new(FixedTimeProvider::new(now)));
                let mut session =
                    EditSession::load("Talk:Bench", ForumConfig::default(), collaborators)
                        .await
                        .unwrap();

                let start = std::time::Instant::now();
                for i in 0..iters {
                    session
                        .add_reply(1, "50", &format!("Reply {}", i))
                        .await
                        .unwrap();
                }
                start.elapsed()
            })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_serialize,
    bench_parse,
    bench_add_reply,
    bench_session_cycle
);
criterion_main!(benches);
