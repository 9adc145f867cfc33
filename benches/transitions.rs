//! Benchmarks for wrapper transitions.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use editable_webdata::prelude::*;

fn bench_edit_cycle(c: &mut Criterion) {
    let text = "lorem ipsum ".repeat(64);
    c.bench_function("edit_save_cycle", |b| {
        b.iter(|| {
            EditableWebData::create(black_box(text.clone()))
                .edit()
                .update(black_box("changed".to_string()))
                .update_status(RemoteStatus::Loading)
                .save()
                .update_status(RemoteStatus::Success(()))
        });
    });
}

fn bench_status_updates(c: &mut Criterion) {
    c.bench_function("status_updates_100", |b| {
        b.iter(|| {
            let mut w = EditableWebData::create(0u32);
            for i in 0..100u16 {
                w = if i % 2 == 0 {
                    w.update_status(RemoteStatus::Loading)
                } else {
                    w.update_status(RemoteStatus::Failure(WebDataError::BadStatus(i)))
                };
            }
            black_box(w)
        });
    });
}

criterion_group!(benches, bench_edit_cycle, bench_status_updates);
criterion_main!(benches);
