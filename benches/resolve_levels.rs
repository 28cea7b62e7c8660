//! This bench resolves the requirement types of narratives spread through a
//! deep directory hierarchy, anchored in each of the supported ways.

#![allow(missing_docs)]

use std::{hint::black_box, path::PathBuf};

use criterion::{Criterion, criterion_group, criterion_main};
use narrative::{PathLevelResolver, RequirementTypes};

/// Generates narrative paths between one and eight levels deep.
fn narrative_paths(prefix: &str) -> Vec<PathBuf> {
    (1..=8)
        .map(|depth| {
            let mut path = PathBuf::from(prefix);
            for level in 0..depth {
                path.push(format!("level-{level}"));
            }
            path.join("narrative.md")
        })
        .collect()
}

fn resolve_levels(c: &mut Criterion) {
    let resolver = PathLevelResolver::new(
        PathBuf::from("/project/src/test/resources/requirements"),
        RequirementTypes::new(["theme", "capability", "feature", "story"]).unwrap(),
    );

    let mut group = c.benchmark_group("resolve type");
    for (name, prefix) in [
        ("configured root", "/project/src/test/resources/requirements"),
        ("stories folder", "/elsewhere/stories"),
        ("unanchored", "/elsewhere/tree"),
        ("windows separators", r"C:\project\src\test\resources\requirements"),
    ] {
        let paths = narrative_paths(prefix);
        group.bench_function(name, |b| {
            b.iter(|| {
                for path in &paths {
                    black_box(resolver.resolve_type(black_box(path), 0, true));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, resolve_levels);
criterion_main!(benches);
