use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, SeedableRng};
use read_psnames::{mac_glyph_name, num_mac_glyph_names, ADOBE_GLYPHS};

fn glyph_names() -> Vec<&'static str> {
    (0..num_mac_glyph_names() as u16)
        .filter_map(mac_glyph_name)
        .collect()
}

fn misses() -> Vec<String> {
    glyph_names()
        .iter()
        .map(|name| format!("{name}.alt"))
        .collect()
}

pub fn lookup(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut hits = glyph_names();
    hits.shuffle(&mut rng);
    let misses = misses();

    let mut group = c.benchmark_group("agl_lookup");
    group.bench_with_input(BenchmarkId::new("hits", hits.len()), &hits, |b, names| {
        b.iter(|| {
            for name in names {
                black_box(ADOBE_GLYPHS.get(name));
            }
        })
    });
    group.bench_with_input(
        BenchmarkId::new("misses", misses.len()),
        &misses,
        |b, names| {
            b.iter(|| {
                for name in names {
                    black_box(ADOBE_GLYPHS.get(name));
                }
            })
        },
    );
    group.finish();
}

criterion_group!(benches, lookup);
criterion_main!(benches);
