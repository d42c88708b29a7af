//! Benchmarks for the ringside pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ringside::render::to_image;
use ringside::{
    paint_plan, render, render_into, Accessory, AppearanceDescriptor, Avatar, HairStyle,
    SheetPacker,
};

fn masked_mohawk() -> AppearanceDescriptor {
    AppearanceDescriptor {
        hair_style: HairStyle::Mohawk,
        accessory: Accessory::Mask,
        ..AppearanceDescriptor::default()
    }
}

// -- Planning and rendering --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let plain = AppearanceDescriptor::default();
    let busy = masked_mohawk();

    group.bench_function("paint_plan", |b| b.iter(|| paint_plan(black_box(&busy))));

    group.bench_function("render_plain", |b| b.iter(|| render(black_box(&plain))));

    group.bench_function("render_masked", |b| b.iter(|| render(black_box(&busy))));

    // Reusing a buffer avoids the per-avatar allocation.
    group.bench_function("render_into_reused", |b| {
        let mut avatar = Avatar::default();
        b.iter(|| render_into(black_box(&busy), &mut avatar))
    });

    group.finish();
}

// -- Output --

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let avatar = render(&masked_mohawk());

    group.bench_function("to_image_x1", |b| {
        b.iter(|| to_image(black_box(avatar.pixels()), 1))
    });

    group.bench_function("to_image_x4", |b| {
        b.iter(|| to_image(black_box(avatar.pixels()), 4))
    });

    group.finish();
}

// -- Packing --

fn bench_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("packing");

    let roster: Vec<Avatar> = HairStyle::ALL
        .iter()
        .cycle()
        .take(16)
        .enumerate()
        .map(|(i, &hair_style)| {
            let d = AppearanceDescriptor {
                hair_style,
                ..AppearanceDescriptor::default()
            };
            render(&d).with_name(format!("wrestler-{}", i))
        })
        .collect();

    let packer = SheetPacker::new(2);

    group.bench_function("pack_roster_4", |b| {
        b.iter(|| packer.pack(black_box(&roster[..4])))
    });

    group.bench_function("pack_roster_16", |b| {
        b.iter(|| packer.pack(black_box(&roster)))
    });

    group.finish();
}

criterion_group!(benches, bench_rendering, bench_output, bench_packing);
criterion_main!(benches);
