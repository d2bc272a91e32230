use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use euclid_scene::layout::Capacities;
use euclid_scene::motion::Bob;
use euclid_scene::objects::{Sphere, DEFAULT_MATERIAL, WHITE};
use euclid_scene::scene::Scene;
use euclid_scene::serializer::FrameSerializer;
use glam::Vec3;

/// Benchmark: one animated frame (update + pack) per preset
fn bench_preset_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset_frame");

    for id in [1u32, 2, 8, 9].iter() {
        let mut scene = Scene::with_seed(7);
        scene.load(*id).expect("preset loads");
        let mut serializer = FrameSerializer::new(Capacities::default()).expect("layout");
        let mut time = 0.0f32;

        group.bench_with_input(BenchmarkId::new("update_and_pack", id), id, |b, _| {
            b.iter(|| {
                time += 1.0 / 60.0;
                scene.update(black_box(time)).expect("update");
                black_box(serializer.pack(&scene).expect("pack"))
            })
        });
    }

    group.finish();
}

/// Benchmark: update cost as the number of bound spheres grows
fn bench_bound_spheres(c: &mut Criterion) {
    let mut group = c.benchmark_group("bound_spheres");

    for count in [100usize, 1000, 10000].iter() {
        let mut scene = Scene::with_seed(1);
        for i in 0..*count {
            let x = ((i as f32 * 0.1) % 20.0) - 10.0;
            let z = -((i as f32 * 0.3) % 50.0) - 10.0;
            let sphere = scene.add_sphere(Sphere::new(Vec3::new(x, 0.0, z), 0.5, WHITE, DEFAULT_MATERIAL));
            scene
                .bind(sphere, Bob::new(Vec3::Y, -6.0, 6.0, 1.0, i as f32 * 0.1))
                .expect("bind");
        }
        let mut serializer = FrameSerializer::new(Capacities::uniform(*count)).expect("layout");

        group.bench_with_input(BenchmarkId::new("update", count), count, |b, _| {
            b.iter(|| scene.update(black_box(1.25)).expect("update"))
        });
        group.bench_with_input(BenchmarkId::new("pack", count), count, |b, _| {
            b.iter(|| black_box(serializer.pack(&scene).expect("pack")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_preset_frames, bench_bound_spheres);
criterion_main!(benches);
