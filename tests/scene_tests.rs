use glam::Vec3;
use euclid_scene::motion::{Bob, Circle, Target};
use euclid_scene::objects::{Cube, Light, Plane, PrimitiveKind, Quad, Sphere, Volume, DEFAULT_MATERIAL, WHITE};
use euclid_scene::scene::{Scene, SceneState};
use euclid_scene::SceneError;

#[cfg(test)]
mod scene_tests {
    use super::*;

    fn counts(scene: &Scene) -> [usize; 6] {
        PrimitiveKind::ALL.map(|kind| scene.len(kind))
    }

    #[test]
    fn test_load_replaces_previous_preset_entirely() {
        let mut fresh = Scene::with_seed(11);
        fresh.load(2).unwrap();

        let mut scene = Scene::with_seed(11);
        scene.load(1).unwrap();
        assert_eq!(scene.quads().len(), 1);
        scene.load(2).unwrap();

        assert_eq!(counts(&scene), counts(&fresh));
        assert_eq!(counts(&scene), [1, 30, 0, 0, 0, 0]);
        assert_eq!(scene.updaters().len(), 30);
        assert_eq!(scene.state(), SceneState::Loaded(2));
    }

    #[test]
    fn test_preset_counts() {
        let expected: [(u32, [usize; 6], usize); 9] = [
            (1, [1, 32, 1, 0, 0, 0], 32),
            (2, [1, 30, 0, 0, 0, 0], 30),
            (3, [1, 31, 0, 0, 0, 0], 30),
            (4, [0, 36, 2, 0, 0, 0], 36),
            (5, [1, 6, 0, 10, 0, 0], 0),
            (6, [0, 1, 8, 0, 0, 0], 0),
            (7, [1, 32, 1, 0, 0, 1], 33),
            (8, [0, 1, 1, 25, 0, 1], 1),
            (9, [1, 30, 0, 0, 1, 1], 31),
        ];

        let mut scene = Scene::with_seed(5);
        for (id, primitives, updaters) in expected {
            scene.load(id).unwrap();
            assert_eq!(counts(&scene), primitives, "preset {}", id);
            assert_eq!(scene.updaters().len(), updaters, "preset {}", id);
        }
    }

    #[test]
    fn test_unknown_preset_loads_empty_scene() {
        let mut scene = Scene::with_seed(1);
        scene.load(1).unwrap();
        scene.load(99).unwrap();

        assert!(scene.is_empty());
        assert!(scene.updaters().is_empty());
        assert_eq!(scene.state(), SceneState::Loaded(99));
        scene.update(3.0).unwrap();
    }

    #[test]
    fn test_update_regenerates_static_scene() {
        let mut scene = Scene::with_seed(1);
        scene.add_plane(Plane::new(Vec3::Y, -30.0, WHITE, DEFAULT_MATERIAL));
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -30.0), 20.0, WHITE, DEFAULT_MATERIAL));

        scene.update(0.0).unwrap();

        let bounds = scene.spheres()[0].bounds();
        assert_eq!(bounds.min, Vec3::new(-20.0, -20.0, -50.0));
        assert_eq!(bounds.max, Vec3::new(20.0, 20.0, -10.0));
        assert_eq!(scene.planes()[0].normal, [0.0, 1.0, 0.0, -30.0]);
    }

    #[test]
    fn test_bob_binding_moves_sphere_and_its_bounds() {
        let mut scene = Scene::with_seed(1);
        let target = scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, WHITE, DEFAULT_MATERIAL));
        scene.bind(target, Bob::new(Vec3::Y, -6.0, 6.0, 1.0, 0.0)).unwrap();

        scene.update(0.0).unwrap();
        assert_eq!(scene.spheres()[0].center(), Vec3::ZERO);

        scene.update(std::f32::consts::FRAC_PI_2).unwrap();
        let sphere = scene.spheres()[0];
        assert!((sphere.center() - Vec3::new(0.0, 6.0, 0.0)).length() < 1e-5);
        assert_eq!(sphere.radius(), 1.0);
        assert!((sphere.bounds().max - Vec3::new(1.0, 7.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_update_regenerates_moved_quads_cubes_and_volumes() {
        let close = |a: [f32; 4], b: [f32; 4]| a.iter().zip(&b).all(|(x, y)| (x - y).abs() < 1e-4);
        let bob = Bob::new(Vec3::Z, 0.0, 4.0, 1.0, std::f32::consts::FRAC_PI_2);

        let mut scene = Scene::with_seed(1);
        let quad = scene.add_quad(Quad::new(Vec3::ZERO, Vec3::X, Vec3::Y, WHITE, DEFAULT_MATERIAL));
        let cube = scene.add_cube(Cube::axis_aligned(Vec3::ZERO, 1.0, WHITE, DEFAULT_MATERIAL));
        let volume = scene.add_volume(Volume::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, WHITE, DEFAULT_MATERIAL));
        for target in [quad, cube, volume] {
            scene.bind(target, bob).unwrap();
        }

        scene.update(0.0).unwrap();

        let quad = scene.quads()[0];
        assert!(close(quad.normal, [0.0, 0.0, 1.0, 4.0]), "{:?}", quad.normal);
        assert!(close(quad.bounds[0], [0.0, 0.0, 4.0, 0.0]));
        assert!(close(quad.bounds[1], [1.0, 1.0, 4.0, 0.0]));

        for (name, cube) in [("cube", scene.cubes()[0]), ("volume", scene.volumes()[0].0)] {
            assert!(close(cube.normals[0], [0.0, 0.0, -1.0, -4.0]), "{} {:?}", name, cube.normals);
            assert!(close(cube.normals[1], [-1.0, 0.0, 0.0, 0.0]), "{} {:?}", name, cube.normals);
            assert!(close(cube.normals[2], [0.0, -1.0, 0.0, 0.0]), "{} {:?}", name, cube.normals);
            assert!(close(cube.bounds[0], [0.0, 0.0, 4.0, 0.0]), "{}", name);
            assert!(close(cube.bounds[1], [1.0, 1.0, 5.0, 0.0]), "{}", name);
        }
    }

    #[test]
    fn test_circle_binding_keeps_light_w() {
        let mut scene = Scene::with_seed(1);
        let target = scene.add_light(Light::new(Vec3::new(0.0, 80.0, 0.0), WHITE, DEFAULT_MATERIAL));
        scene.bind(target, Circle::new(Vec3::Y, 100.0, 1.0, 0.0)).unwrap();

        for step in 0..20 {
            scene.update(step as f32 * 0.37).unwrap();
            let light = scene.lights()[0];
            let p = Vec3::from_slice(&light.position[..3]);
            assert!(((p - Vec3::new(0.0, 80.0, 0.0)).length() - 100.0).abs() < 1e-3);
            assert_eq!(light.position[3], 0.0);
        }
    }

    #[test]
    fn test_bind_rejects_planes_and_missing_slots() {
        let mut scene = Scene::with_seed(1);
        let plane = scene.add_plane(Plane::default());
        let bob = Bob::new(Vec3::Y, 0.0, 1.0, 1.0, 0.0);

        assert_eq!(scene.bind(plane, bob), Err(SceneError::NotMovable(PrimitiveKind::Plane)));
        assert_eq!(
            scene.bind(Target::new(PrimitiveKind::Sphere, 4), bob),
            Err(SceneError::UnboundTarget { kind: PrimitiveKind::Sphere, index: 4 })
        );
        assert!(scene.updaters().is_empty());
    }

    #[test]
    fn test_seeded_presets_are_reproducible() {
        for id in [2, 3, 5, 8, 9] {
            let mut a = Scene::with_seed(42);
            let mut b = Scene::with_seed(42);
            a.load(id).unwrap();
            b.load(id).unwrap();
            a.update(1.5).unwrap();
            b.update(1.5).unwrap();

            assert_eq!(a.spheres(), b.spheres(), "preset {}", id);
            assert_eq!(a.cubes(), b.cubes(), "preset {}", id);
            assert_eq!(a.lights(), b.lights(), "preset {}", id);
        }
    }

    #[test]
    fn test_updates_are_pure_functions_of_time() {
        let mut scene = Scene::with_seed(9);
        scene.load(4).unwrap();
        scene.update(2.0).unwrap();
        let at_two = scene.spheres().to_vec();

        scene.update(7.5).unwrap();
        scene.update(2.0).unwrap();
        assert_eq!(scene.spheres(), at_two.as_slice());
    }

    #[test]
    fn test_bobbing_spheres_stay_within_range() {
        let mut scene = Scene::with_seed(3);
        scene.load(1).unwrap();
        let origins: Vec<Vec3> = scene.spheres().iter().map(|s| s.center()).collect();

        for step in 0..50 {
            scene.update(step as f32 * 0.21).unwrap();
            for (sphere, origin) in scene.spheres().iter().zip(&origins) {
                let dy = sphere.center().y - origin.y;
                assert!((-6.0 - 1e-4..=6.0 + 1e-4).contains(&dy));
                assert_eq!(sphere.center().x, origin.x);
            }
        }
    }
}
