//! Explicit Euler integration of dynamic bodies
//!
//! Forces accumulated during collision response are kept; gravity, linear
//! drag and the optional attraction are added on top, then velocity and
//! position are advanced and the accumulator is cleared.

use super::settings::PhysicsSettings;
use super::world::{Attraction, PhysicsWorld};
use crate::foundation::math::{utils, Vec3};
use crate::scene::Scene;

/// Pull source resolved once per step
#[derive(Debug, Clone, Copy)]
struct Attractor {
    body: super::world::ObjectKey,
    position: Vec3,
    scale: f32,
}

/// Advance every live dynamic body by `elapsed` seconds
pub fn integrate(world: &mut PhysicsWorld, scene: &mut Scene, elapsed: f32) {
    let attractor = world
        .attraction
        .and_then(|attraction| resolve_attractor(world, scene, attraction));

    let PhysicsWorld { objects, order, settings, .. } = world;
    for &key in order.iter() {
        let Some(object) = objects.get_mut(key) else { continue };
        if object.to_delete() {
            continue;
        }
        let transform_id = object.transform;
        let Some(body) = object.body_mut() else { continue };
        let Some(transform) = scene.transform_mut(transform_id) else { continue };

        let mass = body.mass();
        body.force += mass * settings.gravity;
        body.force += -body.velocity * settings.drag;

        if let Some(source) = attractor.filter(|a| a.body == key) {
            body.force += attraction_force(settings, transform.position, mass, source.position, source.scale);
        }

        body.velocity += body.force / mass * elapsed;
        transform.position += body.velocity * elapsed;
        body.force = Vec3::zeros();
    }
}

fn resolve_attractor(world: &PhysicsWorld, scene: &Scene, attraction: Attraction) -> Option<Attractor> {
    let source = world.get(attraction.attractor)?;
    if source.to_delete() {
        return None;
    }
    let transform = scene.transform(source.transform)?;
    Some(Attractor {
        body: attraction.body,
        position: transform.position,
        scale: transform.max_scale(),
    })
}

/// Pull on a body of `mass` at `body_position` toward an attractor.
///
/// Strength is `pull_strength_start * scale^2 / max(distance, epsilon)`;
/// pulls weaker than `min_pull_strength` are dropped entirely.
pub fn attraction_force(
    settings: &PhysicsSettings,
    body_position: Vec3,
    mass: f32,
    attractor_position: Vec3,
    attractor_scale: f32,
) -> Vec3 {
    let offset = attractor_position - body_position;
    let distance = offset.magnitude().max(settings.pull_distance_epsilon);
    let strength = settings.pull_strength_start * attractor_scale * attractor_scale / distance;
    if strength < settings.min_pull_strength {
        return Vec3::zeros();
    }
    utils::safe_normalize(offset).map_or_else(Vec3::zeros, |direction| direction * strength * mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::object::CollisionObject;
    use crate::physics::world::ObjectKey;
    use crate::scene::{SceneTransform, TransformId};
    use approx::assert_relative_eq;

    fn body(scene: &mut Scene, world: &mut PhysicsWorld, position: Vec3, velocity: Vec3, mass: f32) -> (ObjectKey, TransformId) {
        let t = scene.add_transform(SceneTransform::named("Body").with_position(position));
        let key = world.insert(CollisionObject::new_dynamic(t, None, mass).with_velocity(velocity));
        (key, t)
    }

    #[test]
    fn test_pure_drift_without_forces() {
        for &dt in &[0.001_f32, 0.01, 0.1] {
            let mut scene = Scene::new();
            let mut world = PhysicsWorld::new(PhysicsSettings::frictionless());
            let start = Vec3::new(1.0, 2.0, 3.0);
            let velocity = Vec3::new(1.0, -2.0, 0.5);
            let (key, t) = body(&mut scene, &mut world, start, velocity, 2.0);

            let steps = 100;
            for _ in 0..steps {
                integrate(&mut world, &mut scene, dt);
            }

            let expected = start + velocity * (steps as f32 * dt);
            assert_relative_eq!(scene.transform(t).unwrap().position, expected, epsilon = 1e-3);
            assert_relative_eq!(world.get(key).unwrap().body().unwrap().velocity, velocity, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gravity_and_force_reset() {
        let mut scene = Scene::new();
        let settings = PhysicsSettings { drag: 0.0, ..PhysicsSettings::default() };
        let mut world = PhysicsWorld::new(settings);
        let (key, _) = body(&mut scene, &mut world, Vec3::zeros(), Vec3::zeros(), 3.0);

        integrate(&mut world, &mut scene, 0.5);
        let state = *world.get(key).unwrap().body().unwrap();
        // Acceleration is independent of mass.
        assert_relative_eq!(state.velocity, Vec3::new(0.0, 0.0, -4.9), epsilon = 1e-5);
        assert_eq!(state.force, Vec3::zeros());
    }

    #[test]
    fn test_drag_slows_body() {
        let mut scene = Scene::new();
        let settings = PhysicsSettings { gravity: Vec3::zeros(), drag: 0.7, ..PhysicsSettings::default() };
        let mut world = PhysicsWorld::new(settings);
        let (key, _) = body(&mut scene, &mut world, Vec3::zeros(), Vec3::new(4.0, 0.0, 0.0), 1.0);

        integrate(&mut world, &mut scene, 0.1);
        let speed = world.get(key).unwrap().body().unwrap().speed();
        assert_relative_eq!(speed, 4.0 - 4.0 * 0.7 * 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_static_and_deleted_objects_do_not_move() {
        let mut scene = Scene::new();
        let mut world = PhysicsWorld::new(PhysicsSettings::default());
        let fixed_t = scene.add_transform(SceneTransform::named("Wall"));
        world.insert(CollisionObject::new_static(fixed_t, None));
        let (deleted, deleted_t) = body(&mut scene, &mut world, Vec3::zeros(), Vec3::x(), 1.0);
        world.get_mut(deleted).unwrap().mark_for_deletion();

        integrate(&mut world, &mut scene, 0.1);
        assert_eq!(scene.transform(fixed_t).unwrap().position, Vec3::zeros());
        assert_eq!(scene.transform(deleted_t).unwrap().position, Vec3::zeros());
    }

    #[test]
    fn test_attraction_threshold() {
        let settings = PhysicsSettings::default();
        // 1.0 * 1^2 / 4 = 0.25 < 0.5: too weak to apply.
        let far = attraction_force(&settings, Vec3::zeros(), 1.0, Vec3::new(4.0, 0.0, 0.0), 1.0);
        assert_eq!(far, Vec3::zeros());

        // 1.0 * 1^2 / 1 = 1.0, scaled by mass 2.
        let near = attraction_force(&settings, Vec3::zeros(), 2.0, Vec3::new(0.0, 1.0, 0.0), 1.0);
        assert_relative_eq!(near, Vec3::new(0.0, 2.0, 0.0), epsilon = 1e-6);

        // A grown hole reaches further: 1.0 * 2^2 / 4 = 1.0.
        let grown = attraction_force(&settings, Vec3::zeros(), 1.0, Vec3::new(4.0, 0.0, 0.0), 2.0);
        assert_relative_eq!(grown, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_attraction_at_zero_distance_is_finite() {
        let settings = PhysicsSettings::default();
        let force = attraction_force(&settings, Vec3::zeros(), 1.0, Vec3::zeros(), 1.0);
        assert_eq!(force, Vec3::zeros());
    }

    #[test]
    fn test_only_the_attracted_body_is_pulled() {
        let mut scene = Scene::new();
        let mut world = PhysicsWorld::new(PhysicsSettings { gravity: Vec3::zeros(), drag: 0.0, ..PhysicsSettings::default() });
        let (ball, _) = body(&mut scene, &mut world, Vec3::zeros(), Vec3::zeros(), 1.0);
        let (other, _) = body(&mut scene, &mut world, Vec3::new(0.0, 0.0, 1.0), Vec3::zeros(), 1.0);
        let (hole, _) = body(&mut scene, &mut world, Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), 1.0);
        world.set_attraction(Some(Attraction { body: ball, attractor: hole }));

        integrate(&mut world, &mut scene, 0.1);
        assert!(world.get(ball).unwrap().body().unwrap().velocity.x > 0.0);
        assert_eq!(world.get(other).unwrap().body().unwrap().velocity, Vec3::zeros());
    }
}
