//! Frame-by-frame scenarios exercising detection, response and integration together

use crate::foundation::math::Vec3;
use crate::physics::{Attraction, Collider, CollisionObject, ObjectFlags, ObjectKey, PhysicsSettings, PhysicsWorld};
use crate::scene::{Scene, SceneTransform, TransformId};

const DT: f32 = 1.0 / 60.0;
const BALL_RADIUS: f32 = 0.2;

fn ground(scene: &mut Scene, world: &mut PhysicsWorld, friction: f32) {
    let t = scene.add_transform(SceneTransform::named("Ground"));
    world.insert(
        CollisionObject::new_static(t, Some(Collider::plane(Vec3::z(), 0.0))).with_friction(friction),
    );
}

fn ball(scene: &mut Scene, world: &mut PhysicsWorld, position: Vec3, velocity: Vec3) -> (ObjectKey, TransformId) {
    let t = scene.add_transform(SceneTransform::named("Ball").with_position(position));
    let key = world.insert(
        CollisionObject::new_dynamic(t, Some(Collider::sphere(Vec3::zeros(), BALL_RADIUS)), 1.0)
            .with_flags(ObjectFlags::BALL)
            .with_velocity(velocity),
    );
    (key, t)
}

#[test]
fn test_ball_bounces_on_ground_with_decaying_height() {
    let mut scene = Scene::new();
    let mut world = PhysicsWorld::new(PhysicsSettings::default());
    ground(&mut scene, &mut world, 0.7);
    let (key, t) = ball(&mut scene, &mut world, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

    let mut heights = Vec::new();
    let mut bounced = false;
    let mut touched = false;
    for _ in 0..600 {
        let report = world.step(&mut scene, DT);
        touched |= report.collisions > 0;
        let velocity = world.get(key).unwrap().body().unwrap().velocity;
        if touched && velocity.z > 0.0 {
            bounced = true;
        }
        heights.push(scene.transform(t).unwrap().position.z);
    }

    assert!(bounced, "ball never left the ground after contact");

    let lowest = heights.iter().copied().fold(f32::INFINITY, f32::min);
    assert!(lowest > BALL_RADIUS - 0.1, "ball sank to {lowest}");

    let first_contact = heights.iter().position(|&z| z < BALL_RADIUS + 0.05).unwrap();
    let first_peak = heights[first_contact..].iter().copied().fold(f32::MIN, f32::max);
    let late_peak = heights[300..].iter().copied().fold(f32::MIN, f32::max);
    assert!(first_peak < 1.0, "bounce peak {first_peak} above release height");
    assert!(late_peak < first_peak, "late peak {late_peak} did not decay below {first_peak}");
}

#[test]
fn test_ball_pulled_into_hole_reaches_goal() {
    let mut scene = Scene::new();
    let settings = PhysicsSettings { gravity: Vec3::zeros(), ..PhysicsSettings::default() };
    let mut world = PhysicsWorld::new(settings);
    let (ball_key, _) = ball(&mut scene, &mut world, Vec3::new(-1.0, 0.0, 0.5), Vec3::zeros());

    let hole_t = scene.add_transform(SceneTransform::named("Hole").with_position(Vec3::new(0.0, 0.0, 0.5)));
    let hole_key = world.insert(
        CollisionObject::new_dynamic(hole_t, Some(Collider::sphere(Vec3::zeros(), 0.5)), 1.0)
            .with_flags(ObjectFlags::HOLE),
    );
    world.set_attraction(Some(Attraction { body: ball_key, attractor: hole_key }));

    let reached = (0..600).any(|_| world.step(&mut scene, DT).goal_reached);
    assert!(reached);
}

#[test]
fn test_soft_deleted_pickup_is_absorbed_exactly_once_across_frames() {
    let mut scene = Scene::new();
    let settings = PhysicsSettings { gravity: Vec3::zeros(), drag: 0.0, ..PhysicsSettings::default() };
    let mut world = PhysicsWorld::new(settings);

    let hole_t = scene.add_transform(SceneTransform::named("Hole"));
    let hole = world.insert(
        CollisionObject::new_dynamic(hole_t, Some(Collider::sphere(Vec3::zeros(), 0.5)), 1.0)
            .with_flags(ObjectFlags::HOLE)
            .with_velocity(Vec3::new(1.0, 0.0, 0.0)),
    );
    let item_t = scene.add_transform(SceneTransform::named("Item").with_position(Vec3::new(1.0, 0.0, 0.0)));
    let item = world.insert(
        CollisionObject::new_static(item_t, Some(Collider::sphere(Vec3::zeros(), 0.3)))
            .with_flags(ObjectFlags::PICKUP)
            .with_pickup_value(0.5),
    );

    let mut absorbed = Vec::new();
    for _ in 0..120 {
        absorbed.extend(world.step(&mut scene, DT).absorbed);
    }

    assert_eq!(absorbed, vec![item]);
    assert_eq!(scene.transform(hole_t).unwrap().scale, Vec3::new(1.5, 1.5, 1.5));
    assert_eq!(world.get(hole).unwrap().body().unwrap().mass(), 1.5);

    assert_eq!(world.purge_deleted(), 1);
    assert!(world.get(item).is_none());
    assert!(world.get(hole).is_some());
}

#[test]
fn test_ball_stays_inside_walls() {
    let mut scene = Scene::new();
    let settings = PhysicsSettings { gravity: Vec3::zeros(), drag: 0.0, ..PhysicsSettings::default() };
    let mut world = PhysicsWorld::new(settings);

    let wall_t = scene.add_transform(SceneTransform::named("Wall").with_position(Vec3::new(2.0, 0.0, 0.0)));
    world.insert(CollisionObject::new_static(
        wall_t,
        Some(Collider::cuboid(Vec3::new(-0.1, -5.0, -1.0), Vec3::new(0.1, 5.0, 1.0))),
    ));
    let (key, t) = ball(&mut scene, &mut world, Vec3::zeros(), Vec3::new(3.0, 0.0, 0.0));

    for _ in 0..120 {
        world.step(&mut scene, DT);
        assert!(scene.transform(t).unwrap().position.x < 2.0 - 0.1);
    }
    assert!(world.get(key).unwrap().body().unwrap().velocity.x < 0.0);
}
