//! Built-in levels
//!
//! Procedural scenes following the level naming convention, used by the
//! headless binary and by tests.

use golf_engine::foundation::math::{constants::HALF_PI, Quat, Vec3};
use golf_engine::scene::{Aabb, Camera, Scene, SceneTransform};

/// Camera height above the player origin
const EYE_HEIGHT: f32 = 1.6;

/// Player rig: body, camera and the two hand anchors, plus a free club
fn add_player(scene: &mut Scene, position: Vec3) {
    let player = scene.add_transform(SceneTransform::named("Player").with_position(position));
    let camera = scene.add_child(
        player,
        SceneTransform::named("Camera")
            .with_position(Vec3::new(0.0, 0.0, EYE_HEIGHT))
            .with_rotation(Quat::from_axis_angle(&Vec3::x_axis(), HALF_PI)),
    );
    scene.add_camera(Camera { transform: camera, fovy: 60.0_f32.to_radians() });
    scene.add_child(
        camera,
        SceneTransform::named("Hand").with_position(Vec3::new(0.3, -0.4, -0.5)),
    );
    scene.add_child(
        camera,
        SceneTransform::named("AimHand").with_position(Vec3::new(0.0, -0.7, -0.6)),
    );
    scene.add_transform(SceneTransform::named("Club"));
}

fn add_wall(scene: &mut Scene, name: &str, center: Vec3, extents: Vec3) {
    scene.add_transform(SceneTransform::named(name).with_position(center));
    scene.add_mesh_bounds(name, Aabb::from_center_extents(Vec3::zeros(), extents));
}

/// Straight run: hole, two pickups and the ball in a line along -X
pub fn fairway() -> Scene {
    let mut scene = Scene::new();
    scene.add_transform(SceneTransform::named("Ground"));
    add_player(&mut scene, Vec3::new(2.0, 0.0, 0.0));

    scene.add_transform(SceneTransform::named("Hole").with_position(Vec3::new(1.2, 0.0, 0.5)));
    scene.add_transform(SceneTransform::named("Item.001").with_position(Vec3::new(-1.5, 0.0, 0.3)));
    scene.add_transform(SceneTransform::named("Item.002").with_position(Vec3::new(-3.0, 0.2, 0.3)));
    scene.add_transform(SceneTransform::named("Ball").with_position(Vec3::new(-5.0, 0.0, 0.2)));
    add_wall(&mut scene, "WallEnd", Vec3::new(-8.0, 0.0, 0.5), Vec3::new(0.25, 3.0, 0.5));
    scene
}

/// Walled pen with the ball tucked behind a pickup
pub fn pen() -> Scene {
    let mut scene = Scene::new();
    scene.add_transform(SceneTransform::named("Ground"));
    add_player(&mut scene, Vec3::new(3.0, 0.5, 0.0));

    add_wall(&mut scene, "WallNorth", Vec3::new(0.0, 4.0, 0.5), Vec3::new(6.0, 0.25, 0.5));
    add_wall(&mut scene, "WallSouth", Vec3::new(0.0, -4.0, 0.5), Vec3::new(6.0, 0.25, 0.5));
    add_wall(&mut scene, "WallWest", Vec3::new(-6.0, 0.0, 0.5), Vec3::new(0.25, 4.0, 0.5));

    scene.add_transform(SceneTransform::named("Hole").with_position(Vec3::new(2.2, 0.5, 0.5)));
    scene.add_transform(SceneTransform::named("Item.001").with_position(Vec3::new(0.0, 0.5, 0.3)));
    scene.add_transform(SceneTransform::named("Item.002").with_position(Vec3::new(-2.0, 1.0, 0.3)));
    scene.add_transform(SceneTransform::named("Item.003").with_position(Vec3::new(-2.0, 0.0, 0.3)));
    scene.add_transform(SceneTransform::named("Ball").with_position(Vec3::new(-4.0, 0.5, 0.2)));
    scene
}

/// Every built-in level, in play order
pub fn all() -> Vec<Scene> {
    vec![fairway(), pen()]
}
