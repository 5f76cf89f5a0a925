//! Per-frame collision pipeline
//!
//! Detection tests every unordered pair of collidable objects. Resolution
//! then walks the contacts in detection order:
//!
//! - pairs touching a soft-deleted object are skipped
//! - a ball/hole pair only checks the goal depth
//! - a hole/pickup pair absorbs the pickup into the hole
//! - a dynamic body against a static surface bounces
//! - anything else (static/static, dynamic/dynamic) is ignored

use super::object::CollisionObject;
use super::settings::StationaryPolicy;
use super::world::{Collision, ObjectKey, PhysicsWorld, StepReport};
use crate::foundation::math::{utils, Vec3};
use crate::scene::Scene;

/// How a resolution pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every contact was visited
    Completed,
    /// A stationary body stopped the pass under [`StationaryPolicy::AbortStep`]
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounce {
    Applied,
    Separating,
    Stationary,
}

/// Find every overlapping pair of collidable objects.
///
/// Pairs are produced as `(later, earlier)` in insertion order, which fixes
/// the order contacts are resolved in.
pub fn detect_collisions(world: &PhysicsWorld, scene: &Scene) -> Vec<Collision> {
    let shapes: Vec<_> = world
        .iter()
        .filter(|(_, obj)| obj.is_collidable())
        .filter_map(|(key, obj)| {
            let collider = obj.collider?;
            Some((key, collider.to_world_space(&scene.local_to_world(obj.transform))))
        })
        .collect();

    let mut collisions = Vec::new();
    for (i, (key_a, shape_a)) in shapes.iter().enumerate() {
        for (key_b, shape_b) in &shapes[..i] {
            let points = shape_a.test(shape_b);
            if points.has_collision {
                collisions.push(Collision {
                    a: *key_a,
                    b: *key_b,
                    points,
                });
            }
        }
    }

    log::trace!("Narrow phase: {} contacts among {} shapes", collisions.len(), shapes.len());
    collisions
}

/// Apply responses for `collisions` in order
pub fn resolve_collisions(
    world: &mut PhysicsWorld,
    scene: &mut Scene,
    collisions: &[Collision],
    report: &mut StepReport,
) -> Resolution {
    for collision in collisions {
        let (Some(a), Some(b)) = (world.get(collision.a), world.get(collision.b)) else {
            continue;
        };
        if a.to_delete() || b.to_delete() {
            continue;
        }

        if is_goal_pair(a, b) {
            if collision.points.depth > world.settings.goal_depth && !report.goal_reached {
                log::info!("Ball reached the hole (depth {:.3})", collision.points.depth);
                report.goal_reached = true;
            }
            continue;
        }

        // The normal is flipped so it always points from the fixed surface to the moving body.
        let (moving, fixed, normal) = match (a.is_dynamic(), b.is_dynamic()) {
            (false, true) => (collision.b, collision.a, collision.points.normal),
            (true, false) => (collision.a, collision.b, -collision.points.normal),
            _ => continue,
        };

        if let Some((hole, pickup)) = absorption_roles(world, moving, fixed) {
            absorb(world, scene, hole, pickup, report);
            continue;
        }

        let outcome = bounce(world, scene, moving, fixed, normal, collision.points.depth);
        if outcome == Bounce::Stationary
            && world.settings.stationary_policy == StationaryPolicy::AbortStep
        {
            log::trace!("Stationary body in contact, aborting resolution pass");
            return Resolution::Aborted;
        }
    }

    Resolution::Completed
}

fn is_goal_pair(a: &CollisionObject, b: &CollisionObject) -> bool {
    (a.is_ball() && b.is_hole()) || (a.is_hole() && b.is_ball())
}

/// `(hole, pickup)` when one side of the contact is the hole and the other a pickup
fn absorption_roles(
    world: &PhysicsWorld,
    moving: ObjectKey,
    fixed: ObjectKey,
) -> Option<(ObjectKey, ObjectKey)> {
    let m = world.get(moving)?;
    let f = world.get(fixed)?;
    if m.is_hole() && f.is_pickup() {
        Some((moving, fixed))
    } else if f.is_hole() && m.is_pickup() {
        Some((fixed, moving))
    } else {
        None
    }
}

/// Grow the hole by the pickup's value and soft-delete the pickup.
///
/// The hole's uniform scale and its mass both become the new scale. The
/// pickup is hidden by collapsing its transform to zero scale.
pub fn absorb(
    world: &mut PhysicsWorld,
    scene: &mut Scene,
    hole: ObjectKey,
    pickup: ObjectKey,
    report: &mut StepReport,
) {
    let Some(pickup_object) = world.objects.get_mut(pickup) else { return };
    if pickup_object.to_delete() {
        return;
    }
    pickup_object.mark_for_deletion();
    let value = pickup_object.pickup_value;
    let pickup_transform = pickup_object.transform;

    if let Some(transform) = scene.transform_mut(pickup_transform) {
        transform.scale = Vec3::zeros();
    }

    let Some(hole_object) = world.objects.get_mut(hole) else { return };
    let hole_transform = hole_object.transform;
    let Some(transform) = scene.transform_mut(hole_transform) else { return };
    let new_scale = transform.max_scale() + value;
    transform.scale = utils::splat(new_scale);
    if let Some(body) = hole_object.body_mut() {
        body.set_mass(new_scale);
    }

    log::debug!("Hole absorbed pickup, scale now {new_scale:.2}");
    report.absorbed.push(pickup);
}

/// Damped reflection of `moving` off `fixed`.
///
/// `normal` points from the fixed surface toward the moving body. The body
/// is moved back along its incoming direction and forward along its
/// outgoing direction by the angled penetration distance.
fn bounce(
    world: &mut PhysicsWorld,
    scene: &mut Scene,
    moving: ObjectKey,
    fixed: ObjectKey,
    normal: Vec3,
    depth: f32,
) -> Bounce {
    let settings = &world.settings;
    let (gravity, stationary_speed, tangent_epsilon) =
        (settings.gravity, settings.stationary_speed, settings.tangent_epsilon);

    let Some((friction, damp)) = world.objects.get(fixed).map(|f| (f.friction, f.damp)) else {
        return Bounce::Separating;
    };
    let Some(object) = world.objects.get_mut(moving) else {
        return Bounce::Separating;
    };
    let transform_id = object.transform;
    let Some(body) = object.body_mut() else {
        return Bounce::Separating;
    };

    let velocity = body.velocity;
    let speed = velocity.magnitude();
    if speed < stationary_speed {
        return Bounce::Stationary;
    }

    let incoming = velocity / speed;
    let approach = incoming.dot(&-normal);
    if approach <= 0.0 {
        // Already leaving the surface; reflecting would drive it back in.
        return Bounce::Separating;
    }

    let out_velocity = friction * (velocity - 2.0 * damp * velocity.dot(&-normal) * -normal);
    let weight = body.mass() * gravity;
    let out_force = weight - 2.0 * weight.dot(&normal) * normal;
    body.velocity = out_velocity;
    body.force = out_force;

    if approach > tangent_epsilon {
        let angled_dist = depth / approach;
        let outgoing = utils::safe_normalize(out_velocity).unwrap_or_else(Vec3::zeros);
        if let Some(transform) = scene.transform_mut(transform_id) {
            transform.position += (outgoing - incoming) * angled_dist;
        }
    } else {
        log::trace!("Near-tangential contact (approach {approach:.2e}), position left as is");
    }

    Bounce::Applied
}
