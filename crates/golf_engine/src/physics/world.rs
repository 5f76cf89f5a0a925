//! Arena of collision objects and the per-frame physics step
//!
//! Objects live in a slot map keyed by [`ObjectKey`]. Keys stay valid across
//! soft deletes; flagged objects are only dropped by [`PhysicsWorld::purge_deleted`],
//! which the frame loop calls between steps.

use super::collision::{CollisionPoints, WorldCollider};
use super::object::CollisionObject;
use super::settings::PhysicsSettings;
use super::{integrator, pipeline};
use crate::scene::Scene;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to an object in a [`PhysicsWorld`]
    pub struct ObjectKey;
}

/// A contact found this step; never kept across steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// First object of the pair
    pub a: ObjectKey,
    /// Second object of the pair
    pub b: ObjectKey,
    /// Contact data, normal pointing from `a` toward `b`
    pub points: CollisionPoints,
}

/// A body pulled toward an attractor during integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attraction {
    /// Body receiving the pull
    pub body: ObjectKey,
    /// Object whose position and scale define the pull
    pub attractor: ObjectKey,
}

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Contacts detected
    pub collisions: usize,
    /// Objects absorbed (and soft-deleted) this step
    pub absorbed: Vec<ObjectKey>,
    /// The ball sank far enough into the hole
    pub goal_reached: bool,
    /// Resolution stopped early and integration was skipped
    pub aborted: bool,
}

/// Collision objects plus the settings used to simulate them
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    pub(crate) objects: SlotMap<ObjectKey, CollisionObject>,
    /// Insertion order; drives pair order and therefore resolution order
    pub(crate) order: Vec<ObjectKey>,
    pub(crate) settings: PhysicsSettings,
    pub(crate) attraction: Option<Attraction>,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Current settings
    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Mutable settings
    pub fn settings_mut(&mut self) -> &mut PhysicsSettings {
        &mut self.settings
    }

    /// Add an object
    pub fn insert(&mut self, object: CollisionObject) -> ObjectKey {
        let key = self.objects.insert(object);
        self.order.push(key);
        key
    }

    /// Remove an object immediately. Not for use during a step.
    pub fn remove(&mut self, key: ObjectKey) -> Option<CollisionObject> {
        let removed = self.objects.remove(key)?;
        self.order.retain(|&k| k != key);
        if self
            .attraction
            .is_some_and(|a| a.body == key || a.attractor == key)
        {
            self.attraction = None;
        }
        Some(removed)
    }

    /// Borrow an object
    pub fn get(&self, key: ObjectKey) -> Option<&CollisionObject> {
        self.objects.get(key)
    }

    /// Mutably borrow an object
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut CollisionObject> {
        self.objects.get_mut(key)
    }

    /// Objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &CollisionObject)> {
        self.order
            .iter()
            .filter_map(move |&key| self.objects.get(key).map(|obj| (key, obj)))
    }

    /// Number of objects, including soft-deleted ones not yet purged
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the world holds no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pull `attraction.body` toward `attraction.attractor` while integrating
    pub fn set_attraction(&mut self, attraction: Option<Attraction>) {
        self.attraction = attraction;
    }

    /// Active attraction, if any
    pub fn attraction(&self) -> Option<Attraction> {
        self.attraction
    }

    /// World-space collider of an object
    pub fn world_collider(&self, key: ObjectKey, scene: &Scene) -> Option<WorldCollider> {
        let object = self.objects.get(key)?;
        let collider = object.collider?;
        Some(collider.to_world_space(&scene.local_to_world(object.transform)))
    }

    /// Advance the simulation by `elapsed` seconds.
    ///
    /// Detects contacts, resolves them in detection order, then integrates
    /// every dynamic body.
    pub fn step(&mut self, scene: &mut Scene, elapsed: f32) -> StepReport {
        let mut report = StepReport::default();
        if !(elapsed.is_finite() && elapsed > 0.0) {
            log::debug!("Ignoring physics step with elapsed {elapsed}");
            return report;
        }

        let collisions = pipeline::detect_collisions(self, scene);
        report.collisions = collisions.len();

        if pipeline::resolve_collisions(self, scene, &collisions, &mut report)
            == pipeline::Resolution::Aborted
        {
            report.aborted = true;
            return report;
        }

        integrator::integrate(self, scene, elapsed);
        report
    }

    /// Drop soft-deleted objects; returns how many were removed
    pub fn purge_deleted(&mut self) -> usize {
        let doomed: Vec<ObjectKey> = self
            .iter()
            .filter(|(_, obj)| obj.to_delete())
            .map(|(key, _)| key)
            .collect();
        for &key in &doomed {
            self.remove(key);
        }
        if !doomed.is_empty() {
            log::debug!("Purged {} deleted collision objects", doomed.len());
        }
        doomed.len()
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
        self.order.clear();
        self.attraction = None;
    }
}
