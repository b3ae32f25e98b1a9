//! Dynamic body component with named accelerations and per-tick force input.
//!
//! The [`RigidBody`] component stores velocity, mass, and a set of named
//! constant accelerations (gravity, wind, ...) that can be toggled
//! independently. Gameplay systems push continuous forces with
//! [`RigidBody::apply_force`] and instantaneous impulses with
//! [`RigidBody::apply_impulse`]; the physics step consumes both once per tick.
//!
//! The `kinematic` flag takes the body out of the simulation entirely: the
//! physics step skips it and its position is driven externally (the ending
//! cutscene moves the player this way).

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// A named acceleration that can be toggled on/off.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    /// The acceleration vector in world units per second squared.
    pub value: Vec2,
    /// Whether this acceleration is currently active.
    pub enabled: bool,
}

impl AccelerationForce {
    /// Create a new enabled acceleration.
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Dynamic body storing velocity, mass, and pending force input.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `forces` - Named accelerations applied every tick while enabled
/// - `mass` - Divides forces and impulses (always positive)
/// - `friction` - Velocity damping factor (0.0 = no friction, higher = more drag)
/// - `pending_force` - Continuous force accumulated for the current tick
/// - `pending_impulse` - Instantaneous impulse accumulated for the current tick
/// - `kinematic` - When true, the physics step leaves this body alone
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_mass(40.0);
/// rb.add_force("gravity", Vec2::new(0.0, -30.0));
/// rb.apply_force(Vec2::new(1200.0, 0.0));
/// rb.apply_impulse(Vec2::new(0.0, 800.0));
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub forces: FxHashMap<String, AccelerationForce>,
    pub mass: f32,
    /// Velocity damping factor. Applied as: velocity *= (1 - friction * delta).
    pub friction: f32,
    pub pending_force: Vec2,
    pub pending_impulse: Vec2,
    pub kinematic: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a unit-mass body with zero velocity and no accelerations.
    pub fn new() -> Self {
        Self::with_mass(1.0)
    }

    /// Create a body with the given mass. Non-positive masses are clamped to a
    /// tiny positive value so force division stays finite.
    pub fn with_mass(mass: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            forces: FxHashMap::default(),
            mass: mass.max(f32::EPSILON),
            friction: 0.0,
            pending_force: Vec2::ZERO,
            pending_impulse: Vec2::ZERO,
            kinematic: false,
        }
    }

    /// Set the velocity damping factor.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    /// Add or update a named acceleration (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Enable or disable a named acceleration.
    /// Returns false if it doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Check if a named acceleration exists and is enabled.
    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).map(|f| f.enabled).unwrap_or(false)
    }

    /// Sum of all enabled named accelerations.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vec2::ZERO, |acc, f| acc + f.value)
    }

    /// Accumulate a continuous force for this tick.
    pub fn apply_force(&mut self, force: Vec2) {
        self.pending_force += force;
    }

    /// Accumulate an instantaneous impulse for this tick.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.pending_impulse += impulse;
    }

    /// Drop any force input accumulated this tick.
    pub fn clear_pending(&mut self) {
        self.pending_force = Vec2::ZERO;
        self.pending_impulse = Vec2::ZERO;
    }

    /// Magnitude of the current velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Stop the body and take it out of the simulation.
    pub fn freeze(&mut self) {
        self.velocity = Vec2::ZERO;
        self.clear_pending();
        self.kinematic = true;
    }
}
