// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! System registration surface and execution
//!
//! A system declares the component types it requires and maintains the
//! list of entities whose signature equals that requirement exactly.
//! Matching is never polled: registration, eviction, and revalidation all
//! happen through explicit calls.

use crate::entity::Entity;
use crate::error::EcsError;
use crate::signature::{ComponentTypeId, Signature};
use crate::world::World;

/// Signature-based entity membership for one system
///
/// Holds the system's required signature and the entities currently
/// registered against it. Matching is exact: an entity whose signature is
/// a strict superset of the requirement is rejected. There is no archetype
/// machinery here; a system interested in a different combination of
/// types is a different membership.
#[derive(Debug, Clone, Default)]
pub struct SystemMembership {
    required: Signature,
    entities: Vec<Entity>,
}

impl SystemMembership {
    /// Create an empty membership with no required types
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component type to the requirement
    ///
    /// Call once per required type before registering entities; the
    /// requirement is the conjunction of every call.
    pub fn require(&mut self, type_id: ComponentTypeId) {
        self.required.set(type_id);
    }

    /// Get the required signature
    pub fn required(&self) -> Signature {
        self.required
    }

    /// Register an entity whose signature matches the requirement exactly
    ///
    /// A signature that differs in any bit — including a superset — is a
    /// checked [`EcsError::SignatureMismatch`]. Registering an entity
    /// that is already in the list is a no-op.
    pub fn try_register(
        &mut self,
        entity: Entity,
        entity_signature: Signature,
    ) -> Result<(), EcsError> {
        if entity_signature != self.required {
            return Err(EcsError::SignatureMismatch {
                entity,
                required: self.required,
                actual: entity_signature,
            });
        }
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
        Ok(())
    }

    /// Remove an entity from the list; a no-op if absent
    pub fn remove(&mut self, entity: Entity) {
        self.entities.retain(|&e| e != entity);
    }

    /// Revalidate an entity against the requirement, evicting on mismatch
    ///
    /// Call after the entity's components changed elsewhere. Returns
    /// whether the entity remains registered.
    pub fn check(&mut self, entity: Entity, entity_signature: Signature) -> bool {
        if entity_signature != self.required {
            self.remove(entity);
            return false;
        }
        self.contains(entity)
    }

    /// Get the registered entities in registration order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Check whether an entity is registered
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Get the number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether no entities are registered
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Trait for systems that operate on the ECS world
///
/// Consumer systems own a [`SystemMembership`] and iterate its entities
/// inside [`run`](System::run).
pub trait System: Send + Sync {
    /// Execute the system on the world
    fn run(&mut self, world: &mut World);

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Executor that runs registered systems in insertion order
///
/// Execution is strictly sequential; the core has no scheduler and no
/// suspension points.
pub struct SystemExecutor {
    systems: Vec<Box<dyn System>>,
}

impl SystemExecutor {
    /// Create a new empty executor
    pub fn new() -> Self {
        SystemExecutor {
            systems: Vec::new(),
        }
    }

    /// Add a system to the executor
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Run every system once, in the order they were added
    pub fn run(&mut self, world: &mut World) {
        for system in &mut self.systems {
            system.run(world);
        }
    }

    /// Get the number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }
}

impl Default for SystemExecutor {
    fn default() -> Self {
        Self::new()
    }
}
