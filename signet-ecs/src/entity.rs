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
//! Entity identifiers and lifecycle management
//!
//! Entities are plain indices into a fixed identifier space. Destroyed ids
//! are recycled through a FIFO free list, so a handle must not be compared
//! or dereferenced after its entity is destroyed without revalidation.

use std::collections::VecDeque;
use std::fmt;

use log::trace;

use crate::error::EcsError;
use crate::signature::Signature;

/// Unique identifier for an entity
///
/// A lightweight index handle with no payload. Identity is not stable
/// across a destroy/create pair: the same index may name a new entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity(u32);

impl Entity {
    /// Create an entity handle from a raw index
    pub fn new(index: u32) -> Self {
        Entity(index)
    }

    /// Get the raw index value
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Owner of the entity identifier space and per-entity signatures
///
/// Allocation pops the head of a FIFO free list seeded with every index in
/// ascending order, so ids come out lowest-recycled-first and the order is
/// deterministic. All state is preallocated to the configured capacity.
pub struct EntityManager {
    free: VecDeque<Entity>,
    signatures: Vec<Signature>,
    alive: Vec<bool>,
    live: u32,
}

impl EntityManager {
    /// Create a manager for an identifier space of `max_entities` ids
    pub fn with_capacity(max_entities: u32) -> Self {
        EntityManager {
            free: (0..max_entities).map(Entity::new).collect(),
            signatures: vec![Signature::EMPTY; max_entities as usize],
            alive: vec![false; max_entities as usize],
            live: 0,
        }
    }

    /// Allocate the next recycled entity id
    ///
    /// Fails with [`EcsError::CapacityExceeded`] once every id is live.
    /// The new entity's signature is always empty, even if the id was
    /// previously used.
    pub fn create(&mut self) -> Result<Entity, EcsError> {
        let entity = self.free.pop_front().ok_or(EcsError::CapacityExceeded {
            live: self.live,
            capacity: self.capacity(),
        })?;

        self.alive[entity.index() as usize] = true;
        self.live += 1;
        trace!("created {entity}");

        Ok(entity)
    }

    /// Destroy a live entity and return its id to the free-list tail
    ///
    /// The signature is cleared before the id becomes allocatable again.
    /// Destroying a dead or out-of-range handle is a checked
    /// [`EcsError::NoSuchEntity`].
    pub fn destroy(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.check_alive(entity)?;
        let index = entity.index() as usize;

        self.signatures[index] = Signature::EMPTY;
        self.alive[index] = false;
        self.free.push_back(entity);
        self.live -= 1;
        trace!("destroyed {entity}");

        Ok(())
    }

    /// Get a live entity's signature
    pub fn signature(&self, entity: Entity) -> Result<Signature, EcsError> {
        self.check_alive(entity)?;
        Ok(self.signatures[entity.index() as usize])
    }

    /// Overwrite a live entity's signature
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> Result<(), EcsError> {
        self.check_alive(entity)?;
        self.signatures[entity.index() as usize] = signature;
        Ok(())
    }

    /// Check whether an entity handle names a live entity
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive
            .get(entity.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Get the number of live entities
    pub fn live_count(&self) -> u32 {
        self.live
    }

    /// Get the size of the identifier space
    pub fn capacity(&self) -> u32 {
        self.signatures.len() as u32
    }

    /// Destroy every entity and reseed the free list in ascending order
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        self.free.clear();
        self.free.extend((0..capacity).map(Entity::new));
        self.signatures.fill(Signature::EMPTY);
        self.alive.fill(false);
        self.live = 0;
    }

    fn check_alive(&self, entity: Entity) -> Result<(), EcsError> {
        if self.is_alive(entity) {
            Ok(())
        } else {
            Err(EcsError::NoSuchEntity { entity })
        }
    }
}
