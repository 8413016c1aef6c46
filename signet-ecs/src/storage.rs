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
//! Dense per-type component storage
//!
//! Each component type gets one [`PackedStorage`]: a contiguous array of
//! values plus two synchronized index maps (entity to slot, slot to
//! entity). Removal swaps the tail into the vacated slot, so the array
//! never has holes and every operation stays O(1) amortized, at the cost
//! of not preserving iteration order across removals.

use std::any::{type_name, Any};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::entity::Entity;
use crate::error::EcsError;

/// Packed storage for a single component type
///
/// The store is the sole owner of its component values; callers only
/// borrow references, valid until the next mutating operation (a
/// swap-remove may relocate data).
///
/// All buffers are preallocated to the configured capacity, so inserts
/// never reallocate and access stays cache-friendly.
///
/// # Examples
///
/// ```
/// use signet_ecs::{Entity, PackedStorage};
///
/// let mut storage: PackedStorage<f64> = PackedStorage::with_capacity(16);
/// storage.insert(Entity::new(3), 1.5)?;
/// assert_eq!(storage.get(Entity::new(3)), Some(&1.5));
/// # Ok::<(), signet_ecs::EcsError>(())
/// ```
pub struct PackedStorage<T> {
    /// The component values, packed with no holes in `[0, len)`
    data: Vec<T>,
    /// Mapping from entity to its slot in `data`
    entity_to_slot: HashMap<Entity, usize>,
    /// Mapping from slot back to its entity (for swap-remove repair)
    slot_to_entity: Vec<Entity>,
    capacity: usize,
}

impl<T> PackedStorage<T> {
    /// Create a store preallocated for `capacity` components
    pub fn with_capacity(capacity: usize) -> Self {
        PackedStorage {
            data: Vec::with_capacity(capacity),
            entity_to_slot: HashMap::with_capacity(capacity),
            slot_to_entity: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a component for an entity at the next free slot
    ///
    /// Fails with [`EcsError::DuplicateComponent`] if the entity already
    /// has a slot here, and [`EcsError::CapacityExceeded`] at capacity.
    pub fn insert(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        if self.entity_to_slot.contains_key(&entity) {
            return Err(EcsError::DuplicateComponent {
                entity,
                type_name: type_name::<T>(),
            });
        }
        if self.data.len() == self.capacity {
            return Err(EcsError::CapacityExceeded {
                live: self.data.len() as u32,
                capacity: self.capacity as u32,
            });
        }

        let slot = self.data.len();
        self.data.push(component);
        self.slot_to_entity.push(entity);
        self.entity_to_slot.insert(entity, slot);

        debug_assert_eq!(self.entity_to_slot.len(), self.slot_to_entity.len());
        debug_assert_eq!(self.entity_to_slot.len(), self.data.len());

        Ok(())
    }

    /// Remove and return an entity's component
    ///
    /// The last occupied slot is swapped into the vacated position and
    /// both index maps are repaired for the moved entity, keeping the
    /// array packed.
    pub fn remove(&mut self, entity: Entity) -> Result<T, EcsError> {
        let slot = self
            .entity_to_slot
            .remove(&entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                type_name: type_name::<T>(),
            })?;

        let component = self.data.swap_remove(slot);
        self.slot_to_entity.swap_remove(slot);

        // If the tail was moved into the vacated slot, repoint its entity.
        if slot < self.data.len() {
            let moved = self.slot_to_entity[slot];
            self.entity_to_slot.insert(moved, slot);
        }

        debug_assert_eq!(self.entity_to_slot.len(), self.slot_to_entity.len());
        debug_assert_eq!(self.entity_to_slot.len(), self.data.len());

        Ok(component)
    }

    /// Get a reference to an entity's component
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let slot = self.entity_to_slot.get(&entity)?;
        Some(&self.data[*slot])
    }

    /// Get a mutable reference to an entity's component
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = self.entity_to_slot.get(&entity)?;
        Some(&mut self.data[*slot])
    }

    /// Check whether an entity has a component in this store
    pub fn contains(&self, entity: Entity) -> bool {
        self.entity_to_slot.contains_key(&entity)
    }

    /// Get the slot index an entity occupies, if any
    pub fn slot_of(&self, entity: Entity) -> Option<usize> {
        self.entity_to_slot.get(&entity).copied()
    }

    /// Get the number of components stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the fixed capacity of this store
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over all entities that have a component here, in slot order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slot_to_entity.iter().copied()
    }

    /// Get the dense component array
    ///
    /// Components are contiguous in memory, so bulk reads iterate at full
    /// cache-line utilization. Slot order matches [`entities`](Self::entities).
    pub fn components(&self) -> &[T] {
        &self.data
    }

    /// Get the dense component array mutably
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Remove every component, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
        self.entity_to_slot.clear();
        self.slot_to_entity.clear();
    }

    /// Apply `f` to every `(entity, component)` pair in parallel
    ///
    /// Runs over the dense array with Rayon. Only the component values are
    /// touched; the index maps are not mutated, so the packing invariant
    /// holds throughout.
    #[cfg(feature = "parallel")]
    pub fn par_for_each_mut<F>(&mut self, f: F)
    where
        T: Send,
        F: Fn(Entity, &mut T) + Send + Sync,
    {
        self.slot_to_entity
            .par_iter()
            .zip(self.data.par_iter_mut())
            .for_each(|(&entity, component)| f(entity, component));
    }
}

/// Type-erased handle to a [`PackedStorage`]
///
/// Lets the registry hold heterogeneous stores in one map and broadcast
/// entity teardown to all of them without knowing component types. The
/// concrete store is recovered through a checked [`Any`] downcast.
pub trait ErasedStorage: Any {
    /// Drop the entity's component if present
    ///
    /// Idempotent: absence is tolerated because teardown is broadcast to
    /// every store regardless of which components the entity actually had.
    fn drop_entity(&mut self, entity: Entity);

    /// Get the number of components stored
    fn len(&self) -> usize;

    /// Check whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every component, keeping the capacity
    fn clear(&mut self);

    /// Borrow as [`Any`] for downcasting to the concrete store
    fn as_any(&self) -> &dyn Any;

    /// Borrow mutably as [`Any`] for downcasting to the concrete store
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> ErasedStorage for PackedStorage<T> {
    fn drop_entity(&mut self, entity: Entity) {
        // Absence is fine here: teardown runs against every store.
        let _ = self.remove(entity);
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        PackedStorage::clear(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
