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
//! Component type registration and store routing
//!
//! The registry assigns each component type a stable [`ComponentTypeId`]
//! on first registration (an explicit map, never call-order-dependent
//! static state) and owns one [`PackedStorage`] per registered type. Typed
//! operations are routed to the right store through a checked downcast.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use log::debug;

use crate::entity::Entity;
use crate::error::EcsError;
use crate::signature::{ComponentTypeId, MAX_COMPONENT_TYPES};
use crate::storage::{ErasedStorage, PackedStorage};

/// Owner of all component stores, keyed by component type
///
/// Ids are assigned monotonically and never reused within a process, so a
/// type's id doubles as its signature bit for the process lifetime.
pub struct ComponentRegistry {
    type_ids: HashMap<TypeId, ComponentTypeId>,
    stores: HashMap<ComponentTypeId, Box<dyn ErasedStorage>>,
    next_type_id: u32,
    max_entities: u32,
}

impl ComponentRegistry {
    /// Create a registry whose stores are preallocated for `max_entities`
    pub fn with_capacity(max_entities: u32) -> Self {
        ComponentRegistry {
            type_ids: HashMap::new(),
            stores: HashMap::new(),
            next_type_id: 0,
            max_entities,
        }
    }

    /// Register a component type, creating its empty store
    ///
    /// Registering an already-registered type is a no-op that returns the
    /// existing id; the live store is never replaced. Fails with
    /// [`EcsError::TypeLimitReached`] once [`MAX_COMPONENT_TYPES`] ids
    /// have been assigned.
    pub fn register<T: 'static>(&mut self) -> Result<ComponentTypeId, EcsError> {
        if let Some(&id) = self.type_ids.get(&TypeId::of::<T>()) {
            return Ok(id);
        }
        if self.next_type_id == MAX_COMPONENT_TYPES {
            return Err(EcsError::TypeLimitReached {
                limit: MAX_COMPONENT_TYPES,
            });
        }

        let id = ComponentTypeId::new(self.next_type_id);
        self.next_type_id += 1;
        self.type_ids.insert(TypeId::of::<T>(), id);
        self.stores.insert(
            id,
            Box::new(PackedStorage::<T>::with_capacity(self.max_entities as usize)),
        );
        debug!("registered component type {} as {id}", type_name::<T>());

        Ok(id)
    }

    /// Look up the stable id of a registered component type
    ///
    /// Lookup only; an unregistered type is a checked
    /// [`EcsError::UnregisteredType`], never an implicit registration.
    pub fn type_id<T: 'static>(&self) -> Result<ComponentTypeId, EcsError> {
        self.type_ids
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(EcsError::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }

    /// Borrow the typed store for `T`
    pub fn storage<T: 'static>(&self) -> Result<&PackedStorage<T>, EcsError> {
        let id = self.type_id::<T>()?;
        self.stores
            .get(&id)
            .and_then(|store| store.as_any().downcast_ref::<PackedStorage<T>>())
            .ok_or(EcsError::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }

    /// Borrow the typed store for `T` mutably
    pub fn storage_mut<T: 'static>(&mut self) -> Result<&mut PackedStorage<T>, EcsError> {
        let id = self.type_id::<T>()?;
        self.stores
            .get_mut(&id)
            .and_then(|store| store.as_any_mut().downcast_mut::<PackedStorage<T>>())
            .ok_or(EcsError::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }

    /// Insert a component for an entity into the store for `T`
    pub fn insert<T: 'static>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        self.storage_mut::<T>()?.insert(entity, component)
    }

    /// Remove and return an entity's component from the store for `T`
    pub fn remove<T: 'static>(&mut self, entity: Entity) -> Result<T, EcsError> {
        self.storage_mut::<T>()?.remove(entity)
    }

    /// Get a reference to an entity's component of type `T`
    pub fn get<T: 'static>(&self, entity: Entity) -> Result<&T, EcsError> {
        self.storage::<T>()?
            .get(entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                type_name: type_name::<T>(),
            })
    }

    /// Get a mutable reference to an entity's component of type `T`
    pub fn get_mut<T: 'static>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        self.storage_mut::<T>()?
            .get_mut(entity)
            .ok_or(EcsError::MissingComponent {
                entity,
                type_name: type_name::<T>(),
            })
    }

    /// Broadcast entity teardown to every store regardless of type
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for store in self.stores.values_mut() {
            store.drop_entity(entity);
        }
    }

    /// Get the number of registered component types
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Empty every store, keeping type registrations and ids intact
    pub fn clear(&mut self) {
        for store in self.stores.values_mut() {
            store.clear();
        }
    }
}
