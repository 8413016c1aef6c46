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
//! # Signet ECS
//!
//! A dense, signature-indexed entity/component storage core.
//!
//! Entities are recyclable integer handles. Components of each registered
//! type live in a packed, cache-friendly array ([`PackedStorage`]) kept in
//! sync with sparse entity-to-slot lookups. Every entity carries a
//! [`Signature`] bitset recording which component types it currently has,
//! and systems match entities whose signature equals their requirement
//! exactly.
//!
//! ## Features
//!
//! - **Packed per-type storage**: O(1) insert/remove/lookup, swap-remove
//!   keeps the dense array hole-free
//! - **Signature bookkeeping**: the [`World`] façade keeps component data
//!   and entity signatures consistent as one logical transaction
//! - **Checked contracts**: precondition violations surface as [`EcsError`]
//!   values rather than panics
//! - **Parallelization**: optional Rayon integration for bulk component
//!   iteration (feature `parallel`, enabled by default)
//!
//! ## Example
//!
//! ```
//! use signet_ecs::World;
//!
//! #[derive(Debug, PartialEq)]
//! struct Health(i32);
//!
//! let mut world = World::new();
//! world.register_component::<Health>()?;
//!
//! let player = world.create_entity()?;
//! world.add_component(player, Health(10))?;
//! assert_eq!(world.get_component::<Health>(player)?, &Health(10));
//!
//! world.get_component_mut::<Health>(player)?.0 += 1;
//! assert_eq!(world.get_component::<Health>(player)?, &Health(11));
//! # Ok::<(), signet_ecs::EcsError>(())
//! ```

#![warn(missing_docs)]

/// Entity identifiers and lifecycle management
pub mod entity;

/// Error taxonomy for precondition violations
pub mod error;

/// Component type registration and store routing
pub mod registry;

/// Signature bitsets and component type indices
pub mod signature;

/// Dense per-type component storage
pub mod storage;

/// System registration surface and execution
pub mod system;

/// The World façade composing entities and components
pub mod world;

pub use entity::{Entity, EntityManager};
pub use error::EcsError;
pub use registry::ComponentRegistry;
pub use signature::{ComponentTypeId, Signature, MAX_COMPONENT_TYPES};
pub use storage::{ErasedStorage, PackedStorage};
pub use system::{System, SystemExecutor, SystemMembership};
pub use world::{World, WorldConfig, DEFAULT_MAX_ENTITIES};
