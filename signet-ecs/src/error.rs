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
//! Error taxonomy for the storage core
//!
//! Every error here is a caller precondition violation, not a transient
//! failure: the core performs no I/O, so nothing is retryable. Variants
//! carry the offending entity and component type so callers can log or
//! recover (destroy entities and retry on capacity, skip a duplicate add,
//! register a missing type).

use crate::entity::Entity;
use crate::signature::Signature;
use thiserror::Error;

/// Errors surfaced at the [`World`](crate::World) and
/// [`ComponentRegistry`](crate::ComponentRegistry) boundary
///
/// Capacity errors are recoverable by freeing resources; the rest indicate
/// caller logic errors and should not be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EcsError {
    /// Entity creation or component insertion attempted at full capacity
    #[error("entity limit reached ({live} live; capacity {capacity})")]
    CapacityExceeded {
        /// Number of entries currently occupying the fixed space
        live: u32,
        /// The capacity bound that prevented the operation
        capacity: u32,
    },

    /// More component types registered than the signature can index
    #[error("component type limit reached (capacity {limit})")]
    TypeLimitReached {
        /// The fixed component type capacity
        limit: u32,
    },

    /// Handle is out of range, was never created, or was already destroyed
    #[error("{entity} does not exist or has been destroyed")]
    NoSuchEntity {
        /// The stale or invalid handle
        entity: Entity,
    },

    /// Component of this type added twice without an intervening remove
    #[error("{entity} already has a {type_name} component")]
    DuplicateComponent {
        /// The entity that already owns a slot in the store
        entity: Entity,
        /// Name of the component type
        type_name: &'static str,
    },

    /// Get or remove requested for a component the entity does not have
    #[error("{entity} has no {type_name} component")]
    MissingComponent {
        /// The entity without a slot in the store
        entity: Entity,
        /// Name of the component type
        type_name: &'static str,
    },

    /// Operation on a component type never registered with the registry
    #[error("component type {type_name} was never registered")]
    UnregisteredType {
        /// Name of the unregistered type
        type_name: &'static str,
    },

    /// Entity registered to a system whose requirement it does not match
    ///
    /// Matching is exact: a signature that is a strict superset of the
    /// requirement is still a mismatch.
    #[error("{entity} signature {actual} does not match required {required}")]
    SignatureMismatch {
        /// The rejected entity
        entity: Entity,
        /// The system's required signature
        required: Signature,
        /// The entity's actual signature
        actual: Signature,
    },
}
