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
//! Signature bitsets and component type indices
//!
//! A [`Signature`] records which component types an entity currently has,
//! one bit per registered type. The bit position is the type's
//! [`ComponentTypeId`], assigned once by the registry and stable for the
//! process lifetime.

use std::fmt;

/// Maximum number of distinct component types in one process
///
/// This is the bit width of [`Signature`] and therefore a compile-time
/// bound; the registry refuses further registrations once it is reached.
pub const MAX_COMPONENT_TYPES: u32 = 32;

/// Stable small integer identifying a registered component type
///
/// Doubles as the bit position of that type in a [`Signature`]. Assigned
/// monotonically on first registration and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentTypeId(u32);

impl ComponentTypeId {
    /// Create a type id for the given bit index
    ///
    /// Indices at or above [`MAX_COMPONENT_TYPES`] cannot appear in a
    /// signature; the registry never hands one out.
    pub fn new(index: u32) -> Self {
        debug_assert!(index < MAX_COMPONENT_TYPES, "type index out of range");
        ComponentTypeId(index)
    }

    /// Get the bit index of this type
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentType({})", self.0)
    }
}

/// Fixed-width bitset recording which component types an entity has
///
/// Bit *i* is set if and only if the entity currently owns a live slot in
/// the store for the type with id *i*. Equality is exact bit equality,
/// which is what drives exact-match system registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature(u32);

impl Signature {
    /// The signature with no component types set
    pub const EMPTY: Signature = Signature(0);

    /// Set the bit for a component type
    pub fn set(&mut self, type_id: ComponentTypeId) {
        self.0 |= 1 << type_id.index();
    }

    /// Clear the bit for a component type
    pub fn clear(&mut self, type_id: ComponentTypeId) {
        self.0 &= !(1 << type_id.index());
    }

    /// Check whether the bit for a component type is set
    pub fn contains(self, type_id: ComponentTypeId) -> bool {
        self.0 & (1 << type_id.index()) != 0
    }

    /// Check whether no bits are set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bit pattern
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}
