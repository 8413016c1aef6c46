//! World management
//!
//! The World is the façade over the entity manager and the component
//! registry, and the only object external code needs to talk to. It keeps
//! every component mutation and the owning entity's signature consistent
//! as one logical transaction.

use crate::entity::{Entity, EntityManager};
use crate::error::EcsError;
use crate::registry::ComponentRegistry;
use crate::signature::{ComponentTypeId, Signature};
use crate::storage::PackedStorage;

/// Default size of the entity identifier space
pub const DEFAULT_MAX_ENTITIES: u32 = 1028;

/// Startup configuration for a [`World`]
///
/// Capacity bounds are fixed for the lifetime of the world; exceeding
/// them is a checked error, never a silent reallocation.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Size of the entity identifier space
    pub max_entities: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            max_entities: DEFAULT_MAX_ENTITIES,
        }
    }
}

impl WorldConfig {
    /// Create a configuration with a custom identifier space size
    pub fn new(max_entities: u32) -> Self {
        WorldConfig { max_entities }
    }
}

/// The central container for all entity and component state
///
/// # Examples
///
/// ```
/// use signet_ecs::World;
///
/// struct Position { x: f64, y: f64 }
///
/// let mut world = World::new();
/// world.register_component::<Position>()?;
///
/// let entity = world.create_entity()?;
/// world.add_component(entity, Position { x: 1.0, y: 2.0 })?;
/// assert_eq!(world.get_component::<Position>(entity)?.y, 2.0);
/// # Ok::<(), signet_ecs::EcsError>(())
/// ```
pub struct World {
    entities: EntityManager,
    components: ComponentRegistry,
}

impl World {
    /// Create a world with the default configuration
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create a world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        World {
            entities: EntityManager::with_capacity(config.max_entities),
            components: ComponentRegistry::with_capacity(config.max_entities),
        }
    }

    /// Create a new entity with an empty signature
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        self.entities.create()
    }

    /// Destroy an entity, dropping its components from every store
    ///
    /// Stores are purged and the signature cleared before the id re-enters
    /// the free list, so a recycled id can never observe stale state.
    pub fn destroy_entity(&mut self, entity: Entity) -> Result<(), EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::NoSuchEntity { entity });
        }
        self.components.entity_destroyed(entity);
        self.entities.destroy(entity)
    }

    /// Register a component type, creating its store
    ///
    /// A no-op returning the existing id if the type is already known.
    pub fn register_component<T: 'static>(&mut self) -> Result<ComponentTypeId, EcsError> {
        self.components.register::<T>()
    }

    /// Look up the stable id (signature bit) of a registered type
    pub fn component_type<T: 'static>(&self) -> Result<ComponentTypeId, EcsError> {
        self.components.type_id::<T>()
    }

    /// Attach a component to an entity and set its signature bit
    ///
    /// One logical transaction: the store insert happens first and is the
    /// only fallible step, so on a duplicate (or any other error) the
    /// signature is left untouched.
    pub fn add_component<T: 'static>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        let mut signature = self.entities.signature(entity)?;
        let type_id = self.components.type_id::<T>()?;

        self.components.insert(entity, component)?;
        signature.set(type_id);
        self.entities.set_signature(entity, signature)
    }

    /// Detach and return an entity's component, clearing its signature bit
    pub fn remove_component<T: 'static>(&mut self, entity: Entity) -> Result<T, EcsError> {
        let mut signature = self.entities.signature(entity)?;
        let type_id = self.components.type_id::<T>()?;

        let component = self.components.remove::<T>(entity)?;
        signature.clear(type_id);
        self.entities.set_signature(entity, signature)?;
        Ok(component)
    }

    /// Get a reference to an entity's component
    ///
    /// The borrow is valid until the next mutating call on the world; a
    /// swap-remove may relocate component data.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Result<&T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::NoSuchEntity { entity });
        }
        self.components.get::<T>(entity)
    }

    /// Get a mutable reference to an entity's component
    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Result<&mut T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::NoSuchEntity { entity });
        }
        self.components.get_mut::<T>(entity)
    }

    /// Get an entity's current signature
    pub fn signature(&self, entity: Entity) -> Result<Signature, EcsError> {
        self.entities.signature(entity)
    }

    /// Borrow the dense store for a component type
    ///
    /// For systems that iterate all components of one type in bulk.
    pub fn storage<T: 'static>(&self) -> Result<&PackedStorage<T>, EcsError> {
        self.components.storage::<T>()
    }

    /// Borrow the dense store for a component type mutably
    pub fn storage_mut<T: 'static>(&mut self) -> Result<&mut PackedStorage<T>, EcsError> {
        self.components.storage_mut::<T>()
    }

    /// Check whether a handle names a live entity
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Get the number of live entities
    pub fn entity_count(&self) -> u32 {
        self.entities.live_count()
    }

    /// Get the size of the entity identifier space
    pub fn capacity(&self) -> u32 {
        self.entities.capacity()
    }

    /// Destroy all entities and components, keeping registered type ids
    pub fn clear(&mut self) {
        self.components.clear();
        self.entities.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
