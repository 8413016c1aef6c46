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
//! Invariant tests for the storage core
//!
//! Exercises the packing invariant, signature consistency, id reuse
//! safety, and teardown ordering across whole-world operation sequences.

use signet_ecs::{EcsError, Entity, World, WorldConfig};

#[derive(Debug, PartialEq)]
struct Health(i32);

#[derive(Debug, PartialEq)]
struct Armor(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tag(u64);

/// Check the packing invariant on the store for `Tag`: occupied slots are
/// exactly `[0, len)` and both index maps agree for every live entity.
fn assert_packed(world: &World, expected_len: usize) {
    let storage = world.storage::<Tag>().unwrap();
    assert_eq!(storage.len(), expected_len);

    let entities: Vec<Entity> = storage.entities().collect();
    assert_eq!(entities.len(), expected_len);
    for entity in entities {
        let slot = storage.slot_of(entity).unwrap();
        assert!(slot < storage.len());
        assert_eq!(storage.components()[slot], Tag(entity.index() as u64));
    }
}

#[test]
fn packing_invariant_holds_under_interleaved_churn() {
    let mut world = World::with_config(WorldConfig::new(256));
    world.register_component::<Tag>().unwrap();

    let mut entities = Vec::new();
    for _ in 0..64 {
        let e = world.create_entity().unwrap();
        world.add_component(e, Tag(e.index() as u64)).unwrap();
        entities.push(e);
    }
    assert_packed(&world, 64);

    // Remove from the middle, the front, and the tail in turn.
    let mut live = 64;
    for (i, &e) in entities.iter().enumerate() {
        if i % 3 == 0 {
            world.remove_component::<Tag>(e).unwrap();
            live -= 1;
            assert_packed(&world, live);
        }
    }

    // Refill the vacated entities; the store stays packed throughout.
    for (i, &e) in entities.iter().enumerate() {
        if i % 3 == 0 {
            world.add_component(e, Tag(e.index() as u64)).unwrap();
            live += 1;
            assert_packed(&world, live);
        }
    }
    assert_eq!(live, 64);
}

#[test]
fn signature_tracks_component_set_exactly() {
    let mut world = World::with_config(WorldConfig::new(8));
    let health = world.register_component::<Health>().unwrap();
    let armor = world.register_component::<Armor>().unwrap();

    let e = world.create_entity().unwrap();
    assert!(world.signature(e).unwrap().is_empty());

    world.add_component(e, Health(10)).unwrap();
    world.add_component(e, Armor(5)).unwrap();
    let sig = world.signature(e).unwrap();
    assert!(sig.contains(health) && sig.contains(armor));

    world.remove_component::<Armor>(e).unwrap();
    let sig = world.signature(e).unwrap();
    assert!(sig.contains(health));
    assert!(!sig.contains(armor));

    world.remove_component::<Health>(e).unwrap();
    assert!(world.signature(e).unwrap().is_empty());
}

#[test]
fn recycled_id_never_inherits_stale_state() {
    let mut world = World::with_config(WorldConfig::new(1));
    world.register_component::<Health>().unwrap();
    world.register_component::<Armor>().unwrap();

    let e = world.create_entity().unwrap();
    world.add_component(e, Health(10)).unwrap();
    world.add_component(e, Armor(3)).unwrap();
    world.destroy_entity(e).unwrap();

    // The single slot is recycled immediately; it must start clean.
    let reused = world.create_entity().unwrap();
    assert_eq!(reused, e);
    assert!(world.signature(reused).unwrap().is_empty());
    assert!(matches!(
        world.get_component::<Health>(reused),
        Err(EcsError::MissingComponent { .. })
    ));
    assert!(matches!(
        world.get_component::<Armor>(reused),
        Err(EcsError::MissingComponent { .. })
    ));
}

#[test]
fn double_destroy_is_checked_not_fatal() {
    let mut world = World::with_config(WorldConfig::new(4));
    world.register_component::<Health>().unwrap();

    let e = world.create_entity().unwrap();
    world.add_component(e, Health(1)).unwrap();
    world.destroy_entity(e).unwrap();

    assert_eq!(
        world.destroy_entity(e),
        Err(EcsError::NoSuchEntity { entity: e })
    );
    // State is unchanged by the failed second destroy.
    assert_eq!(world.entity_count(), 0);
    assert_eq!(world.storage::<Health>().unwrap().len(), 0);
}

#[test]
fn capacity_error_is_recoverable() {
    let mut world = World::with_config(WorldConfig::new(2));
    let a = world.create_entity().unwrap();
    world.create_entity().unwrap();

    assert_eq!(
        world.create_entity(),
        Err(EcsError::CapacityExceeded {
            live: 2,
            capacity: 2
        })
    );

    // Destroying an entity frees a slot; the retry succeeds.
    world.destroy_entity(a).unwrap();
    assert_eq!(world.create_entity().unwrap(), a);
}

#[test]
fn failed_add_never_partially_applies() {
    let mut world = World::with_config(WorldConfig::new(4));
    world.register_component::<Health>().unwrap();

    let e = world.create_entity().unwrap();
    world.add_component(e, Health(10)).unwrap();
    let before = world.signature(e).unwrap();

    // Duplicate insert: store and signature both stay as they were.
    assert!(world.add_component(e, Health(99)).is_err());
    assert_eq!(world.signature(e).unwrap(), before);
    assert_eq!(world.get_component::<Health>(e).unwrap(), &Health(10));
    assert_eq!(world.storage::<Health>().unwrap().len(), 1);
}

#[test]
fn bulk_update_through_dense_slice() {
    let mut world = World::with_config(WorldConfig::new(32));
    world.register_component::<Health>().unwrap();

    let mut entities = Vec::new();
    for i in 0..10 {
        let e = world.create_entity().unwrap();
        world.add_component(e, Health(i)).unwrap();
        entities.push(e);
    }

    for health in world.storage_mut::<Health>().unwrap().components_mut() {
        health.0 *= 2;
    }

    for (i, &e) in entities.iter().enumerate() {
        assert_eq!(world.get_component::<Health>(e).unwrap(), &Health(i as i32 * 2));
    }
}

#[test]
fn swap_remove_keeps_neighbors_retrievable() {
    let mut world = World::with_config(WorldConfig::new(4));
    world.register_component::<Health>().unwrap();

    let a = world.create_entity().unwrap();
    let b = world.create_entity().unwrap();
    let c = world.create_entity().unwrap();
    world.add_component(a, Health(1)).unwrap();
    world.add_component(b, Health(2)).unwrap();
    world.add_component(c, Health(3)).unwrap();

    world.remove_component::<Health>(b).unwrap();

    assert_eq!(world.get_component::<Health>(a).unwrap(), &Health(1));
    assert_eq!(world.get_component::<Health>(c).unwrap(), &Health(3));
    assert_eq!(world.storage::<Health>().unwrap().len(), 2);
}
