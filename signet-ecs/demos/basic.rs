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
//! Basic example demonstrating the storage core
//!
//! Creates a world, registers a component type, attaches data to an
//! entity, and drives a system whose membership matches the entity's
//! signature exactly.

use signet_ecs::{EcsError, System, SystemExecutor, SystemMembership, World};

#[derive(Debug)]
struct Health(i32);

// Regenerates health on every entity the membership matched.
struct RegenSystem {
    membership: SystemMembership,
}

impl System for RegenSystem {
    fn run(&mut self, world: &mut World) {
        for &entity in self.membership.entities() {
            if let Ok(health) = world.get_component_mut::<Health>(entity) {
                if health.0 < 100 {
                    health.0 += 1;
                    println!("  [RegenSystem] {entity} health is now {}", health.0);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "RegenSystem"
    }
}

fn main() -> Result<(), EcsError> {
    pretty_env_logger::init();

    println!("Signet ECS - Basic Example");
    println!("==========================\n");

    let mut world = World::new();
    println!("Created new world (capacity {} entities)", world.capacity());

    let health_type = world.register_component::<Health>()?;
    println!("Registered Health as {health_type}");

    let player = world.create_entity()?;
    world.add_component(player, Health(10))?;
    println!("Created {player} with Health(10)");

    let mut membership = SystemMembership::new();
    membership.require(health_type);
    membership.try_register(player, world.signature(player)?)?;
    println!("Registered {} entity with the regen system", membership.len());

    let mut executor = SystemExecutor::new();
    executor.add_system(RegenSystem { membership });

    println!("\nRunning 5 ticks:");
    for _ in 0..5 {
        executor.run(&mut world);
    }

    let health = world.get_component::<Health>(player)?;
    println!("\nFinal health: {}", health.0);
    Ok(())
}
