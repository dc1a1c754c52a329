//! Energy diagnostics for a world
//!
//! Kinetic energy of the points plus the elastic energy stored in every
//! lattice spring (each counted once) and in active wall collision springs.
//! Used by the driver for logging and by tests to watch for blow-ups.

use super::collision::BoundingBox;
use super::springs::Spring;
use super::states::World;
use super::topology::unique_springs;
use super::vector::{difference, dot};

pub fn kinetic_energy(world: &World) -> f64 {
    let m = world.params.mass;
    world.state.velocities.iter().map(|v| 0.5 * m * dot(v, v)).sum()
}

pub fn spring_potential(world: &World) -> f64 {
    let pos = &world.state.positions;
    unique_springs()
        .map(|(a, b, kind)| {
            Spring::new(world.params.k_elastic, 0.0, kind.rest_length())
                .potential(&difference(&pos[a], &pos[b]))
        })
        .sum()
}

pub fn collision_potential(world: &World, bbox: &BoundingBox) -> f64 {
    let spring = Spring::new(world.params.k_collision, 0.0, 0.0);
    let mut e = 0.0;
    for p in world.state.positions.iter() {
        for face in bbox.violated_faces(p) {
            e += spring.potential(&difference(p, &bbox.anchor_point(face, p)));
        }
    }
    e
}

/// Kinetic + spring + wall collision energy
pub fn total_energy(world: &World, bbox: &BoundingBox) -> f64 {
    kinetic_energy(world) + spring_potential(world) + collision_potential(world, bbox)
}
