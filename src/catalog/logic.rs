//! Catalog queries and random question selection.

use super::data::RESOURCES;
use super::types::Resource;
use rand::Rng;

/// All catalog entries in id order.
pub fn all_resources() -> &'static [Resource] {
    &RESOURCES
}

/// Draw a resource uniformly at random, with replacement.
///
/// Back-to-back repeats are possible; callers must not rely on variety.
pub fn pick_random_resource<R: Rng>(rng: &mut R) -> Resource {
    RESOURCES[rng.gen_range(0..RESOURCES.len())]
}

/// Case-insensitive lookup by display name.
pub fn find_by_name(name: &str) -> Option<Resource> {
    RESOURCES
        .iter()
        .copied()
        .find(|r| r.name.eq_ignore_ascii_case(name))
}
