//! Preferred-first ordering of instances.
//!
//! Order is tier (stable, then prerelease, then legacy) and, within a tier,
//! version text descending. Version text is compared as a string, not as a
//! version number, so `"9.0"` sorts above `"10.0"`. Every version the
//! installer reports for the supported generations has a two-digit major,
//! which keeps this safe in practice.

use std::cmp::Ordering;

use super::types::Instance;

/// Comparator placing the preferred instance first.
pub fn preferred_first(left: &Instance, right: &Instance) -> Ordering {
    right
        .tier()
        .preference_weight()
        .cmp(&left.tier().preference_weight())
        .then_with(|| right.version().cmp(left.version()))
}

/// Sort instances preferred-first.
///
/// The sort is stable: instances that compare equal keep their discovery
/// order.
pub fn rank_instances(mut instances: Vec<Instance>) -> Vec<Instance> {
    instances.sort_by(preferred_first);
    instances
}
