//! Installation discovery and ranking.
//!
//! # Modules
//!
//! - [`types`] - [`Instance`], [`ReleaseTier`] and [`Generation`]
//! - [`tags`] - literal tag-pair extraction for the query tool's output
//! - [`enumerate`] - candidate discovery from the query tool and legacy probes
//! - [`rank`] - preferred-first ordering

pub mod enumerate;
pub mod rank;
pub mod tags;
pub mod types;

pub use enumerate::{parse_query_output, InstanceEnumerator};
pub use rank::{preferred_first, rank_instances};
pub use types::{Generation, Instance, ReleaseTier};
