//! Grouped counts, rankings and distinct-value statistics over records.
//!
//! Every operation here is a pure function of its inputs. Tables remember the
//! order in which keys were first seen so that rankings break ties the same
//! way on every run, regardless of hashing.
//!
//! # Module Structure
//!
//! - [`frequency`] - Occurrence counting by one or two fields
//! - [`ranking`] - Top-N selection with first-seen tie-breaks
//! - [`membership`] - Distinct members per group
//! - [`aggregate`] - The bundle of statistics a report is rendered from

mod aggregate;
mod error;
mod frequency;
mod membership;
mod ranking;

pub use aggregate::AggregatedStats;
pub use error::StatsError;
pub use frequency::{distinct_values, frequency, pair_frequency, FrequencyTable};
pub use membership::{distinct_membership, DistinctMembership};
pub use ranking::{top_n, RankedEntry, Ranking};
