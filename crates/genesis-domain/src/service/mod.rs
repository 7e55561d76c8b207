//! Domain Services - Behaviour that doesn't belong to a single record
//!
//! Every service takes its collaborators (tables, job queries, event sinks,
//! schedulers) as parameters. Nothing here reaches for a global.

pub mod carrying;
pub mod do_after;
pub mod events;
pub mod join_queue;
pub mod mind_filter;
pub mod wound_licking;
