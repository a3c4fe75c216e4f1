//! Record layer integration tests
//!
//! Exercises the public record API the way the storage, IPC and vCard
//! collaborators use it.

mod common;

mod all_views;
mod child_lists;
mod clone;
mod dirty;
mod projection;
mod query_result;
mod read_only;
mod registry;
mod scenarios;
