//! Task records for the personal work tracker.
//!
//! A task carries a lifecycle state, accumulated in-progress time, a stable
//! identifier derived from its creation time, and a storage path derived
//! from the same timestamp. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
