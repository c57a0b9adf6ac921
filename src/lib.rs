//! Overlord: personal work tracking.
//!
//! This crate models the task record at the heart of the tracker: its
//! lifecycle state machine, in-progress time accounting, content-derived
//! identity, and the on-disk location of its record.
//!
//! # Architecture
//!
//! Overlord follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, identity, and storage layout

pub mod task;
