//! Chain snapshot export
//!
//! The ledger keeps no durable storage. This module is the sink that turns a
//! read-only view of the chain into a JSON snapshot file, and reads one back.

pub mod export;

pub use export::{export_chain, read_snapshot, snapshot, BlockRecord};
