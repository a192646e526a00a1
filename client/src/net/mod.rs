//! Networking modules for the collections payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single mount-time fetch and decode, and `types`
//! defines the wire schema of `/data/raw.json`.

pub mod api;
pub mod types;
