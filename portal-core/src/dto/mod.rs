//! Data Transfer Objects for the portal API
//!
//! These types define both the inbound HTTP contract (strict: unknown fields
//! are rejected) and the outbound response shapes. Field names follow the
//! camelCase convention of the existing frontend.

pub mod dataset;
pub mod workflow;
