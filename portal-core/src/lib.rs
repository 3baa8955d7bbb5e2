//! Portal Core
//!
//! Shared types for the workflow portal backend.
//!
//! This crate contains the DTOs exchanged between the HTTP surface and the
//! Seqera Platform client, plus the validation that inbound payloads must
//! pass before anything leaves the process.

pub mod dto;
