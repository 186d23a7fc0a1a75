//! Core types shared across seqdiff facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! logging macros in `seqdiff-core`, so that every component emits the same
//! structured schema.

pub mod schema;
