//! fieldcodec CLI library.
//!
//! Command implementations for inspecting which postings format a seeded
//! provider assigns to each field.

pub mod commands;
