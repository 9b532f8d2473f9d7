//! Core library modules for wayfind
//!
//! Query planning on top of the routing engine, shared by the CLI and library users.

pub mod query;
