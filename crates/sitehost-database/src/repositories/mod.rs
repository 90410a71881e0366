//! Repository traits and implementations.

pub mod user;
