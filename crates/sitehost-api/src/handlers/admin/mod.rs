//! Admin console handlers.

pub mod users;
