//! Service traits at the network seam, with reqwest-backed adapters.

pub mod account;
pub mod user_admin;
