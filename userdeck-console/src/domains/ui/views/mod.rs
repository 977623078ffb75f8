//! Screen views for the console.

pub mod components;
pub mod home;
pub mod login;
pub mod signup;
