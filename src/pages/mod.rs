//! Page components, one per routable path.

pub mod admin;
pub mod login;
pub mod main;
pub mod profile;
