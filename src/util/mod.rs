//! Shared helpers: credential storage, navigation guarding, toasts.

pub mod guard;
pub mod storage;
pub mod toast;
