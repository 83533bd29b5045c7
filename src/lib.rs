//! ZamIO publisher onboarding — controller core.

pub mod api;
pub mod config;
pub mod error;
pub mod onboarding;
