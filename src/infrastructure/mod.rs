//! Adapters behind the domain ports, plus configuration loading.

pub mod clock;
pub mod config;
pub mod in_memory;
