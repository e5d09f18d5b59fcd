// Infrastructure layer - Adapters around the analytics core
pub mod config;
pub mod memory_store;
