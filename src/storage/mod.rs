//! Storage module
//!
//! This module provides all persistence functionality:
//! - Raw key-value JSON document store
//! - Model definitions
//! - Repository layer for typed collection access

pub mod kv;
pub mod models;
pub mod repository;

pub use kv::KvStore;
pub use models::*;
pub use repository::Repository;
