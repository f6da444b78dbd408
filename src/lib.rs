//! MedRemind library
//!
//! This library exposes the core functionality of MedRemind for testing
//! and potential future library use.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
