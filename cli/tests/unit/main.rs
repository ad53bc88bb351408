//! Unit tests for noop CLI
//!
//! These tests use mocked ports and run fast without spawning real agents
//! or installers.

mod architecture;
mod helpers;
mod investigation_service;
mod package_builder_service;
