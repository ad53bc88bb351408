//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! agent runtime client, dependency resolution, zip writing, filesystem
//! access, the config file and shutdown signals.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod agent_runtime;
pub mod archive;
pub mod command_runner;
pub mod config;
pub mod fs;
pub mod resolver;
pub mod signal;
