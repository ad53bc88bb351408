//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod format;
pub mod investigation;
pub mod invocation;
pub mod package;

pub use config::{NoopConfig, apply_config_value, validate_config_key, validate_config_value};
pub use error::{AlarmEventError, ConfigError, InvokeError, PackagingError};
pub use format::{FormatKind, Formatted, answer_text, format_output};
pub use investigation::{InvestigationReport, build_prompt, extract_report, parse_alarm_event};
pub use invocation::parse_request;
pub use package::{ArchiveSummary, PackageReport, PackageSpec, archive_entry_name};
