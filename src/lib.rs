//! Builds request payloads for a remote media-processing API.
//!
//! An [`AssemblyBuilder`] collects the auth block, fields, file attachments,
//! processing steps and the optional `notify_url`/`template_id` parameters,
//! then [`AssemblyBuilder::build`] turns them into a [`Payload`] for the
//! transport layer.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::builder::{AssemblyBuilder, RESERVED_KEYS, is_reserved_key};
pub use config::BuilderConfig;
pub use domain::auth::{Auth, EXPIRES_FORMAT};
pub use domain::payload::Payload;
pub use domain::ports::{FileProbe, FileProbeBox};
pub use domain::step::{RobotStep, Step, StepOptions, Steps};
pub use error::{AssemblyError, Result};
