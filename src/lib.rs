pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{FnTransport, HttpMethod, HttpRequest, HttpTransport, JsonResponse};
pub use crate::config::ClientConfig;
pub use crate::core::adapter::ResponseAdapter;
pub use crate::core::gate::{Activation, GateSet, SingleFireGate};
pub use crate::domain::model::DomainError;
pub use crate::domain::outcome::{Outcome, OutcomeParts};
pub use crate::utils::error::{Error, Result};
