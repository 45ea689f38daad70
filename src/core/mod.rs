pub mod adapter;
pub mod gate;

pub use crate::domain::model::{DomainError, ResponseBody};
pub use crate::domain::outcome::{Outcome, OutcomeParts};
pub use crate::domain::ports::{RawResponse, Transport};
pub use crate::utils::error::Result;
