//! Core invoice input types, builders, formatting, and errors.
//!
//! This module holds everything the template needs from the caller: the
//! options record, its defaults, and the printed forms of amounts and dates.

mod builder;
mod error;
pub mod format;
mod types;

pub use builder::*;
pub use error::*;
pub use format::{format_amount, format_date};
pub use types::*;

pub(crate) use types::non_empty;
