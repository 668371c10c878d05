//! Invoice template: turns [`InvoiceOptions`](crate::core::InvoiceOptions)
//! into the layout tree consumed by the document renderer.
//!
//! The template is fixed: sender line, address/metadata header, title,
//! line-items table, totals table and an optional note, always in that order.

mod build;
mod fields;
pub mod policy;
mod tree;

pub use build::*;
pub use fields::*;
pub use policy::{BorderPolicy, ResolvedLayout, FOOTER_LAYOUT, TABLE_LAYOUT};
pub use tree::*;
