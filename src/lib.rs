//! # rechnungsvorlage
//!
//! Builds the document description of a German-language invoice for an
//! external document renderer. The crate only shapes data: it turns invoice
//! fields into a layout tree (text blocks, tables, border policies) and
//! leaves measuring, pagination and drawing to the renderer.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rechnungsvorlage::core::*;
//! use rechnungsvorlage::template::TemplateBuilder;
//! use rust_decimal_macros::dec;
//!
//! let options = InvoiceOptionsBuilder::new()
//!     .organization_address(AddressBuilder::new().name("Muster GmbH").city("Bern").build())
//!     .billing_address(AddressBuilder::new().name("Acme AG").post_code("8000").city("Zürich").build())
//!     .invoice_number(1042)
//!     .add_item(LineItemBuilder::new("Beratung", dec!(10), dec!(150)).description("März").build())
//!     .sub_total(dec!(1500))
//!     .add_tax_group("MwSt 8.1%", dec!(121.50))
//!     .total(dec!(1621.50))
//!     .build();
//!
//! let doc = TemplateBuilder::new()
//!     .today(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!     .build(&options)
//!     .unwrap();
//!
//! assert_eq!(doc.totals_table().unwrap().row_count(), 3);
//! println!("{}", doc.to_json().unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice options, builders, amount/date formatting |
//! | `template` (default) | Layout tree, border policies, template builder |
//! | `fonts` | Font assets and the render request for the renderer |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "template")]
pub mod template;

#[cfg(feature = "fonts")]
pub mod fonts;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "template")]
pub use crate::template::{build_template, build_template_on, DocumentDefinition, TemplateBuilder};
