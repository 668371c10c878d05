use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::TemplateError;
use super::format;

/// Currency printed in the grand-total row when none is given.
pub const DEFAULT_CURRENCY: &str = "CHF";

/// Days between invoice date and due date when no due date is given.
pub const DEFAULT_PAYMENT_TERM_DAYS: u64 = 10;

/// Everything the invoice template can show.
///
/// Every field is optional. Defaults are applied by [`InvoiceOptions::resolve`]
/// right before the template is built, never while the record is assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceOptions {
    /// Sender address, printed as a single small line above the header.
    pub organization_address: Option<Address>,
    /// Recipient address, printed in the left column of the header.
    pub billing_address: Option<Address>,
    /// Invoice date. Defaults to today.
    pub date: Option<NaiveDate>,
    /// Payment due date. Defaults to today + 10 days.
    pub due_date: Option<NaiveDate>,
    pub invoice_number: Option<InvoiceNumber>,
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<LineItem>,
    pub sub_total: Option<Decimal>,
    pub adjustment: Option<Decimal>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tax_groups: Vec<TaxGroup>,
    pub total: Option<Decimal>,
    /// ISO 4217 code shown next to the grand total. Defaults to "CHF".
    pub currency: Option<String>,
    /// Free text printed in gray below the totals.
    pub note: Option<String>,
}

/// Postal address. All parts are optional; empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub name: Option<String>,
    /// Attention line ("z. Hd.").
    pub attn: Option<String>,
    pub street: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
}

/// One billable row on the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    /// Secondary text printed in gray below the name.
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: Decimal,
    /// Price per unit.
    pub rate: Decimal,
    /// Line total. Taken as given, not recomputed.
    pub total: Decimal,
}

/// One aggregated tax line shown in the totals block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxGroup {
    /// Label, e.g. "MwSt 8.1%".
    pub name: String,
    pub amount: Decimal,
}

/// Invoice number as supplied by the caller: free text or any JSON number.
///
/// Numbers are printed in their JSON form, so `17` shows as "17" and
/// `17.5` as "17.5".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceNumber {
    Number(serde_json::Number),
    Text(String),
}

impl InvoiceNumber {
    /// An empty text or the number 0 is treated as "no invoice number".
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for InvoiceNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InvoiceNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for InvoiceNumber {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for InvoiceNumber {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// Read a list field, treating an explicit `null` like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// [`InvoiceOptions`] with every default applied.
///
/// Zero amounts stay zero here; the template decides which zero rows to hide.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub organization_address: Option<Address>,
    pub billing_address: Address,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    /// `None` when the supplied number was blank.
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub items: Vec<LineItem>,
    pub sub_total: Decimal,
    pub adjustment: Decimal,
    pub tax_groups: Vec<TaxGroup>,
    pub total: Decimal,
    pub currency: String,
    pub note: Option<String>,
}

impl InvoiceOptions {
    /// Parse options from the camelCase JSON record used by renderer callers.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        serde_json::from_str(json).map_err(|e| TemplateError::Input(e.to_string()))
    }

    /// Apply every default, treating `today` as "now".
    pub fn resolve(&self, today: NaiveDate) -> Result<ResolvedOptions, TemplateError> {
        let date = self.date.unwrap_or(today);
        let due_date = match self.due_date {
            Some(d) => d,
            None => format::due_date_from(today, DEFAULT_PAYMENT_TERM_DAYS)
                .map_err(|e| e.at("dueDate"))?,
        };

        Ok(ResolvedOptions {
            organization_address: self.organization_address.clone(),
            billing_address: self.billing_address.clone().unwrap_or_default(),
            date,
            due_date,
            invoice_number: self
                .invoice_number
                .as_ref()
                .filter(|n| !n.is_blank())
                .map(|n| n.to_string()),
            customer_name: non_empty(&self.customer_name).map(str::to_string),
            items: self.items.clone(),
            sub_total: self.sub_total.unwrap_or(Decimal::ZERO),
            adjustment: self.adjustment.unwrap_or(Decimal::ZERO),
            tax_groups: self.tax_groups.clone(),
            total: self.total.unwrap_or(Decimal::ZERO),
            currency: non_empty(&self.currency)
                .unwrap_or(DEFAULT_CURRENCY)
                .to_string(),
            note: non_empty(&self.note).map(str::to_string),
        })
    }
}

impl LineItem {
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}

/// Borrow an optional string, treating `Some("")` as missing.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
