use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for assembling [`InvoiceOptions`].
///
/// ```
/// use rechnungsvorlage::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let options = InvoiceOptionsBuilder::new()
///     .invoice_number("2024-017")
///     .date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .billing_address(AddressBuilder::new().name("Acme AG").city("Zürich").build())
///     .add_item(LineItemBuilder::new("Beratung", dec!(4), dec!(150)).build())
///     .sub_total(dec!(600))
///     .add_tax_group("MwSt 8.1%", dec!(48.60))
///     .total(dec!(648.60))
///     .build();
///
/// assert_eq!(options.items[0].total, dec!(600));
/// ```
#[derive(Debug, Default)]
pub struct InvoiceOptionsBuilder {
    options: InvoiceOptions,
}

impl InvoiceOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization_address(mut self, address: Address) -> Self {
        self.options.organization_address = Some(address);
        self
    }

    pub fn billing_address(mut self, address: Address) -> Self {
        self.options.billing_address = Some(address);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.options.date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.options.due_date = Some(date);
        self
    }

    pub fn invoice_number(mut self, number: impl Into<InvoiceNumber>) -> Self {
        self.options.invoice_number = Some(number.into());
        self
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.options.customer_name = Some(name.into());
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.options.items.push(item);
        self
    }

    pub fn sub_total(mut self, amount: Decimal) -> Self {
        self.options.sub_total = Some(amount);
        self
    }

    pub fn adjustment(mut self, amount: Decimal) -> Self {
        self.options.adjustment = Some(amount);
        self
    }

    pub fn add_tax_group(mut self, name: impl Into<String>, amount: Decimal) -> Self {
        self.options.tax_groups.push(TaxGroup {
            name: name.into(),
            amount,
        });
        self
    }

    pub fn total(mut self, amount: Decimal) -> Self {
        self.options.total = Some(amount);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.options.currency = Some(code.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.options.note = Some(note.into());
        self
    }

    pub fn build(self) -> InvoiceOptions {
        self.options
    }
}

/// Builder for [`Address`].
#[derive(Debug, Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.address.name = Some(name.into());
        self
    }

    pub fn attn(mut self, attn: impl Into<String>) -> Self {
        self.address.attn = Some(attn.into());
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = Some(street.into());
        self
    }

    pub fn post_code(mut self, post_code: impl Into<String>) -> Self {
        self.address.post_code = Some(post_code.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = Some(city.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for [`LineItem`].
///
/// The line total defaults to `quantity * rate`; call [`LineItemBuilder::total`]
/// to print a different figure.
pub struct LineItemBuilder {
    name: String,
    description: Option<String>,
    quantity: Decimal,
    rate: Decimal,
    total: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            quantity,
            rate,
            total: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            total: self
                .total
                .unwrap_or_else(|| self.quantity.saturating_mul(self.rate)),
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            rate: self.rate,
        }
    }
}
