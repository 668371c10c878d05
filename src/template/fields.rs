//! Header fields: the recipient address on the left, invoice metadata on
//! the right, and the flattened sender line.

use crate::core::{format_date, non_empty, Address, ResolvedOptions};

/// A labelled value in the right-hand header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledField {
    pub label: &'static str,
    pub value: String,
}

impl LabeledField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// "postCode city", with the space only when both parts are present.
fn location(address: &Address) -> Option<String> {
    let location = match (non_empty(&address.post_code), non_empty(&address.city)) {
        (Some(code), Some(city)) => format!("{code} {city}"),
        (Some(code), None) => code.to_string(),
        (None, Some(city)) => city.to_string(),
        (None, None) => return None,
    };
    Some(location)
}

/// Recipient address lines: name, attention, street, location.
/// Missing parts are skipped, not left blank.
pub fn left_fields(address: &Address) -> Vec<String> {
    [
        non_empty(&address.name).map(str::to_string),
        non_empty(&address.attn).map(str::to_string),
        non_empty(&address.street).map(str::to_string),
        location(address),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Invoice metadata: date, due date, invoice number, customer.
pub fn right_fields(options: &ResolvedOptions) -> Vec<LabeledField> {
    let mut fields = vec![
        LabeledField::new("Datum:", format_date(options.date)),
        LabeledField::new("Zahlbar bis:", format_date(options.due_date)),
    ];
    if let Some(number) = &options.invoice_number {
        fields.push(LabeledField::new("Rechnungsnummer:", number.as_str()));
    }
    if let Some(customer) = &options.customer_name {
        fields.push(LabeledField::new("Kunde:", customer.as_str()));
    }
    fields
}

/// Sender address on one line: `name, street, postCode city`.
pub fn flat_address_text(address: &Address) -> String {
    let location = format!(
        "{} {}",
        address.post_code.as_deref().unwrap_or_default(),
        address.city.as_deref().unwrap_or_default()
    );
    [
        address.name.as_deref().unwrap_or_default(),
        address.street.as_deref().unwrap_or_default(),
        location.trim(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AddressBuilder, InvoiceOptions};
    use chrono::NaiveDate;

    #[test]
    fn location_joins_with_single_space() {
        let address = AddressBuilder::new().name("Acme").post_code("8000").city("Zurich").build();
        assert_eq!(left_fields(&address), ["Acme", "8000 Zurich"]);
    }

    #[test]
    fn location_without_post_code() {
        let address = AddressBuilder::new().city("Zurich").build();
        assert_eq!(left_fields(&address), ["Zurich"]);
    }

    #[test]
    fn empty_strings_are_skipped() {
        let address = AddressBuilder::new()
            .name("Acme")
            .attn("")
            .street("Bahnhofstrasse 1")
            .post_code("")
            .city("")
            .build();
        assert_eq!(left_fields(&address), ["Acme", "Bahnhofstrasse 1"]);
    }

    #[test]
    fn empty_address_has_no_lines() {
        assert!(left_fields(&Address::default()).is_empty());
    }

    #[test]
    fn right_fields_always_carry_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let resolved = InvoiceOptions::default().resolve(today).unwrap();
        let fields = right_fields(&resolved);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], LabeledField::new("Datum:", "28.12.2024"));
        assert_eq!(fields[1], LabeledField::new("Zahlbar bis:", "07.01.2025"));
    }

    #[test]
    fn flat_address_joins_with_commas() {
        let address = AddressBuilder::new()
            .name("Muster GmbH")
            .attn("ignored")
            .street("Hauptstrasse 5")
            .post_code("3000")
            .city("Bern")
            .build();
        assert_eq!(flat_address_text(&address), "Muster GmbH, Hauptstrasse 5, 3000 Bern");
    }

    #[test]
    fn flat_address_trims_partial_location() {
        let address = AddressBuilder::new().name("Muster GmbH").city("Bern").build();
        assert_eq!(flat_address_text(&address), "Muster GmbH, Bern");

        let address = AddressBuilder::new().street("Hauptstrasse 5").build();
        assert_eq!(flat_address_text(&address), "Hauptstrasse 5");
    }
}
