//! Edge cases: defaults, falsy values, and error propagation.

use chrono::{Local, NaiveDate};
use rechnungsvorlage::core::*;
use rechnungsvorlage::template::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
}

fn metadata_labels(doc: &DocumentDefinition) -> Vec<String> {
    doc.header_table()
        .unwrap()
        .body
        .iter()
        .map(|row| row[2].text())
        .filter(|label| !label.is_empty())
        .collect()
}

// --- Defaults ---

#[test]
fn due_date_defaults_to_ten_days_after_today_not_after_invoice_date() {
    let options = InvoiceOptionsBuilder::new()
        .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .build();
    let doc = build_template_on(&options, today()).unwrap();
    let header = doc.header_table().unwrap();
    assert_eq!(header.body[0][3].text(), "01.01.2024");
    assert_eq!(header.body[1][3].text(), "01.03.2024");
}

#[test]
fn build_template_uses_local_date() {
    let before = Local::now().date_naive();
    let doc = build_template(&InvoiceOptions::default()).unwrap();
    let after = Local::now().date_naive();

    let shown = doc.header_table().unwrap().body[0][3].text();
    assert!(shown == format_date(before) || shown == format_date(after));
}

#[test]
fn builder_today_override_is_used() {
    let doc = TemplateBuilder::new()
        .today(today())
        .build(&InvoiceOptions::default())
        .unwrap();
    assert_eq!(doc.header_table().unwrap().body[0][3].text(), "20.02.2024");
}

#[test]
fn currency_defaults_to_chf() {
    let doc = build_template_on(&InvoiceOptions::default(), today()).unwrap();
    assert_eq!(
        doc.totals_table().unwrap().body[0][0].text(),
        format!("Gesamtsumme {DEFAULT_CURRENCY}")
    );
}

// --- Falsy values ---

#[test]
fn invoice_number_zero_is_hidden() {
    let options = InvoiceOptionsBuilder::new().invoice_number(0).build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(metadata_labels(&doc), ["Datum:", "Zahlbar bis:"]);
}

#[test]
fn empty_invoice_number_and_customer_are_hidden() {
    let options = InvoiceOptionsBuilder::new()
        .invoice_number("")
        .customer_name("")
        .build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(metadata_labels(&doc), ["Datum:", "Zahlbar bis:"]);
}

#[test]
fn customer_without_invoice_number_moves_up() {
    let options = InvoiceOptionsBuilder::new().customer_name("Acme").build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(metadata_labels(&doc), ["Datum:", "Zahlbar bis:", "Kunde:"]);
}

#[test]
fn zero_total_still_prints_grand_total() {
    let options = InvoiceOptionsBuilder::new().total(Decimal::ZERO).build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(doc.totals_table().unwrap().body[0][1].text(), "0.00");
}

#[test]
fn zero_adjustment_row_is_hidden() {
    let options = InvoiceOptionsBuilder::new()
        .sub_total(dec!(50))
        .adjustment(dec!(0.00))
        .total(dec!(55))
        .build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(doc.totals_table().unwrap().row_count(), 1);
}

#[test]
fn null_items_and_tax_groups_build_like_missing_ones() {
    let options = InvoiceOptions::from_json(r#"{ "items": null, "taxGroups": null }"#).unwrap();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(doc.items_table().unwrap().row_count(), 1);
    assert_eq!(doc.totals_table().unwrap().row_count(), 1);
    assert_eq!(doc, build_template_on(&InvoiceOptions::default(), today()).unwrap());
}

#[test]
fn fractional_invoice_number_is_shown_as_given() {
    let options = InvoiceOptions::from_json(r#"{ "invoiceNumber": 17.5 }"#).unwrap();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(metadata_labels(&doc), ["Datum:", "Zahlbar bis:", "Rechnungsnummer:"]);
    assert_eq!(doc.header_table().unwrap().body[2][3].text(), "17.5");
}

#[test]
fn organization_without_address_gives_empty_line() {
    let options = InvoiceOptionsBuilder::new()
        .organization_address(Address::default())
        .build();
    let doc = build_template_on(&options, today()).unwrap();
    assert_eq!(doc.organization_line().unwrap().text, "");
}

// --- Errors ---

#[test]
fn unformattable_tax_amount_fails_whole_build() {
    let options = InvoiceOptionsBuilder::new()
        .add_tax_group("MwSt", Decimal::MAX)
        .build();
    let err = build_template_on(&options, today()).unwrap_err();
    match err {
        TemplateError::Formatting { field, .. } => assert_eq!(field, "taxGroups[0].amount"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unformattable_total_names_the_field() {
    let options = InvoiceOptionsBuilder::new().total(Decimal::MIN).build();
    let err = build_template_on(&options, today()).unwrap_err();
    assert!(err.to_string().starts_with("formatting error at total:"));
}

#[test]
fn due_date_overflow_is_a_formatting_error() {
    let err = build_template_on(&InvoiceOptions::default(), NaiveDate::MAX).unwrap_err();
    match err {
        TemplateError::Formatting { field, .. } => assert_eq!(field, "dueDate"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_quantity_is_rejected_on_input() {
    let json = r#"{ "items": [ { "name": "x", "quantity": "viele", "rate": 1, "total": 1 } ] }"#;
    let err = InvoiceOptions::from_json(json).unwrap_err();
    assert!(matches!(err, TemplateError::Input(_)));
}

#[test]
fn address_of_wrong_shape_is_rejected_on_input() {
    let err = InvoiceOptions::from_json(r#"{ "billingAddress": "Acme" }"#).unwrap_err();
    assert!(matches!(err, TemplateError::Input(_)));
}

#[test]
fn unknown_fields_are_ignored() {
    let options = InvoiceOptions::from_json(r#"{ "logo": "data:image/png;base64,AAAA" }"#).unwrap();
    assert_eq!(options, InvoiceOptions::default());
}

#[test]
fn to_json_reports_success() {
    let doc = build_template_on(&InvoiceOptions::default(), today()).unwrap();
    let json = doc.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["content"].is_array());
}
