use chrono::{Local, NaiveDate};
use log::{debug, trace};
use rust_decimal::Decimal;

use super::fields::{flat_address_text, left_fields, right_fields};
use super::policy::{FOOTER_LAYOUT, TABLE_LAYOUT};
use super::tree::*;
use crate::core::{format_amount, InvoiceOptions, LineItem, ResolvedOptions, TemplateError};

/// Document title printed above the line items.
pub const TITLE: &str = "Rechnung";

/// Builds invoice layout trees.
///
/// "Today" defaults to the local date at the time of each build; pin it with
/// [`TemplateBuilder::today`] for reproducible output.
///
/// ```
/// use rechnungsvorlage::core::*;
/// use rechnungsvorlage::template::TemplateBuilder;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let options = InvoiceOptionsBuilder::new()
///     .add_item(LineItemBuilder::new("Beratung", dec!(2), dec!(120)).build())
///     .sub_total(dec!(240))
///     .total(dec!(240))
///     .build();
///
/// let doc = TemplateBuilder::new()
///     .today(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .build(&options)
///     .unwrap();
///
/// assert_eq!(doc.items_table().unwrap().row_count(), 2);
/// assert_eq!(doc.totals_table().unwrap().row_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateBuilder {
    today: Option<NaiveDate>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `date` as "now" when resolving the default invoice and due dates.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn build(&self, options: &InvoiceOptions) -> Result<DocumentDefinition, TemplateError> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        build_template_on(options, today)
    }
}

/// Build the invoice layout tree, taking the local date as "now".
pub fn build_template(options: &InvoiceOptions) -> Result<DocumentDefinition, TemplateError> {
    TemplateBuilder::new().build(options)
}

/// Build the invoice layout tree with an explicit "now".
pub fn build_template_on(
    options: &InvoiceOptions,
    today: NaiveDate,
) -> Result<DocumentDefinition, TemplateError> {
    let options = options.resolve(today)?;

    let organization_text = options
        .organization_address
        .as_ref()
        .map(flat_address_text)
        .unwrap_or_default();

    let mut items_body = vec![vec![
        Cell::plain("Beschreibung"),
        Cell::right("Menge"),
        Cell::right("Preis"),
        Cell::right("Betrag"),
    ]];
    for (index, item) in options.items.iter().enumerate() {
        items_body.push(item_row(item, index)?);
    }

    let totals_body = totals_rows(&options)?;
    debug!(
        "building invoice template: {} items, {} totals rows",
        options.items.len(),
        totals_body.len()
    );

    let mut content = vec![
        Block::Text(
            TextNode::new(organization_text)
                .margin([0.0, 100.0, 0.0, 0.0])
                .font_size(8.0)
                .color(GRAY),
        ),
        Block::Table(TableBlock {
            margin: Some([0.0, 10.0, 0.0, 0.0]),
            layout: TableLayout::NoBorders,
            table: Table {
                header_rows: None,
                widths: vec![Width::Auto, Width::Star, Width::Auto, Width::Auto],
                body: header_rows(&options),
            },
        }),
        Block::Text(
            TextNode::new(TITLE)
                .margin([0.0, 50.0, 0.0, 0.0])
                .font_size(18.0),
        ),
        Block::Table(TableBlock {
            margin: Some([0.0, 25.0, 0.0, 0.0]),
            layout: TableLayout::Policy(&TABLE_LAYOUT),
            table: Table {
                header_rows: Some(1),
                widths: vec![
                    Width::Star,
                    Width::Points(70.0),
                    Width::Points(70.0),
                    Width::Points(70.0),
                ],
                body: items_body,
            },
        }),
        Block::Table(TableBlock {
            margin: Some([0.0, 25.0, 0.0, 0.0]),
            layout: TableLayout::Policy(&FOOTER_LAYOUT),
            table: Table {
                header_rows: Some(1),
                widths: vec![Width::Star, Width::Auto],
                body: totals_body,
            },
        }),
    ];

    if let Some(note) = &options.note {
        content.push(Block::Text(
            TextNode::new(note.as_str())
                .margin([0.0, 20.0, 0.0, 0.0])
                .color(GRAY)
                .font_size(8.0),
        ));
    } else {
        trace!("no note, skipping note block");
    }

    Ok(DocumentDefinition {
        default_style: Style::default(),
        content,
    })
}

/// Left address lines beside right metadata pairs, padded to equal height.
fn header_rows(options: &ResolvedOptions) -> Vec<Vec<Cell>> {
    let left = left_fields(&options.billing_address);
    let right = right_fields(options);
    let height = left.len().max(right.len());

    (0..height)
        .map(|i| {
            let (label, value) = right
                .get(i)
                .map(|f| (f.label, f.value.as_str()))
                .unwrap_or_default();
            vec![
                Cell::plain(left.get(i).map(String::as_str).unwrap_or_default()),
                Cell::plain(""),
                Cell::plain(label),
                Cell::right(value),
            ]
        })
        .collect()
}

fn item_row(item: &LineItem, index: usize) -> Result<Vec<Cell>, TemplateError> {
    let description = match item.description() {
        Some(description) => Cell::Stack(StackNode {
            stack: vec![
                Cell::plain(item.name.as_str()),
                Cell::Text(
                    TextNode::new(description)
                        .margin([0.0, 2.0, 0.0, 0.0])
                        .color(GRAY),
                ),
            ],
        }),
        None => Cell::plain(item.name.as_str()),
    };

    Ok(vec![
        description,
        Cell::right(amount(item.quantity, || format!("items[{index}].quantity"))?),
        Cell::right(amount(item.rate, || format!("items[{index}].rate"))?),
        Cell::right(amount(item.total, || format!("items[{index}].total"))?),
    ])
}

fn totals_rows(options: &ResolvedOptions) -> Result<Vec<Vec<Cell>>, TemplateError> {
    let mut rows = Vec::new();

    // A zero subtotal is hidden even when it differs from the total.
    let has_breakdown = !options.adjustment.is_zero() || !options.tax_groups.is_empty();
    if !options.sub_total.is_zero() && options.sub_total != options.total && has_breakdown {
        rows.push(vec![
            Cell::plain("Zwischensumme"),
            Cell::right(amount(options.sub_total, || "subTotal".into())?),
        ]);
    } else {
        trace!("subtotal row omitted");
    }

    for (index, group) in options.tax_groups.iter().enumerate() {
        rows.push(vec![
            Cell::plain(group.name.as_str()),
            Cell::right(amount(group.amount, || format!("taxGroups[{index}].amount"))?),
        ]);
    }

    if !options.adjustment.is_zero() {
        rows.push(vec![
            Cell::plain("Anpassung"),
            Cell::right(amount(options.adjustment, || "adjustment".into())?),
        ]);
    }

    rows.push(vec![
        Cell::plain(format!("Gesamtsumme {}", options.currency)),
        Cell::right(amount(options.total, || "total".into())?),
    ]);

    Ok(rows)
}

fn amount(value: Decimal, path: impl FnOnce() -> String) -> Result<String, TemplateError> {
    format_amount(value).map_err(|e| e.at(path()))
}
