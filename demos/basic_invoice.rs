use std::sync::Arc;

use chrono::NaiveDate;
use rechnungsvorlage::core::*;
use rechnungsvorlage::fonts::{FontAsset, FontMap, RenderRequest};
use rechnungsvorlage::template::TemplateBuilder;
use rust_decimal_macros::dec;

fn main() {
    env_logger::init();

    let options = InvoiceOptionsBuilder::new()
        .organization_address(
            AddressBuilder::new()
                .name("Muster GmbH")
                .street("Hauptstrasse 5")
                .post_code("3000")
                .city("Bern")
                .build(),
        )
        .billing_address(
            AddressBuilder::new()
                .name("Acme AG")
                .attn("z. Hd. Frau Meier")
                .street("Bahnhofstrasse 1")
                .post_code("8001")
                .city("Zürich")
                .build(),
        )
        .invoice_number("RE-2024-001")
        .customer_name("Acme")
        .add_item(
            LineItemBuilder::new("Softwareentwicklung", dec!(80), dec!(120))
                .description("React Frontend Entwicklung")
                .build(),
        )
        .add_item(LineItemBuilder::new("Hosting (monatlich)", dec!(1), dec!(49.90)).build())
        .sub_total(dec!(9649.90))
        .add_tax_group("MwSt 8.1%", dec!(781.64))
        .total(dec!(10431.54))
        .note("Zahlbar innert 30 Tagen netto.")
        .build();

    let definition = TemplateBuilder::new()
        .today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .build(&options)
        .expect("invoice template should build");

    // A real caller embeds the font file with `include_bytes!`.
    let fonts = FontMap::roboto(Arc::new(FontAsset::from_bytes(b"\0\x01\0\0")));
    let request = RenderRequest::new(definition, &fonts);

    let json = request
        .definition
        .to_json()
        .expect("layout tree should serialize");
    println!("{json}");
    eprintln!(
        "{} content blocks, {} font families",
        request.definition.content().len(),
        request.fonts.len()
    );
}
