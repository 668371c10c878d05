//! Layout tree handed to the document renderer.
//!
//! The types mirror the renderer's document-definition schema: an ordered
//! list of content blocks, where a block is either a text node or a table.
//! Serializing a [`DocumentDefinition`] yields exactly the JSON the renderer
//! expects, with border policies pre-evaluated per row and column.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::policy::BorderPolicy;

/// Text color used for secondary information.
pub const GRAY: &str = "gray";

/// Base font size of the document, in points.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Margin as `[left, top, right, bottom]` in points.
pub type Margin = [f32; 4];

/// A complete document description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    pub default_style: Style,
    pub content: Vec<Block>,
}

/// Document-wide text style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Top-level content block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Text(TextNode),
    Table(TableBlock),
}

/// A run of text with optional styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Vertically stacked cells rendered inside a single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackNode {
    pub stack: Vec<Cell>,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Bare string, rendered with the default style.
    Plain(String),
    Text(TextNode),
    Stack(StackNode),
}

/// Column width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    /// Fit to content.
    Auto,
    /// Take the remaining space.
    Star,
    /// Fixed width in points.
    Points(f32),
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Star => serializer.serialize_str("*"),
            Self::Points(pt) => serializer.serialize_f32(*pt),
        }
    }
}

/// How the renderer draws rules and spacing for a table.
#[derive(Debug, Clone, Copy)]
pub enum TableLayout {
    /// The renderer's built-in borderless preset.
    NoBorders,
    Policy(&'static BorderPolicy),
}

impl PartialEq for TableLayout {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoBorders, Self::NoBorders) => true,
            (Self::Policy(a), Self::Policy(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

/// Row and column data of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Rows repeated at the top of each page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_rows: Option<usize>,
    pub widths: Vec<Width>,
    pub body: Vec<Vec<Cell>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    pub fn column_count(&self) -> usize {
        self.widths.len()
    }
}

/// A table placed in the content flow.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub margin: Option<Margin>,
    pub layout: TableLayout,
    pub table: Table,
}

impl Serialize for TableBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.margin.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("TableBlock", fields)?;
        if let Some(margin) = &self.margin {
            state.serialize_field("margin", margin)?;
        }
        match self.layout {
            TableLayout::NoBorders => state.serialize_field("layout", "noBorders")?,
            TableLayout::Policy(policy) => state.serialize_field(
                "layout",
                &policy.resolve(self.table.row_count(), self.table.column_count()),
            )?,
        }
        state.serialize_field("table", &self.table)?;
        state.end()
    }
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            margin: None,
            font_size: None,
            color: None,
            alignment: None,
        }
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Right-aligned text cell, used for every numeric column.
    pub fn right(text: impl Into<String>) -> Self {
        Self::Text(TextNode::new(text).alignment(Alignment::Right))
    }

    /// The text shown in this cell, lines of a stack joined by `\n`.
    pub fn text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Text(node) => node.text.clone(),
            Self::Stack(stack) => stack
                .stack
                .iter()
                .map(Cell::text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Position of each block in the invoice template's content list.
pub(crate) mod slot {
    pub const ORGANIZATION: usize = 0;
    pub const HEADER: usize = 1;
    pub const TITLE: usize = 2;
    pub const ITEMS: usize = 3;
    pub const TOTALS: usize = 4;
    pub const NOTE: usize = 5;
}

impl DocumentDefinition {
    pub fn content(&self) -> &[Block] {
        &self.content
    }

    fn text_at(&self, index: usize) -> Option<&TextNode> {
        match self.content.get(index) {
            Some(Block::Text(node)) => Some(node),
            _ => None,
        }
    }

    fn table_at(&self, index: usize) -> Option<&Table> {
        match self.content.get(index) {
            Some(Block::Table(block)) => Some(&block.table),
            _ => None,
        }
    }

    /// The one-line sender address above the header.
    pub fn organization_line(&self) -> Option<&TextNode> {
        self.text_at(slot::ORGANIZATION)
    }

    /// Address / metadata table.
    pub fn header_table(&self) -> Option<&Table> {
        self.table_at(slot::HEADER)
    }

    pub fn title(&self) -> Option<&TextNode> {
        self.text_at(slot::TITLE)
    }

    /// Line-items table, header row included.
    pub fn items_table(&self) -> Option<&Table> {
        self.table_at(slot::ITEMS)
    }

    /// Subtotal, tax, adjustment and grand-total rows.
    pub fn totals_table(&self) -> Option<&Table> {
        self.table_at(slot::TOTALS)
    }

    pub fn note(&self) -> Option<&TextNode> {
        self.text_at(slot::NOTE)
    }

    /// Serialise to pretty-printed JSON in the renderer's schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::policy::TABLE_LAYOUT;

    #[test]
    fn widths_serialize_like_the_renderer_expects() {
        let json = serde_json::to_string(&[Width::Star, Width::Auto, Width::Points(70.0)]).unwrap();
        assert_eq!(json, r#"["*","auto",70.0]"#);
    }

    #[test]
    fn text_node_skips_unset_fields() {
        let json = serde_json::to_string(&Cell::right("5.00")).unwrap();
        assert_eq!(json, r#"{"text":"5.00","alignment":"right"}"#);
    }

    #[test]
    fn no_borders_serializes_as_preset_name() {
        let block = TableBlock {
            margin: None,
            layout: TableLayout::NoBorders,
            table: Table {
                header_rows: None,
                widths: vec![Width::Auto],
                body: vec![vec![Cell::plain("x")]],
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["layout"], "noBorders");
        assert!(json.get("margin").is_none());
    }

    #[test]
    fn policy_layout_is_evaluated_per_boundary() {
        let block = TableBlock {
            margin: Some([0.0, 25.0, 0.0, 0.0]),
            layout: TableLayout::Policy(&TABLE_LAYOUT),
            table: Table {
                header_rows: Some(1),
                widths: vec![Width::Star, Width::Points(70.0)],
                body: vec![
                    vec![Cell::plain("a"), Cell::right("1")],
                    vec![Cell::plain("b"), Cell::right("2")],
                ],
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        let layout = &json["layout"];
        assert_eq!(layout["hLineWidth"], serde_json::json!([0.0, 1.0, 0.0]));
        assert_eq!(layout["vLineWidth"].as_array().unwrap().len(), 3);
        assert_eq!(layout["paddingTop"], serde_json::json!([5.0, 15.0]));
        assert_eq!(json["table"]["headerRows"], 1);
    }

    #[test]
    fn stack_text_joins_lines() {
        let cell = Cell::Stack(StackNode {
            stack: vec![Cell::plain("Hosting"), Cell::Text(TextNode::new("monthly"))],
        });
        assert_eq!(cell.text(), "Hosting\nmonthly");
    }
}
