//! Border and padding policies for the two ruled invoice tables.
//!
//! A policy is a table of plain rules, each a pure function of a boundary
//! (or row/column) index and the table's row or column count. The renderer
//! asks for horizontal rules at boundaries `0..=rows`, vertical rules at
//! `0..=cols`, left/right padding per column and top/bottom padding per row.

use serde::Serialize;

/// `(index, count) -> points`
pub type BoundaryRule = fn(usize, usize) -> f32;

/// Rule placement and cell spacing for one kind of table.
#[derive(Debug, Clone, Copy)]
pub struct BorderPolicy {
    name: &'static str,
    h_line_width: BoundaryRule,
    v_line_width: BoundaryRule,
    padding_left: BoundaryRule,
    padding_right: BoundaryRule,
    padding_top: BoundaryRule,
    padding_bottom: BoundaryRule,
}

/// Line-items table: a single rule under the header row, extra air below it.
pub static TABLE_LAYOUT: BorderPolicy = BorderPolicy {
    name: "lineItems",
    h_line_width: rule_under_header,
    v_line_width: zero,
    padding_left: zero,
    padding_right: zero,
    padding_top: spacing_under_header,
    padding_bottom: five,
};

/// Totals table: a rule on top and a double rule around the grand total.
pub static FOOTER_LAYOUT: BorderPolicy = BorderPolicy {
    name: "totals",
    h_line_width: rule_around_total,
    v_line_width: zero,
    padding_left: zero,
    padding_right: zero,
    padding_top: totals_padding_top,
    padding_bottom: totals_padding_bottom,
};

fn zero(_: usize, _: usize) -> f32 {
    0.0
}

fn five(_: usize, _: usize) -> f32 {
    5.0
}

fn rule_under_header(i: usize, _: usize) -> f32 {
    if i == 1 { 1.0 } else { 0.0 }
}

fn spacing_under_header(i: usize, _: usize) -> f32 {
    if i == 1 { 15.0 } else { 5.0 }
}

// `i + 1 == rows` instead of `i == rows - 1` so an empty table can't underflow.
fn rule_around_total(i: usize, rows: usize) -> f32 {
    if i == 0 || i == rows || i + 1 == rows { 1.0 } else { 0.0 }
}

fn totals_padding_top(i: usize, rows: usize) -> f32 {
    if i == 0 || i + 1 == rows { 10.0 } else { 5.0 }
}

fn totals_padding_bottom(i: usize, rows: usize) -> f32 {
    if i + 1 == rows || i + 2 == rows { 10.0 } else { 5.0 }
}

impl BorderPolicy {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Width of the horizontal rule at boundary `i` (0 = above the first row).
    pub fn h_line_width(&self, i: usize, rows: usize) -> f32 {
        (self.h_line_width)(i, rows)
    }

    /// Width of the vertical rule at column boundary `i`.
    pub fn v_line_width(&self, i: usize, cols: usize) -> f32 {
        (self.v_line_width)(i, cols)
    }

    pub fn padding_left(&self, col: usize, cols: usize) -> f32 {
        (self.padding_left)(col, cols)
    }

    pub fn padding_right(&self, col: usize, cols: usize) -> f32 {
        (self.padding_right)(col, cols)
    }

    pub fn padding_top(&self, row: usize, rows: usize) -> f32 {
        (self.padding_top)(row, rows)
    }

    pub fn padding_bottom(&self, row: usize, rows: usize) -> f32 {
        (self.padding_bottom)(row, rows)
    }

    /// Evaluate every rule for a table of the given size.
    pub fn resolve(&self, rows: usize, cols: usize) -> ResolvedLayout {
        ResolvedLayout {
            name: self.name,
            h_line_width: (0..=rows).map(|i| self.h_line_width(i, rows)).collect(),
            v_line_width: (0..=cols).map(|i| self.v_line_width(i, cols)).collect(),
            padding_left: (0..cols).map(|i| self.padding_left(i, cols)).collect(),
            padding_right: (0..cols).map(|i| self.padding_right(i, cols)).collect(),
            padding_top: (0..rows).map(|i| self.padding_top(i, rows)).collect(),
            padding_bottom: (0..rows).map(|i| self.padding_bottom(i, rows)).collect(),
        }
    }
}

/// A [`BorderPolicy`] evaluated against one concrete table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayout {
    pub name: &'static str,
    pub h_line_width: Vec<f32>,
    pub v_line_width: Vec<f32>,
    pub padding_left: Vec<f32>,
    pub padding_right: Vec<f32>,
    pub padding_top: Vec<f32>,
    pub padding_bottom: Vec<f32>,
}
