//! Table Markup
//!
//! Inner markup for the category tables and the combined admin table. The
//! last cell of every row is a delete control tagged with the record's
//! category and id, picked up by one delegated click handler.

use std::fmt::Write;

use super::escape::escape_html;
use super::rows::{category_rows, combined_rows, AssetRow};
use crate::domain::{AssetStore, Category};

/// `data-action` value marking a delete control
pub const DELETE_ACTION: &str = "delete";

const HEADERS: &[&str] = &["ID", "Name", "Qty", "Condition"];

/// Header row plus one row per record, in storage order
pub fn category_table_markup(store: &AssetStore, category: Category) -> String {
    let mut html = header_row(false);
    for row in category_rows(store, category) {
        push_row(&mut html, &row, false);
    }
    html
}

/// All categories with a Category column, sorted by id
pub fn combined_table_markup(store: &AssetStore) -> String {
    let mut html = header_row(true);
    for row in combined_rows(store) {
        push_row(&mut html, &row, true);
    }
    html
}

fn header_row(with_category: bool) -> String {
    let mut html = String::from("<tr>");
    for h in HEADERS {
        let _ = write!(html, "<th>{}</th>", h);
    }
    if with_category {
        html.push_str("<th>Category</th>");
    }
    html.push_str("<th>Action</th></tr>");
    html
}

fn push_row(html: &mut String, row: &AssetRow, with_category: bool) {
    let _ = write!(
        html,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        row.id,
        escape_html(&row.name),
        escape_html(&row.qty),
        escape_html(&row.cond),
    );
    if with_category {
        let _ = write!(html, "<td>{}</td>", row.category.as_str());
    }
    let _ = write!(
        html,
        "<td><button type=\"button\" class=\"delete-btn\" data-action=\"{}\" data-category=\"{}\" data-id=\"{}\">Delete</button></td></tr>",
        DELETE_ACTION,
        row.category.as_str(),
        row.id,
    );
}

/// The record a clicked delete control points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTarget {
    pub category: Category,
    pub id: u64,
}

impl DeleteTarget {
    /// Decode the `data-category` / `data-id` tags of a delete control
    pub fn from_attrs(category: Option<&str>, id: Option<&str>) -> Option<Self> {
        Some(Self {
            category: Category::parse(category?)?,
            id: id?.trim().parse().ok()?,
        })
    }
}
