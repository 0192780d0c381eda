//! Indent Form
//!
//! Transient purchase-request rows. Nothing here is ever persisted: a
//! submission only produces a summary for the user and empties the form.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndentRow {
    /// 1-based position, recomputed after every structural change
    pub serial: usize,
    pub particulars: String,
    pub ordered_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentForm {
    rows: Vec<IndentRow>,
}

impl IndentForm {
    /// Page-load state: a single blank row
    pub fn with_blank_row() -> Self {
        let mut form = Self::default();
        form.add_row();
        form
    }

    pub fn rows(&self) -> &[IndentRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) {
        self.rows.push(IndentRow::default());
        self.renumber();
    }

    /// Out-of-range indices are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
            self.renumber();
        }
    }

    pub fn set_particulars(&mut self, index: usize, particulars: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.particulars = particulars.into();
        }
    }

    pub fn set_ordered_by(&mut self, index: usize, ordered_by: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.ordered_by = ordered_by.into();
        }
    }

    /// Take every row into a request, leaving the form empty
    pub fn submit(&mut self, department: impl Into<String>, date: NaiveDate) -> IndentRequest {
        IndentRequest {
            department: department.into(),
            date,
            rows: std::mem::take(&mut self.rows),
        }
    }

    fn renumber(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.serial = i + 1;
        }
    }
}

/// A submitted indent, shown back to the user as confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentRequest {
    pub department: String,
    pub date: NaiveDate,
    pub rows: Vec<IndentRow>,
}

impl IndentRequest {
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Indent submitted\nDepartment: {}\nDate: {}\nItems: {}",
            if self.department.is_empty() { "-" } else { self.department.as_str() },
            self.date.format("%Y-%m-%d"),
            self.rows.len(),
        );
        for row in &self.rows {
            text.push_str(&format!("\n{}. {} (ordered by {})", row.serial, row.particulars, row.ordered_by));
        }
        text
    }
}
