//! Recent activity table

use serde::Serialize;

use super::fixture::ActivityRecord;
use crate::format::escape_html;

/// Activity rows in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTable {
    pub rows: Vec<ActivityRecord>,
}

impl ActivityTable {
    pub fn new(rows: Vec<ActivityRecord>) -> Self {
        Self { rows }
    }

    /// Table body markup; an empty list renders an empty body
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in [&row.date, &row.user, &row.action, &row.status] {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
        html
    }
}
