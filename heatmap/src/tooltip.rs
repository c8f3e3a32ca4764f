//! Hover text for a single cell.

use chrono::Month;

/// What is shown when hovering over a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    pub month: Month,
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    /// e.g. "1753 - January"
    pub fn date(&self) -> String {
        format!("{:04} - {}", self.year, self.month.name())
    }

    /// Markup for an HTML tooltip element.
    pub fn html(&self) -> String {
        format!(
            "<span class='date'>{}</span><br />\n  \
             <span class='temperature'>{:.1}&#8451;</span><br />\n  \
             <span class='variance'>{:+.1}&#8451;</span>",
            self.date(),
            self.temperature,
            self.variance
        )
    }

    /// Plain text, one item per line.
    pub fn text(&self) -> String {
        format!(
            "{}\n{:.1}\u{2103}\n{:+.1}\u{2103}",
            self.date(),
            self.temperature,
            self.variance
        )
    }
}
