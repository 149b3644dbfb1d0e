use super::currency::format_currency;
use crate::application::read_models::{
    LedgerSummaryView, LineDetailView, LineView, MonthlyBucketView,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextViewFormatter renders views as aligned plain-text tables
///
/// With `colored` set, titles are bold and statuses are green or red.
/// Keep it off when stdout is not a terminal.
pub struct TextViewFormatter {
    colored: bool,
}

impl TextViewFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Formatter without ANSI escapes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn title(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn status(&self, status: &str) -> String {
        if !self.colored {
            return status.to_string();
        }
        if status.trim().eq_ignore_ascii_case("active") {
            status.green().to_string()
        } else {
            status.red().to_string()
        }
    }
}

/// Position of the status column in the line list
const STATUS_COLUMN: usize = 3;

impl Default for TextViewFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

/// Column widths for a table, at least as wide as each header
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect()
}

fn pad(cell: &str, width: usize, right: bool) -> String {
    if right {
        format!("{:>width$}", cell, width = width)
    } else {
        format!("{:<width$}", cell, width = width)
    }
}

fn push_row(output: &mut String, cells: Vec<String>) {
    output.push_str(cells.join("  ").trim_end());
    output.push('\n');
}

/// Renders a table. Columns listed in `right_aligned` are right-aligned;
/// `decorate` styles a padded data cell given its column index.
fn render_table<F>(
    headers: &[&str],
    rows: &[Vec<String>],
    right_aligned: &[usize],
    decorate: F,
) -> String
where
    F: Fn(usize, String) -> String,
{
    let widths = column_widths(headers, rows);
    let mut output = String::new();

    push_row(
        &mut output,
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| pad(h, widths[i], right_aligned.contains(&i)))
            .collect(),
    );
    push_row(&mut output, widths.iter().map(|w| "-".repeat(*w)).collect());
    for row in rows {
        push_row(
            &mut output,
            row.iter()
                .enumerate()
                .map(|(i, cell)| decorate(i, pad(cell, widths[i], right_aligned.contains(&i))))
                .collect(),
        );
    }
    output
}

fn undecorated(_: usize, cell: String) -> String {
    cell
}

impl ViewFormatter for TextViewFormatter {
    fn format_summary(&self, summary: &LedgerSummaryView) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", self.title("📊 Commission Summary"))?;
        writeln!(output)?;
        writeln!(output, "  Upfront (ACT):        {:>14}", format_currency(summary.upfront))?;
        writeln!(output, "  Monthly (RESIDUAL):   {:>14}", format_currency(summary.monthly))?;
        writeln!(output, "  Chargebacks (DEACT):  {:>14}", format_currency(summary.chargeback))?;
        writeln!(output, "  Total commission:     {:>14}", format_currency(summary.total_commission))?;
        writeln!(
            output,
            "  Average per line:     {:>14}",
            format_currency(summary.average_commission_per_line)
        )?;
        writeln!(output)?;
        writeln!(
            output,
            "  Active lines:   {} of {} ({} inactive)",
            summary.active_lines, summary.total_lines, summary.inactive_lines
        )?;
        Ok(output)
    }

    fn format_lines(&self, lines: &[LineView]) -> Result<String> {
        if lines.is_empty() {
            return Ok("No lines found.\n".to_string());
        }

        let headers = [
            "Service Number",
            "Customer",
            "Plan",
            "Status",
            "Activated",
            "Txns",
            "Total",
        ];
        let rows: Vec<Vec<String>> = lines
            .iter()
            .map(|line| {
                vec![
                    line.service_number.clone(),
                    line.customer_name.clone(),
                    line.plan.clone(),
                    line.status.clone(),
                    line.activation_date.clone(),
                    line.transaction_count.to_string(),
                    format_currency(line.total_commission),
                ]
            })
            .collect();

        let mut output = render_table(&headers, &rows, &[5, 6], |column, cell| {
            if column == STATUS_COLUMN {
                self.status(&cell)
            } else {
                cell
            }
        });
        writeln!(output)?;
        writeln!(output, "{} line(s)", lines.len())?;
        Ok(output)
    }

    fn format_line_detail(&self, detail: &LineDetailView) -> Result<String> {
        let line = &detail.line;
        let mut output = String::new();

        writeln!(output, "{}", self.title(&format!("📱 Line {}", line.service_number)))?;
        writeln!(output)?;
        writeln!(output, "  Customer:         {}", line.customer_name)?;
        writeln!(output, "  Plan:             {}", line.plan)?;
        writeln!(output, "  Status:           {}", self.status(&line.status))?;
        writeln!(output, "  Activation date:  {}", line.activation_date)?;
        writeln!(output, "  Total:            {}", format_currency(line.total_commission))?;

        for month in &detail.months {
            writeln!(output)?;
            writeln!(
                output,
                "{}",
                self.title(&format!("{} ({})", month.label, format_currency(month.total)))
            )?;

            let rows: Vec<Vec<String>> = month
                .transactions
                .iter()
                .map(|tx| {
                    vec![
                        tx.date.clone(),
                        tx.activity_type.clone(),
                        tx.description.clone(),
                        format_currency(tx.amount),
                    ]
                })
                .collect();
            output.push_str(&render_table(
                &["Date", "Type", "Description", "Amount"],
                &rows,
                &[3],
                undecorated,
            ));
        }

        Ok(output)
    }

    fn format_monthly(&self, buckets: &[MonthlyBucketView]) -> Result<String> {
        if buckets.is_empty() {
            return Ok("No transactions recorded.\n".to_string());
        }

        let rows: Vec<Vec<String>> = buckets
            .iter()
            .map(|bucket| {
                vec![
                    bucket.month.clone(),
                    format_currency(bucket.upfront),
                    format_currency(bucket.monthly),
                    format_currency(bucket.chargeback),
                ]
            })
            .collect();

        let mut output = String::new();
        writeln!(output, "{}", self.title("📅 Commission by Month"))?;
        writeln!(output)?;
        output.push_str(&render_table(
            &["Month", "Upfront", "Monthly", "Chargebacks"],
            &rows,
            &[1, 2, 3],
            undecorated,
        ));
        Ok(output)
    }
}
