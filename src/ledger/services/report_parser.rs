use crate::ledger::domain::amount_in_range;
use crate::shared::error::LedgerError;
use crate::shared::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Header of the service number (MDN) column
pub const SERVICE_NUMBER_COLUMN: &str = "ServiceNumber";
/// Header of the compensation column
pub const PARTNER_COMP_COLUMN: &str = "Partner Comp";
/// Header of the activity code column
pub const ACTIVITY_TYPE_COLUMN: &str = "ActivityType";
/// Header of the product description column (optional)
pub const DESCRIPTION_COLUMN: &str = "ProdCatDescription";
/// Header of the customer name column
pub const CUSTOMER_NAME_COLUMN: &str = "Customer Name";
/// Header of the transaction date column
pub const DATE_COLUMN: &str = "TRN_DATE";

const REQUIRED_COLUMNS: [&str; 5] = [
    SERVICE_NUMBER_COLUMN,
    PARTNER_COMP_COLUMN,
    ACTIVITY_TYPE_COLUMN,
    CUSTOMER_NAME_COLUMN,
    DATE_COLUMN,
];

/// One data row of a commission report, with cells still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based line of the row in the CSV document
    pub line: u64,
    pub service_number: String,
    pub partner_comp: String,
    pub activity_type: String,
    pub description: String,
    pub customer_name: String,
    pub date: String,
}

/// Column positions resolved from the header row
struct ColumnIndex {
    service_number: usize,
    partner_comp: usize,
    activity_type: usize,
    description: Option<usize>,
    customer_name: usize,
    date: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        for column in REQUIRED_COLUMNS {
            if position(column).is_none() {
                return Err(LedgerError::MissingColumn {
                    column: column.to_string(),
                }
                .into());
            }
        }

        // Presence of every required column was checked above
        let required = |name: &str| position(name).unwrap_or_default();

        Ok(Self {
            service_number: required(SERVICE_NUMBER_COLUMN),
            partner_comp: required(PARTNER_COMP_COLUMN),
            activity_type: required(ACTIVITY_TYPE_COLUMN),
            description: position(DESCRIPTION_COLUMN),
            customer_name: required(CUSTOMER_NAME_COLUMN),
            date: required(DATE_COLUMN),
        })
    }
}

/// ReportParser turns carrier commission CSV text into report rows.
///
/// Unknown columns are ignored, header names are trimmed and short rows
/// read their missing cells as empty strings. Rows with every cell blank
/// are dropped.
pub struct ReportParser;

impl ReportParser {
    pub fn parse(content: &str) -> Result<Vec<ReportRow>> {
        let content = content.trim_start_matches('\u{feff}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| anyhow::anyhow!("Failed to read CSV header row: {}", e))?
            .clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| anyhow::anyhow!("Malformed CSV record: {}", e))?;

            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let cell = |index: usize| record.get(index).unwrap_or("").to_string();
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            rows.push(ReportRow {
                line,
                service_number: cell(columns.service_number),
                partner_comp: cell(columns.partner_comp),
                activity_type: cell(columns.activity_type),
                description: columns.description.map(cell).unwrap_or_default(),
                customer_name: cell(columns.customer_name),
                date: cell(columns.date),
            });
        }

        Ok(rows)
    }
}

/// Parses a currency-formatted compensation value.
///
/// Strips `$` and thousands separators, then reads the rest as a decimal:
/// `"$1,250.00"` is 1250.00 and `"-$10.00"` is -10.00. Returns `None` when
/// what remains is not a number or lies outside `MAX_AMOUNT`.
pub fn parse_compensation(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    Decimal::from_str(cleaned.trim())
        .ok()
        .filter(|amount| amount_in_range(*amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ServiceNumber,Partner Comp,ActivityType,ProdCatDescription,Customer Name,TRN_DATE";

    #[test]
    fn test_parse_basic_rows() {
        let csv = format!(
            "{}\n5551234,$100.00,ACT,Unlimited Plus,Jane Doe,2025-01-15\n5551234,$25.50,RESIDUAL,Unlimited Plus,Jane Doe,2025-02-01\n",
            HEADER
        );

        let rows = ReportParser::parse(&csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service_number, "5551234");
        assert_eq!(rows[0].partner_comp, "$100.00");
        assert_eq!(rows[0].activity_type, "ACT");
        assert_eq!(rows[0].description, "Unlimited Plus");
        assert_eq!(rows[0].customer_name, "Jane Doe");
        assert_eq!(rows[0].date, "2025-01-15");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_parse_quoted_currency_with_thousands_separator() {
        let csv = format!(
            "{}\n5551234,\"$1,250.00\",ACT,Unlimited Plus,\"Doe, Jane\",2025-01-15\n",
            HEADER
        );

        let rows = ReportParser::parse(&csv).unwrap();
        assert_eq!(rows[0].partner_comp, "$1,250.00");
        assert_eq!(rows[0].customer_name, "Doe, Jane");
    }

    #[test]
    fn test_parse_ignores_unknown_columns_and_order() {
        let csv = "TRN_DATE,Region,Customer Name,ActivityType,Partner Comp,ServiceNumber\n2025-01-15,East,Jane Doe,ACT,$100.00,5551234\n";

        let rows = ReportParser::parse(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].service_number, "5551234");
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn test_parse_missing_required_column() {
        let csv = "ServiceNumber,ActivityType,Customer Name,TRN_DATE\n5551234,ACT,Jane Doe,2025-01-15\n";

        let err = ReportParser::parse(csv).unwrap_err();
        assert!(err.to_string().contains("'Partner Comp'"));
    }

    #[test]
    fn test_parse_trims_headers_and_strips_bom() {
        let csv = "\u{feff} ServiceNumber , Partner Comp ,ActivityType,Customer Name,TRN_DATE\n5551234,$1.00,ACT,Jane,2025-01-15\n";

        let rows = ReportParser::parse(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].partner_comp, "$1.00");
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let csv = format!(
            "{}\n5551234,$100.00,ACT,Plan,Jane,2025-01-15\n,,,,,\n\n5559999,$5.00,RESIDUAL,Plan,John,2025-02-01\n",
            HEADER
        );

        let rows = ReportParser::parse(&csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].service_number, "5559999");
    }

    #[test]
    fn test_parse_short_row_reads_missing_cells_as_empty() {
        let csv = format!("{}\n5551234,$100.00,ACT\n", HEADER);

        let rows = ReportParser::parse(&csv).unwrap();
        assert_eq!(rows[0].customer_name, "");
        assert_eq!(rows[0].date, "");
    }

    #[test]
    fn test_parse_header_only() {
        let rows = ReportParser::parse(HEADER).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_compensation_plain_and_currency() {
        assert_eq!(parse_compensation("100"), Some(Decimal::new(100, 0)));
        assert_eq!(parse_compensation("$100.00"), Some(Decimal::new(10000, 2)));
        assert_eq!(parse_compensation(" $25.50 "), Some(Decimal::new(2550, 2)));
        assert_eq!(
            parse_compensation("$1,250.00"),
            Some(Decimal::new(125000, 2))
        );
    }

    #[test]
    fn test_parse_compensation_negative_forms() {
        assert_eq!(parse_compensation("-$10.00"), Some(Decimal::new(-1000, 2)));
        assert_eq!(parse_compensation("$-10.00"), Some(Decimal::new(-1000, 2)));
    }

    #[test]
    fn test_parse_compensation_malformed() {
        assert_eq!(parse_compensation(""), None);
        assert_eq!(parse_compensation("N/A"), None);
        assert_eq!(parse_compensation("$"), None);
        assert_eq!(parse_compensation("(10.00)"), None);
    }

    #[test]
    fn test_parse_compensation_rejects_out_of_range_amounts() {
        assert_eq!(
            parse_compensation("$1,000,000,000.00"),
            Some(Decimal::new(1_000_000_000, 0))
        );
        assert_eq!(parse_compensation("$1,000,000,000.01"), None);
        assert_eq!(
            parse_compensation("$79,228,162,514,264,337,593,543,950,335"),
            None
        );
        assert_eq!(
            parse_compensation("-$79,228,162,514,264,337,593,543,950,335"),
            None
        );
    }
}
