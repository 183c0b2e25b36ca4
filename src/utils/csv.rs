use csv::{ReaderBuilder, StringRecord, Trim};

use crate::types::error::AppError;
use crate::types::td_quote::{CsvRowError, TdQuoteCreate};

fn header_index(headers: &StringRecord, name: &str) -> Result<usize, AppError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::Validation(format!("Missing CSV column: {}", name)))
}

/// Parses an uploaded CSV into TD quote rows. Expects a header line with
/// `Name, Quote, Date` columns (any order, any case). Bad rows are
/// collected as per-row errors instead of failing the whole upload;
/// only a missing header column is fatal.
pub fn parse_td_quote_csv(
    content: &str,
) -> Result<(Vec<TdQuoteCreate>, Vec<CsvRowError>), AppError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::Validation(format!("Failed to read CSV headers: {}", e)))?
        .clone();

    let name_idx = header_index(&headers, "Name")?;
    let quote_idx = header_index(&headers, "Quote")?;
    let date_idx = header_index(&headers, "Date")?;

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // First data row is row 1.
        let row = i + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                errors.push(CsvRowError {
                    row,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let by = record.get(name_idx).unwrap_or("").to_string();
        let value = record.get(quote_idx).unwrap_or("").to_string();
        let date = record.get(date_idx).unwrap_or("").to_string();

        if by.is_empty() || value.is_empty() || date.is_empty() {
            errors.push(CsvRowError {
                row,
                message: "missing required field".to_string(),
            });
            continue;
        }

        rows.push(TdQuoteCreate { value, by, date });
    }

    Ok((rows, errors))
}
