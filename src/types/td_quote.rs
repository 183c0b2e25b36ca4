use serde::{Deserialize, Serialize};

/// One parsed CSV row, ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdQuoteCreate {
    pub value: String,
    pub by: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CsvRowError {
    pub row: usize,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct TdQuoteUploadRes {
    pub inserted: u64,
    pub errors: Vec<CsvRowError>,
}
