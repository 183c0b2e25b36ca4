use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct RQuoteCreate {
    pub quote: String,
    pub display: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct RQuoteUpdate {
    pub quote: Option<String>,
    pub display: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct QuoteDeleteRes {
    pub message: String,
}
