use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inbound request body for `POST /data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPayload {
    pub symbol: String,
    pub function: String,
    pub api_key: String,
}

/// One corporate dividend event, fully normalized.
///
/// Date fields are never absent: the provider's `"None"` sentinel and any
/// unparseable date collapse to the 1970-01-01 default, so consumers never
/// handle missing dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub ex_dividend_date: NaiveDate,
    pub declaration_date: NaiveDate,
    pub record_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
}

/// Dividend history for one symbol, in the order the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendHistory {
    pub symbol: String,
    pub data: Vec<Dividend>,
}

impl DividendHistory {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
