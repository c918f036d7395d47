use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::error::IngestError;
use crate::models::{Dividend, DividendHistory};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The literal string the provider uses to mean "no date available".
const NONE_SENTINEL: &str = "None";

/// Typed view of the provider's loose payload. Every field may be missing,
/// a sentinel, or garbage; per-field policy is applied in [`normalize`].
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    symbol: String,
    data: Vec<RawDividend>,
}

#[derive(Debug, Deserialize)]
struct RawDividend {
    ex_dividend_date: Option<String>,
    declaration_date: Option<String>,
    record_date: Option<String>,
    payment_date: Option<String>,
    amount: Option<String>,
}

/// Fallback date for a missing, sentinel, or unparseable provider date.
fn epoch_default() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid")
}

fn parse_date(field: &str, value: Option<&str>) -> NaiveDate {
    let Some(raw) = value else {
        return epoch_default();
    };
    if raw == NONE_SENTINEL {
        return epoch_default();
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            warn!("Failed to parse {} {:?}: {}", field, raw, e);
            epoch_default()
        }
    }
}

/// Parse a raw provider body into a typed dividend history.
///
/// Dates are best effort and fall back to 1970-01-01. An element whose amount
/// is missing or non-numeric carries no useful information and is dropped;
/// the remaining elements are unaffected. Element order is preserved, and an
/// empty `data` array is a valid result, not an error.
pub fn normalize(body: &[u8]) -> Result<DividendHistory, IngestError> {
    let raw: RawEnvelope = serde_json::from_slice(body)?;

    let mut data = Vec::with_capacity(raw.data.len());
    for entry in &raw.data {
        let amount = match entry.amount.as_deref().map(Decimal::from_str) {
            Some(Ok(amount)) => amount,
            Some(Err(e)) => {
                warn!("Skipping dividend with unparseable amount {:?}: {}", entry.amount, e);
                continue;
            }
            None => {
                warn!("Skipping dividend with missing amount");
                continue;
            }
        };

        data.push(Dividend {
            ex_dividend_date: parse_date("ex_dividend_date", entry.ex_dividend_date.as_deref()),
            declaration_date: parse_date("declaration_date", entry.declaration_date.as_deref()),
            record_date: parse_date("record_date", entry.record_date.as_deref()),
            payment_date: parse_date("payment_date", entry.payment_date.as_deref()),
            amount,
        });
    }

    Ok(DividendHistory {
        symbol: raw.symbol,
        data,
    })
}
