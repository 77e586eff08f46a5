use garde::Validate;
use kernel::pricing::{PricingMode, Quote};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    #[garde(range(min = 1))]
    pub duration_minutes: i64,
    #[garde(range(min = 1))]
    pub hourly_rate: i64,
}

/// The client-displayable estimate. Built from the same pricing function the
/// booking transaction charges with, so it can never disagree with it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub mode: PricingMode,
    pub total_credits: i64,
    pub hourly_rate: i64,
    pub day_price: i64,
    pub billable_days: i64,
    pub duration_minutes: i64,
}

impl From<Quote> for QuoteResponse {
    fn from(value: Quote) -> Self {
        let Quote {
            mode,
            total_credits,
            hourly_rate,
            day_price,
            billable_days,
            duration_minutes,
        } = value;
        Self {
            mode,
            total_credits,
            hourly_rate,
            day_price,
            billable_days,
            duration_minutes,
        }
    }
}
