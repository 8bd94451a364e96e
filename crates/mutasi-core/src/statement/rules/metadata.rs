//! Header metadata extraction from first-page text.

use regex::Regex;
use tracing::trace;

use super::patterns::{
    ACCOUNT_NUMBER, ACCOUNT_NUMBER_FALSE_POSITIVES, BUSINESS_UNIT, BUSINESS_UNIT_ADDRESS, CURRENCY,
    PRODUCT_NAME, RECIPIENT_ADDRESS, RECIPIENT_NAME, STATEMENT_DATE, TRANSACTION_PERIOD,
};
use crate::models::statement::StatementMetadata;

/// Extract header fields from page text.
///
/// Every field is matched independently; a field whose label is missing
/// stays unset. The bank name is left to the caller.
pub fn extract_metadata(text: &str) -> StatementMetadata {
    let mut metadata = StatementMetadata::default();
    if text.trim().is_empty() {
        return metadata;
    }

    metadata.statement_date = capture(&STATEMENT_DATE, text);

    if let Some(caps) = TRANSACTION_PERIOD.captures(text) {
        metadata.period_start = caps.get(1).map(|m| m.as_str().to_string());
        metadata.period_end = caps.get(2).map(|m| m.as_str().to_string());
    }

    metadata.account_number = capture(&ACCOUNT_NUMBER, text)
        .filter(|value| !ACCOUNT_NUMBER_FALSE_POSITIVES.contains(&value.as_str()));
    metadata.product_name = capture(&PRODUCT_NAME, text);
    metadata.currency = capture(&CURRENCY, text);
    metadata.business_unit = capture(&BUSINESS_UNIT, text);
    metadata.business_unit_address = capture(&BUSINESS_UNIT_ADDRESS, text);
    metadata.recipient_name = capture(&RECIPIENT_NAME, text);
    metadata.recipient_address = capture(&RECIPIENT_ADDRESS, text);

    trace!("Extracted metadata: {:?}", metadata);
    metadata
}

/// First capture group, trimmed; empty captures count as absent.
fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
