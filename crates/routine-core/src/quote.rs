//! Motivational quote loading

use crate::api::QuoteSource;

/// Shown while the quote request is in flight
pub const LOADING_QUOTE: &str = "Loading inspiration...";

/// Shown whenever the backend cannot provide a quote
pub const FALLBACK_QUOTE: &str = "Start where you are. Use what you have. Do what you can.";

/// Fetch the quote once, falling back to [`FALLBACK_QUOTE`] on any failure.
///
/// The returned text is never blank.
pub async fn load_quote(source: &impl QuoteSource) -> String {
    match source.fetch_quote().await {
        Ok(quote) if !quote.trim().is_empty() => quote.trim().to_string(),
        Ok(_) => {
            tracing::warn!("Backend returned an empty quote; using fallback");
            FALLBACK_QUOTE.to_string()
        }
        Err(error) => {
            tracing::warn!("Failed to load quote: {}", error);
            FALLBACK_QUOTE.to_string()
        }
    }
}
