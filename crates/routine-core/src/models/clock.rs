//! `HH:MM` wall-clock times as exchanged with the backend and time pickers.

use chrono::NaiveTime;

/// Parse a time picker value. Blank or malformed input yields `None`.
///
/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Format a time as `HH:MM`; an unset time formats as the empty string.
pub fn format_clock_time(time: Option<NaiveTime>) -> String {
    time.map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Serde adapter for `Option<NaiveTime>` fields carried as `"HH:MM"` / `""`.
///
/// Reading never fails on the value itself: `null`, blank, and unparseable
/// times all become `None`, the latter with a warning.
pub(crate) mod optional_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock_time(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => {
                let time = super::parse_clock_time(value);
                if time.is_none() {
                    tracing::warn!("Ignoring invalid clock time '{}'", value);
                }
                Ok(time)
            }
        }
    }
}
