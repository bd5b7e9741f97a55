use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// Wire format of `auth.expires`. The offset is a literal, the timestamp is always UTC.
pub const EXPIRES_FORMAT: &str = "%Y/%m/%d %H:%M:%S+00:00";

/// Formats a timestamp the way the remote API expects it in `auth.expires`.
pub fn format_expires<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format(EXPIRES_FORMAT).to_string()
}

/// Credential and permission metadata sent with every request.
///
/// Only `expires` is always present; `key` and `max_size` are omitted from the
/// rendered block until they are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    key: Option<String>,
    expires: String,
    max_size: Option<String>,
}

impl Auth {
    pub fn expiring_at<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self {
            key: None,
            expires: format_expires(&at),
            max_size: None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn expires(&self) -> &str {
        &self.expires
    }

    pub fn max_size(&self) -> Option<&str> {
        self.max_size.as_deref()
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    pub fn set_expires<Tz: TimeZone>(&mut self, at: DateTime<Tz>) {
        self.expires = format_expires(&at);
    }

    /// Byte limit for uploads, carried as a decimal string.
    pub fn set_max_size(&mut self, max_size: u64) {
        self.max_size = Some(max_size.to_string());
    }

    /// Renders the block as it appears under `params.auth`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(key) = &self.key {
            map.insert("key".to_string(), Value::String(key.clone()));
        }
        map.insert("expires".to_string(), Value::String(self.expires.clone()));
        if let Some(max_size) = &self.max_size {
            map.insert("max_size".to_string(), Value::String(max_size.clone()));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    #[test]
    fn test_format_expires_utc() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_expires(&at), "2024/01/15 10:30:00+00:00");
    }

    #[test]
    fn test_format_expires_converts_offset_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(format_expires(&at), "2024/01/15 10:30:00+00:00");
    }

    #[test]
    fn test_to_value_skips_unset_entries() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 5).unwrap();
        let auth = Auth::expiring_at(at);
        assert_eq!(auth.to_value(), json!({ "expires": "2024/06/01 00:00:05+00:00" }));
    }

    #[test]
    fn test_to_value_with_all_entries() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 5).unwrap();
        let mut auth = Auth::expiring_at(at);
        auth.set_key("abc123");
        auth.set_max_size(1_048_576);

        assert_eq!(auth.key(), Some("abc123"));
        assert_eq!(auth.max_size(), Some("1048576"));
        assert_eq!(
            auth.to_value(),
            json!({
                "key": "abc123",
                "expires": "2024/06/01 00:00:05+00:00",
                "max_size": "1048576"
            })
        );
    }
}
