//! Single-slot access token cache.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Holds at most one token. A token is served only while
/// `now < expires_at - refresh_buffer`.
#[derive(Debug)]
pub struct AccessTokenCache {
    slot: Option<CachedToken>,
    refresh_buffer: Duration,
}

impl AccessTokenCache {
    pub fn new(refresh_buffer: Duration) -> Self {
        Self {
            slot: None,
            refresh_buffer,
        }
    }

    pub fn refresh_buffer(&self) -> Duration {
        self.refresh_buffer
    }

    /// The cached token if it is still usable at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&str> {
        let token = self.slot.as_ref()?;
        let deadline = TimeDelta::from_std(self.refresh_buffer)
            .ok()
            .and_then(|buffer| token.expires_at.checked_sub_signed(buffer))?;
        (now < deadline).then_some(token.access_token.as_str())
    }

    /// Replaces whatever was cached with a token living `ttl` from `now`.
    pub fn put(&mut self, access_token: String, ttl: Duration, now: DateTime<Utc>) -> &CachedToken {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.slot.insert(CachedToken {
            access_token,
            expires_at,
        })
    }

    pub fn peek(&self) -> Option<&CachedToken> {
        self.slot.as_ref()
    }

    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_cache_misses() {
        let cache = AccessTokenCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(t0()), None);
    }

    #[test]
    fn serves_until_buffer_boundary() {
        let mut cache = AccessTokenCache::new(Duration::from_secs(5 * 60));
        cache.put("tok".to_string(), Duration::from_secs(3600), t0());

        assert_eq!(cache.get(t0()), Some("tok"));
        assert_eq!(cache.get(t0() + TimeDelta::seconds(3299)), Some("tok"));
        assert_eq!(cache.get(t0() + TimeDelta::milliseconds(3_299_999)), Some("tok"));
        assert_eq!(cache.get(t0() + TimeDelta::seconds(3300)), None);
        assert_eq!(cache.get(t0() + TimeDelta::seconds(4000)), None);
    }

    #[test]
    fn each_buffer_is_honoured_independently() {
        let mut short = AccessTokenCache::new(Duration::from_secs(60));
        let mut long = AccessTokenCache::new(Duration::from_secs(300));
        short.put("a".to_string(), Duration::from_secs(3600), t0());
        long.put("b".to_string(), Duration::from_secs(3600), t0());

        let probe = t0() + TimeDelta::seconds(3400);
        assert_eq!(short.get(probe), Some("a"));
        assert_eq!(long.get(probe), None);
    }

    #[test]
    fn put_overwrites_previous_entry() {
        let mut cache = AccessTokenCache::new(Duration::from_secs(60));
        cache.put("old".to_string(), Duration::from_secs(3600), t0());
        let entry = cache.put("new".to_string(), Duration::from_secs(120), t0());
        assert_eq!(entry.expires_at, t0() + TimeDelta::seconds(120));
        assert_eq!(cache.get(t0()), Some("new"));
        assert_eq!(cache.get(t0() + TimeDelta::seconds(60)), None);
    }

    #[test]
    fn ttl_shorter_than_buffer_is_never_served() {
        let mut cache = AccessTokenCache::new(Duration::from_secs(300));
        cache.put("brief".to_string(), Duration::from_secs(30), t0());
        assert_eq!(cache.get(t0()), None);
        assert!(cache.peek().is_some());
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut cache = AccessTokenCache::new(Duration::from_secs(60));
        cache.put("tok".to_string(), Duration::from_secs(3600), t0());
        cache.clear();
        assert!(cache.peek().is_none());
    }
}
