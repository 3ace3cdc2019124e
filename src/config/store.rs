use std::env;
use std::time::Duration;

/// Tuning knobs for the credential store.
///
/// Store lookups on the authentication path are bounded: a lookup that
/// exceeds `lookup_timeout` fails the request with a 504 rather than
/// stalling the client indefinitely.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub lookup_timeout: Duration,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let secs = env::var("STORE_LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Self {
            lookup_timeout: Duration::from_secs(secs),
        }
    }
}
