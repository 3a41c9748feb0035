//! Session configuration.

use std::env;
use std::fmt;

use crate::error::{PanError, Result};
use crate::fs::DEFAULT_CAPACITY;

/// Default host for the Pan API.
pub const DEFAULT_API_BASE: &str = "https://pan.teambition.com";
/// Default host for account lookups.
pub const DEFAULT_ACCOUNT_BASE: &str = "https://www.teambition.com";

/// Settings needed to open a [`crate::Session`].
#[derive(Clone)]
pub struct Config {
    /// Value of the `TEAMBITION_SESSIONID` cookie
    pub session_id: String,
    /// Value of the `TEAMBITION_SESSIONID.sig` cookie
    pub session_sig: String,
    pub api_base: String,
    pub account_base: String,
    /// Folder paths kept in the path cache
    pub cache_capacity: usize,
    pub proxy: Option<String>,
}

impl Config {
    pub fn new(session_id: impl Into<String>, session_sig: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            session_sig: session_sig.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            account_base: DEFAULT_ACCOUNT_BASE.to_string(),
            cache_capacity: DEFAULT_CAPACITY,
            proxy: None,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Requires `TEAMBITION_SESSIONID` and `TEAMBITION_SESSIONID_SIG`.
    /// `TBPAN_API_BASE`, `TBPAN_ACCOUNT_BASE`, `TBPAN_CACHE_CAPACITY` and
    /// `TBPAN_PROXY` are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| PanError::Config(format!("{} is not set", key)))
        };

        let mut config = Self::new(
            required("TEAMBITION_SESSIONID")?,
            required("TEAMBITION_SESSIONID_SIG")?,
        );
        if let Some(base) = lookup("TBPAN_API_BASE") {
            config = config.with_api_base(base);
        }
        if let Some(base) = lookup("TBPAN_ACCOUNT_BASE") {
            config = config.with_account_base(base);
        }
        if let Some(capacity) = lookup("TBPAN_CACHE_CAPACITY") {
            let capacity = capacity.parse().map_err(|_| {
                PanError::Config(format!("TBPAN_CACHE_CAPACITY is not a number: {}", capacity))
            })?;
            config = config.with_cache_capacity(capacity);
        }
        if let Some(proxy) = lookup("TBPAN_PROXY") {
            config = config.with_proxy(proxy);
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = trim_base(base.into());
        self
    }

    pub fn with_account_base(mut self, base: impl Into<String>) -> Self {
        self.account_base = trim_base(base.into());
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// The `Cookie` header value sent with authenticated requests.
    pub fn cookie(&self) -> String {
        format!(
            "TEAMBITION_SESSIONID={};TEAMBITION_SESSIONID.sig={}",
            self.session_id, self.session_sig
        )
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

// Credentials stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("session_id", &"<redacted>")
            .field("session_sig", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("account_base", &self.account_base)
            .field("cache_capacity", &self.cache_capacity)
            .field("proxy", &self.proxy)
            .finish()
    }
}
