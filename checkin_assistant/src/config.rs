//! Run configuration, read once from the environment at start-up.
use std::env;

use crate::endpoints::{hitokoto, jinrishici, luogu};
use crate::error::{Error, Result};
use crate::retrieve::endpoint::Endpoint;
use crate::retrieve::fetch::FetchOptions;

pub static COOKIE_VAR: &str = "LUOGU_COOKIE";
pub static CSRF_VAR: &str = "LUOGU_CSRF";
pub static USER_AGENT_VAR: &str = "USER_AGENT";

/// The logged-in identity every authenticated call presents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub cookie: String,
    pub user_agent: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub session: Session,
    /// Skips scraping the home page when set.
    pub csrf_override: Option<String>,
    /// Site origin without a trailing slash.
    pub base_url: String,
    pub hitokoto_url: String,
    pub jinrishici_url: String,
    /// Budget for the quote fetches.
    pub fetch: FetchOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let cookie = non_empty(COOKIE_VAR).ok_or(Error::MissingCookie)?;
        let user_agent = non_empty(USER_AGENT_VAR).unwrap_or_default();
        let csrf_override = non_empty(CSRF_VAR);

        Ok(Config {
            session: Session { cookie, user_agent },
            csrf_override,
            base_url: luogu::BASE_URL.to_string(),
            hitokoto_url: hitokoto::sentence().url(),
            jinrishici_url: jinrishici::one().url(),
            fetch: FetchOptions::default(),
        })
    }
}
