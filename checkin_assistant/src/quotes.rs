//! Quote providers and the ordered fallback between them.
//!
//! Each provider turns its own response shape into a [`Quote`]; nothing
//! provider-specific leaves this module. [`select_quote`] walks the
//! providers in order and stops at the first one whose quote has text.
//! A provider that fails ends the walk with its error, it does not fall
//! through to the next one.
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::endpoints::{hitokoto, jinrishici};
use super::error::{Error, Result};
use super::json;
use super::retrieve::endpoint::Endpoint;
use super::retrieve::fetch::{self, FetchOptions};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub title: String,
}

impl Quote {
    /// Whether there is anything worth posting.
    pub fn is_usable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}——{}《{}》", self.text, self.author, self.title)
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, client: &Client, options: &FetchOptions) -> Result<Quote>;
}

/// `{hitokoto, from, from_who}`. Absent fields read as empty.
pub struct Hitokoto {
    pub url: String,
}

impl Default for Hitokoto {
    fn default() -> Self {
        Hitokoto {
            url: hitokoto::sentence().url(),
        }
    }
}

impl Hitokoto {
    pub fn parse(value: &Value) -> Quote {
        Quote {
            text: json::attribute_or_empty(value, "hitokoto"),
            author: json::attribute_or_empty(value, "from_who"),
            title: json::attribute_or_empty(value, "from"),
        }
    }
}

#[async_trait]
impl QuoteProvider for Hitokoto {
    fn name(&self) -> &'static str {
        "hitokoto"
    }

    async fn fetch(&self, client: &Client, options: &FetchOptions) -> Result<Quote> {
        let value = fetch::get_json(client, &self.url, options).await?;
        Ok(Self::parse(&value))
    }
}

/// `{data: {content, origin: {author, title}}}`. Unlike [`Hitokoto`] a
/// missing `data` or `origin` is an error.
pub struct Jinrishici {
    pub url: String,
}

#[derive(Deserialize)]
struct JinrishiciResponse {
    data: Option<JinrishiciData>,
}

#[derive(Deserialize)]
struct JinrishiciData {
    content: String,
    origin: Option<JinrishiciOrigin>,
}

#[derive(Deserialize)]
struct JinrishiciOrigin {
    author: String,
    title: String,
}

impl Default for Jinrishici {
    fn default() -> Self {
        Jinrishici {
            url: jinrishici::one().url(),
        }
    }
}

impl Jinrishici {
    pub fn parse(value: Value) -> Result<Quote> {
        let response: JinrishiciResponse = serde_json::from_value(value)?;
        let data = response.data.ok_or(Error::MissingField("data"))?;
        let origin = data.origin.ok_or(Error::MissingField("data.origin"))?;
        Ok(Quote {
            text: data.content,
            author: origin.author,
            title: origin.title,
        })
    }
}

#[async_trait]
impl QuoteProvider for Jinrishici {
    fn name(&self) -> &'static str {
        "jinrishici"
    }

    async fn fetch(&self, client: &Client, options: &FetchOptions) -> Result<Quote> {
        let value = fetch::get_json(client, &self.url, options).await?;
        Self::parse(value)
    }
}

/// First usable quote in provider order, with the provider that gave it.
/// `Ok(None)` when every provider answered with empty text.
pub async fn select_quote(
    client: &Client,
    providers: &[&dyn QuoteProvider],
    options: &FetchOptions,
) -> Result<Option<(&'static str, Quote)>> {
    for provider in providers {
        let quote = provider.fetch(client, options).await?;
        if quote.is_usable() {
            return Ok(Some((provider.name(), quote)));
        }
    }
    Ok(None)
}
