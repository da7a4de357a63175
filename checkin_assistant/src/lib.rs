mod authentication;
mod endpoints;
pub mod json;
mod retrieve;

pub mod config;
pub mod error;
pub mod logging;
pub mod luogu;
pub mod quotes;

pub use config::{Config, Session};
pub use error::{Error, FetchError, Result};
pub use quotes::{Hitokoto, Jinrishici, Quote, QuoteProvider};
pub use retrieve::fetch::FetchOptions;

use reqwest::Client;
use tracing::info;

/// How a run that did not fail ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Checked in and posted the quote from the named provider.
    Posted { provider: &'static str, content: String },
    /// Checked in; neither provider had any text, so nothing was posted.
    NoQuote,
}

/// Hitokoto first, jinrishici only when hitokoto had no text.
pub async fn daily_quote(client: &Client, config: &Config) -> Result<Option<(&'static str, Quote)>> {
    let hitokoto = Hitokoto {
        url: config.hitokoto_url.clone(),
    };
    let jinrishici = Jinrishici {
        url: config.jinrishici_url.clone(),
    };
    quotes::select_quote(client, &[&hitokoto, &jinrishici], &config.fetch).await
}

// token -> check in -> quote -> post. Every step runs after the previous
// one finishes and the first error ends the run.
pub async fn run(config: &Config) -> Result<Outcome> {
    let client = Client::builder().build()?;

    let token = luogu::csrf_token(&client, config).await?;
    luogu::punch(&client, config, &token).await?;

    let outcome = match daily_quote(&client, config).await? {
        Some((provider, quote)) => {
            let content = quote.to_string().trim().to_string();
            info!("use {}.", provider);
            info!("{}", content);
            luogu::post_benben(&client, config, &token, &content).await?;
            Outcome::Posted { provider, content }
        }
        None => Outcome::NoQuote,
    };

    info!("done.");
    Ok(outcome)
}
