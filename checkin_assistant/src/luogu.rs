use regex::Regex;
use reqwest::Client;
use tracing::info;

use super::authentication;
use super::config::Config;
use super::endpoints::luogu;
use super::error::{Error, Result};
use super::retrieve::fetch;

// [Token]
// The override wins outright; otherwise the token is scraped from the
// logged-in home page. A page without one means the cookie is bad or the
// markup changed, neither of which a retry fixes.
pub async fn csrf_token(client: &Client, config: &Config) -> Result<String> {
    if let Some(token) = &config.csrf_override {
        return Ok(token.clone());
    }

    let endpoint = luogu::home(&config.base_url);
    let html = fetch::get_text(client, &endpoint, &authentication::home_page(config)).await?;
    extract_csrf(&html)?.ok_or(Error::CsrfNotFound)
}

/// Pull the token out of `<meta name="csrf-token" content="...">`.
pub fn extract_csrf(html: &str) -> Result<Option<String>> {
    let pattern = Regex::new(r#"<meta name="csrf-token" content="([^"]+)""#)?;
    Ok(pattern
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str().to_string()))
}

// [Actions]
pub async fn punch(client: &Client, config: &Config, token: &str) -> Result<()> {
    let endpoint = luogu::punch(&config.base_url);
    let authentication = authentication::site_action(config, token);
    let response = fetch::post(client, &endpoint, &authentication, &[]).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Action {
            action: "checkin",
            status: status.as_u16(),
        });
    }

    info!("[check-in] done.");
    Ok(())
}

pub async fn post_benben(client: &Client, config: &Config, token: &str, content: &str) -> Result<()> {
    let endpoint = luogu::post_benben(&config.base_url);
    let authentication = authentication::site_action(config, token);
    let form = [("content", content.trim())];
    let response = fetch::post(client, &endpoint, &authentication, &form).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Action {
            action: "post benben",
            status: status.as_u16(),
        });
    }

    info!("[benben] done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Session;
    use crate::retrieve::fetch::FetchOptions;

    fn config(base_url: &str, csrf_override: Option<&str>) -> Config {
        Config {
            session: Session {
                cookie: "_uid=1".to_string(),
                user_agent: "agent".to_string(),
            },
            csrf_override: csrf_override.map(str::to_string),
            base_url: base_url.to_string(),
            hitokoto_url: format!("{}/hitokoto", base_url),
            jinrishici_url: format!("{}/jinrishici", base_url),
            fetch: FetchOptions::default(),
        }
    }

    #[test]
    fn extracts_token_from_meta_tag() {
        let html = r#"<head><meta charset="utf-8"><meta name="csrf-token" content="1700000000:abc=="></head>"#;
        assert_eq!(extract_csrf(html).unwrap().as_deref(), Some("1700000000:abc=="));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(extract_csrf("<html></html>").unwrap(), None);
        assert_eq!(extract_csrf(r#"<meta name="csrf-token" content="">"#).unwrap(), None);
    }

    #[tokio::test]
    async fn override_skips_the_network() {
        let server = MockServer::start().await;
        let token = csrf_token(&Client::new(), &config(&server.uri(), Some("X")))
            .await
            .unwrap();

        assert_eq!(token, "X");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn scrapes_token_with_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("cookie", "_uid=1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"<meta name="csrf-token" content="tok">"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = csrf_token(&Client::new(), &config(&server.uri(), None))
            .await
            .unwrap();
        assert_eq!(token, "tok");
    }

    #[tokio::test]
    async fn page_without_token_fails_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = csrf_token(&Client::new(), &config(&server.uri(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CsrfNotFound));
        assert_eq!(err.to_string(), "cannot get csrf from homepage.");
    }

    #[tokio::test]
    async fn punch_sends_site_headers_and_empty_body() {
        let server = MockServer::start().await;
        let origin = server.uri();
        Mock::given(method("POST"))
            .and(path("/index/ajax_punch"))
            .and(header("origin", origin.as_str()))
            .and(header("referer", format!("{}/", origin).as_str()))
            .and(header("x-csrf-token", "tok"))
            .and(header("cookie", "_uid=1"))
            .and(header("user-agent", "agent"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        punch(&Client::new(), &config(&origin, None), "tok").await.unwrap();
    }

    #[tokio::test]
    async fn punch_rejection_is_fatal_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let err = punch(&Client::new(), &config(&server.uri(), None), "tok")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to checkin: 403");
    }

    #[tokio::test]
    async fn post_benben_sends_trimmed_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feed/postBenben"))
            .and(header("x-csrf-token", "tok"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("content=a%E2%80%94%E2%80%94c%E3%80%8Ab%E3%80%8B"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        post_benben(&Client::new(), &config(&server.uri(), None), "tok", "  a——c《b》\n")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn post_benben_rejection_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = post_benben(&Client::new(), &config(&server.uri(), None), "tok", "x")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to post benben: 500");
    }
}
