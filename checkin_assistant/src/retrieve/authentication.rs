use reqwest::RequestBuilder;

pub trait Authentication {
    fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder;
}

/// Only the session cookie. Enough to render the logged-in home page.
pub struct CookieAuthentication<'a> {
    pub cookie: &'a str,
}

impl Authentication for CookieAuthentication<'_> {
    fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder.header("cookie", self.cookie)
    }
}

/// Everything a state-changing request to the site needs: same-origin
/// headers, the anti-forgery token and the session identity.
pub struct CsrfAuthentication<'a> {
    pub origin: &'a str,
    pub token: &'a str,
    pub cookie: &'a str,
    pub user_agent: &'a str,
}

impl Authentication for CsrfAuthentication<'_> {
    fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder
            .header("origin", self.origin)
            .header("referer", format!("{}/", self.origin))
            .header("x-csrf-token", self.token)
            .header("cookie", self.cookie)
            .header("user-agent", self.user_agent)
    }
}
