use crate::config::Config;
use crate::retrieve::authentication::{CookieAuthentication, CsrfAuthentication};

pub fn home_page(config: &Config) -> CookieAuthentication<'_> {
    CookieAuthentication {
        cookie: &config.session.cookie,
    }
}

pub fn site_action<'a>(config: &'a Config, token: &'a str) -> CsrfAuthentication<'a> {
    CsrfAuthentication {
        origin: &config.base_url,
        token,
        cookie: &config.session.cookie,
        user_agent: &config.session.user_agent,
    }
}
