use url::Url;

pub trait Endpoint {
    fn url(&self) -> String;
}

pub struct BasicEndpoint {
    pub base_url: String,
}

impl Endpoint for BasicEndpoint {
    fn url(&self) -> String {
        self.base_url.clone()
    }
}

/// An endpoint with a fixed query string. Repeated keys are kept, in order.
pub struct QueryEndpoint {
    pub base_url: String,
    pub params: Vec<(&'static str, &'static str)>,
}

impl Endpoint for QueryEndpoint {
    fn url(&self) -> String {
        match Url::parse_with_params(&self.base_url, &self.params) {
            Ok(url) => url.as_str().to_string(),
            // Falling back to the bare url still reaches the service, just
            // with its default query.
            Err(_e) => self.base_url.clone(),
        }
    }
}

impl Endpoint for String {
    fn url(&self) -> String {
        self.clone()
    }
}
