pub mod luogu {
    use crate::retrieve::endpoint::BasicEndpoint;

    pub static BASE_URL: &str = "https://www.luogu.com.cn";
    static PUNCH_URL: &str = "index/ajax_punch";
    static POST_BENBEN_URL: &str = "api/feed/postBenben";

    pub fn home(base_url: &str) -> BasicEndpoint {
        let base_url = format!("{}/", base_url);
        BasicEndpoint { base_url }
    }

    pub fn punch(base_url: &str) -> BasicEndpoint {
        let base_url = format!("{}/{}", base_url, PUNCH_URL);
        BasicEndpoint { base_url }
    }

    pub fn post_benben(base_url: &str) -> BasicEndpoint {
        let base_url = format!("{}/{}", base_url, POST_BENBEN_URL);
        BasicEndpoint { base_url }
    }
}

pub mod hitokoto {
    use crate::retrieve::endpoint::QueryEndpoint;

    static BASE_URL: &str = "https://v1.hitokoto.cn/";

    // Sentence categories: anime, comic, game, literature, original,
    // poetry and philosophy.
    static CATEGORIES: [&str; 7] = ["a", "b", "c", "d", "e", "i", "j"];

    pub fn sentence() -> QueryEndpoint {
        let mut params: Vec<(&'static str, &'static str)> =
            CATEGORIES.iter().map(|category| ("c", *category)).collect();
        params.push(("encode", "json"));
        QueryEndpoint {
            base_url: BASE_URL.to_string(),
            params,
        }
    }
}

pub mod jinrishici {
    use crate::retrieve::endpoint::BasicEndpoint;

    static BASE_URL: &str = "https://v2.jinrishici.com/";
    static ONE_URL: &str = "one.json";

    pub fn one() -> BasicEndpoint {
        let base_url = format!("{}{}", BASE_URL, ONE_URL);
        BasicEndpoint { base_url }
    }
}
