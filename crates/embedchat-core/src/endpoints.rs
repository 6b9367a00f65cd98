//! URL construction for the backend's REST contract.
//!
//! | Call              | Method | Path                                               |
//! |-------------------|--------|----------------------------------------------------|
//! | Sign in           | POST   | `/signin`                                          |
//! | Sign up           | POST   | `/signup`                                          |
//! | List files        | GET    | `/get_file?user_id=`                               |
//! | Upload file       | POST   | `/upload?user_id=` (multipart field `file`)        |
//! | Send chat query   | POST   | `/search`                                          |
//! | Key topics        | GET    | `/get-key-topics?user_id=&num_topics=&num_words=`  |
//! | Data distribution | GET    | `/get-data-distribution?user_id=`                  |

use crate::insights::TopicSettings;

/// Multipart field name the upload endpoint reads.
pub const UPLOAD_FIELD: &str = "file";

/// Builds endpoint URLs against one backend base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn sign_in(&self) -> String {
        self.url("/signin", &[])
    }

    pub fn sign_up(&self) -> String {
        self.url("/signup", &[])
    }

    pub fn list_files(&self, user_id: &str) -> String {
        self.url("/get_file", &[("user_id", user_id)])
    }

    pub fn upload(&self, user_id: &str) -> String {
        self.url("/upload", &[("user_id", user_id)])
    }

    pub fn search(&self) -> String {
        self.url("/search", &[])
    }

    pub fn key_topics(&self, user_id: &str, settings: TopicSettings) -> String {
        let topics = settings.num_topics().to_string();
        let words = settings.num_words().to_string();
        self.url(
            "/get-key-topics",
            &[
                ("user_id", user_id),
                ("num_topics", &topics),
                ("num_words", &words),
            ],
        )
    }

    pub fn data_distribution(&self, user_id: &str) -> String {
        self.url("/get-data-distribution", &[("user_id", user_id)])
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://127.0.0.1:5000/")
    }

    #[rstest]
    #[case::sign_in(endpoints().sign_in(), "http://127.0.0.1:5000/signin")]
    #[case::sign_up(endpoints().sign_up(), "http://127.0.0.1:5000/signup")]
    #[case::search(endpoints().search(), "http://127.0.0.1:5000/search")]
    #[case::files(endpoints().list_files("u1"), "http://127.0.0.1:5000/get_file?user_id=u1")]
    #[case::upload(endpoints().upload("u1"), "http://127.0.0.1:5000/upload?user_id=u1")]
    #[case::distribution(
        endpoints().data_distribution("u1"),
        "http://127.0.0.1:5000/get-data-distribution?user_id=u1"
    )]
    fn test_paths(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_key_topics_joins_with_ampersand() {
        let url = endpoints().key_topics("u1", TopicSettings::new(3, 2));
        assert_eq!(
            url,
            "http://127.0.0.1:5000/get-key-topics?user_id=u1&num_topics=3&num_words=2"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let url = endpoints().list_files("a b&c");
        assert_eq!(url, "http://127.0.0.1:5000/get_file?user_id=a%20b%26c");
    }
}
