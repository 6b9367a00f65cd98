//! Route table of the web client.

/// Every page the router knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Studio,
    SignIn,
    SignUp,
    /// Public chat widget for the given owner
    Chat(String),
    Insights,
}

impl AppRoute {
    /// Path to link to.
    pub fn path(&self) -> String {
        match self {
            AppRoute::Landing => "/".to_string(),
            AppRoute::Studio => "/studio".to_string(),
            AppRoute::SignIn => "/signin".to_string(),
            AppRoute::SignUp => "/signup".to_string(),
            AppRoute::Chat(id) => crate::embed::widget_path(id),
            AppRoute::Insights => "/insights".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppRoute::Landing, "/")]
    #[case(AppRoute::Studio, "/studio")]
    #[case(AppRoute::SignIn, "/signin")]
    #[case(AppRoute::SignUp, "/signup")]
    #[case(AppRoute::Insights, "/insights")]
    #[case(AppRoute::Chat("u-1".into()), "/chat/u-1")]
    fn test_path(#[case] route: AppRoute, #[case] expected: &str) {
        assert_eq!(route.path(), expected);
    }

    #[test]
    fn test_chat_path_escapes_owner() {
        assert_eq!(AppRoute::Chat("team a".into()).path(), "/chat/team%20a");
    }
}
