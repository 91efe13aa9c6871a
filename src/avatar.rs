use log::warn;
use reqwest::Url;

/// First character of every whitespace-separated token, upper-cased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Avatar image address for `name`, with the initials as the `seed` query
/// parameter of `endpoint`.
pub fn avatar_url(endpoint: &str, name: &str) -> Option<String> {
    match Url::parse_with_params(endpoint, [("seed", initials(name))]) {
        Ok(url) => Some(url.into()),
        Err(err) => {
            warn!("Invalid avatar endpoint {endpoint}: {err}");
            None
        }
    }
}
