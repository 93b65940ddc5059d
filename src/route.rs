//! URL template helpers
//!
//! Endpoints use `:name` placeholders, e.g. `/users/:id/posts/:post`.

use crate::i18n::Replacements;

/// Substitute the first `:name` occurrence of each parameter, in order.
///
/// ```
/// use blok::i18n::Replacements;
/// use blok::route::url_route;
///
/// let params = Replacements::new().with("id", 7).with("post", "intro");
/// assert_eq!(url_route("/users/:id/posts/:post", Some(&params)), "/users/7/posts/intro");
/// ```
pub fn url_route(endpoint: &str, params: Option<&Replacements>) -> String {
    let Some(params) = params else {
        return endpoint.to_string();
    };

    params
        .iter()
        .fold(endpoint.to_string(), |acc, (placeholder, value)| {
            acc.replacen(&format!(":{}", placeholder), value, 1)
        })
}

/// Prefix `endpoint` with `base_url`, then substitute parameters.
pub fn api_route(base_url: &str, endpoint: &str, params: Option<&Replacements>) -> String {
    url_route(&format!("{}{}", base_url, endpoint), params)
}
