//! Link building for listing URLs.

/// Append query parameters to `link`.
///
/// Uses `?` if `link` has no query string yet and `&` otherwise. Values are
/// form-urlencoded; keys are written in the given order.
pub fn add_params(link: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return link.to_owned();
    }

    let mut out = String::with_capacity(link.len() + 32);
    out.push_str(link);
    out.push(if link.contains('?') { '&' } else { '?' });

    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(&urlencoding::encode(key));
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

/// `uri` without its query string or fragment. This is page 1.
pub fn base_uri(uri: &str) -> &str {
    match uri.find(['?', '#']) {
        Some(idx) => &uri[..idx],
        None => uri,
    }
}

/// First non-empty value of query parameter `name` in `uri`.
///
/// `uri` may be a full link or a bare `location.search` string (`?a=b`).
pub fn query_param(uri: &str, name: &str) -> Option<String> {
    let (_, query) = uri.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == name)
        .filter_map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .find(|value| !value.is_empty())
}
