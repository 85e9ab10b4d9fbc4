pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if url.chars().any(char::is_whitespace) {
        return Err("URL cannot contain whitespace".to_string());
    }
    Ok(())
}

/// Host part of a URL-ish string: scheme stripped, then cut at the first `/`
/// and the first `:`.
pub fn extract_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split('/').next().unwrap_or(rest);
    host.split(':').next().unwrap_or(host)
}
