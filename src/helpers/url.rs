//! URL helper functions

/// Whether a reference points off-site (or is protocol-relative)
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("data:")
        || path.starts_with("mailto:")
}

/// Join URL segments with exactly one `/` between them
///
/// # Examples
/// ```ignore
/// url_join("/content", &["blogs", "hello", "assets/cover.png"]) // -> "/content/blogs/hello/assets/cover.png"
/// ```
pub fn url_join(prefix: &str, segments: &[&str]) -> String {
    let mut url = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}
