/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape text for use in HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prefix a relative image path with the configured image directory.
/// Absolute URLs, root-relative paths and data URIs are returned unchanged.
pub fn join_image_path(base: &str, image: &str) -> String {
    let lower = image.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:")
        || image.starts_with('/')
    {
        return image.to_string();
    }

    let image = image.trim_start_matches("./");
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        image.to_string()
    } else {
        format!("{}/{}", base, image)
    }
}
