// src/core/sanitize.rs

/// Make a provider name safe to use as a file-name stem.
/// Ordinary names pass through untouched; path separators, characters
/// Windows rejects and control characters become `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let out: String = name
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // "." and ".." would point at directories
    if out.is_empty() || out.chars().all(|c| c == '.') {
        s!("provider")
    } else {
        out
    }
}
