// src/macros.rs

/// Owned `String` from anything `String: From<_>` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($v:expr) => {
        ::std::string::String::from($v)
    };
}

/// Concatenate `&str`-like parts into one `String`, sized up front.
/// Used for URLs and file names.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$(::core::convert::AsRef::<str>::as_ref($part)),+];
        let mut out = ::std::string::String::with_capacity(parts.iter().map(|p| p.len()).sum());
        for p in parts {
            out.push_str(p);
        }
        out
    }};
}
