//! Paths the guard is never consulted for.
//!
//! Mirrors the front-end matcher
//! `/((?!api/auth|_next/static|_next/image|favicon.ico|.*\.).*)`: after the
//! leading slash, a path is skipped if it starts with one of the excluded
//! prefixes or contains a dot anywhere (static assets). The unescaped dot in
//! `favicon.ico` matches any character, so `favicon` then one character then
//! `ico` is skipped too.

const EXCLUDED_PREFIXES: &[&str] = &["api/auth", "_next/static", "_next/image"];

/// Whether the guard should run for `path`.
pub fn is_guarded(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };

    !EXCLUDED_PREFIXES.iter().any(|p| rest.starts_with(p))
        && !is_favicon(rest)
        && !rest.contains('.')
}

fn is_favicon(rest: &str) -> bool {
    let Some(after) = rest.strip_prefix("favicon") else {
        return false;
    };

    let mut chars = after.chars();
    matches!(chars.next(), Some(c) if c != '\n') && chars.as_str().starts_with("ico")
}
