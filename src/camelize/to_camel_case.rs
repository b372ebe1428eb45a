/// Convert a snake_case or kebab-case token to camelCase.
///
/// Each run of one or more `_` or `-` characters is removed and the character
/// immediately following the run is upper-cased, so consecutive separators
/// collapse to a single case boundary. After separator removal, a leading
/// ASCII uppercase letter is forced to lower case (`-name` becomes `name`).
///
/// A token without separators is returned unchanged, which makes the function
/// idempotent and safe to apply to already-converted input. Nothing else is
/// normalized: digits, non-ASCII letters, and interior casing are preserved
/// verbatim (`full_HTML_data` becomes `fullHTMLData`, not `fullHtmlData`).
///
/// A trailing separator run has no following character to capitalize; it
/// collapses to its final separator character (`foo__` becomes `foo_`).
///
/// # Examples
///
/// ```
/// use camelize_schema::to_camel_case;
///
/// assert_eq!(to_camel_case("user_name"), "userName");
/// assert_eq!(to_camel_case("user-age"), "userAge");
/// assert_eq!(to_camel_case("user_full_name"), "userFullName");
/// assert_eq!(to_camel_case("user__name"), "userName");
/// assert_eq!(to_camel_case("userName"), "userName");
/// ```
pub fn to_camel_case(token: &str) -> String {
    // Fast path: no separators, nothing to do.
    if !token.contains(['_', '-']) {
        return token.to_string();
    }

    let mut out = String::with_capacity(token.len());
    // Last separator of the run currently being consumed, if any.
    let mut run_sep: Option<char> = None;
    for ch in token.chars() {
        if ch == '_' || ch == '-' {
            run_sep = Some(ch);
        } else if run_sep.take().is_some() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    // A trailing run collapses to its final separator.
    if let Some(sep) = run_sep {
        out.push(sep);
    }

    if out.as_bytes().first().is_some_and(u8::is_ascii_uppercase) {
        out[0..1].make_ascii_lowercase();
    }
    out
}
