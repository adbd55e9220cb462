//! Escaping rules used by the delivery URL grammar and HTML tags.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Everything except `[A-Za-z0-9_.\-/:]` is escaped in public ids and fetch URLs.
const URL_UNSAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/')
    .remove(b':');

/// Characters escaped (and lower-cased) in auth token ACLs and URLs.
const TOKEN_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Percent-encodes every byte outside `[A-Za-z0-9_.\-/:]` with upper-case hex.
pub fn smart_escape(s: &str) -> String {
    utf8_percent_encode(s, URL_UNSAFE).to_string()
}

/// Decodes `%XX` sequences; invalid UTF-8 is replaced rather than rejected.
pub fn unescape(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Decodes repeatedly until the string stops changing.
pub fn fully_unescape(s: &str) -> String {
    let mut current = s.to_string();
    loop {
        let next = unescape(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Escapes text for a text layer.
///
/// `,` and `/` are escaped twice so the CDN does not read them as
/// qualifier or action separators. `$(name)` variable references are
/// left untouched.
pub fn escape_layer_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("$(") {
        let Some(len) = variable_reference_len(&rest[start..]) else {
            out.push_str(&escape_text_segment(&rest[..start + 2]));
            rest = &rest[start + 2..];
            continue;
        };
        out.push_str(&escape_text_segment(&rest[..start]));
        out.push_str(&rest[start..start + len]);
        rest = &rest[start + len..];
    }
    out.push_str(&escape_text_segment(rest));
    out
}

fn escape_text_segment(segment: &str) -> String {
    let once = segment.replace(',', "%2C").replace('/', "%2F");
    smart_escape(&once)
}

/// Length of a leading `$(name)` where name is `[A-Za-z]\w*`.
fn variable_reference_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix("$(")?;
    let end = body.find(')')?;
    let name = &body[..end];
    let mut chars = name.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(end + 3)
}

/// Escapes a value for auth tokens: reserved characters are encoded with
/// lower-case hex.
pub fn escape_to_lower(s: &str) -> String {
    let encoded = utf8_percent_encode(s, TOKEN_UNSAFE).to_string();
    let mut out = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '%' {
            for h in chars.by_ref().take(2) {
                out.push(h.to_ascii_lowercase());
            }
        }
    }
    out
}

/// Escapes a string for use inside a quoted HTML attribute value.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_escape_keeps_path_characters() {
        assert_eq!(smart_escape("folder/sample:v1.jpg"), "folder/sample:v1.jpg");
        assert_eq!(smart_escape("my image"), "my%20image");
        assert_eq!(smart_escape("a?b=c&d"), "a%3Fb%3Dc%26d");
    }

    #[test]
    fn smart_escape_non_ascii() {
        assert_eq!(smart_escape("café"), "caf%C3%A9");
    }

    #[test]
    fn unescape_roundtrips_percent_sequences() {
        assert_eq!(unescape("my%20image"), "my image");
        assert_eq!(fully_unescape("a%2520b"), "a b");
    }

    #[test]
    fn layer_text_double_escapes_separators() {
        assert_eq!(escape_layer_text("Hello, World/2"), "Hello%252C%20World%252F2");
    }

    #[test]
    fn layer_text_keeps_variable_references() {
        assert_eq!(escape_layer_text("Hi $(name), bye"), "Hi%20$(name)%252C%20bye");
        assert_eq!(escape_layer_text("cost $(1x)"), "cost%20%24%281x%29");
    }

    #[test]
    fn escape_to_lower_encodes_reserved() {
        assert_eq!(
            escape_to_lower("/image/authenticated/*"),
            "%2fimage%2fauthenticated%2f*"
        );
    }

    #[test]
    fn html_escape_quotes() {
        assert_eq!(html_escape("a \"b\" & <c>"), "a &quot;b&quot; &amp; &lt;c&gt;");
    }
}
