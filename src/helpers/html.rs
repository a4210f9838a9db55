//! HTML and text helper functions

use std::borrow::Cow;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Decode HTML character references in an attribute value
///
/// Numeric references are always decoded, with or without the closing
/// `;`. Named references cover the markup and URL punctuation set; apart
/// from `amp`, `lt`, `gt` and `quot` they need the `;`, as in browsers.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        match decode_reference(tail) {
            Some((c, used)) => {
                out.push(c);
                rest = &tail[used..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the reference after a `&`, returning the char and bytes consumed
fn decode_reference(s: &str) -> Option<(char, usize)> {
    if let Some(num) = s.strip_prefix('#') {
        let (digits, radix, prefix) = match num.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16, 2),
            None => (num, 10, 1),
        };
        let len = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if len == 0 {
            return None;
        }
        let c = u32::from_str_radix(&digits[..len], radix)
            .ok()
            .and_then(char::from_u32)
            .filter(|c| *c != '\0')
            .unwrap_or('\u{FFFD}');
        let semi = usize::from(digits[len..].starts_with(';'));
        return Some((c, prefix + len + semi));
    }

    let len = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    let terminated = s[len..].starts_with(';');
    let c = match &s[..len] {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" if terminated => '\'',
        "colon" if terminated => ':',
        "sol" if terminated => '/',
        "period" if terminated => '.',
        "lpar" if terminated => '(',
        "rpar" if terminated => ')',
        "Tab" if terminated => '\t',
        "NewLine" if terminated => '\n',
        _ => return None,
    };
    Some((c, len + usize::from(terminated)))
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Count words in a text (CJK characters count as one word each)
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphanumeric() && !is_cjk(c) {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c == '\'' || c == '-' {
            // contractions and hyphenated words stay one word
        } else {
            in_word = false;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Human reading time estimate, e.g. "3 min read"
pub fn reading_time(text: &str, words_per_minute: usize) -> String {
    let words = count_words(text);
    let wpm = words_per_minute.max(1);
    let minutes = words.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("plain/path.png"), "plain/path.png");
        assert_eq!(decode_entities("&#106;avascript&#x3A;x"), "javascript:x");
        assert_eq!(decode_entities("&#106avascript&colon;x"), "javascript:x");
        assert_eq!(decode_entities("a.png?w=1&amp;h=2"), "a.png?w=1&h=2");
        assert_eq!(decode_entities("a?x=1&colon=2"), "a?x=1&colon=2");
        assert_eq!(decode_entities("&#0;&#99999999999;"), "\u{FFFD}\u{FFFD}");
        assert_eq!(decode_entities("Tom & Jerry &unknown;"), "Tom & Jerry &unknown;");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello, world! It's a well-known fact."), 6);
        assert_eq!(count_words("你好 rust"), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time("", 200), "1 min read");
        let words = "word ".repeat(450);
        assert_eq!(reading_time(&words, 200), "3 min read");
        assert_eq!(reading_time(&words, 0), "450 min read");
    }
}
