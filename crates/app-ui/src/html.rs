//! HTML text helpers shared by the markup builders

/// Escape text for use in element content or a quoted attribute value
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Static message shown in place of content that failed to load
pub fn fallback_message(text: &str) -> String {
    format!(r#"<p class="text-white-50 text-center">{}</p>"#, escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(
            escape(r#"<a href="x">it's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(
            fallback_message("Unable to load albums at this time."),
            r#"<p class="text-white-50 text-center">Unable to load albums at this time.</p>"#
        );
    }
}
