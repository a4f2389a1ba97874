/// Decode bytes as UTF-8 text, falling back to lossy conversion.
pub(crate) fn extract_txt(bytes: &[u8]) -> String {
    let text = String::from_utf8(bytes.to_vec())
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_simple_text() {
        assert_eq!(
            extract_txt(b"Hello, world!\nSecond line."),
            "Hello, world!\nSecond line."
        );
    }

    #[test]
    fn extract_utf8_text() {
        let content = "Ünïcödé text with émojis 🎉".as_bytes();
        assert_eq!(extract_txt(content), "Ünïcödé text with émojis 🎉");
    }

    #[test]
    fn invalid_utf8_decodes_lossily() {
        // 0xE9 is latin-1 é, invalid on its own in UTF-8.
        let text = extract_txt(b"caf\xE9 menu");
        assert!(text.starts_with("caf"));
        assert!(text.ends_with("menu"));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(extract_txt(b"  \n  Hello  \n  "), "Hello");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(extract_txt(b""), "");
    }
}
