use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const SHARE_BASE_URL: &str = "https://wa.me/?text=";

// Same unreserved set as JavaScript's encodeURIComponent
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Link that opens WhatsApp with `text` prefilled in the composer.
///
/// # Examples
///
/// ```
/// use chat_export_parser::render::share_link;
///
/// assert_eq!(share_link("See you at 8?"), "https://wa.me/?text=See%20you%20at%208%3F");
/// ```
pub fn share_link(text: &str) -> String {
    format!("{}{}", SHARE_BASE_URL, utf8_percent_encode(text, COMPONENT_SET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_keeps_unreserved() {
        assert_eq!(share_link("ok-then_(fine)!"), "https://wa.me/?text=ok-then_(fine)!");
    }

    #[test]
    fn test_share_link_encodes_reserved_and_unicode() {
        assert_eq!(share_link("a&b=c\nd"), "https://wa.me/?text=a%26b%3Dc%0Ad");
        assert_eq!(share_link("¡hola!"), "https://wa.me/?text=%C2%A1hola!");
    }

    #[test]
    fn test_share_link_empty() {
        assert_eq!(share_link(""), SHARE_BASE_URL);
    }
}
