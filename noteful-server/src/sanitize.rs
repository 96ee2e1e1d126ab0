//! Output escaping for user-supplied text

/// Encode `&`, `<` and `>` so stored text renders inert in a browser.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
