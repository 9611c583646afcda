/// Longest candidate the tokenizer will produce, "255.255.255.255".
pub const MAX_TOKEN_LEN: usize = 15;

/// Whether `c` can be part of an address token.
pub fn is_address_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Extracts the first run of address characters from `word`.
///
/// Everything before the first digit or dot is skipped. The run ends at the
/// next character that is neither, or once it holds [`MAX_TOKEN_LEN`]
/// characters. Returns an empty string when `word` has no such character.
///
/// ```
/// use pingscript_common::address::extract_token;
///
/// assert_eq!(extract_token("ip=192.168.1.1;"), "192.168.1.1");
/// assert_eq!(extract_token("none"), "");
/// ```
pub fn extract_token(word: &str) -> String {
    word.chars()
        .skip_while(|c| !is_address_char(*c))
        .take_while(|c| is_address_char(*c))
        .take(MAX_TOKEN_LEN)
        .collect()
}
