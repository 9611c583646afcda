//! # Address Extraction
//!
//! The pure part of the pipeline. A raw word goes through three steps:
//!
//! 1. [`token::extract_token`] pulls the first run of digits and dots out of it.
//! 2. [`validator::ValidatedAddress::parse`] checks the run is a dotted quad.
//! 3. [`collection::AddressCollection`] keeps every accepted address in order.

pub mod collection;
pub mod token;
pub mod validator;

pub use collection::AddressCollection;
pub use token::{extract_token, is_address_char};
pub use validator::{ValidatedAddress, is_valid};

/// Runs a raw word through the tokenizer and the validator.
pub fn address_from_word(word: &str) -> Option<ValidatedAddress> {
    let token: String = extract_token(word);
    ValidatedAddress::parse(&token).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_from_word() {
        let addr = address_from_word("abc192.168.1.1xyz").unwrap();
        assert_eq!(addr.as_str(), "192.168.1.1");

        assert!(address_from_word("host=10.0.0.1,").is_some());
        assert!(address_from_word("999.1.1.1").is_none());
        assert!(address_from_word("hostname").is_none());
        assert!(address_from_word("").is_none());
    }
}
