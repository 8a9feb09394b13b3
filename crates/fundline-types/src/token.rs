//! Random alphanumeric id tokens.
//!
//! Request and donation ids are short tokens drawn from `[0-9a-zA-Z]`. The
//! generator alone does not guarantee uniqueness; the ledger engine checks
//! a fresh token for absence against the store before committing it.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default token length. Matches the id format of previously stored data.
pub const DEFAULT_TOKEN_LEN: usize = 6;

/// Generate a random alphanumeric token of the given length.
pub fn alnum_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn token_has_requested_length() {
        for len in [0, 1, 6, 32] {
            assert_eq!(alnum_token(len).len(), len);
        }
    }

    #[test]
    fn tokens_are_alphanumeric() {
        let token = alnum_token(64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn long_tokens_do_not_collide_in_practice() {
        let a = alnum_token(32);
        let b = alnum_token(32);
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn any_length_stays_in_alphabet(len in 0usize..128) {
            let token = alnum_token(len);
            prop_assert_eq!(token.len(), len);
            prop_assert!(token.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }
}
