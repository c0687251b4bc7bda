use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const REFERRAL_SUFFIX_LEN: usize = 5;

/// Builds `<prefix><5 uppercase alphanumerics>` from a random v4 UUID.
pub fn generate_referral_code(prefix: &str) -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let suffix: String = bytes
        .iter()
        .take(REFERRAL_SUFFIX_LEN)
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect();
    format!("{prefix}{suffix}")
}

pub fn is_referral_code(code: &str, prefix: &str) -> bool {
    code.strip_prefix(prefix).is_some_and(|suffix| {
        suffix.len() == REFERRAL_SUFFIX_LEN
            && suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_match_format() {
        for _ in 0..50 {
            let code = generate_referral_code("PIN-");
            assert!(is_referral_code(&code, "PIN-"), "bad code {code}");
        }
    }

    #[test]
    fn test_format_check() {
        assert!(is_referral_code("PIN-A1B2C", "PIN-"));
        assert!(!is_referral_code("PIN-a1b2c", "PIN-"));
        assert!(!is_referral_code("PIN-A1B2", "PIN-"));
        assert!(!is_referral_code("REF-A1B2C", "PIN-"));
    }
}
