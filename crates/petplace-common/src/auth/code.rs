//! Verification code generation

use rand::Rng;

/// Length of email verification codes
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Generate a random numeric verification code, zero-padded to
/// [`VERIFICATION_CODE_LEN`] digits.
#[must_use]
pub fn generate_verification_code() -> String {
    let mut rng = rand::thread_rng();
    let code: u32 = rng.gen_range(0..1_000_000);
    format!("{code:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_verification_code();
            assert_eq!(code.len(), VERIFICATION_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
