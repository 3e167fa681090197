/// One-time reset code generation
///
/// Reset codes are fixed-width strings of decimal digits drawn from the
/// thread-local CSPRNG. Width is fixed so a code below 100000 is still
/// six characters; the value range is [0, 999999]. The code is
/// deliberately short enough to retype from an email, which also means
/// it is low-entropy evidence on its own.

use rand::{distributions::Uniform, Rng};

/// Width of a generated code, in decimal digits
pub const RESET_CODE_LEN: usize = 6;

/// Generates a fresh 6-digit reset code
///
/// # Example
///
/// ```
/// use gatehouse::auth::code::{generate_reset_code, RESET_CODE_LEN};
///
/// let code = generate_reset_code();
/// assert_eq!(code.len(), RESET_CODE_LEN);
/// assert!(code.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate_reset_code() -> String {
    rand::thread_rng()
        .sample_iter(Uniform::new(0u32, 10))
        .take(RESET_CODE_LEN)
        .map(|d| d.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_is_fixed_width_decimal() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), RESET_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let value: u32 = code.parse().unwrap();
            assert!(value <= 999_999);
        }
    }

    #[test]
    fn test_codes_vary() {
        // 20 identical draws from a 10^6 space would mean a broken RNG
        let codes: HashSet<String> = (0..20).map(|_| generate_reset_code()).collect();
        assert!(codes.len() > 1);
    }
}
