//! Random hex tokens
//!
//! Format: 8 lowercase hex digits from one pseudo-random 32-bit integer.
//! Not suitable for anything security-sensitive; use a proper CSPRNG and
//! more entropy for that.

/// Generate a short random hex token (e.g. `"9f2c0a41"`).
pub fn random_token() -> String {
    let random: u32 = rand::random();
    format!("{random:08x}")
}
