// ============================================================================
// VALIDATION - Pure input checks for the three steps
// ============================================================================

use regex::Regex;
use crate::utils::constants::{CAMPUS_SUBDOMAINS, OTP_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};

lazy_static::lazy_static! {
    // ASCII-only case folding: `ſ` and the Kelvin sign must not stand in for `s`/`k`
    static ref EMAIL_PATTERN: Option<Regex> = Regex::new(&format!(
        r"(?i-u)^[a-z0-9._%+-]+@({})\.bits-pilani\.ac\.in$",
        CAMPUS_SUBDOMAINS.join("|")
    )).ok();
}

pub fn sanitize_email(email: &str) -> String {
    email.trim().to_string()
}

/// Discord handle: 2 to 32 characters after trimming
pub fn is_valid_username(username: &str) -> bool {
    let len = username.trim().chars().count();
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len)
}

/// Institutional address on one of the campus subdomains
pub fn is_valid_bits_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email.trim()))
}

/// Exactly six ASCII digits
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == OTP_LEN && otp.bytes().all(|b| b.is_ascii_digit())
}
