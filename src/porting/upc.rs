// Unique Porting Code (UPC) rules
//
// A UPC is issued over SMS and authorizes one porting request. Format is
// eight characters: two uppercase letters followed by six digits. The code
// stays valid for 4 calendar days from issue, 30 days in the extended
// circles (Jammu & Kashmir, Assam, North East).

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::reference::circle_info;

pub const STANDARD_UPC_VALIDITY_DAYS: i64 = 4;
pub const EXTENDED_UPC_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpcError {
    #[error("UPC must be exactly 8 characters, got {0}")]
    WrongLength(usize),
    #[error("UPC format is two uppercase letters followed by six digits")]
    Malformed,
}

/// Validate the UPC shape, e.g. "AX123456"
pub fn validate_upc(code: &str) -> Result<(), UpcError> {
    let count = code.chars().count();
    if count != 8 {
        return Err(UpcError::WrongLength(count));
    }
    let letters_ok = code.chars().take(2).all(|c| c.is_ascii_uppercase());
    let digits_ok = code.chars().skip(2).all(|c| c.is_ascii_digit());
    if !letters_ok || !digits_ok {
        return Err(UpcError::Malformed);
    }
    Ok(())
}

/// Days a UPC stays valid in the given circle; unknown circles get the
/// standard window
pub fn upc_validity_days(circle: &str) -> i64 {
    let extended = circle_info(circle).map(|c| c.extended_upc).unwrap_or(false);
    if extended {
        EXTENDED_UPC_VALIDITY_DAYS
    } else {
        STANDARD_UPC_VALIDITY_DAYS
    }
}

/// First day the UPC is no longer usable
pub fn upc_expiry(issued_on: NaiveDate, circle: &str) -> NaiveDate {
    issued_on + Duration::days(upc_validity_days(circle))
}

pub fn is_upc_expired(issued_on: NaiveDate, circle: &str, today: NaiveDate) -> bool {
    today >= upc_expiry(issued_on, circle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_upc() {
        assert_eq!(validate_upc("AX123456"), Ok(()));
        assert_eq!(validate_upc("AX12345"), Err(UpcError::WrongLength(7)));
        assert_eq!(validate_upc("AX1234567"), Err(UpcError::WrongLength(9)));
        assert_eq!(validate_upc("A1234567"), Err(UpcError::Malformed));
        assert_eq!(validate_upc("ax123456"), Err(UpcError::Malformed));
        assert_eq!(validate_upc("AXB23456"), Err(UpcError::Malformed));
    }

    #[test]
    fn test_validity_windows() {
        assert_eq!(upc_validity_days("delhi"), 4);
        assert_eq!(upc_validity_days("jammu-kashmir"), 30);
        assert_eq!(upc_validity_days("assam"), 30);
        assert_eq!(upc_validity_days("north-east"), 30);
        // Unknown circle falls back to the standard window
        assert_eq!(upc_validity_days("nowhere"), 4);
    }

    #[test]
    fn test_expiry_boundaries() {
        let issued = date(2025, 7, 1);
        assert_eq!(upc_expiry(issued, "delhi"), date(2025, 7, 5));
        // Usable through the last day of the window
        assert!(!is_upc_expired(issued, "delhi", date(2025, 7, 4)));
        assert!(is_upc_expired(issued, "delhi", date(2025, 7, 5)));

        assert_eq!(upc_expiry(issued, "assam"), date(2025, 7, 31));
        assert!(!is_upc_expired(issued, "assam", date(2025, 7, 30)));
        assert!(is_upc_expired(issued, "assam", date(2025, 7, 31)));
    }
}
