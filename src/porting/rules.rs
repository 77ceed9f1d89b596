// Porting eligibility and timeline rules
//
// A port request can only be raised when ALL of these hold:
// 1. The number has been active with the current operator for 90 days
// 2. No outstanding postpaid dues
// 3. No other porting request already in progress for the number
// 4. Corporate numbers carry an employer authorization letter
//
// Porting completes in 3 working days, 5 in the extended circles. Weekends
// are skipped; there is no holiday calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::circle_info;

/// Minimum days a number must be active before it can be ported
pub const MIN_TENURE_DAYS: i64 = 90;

/// Shortcode the PORT SMS is sent to
pub const PORT_SMS_SHORTCODE: &str = "1900";

pub const STANDARD_PORTING_WORKING_DAYS: u32 = 3;
pub const EXTENDED_PORTING_WORKING_DAYS: u32 = 5;

/// Subscriber-facing porting instructions, in order
pub const PORTING_STEPS: &[&str] = &[
    "Send SMS \"PORT <mobile number>\" to 1900 from the number being ported",
    "Receive the UPC over SMS; note its expiry date",
    "Submit the UPC with identity proof to the new operator",
    "Keep the current SIM active until the port completes",
    "Insert the new SIM once service on the old one stops",
];

/// What the current operator knows about the subscriber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberProfile {
    pub msisdn: String,
    pub activated_on: NaiveDate,
    pub postpaid: bool,
    pub outstanding_dues: bool,
    pub port_in_progress: bool,
    pub corporate: bool,
    pub corporate_authorization: bool,
}

/// A reason the subscriber cannot port right now
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortingBlocker {
    #[error("number active for {days} days, minimum tenure is 90 days")]
    TenureTooShort { days: i64 },
    #[error("outstanding postpaid dues must be cleared first")]
    OutstandingDues,
    #[error("another porting request is already in progress")]
    PortInProgress,
    #[error("corporate numbers need an employer authorization letter")]
    CorporateAuthorizationMissing,
}

/// Every blocker that currently applies; empty means eligible
pub fn check_eligibility(profile: &SubscriberProfile, today: NaiveDate) -> Vec<PortingBlocker> {
    let mut blockers = Vec::new();

    let tenure = (today - profile.activated_on).num_days();
    if tenure < MIN_TENURE_DAYS {
        blockers.push(PortingBlocker::TenureTooShort { days: tenure });
    }
    if profile.postpaid && profile.outstanding_dues {
        blockers.push(PortingBlocker::OutstandingDues);
    }
    if profile.port_in_progress {
        blockers.push(PortingBlocker::PortInProgress);
    }
    if profile.corporate && !profile.corporate_authorization {
        blockers.push(PortingBlocker::CorporateAuthorizationMissing);
    }

    blockers
}

/// Working days the port takes in the given circle
pub fn porting_working_days(circle: &str) -> u32 {
    let extended = circle_info(circle).map(|c| c.extended_upc).unwrap_or(false);
    if extended {
        EXTENDED_PORTING_WORKING_DAYS
    } else {
        STANDARD_PORTING_WORKING_DAYS
    }
}

/// Advance `days` working days past `start`, skipping Saturdays and Sundays
pub fn add_working_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut date = start;
    let mut remaining = days;
    while remaining > 0 {
        date = date + Duration::days(1);
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    date
}

/// Expected completion date for a port submitted on `submitted`
pub fn estimated_completion(submitted: NaiveDate, circle: &str) -> NaiveDate {
    add_working_days(submitted, porting_working_days(circle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clean_profile() -> SubscriberProfile {
        SubscriberProfile {
            msisdn: "9876543210".to_string(),
            activated_on: date(2024, 1, 1),
            postpaid: false,
            outstanding_dues: false,
            port_in_progress: false,
            corporate: false,
            corporate_authorization: false,
        }
    }

    #[test]
    fn test_eligible_profile() {
        assert!(check_eligibility(&clean_profile(), date(2025, 7, 1)).is_empty());
    }

    #[test]
    fn test_tenure_blocker() {
        let mut profile = clean_profile();
        profile.activated_on = date(2025, 6, 1);
        let blockers = check_eligibility(&profile, date(2025, 7, 1));
        assert_eq!(blockers, vec![PortingBlocker::TenureTooShort { days: 30 }]);

        // Day 90 exactly is allowed
        profile.activated_on = date(2025, 4, 2);
        assert!(check_eligibility(&profile, date(2025, 7, 1)).is_empty());
    }

    #[test]
    fn test_dues_blocker_only_for_postpaid() {
        let mut profile = clean_profile();
        profile.outstanding_dues = true;
        assert!(check_eligibility(&profile, date(2025, 7, 1)).is_empty());

        profile.postpaid = true;
        assert_eq!(
            check_eligibility(&profile, date(2025, 7, 1)),
            vec![PortingBlocker::OutstandingDues]
        );
    }

    #[test]
    fn test_corporate_blocker() {
        let mut profile = clean_profile();
        profile.corporate = true;
        assert_eq!(
            check_eligibility(&profile, date(2025, 7, 1)),
            vec![PortingBlocker::CorporateAuthorizationMissing]
        );

        profile.corporate_authorization = true;
        assert!(check_eligibility(&profile, date(2025, 7, 1)).is_empty());
    }

    #[test]
    fn test_blockers_accumulate() {
        let mut profile = clean_profile();
        profile.activated_on = date(2025, 6, 20);
        profile.port_in_progress = true;
        let blockers = check_eligibility(&profile, date(2025, 7, 1));
        assert_eq!(blockers.len(), 2);
        assert!(blockers.contains(&PortingBlocker::PortInProgress));
    }

    #[test]
    fn test_add_working_days_skips_weekends() {
        // 2025-07-03 is a Thursday
        let thursday = date(2025, 7, 3);
        assert_eq!(add_working_days(thursday, 1), date(2025, 7, 4));
        // +2 lands past the weekend
        assert_eq!(add_working_days(thursday, 2), date(2025, 7, 7));
        assert_eq!(add_working_days(thursday, 3), date(2025, 7, 8));
        // Zero days is the start date itself
        assert_eq!(add_working_days(thursday, 0), thursday);
    }

    #[test]
    fn test_estimated_completion() {
        // Tuesday + 3 working days = Friday
        let tuesday = date(2025, 7, 1);
        assert_eq!(estimated_completion(tuesday, "delhi"), date(2025, 7, 4));
        // Extended circle: +5 working days crosses the weekend
        assert_eq!(estimated_completion(tuesday, "assam"), date(2025, 7, 8));
    }
}
