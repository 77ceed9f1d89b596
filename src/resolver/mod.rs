// Number Resolution Engine
//
// Infers the most likely operator and circle for a 10-digit mobile number
// from the static prefix tables in `reference`. Resolution walks four tiers
// in strict order and stops at the first match:
//
//   specific prefix (4 then 3 digits) > priority prefix > general table
//   scan > first-digit fallback
//
// Overlapping claims in the general table are broken by the fixed operator
// precedence jio > airtel > vi > bsnl > mtnl. This order is part of the
// contract: the same number must resolve identically everywhere.

use serde::Serialize;
use thiserror::Error;

use crate::reference::circles::CircleCategory;
use crate::reference::operators::{OperatorId, OPERATOR_PRECEDENCE};
use crate::reference::{circle_info, operator_info, prefixes};

/// Which rule tier produced the answer, in decreasing reliability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// A 3/4-digit series pinned to an exact operator and circle
    Exact,
    /// The contractual owner of a contested 2-digit series
    Priority,
    /// A single winner from the general allocation table
    Table,
    /// Only the leading digit matched
    Fallback,
    /// Nothing matched (unreachable for in-range numbers)
    None,
}

/// Result of resolving one number
///
/// `operator` is `None` only when `confidence` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub operator: Option<OperatorId>,
    pub circle: Option<&'static str>,
    pub confidence: Confidence,
}

/// A malformed input number. The engine has no other failure mode: valid
/// numbers always produce a ResolutionResult, however weak the match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNumberError {
    #[error("mobile number must be exactly 10 digits, got {0} characters")]
    WrongLength(usize),
    #[error("mobile number contains non-digit character {0:?}")]
    NonDigit(char),
    #[error("mobile numbers start with 6-9, got leading digit {0:?}")]
    LeadingDigit(char),
}

/// Validate the `^[6-9]\d{9}$` shape without allocating
pub fn validate_number(number: &str) -> Result<(), InvalidNumberError> {
    if number.len() != 10 {
        return Err(InvalidNumberError::WrongLength(number.len()));
    }
    if let Some(bad) = number.chars().find(|c| !c.is_ascii_digit()) {
        return Err(InvalidNumberError::NonDigit(bad));
    }
    let first = number.chars().next().unwrap_or('0');
    if !('6'..='9').contains(&first) {
        return Err(InvalidNumberError::LeadingDigit(first));
    }
    Ok(())
}

/// Resolve a 10-digit mobile number to its most likely operator and circle
pub fn resolve(number: &str) -> Result<ResolutionResult, InvalidNumberError> {
    validate_number(number)?;

    // Tier 1: exact series, longest first
    for width in [4, 3] {
        if let Some((operator, circle)) = prefixes::specific_match(&number[..width]) {
            return Ok(ResolutionResult {
                operator: Some(operator),
                circle: Some(circle),
                confidence: Confidence::Exact,
            });
        }
    }

    let prefix = &number[..2];

    // Tier 2: contested series with a contractual owner. The owner wins
    // even when its own table has no circle data for the series.
    if let Some(owner) = prefixes::priority_operator(prefix) {
        let circle = prefixes::operator_circles(owner, prefix).and_then(|c| c.first().copied());
        return Ok(ResolutionResult {
            operator: Some(owner),
            circle,
            confidence: Confidence::Priority,
        });
    }

    // Tier 3: general table scan in fixed precedence order
    let mut candidates = OPERATOR_PRECEDENCE.iter().filter_map(|&operator| {
        prefixes::operator_circles(operator, prefix)
            .and_then(|c| c.first().copied())
            .map(|circle| (operator, circle))
    });
    if let Some((operator, circle)) = candidates.next() {
        let losers: Vec<OperatorId> = candidates.map(|(op, _)| op).collect();
        if !losers.is_empty() {
            log::debug!(
                "prefix {} also claimed by {:?}, precedence picks {:?}",
                prefix,
                losers,
                operator
            );
        }
        return Ok(ResolutionResult {
            operator: Some(operator),
            circle: Some(circle),
            confidence: Confidence::Table,
        });
    }

    // Tier 4: leading digit only
    let first = number.chars().next().unwrap_or('0');
    if let Some(operator) = prefixes::fallback_operator(first) {
        return Ok(ResolutionResult {
            operator: Some(operator),
            circle: None,
            confidence: Confidence::Fallback,
        });
    }

    // Unreachable for in-range numbers: 6-9 are all covered by the fallback
    Ok(ResolutionResult {
        operator: None,
        circle: None,
        confidence: Confidence::None,
    })
}

/// Resolution joined against operator and circle metadata
///
/// Fields are populated only as far as the matching tier allows, mirroring
/// what a porting front end would display for the number.
#[derive(Debug, Clone, Serialize)]
pub struct NumberLookup {
    pub operator: Option<OperatorId>,
    pub operator_name: Option<&'static str>,
    pub circle: Option<&'static str>,
    pub circle_name: Option<&'static str>,
    pub category: Option<CircleCategory>,
    pub confidence: Confidence,
    /// Days a UPC stays valid in the resolved circle
    pub upc_validity_days: Option<i64>,
}

/// Resolve a number and enrich the result with display metadata
pub fn lookup_full(number: &str) -> Result<NumberLookup, InvalidNumberError> {
    let resolved = resolve(number)?;

    let mut lookup = NumberLookup {
        operator: resolved.operator,
        operator_name: resolved.operator.map(|id| operator_info(id).name),
        circle: resolved.circle,
        circle_name: None,
        category: None,
        confidence: resolved.confidence,
        upc_validity_days: None,
    };

    if let Some(circle) = resolved.circle.and_then(circle_info) {
        lookup.circle_name = Some(circle.name);
        lookup.category = Some(circle.category);
        lookup.upc_validity_days = Some(crate::porting::upc::upc_validity_days(circle.code));
    }

    Ok(lookup)
}
