// Mobile number prefix allocation tables
// Source: DoT national numbering plan allocations and observed MSC series
//
// Four tables, consulted in strict order by the resolver:
// 1. SPECIFIC_PREFIXES - 3/4-digit series with a known (operator, circle)
// 2. PRIORITY_PREFIXES - 2-digit series with a contractual owner, used to
//    break ties when several operators run the same series
// 3. PREFIX_TABLE      - per-operator 2-digit series with the circles the
//    series is seen in, most likely circle first
// 4. FIRST_DIGIT_FALLBACK - coarse default by leading digit
//
// Number series are reassigned and recycled between operators over time,
// so overlapping claims in PREFIX_TABLE are expected, not an error.

use super::operators::OperatorId;

/// One operator's claim on a 2-digit series
#[derive(Debug, Clone)]
pub struct OperatorPrefix {
    pub operator: OperatorId,
    /// First two digits of the subscriber number
    pub prefix: &'static str,
    /// Circles the series is active in, most likely first
    pub circles: &'static [&'static str],
}

/// 2-digit series -> operator that wins a contested claim
#[derive(Debug, Clone)]
pub struct PriorityPrefix {
    pub prefix: &'static str,
    pub operator: OperatorId,
}

/// 3/4-digit series pinned to an exact (operator, circle) pair
#[derive(Debug, Clone)]
pub struct SpecificPrefix {
    pub prefix: &'static str,
    pub operator: OperatorId,
    pub circle: &'static str,
}

/// General allocation table, grouped by operator
pub const PREFIX_TABLE: &[OperatorPrefix] = &[
    // =========================================================================
    // JIO
    // =========================================================================
    OperatorPrefix { operator: OperatorId::Jio, prefix: "62", circles: &["up-east", "bihar"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "63", circles: &["tamil-nadu", "kerala"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "70", circles: &["maharashtra", "mumbai"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "79", circles: &["gujarat", "rajasthan"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "81", circles: &["delhi", "haryana"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "89", circles: &["karnataka", "andhra-pradesh"] },
    OperatorPrefix { operator: OperatorId::Jio, prefix: "93", circles: &["madhya-pradesh", "maharashtra"] },

    // =========================================================================
    // AIRTEL
    // =========================================================================
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "70", circles: &["delhi", "up-west"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "78", circles: &["odisha", "west-bengal"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "80", circles: &["karnataka"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "81", circles: &["up-east", "bihar"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "96", circles: &["up-east", "delhi"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "97", circles: &["assam", "north-east"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "98", circles: &["delhi", "mumbai", "kolkata"] },
    OperatorPrefix { operator: OperatorId::Airtel, prefix: "99", circles: &["delhi", "haryana"] },

    // =========================================================================
    // VI
    // =========================================================================
    OperatorPrefix { operator: OperatorId::Vi, prefix: "73", circles: &["madhya-pradesh", "gujarat"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "75", circles: &["up-west", "rajasthan"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "90", circles: &["mumbai", "maharashtra"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "91", circles: &["kerala", "tamil-nadu"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "95", circles: &["up-east", "bihar"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "96", circles: &["maharashtra", "gujarat"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "98", circles: &["kolkata", "west-bengal"] },
    OperatorPrefix { operator: OperatorId::Vi, prefix: "99", circles: &["mumbai", "gujarat"] },

    // =========================================================================
    // BSNL
    // =========================================================================
    OperatorPrefix { operator: OperatorId::Bsnl, prefix: "62", circles: &["himachal-pradesh", "punjab"] },
    OperatorPrefix { operator: OperatorId::Bsnl, prefix: "68", circles: &["odisha"] },
    OperatorPrefix { operator: OperatorId::Bsnl, prefix: "94", circles: &["tamil-nadu", "kerala", "karnataka"] },
    OperatorPrefix { operator: OperatorId::Bsnl, prefix: "95", circles: &["west-bengal", "assam"] },

    // =========================================================================
    // MTNL (Delhi and Mumbai metros only)
    // =========================================================================
    OperatorPrefix { operator: OperatorId::Mtnl, prefix: "91", circles: &["mumbai"] },
    OperatorPrefix { operator: OperatorId::Mtnl, prefix: "98", circles: &["delhi", "mumbai"] },
];

/// Contested series with a contractual owner
pub const PRIORITY_PREFIXES: &[PriorityPrefix] = &[
    PriorityPrefix { prefix: "62", operator: OperatorId::Jio },
    PriorityPrefix { prefix: "70", operator: OperatorId::Jio },
    PriorityPrefix { prefix: "75", operator: OperatorId::Vi },
    // 77 is owned by Jio but has no circle data yet
    PriorityPrefix { prefix: "77", operator: OperatorId::Jio },
    PriorityPrefix { prefix: "94", operator: OperatorId::Bsnl },
    PriorityPrefix { prefix: "96", operator: OperatorId::Airtel },
    PriorityPrefix { prefix: "98", operator: OperatorId::Airtel },
];

/// Exact series assignments
pub const SPECIFIC_PREFIXES: &[SpecificPrefix] = &[
    SpecificPrefix { prefix: "6000", operator: OperatorId::Bsnl, circle: "delhi" },
    SpecificPrefix { prefix: "635", operator: OperatorId::Bsnl, circle: "kerala" },
    SpecificPrefix { prefix: "700", operator: OperatorId::Jio, circle: "bihar" },
    SpecificPrefix { prefix: "7000", operator: OperatorId::Jio, circle: "madhya-pradesh" },
    SpecificPrefix { prefix: "8199", operator: OperatorId::Jio, circle: "delhi" },
    // MTNL Dolphin series
    SpecificPrefix { prefix: "9868", operator: OperatorId::Mtnl, circle: "delhi" },
    SpecificPrefix { prefix: "9869", operator: OperatorId::Mtnl, circle: "mumbai" },
];

/// Coarse default by leading digit; covers the whole valid 6-9 range
pub const FIRST_DIGIT_FALLBACK: &[(char, OperatorId)] = &[
    ('6', OperatorId::Jio),
    ('7', OperatorId::Jio),
    ('8', OperatorId::Airtel),
    ('9', OperatorId::Vi),
];

/// Circles of an operator's 2-digit series, most likely first
pub fn operator_circles(operator: OperatorId, prefix: &str) -> Option<&'static [&'static str]> {
    PREFIX_TABLE
        .iter()
        .find(|row| row.operator == operator && row.prefix == prefix)
        .map(|row| row.circles)
}

/// Contractual owner of a contested 2-digit series
pub fn priority_operator(prefix: &str) -> Option<OperatorId> {
    PRIORITY_PREFIXES
        .iter()
        .find(|row| row.prefix == prefix)
        .map(|row| row.operator)
}

/// Exact (operator, circle) for a 3/4-digit series
pub fn specific_match(prefix: &str) -> Option<(OperatorId, &'static str)> {
    SPECIFIC_PREFIXES
        .iter()
        .find(|row| row.prefix == prefix)
        .map(|row| (row.operator, row.circle))
}

/// Default operator for a leading digit
pub fn fallback_operator(first_digit: char) -> Option<OperatorId> {
    FIRST_DIGIT_FALLBACK
        .iter()
        .find(|(digit, _)| *digit == first_digit)
        .map(|(_, operator)| *operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_circles() {
        assert_eq!(
            operator_circles(OperatorId::Vi, "75"),
            Some(&["up-west", "rajasthan"][..])
        );
        assert_eq!(operator_circles(OperatorId::Jio, "77"), None);
        assert_eq!(operator_circles(OperatorId::Mtnl, "91"), Some(&["mumbai"][..]));
    }

    #[test]
    fn test_priority_operator() {
        assert_eq!(priority_operator("75"), Some(OperatorId::Vi));
        assert_eq!(priority_operator("98"), Some(OperatorId::Airtel));
        assert_eq!(priority_operator("81"), None);
    }

    #[test]
    fn test_specific_match() {
        assert_eq!(specific_match("8199"), Some((OperatorId::Jio, "delhi")));
        assert_eq!(specific_match("9869"), Some((OperatorId::Mtnl, "mumbai")));
        assert_eq!(specific_match("81"), None);
    }

    #[test]
    fn test_fallback_covers_valid_range() {
        for digit in ['6', '7', '8', '9'] {
            assert!(fallback_operator(digit).is_some(), "no fallback for {}", digit);
        }
        assert_eq!(fallback_operator('5'), None);
    }

    #[test]
    fn test_no_empty_circle_lists() {
        for row in PREFIX_TABLE {
            assert!(
                !row.circles.is_empty(),
                "{:?} prefix {} has no circles",
                row.operator,
                row.prefix
            );
        }
    }

    #[test]
    fn test_prefix_shapes() {
        for row in PREFIX_TABLE {
            assert_eq!(row.prefix.len(), 2);
            assert!(row.prefix.chars().all(|c| c.is_ascii_digit()));
        }
        for row in PRIORITY_PREFIXES {
            assert_eq!(row.prefix.len(), 2);
        }
        for row in SPECIFIC_PREFIXES {
            assert!(row.prefix.len() == 3 || row.prefix.len() == 4);
        }
    }

    #[test]
    fn test_table_circles_are_known() {
        use super::super::circles::CIRCLES;
        let known = |code: &str| CIRCLES.iter().any(|c| c.code == code);
        for row in PREFIX_TABLE {
            for circle in row.circles {
                assert!(known(circle), "unknown circle {} in prefix table", circle);
            }
        }
        for row in SPECIFIC_PREFIXES {
            assert!(known(row.circle), "unknown circle {}", row.circle);
        }
    }
}
