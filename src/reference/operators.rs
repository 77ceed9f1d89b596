// Telecom Service Providers participating in Indian MNP
// Source: DoT unified license list and TRAI MNP regulations
//
// Fields:
// - id: stable operator identifier used throughout the crate
// - name: short display name
// - full_name: registered company name
// - limited_to: circle codes the operator serves; empty = nationwide

use serde::{Deserialize, Serialize};

/// Stable operator identifier
///
/// The discriminant order is also the fixed precedence order used to break
/// ties when several operators claim the same number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorId {
    Jio,
    Airtel,
    Vi,
    Bsnl,
    Mtnl,
}

impl OperatorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorId::Jio => "jio",
            OperatorId::Airtel => "airtel",
            OperatorId::Vi => "vi",
            OperatorId::Bsnl => "bsnl",
            OperatorId::Mtnl => "mtnl",
        }
    }

    /// Metadata row for this operator
    pub fn info(&self) -> &'static OperatorInfo {
        // OPERATORS is laid out in enum order
        match self {
            OperatorId::Jio => &OPERATORS[0],
            OperatorId::Airtel => &OPERATORS[1],
            OperatorId::Vi => &OPERATORS[2],
            OperatorId::Bsnl => &OPERATORS[3],
            OperatorId::Mtnl => &OPERATORS[4],
        }
    }

    /// Parse an operator id from its lowercase string form
    pub fn parse(s: &str) -> Option<OperatorId> {
        match s.to_lowercase().as_str() {
            "jio" => Some(OperatorId::Jio),
            "airtel" => Some(OperatorId::Airtel),
            "vi" | "vodafone-idea" => Some(OperatorId::Vi),
            "bsnl" => Some(OperatorId::Bsnl),
            "mtnl" => Some(OperatorId::Mtnl),
            _ => None,
        }
    }
}

/// Tie-break order for ambiguous prefix claims: jio > airtel > vi > bsnl > mtnl
pub const OPERATOR_PRECEDENCE: &[OperatorId] = &[
    OperatorId::Jio,
    OperatorId::Airtel,
    OperatorId::Vi,
    OperatorId::Bsnl,
    OperatorId::Mtnl,
];

/// Operator metadata
#[derive(Debug, Clone, Serialize)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub name: &'static str,
    pub full_name: &'static str,
    /// Circle codes the operator serves; empty slice means nationwide
    pub limited_to: &'static [&'static str],
}

impl OperatorInfo {
    /// Whether this operator offers service in the given circle
    pub fn operates_in(&self, circle: &str) -> bool {
        self.limited_to.is_empty() || self.limited_to.contains(&circle)
    }
}

/// All operators known to the porting flow
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo {
        id: OperatorId::Jio,
        name: "Jio",
        full_name: "Reliance Jio Infocomm Ltd",
        limited_to: &[],
    },
    OperatorInfo {
        id: OperatorId::Airtel,
        name: "Airtel",
        full_name: "Bharti Airtel Ltd",
        limited_to: &[],
    },
    OperatorInfo {
        id: OperatorId::Vi,
        name: "Vi",
        full_name: "Vodafone Idea Ltd",
        limited_to: &[],
    },
    OperatorInfo {
        id: OperatorId::Bsnl,
        name: "BSNL",
        full_name: "Bharat Sanchar Nigam Ltd",
        limited_to: &[],
    },
    // MTNL holds licenses for the Delhi and Mumbai metros only
    OperatorInfo {
        id: OperatorId::Mtnl,
        name: "MTNL",
        full_name: "Mahanagar Telephone Nigam Ltd",
        limited_to: &["delhi", "mumbai"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for info in OPERATORS {
            assert_eq!(OperatorId::parse(info.id.as_str()), Some(info.id));
        }
        assert_eq!(OperatorId::parse("JIO"), Some(OperatorId::Jio));
        assert_eq!(OperatorId::parse("unknown"), None);
    }

    #[test]
    fn test_info_matches_enum_order() {
        for info in OPERATORS {
            assert_eq!(info.id.info().id, info.id);
        }
    }

    #[test]
    fn test_precedence_covers_all_operators() {
        assert_eq!(OPERATOR_PRECEDENCE.len(), OPERATORS.len());
        for info in OPERATORS {
            assert!(OPERATOR_PRECEDENCE.contains(&info.id));
        }
    }

    #[test]
    fn test_mtnl_metro_only() {
        let mtnl = OPERATORS.iter().find(|o| o.id == OperatorId::Mtnl).unwrap();
        assert!(mtnl.operates_in("delhi"));
        assert!(mtnl.operates_in("mumbai"));
        assert!(!mtnl.operates_in("karnataka"));

        let jio = OPERATORS.iter().find(|o| o.id == OperatorId::Jio).unwrap();
        assert!(jio.operates_in("karnataka"));
    }
}
