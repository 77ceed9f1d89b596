// Telecom licensing circles used for porting and tariff rules
// Source: DoT licensed service area list, TRAI MNP regulations
//
// Circle category (Metro/A/B/C) follows the DoT service-area
// classification. extended_upc marks the circles where TRAI grants a
// 30-day UPC validity window instead of the usual 4 days.

use serde::Serialize;

/// DoT service-area category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleCategory {
    Metro,
    A,
    B,
    C,
}

/// Telecom circle metadata
#[derive(Debug, Clone, Serialize)]
pub struct CircleInfo {
    /// Stable circle code used in the prefix tables
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
    pub category: CircleCategory,
    /// 30-day UPC validity instead of 4 days
    pub extended_upc: bool,
}

/// All 22 licensed service areas
pub const CIRCLES: &[CircleInfo] = &[
    CircleInfo { code: "andhra-pradesh", name: "Andhra Pradesh & Telangana", category: CircleCategory::A, extended_upc: false },
    CircleInfo { code: "assam", name: "Assam", category: CircleCategory::C, extended_upc: true },
    CircleInfo { code: "bihar", name: "Bihar & Jharkhand", category: CircleCategory::C, extended_upc: false },
    CircleInfo { code: "delhi", name: "Delhi NCR", category: CircleCategory::Metro, extended_upc: false },
    CircleInfo { code: "gujarat", name: "Gujarat", category: CircleCategory::A, extended_upc: false },
    CircleInfo { code: "haryana", name: "Haryana", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "himachal-pradesh", name: "Himachal Pradesh", category: CircleCategory::C, extended_upc: false },
    CircleInfo { code: "jammu-kashmir", name: "Jammu & Kashmir", category: CircleCategory::C, extended_upc: true },
    CircleInfo { code: "karnataka", name: "Karnataka", category: CircleCategory::A, extended_upc: false },
    CircleInfo { code: "kerala", name: "Kerala", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "kolkata", name: "Kolkata", category: CircleCategory::Metro, extended_upc: false },
    CircleInfo { code: "madhya-pradesh", name: "Madhya Pradesh & Chhattisgarh", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "maharashtra", name: "Maharashtra & Goa", category: CircleCategory::A, extended_upc: false },
    CircleInfo { code: "mumbai", name: "Mumbai", category: CircleCategory::Metro, extended_upc: false },
    CircleInfo { code: "north-east", name: "North East", category: CircleCategory::C, extended_upc: true },
    CircleInfo { code: "odisha", name: "Odisha", category: CircleCategory::C, extended_upc: false },
    CircleInfo { code: "punjab", name: "Punjab", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "rajasthan", name: "Rajasthan", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "tamil-nadu", name: "Tamil Nadu & Chennai", category: CircleCategory::A, extended_upc: false },
    CircleInfo { code: "up-east", name: "UP East", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "up-west", name: "UP West & Uttarakhand", category: CircleCategory::B, extended_upc: false },
    CircleInfo { code: "west-bengal", name: "West Bengal", category: CircleCategory::B, extended_upc: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_count() {
        assert_eq!(CIRCLES.len(), 22);
    }

    #[test]
    fn test_codes_unique() {
        for (i, a) in CIRCLES.iter().enumerate() {
            for b in &CIRCLES[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate circle code {}", a.code);
            }
        }
    }

    #[test]
    fn test_extended_upc_circles() {
        let extended: Vec<&str> = CIRCLES
            .iter()
            .filter(|c| c.extended_upc)
            .map(|c| c.code)
            .collect();
        assert_eq!(extended, vec!["assam", "jammu-kashmir", "north-east"]);
    }
}
