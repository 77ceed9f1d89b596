// Reference data module - operators, circles and number prefix allocations
// Source: DoT numbering plan, TRAI MNP regulations
//
// All tables are compile-time constants; the resolver and porting rules
// treat them as an immutable configuration artifact loaded once.

pub mod circles;
pub mod operators;
pub mod prefixes;

use std::collections::HashMap;
use std::sync::OnceLock;

use circles::{CircleInfo, CIRCLES};
use operators::{OperatorId, OperatorInfo, OPERATORS};

/// Lazily-initialized HashMap for O(1) circle lookup by code
static CIRCLE_MAP: OnceLock<HashMap<&'static str, &'static CircleInfo>> = OnceLock::new();

fn get_circle_map() -> &'static HashMap<&'static str, &'static CircleInfo> {
    CIRCLE_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(CIRCLES.len());
        for circle in CIRCLES {
            map.insert(circle.code, circle);
        }
        map
    })
}

/// Look up circle metadata by code
pub fn circle_info(code: &str) -> Option<&'static CircleInfo> {
    get_circle_map().get(code).copied()
}

/// Look up operator metadata
pub fn operator_info(id: OperatorId) -> &'static OperatorInfo {
    id.info()
}

/// All operators
pub fn get_all_operators() -> &'static [OperatorInfo] {
    OPERATORS
}

/// All circles
pub fn get_all_circles() -> &'static [CircleInfo] {
    CIRCLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_info() {
        let delhi = circle_info("delhi").unwrap();
        assert_eq!(delhi.name, "Delhi NCR");
        assert!(circle_info("narnia").is_none());
    }

    #[test]
    fn test_operator_info_total() {
        for info in OPERATORS {
            assert_eq!(operator_info(info.id).id, info.id);
        }
        assert_eq!(operator_info(OperatorId::Mtnl).name, "MTNL");
    }
}
