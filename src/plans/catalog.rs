// Prepaid Plan Catalog
// Snapshot of published prepaid tariffs, one row per plan
//
// Prices are in whole rupees. Data allowances are in MB; daily plans set
// daily_data_mb, lump-sum plans set total_data_mb.

use serde::Serialize;

use crate::reference::operators::OperatorId;

/// One prepaid plan
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub operator: OperatorId,
    /// Stable plan identifier, "<operator>-<price>"
    pub id: &'static str,
    pub name: &'static str,
    pub price_inr: u32,
    pub validity_days: u16,
    pub daily_data_mb: Option<u32>,
    pub total_data_mb: Option<u32>,
    pub unlimited_voice: bool,
    pub sms_per_day: u16,
    pub perks: &'static [&'static str],
}

impl Plan {
    /// Average data per validity day in MB, whichever way the plan bundles it
    pub fn data_mb_per_day(&self) -> f64 {
        if let Some(daily) = self.daily_data_mb {
            return daily as f64;
        }
        match (self.total_data_mb, self.validity_days) {
            (Some(total), days) if days > 0 => total as f64 / days as f64,
            _ => 0.0,
        }
    }

    /// Effective cost per validity day in rupees
    pub fn price_per_day(&self) -> f64 {
        if self.validity_days == 0 {
            return self.price_inr as f64;
        }
        self.price_inr as f64 / self.validity_days as f64
    }
}

/// Published prepaid plans
pub const PLANS: &[Plan] = &[
    // =========================================================================
    // JIO
    // =========================================================================
    Plan { operator: OperatorId::Jio, id: "jio-155", name: "Value 155", price_inr: 155, validity_days: 24, daily_data_mb: None, total_data_mb: Some(2048), unlimited_voice: true, sms_per_day: 0, perks: &["JioTV"] },
    Plan { operator: OperatorId::Jio, id: "jio-239", name: "Freedom 239", price_inr: 239, validity_days: 28, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["JioTV", "JioCinema"] },
    Plan { operator: OperatorId::Jio, id: "jio-299", name: "Freedom 299", price_inr: 299, validity_days: 28, daily_data_mb: Some(2048), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["JioTV", "JioCinema"] },
    Plan { operator: OperatorId::Jio, id: "jio-666", name: "Freedom 666", price_inr: 666, validity_days: 84, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["JioTV", "JioCinema"] },
    Plan { operator: OperatorId::Jio, id: "jio-2999", name: "Annual 2999", price_inr: 2999, validity_days: 365, daily_data_mb: Some(2560), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["JioTV", "JioCinema", "JioCloud"] },

    // =========================================================================
    // AIRTEL
    // =========================================================================
    Plan { operator: OperatorId::Airtel, id: "airtel-179", name: "Smart 179", price_inr: 179, validity_days: 28, daily_data_mb: None, total_data_mb: Some(2048), unlimited_voice: true, sms_per_day: 0, perks: &["Wynk Music"] },
    Plan { operator: OperatorId::Airtel, id: "airtel-265", name: "Smart 265", price_inr: 265, validity_days: 28, daily_data_mb: Some(1024), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Airtel Thanks"] },
    Plan { operator: OperatorId::Airtel, id: "airtel-299", name: "Smart 299", price_inr: 299, validity_days: 28, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Airtel Thanks", "Free Hellotunes"] },
    Plan { operator: OperatorId::Airtel, id: "airtel-719", name: "Smart 719", price_inr: 719, validity_days: 84, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Airtel Thanks"] },
    Plan { operator: OperatorId::Airtel, id: "airtel-2999", name: "Annual 2999", price_inr: 2999, validity_days: 365, daily_data_mb: Some(2048), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Airtel Thanks", "Free Hellotunes"] },

    // =========================================================================
    // VI
    // =========================================================================
    Plan { operator: OperatorId::Vi, id: "vi-179", name: "Value 179", price_inr: 179, validity_days: 28, daily_data_mb: None, total_data_mb: Some(2048), unlimited_voice: true, sms_per_day: 0, perks: &[] },
    Plan { operator: OperatorId::Vi, id: "vi-269", name: "Hero 269", price_inr: 269, validity_days: 28, daily_data_mb: Some(1024), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Vi Movies & TV"] },
    Plan { operator: OperatorId::Vi, id: "vi-299", name: "Hero 299", price_inr: 299, validity_days: 28, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Binge All Night", "Weekend Data Rollover"] },
    Plan { operator: OperatorId::Vi, id: "vi-719", name: "Hero 719", price_inr: 719, validity_days: 84, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Weekend Data Rollover"] },
    Plan { operator: OperatorId::Vi, id: "vi-2899", name: "Annual 2899", price_inr: 2899, validity_days: 365, daily_data_mb: Some(1536), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &["Vi Movies & TV"] },

    // =========================================================================
    // BSNL
    // =========================================================================
    Plan { operator: OperatorId::Bsnl, id: "bsnl-107", name: "STV 107", price_inr: 107, validity_days: 35, daily_data_mb: None, total_data_mb: Some(3072), unlimited_voice: false, sms_per_day: 0, perks: &[] },
    Plan { operator: OperatorId::Bsnl, id: "bsnl-187", name: "STV 187", price_inr: 187, validity_days: 28, daily_data_mb: Some(2048), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &[] },
    Plan { operator: OperatorId::Bsnl, id: "bsnl-397", name: "STV 397", price_inr: 397, validity_days: 150, daily_data_mb: Some(2048), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &[] },
    Plan { operator: OperatorId::Bsnl, id: "bsnl-797", name: "STV 797", price_inr: 797, validity_days: 300, daily_data_mb: Some(2048), total_data_mb: None, unlimited_voice: true, sms_per_day: 100, perks: &[] },

    // =========================================================================
    // MTNL
    // =========================================================================
    Plan { operator: OperatorId::Mtnl, id: "mtnl-99", name: "Combo 99", price_inr: 99, validity_days: 21, daily_data_mb: None, total_data_mb: Some(1024), unlimited_voice: false, sms_per_day: 0, perks: &[] },
    Plan { operator: OperatorId::Mtnl, id: "mtnl-199", name: "Combo 199", price_inr: 199, validity_days: 28, daily_data_mb: Some(1024), total_data_mb: None, unlimited_voice: true, sms_per_day: 0, perks: &[] },
    Plan { operator: OperatorId::Mtnl, id: "mtnl-319", name: "Combo 319", price_inr: 319, validity_days: 54, daily_data_mb: Some(1024), total_data_mb: None, unlimited_voice: true, sms_per_day: 0, perks: &[] },
];

/// All plans for one operator, catalog order
pub fn plans_for(operator: OperatorId) -> Vec<&'static Plan> {
    PLANS.iter().filter(|p| p.operator == operator).collect()
}

/// Find a plan by its stable id
pub fn plan_by_id(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_has_plans() {
        use crate::reference::operators::OPERATORS;
        for info in OPERATORS {
            assert!(!plans_for(info.id).is_empty(), "{:?} has no plans", info.id);
        }
    }

    #[test]
    fn test_plan_ids_unique() {
        for (i, a) in PLANS.iter().enumerate() {
            for b in &PLANS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate plan id {}", a.id);
            }
        }
    }

    #[test]
    fn test_plan_by_id() {
        let plan = plan_by_id("jio-239").unwrap();
        assert_eq!(plan.price_inr, 239);
        assert!(plan_by_id("jio-1").is_none());
    }

    #[test]
    fn test_data_mb_per_day() {
        // Daily bundle
        assert_eq!(plan_by_id("jio-239").unwrap().data_mb_per_day(), 1536.0);
        // Lump sum spread over validity
        let value = plan_by_id("airtel-179").unwrap();
        assert!((value.data_mb_per_day() - 2048.0 / 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_plan_bundles_data() {
        for plan in PLANS {
            assert!(
                plan.daily_data_mb.is_some() || plan.total_data_mb.is_some(),
                "{} bundles no data",
                plan.id
            );
        }
    }
}
