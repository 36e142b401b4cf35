//! Revenue series and headline summary.

use super::merge_field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, e.g. `2025-03`.
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub this_month: f64,
    pub last_month: f64,
    pub this_quarter: f64,
    pub ytd: f64,
    pub pending_invoices: f64,
    pub overdue_invoices: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueData {
    /// Ordered oldest first.
    pub monthly: Vec<MonthlyRevenue>,
    pub summary: RevenueSummary,
}

impl RevenueData {
    /// Net of revenue minus expenses across all months.
    pub fn net_total(&self) -> f64 {
        self.monthly
            .iter()
            .map(|month| month.revenue - month.expenses)
            .sum()
    }
}

/// Replaces the monthly series and/or the summary wholesale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevenuePatch {
    pub monthly: Option<Vec<MonthlyRevenue>>,
    pub summary: Option<RevenueSummary>,
}

impl RevenuePatch {
    pub fn apply_to(self, revenue: &mut RevenueData) {
        merge_field(&mut revenue.monthly, self.monthly);
        merge_field(&mut revenue.summary, self.summary);
    }
}
