//! Aggregation engine - derived summaries over stored records.
//!
//! Pure folds with no side effects: the services fetch the scoped rows,
//! these functions group and sum them. Deterministic given the same
//! snapshot, which is what makes them unit-testable without a database.

use std::collections::BTreeMap;

use crate::models::financial_entry::{DailySummaryRow, FinancialEntry};
use crate::models::fuel_log::{FuelLog, VehicleSpendRow};

/// Group financial entries by calendar day and sum revenue and expenses.
///
/// Profit is derived per day as `revenue - expenses`. Output is ordered
/// ascending by day; days with no entries are omitted rather than
/// zero-filled, so callers must handle a sparse series.
pub fn daily_summary(entries: &[FinancialEntry]) -> Vec<DailySummaryRow> {
    // BTreeMap keeps days sorted ascending as a side effect of grouping
    let mut by_day: BTreeMap<chrono::NaiveDate, (i64, i64)> = BTreeMap::new();

    for entry in entries {
        let totals = by_day.entry(entry.date).or_insert((0, 0));
        totals.0 += entry.revenue_cents;
        totals.1 += entry.expense_cents;
    }

    by_day
        .into_iter()
        .map(|(day, (revenue, expenses))| DailySummaryRow {
            day,
            revenue,
            expenses,
            profit: revenue - expenses,
        })
        .collect()
}

/// Group fuel logs by vehicle and sum the cost.
///
/// One row per vehicle, ordered ascending by vehicle name so the output
/// is deterministic.
pub fn total_spent_per_vehicle(logs: &[FuelLog]) -> Vec<VehicleSpendRow> {
    let mut by_vehicle: BTreeMap<&str, i64> = BTreeMap::new();

    for log in logs {
        *by_vehicle.entry(log.vehicle_name.as_str()).or_insert(0) += log.cost_cents;
    }

    by_vehicle
        .into_iter()
        .map(|(vehicle_name, total_spent)| VehicleSpendRow {
            vehicle_name: vehicle_name.to_string(),
            total_spent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn entry(day: (i32, u32, u32), revenue_cents: i64, expense_cents: i64) -> FinancialEntry {
        FinancialEntry {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(day.0, day.1, day.2).unwrap(),
            revenue_cents,
            expense_cents,
            created_at: Utc::now(),
        }
    }

    fn log(vehicle: &str, cost_cents: i64) -> FuelLog {
        FuelLog {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            vehicle_name: vehicle.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            liters: 10.0,
            cost_cents,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn daily_summary_of_nothing_is_empty() {
        assert!(daily_summary(&[]).is_empty());
    }

    #[test]
    fn daily_summary_merges_same_day_entries() {
        let rows = daily_summary(&[
            entry((2025, 12, 20), 1000, 400),
            entry((2025, 12, 20), 200, 100),
        ]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].revenue, 1200);
        assert_eq!(rows[0].expenses, 500);
        assert_eq!(rows[0].profit, 700);
    }

    #[test]
    fn daily_summary_sorts_days_ascending() {
        // Input deliberately out of order
        let rows = daily_summary(&[
            entry((2025, 12, 22), 300, 100),
            entry((2025, 12, 20), 100, 50),
            entry((2025, 12, 21), 200, 80),
        ]);

        let days: Vec<_> = rows.iter().map(|r| r.day).collect();
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(days, sorted);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn daily_summary_omits_missing_days() {
        let rows = daily_summary(&[
            entry((2025, 12, 20), 100, 0),
            entry((2025, 12, 25), 100, 0),
        ]);

        // Gap between the 20th and the 25th is not zero-filled
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn daily_summary_profit_matches_revenue_minus_expenses() {
        let rows = daily_summary(&[
            entry((2025, 12, 20), 1000, 400),
            entry((2025, 12, 21), 50, 200),
        ]);

        for row in rows {
            assert_eq!(row.profit, row.revenue - row.expenses);
        }
    }

    #[test]
    fn vehicle_spend_sums_per_vehicle() {
        let rows = total_spent_per_vehicle(&[
            log("Lorry 1", 1000),
            log("Lorry 2", 500),
            log("Lorry 1", 250),
        ]);

        assert_eq!(
            rows,
            vec![
                VehicleSpendRow {
                    vehicle_name: "Lorry 1".to_string(),
                    total_spent: 1250,
                },
                VehicleSpendRow {
                    vehicle_name: "Lorry 2".to_string(),
                    total_spent: 500,
                },
            ]
        );
    }

    #[test]
    fn vehicle_spend_orders_by_vehicle_name() {
        let rows = total_spent_per_vehicle(&[
            log("Tractor", 100),
            log("Bike", 50),
            log("Lorry 1", 75),
        ]);

        let names: Vec<_> = rows.iter().map(|r| r.vehicle_name.as_str()).collect();
        assert_eq!(names, vec!["Bike", "Lorry 1", "Tractor"]);
    }

    #[test]
    fn vehicle_spend_of_nothing_is_empty() {
        assert!(total_spent_per_vehicle(&[]).is_empty());
    }
}
