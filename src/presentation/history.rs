use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of a per-account balance series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountHistory {
    /// Day the point belongs to
    pub date: NaiveDate,
    /// Account the point belongs to, absent for aggregate rows
    #[serde(rename = "userAccountId", default)]
    pub user_account_id: Option<i64>,
    /// Balance on that day
    #[serde(default)]
    pub balance: Option<f64>,
    /// Balance across all selected accounts on that day
    #[serde(rename = "aggregateBalance", default)]
    pub aggregate_balance: Option<f64>,
    /// Change against the previous day
    #[serde(rename = "dailyChangeAmount", default)]
    pub daily_change_amount: Option<f64>,
}

/// One point of the aggregated net worth series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworthHistory {
    /// Day the point belongs to
    pub date: NaiveDate,
    /// Net worth on that day
    #[serde(default)]
    pub networth: Option<f64>,
    /// Sum of asset balances
    #[serde(rename = "totalAssets", default)]
    pub total_assets: Option<f64>,
    /// Sum of liability balances
    #[serde(rename = "totalLiabilities", default)]
    pub total_liabilities: Option<f64>,
    /// Net worth change against the previous day
    #[serde(rename = "oneDayNetworthChange", default)]
    pub one_day_networth_change: Option<f64>,
}

/// One point of a per-account summary series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Day the point belongs to
    pub date: NaiveDate,
    /// Account the point belongs to, absent for aggregate rows
    #[serde(rename = "userAccountId", default)]
    pub user_account_id: Option<i64>,
    /// Balance on that day
    #[serde(default)]
    pub balance: Option<f64>,
    /// Income recorded on that day
    #[serde(default)]
    pub income: Option<f64>,
    /// Expense recorded on that day
    #[serde(default)]
    pub expense: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_history_date_parses_iso() {
        let point: AccountHistory = serde_json::from_value(json!({
            "date": "2024-03-01",
            "userAccountId": 5,
            "balance": 99.5,
            "dailyChangeAmount": -0.5
        }))
        .unwrap();

        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(point.daily_change_amount, Some(-0.5));
    }

    #[test]
    fn test_networth_history_sparse() {
        let point: NetworthHistory =
            serde_json::from_value(json!({"date": "2024-03-01", "networth": 1000.0})).unwrap();
        assert_eq!(point.networth, Some(1000.0));
        assert!(point.total_assets.is_none());
    }
}
