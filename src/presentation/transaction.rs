use crate::model::envelope::ApiList;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One transaction as returned by the transactions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier of the transaction within the user's profile
    #[serde(rename = "userTransactionId")]
    pub user_transaction_id: Option<i64>,
    /// Account the transaction belongs to
    #[serde(rename = "userAccountId", default)]
    pub user_account_id: Option<i64>,
    /// Name of the account the transaction belongs to
    #[serde(rename = "accountName", default)]
    pub account_name: Option<String>,
    /// Signed amount
    #[serde(default)]
    pub amount: Option<f64>,
    /// Whether the amount is a credit
    #[serde(rename = "isCredit", default)]
    pub is_credit: Option<bool>,
    /// Day the transaction was booked
    #[serde(rename = "transactionDate", default)]
    pub transaction_date: Option<NaiveDate>,
    /// Cleaned description
    #[serde(default)]
    pub description: Option<String>,
    /// Description as reported by the institution
    #[serde(rename = "originalDescription", default)]
    pub original_description: Option<String>,
    /// Category the transaction is filed under
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<i64>,
    /// Posting status (e.g. "posted", "pending")
    #[serde(default)]
    pub status: Option<String>,
    /// Currency of the amount
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the aggregator flagged the transaction as a duplicate
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: Option<bool>,
}

impl fmt::Display for ApiList<Transaction> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("DATE"),
            Cell::new("DESCRIPTION"),
            Cell::new("AMOUNT"),
            Cell::new("CATEGORY"),
            Cell::new("STATUS"),
        ]));

        for tx in self.iter() {
            let date = tx
                .transaction_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            let description = tx.description.clone().unwrap_or_else(|| "-".to_string());
            let description = if description.len() > 40 {
                format!("{}...", &description[0..37])
            } else {
                description
            };
            let amount = tx
                .amount
                .map(|a| format!("{a:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let category = tx
                .category_id
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            let status = tx.status.clone().unwrap_or_else(|| "-".to_string());

            table.add_row(Row::new(vec![
                Cell::new(&date),
                Cell::new(&description),
                Cell::new(&amount),
                Cell::new(&category),
                Cell::new(&status),
            ]));
        }

        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_deserialize() {
        let tx: Transaction = serde_json::from_value(json!({
            "userTransactionId": 9000,
            "userAccountId": 42,
            "amount": -12.34,
            "isCredit": false,
            "transactionDate": "2024-06-15",
            "description": "Coffee",
            "categoryId": 21,
            "status": "posted"
        }))
        .unwrap();

        assert_eq!(tx.user_transaction_id, Some(9000));
        assert_eq!(
            tx.transaction_date,
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        assert_eq!(tx.amount, Some(-12.34));
    }
}
