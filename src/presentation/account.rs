use crate::model::envelope::ApiList;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One aggregated account as returned by the accounts endpoint
///
/// The aggregator fills fields unevenly across institutions; everything
/// beyond the identifier is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Identifier of the account within the user's profile
    #[serde(rename = "userAccountId")]
    pub user_account_id: Option<i64>,
    /// Display name of the account
    #[serde(default)]
    pub name: Option<String>,
    /// Name the institution reported before any user rename
    #[serde(rename = "originalName", default)]
    pub original_name: Option<String>,
    /// Name of the holding institution
    #[serde(rename = "firmName", default)]
    pub firm_name: Option<String>,
    /// Account type (e.g. "401K", "CHECKING")
    #[serde(rename = "accountType", default)]
    pub account_type: Option<String>,
    /// Coarse account grouping (e.g. "BANK", "INVESTMENT")
    #[serde(rename = "accountTypeGroup", default)]
    pub account_type_group: Option<String>,
    /// Product classification reported by the aggregator
    #[serde(rename = "productType", default)]
    pub product_type: Option<String>,
    /// Current balance
    #[serde(default)]
    pub balance: Option<f64>,
    /// Currency of the balance
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the account is held at the aggregator itself
    #[serde(rename = "isOnUs", default)]
    pub is_on_us: Option<bool>,
    /// Whether the account was entered manually rather than aggregated
    #[serde(rename = "isManual", default)]
    pub is_manual: Option<bool>,
    /// Date the account was closed, empty while open
    #[serde(rename = "closedDate", default)]
    pub closed_date: Option<String>,
    /// Epoch seconds of the last successful aggregation
    #[serde(rename = "lastRefreshed", default)]
    pub last_refreshed: Option<i64>,
}

impl fmt::Display for ApiList<Account> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("NAME"),
            Cell::new("FIRM"),
            Cell::new("TYPE"),
            Cell::new("BALANCE"),
            Cell::new("CURRENCY"),
        ]));

        for account in self.iter() {
            let name = account.name.clone().unwrap_or_else(|| "-".to_string());
            let name = if name.len() > 30 {
                format!("{}...", &name[0..27])
            } else {
                name
            };
            let firm = account.firm_name.clone().unwrap_or_else(|| "-".to_string());
            let kind = account
                .account_type
                .clone()
                .unwrap_or_else(|| "-".to_string());
            let balance = account
                .balance
                .map(|b| format!("{b:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let currency = account.currency.clone().unwrap_or_else(|| "-".to_string());

            table.add_row(Row::new(vec![
                Cell::new(&name),
                Cell::new(&firm),
                Cell::new(&kind),
                Cell::new(&balance),
                Cell::new(&currency),
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
    fn test_account_deserialize_sparse() {
        let account: Account = serde_json::from_value(json!({
            "userAccountId": 42,
            "name": "Everyday Checking",
            "balance": 1510.25
        }))
        .unwrap();

        assert_eq!(account.user_account_id, Some(42));
        assert_eq!(account.name.as_deref(), Some("Everyday Checking"));
        assert_eq!(account.balance, Some(1510.25));
        assert!(account.firm_name.is_none());
    }

    #[test]
    fn test_account_list_display_contains_rows() {
        let raw = json!({
            "spHeader": {},
            "spData": {"accounts": [
                {"userAccountId": 1, "name": "Brokerage", "firmName": "Acme", "balance": 10.0}
            ]}
        });
        let list: ApiList<Account> = ApiList::from_envelope(raw, Some("accounts")).unwrap();
        let rendered = list.to_string();
        assert!(rendered.contains("Brokerage"));
        assert!(rendered.contains("Acme"));
    }
}
