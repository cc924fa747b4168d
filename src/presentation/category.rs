use serde::{Deserialize, Serialize};

/// One entry of the transaction category catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCategory {
    /// Identifier referenced by transactions
    #[serde(rename = "transactionCategoryId")]
    pub transaction_category_id: Option<i64>,
    /// Category name
    #[serde(default)]
    pub name: Option<String>,
    /// Longer description shown in the UI
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    /// Category class (e.g. "EXPENSE", "INCOME")
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
    /// Whether the user may edit this category
    #[serde(rename = "isEditable", default)]
    pub is_editable: Option<bool>,
    /// Whether the category was created by the user
    #[serde(rename = "isCustom", default)]
    pub is_custom: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_type_rename() {
        let category: TransactionCategory = serde_json::from_value(json!({
            "transactionCategoryId": 21,
            "name": "Groceries",
            "type": "EXPENSE"
        }))
        .unwrap();

        assert_eq!(category.transaction_category_id, Some(21));
        assert_eq!(category.category_type.as_deref(), Some("EXPENSE"));
    }
}
