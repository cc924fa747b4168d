use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Structured name of a person
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

/// Profile of the logged-in person
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct Person {
    /// Person identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Structured name
    #[serde(default)]
    pub name: Option<PersonName>,
    /// Primary email address
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,
    /// Birthday as reported by the service
    #[serde(default)]
    pub birthday: Option<String>,
    /// Investor classification
    #[serde(rename = "investorType", default)]
    pub investor_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_with_nested_name() {
        let person: Person = serde_json::from_value(json!({
            "id": 7,
            "name": {"firstName": "Ada", "lastName": "Lovelace"},
            "emailAddress": "ada@example.com"
        }))
        .unwrap();

        assert_eq!(person.id, Some(7));
        assert_eq!(
            person.name.as_ref().and_then(|n| n.first_name.as_deref()),
            Some("Ada")
        );
        assert_eq!(person.email_address.as_deref(), Some("ada@example.com"));
    }
}
