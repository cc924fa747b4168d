use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Call-to-action attached to a user message
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct MessageAction {
    /// Action label
    #[serde(default)]
    pub title: Option<String>,
    /// Target URL of the action
    #[serde(default)]
    pub url: Option<String>,
}

/// One message addressed to the user
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct UserMessage {
    /// Message identifier
    #[serde(rename = "userMessageId")]
    pub user_message_id: Option<i64>,
    /// Template the message was rendered from
    #[serde(default)]
    pub template: Option<String>,
    /// Message title
    #[serde(default)]
    pub title: Option<String>,
    /// Short summary shown in lists
    #[serde(default)]
    pub summary: Option<String>,
    /// Attached actions
    #[serde(default)]
    pub action: Vec<MessageAction>,
    /// Severity reported by the service
    #[serde(default)]
    pub severity: Option<String>,
    /// Epoch milliseconds when the message was created
    #[serde(rename = "createdDate", default)]
    pub created_date: Option<i64>,
    /// Whether the message is stale
    #[serde(rename = "isStale", default)]
    pub is_stale: Option<bool>,
}
