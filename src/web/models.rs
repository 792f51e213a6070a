use serde::{Deserialize, Serialize};

/// One turn of the tenant's conversation, in the order it happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    pub action_key: String,
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
