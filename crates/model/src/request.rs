use serde::{Deserialize, Serialize};

/// The author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person chatting.
    User,
    /// The remote assistant.
    Assistant,
}

/// A previous turn, as sent back to the assistant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who wrote the message.
    pub role: Role,
    /// The text of the message.
    pub content: String,
}

impl HistoryEntry {
    /// Creates a new entry.
    #[inline]
    pub fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A request to be sent to the assistant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The message being sent now.
    pub message: String,
    /// Earlier turns of the conversation, oldest first.
    ///
    /// This never contains `message` itself.
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let req = ChatRequest {
            message: "E per la sera?".to_owned(),
            history: vec![
                HistoryEntry::new(Role::User, "Ho la pelle secca"),
                HistoryEntry::new(Role::Assistant, "Prova una crema ricca."),
            ],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "E per la sera?",
                "history": [
                    { "role": "user", "content": "Ho la pelle secca" },
                    { "role": "assistant", "content": "Prova una crema ricca." }
                ]
            })
        );
    }
}
