use beautygpt_model::{ChatReply, ErrorKind};
use serde::{Deserialize, Serialize};

/// How the fake assistant answers one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// Answer successfully with this reply.
    #[serde(rename = "reply")]
    Reply(ChatReply),
    /// Fail the request with an error of this kind.
    #[serde(rename = "failure")]
    Failure(ErrorKind),
}

impl PresetReply {
    /// Creates a successful text-only preset.
    #[inline]
    pub fn text<S: Into<String>>(response: S) -> Self {
        Self::Reply(ChatReply::text(response))
    }
}

impl From<ChatReply> for PresetReply {
    #[inline]
    fn from(reply: ChatReply) -> Self {
        Self::Reply(reply)
    }
}
