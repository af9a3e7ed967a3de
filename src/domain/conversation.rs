use serde::{Deserialize, Serialize};

use super::{Message, Participant};

/// One decoded export file, or the merged result of several files covering
/// the same thread. String fields hold valid UTF-8 after the byte-escape
/// repair pass, whatever the source bytes looked like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_true")]
    pub is_still_participant: bool,
    #[serde(default)]
    pub thread_path: String,
    #[serde(default)]
    pub magic_words: Vec<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

fn default_true() -> bool {
    true
}
