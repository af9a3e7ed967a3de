use crate::domain::Conversation;

/// Combine the decoded files of one conversation into a single ordered
/// history. The export format splits long threads across files; metadata
/// (participants, title, thread path, magic words) is taken from the first
/// file, and all message sequences are concatenated in input order and then
/// stably sorted ascending by `timestamp_ms`. Messages with equal timestamps
/// keep their concatenation order; messages without a timestamp sort first.
pub fn merge_conversations(inputs: Vec<Conversation>) -> Result<Conversation, MergeError> {
    for (index, conversation) in inputs.iter().enumerate() {
        if conversation.participants.is_empty() {
            return Err(MergeError::MissingParticipants { index });
        }
    }

    let mut inputs = inputs.into_iter();
    let Some(mut merged) = inputs.next() else {
        return Err(MergeError::Empty);
    };

    for conversation in inputs {
        merged.messages.extend(conversation.messages);
    }

    // Vec::sort_by_key is stable, which carries the concatenation order
    // through as the tie-break for equal timestamps.
    merged.messages.sort_by_key(|m| m.timestamp_ms);

    for message in &mut merged.messages {
        message.derive_display_timestamp();
    }

    Ok(merged)
}

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("no conversations to merge")]
    Empty,
    #[error("input file {index} has no participants")]
    MissingParticipants { index: usize },
}
