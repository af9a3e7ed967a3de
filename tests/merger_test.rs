use chatvault::domain::{Conversation, Message, MessageKind, Participant};
use chatvault::infrastructure::decoding::{merge_conversations, MergeError};

fn message(sender: &str, timestamp_ms: Option<i64>, content: &str) -> Message {
    Message {
        sender_name: sender.to_string(),
        timestamp_ms,
        timestamp: None,
        content: Some(content.to_string()),
        photos: None,
        videos: None,
        audio_files: None,
        share: None,
        kind: MessageKind::Generic,
    }
}

fn conversation(participants: &[&str], messages: Vec<Message>) -> Conversation {
    Conversation {
        participants: participants.iter().map(|p| Participant::new(*p)).collect(),
        title: participants.first().map(|p| p.to_string()).unwrap_or_default(),
        is_still_participant: true,
        thread_path: "inbox/thread".to_string(),
        magic_words: Vec::new(),
        messages,
    }
}

fn contents(conversation: &Conversation) -> Vec<&str> {
    conversation
        .messages
        .iter()
        .filter_map(|m| m.content.as_deref())
        .collect()
}

#[test]
fn given_two_interleaved_files_when_merging_then_messages_sort_by_timestamp() {
    let file1 = conversation(
        &["Alice", "Bob"],
        vec![
            message("Alice", Some(100), "m100"),
            message("Bob", Some(300), "m300"),
        ],
    );
    let file2 = conversation(
        &["Alice", "Bob"],
        vec![
            message("Alice", Some(200), "m200"),
            message("Bob", Some(400), "m400"),
        ],
    );

    let merged = merge_conversations(vec![file1, file2]).unwrap();

    assert_eq!(contents(&merged), vec!["m100", "m200", "m300", "m400"]);
}

#[test]
fn given_disjoint_files_when_merging_in_either_order_then_result_order_is_the_same() {
    let early = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(10), "e1"),
            message("Alice", Some(20), "e2"),
        ],
    );
    let late = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(30), "l1"),
            message("Alice", Some(40), "l2"),
        ],
    );

    let forward = merge_conversations(vec![early.clone(), late.clone()]).unwrap();
    let backward = merge_conversations(vec![late, early]).unwrap();

    assert_eq!(contents(&forward), vec!["e1", "e2", "l1", "l2"]);
    assert_eq!(contents(&forward), contents(&backward));
}

#[test]
fn given_equal_timestamps_when_merging_then_concatenation_order_is_preserved() {
    let file1 = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(100), "first-a"),
            message("Alice", Some(100), "first-b"),
        ],
    );
    let file2 = conversation(&["Alice"], vec![message("Alice", Some(100), "second-a")]);

    let merged = merge_conversations(vec![file1, file2]).unwrap();

    assert_eq!(contents(&merged), vec!["first-a", "first-b", "second-a"]);
}

#[test]
fn given_single_file_when_merging_then_result_is_that_file_sorted() {
    let file = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(300), "later"),
            message("Alice", Some(100), "earlier"),
        ],
    );

    let merged = merge_conversations(vec![file]).unwrap();

    assert_eq!(contents(&merged), vec!["earlier", "later"]);
}

#[test]
fn given_message_without_timestamp_when_merging_then_it_sorts_first_and_keeps_no_display() {
    let file = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(100), "stamped"),
            message("Alice", None, "unstamped"),
        ],
    );

    let merged = merge_conversations(vec![file]).unwrap();

    assert_eq!(contents(&merged), vec!["unstamped", "stamped"]);
    assert!(merged.messages[0].timestamp.is_none());
}

#[test]
fn given_merged_messages_then_display_timestamp_matches_timestamp_ms() {
    let file = conversation(
        &["Alice"],
        vec![
            message("Alice", Some(0), "epoch"),
            message("Alice", Some(1_700_000_000_000), "late-2023"),
        ],
    );

    let merged = merge_conversations(vec![file]).unwrap();

    assert_eq!(merged.messages[0].timestamp.as_deref(), Some("00:00 01/01/1970"));
    assert_eq!(merged.messages[1].timestamp.as_deref(), Some("22:13 14/11/2023"));
}

#[test]
fn given_multiple_files_when_merging_then_metadata_comes_from_the_first() {
    let mut file1 = conversation(&["Alice", "Bob"], vec![]);
    file1.title = "Alice".to_string();
    file1.thread_path = "inbox/alice_abc".to_string();
    file1.magic_words = vec!["abracadabra".to_string()];

    let mut file2 = conversation(&["Someone", "Else"], vec![]);
    file2.title = "Someone".to_string();
    file2.is_still_participant = false;

    let merged = merge_conversations(vec![file1, file2]).unwrap();

    assert_eq!(merged.title, "Alice");
    assert_eq!(merged.thread_path, "inbox/alice_abc");
    assert_eq!(merged.magic_words, vec!["abracadabra".to_string()]);
    assert!(merged.is_still_participant);
    assert_eq!(merged.participants[0], Participant::new("Alice"));
}

#[test]
fn given_no_files_when_merging_then_fails_with_empty() {
    let error = merge_conversations(Vec::new()).unwrap_err();

    assert!(matches!(error, MergeError::Empty));
}

#[test]
fn given_file_without_participants_when_merging_then_fails_with_index() {
    let file1 = conversation(&["Alice"], vec![message("Alice", Some(100), "hi")]);
    let file2 = conversation(&[], vec![message("Alice", Some(200), "again")]);

    let error = merge_conversations(vec![file1, file2]).unwrap_err();

    assert!(matches!(error, MergeError::MissingParticipants { index: 1 }));
}
