mod attachment;
mod collection_name;
mod conversation;
mod message;
mod message_kind;
mod participant;
mod storage_path;

pub use attachment::{MediaAttachment, Share};
pub use collection_name::{CollectionName, NameError};
pub use conversation::Conversation;
pub use message::Message;
pub use message_kind::MessageKind;
pub use participant::Participant;
pub use storage_path::StoragePath;
