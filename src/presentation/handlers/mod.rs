mod collections;
mod delete;
mod health;
mod messages;
mod upload;

pub use collections::list_collections_handler;
pub use delete::delete_collection_handler;
pub use health::health_handler;
pub use messages::{get_messages_handler, get_photo_handler};
pub use upload::upload_handler;
