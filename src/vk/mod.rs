// VK side of the backup: identity lookup and profile photo collection

pub mod client;
pub mod identity;
pub mod models;
pub mod photos;

pub use client::{VkApi, VkClient};
pub use identity::resolve_user_id;
pub use photos::{collect_photos, PhotoRecord};
