pub mod config;
pub mod errors;
pub mod pipeline;
pub mod security;
pub mod snapshot;
pub mod uploader;
pub mod vk;
