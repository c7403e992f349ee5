pub mod json_likes_store;

pub use json_likes_store::JsonLikesStore;
