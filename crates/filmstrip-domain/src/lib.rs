pub mod card;
pub mod likes;
pub mod search;

pub use card::ImageCard;
pub use likes::{LikeEntry, LikeList};
pub use search::{CardMatcher, CompositeMatcher, LabelMatcher, UrlMatcher};
