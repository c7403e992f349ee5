pub mod carousel;
pub mod config;
pub mod error;
pub mod input;
pub mod pager;
pub mod result;

pub use carousel::{Carousel, CarouselConfig, Geometry, Slot};
pub use config::AppConfig;
pub use error::FilmstripError;
pub use input::InputState;
pub use pager::Pager;
pub use result::FilmstripResult;
