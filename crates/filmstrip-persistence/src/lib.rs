pub mod scan;
pub mod store;
pub mod traits;
pub mod watch;

pub use scan::scan_images;
pub use store::*;
pub use traits::*;
pub use watch::*;
