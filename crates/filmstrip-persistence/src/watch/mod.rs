pub mod dir_watcher;

pub use dir_watcher::DirWatcher;
