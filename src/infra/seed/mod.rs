mod adapter;
mod file_seed;
mod loader;

pub use adapter::FileSeedAdapter;
pub(crate) use loader::{load, render};
