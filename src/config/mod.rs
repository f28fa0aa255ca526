//! Configuration module for the coin table application.

// Can all be private now because we have a public re-export.
mod coinlore;
mod debug;
mod window;

// Re-export commonly used items
pub use coinlore::{COINLORE, CoinloreConfig, PAGE_SIZE};
pub use debug::DF;
pub use window::WINDOW;
