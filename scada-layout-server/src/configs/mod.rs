pub mod settings;

pub use settings::{Layout, Logger, Server, Settings};
