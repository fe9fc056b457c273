mod decoder;
mod device_service;
mod layout_builder;
mod style_service;
mod time_provider;

pub use decoder::*;
pub use device_service::*;
pub use layout_builder::*;
pub use style_service::*;
pub use time_provider::*;
