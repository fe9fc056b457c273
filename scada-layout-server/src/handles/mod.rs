mod layout_handle;

pub use layout_handle::*;
