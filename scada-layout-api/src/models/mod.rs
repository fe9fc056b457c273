mod cell;
mod device;
mod page;
mod table;

pub use cell::*;
pub use device::*;
pub use page::*;
pub use table::*;
