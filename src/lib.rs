mod line;

pub mod direct;
pub mod dump;

pub use direct::{probe, DirectSupport};
pub use dump::{DumpSession, LineStatus, WINDOW_WIDTH};
