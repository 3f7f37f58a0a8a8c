pub mod session;

pub use session::{CdpSession, PageSession};
