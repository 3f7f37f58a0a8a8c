pub mod human_delay;
pub mod login_watcher;
pub mod navigator;

pub use human_delay::HumanDelay;
pub use login_watcher::LoginWatcher;
pub use navigator::Navigator;
