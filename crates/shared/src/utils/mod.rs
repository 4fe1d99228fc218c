mod logs;
mod shutdown;
mod slug;

pub use self::logs::init_logger;
pub use self::shutdown::shutdown_signal;
pub use self::slug::slugify;
