mod logger;
pub use logger::*;

mod hook;
pub use hook::init_panic_hook;

mod subscriber;

#[cfg(feature = "subscriber")]
pub use subscriber::*;
