pub mod logger;
pub mod services;
pub mod signup;
pub mod ui;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
