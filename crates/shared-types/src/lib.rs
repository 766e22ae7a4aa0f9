pub mod error;

// Role resolution and access control
pub mod access;
pub mod authority;
pub mod resolver;
pub mod role;
pub mod role_path;

// Session and portal configuration
pub mod config;
pub mod navigation;
pub mod session;

pub use access::*;
pub use authority::*;
pub use config::*;
pub use error::*;
pub use navigation::*;
pub use resolver::*;
pub use role::*;
pub use role_path::*;
pub use session::*;
