pub mod call;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod paths;

pub use call::{MethodCall, MethodResult};
pub use config::Config;
pub use descriptor::ChannelDescriptor;
pub use error::{Error, Result};
pub use paths::Paths;
