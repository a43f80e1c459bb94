pub mod registrar;

use async_trait::async_trait;
use capbridge_core::{ChannelDescriptor, MethodCall, MethodResult};

pub use registrar::{ChannelRegistrar, InboundCall};

/// Handler bound to one named channel.
///
/// `handle` is total: every call gets exactly one `MethodResult`, and an
/// unrecognized method identifier gets `MethodResult::NotImplemented` rather
/// than an error.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    fn descriptor(&self) -> ChannelDescriptor;
    async fn handle(&self, call: MethodCall) -> MethodResult;
}
