use std::sync::Arc;

use async_trait::async_trait;
use capbridge_channels::{ChannelRegistrar, MethodHandler};
use capbridge_core::{ChannelDescriptor, Config, MethodCall, MethodResult};
use serde_json::json;
use tracing::{debug, info};

use crate::provider::{PlatformInfoProvider, SystemInfoProvider};

/// Default channel name; overridable through `channels.platform.channel`.
pub const PLATFORM_CHANNEL: &str = "platform";

pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// The platform capability bridge.
///
/// Answers `getPlatformVersion` with `"<OS name> <OS version>"` looked up at
/// call time; every other identifier gets the not-implemented sentinel.
pub struct PlatformPlugin {
    channel: String,
    provider: Arc<dyn PlatformInfoProvider>,
}

impl PlatformPlugin {
    pub fn new(config: &Config) -> Self {
        Self::with_provider(&config.channels.platform.channel, Arc::new(SystemInfoProvider))
    }

    pub fn with_provider(channel: &str, provider: Arc<dyn PlatformInfoProvider>) -> Self {
        Self {
            channel: channel.to_string(),
            provider,
        }
    }

    /// One-time registration with the host registrar. A no-op when the
    /// platform channel is disabled in config.
    pub fn register(registrar: &mut ChannelRegistrar, config: &Config) {
        if !config.channels.platform.enabled {
            info!("Platform channel disabled, skipping registration");
            return;
        }
        registrar.register(Arc::new(Self::new(config)));
    }

    fn platform_version(&self) -> String {
        format!("{} {}", self.provider.os_name(), self.provider.os_version())
    }
}

#[async_trait]
impl MethodHandler for PlatformPlugin {
    fn descriptor(&self) -> ChannelDescriptor {
        ChannelDescriptor::new(
            &self.channel,
            "Host platform capability queries",
            &[METHOD_GET_PLATFORM_VERSION],
        )
    }

    async fn handle(&self, call: MethodCall) -> MethodResult {
        match call.method.as_str() {
            METHOD_GET_PLATFORM_VERSION => {
                let version = self.platform_version();
                debug!(channel = %self.channel, %version, "Answering platform version");
                MethodResult::ok(json!(version))
            }
            _ => MethodResult::not_implemented(),
        }
    }
}
