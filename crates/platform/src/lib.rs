pub mod plugin;
pub mod provider;

pub use plugin::{PlatformPlugin, METHOD_GET_PLATFORM_VERSION, PLATFORM_CHANNEL};
pub use provider::{PlatformInfoProvider, SystemInfoProvider};

#[cfg(test)]
mod tests {
    use super::*;
    use capbridge_channels::ChannelRegistrar;
    use capbridge_core::{Config, MethodCall};

    // End to end: register against the host registrar, then query it.
    #[tokio::test]
    async fn test_registered_bridge_answers_version_query() {
        let config = Config::default();
        let mut registrar = ChannelRegistrar::new();
        PlatformPlugin::register(&mut registrar, &config);

        let call = MethodCall::bare(PLATFORM_CHANNEL, METHOD_GET_PLATFORM_VERSION);
        let result = registrar.dispatch(call).await.unwrap();
        assert!(result.is_success());

        let call = MethodCall::bare(PLATFORM_CHANNEL, "notAMethod");
        let result = registrar.dispatch(call).await.unwrap();
        assert!(result.is_not_implemented());
    }
}
