use sysinfo::System;

/// Source of the host OS identity, injected so the bridge can be exercised
/// against a fixed environment.
pub trait PlatformInfoProvider: Send + Sync {
    fn os_name(&self) -> String;
    fn os_version(&self) -> String;
}

/// Live provider backed by the running system.
pub struct SystemInfoProvider;

impl PlatformInfoProvider for SystemInfoProvider {
    fn os_name(&self) -> String {
        System::name().unwrap_or_else(|| String::from("Unknown"))
    }

    fn os_version(&self) -> String {
        System::os_version().unwrap_or_else(|| String::from("Unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_provider_reports_something() {
        let provider = SystemInfoProvider;
        assert!(!provider.os_name().is_empty());
        assert!(!provider.os_version().is_empty());
    }
}
