use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single inbound request on a method channel.
///
/// The caller owns the call for exactly one dispatch; handlers never hold
/// onto it across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub channel: String,
    pub method: String,
    #[serde(default)]
    pub args: Value,
    pub timestamp_ms: i64,
}

impl MethodCall {
    pub fn new(channel: &str, method: &str, args: Value) -> Self {
        Self {
            channel: channel.to_string(),
            method: method.to_string(),
            args,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Call without an argument payload.
    pub fn bare(channel: &str, method: &str) -> Self {
        Self::new(channel, method, Value::Null)
    }
}

/// Outcome of one dispatched call. Every call yields exactly one of these.
///
/// `NotImplemented` is the documented reply for method identifiers outside a
/// handler's recognized set. It is not a fault and never surfaces as an
/// `Err` to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success { value: Value },
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResult {
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Success { value: value.into() }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_implemented() -> Self {
        Self::NotImplemented
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_call_has_null_args() {
        let call = MethodCall::bare("platform", "getPlatformVersion");
        assert_eq!(call.channel, "platform");
        assert_eq!(call.method, "getPlatformVersion");
        assert!(call.args.is_null());
        assert!(call.timestamp_ms > 0);
    }

    #[test]
    fn test_result_status_tag() {
        let ok = MethodResult::ok(json!("iOS 17.4"));
        let raw = serde_json::to_value(&ok).unwrap();
        assert_eq!(raw["status"], "success");
        assert_eq!(raw["value"], "iOS 17.4");

        let raw = serde_json::to_value(MethodResult::not_implemented()).unwrap();
        assert_eq!(raw["status"], "not_implemented");
    }

    #[test]
    fn test_result_predicates() {
        assert!(MethodResult::ok(json!(1)).is_success());
        assert!(MethodResult::not_implemented().is_not_implemented());
        assert!(!MethodResult::error("failed", "boom").is_success());
    }
}
