use serde::{Deserialize, Serialize};

/// Static metadata a handler exposes about the channel it serves.
///
/// `methods` is the closed set of identifiers the handler answers; anything
/// outside it gets the not-implemented reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub name: String,
    pub description: String,
    pub methods: Vec<String>,
}

impl ChannelDescriptor {
    pub fn new(name: &str, description: &str, methods: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn recognizes(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes() {
        let desc = ChannelDescriptor::new("platform", "OS queries", &["getPlatformVersion"]);
        assert!(desc.recognizes("getPlatformVersion"));
        assert!(!desc.recognizes("doSomethingElse"));
        assert!(!desc.recognizes(""));
    }
}
