use std::collections::HashMap;
use std::sync::Arc;

use capbridge_core::{ChannelDescriptor, Error, MethodCall, MethodResult, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::MethodHandler;

/// A queued call paired with its reply slot.
pub struct InboundCall {
    pub call: MethodCall,
    pub reply_tx: oneshot::Sender<MethodResult>,
}

impl InboundCall {
    pub fn new(call: MethodCall) -> (Self, oneshot::Receiver<MethodResult>) {
        let (reply_tx, reply_rx) = oneshot::channel();
        (Self { call, reply_tx }, reply_rx)
    }
}

/// Host-side registry binding handlers to channel names.
#[derive(Clone, Default)]
pub struct ChannelRegistrar {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl ChannelRegistrar {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler to the channel named by its descriptor. Registering
    /// the same name again replaces the previous handler; last one wins.
    pub fn register(&mut self, handler: Arc<dyn MethodHandler>) {
        let desc = handler.descriptor();
        debug!(channel = %desc.name, "Registering channel handler");
        if self.handlers.insert(desc.name.clone(), handler).is_some() {
            warn!(channel = %desc.name, "Replaced existing channel handler");
        }
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn MethodHandler>> {
        self.handlers.get(name)
    }

    pub fn channel_names(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    pub fn descriptors(&self) -> Vec<ChannelDescriptor> {
        self.handlers.values().map(|h| h.descriptor()).collect()
    }

    /// Route one call to the handler registered for its channel.
    ///
    /// An unknown channel name is a host-level fault. An unknown method on a
    /// registered channel is not; the handler answers with the
    /// not-implemented sentinel.
    pub async fn dispatch(&self, call: MethodCall) -> Result<MethodResult> {
        let handler = self.get(&call.channel).ok_or_else(|| {
            Error::Channel(format!("Unknown channel: {}", call.channel))
        })?;

        debug!(channel = %call.channel, method = %call.method, "Dispatching call");
        Ok(handler.handle(call).await)
    }

    /// Service queued calls until every sender is dropped. Each call gets
    /// exactly one reply, with dispatch failures answered as the error
    /// envelope.
    pub async fn serve(&self, mut inbound_rx: mpsc::Receiver<InboundCall>) {
        info!("Channel dispatcher started");

        while let Some(inbound) = inbound_rx.recv().await {
            let channel = inbound.call.channel.clone();
            let result = match self.dispatch(inbound.call).await {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, channel = %channel, "Failed to dispatch call");
                    MethodResult::error("dispatch_failed", &e.to_string())
                }
            };
            if inbound.reply_tx.send(result).is_err() {
                warn!(channel = %channel, "Caller dropped before reply");
            }
        }

        info!("Channel dispatcher stopped");
    }
}
