use crate::registry::ConnectionRegistry;
use beacon_core::{ClientEvent, ConnectionId, SignalEvent};
use std::sync::Arc;
use tracing::debug;

/// Forwards target-addressed signal messages 1:1 to the named connection.
/// Each inbound kind is relabeled to its outbound counterpart (call-user
/// becomes call-made, and so on), and the sender identifier is stamped by
/// the server — a sender-supplied `socket` value can never reach a peer.
///
/// Payloads are opaque: the router requires a resolvable target and nothing
/// else. An unresolvable target means the message is dropped, not queued.
#[derive(Clone)]
pub struct SignalingRouter {
    registry: Arc<ConnectionRegistry>,
}

impl SignalingRouter {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self { registry }
    }

    pub fn relay(&self, sender: &ConnectionId, event: ClientEvent) {
        let (target, outbound) = match event {
            ClientEvent::CallUser { offer, to } => (
                to,
                SignalEvent::CallMade {
                    offer,
                    socket: sender.clone(),
                },
            ),
            ClientEvent::Ice { candidate, to } => (
                to,
                SignalEvent::Ice {
                    candidate,
                    socket: sender.clone(),
                },
            ),
            ClientEvent::MakeAnswer { answer, to } => (
                to,
                SignalEvent::AnswerMade {
                    answer,
                    socket: sender.clone(),
                },
            ),
            ClientEvent::RejectCall { from } => (
                from,
                SignalEvent::CallRejected {
                    socket: sender.clone(),
                },
            ),
            // Room membership is the lifecycle manager's job, not a relay.
            ClientEvent::JoinRoom { .. } => return,
        };

        if !self.registry.is_live(&target) {
            debug!("relay from {} to unknown target {}, dropping", sender, target);
            return;
        }

        self.registry.send(&target, outbound);
    }
}
