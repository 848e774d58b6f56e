use crate::integration::create_session_manager;
use crate::utils::TestPeer;
use beacon_core::{ClientEvent, SignalEvent};
use serde_json::json;

#[tokio::test]
async fn test_sender_id_cannot_be_spoofed() {
    let sessions = create_session_manager();

    let mallory = TestPeer::connect(&sessions);
    let mut bob = TestPeer::connect(&sessions);
    let victim = TestPeer::connect(&sessions);

    // A frame claiming to originate from someone else. The extra field is
    // ignored at parse time and the server stamps the real sender.
    let frame = json!({
        "event": "call-user",
        "data": {
            "offer": {"type": "offer", "sdp": "v=0"},
            "to": bob.id.to_string(),
            "socket": victim.id.to_string(),
        },
    });
    let event: ClientEvent = serde_json::from_value(frame).expect("frame should parse");

    sessions.handle_event(&mallory.id, event);

    match bob.next_event() {
        Some(SignalEvent::CallMade { socket, .. }) => {
            assert_eq!(socket, mallory.id, "relay must carry the true sender");
            assert_ne!(socket, victim.id);
        }
        other => panic!("expected call-made, got {:?}", other),
    }
}
