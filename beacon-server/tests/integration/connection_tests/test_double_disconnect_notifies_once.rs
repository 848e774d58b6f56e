use crate::integration::create_session_manager;
use crate::utils::{TestPeer, join_room};
use beacon_core::SignalEvent;

#[tokio::test]
async fn test_double_disconnect_notifies_once() {
    let sessions = create_session_manager();

    let alice = TestPeer::connect(&sessions);
    let mut bob = TestPeer::connect(&sessions);

    sessions.handle_event(&alice.id, join_room("lobby"));
    sessions.handle_event(&bob.id, join_room("lobby"));
    bob.drain();

    sessions.disconnect(&alice.id);
    sessions.disconnect(&alice.id);

    let removals = bob
        .drain()
        .into_iter()
        .filter(|e| matches!(e, SignalEvent::RemoveUser { socket_id } if *socket_id == alice.id))
        .count();
    assert_eq!(removals, 1, "cleanup must notify at most once");
}
