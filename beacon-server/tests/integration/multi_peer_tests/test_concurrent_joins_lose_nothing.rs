use crate::integration::init_tracing;
use beacon_core::ConnectionId;
use beacon_server::RoomDirectory;
use std::sync::Arc;

/// Simultaneous joins on the same room must not lose an entry; the
/// directory serializes mutation per room.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_lose_nothing() {
    init_tracing();

    let directory = Arc::new(RoomDirectory::new());
    let ids: Vec<ConnectionId> = (0..32).map(|_| ConnectionId::new()).collect();

    let mut handles = Vec::new();
    for id in &ids {
        let directory = directory.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            directory.join(&"lobby".into(), id);
        }));
    }
    for handle in handles {
        handle.await.expect("join task panicked");
    }

    let members = directory.members(&"lobby".into());
    assert_eq!(members.len(), ids.len());
    for id in &ids {
        assert!(members.contains(id), "lost member {}", id);
    }

    // Leaves racing nothing: every member can leave exactly once.
    for id in &ids {
        assert!(directory.leave(id).is_some());
        assert!(directory.leave(id).is_none(), "leave must be idempotent");
    }
    assert!(directory.members(&"lobby".into()).is_empty());
}
