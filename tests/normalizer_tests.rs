mod common;

use serde_json::json;
use seedwatch::torrent::enums::canonical_field::CanonicalField;
use seedwatch::torrent::enums::torrent_backend::TorrentBackend;
use seedwatch::torrent::enums::torrent_state::TorrentState;
use seedwatch::torrent::errors::ClientError;
use seedwatch::torrent::structs::normalizer::Normalizer;
use seedwatch::torrent::structs::torrent_client::TorrentClient;

#[test]
fn test_both_backends_produce_the_same_shape() {
    let deluge = Normalizer::new(TorrentBackend::deluge).unwrap()
        .normalize(&common::deluge_torrent("AAA", "Movie.2020", "/data"))
        .unwrap();
    let rtorrent = Normalizer::new(TorrentBackend::rtorrent).unwrap()
        .normalize(&common::payload(json!({
            "d.hash": "AAA",
            "d.name": "Movie.2020",
            "d.directory_base": "/data",
            "d.size_bytes": 1000,
            "d.completed_bytes": 1000,
            "d.complete": 1,
            "d.is_active": 1,
            "d.is_hash_checking": 0,
            "d.state": 1
        })))
        .unwrap();

    assert_eq!(deluge.hash, rtorrent.hash);
    assert_eq!(deluge.path, rtorrent.path);
    assert_eq!(deluge.path.as_deref(), Some("/data/Movie.2020"));
    assert_eq!(deluge.progress, 100.0);
    assert_eq!(rtorrent.progress, 100.0);
    assert_eq!(deluge.state, TorrentState::Seeding);
    assert_eq!(rtorrent.state, TorrentState::Seeding);
}

#[test]
fn test_unknown_native_state_is_preserved() {
    let mut payload = common::deluge_torrent("AAA", "x", "/data");
    payload.insert("state".to_string(), json!("Moving"));
    let info = Normalizer::new(TorrentBackend::deluge).unwrap().normalize(&payload).unwrap();
    assert_eq!(info.state, TorrentState::Unknown("Moving".to_string()));
}

#[test]
fn test_request_fields_include_identity() {
    let fields = Normalizer::new(TorrentBackend::deluge).unwrap().request_fields(false);
    assert!(fields.iter().any(|f| f == "hash"));
    assert!(fields.iter().any(|f| f == "name"));
    assert_eq!(CanonicalField::Hash.as_str(), "hash");
}

#[tokio::test]
async fn test_client_lists_and_fetches() {
    let daemon = common::FakeDaemon::with(vec![
        common::deluge_torrent("AAA", "One", "/data"),
        common::deluge_torrent("BBB", "Two", "/data"),
    ]);
    let client = TorrentClient::new(daemon).unwrap();

    let mut names: Vec<String> = client.list_torrents(&Default::default(), false).await.unwrap()
        .into_iter()
        .map(|info| info.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["One", "Two"]);

    let full = client.get_torrent("AAA").await.unwrap();
    assert_eq!(full.files.as_ref().map(Vec::len), Some(1));
    assert_eq!(full.trackers.as_ref().and_then(|t| t[0].tracker_type.clone()), Some("https".to_string()));
    assert!(matches!(client.get_torrent("CCC").await, Err(ClientError::NotFound(_))));
}
