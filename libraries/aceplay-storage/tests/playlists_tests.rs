//! Integration tests for the playlists vertical slice
//!
//! Tests playlist operations including:
//! - Create with and without an initial membership set
//! - Eager membership resolution on every read
//! - Tri-state cool-flag filtering
//! - First-by-id lookup
//! - Set semantics of the membership join table

mod test_helpers;

use aceplay_core::types::{CoolFilter, CreatePlaylist};
use aceplay_storage::StorageError;
use test_helpers::*;

fn create_request(name: &str, is_cool: Option<bool>) -> CreatePlaylist {
    CreatePlaylist {
        name: name.to_string(),
        is_cool,
        tracks: vec![],
    }
}

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = aceplay_storage::playlists::create(pool, create_request("My Favorites", Some(true)))
        .await
        .expect("Failed to create playlist");

    assert_eq!(playlist.name, "My Favorites");
    assert_eq!(playlist.is_cool, Some(true));
    assert!(playlist.id.is_some());

    let retrieved = aceplay_storage::playlists::get_by_id(pool, playlist.id.unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved.id, playlist.id);
    assert_eq!(retrieved.name, "My Favorites");
}

#[tokio::test]
async fn test_uninitialized_membership_reads_back_empty() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = aceplay_storage::playlists::create(pool, create_request("Empty", None))
        .await
        .unwrap();

    let retrieved = aceplay_storage::playlists::get_by_id(pool, playlist.id.unwrap())
        .await
        .unwrap()
        .unwrap();

    assert!(retrieved.tracks.is_empty());
}

#[tokio::test]
async fn test_create_with_initial_tracks() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let track1 = create_test_track(pool, "Track 1", "A", None).await;
    let track2 = create_test_track(pool, "Track 2", "B", None).await;

    let playlist = aceplay_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Seeded".to_string(),
            is_cool: Some(false),
            tracks: vec![track1, track2],
        },
    )
    .await
    .unwrap();

    assert_eq!(playlist.tracks.len(), 2);
}

#[tokio::test]
async fn test_create_with_unknown_track_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = aceplay_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Broken".to_string(),
            is_cool: None,
            tracks: vec![999],
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StorageError::NotFound { .. }));
    // The transaction rolled back: no playlist row was left behind
    assert!(aceplay_storage::playlists::get_first(pool).await.unwrap().is_none());
}

#[tokio::test]
async fn test_cool_filter_is_exact_tri_state_match() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    aceplay_storage::playlists::create(pool, create_request("Cool", Some(true)))
        .await
        .unwrap();
    aceplay_storage::playlists::create(pool, create_request("Uncool", Some(false)))
        .await
        .unwrap();
    aceplay_storage::playlists::create(pool, create_request("Undecided", None))
        .await
        .unwrap();

    let cool = aceplay_storage::playlists::get_by_cool(pool, CoolFilter::Cool)
        .await
        .unwrap();
    assert_eq!(cool.len(), 1);
    assert_eq!(cool[0].name, "Cool");

    let uncool = aceplay_storage::playlists::get_by_cool(pool, CoolFilter::NotCool)
        .await
        .unwrap();
    assert_eq!(uncool.len(), 1);
    assert_eq!(uncool[0].name, "Uncool");

    let unset = aceplay_storage::playlists::get_by_cool(pool, CoolFilter::Unset)
        .await
        .unwrap();
    assert_eq!(unset.len(), 1);
    assert_eq!(unset[0].name, "Undecided");
}

#[tokio::test]
async fn test_get_first_is_lowest_id_or_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert!(aceplay_storage::playlists::get_first(pool).await.unwrap().is_none());

    let first = aceplay_storage::playlists::create(pool, create_request("Default", None))
        .await
        .unwrap();
    aceplay_storage::playlists::create(pool, create_request("Later", None))
        .await
        .unwrap();

    let found = aceplay_storage::playlists::get_first(pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.name, "Default");
}

#[tokio::test]
async fn test_membership_is_a_set() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = aceplay_storage::playlists::create(pool, create_request("Set", None))
        .await
        .unwrap();
    let playlist_id = playlist.id.unwrap();
    let track_id = create_test_track(pool, "Member", "A", None).await;

    // Adding twice collapses to a single membership row
    aceplay_storage::playlists::add_track(pool, playlist_id, track_id)
        .await
        .unwrap();
    aceplay_storage::playlists::add_track(pool, playlist_id, track_id)
        .await
        .unwrap();

    let resolved = aceplay_storage::playlists::get_by_id(pool, playlist_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.tracks.len(), 1);

    assert!(
        aceplay_storage::playlists::remove_track(pool, playlist_id, track_id)
            .await
            .unwrap()
    );
    assert!(
        !aceplay_storage::playlists::remove_track(pool, playlist_id, track_id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_add_track_to_missing_playlist_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let track_id = create_test_track(pool, "Member", "A", None).await;

    let err = aceplay_storage::playlists::add_track(pool, 999, track_id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_leaves_referenced_tracks() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let track_id = create_test_track(pool, "Survivor", "A", None).await;
    let playlist = aceplay_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Doomed".to_string(),
            is_cool: None,
            tracks: vec![track_id],
        },
    )
    .await
    .unwrap();

    assert!(
        aceplay_storage::playlists::delete(pool, playlist.id.unwrap())
            .await
            .unwrap()
    );
    assert!(
        !aceplay_storage::playlists::delete(pool, playlist.id.unwrap())
            .await
            .unwrap()
    );

    // Membership does not own the tracks
    let track = aceplay_storage::tracks::get_by_id(pool, track_id)
        .await
        .unwrap();
    assert!(track.is_some());
}
