use tempfile::tempdir;

use super::Store;
use crate::error::FolioError;

fn init_store(dir: &tempfile::TempDir) -> Store {
    Store::init(dir.path()).unwrap()
}

#[test]
fn test_init_creates_layout() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);

    assert!(store.config_path().exists());
    assert!(store.db_path().exists());
    assert_eq!(store.config().recommend.limit, 4);
}

#[test]
fn test_init_is_idempotent() {
    let dir = tempdir().unwrap();
    {
        let store = init_store(&dir);
        store.create_user("ada", "ada@example.com").unwrap();
    }

    let store = Store::init(dir.path()).unwrap();
    assert_eq!(store.db().get_user_count().unwrap(), 1);
}

#[test]
fn test_discover_from_nested_directory() {
    let dir = tempdir().unwrap();
    init_store(&dir);
    let nested = dir.path().join("deep/nested");
    std::fs::create_dir_all(&nested).unwrap();

    let store = Store::discover(&nested).unwrap();
    assert_eq!(store.root(), dir.path().join(".folio"));
}

#[test]
fn test_open_missing_store_fails() {
    let dir = tempdir().unwrap();
    let err = Store::discover(dir.path()).unwrap_err();
    assert!(matches!(err, FolioError::StoreNotFound { .. }));
}

#[test]
fn test_create_post_requires_existing_author() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);

    let err = store
        .create_post("Title", "Body", "us-ghost", &[])
        .unwrap_err();
    assert!(matches!(err, FolioError::UserNotFound { .. }));
}

#[test]
fn test_create_post_requires_title_and_content() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let user = store.create_user("ada", "ada@example.com").unwrap();

    let err = store.create_post("", "Body", &user.id, &[]).unwrap_err();
    assert!(matches!(err, FolioError::UsageError(_)));

    let err = store
        .create_post("Title", "   ", &user.id, &[])
        .unwrap_err();
    assert!(matches!(err, FolioError::UsageError(_)));
}

#[test]
fn test_view_post_increments_counter() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let user = store.create_user("ada", "ada@example.com").unwrap();
    let post = store.create_post("Title", "Body", &user.id, &[]).unwrap();

    let viewed = store.view_post(&post.id).unwrap();
    assert_eq!(viewed.views, 1);
    let viewed = store.view_post(&post.id).unwrap();
    assert_eq!(viewed.views, 2);
}

#[test]
fn test_update_post_is_author_only() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();
    let bob = store.create_user("bob", "bob@example.com").unwrap();
    let post = store.create_post("Title", "Body", &ada.id, &[]).unwrap();

    let err = store
        .update_post(&post.id, &bob.id, Some("New"), None)
        .unwrap_err();
    assert!(matches!(err, FolioError::NotAuthorized { .. }));

    let updated = store
        .update_post(&post.id, &ada.id, Some("New"), None)
        .unwrap();
    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "Body");
}

#[test]
fn test_update_post_empty_fields_keep_existing() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();
    let post = store.create_post("Title", "Body", &ada.id, &[]).unwrap();

    let updated = store
        .update_post(&post.id, &ada.id, Some(""), Some("fresh"))
        .unwrap();
    assert_eq!(updated.title, "Title");
    assert_eq!(updated.content, "fresh");
}

#[test]
fn test_delete_post_is_author_only() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();
    let bob = store.create_user("bob", "bob@example.com").unwrap();
    let post = store.create_post("Title", "Body", &ada.id, &[]).unwrap();

    let err = store.delete_post(&post.id, &bob.id).unwrap_err();
    assert!(matches!(err, FolioError::NotAuthorized { .. }));

    store.delete_post(&post.id, &ada.id).unwrap();
    assert!(store.db().get_post(&post.id).unwrap().is_none());
}

#[test]
fn test_comment_delete_is_comment_author_only() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();
    let bob = store.create_user("bob", "bob@example.com").unwrap();
    let post = store.create_post("Title", "Body", &ada.id, &[]).unwrap();

    let comment = store.add_comment(&post.id, &bob.id, "nice post").unwrap();

    let err = store.delete_comment(&comment.id, &ada.id).unwrap_err();
    assert!(matches!(err, FolioError::NotAuthorized { .. }));

    store.delete_comment(&comment.id, &bob.id).unwrap();
    assert!(store.comments(&post.id).unwrap().is_empty());
}

#[test]
fn test_follow_round_trip() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();
    let bob = store.create_user("bob", "bob@example.com").unwrap();

    let status = store.toggle_follow(&ada.id, &bob.id).unwrap();
    assert!(status.following);
    assert_eq!(status.follower_count, 1);

    let dashboard = store.dashboard(&bob.id).unwrap();
    assert_eq!(dashboard.followers.len(), 1);
    assert_eq!(dashboard.followers[0].id, ada.id);
    assert!(dashboard.following.is_empty());

    let status = store.toggle_follow(&ada.id, &bob.id).unwrap();
    assert!(!status.following);
    assert_eq!(status.follower_count, 0);
}

#[test]
fn test_explore_respects_config_limit() {
    let dir = tempdir().unwrap();
    let store = init_store(&dir);
    let ada = store.create_user("ada", "ada@example.com").unwrap();

    for i in 0..8 {
        store
            .create_post(&format!("Post {}", i), "Body", &ada.id, &[])
            .unwrap();
    }

    let explore = store.explore().unwrap();
    assert_eq!(explore.len(), store.config().explore_limit);
}
