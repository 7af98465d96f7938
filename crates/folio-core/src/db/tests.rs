use tempfile::tempdir;

use super::Database;
use crate::post::{Comment, Post};
use crate::user::User;

fn open_db(dir: &tempfile::TempDir) -> Database {
    Database::open(dir.path()).unwrap()
}

fn seed_user(db: &Database, name: &str) -> User {
    let user = User::new(name, format!("{}@example.com", name));
    db.insert_user(&user).unwrap();
    user
}

fn seed_post(db: &Database, author: &str, title: &str, tags: &[&str]) -> Post {
    let post = Post::new(title, format!("{} body", title), author).with_tags(tags.iter());
    db.insert_post(&post).unwrap();
    post
}

#[test]
fn test_open_creates_schema() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    assert_eq!(db.get_schema_version().unwrap(), 1);
    assert_eq!(db.get_post_count().unwrap(), 0);
    assert_eq!(db.get_user_count().unwrap(), 0);
}

#[test]
fn test_reopen_preserves_data() {
    let dir = tempdir().unwrap();
    let author_id;
    {
        let db = open_db(&dir);
        let author = seed_user(&db, "ada");
        seed_post(&db, &author.id, "First", &["intro"]);
        author_id = author.id;
    }

    let db = open_db(&dir);
    assert_eq!(db.get_post_count().unwrap(), 1);
    let posts = db.list_posts_by_author(&author_id).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "First");
}

#[test]
fn test_post_round_trip_preserves_tag_order_and_duplicates() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let post = seed_post(&db, &author.id, "Tagged", &["Rust", "web", "rust"]);
    let loaded = db.get_post(&post.id).unwrap().unwrap();

    assert_eq!(loaded.tags, vec!["rust", "web", "rust"]);
    assert_eq!(loaded.views, 0);
    assert!(loaded.likes.is_empty());
}

#[test]
fn test_get_missing_post_is_none() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    assert!(db.get_post("po-missing").unwrap().is_none());
}

#[test]
fn test_update_post_changes_title_and_content() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");
    let mut post = seed_post(&db, &author.id, "Draft", &[]);

    post.title = "Final".to_string();
    post.content = "updated body".to_string();
    post.updated = Some(chrono::Utc::now());
    db.update_post(&post).unwrap();

    let loaded = db.get_post(&post.id).unwrap().unwrap();
    assert_eq!(loaded.title, "Final");
    assert_eq!(loaded.content, "updated body");
    assert!(loaded.updated.is_some());
}

#[test]
fn test_delete_post_cascades_comments_and_tags() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");
    let post = seed_post(&db, &author.id, "Doomed", &["gone"]);

    let comment = Comment::new(&post.id, &author.id, "nice");
    db.insert_comment(&comment).unwrap();

    db.delete_post(&post.id).unwrap();
    assert!(db.get_post(&post.id).unwrap().is_none());
    assert_eq!(db.get_comment_count().unwrap(), 0);
    assert!(db.list_comments(&post.id).unwrap().is_empty());
}

#[test]
fn test_record_view_increments() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");
    let post = seed_post(&db, &author.id, "Counted", &[]);

    db.record_view(&post.id).unwrap();
    db.record_view(&post.id).unwrap();

    let loaded = db.get_post(&post.id).unwrap().unwrap();
    assert_eq!(loaded.views, 2);
}

#[test]
fn test_toggle_like_round_trip() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");
    let reader = seed_user(&db, "bob");
    let post = seed_post(&db, &author.id, "Likeable", &[]);

    assert!(db.toggle_like(&post.id, &reader.id).unwrap());
    let loaded = db.get_post(&post.id).unwrap().unwrap();
    assert_eq!(loaded.likes, vec![reader.id.clone()]);

    assert!(!db.toggle_like(&post.id, &reader.id).unwrap());
    let loaded = db.get_post(&post.id).unwrap().unwrap();
    assert!(loaded.likes.is_empty());
}

#[test]
fn test_duplicate_email_rejected() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    seed_user(&db, "ada");

    let dup = User::new("other", "ada@example.com");
    let err = db.insert_user(&dup).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_follow_toggle_and_counts() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let ada = seed_user(&db, "ada");
    let bob = seed_user(&db, "bob");

    assert!(db.toggle_follow(&ada.id, &bob.id).unwrap());
    assert!(db.is_following(&ada.id, &bob.id).unwrap());
    assert_eq!(db.follower_count(&bob.id).unwrap(), 1);
    assert_eq!(db.following_count(&ada.id).unwrap(), 1);

    let followers = db.followers_of(&bob.id).unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, ada.id);

    assert!(!db.toggle_follow(&ada.id, &bob.id).unwrap());
    assert!(!db.is_following(&ada.id, &bob.id).unwrap());
    assert_eq!(db.follower_count(&bob.id).unwrap(), 0);
}

#[test]
fn test_self_follow_rejected() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let ada = seed_user(&db, "ada");

    let err = db.toggle_follow(&ada.id, &ada.id).unwrap_err();
    assert!(matches!(err, crate::error::FolioError::SelfFollow));
}

#[test]
fn test_search_matches_title_content_and_tags() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    seed_post(&db, &author.id, "Rust ownership", &[]);
    let by_content =
        Post::new("Untitled", "a post about borrowing and rust", author.id.clone());
    db.insert_post(&by_content).unwrap();
    seed_post(&db, &author.id, "Gardening", &["rust"]);
    seed_post(&db, &author.id, "Cooking", &[]);

    let results = db.search_posts("rust").unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn test_search_empty_query_returns_nothing() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");
    seed_post(&db, &author.id, "Anything", &[]);

    assert!(db.search_posts("").unwrap().is_empty());
    assert!(db.search_posts("   ").unwrap().is_empty());
}

#[test]
fn test_search_orders_by_views() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let cold = seed_post(&db, &author.id, "Rust basics", &[]);
    let hot = seed_post(&db, &author.id, "Rust tricks", &[]);
    for _ in 0..5 {
        db.record_view(&hot.id).unwrap();
    }

    let results = db.search_posts("rust").unwrap();
    assert_eq!(results[0].id, hot.id);
    assert_eq!(results[1].id, cold.id);
}

#[test]
fn test_trending_orders_and_limits() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let a = seed_post(&db, &author.id, "A", &[]);
    let b = seed_post(&db, &author.id, "B", &[]);
    let c = seed_post(&db, &author.id, "C", &[]);
    for _ in 0..3 {
        db.record_view(&b.id).unwrap();
    }
    db.record_view(&c.id).unwrap();

    let top = db.trending_posts(None, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, b.id);
    assert_eq!(top[1].id, c.id);

    let excluded = db.trending_posts(Some(&b.id), 10).unwrap();
    assert!(excluded.iter().all(|p| p.id != b.id));
    assert!(excluded.iter().any(|p| p.id == a.id));
}

#[test]
fn test_posts_sharing_tags_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let reference = seed_post(&db, &author.id, "Ref", &["tech"]);
    let matching = seed_post(&db, &author.id, "Match", &["tech", "news"]);
    seed_post(&db, &author.id, "Other", &["cooking"]);

    let shared = db
        .posts_sharing_tags(&["Tech".to_string()], &reference.id, 4)
        .unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].id, matching.id);
}

#[test]
fn test_posts_sharing_tags_orders_by_views() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let reference = seed_post(&db, &author.id, "Ref", &["ai"]);
    let cold = seed_post(&db, &author.id, "Cold", &["ai"]);
    let hot = seed_post(&db, &author.id, "Hot", &["ai"]);
    for _ in 0..4 {
        db.record_view(&hot.id).unwrap();
    }

    let shared = db
        .posts_sharing_tags(&["ai".to_string()], &reference.id, 4)
        .unwrap();
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].id, hot.id);
    assert_eq!(shared[1].id, cold.id);
}

#[test]
fn test_candidate_pool_excludes_reference_in_insertion_order() {
    let dir = tempdir().unwrap();
    let db = open_db(&dir);
    let author = seed_user(&db, "ada");

    let first = seed_post(&db, &author.id, "First", &[]);
    let reference = seed_post(&db, &author.id, "Reference", &[]);
    let last = seed_post(&db, &author.id, "Last", &[]);

    let pool = db.list_posts_excluding(&reference.id).unwrap();
    let ids: Vec<&str> = pool.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), last.id.as_str()]);
}
