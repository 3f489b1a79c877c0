mod support;

use agriworld_backend::service::posts;
use agriworld_backend::{AppError, ImageStore, LocalImageStore};
use chrono::{Duration, Utc};
use support::{memory_pool, register_farmer};

#[tokio::test]
async fn submit_post_stores_image_and_row() {
    let pool = memory_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = LocalImageStore::init(dir.path()).await.unwrap();
    let farmer = register_farmer(&pool, "Ravi", "9000000001", "Warangal").await;

    let post = posts::submit_post(
        &pool,
        &store,
        farmer.id,
        "Paddy",
        "Brown spots spreading on leaves",
        b"fake jpeg bytes",
        "leaf.JPG",
    )
    .await
    .unwrap();

    assert_eq!(post.author_id, farmer.id);
    assert_eq!(post.crop_type, "Paddy");
    assert!(post.image_path.ends_with(".jpg"));

    let bytes = store.read(&post.image_path).await.unwrap();
    assert_eq!(bytes, b"fake jpeg bytes");
}

#[tokio::test]
async fn submit_post_for_missing_farmer_writes_nothing() {
    let pool = memory_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = LocalImageStore::init(dir.path()).await.unwrap();

    let err = posts::submit_post(&pool, &store, 4242, "Paddy", "spots", b"bytes", "leaf.jpg")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // The author check runs before the image write.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty());

    let feed = posts::list_feed(&pool, None, None).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn feed_is_newest_first_regardless_of_insertion_order() {
    let pool = memory_pool().await;
    let farmer = register_farmer(&pool, "Ravi", "9000000001", "Warangal").await;

    // Insert rows with hand-picked timestamps, deliberately out of order.
    let now = Utc::now();
    for (offset_minutes, crop) in [(30i64, "Paddy"), (5, "Cotton"), (90, "Chilli")] {
        sqlx::query(
            "INSERT INTO disease_posts (image_path, crop_type, description, created_at, author_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(format!("{}.jpg", crop))
        .bind(crop)
        .bind("test post")
        .bind(now - Duration::minutes(offset_minutes))
        .bind(farmer.id)
        .execute(&pool)
        .await
        .unwrap();
    }

    let feed = posts::list_feed(&pool, None, None).await.unwrap();
    let crops: Vec<&str> = feed.iter().map(|p| p.crop_type.as_str()).collect();
    assert_eq!(crops, vec!["Cotton", "Paddy", "Chilli"]);
    assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn feed_pagination_is_bounded() {
    let pool = memory_pool().await;
    let farmer = register_farmer(&pool, "Ravi", "9000000001", "Warangal").await;

    let now = Utc::now();
    for i in 0..7i64 {
        sqlx::query(
            "INSERT INTO disease_posts (image_path, crop_type, description, created_at, author_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(format!("img{}.jpg", i))
        .bind("Paddy")
        .bind(format!("post {}", i))
        .bind(now - Duration::minutes(i))
        .bind(farmer.id)
        .execute(&pool)
        .await
        .unwrap();
    }

    let page = posts::list_feed(&pool, Some(3), None).await.unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].description, "post 0");

    let next = posts::list_feed(&pool, Some(3), Some(3)).await.unwrap();
    assert_eq!(next.len(), 3);
    assert_eq!(next[0].description, "post 3");

    // Oversized limits clamp instead of failing.
    let all = posts::list_feed(&pool, Some(100_000), None).await.unwrap();
    assert_eq!(all.len(), 7);
}
