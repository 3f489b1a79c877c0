mod support;

use agriworld_backend::service::{inventory, marketplace, reports};
use chrono::Utc;
use support::{memory_pool, register_buyer, register_farmer};

async fn insert_post(pool: &sqlx::SqlitePool, author_id: i64, crop: &str) {
    sqlx::query(
        "INSERT INTO disease_posts (image_path, crop_type, description, created_at, author_id) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind("img.jpg")
    .bind(crop)
    .bind("report test")
    .bind(Utc::now())
    .bind(author_id)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn disease_trends_group_by_district_and_crop() {
    let pool = memory_pool().await;
    let warangal = register_farmer(&pool, "Ravi", "9000000001", "Warangal").await;
    let karimnagar = register_farmer(&pool, "Suresh", "9000000002", "Karimnagar").await;

    insert_post(&pool, warangal.id, "Paddy").await;
    insert_post(&pool, warangal.id, "Paddy").await;
    insert_post(&pool, warangal.id, "Cotton").await;
    insert_post(&pool, karimnagar.id, "Cotton").await;

    let trends = reports::disease_trends(&pool).await.unwrap();
    assert_eq!(trends.len(), 3);
    assert_eq!(trends[0].district, "Warangal");
    assert_eq!(trends[0].crop, "Paddy");
    assert_eq!(trends[0].count, 2);
    assert!(trends.iter().all(|t| t.count >= 1));
}

#[tokio::test]
async fn summary_report_counts_live_rows() {
    let pool = memory_pool().await;
    let farmer = register_farmer(&pool, "Ravi", "9000000001", "Warangal").await;
    register_farmer(&pool, "Suresh", "9000000002", "Karimnagar").await;
    // Buyers never count as farmers.
    register_buyer(&pool, "Anita", "9000000003", "Hyderabad").await;

    marketplace::list_crop(&pool, farmer.id, "Paddy", 500.0, 24.0, None, false)
        .await
        .unwrap();
    inventory::add_resource(&pool, farmer.id, "Urea", "Fertilizer", 2.0, "kg")
        .await
        .unwrap();
    inventory::add_resource(&pool, farmer.id, "DAP", "Fertilizer", 50.0, "kg")
        .await
        .unwrap();

    let report = reports::summary_report(&pool).await.unwrap();
    assert_eq!(report.total_active_farmers, 2);
    assert_eq!(report.open_listings, 1);
    assert_eq!(report.low_stock_items, 1);
    assert_eq!(report.report_date, Utc::now().date_naive());
}
