//! Application routes, one block per concern.

use crate::handlers::{advisory, inventory, marketplace, posts, reports, users};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // user directory
        .route("/register", post(users::register))
        .route("/user/profile/:user_id", get(users::get_profile))
        .route("/farmers/search", get(users::find_farmers))
        // disease reporting
        .route("/post-disease", post(posts::submit_post))
        .route("/community-feed", get(posts::community_feed))
        .route("/images/:reference", get(posts::get_image))
        // marketplace
        .route("/list-crop", post(marketplace::list_crop))
        .route("/marketplace/search", get(marketplace::search))
        .route("/market-check/:crop_name", get(marketplace::market_check))
        // resource inventory
        .route("/add-resource", post(inventory::add_resource))
        .route("/inventory/:farmer_id", get(inventory::get_inventory))
        // advisory
        .route("/advisory/:crop_name", get(advisory::get_advisory))
        // field-rep reports
        .route("/rep/inventory", get(reports::distributor_inventory))
        .route("/rep/disease-trends", get(reports::disease_trends))
        .route("/rep/generate-report", get(reports::summary_report))
        .with_state(state)
}
