//! HTTP handlers for the user directory, disease feed, marketplace,
//! inventory, advisory, and rep reports.

pub mod advisory;
pub mod inventory;
pub mod marketplace;
pub mod posts;
pub mod reports;
pub mod users;
