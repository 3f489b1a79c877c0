//! Query/command layer over the relational store.

pub mod inventory;
pub mod marketplace;
pub mod posts;
pub mod reports;
pub mod users;
pub mod validation;
