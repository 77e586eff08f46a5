pub mod availability;
pub mod booking;
pub mod ledger;
pub mod pricing;
pub mod unit;
pub mod user;
