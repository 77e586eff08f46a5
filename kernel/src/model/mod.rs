pub mod activity;
pub mod auth;
pub mod blackout;
pub mod id;
pub mod ledger;
pub mod reservation;
pub mod role;
pub mod unit;
pub mod user;
pub mod vehicle;
