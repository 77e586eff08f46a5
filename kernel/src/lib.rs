pub mod model;
pub mod pricing;
pub mod refund;
pub mod repository;
pub mod window;
