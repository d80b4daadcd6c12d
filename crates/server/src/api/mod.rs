pub mod export;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod upload;

pub use routes::create_router;
