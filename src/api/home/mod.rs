// Home page handler and routes module.

pub mod handler;
pub mod routes;

pub use routes::home_routes;
