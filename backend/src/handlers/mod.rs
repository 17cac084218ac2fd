pub mod showcase;

#[cfg(test)]
mod showcase_http_tests;

pub use showcase::configure_showcase_routes;
