pub mod markers;
pub mod server;
pub mod submit;
