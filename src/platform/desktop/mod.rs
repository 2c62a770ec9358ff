pub mod blocking;
pub mod download;
