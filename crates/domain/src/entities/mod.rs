//! Entities - independent validated objects with a few behaviors each

pub mod car;
pub mod photo;
pub mod song;

pub use car::Car;
pub use photo::Photo;
pub use song::Song;
