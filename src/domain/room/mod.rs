//! Room aggregate

pub mod model;

pub use model::Room;
