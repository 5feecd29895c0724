pub mod course;
pub mod health;
pub mod place;
pub mod recommendation;
pub mod style;
pub mod visit;
