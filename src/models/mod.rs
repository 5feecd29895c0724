pub mod itinerary;
pub mod place;
pub mod travel_style;
pub mod visit;
