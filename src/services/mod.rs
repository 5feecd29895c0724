pub mod distance_service;
pub mod gamification_service;
pub mod itinerary_builder;
pub mod recommendation_service;
pub mod scoring_service;
