pub mod recommendations;

pub use recommendations::{Recommendation, RecommendationService, Source};
