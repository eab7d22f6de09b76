// Core algorithm exports
pub mod checker;
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod recommender;

pub use checker::FitChecker;
pub use classifier::{classify, round1};
pub use error::FitError;
pub use estimator::{body_mass_index, estimate_measurement};
pub use recommender::{recommend, score_size, score_sizes, SizeScore, DEFAULT_PENALTY_WEIGHT};
