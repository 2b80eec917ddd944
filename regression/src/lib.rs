mod dataset;
mod error;
mod linear;
mod split;

pub use dataset::{Dataset, Sample};
pub use error::RegressionError;
pub use linear::LinearModel;
pub use split::train_test_split;
