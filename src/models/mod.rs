pub mod crop;
pub mod demand;
pub mod error;
pub mod market;
pub mod trend;
