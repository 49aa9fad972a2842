pub mod assessment;
pub mod risk;
pub mod snapshot;
