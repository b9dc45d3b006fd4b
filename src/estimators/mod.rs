pub mod entropy;
pub mod estimate;
pub mod mutual_information;
pub mod traits;
pub mod approaches;

pub use estimate::{Estimate, NotComputableReason};
pub use traits::GlobalValue;
