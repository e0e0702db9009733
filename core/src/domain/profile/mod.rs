pub mod entities;
pub mod exclusions;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use exclusions::{ExclusionSet, compute_exclusions, filter_excluded};
pub use ports::*;
pub use value_objects::*;
