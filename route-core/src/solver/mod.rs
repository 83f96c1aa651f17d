//! This module contains the entry points of route optimization: a single route run, a batch of
//! routes and a comparison of all algorithms on the same stops.

mod bulk;
pub use self::bulk::*;

mod comparison;
pub use self::comparison::*;

mod orchestrator;
pub use self::orchestrator::*;

mod result;
pub use self::result::*;
