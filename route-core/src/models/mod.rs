//! A collection of models which describe a single route optimization run.

mod distance;
pub use self::distance::*;

mod metrics;
pub use self::metrics::*;

mod options;
pub use self::options::*;

mod sequence;
pub use self::sequence::*;

mod stop;
pub use self::stop::*;
