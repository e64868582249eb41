//! Domain models: delivery requests, resolved transport context and the search problem.

mod domain;
pub use self::domain::*;

mod context;
pub use self::context::*;

mod problem;
pub use self::problem::*;
