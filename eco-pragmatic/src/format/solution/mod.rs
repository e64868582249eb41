//! Specifies logic to create a "pragmatic" solution and write it into json format.

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::create_solution;
pub use self::writer::PragmaticSolution;
