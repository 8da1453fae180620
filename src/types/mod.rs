pub mod catalog;
pub mod report;

/// School grade answered on the distinguished grade question.
pub type Grade = i64;

/// Numeric trait weight carried by directions and answer options.
pub type Weight = f64;
