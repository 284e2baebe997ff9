//! Exhaustive enumeration of every exact filling of a bin: all selections of items
//! (by position) whose sizes sum precisely to the bin's capacity.

/// Entities to model subset-sum bin packing instances and their solutions
pub mod entities;

/// Interchangeable enumeration strategies
pub mod strategy;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
