/// Predicates to verify the correctness of solutions, used in debug assertions and tests
pub mod assertions;
