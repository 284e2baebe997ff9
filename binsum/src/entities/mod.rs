mod instance;
mod solution;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use instance::Size;
#[doc(inline)]
pub use solution::Solution;
#[doc(inline)]
pub use solution::SolutionSet;
