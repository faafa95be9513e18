//! Shared test infrastructure.



pub use builder::Program;
pub use harness::TestContext;
