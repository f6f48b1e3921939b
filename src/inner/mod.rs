pub mod queue;
pub mod reduce;
pub mod run;
pub mod tree;
pub mod worker;

pub use queue::WorkQueue;
pub use reduce::Reduce;
pub use run::Run;
pub use tree::{BinaryTree, MaryTree};
pub use worker::Step;
