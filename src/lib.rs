//! Parallel fan-in reduction.
//!
//! A pool of workers repeatedly draws items from a shared queue, merges them
//! and puts the result back until a single item is left. Merges are either
//! binary ([`BinaryTree`]) or take `m` items at once ([`MaryTree`]).
//!
//! ```
//! use fanin::{Driver, Reduce};
//!
//! let sum = Reduce::binary((1..=100u64).collect::<Vec<_>>())
//!     .workers(4)
//!     .quiet(true)
//!     .exec()
//!     .unwrap();
//!
//! assert_eq!(5050, sum);
//! ```

mod core;
mod executor;
mod inner;
mod misc;
mod std;

pub use self::core::{
    default_reporter, ConfigError, Console, Decision, Driver, Executor, GroupReducer,
    IntoSamples, Progress, ReduceError, Reducer, Reporter, Samples, Setup, Shape, Silent, Sum,
    Trace, DEFAULT_TIMEOUT,
};
#[cfg(feature = "rayon-executor")]
pub use self::executor::RayonExecutor;
#[cfg(feature = "tokio-executor")]
pub use self::executor::TokioExecutor;
pub use self::executor::{DefaultExecutor, SequentialExecutor, ThreadExecutor};
pub use self::inner::{BinaryTree, MaryTree, Reduce, Run, Step, WorkQueue};
pub use self::std::TreeReduce;
