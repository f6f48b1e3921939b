mod driver;
mod error;
mod executor;
mod reducer;
mod reporter;
mod samples;
mod setup;
mod shape;

pub use driver::Driver;
pub use error::{ConfigError, ReduceError};
pub use executor::Executor;
pub use reducer::{GroupReducer, Reducer, Sum};
pub use reporter::{default_reporter, Console, Reporter, Silent, Trace};
pub use samples::{IntoSamples, Samples};
pub use setup::{Setup, DEFAULT_TIMEOUT};
pub use shape::{Decision, Progress, Shape};
