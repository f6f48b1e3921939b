#[cfg(feature = "rayon-executor")]
mod rayon;
mod sequential;
mod threads;
#[cfg(feature = "tokio-executor")]
mod tokio;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::Rayon as RayonExecutor;
pub use self::sequential::Sequential as SequentialExecutor;
pub use self::threads::Threads as ThreadExecutor;
#[cfg(feature = "tokio-executor")]
pub use self::tokio::Tokio as TokioExecutor;

pub type DefaultExecutor = ThreadExecutor;
