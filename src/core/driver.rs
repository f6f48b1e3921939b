use crate::{DefaultExecutor, Executor, ReduceError, Shape};

pub trait Driver<T>: Sized
where
    T: Send + 'static,
{
    type Shape: Shape<T> + 'static;

    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<T, Self::Shape>;

    fn exec(self) -> Result<T, ReduceError<T>> {
        self.exec_with(DefaultExecutor::default())
    }
}
