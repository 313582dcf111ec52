//! The consumer-supplied stream handle.

use alloc::boxed::Box;

/// A set of up-to-three optional reaction callbacks.
///
/// Consumers install only the callbacks they care about; an absent callback
/// is silently skipped when the corresponding event is delivered. `T` is the
/// stream's item type, `E` its error type.
///
/// # Example
///
/// ```ignore
/// use rill_core::Observer;
///
/// let observer = Observer::new()
///     .on_next(|value: i64| println!("{value}"))
///     .on_complete(|| println!("complete"));
/// ```
pub struct Observer<T, E> {
    next: Option<Box<dyn FnMut(T)>>,
    error: Option<Box<dyn FnMut(E)>>,
    complete: Option<Box<dyn FnMut()>>,
}

impl<T, E> Default for Observer<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Observer<T, E> {
    /// Creates an observer with no callbacks installed.
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Installs the value callback.
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        self.next = Some(Box::new(f));
        self
    }

    /// Installs the error callback.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnMut(E) + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Installs the completion callback.
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.complete = Some(Box::new(f));
        self
    }

    /// Delivers a value, if the value callback is installed.
    pub fn next(&mut self, value: T) {
        if let Some(next) = self.next.as_mut() {
            next(value);
        }
    }

    /// Delivers an error, if the error callback is installed.
    pub fn error(&mut self, err: E) {
        if let Some(error) = self.error.as_mut() {
            error(err);
        }
    }

    /// Delivers completion, if the completion callback is installed.
    pub fn complete(&mut self) {
        if let Some(complete) = self.complete.as_mut() {
            complete();
        }
    }
}
