//! Rill Core - Push-based reactive stream engine.
//!
//! This crate implements a minimal reactive-stream engine: lazily-started
//! observables, composable operators, and deterministic resource release when
//! consumption stops. Execution is purely synchronous, single-threaded, and
//! push-based; any asynchrony belongs to the producer function and is
//! invisible to the engine.
//!
//! # Core Concepts
//!
//! - `Observable<T, E>`: immutable descriptor of a lazy value sequence; each
//!   `subscribe` starts an independent execution
//! - `Observer<T, E>`: the consumer's set of optional reaction callbacks
//! - `Subscriber<T, E>`: per-subscription mediator enforcing terminal
//!   semantics and owning teardown registration
//! - `Subscription`: an ordered teardown registry, composable into trees
//! - `operators`: pure observable-to-observable transforms, composed left to
//!   right with `pipe`
//!
//! # Example
//!
//! ```ignore
//! use rill_core::{Observable, Observer, operators::map};
//!
//! let subscription = Observable::<i64, ()>::from_iter([1, 2, 3])
//!     .pipe((map(|v| v + 9), map(|v| v * 2)))
//!     .subscribe(
//!         Observer::new()
//!             .on_next(|v| println!("{v}"))
//!             .on_complete(|| println!("complete")),
//!     );
//!
//! // The handle releases the subscription's resources on demand.
//! subscription.unsubscribe();
//! ```

#![no_std]

extern crate alloc;

pub mod observable;
pub mod observer;
pub mod operators;
pub mod pipe;
pub mod subscriber;
pub mod subscription;

pub use observable::Observable;
pub use observer::Observer;
pub use pipe::{compose, Pipeline};
pub use subscriber::Subscriber;
pub use subscription::{IntoTeardown, Subscription, Teardown, Unsubscribe};
