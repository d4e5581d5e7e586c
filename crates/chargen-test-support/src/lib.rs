//! Shared test mocks and utilities for the dialog service.

mod generator;
mod rng;
mod store;

pub use generator::CannedGenerator;
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingPreferenceStore, InMemoryPreferenceStore};
