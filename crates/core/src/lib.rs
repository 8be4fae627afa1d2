//! # medreg-core
//!
//! Core logic for the medreg record registry: the record model, the
//! sparse edit descriptor, the record store seam, and the edit
//! operation that ties them together.
//!
//! The execution model is single-threaded and synchronous. A command
//! runs to completion against the store with no suspension points, so
//! it either fully commits or fails with no partial mutation visible.
//!
//! **No outer-surface concerns**: parsing text commands into an NRIC
//! plus descriptor, rendering records, and persisting the store all
//! live outside this crate. The [`RecordStore`] trait is the seam.

pub mod descriptor;
pub mod edit;
pub mod error;
pub mod person;
pub mod store;

#[cfg(test)]
pub(crate) mod testkit;

pub use descriptor::EditPersonDescriptor;
pub use edit::{CommandOutcome, EditCommand};
pub use error::{CommandError, CommandResult};
pub use person::{Doctor, Patient, Person, PersonDetails};
pub use store::{show_all_persons, InMemoryStore, PersonFilter, RecordStore, StoreError};
