//! The record store: the seam between the edit logic and whatever owns
//! the live record collections.
//!
//! The store owns the canonical record instances. Commands only ever
//! hold transient clones while they work, and hand a replacement back
//! through [`RecordStore::replace_person`].

use crate::person::{Doctor, Patient, Person};
use medreg_types::Nric;

/// A predicate controlling which records the presentation layer shows.
pub type PersonFilter = Box<dyn Fn(&Person) -> bool + Send + Sync>;

/// The filter that shows every record. Commands reset the store to
/// this after a successful mutation.
pub fn show_all_persons() -> PersonFilter {
    Box::new(|_| true)
}

/// Errors raised by store mutations.
///
/// These signal contract violations by the calling code, not
/// user-correctable input problems.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record to replace is not in the store")]
    MissingTarget,
    #[error("a record with the same identity is already in the store")]
    DuplicateIdentity,
}

/// The collection of live records, split by role.
///
/// Implementations guarantee at most one record per NRIC across both
/// rosters. The execution model is single-threaded: a command runs
/// lookup, validation and commit to completion with no interleaved
/// writer, so the check-then-commit sequence needs no further guard.
pub trait RecordStore {
    /// All doctor records.
    fn doctors(&self) -> &[Doctor];

    /// All patient records.
    fn patients(&self) -> &[Patient];

    /// True if any record in the store identifies the same person.
    fn has_person(&self, person: &Person) -> bool {
        self.holds_nric(person.nric())
    }

    /// True if any record in the store carries the given NRIC.
    fn holds_nric(&self, nric: &Nric) -> bool {
        self.doctors().iter().any(|doctor| doctor.nric() == nric)
            || self.patients().iter().any(|patient| patient.nric() == nric)
    }

    /// Replaces `target` with `edited` in a single logical step.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingTarget` if `target` is not in the
    /// store.
    fn replace_person(&mut self, target: &Person, edited: Person) -> Result<(), StoreError>;

    /// Sets the presentation filter. Data is unaffected.
    fn set_visible_filter(&mut self, filter: PersonFilter);
}

/// The in-memory store backing the registry.
pub struct InMemoryStore {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    filter: PersonFilter,
}

impl InMemoryStore {
    /// Creates an empty store showing all records.
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            patients: Vec::new(),
            filter: show_all_persons(),
        }
    }

    /// Adds a doctor record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateIdentity` if any record already
    /// carries the same NRIC.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<(), StoreError> {
        if self.holds_nric(doctor.nric()) {
            return Err(StoreError::DuplicateIdentity);
        }
        self.doctors.push(doctor);
        Ok(())
    }

    /// Adds a patient record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateIdentity` if any record already
    /// carries the same NRIC.
    pub fn add_patient(&mut self, patient: Patient) -> Result<(), StoreError> {
        if self.holds_nric(patient.nric()) {
            return Err(StoreError::DuplicateIdentity);
        }
        self.patients.push(patient);
        Ok(())
    }

    /// The records the active filter admits, for the presentation
    /// layer. Doctors come first, then patients, each in insertion
    /// order.
    pub fn visible_persons(&self) -> Vec<Person> {
        self.doctors
            .iter()
            .cloned()
            .map(Person::Doctor)
            .chain(self.patients.iter().cloned().map(Person::Patient))
            .filter(|person| (self.filter)(person))
            .collect()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryStore {
    fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    fn patients(&self) -> &[Patient] {
        &self.patients
    }

    fn replace_person(&mut self, target: &Person, edited: Person) -> Result<(), StoreError> {
        match (target, edited) {
            (Person::Doctor(old), Person::Doctor(new)) => {
                let index = self
                    .doctors
                    .iter()
                    .position(|doctor| doctor == old)
                    .ok_or(StoreError::MissingTarget)?;
                self.doctors[index] = new;
            }
            (Person::Patient(old), Person::Patient(new)) => {
                let index = self
                    .patients
                    .iter()
                    .position(|patient| patient == old)
                    .ok_or(StoreError::MissingTarget)?;
                self.patients[index] = new;
            }
            (Person::Doctor(old), Person::Patient(new)) => {
                let index = self
                    .doctors
                    .iter()
                    .position(|doctor| doctor == old)
                    .ok_or(StoreError::MissingTarget)?;
                self.doctors.remove(index);
                self.patients.push(new);
            }
            (Person::Patient(old), Person::Doctor(new)) => {
                let index = self
                    .patients
                    .iter()
                    .position(|patient| patient == old)
                    .ok_or(StoreError::MissingTarget)?;
                self.patients.remove(index);
                self.doctors.push(new);
            }
        }
        Ok(())
    }

    fn set_visible_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }
}
