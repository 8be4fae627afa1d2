//! The edit operation.
//!
//! An edit locates the single record carrying a given NRIC, merges a
//! sparse descriptor onto a copy of it, validates role constraints,
//! checks the result for identity collisions, and commits the
//! replacement into the store. It either fully commits or fails with
//! no partial mutation.

use crate::descriptor::EditPersonDescriptor;
use crate::error::{CommandError, CommandResult};
use crate::person::{Doctor, Patient, Person, PersonDetails};
use crate::store::{show_all_persons, RecordStore};
use medreg_types::Nric;

/// What a successful command hands back to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    feedback: String,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    /// The message to show the user.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// Edits the record identified by an NRIC, applying only the fields
/// set in the descriptor and preserving all others.
pub struct EditCommand {
    nric: Nric,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    /// Creates an edit for the record carrying `nric`.
    ///
    /// The descriptor is cloned on entry, so the caller may keep
    /// mutating its own copy without affecting this command.
    pub fn new(nric: Nric, descriptor: &EditPersonDescriptor) -> Self {
        Self {
            nric,
            descriptor: descriptor.clone(),
        }
    }

    /// Runs the edit against the store.
    ///
    /// # Errors
    ///
    /// - `NoFieldsSpecified` if the descriptor is entirely empty. This
    ///   is checked before the store is touched.
    /// - `RecordNotFound` if no record carries the NRIC.
    /// - `InternalConsistency` if more than one record carries it.
    /// - `InapplicableFieldForRole` if the target is a doctor and the
    ///   descriptor sets a condition or blood type.
    /// - `DuplicateRecord` if the edit changes the record's identity
    ///   onto one that another record already holds.
    ///
    /// On any error the store is left untouched.
    pub fn execute(&self, store: &mut dyn RecordStore) -> CommandResult<CommandOutcome> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NoFieldsSpecified);
        }

        let original = self.find_target(store)?;
        tracing::debug!(nric = %self.nric, "resolved edit target");

        let edited = match &original {
            Person::Patient(patient) => Person::Patient(self.edited_patient(patient)),
            Person::Doctor(doctor) => {
                if self.descriptor.condition().is_some() || self.descriptor.blood_type().is_some()
                {
                    return Err(CommandError::InapplicableFieldForRole);
                }
                Person::Doctor(self.edited_doctor(doctor))
            }
        };

        // Only an identity-changing edit can collide with another
        // record; an identity-preserving one would only ever match
        // itself.
        if !original.is_same_person(&edited) && store.has_person(&edited) {
            tracing::warn!(
                nric = %self.nric,
                new_nric = %edited.nric(),
                "edit rejected: new identity collides with an existing record"
            );
            return Err(CommandError::DuplicateRecord);
        }

        store.replace_person(&original, edited.clone())?;
        store.set_visible_filter(show_all_persons());

        Ok(CommandOutcome::new(format!("Edited Person: {edited}")))
    }

    /// Resolves the unique record carrying this command's NRIC.
    fn find_target(&self, store: &dyn RecordStore) -> CommandResult<Person> {
        let mut matches: Vec<Person> = store
            .doctors()
            .iter()
            .cloned()
            .map(Person::Doctor)
            .chain(store.patients().iter().cloned().map(Person::Patient))
            .filter(|person| person.nric() == &self.nric)
            .collect();

        match matches.len() {
            0 => Err(CommandError::RecordNotFound {
                nric: self.nric.clone(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(CommandError::InternalConsistency {
                nric: self.nric.clone(),
                count,
            }),
        }
    }

    /// Merges the descriptor onto the common field set, falling back to
    /// the original per field.
    fn merged_details(&self, original: &PersonDetails) -> PersonDetails {
        let descriptor = &self.descriptor;
        PersonDetails {
            name: descriptor
                .name()
                .cloned()
                .unwrap_or_else(|| original.name.clone()),
            phone: descriptor
                .phone()
                .cloned()
                .unwrap_or_else(|| original.phone.clone()),
            email: descriptor
                .email()
                .cloned()
                .unwrap_or_else(|| original.email.clone()),
            address: descriptor
                .address()
                .cloned()
                .unwrap_or_else(|| original.address.clone()),
            remark: descriptor
                .remark()
                .cloned()
                .unwrap_or_else(|| original.remark.clone()),
            gender: descriptor.gender().unwrap_or(original.gender),
            nric: descriptor
                .nric()
                .cloned()
                .unwrap_or_else(|| original.nric.clone()),
            tags: descriptor
                .tags()
                .cloned()
                .unwrap_or_else(|| original.tags.clone()),
        }
    }

    fn edited_doctor(&self, original: &Doctor) -> Doctor {
        Doctor::new(self.merged_details(original.details()))
    }

    fn edited_patient(&self, original: &Patient) -> Patient {
        Patient::new(
            self.merged_details(original.details()),
            self.descriptor
                .emergency_contact()
                .cloned()
                .unwrap_or_else(|| original.emergency_contact().clone()),
            self.descriptor
                .condition()
                .cloned()
                .unwrap_or_else(|| original.condition().clone()),
            self.descriptor
                .blood_type()
                .unwrap_or_else(|| original.blood_type()),
        )
    }
}
