//! The record model: doctors, patients, and the `Person` variant type.
//!
//! Records are immutable once constructed. There are no setters; an
//! edit builds a replacement instance and swaps it into the store.

use medreg_types::{
    Address, BloodType, Condition, Email, Gender, Name, Nric, Phone, Remark, Tag,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The field set shared by every record variant.
///
/// This doubles as the constructor parameter bundle for [`Doctor`] and
/// [`Patient`]. Tags are an ordered set, so tag order never affects
/// equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub remark: Remark,
    pub gender: Gender,
    pub nric: Nric,
    pub tags: BTreeSet<Tag>,
}

impl fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Gender: {}; NRIC: {}; Remark: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.gender, self.nric, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

/// A doctor record. Carries only the common field set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    details: PersonDetails,
}

impl Doctor {
    /// Constructs a doctor from a fully populated field set.
    pub fn new(details: PersonDetails) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        &self.details.name
    }

    pub fn phone(&self) -> &Phone {
        &self.details.phone
    }

    pub fn email(&self) -> &Email {
        &self.details.email
    }

    pub fn address(&self) -> &Address {
        &self.details.address
    }

    pub fn remark(&self) -> &Remark {
        &self.details.remark
    }

    pub fn gender(&self) -> Gender {
        self.details.gender
    }

    pub fn nric(&self) -> &Nric {
        &self.details.nric
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details.tags
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

/// A patient record: the common field set plus clinical fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    details: PersonDetails,
    emergency_contact: Phone,
    condition: Condition,
    blood_type: BloodType,
}

impl Patient {
    /// Constructs a patient from a fully populated field set and its
    /// clinical fields.
    pub fn new(
        details: PersonDetails,
        emergency_contact: Phone,
        condition: Condition,
        blood_type: BloodType,
    ) -> Self {
        Self {
            details,
            emergency_contact,
            condition,
            blood_type,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        &self.details.name
    }

    pub fn phone(&self) -> &Phone {
        &self.details.phone
    }

    pub fn email(&self) -> &Email {
        &self.details.email
    }

    pub fn address(&self) -> &Address {
        &self.details.address
    }

    pub fn remark(&self) -> &Remark {
        &self.details.remark
    }

    pub fn gender(&self) -> Gender {
        self.details.gender
    }

    pub fn nric(&self) -> &Nric {
        &self.details.nric
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details.tags
    }

    pub fn emergency_contact(&self) -> &Phone {
        &self.emergency_contact
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn blood_type(&self) -> BloodType {
        self.blood_type
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Emergency Contact: {}; Condition: {}; Blood Type: {}",
            self.details, self.emergency_contact, self.condition, self.blood_type
        )
    }
}

/// A record of either variant.
///
/// Dispatch is on the variant tag; a doctor simply has no slot for the
/// clinical fields, so reading them on the wrong variant cannot be
/// expressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    Doctor(Doctor),
    Patient(Patient),
}

impl Person {
    pub fn details(&self) -> &PersonDetails {
        match self {
            Person::Doctor(doctor) => doctor.details(),
            Person::Patient(patient) => patient.details(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.details().name
    }

    pub fn phone(&self) -> &Phone {
        &self.details().phone
    }

    pub fn email(&self) -> &Email {
        &self.details().email
    }

    pub fn address(&self) -> &Address {
        &self.details().address
    }

    pub fn remark(&self) -> &Remark {
        &self.details().remark
    }

    pub fn gender(&self) -> Gender {
        self.details().gender
    }

    pub fn nric(&self) -> &Nric {
        &self.details().nric
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details().tags
    }

    /// Identity equivalence: true when both records identify the same
    /// person, regardless of the remaining fields.
    ///
    /// This is deliberately weaker than `==`, which compares every
    /// field. Collision detection uses this predicate so that an edit
    /// cannot silently merge two distinct people.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.nric() == other.nric()
    }
}

impl From<Doctor> for Person {
    fn from(doctor: Doctor) -> Self {
        Person::Doctor(doctor)
    }
}

impl From<Patient> for Person {
    fn from(patient: Patient) -> Self {
        Person::Patient(patient)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Doctor(doctor) => write!(f, "{doctor}"),
            Person::Patient(patient) => write!(f, "{patient}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{details, patient, tag_set};

    #[test]
    fn same_person_compares_identity_only() {
        let a = Person::Patient(patient("S1111111A", "Alex", "91110000"));
        let mut changed = details("S1111111A", "Alex", "91110000");
        changed.phone = Phone::new("98765432").unwrap();
        let b = Person::Doctor(Doctor::new(changed));

        // Same NRIC: same person, even across variants and fields.
        assert!(a.is_same_person(&b));
        assert_ne!(a, b);

        let c = Person::Patient(patient("S2222222B", "Alex", "91110000"));
        assert!(!a.is_same_person(&c));
    }

    #[test]
    fn equality_ignores_tag_insertion_order() {
        let mut forwards = details("S1111111A", "Alex", "91110000");
        forwards.tags = tag_set(&["diabetic", "ward3"]);
        let mut backwards = details("S1111111A", "Alex", "91110000");
        backwards.tags = tag_set(&["ward3", "diabetic"]);

        assert_eq!(Doctor::new(forwards), Doctor::new(backwards));
    }

    #[test]
    fn patient_display_appends_clinical_fields() {
        let rendered = patient("S1111111A", "Alex", "91110000").to_string();
        assert!(rendered.starts_with("Alex; Phone: 91110000;"));
        assert!(rendered.contains("NRIC: S1111111A"));
        assert!(rendered.contains("Condition: "));
        assert!(rendered.contains("Blood Type: "));
    }
}
