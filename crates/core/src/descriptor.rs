//! The sparse edit descriptor.
//!
//! Each slot is optional; an empty slot means "leave that field
//! unchanged". A descriptor with every slot empty is the canonical
//! no-op and is rejected before an edit is attempted.

use crate::person::Patient;
use medreg_types::{
    Address, BloodType, Condition, Email, Gender, Name, Nric, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

/// Details to edit a person with. Each set slot replaces the
/// corresponding field of the target record wholesale; unset slots are
/// preserved.
///
/// Cloning a descriptor is a deep defensive copy, tag set included.
/// [`crate::EditCommand::new`] clones on entry so that later mutation
/// of the caller's descriptor cannot affect an in-flight edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditPersonDescriptor {
    name: Option<Name>,
    phone: Option<Phone>,
    emergency_contact: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    remark: Option<Remark>,
    gender: Option<Gender>,
    nric: Option<Nric>,
    tags: Option<BTreeSet<Tag>>,
    condition: Option<Condition>,
    blood_type: Option<BloodType>,
    patients: Option<Vec<Patient>>,
}

impl EditPersonDescriptor {
    /// Creates a descriptor with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one slot is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.emergency_contact.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.remark.is_some()
            || self.gender.is_some()
            || self.nric.is_some()
            || self.tags.is_some()
            || self.condition.is_some()
            || self.blood_type.is_some()
            || self.patients.is_some()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = Some(phone);
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn set_emergency_contact(&mut self, phone: Phone) {
        self.emergency_contact = Some(phone);
    }

    pub fn emergency_contact(&self) -> Option<&Phone> {
        self.emergency_contact.as_ref()
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn set_remark(&mut self, remark: Remark) {
        self.remark = Some(remark);
    }

    pub fn remark(&self) -> Option<&Remark> {
        self.remark.as_ref()
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn set_nric(&mut self, nric: Nric) {
        self.nric = Some(nric);
    }

    pub fn nric(&self) -> Option<&Nric> {
        self.nric.as_ref()
    }

    /// Replaces the tag slot. The whole set is taken at once; there is
    /// no per-tag add or remove.
    pub fn set_tags(&mut self, tags: BTreeSet<Tag>) {
        self.tags = Some(tags);
    }

    /// Returns a read-only view of the tag slot. Mutating the returned
    /// set is not expressible through the shared reference.
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = Some(condition);
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn set_blood_type(&mut self, blood_type: BloodType) {
        self.blood_type = Some(blood_type);
    }

    pub fn blood_type(&self) -> Option<BloodType> {
        self.blood_type
    }

    pub fn set_patients(&mut self, patients: Vec<Patient>) {
        self.patients = Some(patients);
    }

    pub fn patients(&self) -> Option<&[Patient]> {
        self.patients.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::tag_set;

    #[test]
    fn empty_descriptor_reports_nothing_edited() {
        assert!(!EditPersonDescriptor::new().is_any_field_edited());
    }

    #[test]
    fn any_single_slot_counts_as_edited() {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_remark(Remark::new(""));
        assert!(descriptor.is_any_field_edited());

        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_tags(BTreeSet::new());
        assert!(descriptor.is_any_field_edited());

        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_blood_type(BloodType::OPositive);
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let mut original = EditPersonDescriptor::new();
        original.set_tags(tag_set(&["diabetic"]));

        let copy = original.clone();
        original.set_tags(tag_set(&["diabetic", "ward3"]));
        original.set_name(Name::new("Someone Else").unwrap());

        assert_eq!(copy.tags(), Some(&tag_set(&["diabetic"])));
        assert_eq!(copy.name(), None);
    }

    #[test]
    fn equality_covers_every_slot() {
        let mut a = EditPersonDescriptor::new();
        let mut b = EditPersonDescriptor::new();
        assert_eq!(a, b);

        a.set_phone(Phone::new("91110000").unwrap());
        assert_ne!(a, b);

        b.set_phone(Phone::new("91110000").unwrap());
        assert_eq!(a, b);
    }
}
