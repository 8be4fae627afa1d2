//! Shared fixtures for the crate's tests.

use crate::person::{Doctor, Patient, PersonDetails};
use medreg_types::{
    Address, BloodType, Condition, Email, Gender, Name, Nric, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

pub fn nric(raw: &str) -> Nric {
    Nric::new(raw).expect("fixture nric is valid")
}

pub fn tag_set(raw: &[&str]) -> BTreeSet<Tag> {
    raw.iter()
        .map(|tag| Tag::new(tag).expect("fixture tag is valid"))
        .collect()
}

pub fn details(id: &str, name: &str, phone: &str) -> PersonDetails {
    PersonDetails {
        name: Name::new(name).expect("fixture name is valid"),
        phone: Phone::new(phone).expect("fixture phone is valid"),
        email: Email::new("someone@example.com").expect("fixture email is valid"),
        address: Address::new("Blk 30 Geylang Street 29, #06-40").expect("fixture address"),
        remark: Remark::new(""),
        gender: Gender::Female,
        nric: nric(id),
        tags: BTreeSet::new(),
    }
}

pub fn doctor(id: &str, name: &str, phone: &str) -> Doctor {
    Doctor::new(details(id, name, phone))
}

pub fn patient(id: &str, name: &str, phone: &str) -> Patient {
    Patient::new(
        details(id, name, phone),
        Phone::new("90001000").expect("fixture phone is valid"),
        Condition::new("stable").expect("fixture condition is valid"),
        BloodType::OPositive,
    )
}
