//! Export adapters: pure consumers of a read-only record snapshot.
//!
//! Both realizations take an ordered snapshot plus a title and render it
//! into a text artifact; neither has any access back into the store. Field
//! order is fixed across every artifact: id, name, email, phone, language,
//! gender, date of birth.

use crate::model::Student;

pub mod csv;
pub mod report;

pub const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "Language",
    "Gender",
    "Date of Birth",
];

/// One record rendered as the fixed column sequence.
pub fn row(student: &Student) -> [String; 7] {
    let f = &student.fields;
    [
        student.id.to_string(),
        f.name.clone(),
        f.email.clone(),
        f.phone.clone(),
        f.language.clone(),
        f.gender.clone(),
        f.dob.clone(),
    ]
}
