use serde::{Deserialize, Serialize};

/// Store-assigned record identifier. Millisecond-timestamp based, unique
/// within a store for its whole lifetime, never reused or mutated.
pub type StudentId = i64;

/// The descriptive fields of a student record.
///
/// All fields are opaque strings from the registry's perspective; their
/// semantics are enforced by the validation layer in front of the store,
/// never by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub language: String,
    pub gender: String,
    pub dob: String,
}

/// One student record: an identity plus its current field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub fields: StudentFields,
}

impl Student {
    pub fn new(id: StudentId, fields: StudentFields) -> Self {
        Self { id, fields }
    }

    /// Every value of the record rendered as text, id included, in a fixed
    /// order. This is the haystack the free-text filter matches against.
    pub fn values_as_text(&self) -> Vec<String> {
        let f = &self.fields;
        vec![
            self.id.to_string(),
            f.name.clone(),
            f.email.clone(),
            f.phone.clone(),
            f.password.clone(),
            f.confirm_password.clone(),
            f.language.clone(),
            f.gender.clone(),
            f.dob.clone(),
        ]
    }
}

/// The fixed sample records every fresh registry is seeded with.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student::new(
            1,
            StudentFields {
                name: "prakash".to_string(),
                email: "praksh@gmail.com".to_string(),
                phone: "6789078989".to_string(),
                password: "#Prakash@1".to_string(),
                confirm_password: "#Prakash@1".to_string(),
                language: "Tamil".to_string(),
                gender: "Male".to_string(),
                dob: "1111-11-11".to_string(),
            },
        ),
        Student::new(
            2,
            StudentFields {
                name: "tamil".to_string(),
                email: "limat@gmail.in".to_string(),
                phone: "9999999999".to_string(),
                password: "#Tamil@123".to_string(),
                confirm_password: "#Tamil@123".to_string(),
                language: "Spanish".to_string(),
                gender: "Male".to_string(),
                dob: "2001-11-26".to_string(),
            },
        ),
    ]
}
