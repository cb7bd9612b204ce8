// Copyright (c) 2019 PETA Developers. All Rights Reserved.

/// An identifier for a PETA study.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyId(String);

impl StudyId {
    #[allow(dead_code)]
    pub fn new<S: Into<String>>(id: S) -> Self {
        StudyId(id.into())
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<String> for StudyId {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl AsRef<str> for StudyId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<StudyId> for String {
    fn from(id: StudyId) -> Self {
        id.0
    }
}

impl From<String> for StudyId {
    fn from(id: String) -> Self {
        StudyId::new(id)
    }
}

impl<'a> From<&'a str> for StudyId {
    fn from(id: &'a str) -> Self {
        StudyId::new(id)
    }
}
