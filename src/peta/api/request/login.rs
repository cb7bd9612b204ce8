// Copyright (c) 2019 PETA Developers. All Rights Reserved.

use url::form_urlencoded;

/// A type representing a login request.
///
/// The ticket endpoint takes a URL-encoded form body, not JSON.
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Login {
    pub name: String,
    pub password: String,
}

impl Login {
    pub fn new(name: String, password: String) -> Self {
        Self { name, password }
    }

    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("password", &self.password)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_is_url_encoded() {
        let login = Login::new("user@bgi.com".to_string(), "p&ss word".to_string());
        assert_eq!(
            login.to_form_body(),
            "name=user%40bgi.com&password=p%26ss+word"
        );
    }
}
