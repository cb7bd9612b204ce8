// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! PETA-specific API errors and such.

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Http(::hyper::Error);
        Json(::serde_json::Error);
        UrlParse(::url::ParseError);
    }

    errors {
        /// Bad credentials, or no authentication material supplied at all.
        AccountError(account: String, message: String) {
            description("account error")
            display("account error <account = {}> :: {}", account, message)
        }
        /// The portal answered with a non-success HTTP status.
        NetworkError(operation: String, status: ::hyper::StatusCode) {
            description("network error")
            display("network error during {} :: status {}", operation, status)
        }
        /// HTTP success, but the body carries the portal's rejection marker.
        /// Holds the serialized restriction document for diagnosis.
        FetchError(restriction: String) {
            description("fetch error")
            display("portal rejected the restriction document :: {}", restriction)
        }
        RequestTimeout(operation: String) {
            description("request timeout")
            display("request timed out during {}", operation)
        }
    }
}
