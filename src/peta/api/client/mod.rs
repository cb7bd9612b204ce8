// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! Functions to interact with the PETA data portal.

use std::env;
use std::path::Path;
use std::sync::{Arc, Mutex};

use futures::*;

use hyper;
use hyper::client::{Client, HttpConnector};
use hyper::header::{HeaderMap, HeaderValue};
use hyper_tls::HttpsConnector;

use serde;
use serde_json;

use tokio;

use url;

use super::{request, response};
use peta;
use peta::config::Config;
use peta::error::ErrorKind;
use peta::model::{DataRestriction, Session, SessionToken, StudyId, Table};
use peta::util::futures::{into_future_trait, return4};

// The portal rejects requests from unrecognized clients, so every request
// carries a fixed browser user-agent:
const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/63.0.3239.132 Safari/537.36";

// Marker the portal embeds in an HTTP 200 body when it rejects the posted
// restriction document:
const RESPONSE_ERROR_MARKER: &str = "\"responseCode\":\"-2\"";

// A login response with this body means the credentials were wrong:
const EMPTY_TICKET_BODY: &str = "{}";

mod routes {
    pub const GET_TICKET: &str = "/api/peta/user/getticket";
    pub const GET_MAF_DATA: &str = "/api/peta/mutation/getMAFData";
    pub const SAMPLE_CLINICAL_DATA: &str = "/api/peta/clinical/sampleClinicalData";
    // CNV/SV retrieval is disabled portal-side; the routes are kept for
    // when the endpoints come back.
    #[allow(dead_code)]
    pub const GET_CNV_DATA: &str = "/api/peta/mutation/getCNVData";
    #[allow(dead_code)]
    pub const GET_SV_DATA: &str = "/api/peta/mutation/getSVData";
    pub const GET_STUDIES: &str = "/api/peta/home/getStudies";
}

struct PetaImpl {
    config: Config,
    http_client: Client<HttpsConnector<HttpConnector>>,
    session: Option<Session>,
    data_restriction: DataRestriction,
}

/// The PETA client.
pub struct Peta {
    // See https://users.rust-lang.org/t/best-pattern-for-async-update-of-self-object/15205
    // for notes on this pattern:
    inner: Arc<Mutex<PetaImpl>>,
}

impl Clone for Peta {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// =============================================================================

// debug logging
macro_rules! peta_debug {
    ($msg:expr, $($var:ident = $value:expr),*) => {
        if env::var("PETA_LOG_LEVEL").unwrap_or_else(|_| String::from("INFO"))
            == "DEBUG"
        {
            eprintln!("[DEBUG] {}", format!($msg, $($var = $value),*))
        }
    }
}

// =============================================================================

fn chunk_to_string(body: &hyper::Chunk) -> String {
    let as_bytes: Vec<u8> = body.to_vec();
    String::from_utf8_lossy(&as_bytes).to_string()
}

// Collects the `name=value` pairs from the login response's `Set-Cookie`
// headers, dropping cookie attributes like `Path` and `Expires`.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let pairs: Vec<String> = headers
        .get_all(hyper::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(|pair| pair.trim().to_string())
        .filter(|pair| !pair.is_empty())
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}

// Decides what a ticket-endpoint response means: a non-success status is a
// network failure, an empty JSON body means bad credentials, and anything
// else must have set a session cookie.
fn interpret_ticket(
    account: &str,
    status: hyper::StatusCode,
    cookie: Option<String>,
    body: &str,
) -> peta::Result<Session> {
    if !status.is_success() {
        bail!(ErrorKind::NetworkError("login".to_string(), status));
    }
    if body.trim() == EMPTY_TICKET_BODY {
        bail!(ErrorKind::AccountError(
            account.to_string(),
            "error in username or password".to_string()
        ));
    }
    match cookie {
        Some(cookie) => Ok(Session::Cookie(cookie)),
        None => bail!(ErrorKind::AccountError(
            account.to_string(),
            "login response did not set a session cookie".to_string()
        )),
    }
}

// Shared failure policy for every fetch endpoint. The rejection marker is
// checked regardless of the HTTP status being success.
fn check_fetch_response(
    operation: &str,
    status: hyper::StatusCode,
    restriction: &str,
    body: &str,
) -> peta::Result<()> {
    if !status.is_success() {
        bail!(ErrorKind::NetworkError(operation.to_string(), status));
    }
    if body.contains(RESPONSE_ERROR_MARKER) {
        bail!(ErrorKind::FetchError(restriction.to_string()));
    }
    Ok(())
}

// ============================================================================

impl Peta {
    /// Create a new, unauthenticated PETA client.
    pub fn new(config: Config) -> Self {
        let connector = HttpsConnector::new(4).expect("peta:couldn't create https connector");
        let http_client = Client::builder().build(connector);
        Self {
            inner: Arc::new(Mutex::new(PetaImpl {
                config,
                http_client,
                session: None,
                data_restriction: Default::default(),
            })),
        }
    }

    /// Create an authenticated client from either a pre-issued session
    /// token (no network call) or a name/password pair (issues a login
    /// request). Supplying neither fails with an `AccountError` before any
    /// request is made.
    pub fn connect<S: Into<String>>(
        config: Config,
        token: Option<SessionToken>,
        credentials: Option<(S, S)>,
    ) -> peta::Future<Self> {
        match (token, credentials) {
            (Some(token), _) => {
                let client = Self::new(config);
                client.set_session(Some(Session::Token(token)));
                into_future_trait(future::ok(client))
            }
            (None, Some((name, password))) => {
                let client = Self::new(config);
                let result = client.clone();
                into_future_trait(client.login(name, password).map(move |_| result))
            }
            (None, None) => into_future_trait(future::err(
                ErrorKind::AccountError(
                    String::new(),
                    "a session token or a name/password pair is required".to_string(),
                )
                .into(),
            )),
        }
    }

    fn session(&self) -> Option<Session> {
        self.inner.lock().unwrap().session.clone()
    }

    /// Set the session the client is associated with.
    pub fn set_session(&self, session: Option<Session>) {
        self.inner.lock().unwrap().session = session;
    }

    /// Set a pre-issued session token.
    pub fn set_session_token(&self, token: Option<SessionToken>) {
        self.set_session(token.map(Session::Token));
    }

    /// Test if the client holds a session.
    pub fn has_session(&self) -> bool {
        self.session().is_some()
    }

    fn get_url(&self) -> url::Url {
        self.inner.lock().unwrap().config.api_url()
    }

    /// The currently active restriction document.
    pub fn data_restriction(&self) -> DataRestriction {
        self.inner.lock().unwrap().data_restriction.clone()
    }

    /// Wholesale-replace the active restriction document.
    pub fn set_data_restriction(&self, restriction: DataRestriction) {
        self.inner.lock().unwrap().data_restriction = restriction;
    }

    /// Replace the study-id list in the active restriction document. The
    /// ids are not validated against the portal.
    pub fn select_studys(&self, study_ids: Vec<StudyId>) {
        self.inner.lock().unwrap().data_restriction.study_ids = study_ids;
    }

    /// Replace the active restriction document by parsing JSON text.
    pub fn set_data_restriction_from_json_string(&self, text: &str) -> peta::Result<()> {
        let restriction = DataRestriction::from_json_str(text)?;
        self.set_data_restriction(restriction);
        Ok(())
    }

    /// Replace the active restriction document from a JSON file.
    pub fn set_data_restriction_from_json_file<P: AsRef<Path>>(&self, path: P) -> peta::Result<()> {
        let restriction = DataRestriction::from_json_file(path)?;
        self.set_data_restriction(restriction);
        Ok(())
    }

    // POSTs a body to a fixed route with the stored session and the fixed
    // headers, resolving to the status, response headers, and full body.
    fn post_raw(
        &self,
        operation: &'static str,
        route: &str,
        body: hyper::Body,
        content_type: &'static str,
    ) -> peta::Future<(hyper::StatusCode, HeaderMap, hyper::Chunk)> {
        let mut use_url = self.get_url();
        use_url.set_path(route);

        let session = self.session();
        let (client, timeout) = {
            let inner = self.inner.lock().unwrap();
            (inner.http_client.clone(), inner.config.request_timeout())
        };

        let uri = use_url
            .to_string()
            .parse::<hyper::Uri>()
            .into_future()
            .map_err(|e| peta::Error::with_chain(e, "peta:request:url"));

        let f = uri
            .and_then(move |uri| {
                let mut req = hyper::Request::builder()
                    .method(hyper::Method::POST)
                    .uri(uri)
                    .body(body)
                    .unwrap();

                {
                    let headers = req.headers_mut();
                    headers.insert(
                        hyper::header::USER_AGENT,
                        HeaderValue::from_static(USER_AGENT_STRING),
                    );
                    headers.insert(
                        hyper::header::CONTENT_TYPE,
                        HeaderValue::from_static(content_type),
                    );
                    match session {
                        Some(Session::Cookie(cookie)) => {
                            headers.insert(
                                hyper::header::COOKIE,
                                HeaderValue::from_str(&cookie).unwrap(),
                            );
                        }
                        Some(Session::Token(token)) => {
                            headers.insert(
                                hyper::header::AUTHORIZATION,
                                HeaderValue::from_str(&format!(
                                    "Bearer {}",
                                    String::from(token)
                                ))
                                .unwrap(),
                            );
                        }
                        None => {}
                    }
                }

                client.request(req).map_err(move |e| {
                    peta::Error::with_chain(
                        e,
                        format!("peta:request<{operation}>:execute", operation = operation),
                    )
                })
            })
            .and_then(move |resp| {
                let (parts, body) = resp.into_parts();
                body.concat2()
                    .map_err(move |e| {
                        peta::Error::with_chain(
                            e,
                            format!("peta:request<{operation}>:response", operation = operation),
                        )
                    })
                    .map(move |chunk| (parts.status, parts.headers, chunk))
            });

        match timeout {
            Some(duration) => {
                into_future_trait(tokio::timer::Timeout::new(f, duration).map_err(move |e| {
                    match e.into_inner() {
                        Some(inner) => inner,
                        None => ErrorKind::RequestTimeout(operation.to_string()).into(),
                    }
                }))
            }
            None => into_future_trait(f),
        }
    }

    // POSTs a JSON payload, applies the shared fetch failure policy, and
    // parses the body into a typeful representation. On a portal-side
    // rejection the serialized payload rides along in the `FetchError`.
    fn post_json<P, Q>(&self, operation: &'static str, route: &str, payload: &P) -> peta::Future<Q>
    where
        P: serde::Serialize,
        Q: 'static + Send + serde::de::DeserializeOwned,
    {
        let serialized = match serde_json::to_string(payload)
            .map_err(|e| peta::Error::with_chain(e, "peta:request:serde"))
        {
            Ok(serialized) => serialized,
            Err(err) => return into_future_trait(future::err(err)),
        };
        let diagnostic = serialized.clone();

        let f = self
            .post_raw(
                operation,
                route,
                hyper::Body::from(serialized),
                "application/json",
            )
            .and_then(move |(status, _headers, body)| {
                let body = chunk_to_string(&body);
                check_fetch_response(operation, status, &diagnostic, &body)?;
                peta_debug!(
                    "peta:request<{operation}>:serialize:payload = {payload}",
                    operation = operation,
                    payload = body
                );
                serde_json::from_str(&body).map_err(move |e| {
                    peta::Error::with_chain(
                        e,
                        format!(
                            "peta:request<{operation}>:serialize:payload = {payload}",
                            operation = operation,
                            payload = body
                        ),
                    )
                })
            });
        into_future_trait(f)
    }

    /// Log in to the PETA portal.
    ///
    /// If successful, the client will store the session cookie issued by
    /// the ticket endpoint for subsequent API calls.
    pub fn login<S: Into<String>>(&self, name: S, password: S) -> peta::Future<Session> {
        let name = name.into();
        let payload = request::Login::new(name.clone(), password.into());
        let this = self.clone();
        let f = self
            .post_raw(
                "login",
                routes::GET_TICKET,
                hyper::Body::from(payload.to_form_body()),
                "application/x-www-form-urlencoded",
            )
            .and_then(move |(status, headers, body)| {
                let body = chunk_to_string(&body);
                let cookie = session_cookie(&headers);
                interpret_ticket(&name, status, cookie, &body)
            })
            .map(move |session| {
                this.set_session(Some(session.clone()));
                session
            });
        into_future_trait(f)
    }

    /// Fetch the somatic mutation (MAF) records selected by the current
    /// restriction document.
    pub fn fetch_mutation_data(&self) -> peta::Future<Table> {
        let f = self
            .post_json::<_, Vec<serde_json::Map<String, serde_json::Value>>>(
                "fetch mutation data",
                routes::GET_MAF_DATA,
                &self.data_restriction(),
            )
            .map(|records| Table::from_records(&records));
        into_future_trait(f)
    }

    /// Fetch the clinical annotations selected by the current restriction
    /// document, flattened to one row per sample.
    pub fn fetch_clinical_data(&self) -> peta::Future<Table> {
        let f = self
            .post_json::<_, response::Clinical>(
                "fetch clinical data",
                routes::SAMPLE_CLINICAL_DATA,
                &self.data_restriction(),
            )
            .map(response::Clinical::into_table);
        into_future_trait(f)
    }

    /// Copy-number retrieval is disabled portal-side: resolves to an empty
    /// table without issuing a request, regardless of the restriction.
    pub fn fetch_cnv_data(&self) -> peta::Future<Table> {
        into_future_trait(future::ok(Table::empty()))
    }

    /// Structural-variant retrieval is disabled portal-side: resolves to an
    /// empty table without issuing a request, regardless of the restriction.
    pub fn fetch_sv_data(&self) -> peta::Future<Table> {
        into_future_trait(future::ok(Table::empty()))
    }

    /// Fetch all four datasets in fixed order: clinical, mutation, CNV, SV.
    /// The CNV and SV entries are the disabled endpoints' empty tables.
    pub fn fetch(&self) -> peta::Future<(Table, Table, Table, Table)> {
        return4(
            self.fetch_clinical_data(),
            self.fetch_mutation_data(),
            self.fetch_cnv_data(),
            self.fetch_sv_data(),
        )
    }

    /// List the studies visible to the current session, flattened into one
    /// table with injected `cancerType` and `cancerTypeDetail` columns.
    pub fn list_visible_studys(&self) -> peta::Future<Table> {
        let f = self
            .post_json::<_, response::Studies>(
                "list visible studys",
                routes::GET_STUDIES,
                &request::StudyListing::default(),
            )
            .map(response::Studies::into_table);
        into_future_trait(f)
    }
}
