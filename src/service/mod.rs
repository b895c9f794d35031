//! Request boundary of the service.
//!
//! A request is checked in a fixed order: method, content type, body
//! presence, JSON syntax, required fields, graph construction, vertex
//! membership, and only then handed to the search. The first failing check
//! decides the response. Over HTTP the body is only read once method and
//! content type passed, and reading stops at the configured [`BodyLimit`].

use std::fmt;

use actix_web::{
    http::{Method, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    graphs::GraphError,
    search::{dijkstra::find_path, path::ShortestPath, SearchError},
};

use self::request::PathRequest;

pub mod http;
pub mod request;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Largest request body the HTTP handler reads, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        BodyLimit(10 * 1024 * 1024)
    }
}

/// Top level fields of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Graph,
    Source,
    Destination,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Graph => "graph",
            Field::Source => "source",
            Field::Destination => "destination",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Method must be POST")]
    MethodNotAllowed,

    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Content-Length is required")]
    LengthRequired,

    #[error("Content is larger than {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Content could not be read")]
    UnreadableBody,

    #[error("Content is poorly formatted")]
    PoorlyFormatted,

    #[error("{0} not found in content")]
    MissingField(Field),

    #[error("Error on graph")]
    Graph(#[source] GraphError),

    #[error("{0} not in graph")]
    NotInGraph(Field),

    #[error("Error on execute shortest path search")]
    Search(#[source] SearchError),
}

/// Body of every rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::LengthRequired => StatusCode::LENGTH_REQUIRED,
            RequestError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RequestError::UnsupportedContentType
            | RequestError::UnreadableBody
            | RequestError::PoorlyFormatted
            | RequestError::MissingField(_)
            | RequestError::Graph(_)
            | RequestError::NotInGraph(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// `200 OK` if a path was found, `404 Not Found` otherwise.
pub fn status_for(result: &ShortestPath) -> StatusCode {
    if result.has_path {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Runs every check on a raw request and searches the path it asks for.
pub fn process(
    method: &Method,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ShortestPath, RequestError> {
    check_headers(method, content_type)?;
    process_body(body)
}

/// Method and content type, the checks that come before the body is read.
pub fn check_headers(method: &Method, content_type: Option<&str>) -> Result<(), RequestError> {
    if *method != Method::POST {
        return Err(RequestError::MethodNotAllowed);
    }

    if !content_type.is_some_and(is_json_media_type) {
        return Err(RequestError::UnsupportedContentType);
    }

    Ok(())
}

/// Every check from the body onwards, followed by the search.
pub fn process_body(body: &[u8]) -> Result<ShortestPath, RequestError> {
    if body.is_empty() {
        return Err(RequestError::LengthRequired);
    }

    let PathRequest {
        graph,
        source,
        destination,
    } = PathRequest::from_body(body)?;

    find_path(&graph, &source, &destination).map_err(RequestError::Search)
}

/// Compares the media type only, parameters like `charset` are ignored.
fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}
