//! Response normalization shared by every endpoint.
//!
//! [`interpret`] is the pure half of a request: given the status line,
//! `content-type` header and body text, it decides between a parsed body and
//! an [`ApiError::Request`]. Keeping it free of I/O lets the error envelope
//! rules be tested without a server.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response body, parsed according to its `content-type`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// `application/json` body. Unparseable JSON degrades to `Null`.
    Json(Value),
    /// Any other content type.
    Text(String),
}

impl ResponseBody {
    /// Parse `text` as JSON when the content type says so, otherwise keep it raw.
    pub fn parse(content_type: Option<&str>, text: String) -> Self {
        if is_json(content_type) {
            ResponseBody::Json(serde_json::from_str(&text).unwrap_or(Value::Null))
        } else {
            ResponseBody::Text(text)
        }
    }

    /// Message carried by an error body: a non-empty `error` string, else the
    /// body itself when it is a non-empty string.
    pub fn error_message(&self) -> Option<&str> {
        let message = match self {
            ResponseBody::Json(Value::Object(map)) => map.get("error").and_then(Value::as_str),
            ResponseBody::Json(Value::String(s)) => Some(s.as_str()),
            ResponseBody::Text(s) => Some(s.as_str()),
            ResponseBody::Json(_) => None,
        };
        message.filter(|m| !m.is_empty())
    }

    /// Unwrap the `{ data: ... }` envelope. A missing or null `data`, or a
    /// non-JSON body, yields `T::default()`.
    pub fn into_data<T>(self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        match self {
            ResponseBody::Json(Value::Object(mut map)) => match map.remove("data") {
                None | Some(Value::Null) => Ok(T::default()),
                Some(data) => serde_json::from_value(data),
            },
            _ => Ok(T::default()),
        }
    }
}

/// True when the `content-type` header mentions `application/json`.
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Turn a raw response into a parsed body or a `Request` error.
pub fn interpret(
    status: u16,
    content_type: Option<&str>,
    text: String,
) -> Result<ResponseBody, ApiError> {
    let body = ResponseBody::parse(content_type, text);
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let message = body
        .error_message()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    Err(ApiError::Request {
        status,
        message,
        body,
    })
}
