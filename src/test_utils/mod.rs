#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod json;

pub(crate) use http::assert_content_type;
pub(crate) use json::parse_json_body;
