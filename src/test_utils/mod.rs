#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;

pub(crate) use html::{
    assert_valid_html, input_value, must_get_form, parse_html_document, select_texts,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
