//! The endpoint catalog: what the reference page documents.
//!
//! A catalog is a base URL plus an ordered list of sections, each holding an
//! ordered list of endpoint records. The default catalog is compiled into the
//! binary from `catalog/wedding-os.json`; [`Catalog::load`] reads another
//! file of the same shape.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "base_url": "http://localhost:8101/api",
//!   "sections": [{
//!     "id": "1",
//!     "name": "Authentication",
//!     "apis": [{
//!       "id": "1.1",
//!       "name": "Login",
//!       "method": "POST",
//!       "path": "/api/auth/login",
//!       "request": "LoginRequest",
//!       "response": "LoginResponse",
//!       "auth": false,
//!       "description": "...",
//!       "body": { "email": "string", "password": "string" },
//!       "body_required": ["email", "password"],
//!       "status_codes": [
//!         { "code": 200, "message": "login_success", "body": {}, "msg": "OK" }
//!       ]
//!     }]
//!   }]
//! }
//! ```
//!
//! Optional fields may be `null` or omitted. `headers` takes either a single
//! header object or a list of them.
//!
//! ## Field Lists
//!
//! `body_required` and `body_optional` name fields of `body`, but nothing
//! enforces that. A name missing from the schema is documented with the type
//! label `string` (see [`EndpointRecord::field_type`]); `apiref check` lists
//! such names without failing.

use crate::value::Value;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Type label used for a listed body field the schema does not describe.
pub const FALLBACK_FIELD_TYPE: &str = "string";

const EMBEDDED_CATALOG: &str = include_str!("../catalog/wedding-os.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub base_url: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub apis: Vec<EndpointRecord>,
}

/// One documented API operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Dotted `section.index` identifier, e.g. `"3.2"`.
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    /// URL path, possibly with `{placeholder}` segments.
    pub path: String,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub query_params: Option<Vec<ParameterDescriptor>>,
    #[serde(default)]
    pub path_params: Option<Vec<ParameterDescriptor>>,
    #[serde(default)]
    pub headers: Option<HeaderSpec>,
    #[serde(default)]
    pub body: Option<BodySchema>,
    #[serde(default)]
    pub body_required: Vec<String>,
    #[serde(default)]
    pub body_optional: Vec<String>,
    #[serde(default)]
    pub status_codes: Vec<ResponseStatusEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    #[serde(default)]
    pub required: bool,
    /// Any JSON value; strings show unquoted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// Declared request headers: a single descriptor or a list.
///
/// `Many` is tried first: every descriptor field has a default, so an empty
/// array would otherwise deserialize as one blank header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderSpec {
    Many(Vec<HeaderDescriptor>),
    One(HeaderDescriptor),
}

impl HeaderSpec {
    pub fn as_slice(&self) -> &[HeaderDescriptor] {
        match self {
            HeaderSpec::One(header) => std::slice::from_ref(header),
            HeaderSpec::Many(headers) => headers,
        }
    }
}

/// One documented response: status code, example body and message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseStatusEntry {
    pub code: u16,
    /// Machine-readable message key, e.g. `"login_success"`.
    pub message: String,
    #[serde(default = "Value::empty_mapping")]
    pub body: Value,
    /// Human-readable message shown in the status table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ResponseStatusEntry {
    /// The message shown to readers: `msg`, or the message key without one.
    pub fn display_message(&self) -> &str {
        self.msg.as_deref().unwrap_or(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// CSS class for the method badge, e.g. `method-post`.
    pub fn css_class(self) -> String {
        format!("method-{}", self.as_str().to_lowercase())
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A body field: name and human-readable type label.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyField {
    pub name: String,
    pub type_label: String,
}

/// Request-body schema: field names mapped to type labels, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct BodySchema {
    fields: Vec<BodyField>,
}

impl BodySchema {
    pub fn new<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, type_label)| BodyField {
                    name: name.into(),
                    type_label: type_label.into(),
                })
                .collect(),
        }
    }

    pub fn fields(&self) -> &[BodyField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.type_label.as_str())
    }

    /// The schema as a mapping of text values, for the structured renderer.
    pub fn to_value(&self) -> Value {
        Value::mapping(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), Value::from(f.type_label.as_str()))),
        )
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for BodySchema {
    type Error = String;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(map.len());
        for (name, value) in map {
            match value {
                serde_json::Value::String(type_label) => {
                    fields.push(BodyField { name, type_label })
                }
                other => {
                    return Err(format!(
                        "body field `{name}` must be a type label string, got {other}"
                    ));
                }
            }
        }
        Ok(Self { fields })
    }
}

impl Serialize for BodySchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.type_label)?;
        }
        map.end()
    }
}

impl EndpointRecord {
    /// Type label for a listed body field, falling back to `string` when the
    /// schema is absent or does not contain `name`.
    pub fn field_type(&self, name: &str) -> &str {
        self.body
            .as_ref()
            .and_then(|body| body.get(name))
            .unwrap_or(FALLBACK_FIELD_TYPE)
    }

    /// Names from `body_required`/`body_optional` that the body schema lacks.
    ///
    /// Only meaningful when a schema is documented; without one the field
    /// lists are never rendered.
    pub fn unlisted_fields(&self) -> Vec<&str> {
        let Some(body) = self.body.as_ref().filter(|b| !b.is_empty()) else {
            return Vec::new();
        };
        self.body_required
            .iter()
            .chain(&self.body_optional)
            .map(String::as_str)
            .filter(|name| body.get(name).is_none())
            .collect()
    }

    /// HTML id of the endpoint's detail block, e.g. `api-3-2`.
    pub fn anchor(&self) -> String {
        format!("api-{}", self.id.replace('.', "-"))
    }

    pub fn query_params(&self) -> &[ParameterDescriptor] {
        self.query_params.as_deref().unwrap_or_default()
    }

    pub fn path_params(&self) -> &[ParameterDescriptor] {
        self.path_params.as_deref().unwrap_or_default()
    }

    pub fn headers(&self) -> &[HeaderDescriptor] {
        self.headers.as_ref().map(HeaderSpec::as_slice).unwrap_or_default()
    }

    /// The request-body schema when present and non-empty.
    pub fn documented_body(&self) -> Option<&BodySchema> {
        self.body.as_ref().filter(|b| !b.is_empty())
    }
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Sections by numeric id, endpoints by dotted id.
    pub fn sorted(mut self) -> Self {
        self.sections.sort_by(|a, b| compare_dotted_ids(&a.id, &b.id));
        for section in &mut self.sections {
            section.apis.sort_by(|a, b| compare_dotted_ids(&a.id, &b.id));
        }
        self
    }

    pub fn endpoint_count(&self) -> usize {
        self.sections.iter().map(|s| s.apis.len()).sum()
    }

    /// All endpoints with their sections, in display order.
    pub fn endpoints(&self) -> impl Iterator<Item = (&Section, &EndpointRecord)> {
        self.sections
            .iter()
            .flat_map(|section| section.apis.iter().map(move |api| (section, api)))
    }
}

/// Compare dotted identifiers component by component.
///
/// Numeric components compare as numbers (`"2" < "10"`), a numeric component
/// sorts before a non-numeric one, and non-numeric components compare as text.
/// When one id is a prefix of the other, the shorter sorts first.
pub fn compare_dotted_ids(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.base_url, "http://localhost:8101/api");
        assert_eq!(catalog.sections.len(), 10);
        assert_eq!(catalog.endpoint_count(), 24);
    }

    #[test]
    fn embedded_catalog_keeps_body_order() {
        let catalog = Catalog::embedded().unwrap();
        let signup = find_endpoint(&catalog, "1.2");
        let names: Vec<_> = signup
            .body
            .as_ref()
            .unwrap()
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["email", "password", "password_check", "nickname", "profile_image_url"]
        );
    }

    #[test]
    fn embedded_catalog_has_no_unlisted_fields() {
        let catalog = Catalog::embedded().unwrap();
        for (_, api) in catalog.endpoints() {
            assert!(api.unlisted_fields().is_empty(), "{} has unlisted fields", api.id);
        }
    }

    #[test]
    fn null_and_missing_optionals_are_equivalent() {
        let catalog = Catalog::from_json(
            r#"{
                "base_url": "http://x",
                "sections": [{"id": "1", "name": "S", "apis": [
                    {"id": "1.1", "name": "a", "method": "GET", "path": "/a",
                     "request": null, "query_params": null, "headers": null, "body": null},
                    {"id": "1.2", "name": "b", "method": "GET", "path": "/b"}
                ]}]
            }"#,
        )
        .unwrap();
        for (_, api) in catalog.endpoints() {
            assert!(api.request.is_none());
            assert!(api.query_params().is_empty());
            assert!(api.headers().is_empty());
            assert!(api.documented_body().is_none());
            assert!(api.status_codes.is_empty());
            assert!(!api.auth);
        }
    }

    #[test]
    fn headers_accept_single_object_and_list() {
        let one: HeaderSpec =
            serde_json::from_str(r#"{"name": "X-Trace", "type": "String", "required": true}"#)
                .unwrap();
        assert_eq!(one.as_slice().len(), 1);
        assert_eq!(one.as_slice()[0].name, "X-Trace");

        let many: HeaderSpec = serde_json::from_str(
            r#"[{"name": "A", "type": "String"}, {"name": "B", "type": "String"}]"#,
        )
        .unwrap();
        assert_eq!(many.as_slice().len(), 2);
        assert!(!many.as_slice()[1].required);
    }

    #[test]
    fn header_fields_all_have_defaults() {
        let one: HeaderSpec = serde_json::from_str(r#"{"type": "String"}"#).unwrap();
        assert_eq!(one.as_slice().len(), 1);
        assert_eq!(one.as_slice()[0].name, "");
        assert_eq!(one.as_slice()[0].type_label, "String");

        let none: HeaderSpec = serde_json::from_str("[]").unwrap();
        assert!(none.as_slice().is_empty());
    }

    #[test]
    fn parameter_default_accepts_any_json_value() {
        let catalog = Catalog::from_json(
            r#"{
                "base_url": "http://x",
                "sections": [{"id": "1", "name": "S", "apis": [
                    {"id": "1.1", "name": "list", "method": "GET", "path": "/items",
                     "query_params": [
                        {"name": "limit", "type": "Integer", "default": 20},
                        {"name": "active", "type": "Boolean", "default": true},
                        {"name": "sort", "type": "String", "default": "score_desc"},
                        {"name": "cursor", "type": "String", "default": null}
                     ]}
                ]}]
            }"#,
        )
        .unwrap();
        let defaults: Vec<_> = find_endpoint(&catalog, "1.1")
            .query_params()
            .iter()
            .map(|p| p.default.as_ref().map(Value::to_plain_text))
            .collect();
        assert_eq!(
            defaults,
            [
                Some("20".to_string()),
                Some("true".to_string()),
                Some("score_desc".to_string()),
                None
            ]
        );
    }

    #[test]
    fn body_schema_rejects_non_text_labels() {
        let result: Result<BodySchema, _> = serde_json::from_str(r#"{"count": 3}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("count"));
    }

    #[test]
    fn body_schema_serializes_in_order() {
        let schema = BodySchema::new([("title", "string"), ("content", "string")]);
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"title":"string","content":"string"}"#
        );
    }

    #[test]
    fn unknown_method_is_an_error() {
        let result: Result<HttpMethod, _> = serde_json::from_str(r#""TRACE""#);
        assert!(result.is_err());
    }

    #[test]
    fn method_css_class() {
        assert_eq!(HttpMethod::Patch.css_class(), "method-patch");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn field_type_falls_back_to_string() {
        let mut api = endpoint("1.1", HttpMethod::Post, "/x");
        api.body = Some(BodySchema::new([("email", "string (email)")]));
        api.body_required = vec!["email".into(), "password".into()];

        assert_eq!(api.field_type("email"), "string (email)");
        assert_eq!(api.field_type("password"), FALLBACK_FIELD_TYPE);
        assert_eq!(api.unlisted_fields(), ["password"]);
    }

    #[test]
    fn unlisted_fields_ignored_without_schema() {
        let mut api = endpoint("1.1", HttpMethod::Get, "/x");
        api.body_required = vec!["ghost".into()];
        assert!(api.unlisted_fields().is_empty());
        assert_eq!(api.field_type("ghost"), FALLBACK_FIELD_TYPE);
    }

    #[test]
    fn status_body_defaults_to_empty_mapping() {
        let entry: ResponseStatusEntry =
            serde_json::from_str(r#"{"code": 204, "message": "no_content"}"#).unwrap();
        assert_eq!(entry.body, Value::empty_mapping());
        assert_eq!(entry.display_message(), "no_content");
    }

    #[test]
    fn status_body_null_stays_null() {
        let entry: ResponseStatusEntry =
            serde_json::from_str(r#"{"code": 200, "message": "ok", "body": null, "msg": "fine"}"#)
                .unwrap();
        assert!(entry.body.is_null());
        assert_eq!(entry.display_message(), "fine");
    }

    #[test]
    fn anchor_replaces_dots() {
        assert_eq!(endpoint("10.4", HttpMethod::Get, "/").anchor(), "api-10-4");
    }

    #[test]
    fn dotted_ids_compare_numerically() {
        assert_eq!(compare_dotted_ids("2", "10"), Ordering::Less);
        assert_eq!(compare_dotted_ids("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare_dotted_ids("1", "1.1"), Ordering::Less);
        assert_eq!(compare_dotted_ids("3.2", "3.2"), Ordering::Equal);
        assert_eq!(compare_dotted_ids("1.2", "1.a"), Ordering::Less);
        assert_eq!(compare_dotted_ids("x.b", "x.a"), Ordering::Greater);
    }

    #[test]
    fn sorted_orders_sections_and_endpoints() {
        let catalog = catalog_of(vec![
            section(
                "10",
                vec![
                    endpoint("10.2", HttpMethod::Get, "/b"),
                    endpoint("10.1", HttpMethod::Get, "/a"),
                ],
            ),
            section("2", vec![endpoint("2.1", HttpMethod::Get, "/c")]),
        ])
        .sorted();

        let ids: Vec<_> = catalog.endpoints().map(|(_, api)| api.id.as_str()).collect();
        assert_eq!(ids, ["2.1", "10.1", "10.2"]);
    }

    #[test]
    fn endpoints_iterates_in_catalog_order() {
        let catalog = catalog_of(vec![
            section("2", vec![endpoint("2.1", HttpMethod::Get, "/c")]),
            section("1", vec![endpoint("1.1", HttpMethod::Get, "/a")]),
        ]);
        let pairs: Vec<_> = catalog
            .endpoints()
            .map(|(s, api)| (s.id.as_str(), api.id.as_str()))
            .collect();
        assert_eq!(pairs, [("2", "2.1"), ("1", "1.1")]);
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, r#"{"base_url": "http://api", "sections": []}"#).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.base_url, "http://api");
        assert_eq!(catalog.endpoint_count(), 0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = Catalog::load(&tmp.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn load_invalid_json_is_json_error() {
        let result = Catalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn catalog_roundtrips_through_json() {
        let catalog = Catalog::embedded().unwrap();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let again = Catalog::from_json(&json).unwrap();
        assert_eq!(again.endpoint_count(), catalog.endpoint_count());
        assert_eq!(
            find_endpoint(&again, "1.1").status_codes[0].body,
            find_endpoint(&catalog, "1.1").status_codes[0].body
        );
    }
}
