//! Shared test utilities.
//!
//! Builders for minimal catalog entities plus lookup helpers, so tests only
//! spell out the fields they care about.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut api = endpoint("1.1", HttpMethod::Post, "/api/auth/login");
//! api.auth = true;
//! let catalog = catalog_of(vec![section("1", vec![api])]);
//! assert_eq!(find_endpoint(&catalog, "1.1").path, "/api/auth/login");
//! ```

use crate::catalog::{
    Catalog, EndpointRecord, HttpMethod, ParameterDescriptor, ResponseStatusEntry, Section,
};
use crate::value::Value;

/// An endpoint with only identity fields set; everything optional is empty.
pub fn endpoint(id: &str, method: HttpMethod, path: &str) -> EndpointRecord {
    EndpointRecord {
        id: id.to_string(),
        name: format!("Endpoint {id}"),
        method,
        path: path.to_string(),
        request: None,
        response: None,
        auth: false,
        description: String::new(),
        query_params: None,
        path_params: None,
        headers: None,
        body: None,
        body_required: Vec::new(),
        body_optional: Vec::new(),
        status_codes: Vec::new(),
    }
}

pub fn section(id: &str, apis: Vec<EndpointRecord>) -> Section {
    Section {
        id: id.to_string(),
        name: format!("Section {id}"),
        apis,
    }
}

pub fn catalog_of(sections: Vec<Section>) -> Catalog {
    Catalog {
        base_url: "http://localhost:8101/api".to_string(),
        sections,
    }
}

pub fn param(
    name: &str,
    type_label: &str,
    required: bool,
    default: Option<&str>,
) -> ParameterDescriptor {
    ParameterDescriptor {
        name: name.to_string(),
        type_label: type_label.to_string(),
        required,
        default: default.map(Value::from),
        description: format!("{name} description"),
    }
}

pub fn status(code: u16, message: &str, body: Value) -> ResponseStatusEntry {
    ResponseStatusEntry {
        code,
        message: message.to_string(),
        body,
        msg: None,
    }
}

/// Find an endpoint by dotted id, panicking with the id if it is missing.
pub fn find_endpoint<'a>(catalog: &'a Catalog, id: &str) -> &'a EndpointRecord {
    catalog
        .endpoints()
        .map(|(_, api)| api)
        .find(|api| api.id == id)
        .unwrap_or_else(|| panic!("endpoint {id} not found"))
}
