//! HTML reference generation.
//!
//! Takes a [`Catalog`] and a [`DocConfig`] and renders one self-contained
//! HTML page: inline styles, no external assets besides an optional web font.
//!
//! ## Page Structure
//!
//! ```text
//! header              title, subtitle, base URL
//! summary table       one row per endpoint: name, method, path, request,
//!                     response, auth; names link to the detail blocks
//! per section
//!   section heading
//!   per endpoint      description, query/path/header tables, request body,
//!                     response status examples
//! ```
//!
//! Optional tables only appear when the endpoint declares the matching data.
//! Authenticated endpoints always get an `Authorization: Bearer <token>` row
//! in the header table.
//!
//! ## Layout Variants
//!
//! - `layout.sort`: sections and endpoints ordered by id (see
//!   [`crate::catalog::compare_dotted_ids`]) instead of catalog order.
//! - `layout.collapsible`: sections and endpoint blocks become open
//!   `<details>` elements, with expand/collapse-all buttons driven by
//!   `static/toggle.js`.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! interpolated text is escaped automatically. Request-body schemas go
//! through [`render_value`], which escapes on its own, and are inserted
//! pre-escaped. The output is a pure function of catalog and config, so
//! repeated runs produce identical bytes.

use crate::catalog::{
    Catalog, EndpointRecord, HeaderDescriptor, HttpMethod, ParameterDescriptor,
    ResponseStatusEntry, Section,
};
use crate::config::{self, DocConfig, LabelConfig, LayoutConfig, PageConfig};
use crate::render::render_value;
use crate::value::Value;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a successful [`generate`] call wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub sections: usize,
    pub endpoints: usize,
    pub bytes: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const TOGGLE_JS: &str = include_str!("../static/toggle.js");

/// Render the reference page and write it to `output_path`.
///
/// Missing parent directories are created. Any I/O failure aborts the run;
/// there is no partial-output mode.
pub fn generate(
    catalog: &Catalog,
    config: &DocConfig,
    output_path: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let html = render_document(catalog, config).into_string();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, &html)?;

    Ok(GenerateSummary {
        sections: catalog.sections.len(),
        endpoints: catalog.endpoint_count(),
        bytes: html.len(),
    })
}

/// The catalog in display order for the given layout.
pub fn arrange<'a>(catalog: &'a Catalog, layout: &LayoutConfig) -> Cow<'a, Catalog> {
    if layout.sort {
        Cow::Owned(catalog.clone().sorted())
    } else {
        Cow::Borrowed(catalog)
    }
}

/// Render the complete reference page.
pub fn render_document(catalog: &Catalog, config: &DocConfig) -> Markup {
    let catalog = arrange(catalog, &config.layout);
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let labels = &config.labels;
    let collapsible = config.layout.collapsible;

    let content = html! {
        div.container {
            (page_header(&config.page, config.base_url(&catalog.base_url)))
            (summary_table(&catalog, labels))
            @if collapsible {
                (toolbar(labels))
            }
            @for section in &catalog.sections {
                (render_section(section, labels, collapsible))
            }
        }
        @if collapsible {
            script { (PreEscaped(TOGGLE_JS)) }
        }
    };

    base_document(&config.page, &css, content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(page: &PageConfig, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.document_title) }
                @if !page.font_url.is_empty() {
                    link rel="preconnect" href="https://fonts.googleapis.com";
                    link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                    link href=(page.font_url) rel="stylesheet";
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn page_header(page: &PageConfig, base_url: &str) -> Markup {
    html! {
        header.page-header {
            h1 { (page.title) }
            @if !page.subtitle.is_empty() {
                p { (page.subtitle) }
            }
            p.base-url { "Base URL: " code { (base_url) } }
        }
    }
}

fn toolbar(labels: &LabelConfig) -> Markup {
    html! {
        div.toolbar {
            button type="button" id="expand-all" { (labels.expand_all) }
            button type="button" id="collapse-all" { (labels.collapse_all) }
        }
    }
}

fn method_badge(method: HttpMethod) -> Markup {
    html! {
        span class={ "method-badge " (method.css_class()) } { (method.as_str()) }
    }
}

fn auth_badge(auth: bool, labels: &LabelConfig) -> Markup {
    let (class, text) = if auth {
        ("auth-required", &labels.required)
    } else {
        ("auth-optional", &labels.optional)
    };
    html! {
        span class={ "auth-badge " (class) } { (text) }
    }
}

/// Marker for a required or optional parameter, header, or field.
fn requirement(required: bool, labels: &LabelConfig) -> Markup {
    if required {
        html! { span.required { (labels.required) } }
    } else {
        html! { span.optional { (labels.optional) } }
    }
}

/// `status-401 status-4xx`: the exact code plus its class of response.
fn status_class(code: u16) -> String {
    format!("status-{} status-{}xx", code, code / 100)
}

/// Example body as pretty JSON, escaped by maud.
///
/// Serializing a [`Value`] to JSON cannot realistically fail; if it ever does,
/// the structured renderer's output is shown instead.
fn example_json(body: &Value) -> Markup {
    match serde_json::to_string_pretty(body) {
        Ok(json) => html! { (json) },
        Err(_) => PreEscaped(render_value(body, 0)),
    }
}

// ============================================================================
// Summary table
// ============================================================================

fn summary_table(catalog: &Catalog, labels: &LabelConfig) -> Markup {
    html! {
        h2.section-title { (labels.summary_heading) }
        table.api-table {
            thead {
                tr {
                    th { (labels.column_feature) }
                    th { (labels.column_method) }
                    th { (labels.column_path) }
                    th { (labels.column_request) }
                    th { (labels.column_response) }
                    th { (labels.column_auth) }
                }
            }
            tbody {
                @for (_, api) in catalog.endpoints() {
                    tr {
                        td {
                            a href={ "#" (api.anchor()) } {
                                strong { (api.id) " " (api.name) }
                            }
                        }
                        td { (method_badge(api.method)) }
                        td { code { (api.path) } }
                        td { code { (api.request.as_deref().unwrap_or("-")) } }
                        td { code { (api.response.as_deref().unwrap_or("-")) } }
                        td { (auth_badge(api.auth, labels)) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Endpoint details
// ============================================================================

fn render_section(section: &Section, labels: &LabelConfig, collapsible: bool) -> Markup {
    let section_id = format!("section-{}", section.id);
    let endpoints = html! {
        @for api in &section.apis {
            (render_endpoint(api, labels, collapsible))
        }
    };

    if collapsible {
        html! {
            details.section-block id=(section_id) open {
                summary { h2.section-title { (section.name) } }
                (endpoints)
            }
        }
    } else {
        html! {
            h2.section-title id=(section_id) { (section.name) }
            (endpoints)
        }
    }
}

fn render_endpoint(api: &EndpointRecord, labels: &LabelConfig, collapsible: bool) -> Markup {
    let heading = html! { h3 { (api.id) " " (api.name) } };
    let body = endpoint_details(api, labels);

    if collapsible {
        html! {
            details.api-detail id=(api.anchor()) open {
                summary { (heading) }
                (body)
            }
        }
    } else {
        html! {
            div.api-detail id=(api.anchor()) {
                (heading)
                (body)
            }
        }
    }
}

fn endpoint_details(api: &EndpointRecord, labels: &LabelConfig) -> Markup {
    html! {
        div.api-id { "API ID: " (api.id) }
        div.api-route { (method_badge(api.method)) " " code { (api.path) } }
        div.description { (api.description) }

        h4 { (labels.details_heading) }

        @if !api.query_params().is_empty() {
            (query_param_table(api.query_params(), labels))
        }
        @if !api.path_params().is_empty() {
            (path_param_table(api.path_params(), labels))
        }
        @if api.auth || !api.headers().is_empty() {
            (header_table(api.auth, api.headers(), labels))
        }
        @if let Some(body) = api.documented_body() {
            (request_body(api, &body.to_value(), labels))
        }
        @if !api.status_codes.is_empty() {
            (status_table(&api.status_codes, labels))
        }
    }
}

fn query_param_table(params: &[ParameterDescriptor], labels: &LabelConfig) -> Markup {
    html! {
        h5 { (labels.query_params) }
        table.param-table {
            thead {
                tr {
                    th { (labels.parameter) }
                    th { (labels.type_) }
                    th { (labels.required) }
                    th { (labels.default) }
                    th { (labels.description) }
                }
            }
            tbody {
                @for param in params {
                    tr {
                        td { code { (param.name) } }
                        td { (param.type_label) }
                        td { (requirement(param.required, labels)) }
                        td { (default_text(param)) }
                        td { (param.description) }
                    }
                }
            }
        }
    }
}

/// A parameter's default for display, `-` when it has none.
fn default_text(param: &ParameterDescriptor) -> String {
    param
        .default
        .as_ref()
        .map_or_else(|| "-".to_string(), Value::to_plain_text)
}

fn path_param_table(params: &[ParameterDescriptor], labels: &LabelConfig) -> Markup {
    html! {
        h5 { (labels.path_params) }
        table.param-table {
            thead {
                tr {
                    th { (labels.parameter) }
                    th { (labels.type_) }
                    th { (labels.description) }
                }
            }
            tbody {
                @for param in params {
                    tr {
                        td { code { (param.name) } }
                        td { (param.type_label) }
                        td { (param.description) }
                    }
                }
            }
        }
    }
}

fn header_table(auth: bool, headers: &[HeaderDescriptor], labels: &LabelConfig) -> Markup {
    html! {
        h5 { (labels.headers) }
        table.param-table {
            thead {
                tr {
                    th { (labels.header) }
                    th { (labels.type_) }
                    th { (labels.required) }
                    th { (labels.description) }
                }
            }
            tbody {
                @if auth {
                    tr {
                        td { code { "Authorization" } }
                        td { "String" }
                        td { (requirement(true, labels)) }
                        td { "Bearer <token>" }
                    }
                }
                @for header in headers {
                    tr {
                        td { code { (header.name) } }
                        td { (header.type_label) }
                        td { (requirement(header.required, labels)) }
                        td { (header.description) }
                    }
                }
            }
        }
    }
}

fn request_body(api: &EndpointRecord, schema: &Value, labels: &LabelConfig) -> Markup {
    html! {
        h5 { (labels.request_body) }
        div.code-block { (PreEscaped(render_value(schema, 0))) }

        h6 { (labels.required_fields) }
        ul.field-list {
            @for field in &api.body_required {
                (field_item(field, api.field_type(field), true, labels))
            }
        }

        @if !api.body_optional.is_empty() {
            h6 { (labels.optional_fields) }
            ul.field-list {
                @for field in &api.body_optional {
                    (field_item(field, api.field_type(field), false, labels))
                }
            }
        }
    }
}

fn field_item(name: &str, type_label: &str, required: bool, labels: &LabelConfig) -> Markup {
    let (class, text) = if required {
        ("required", &labels.required)
    } else {
        ("optional", &labels.optional)
    };
    html! {
        li {
            code { (name) } ": " (type_label) " "
            span class=(class) { "(" (text) ")" }
        }
    }
}

fn status_table(statuses: &[ResponseStatusEntry], labels: &LabelConfig) -> Markup {
    html! {
        h5.status-heading { (labels.status_examples) }
        table.status-code-table {
            thead {
                tr {
                    th { (labels.status_code) }
                    th { (labels.status_body) }
                    th { (labels.status_message) }
                }
            }
            tbody {
                @for status in statuses {
                    tr {
                        td { span class=(status_class(status.code)) { (status.code) } }
                        td { div.code-block.compact { (example_json(&status.body)) } }
                        td { (status.display_message()) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
