//! # apiref
//!
//! Generates a static HTML reference page for a REST API from a catalog of
//! endpoint descriptions. The catalog is data, not code: sections of
//! endpoints with their paths, methods, parameters, request-body schemas, and
//! example responses per status code.
//!
//! # Pipeline
//!
//! ```text
//! catalog (embedded JSON or --catalog file)  ─┐
//!                                             ├→  generate  →  api_reference.html
//! apiref.toml (optional overlay on defaults) ─┘
//! ```
//!
//! There is one output file per run, fully self-contained (inline CSS, no
//! scripts unless the collapsible layout is enabled). Output is
//! deterministic: the same catalog and config give the same bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Endpoint catalog model, embedded default catalog, loading and ordering |
//! | [`config`] | `apiref.toml` loading, merging, validation, and palette CSS |
//! | [`generate`] | Renders the HTML page from catalog + config using Maud |
//! | [`render`] | Structured-value renderer for request-body schema blocks |
//! | [`value`] | The nested value type the renderer consumes |
//! | [`escape`] | HTML escaping for text spliced outside Maud templates |
//! | [`output`] | CLI output formatting: inventory of sections and endpoints |
//!
//! # Design Decisions
//!
//! ## Catalog As Data
//!
//! The default catalog is a JSON file compiled into the binary with
//! `include_str!` and deserialized in one step. Swapping in another API
//! means pointing `--catalog` at a file of the same shape; `apiref
//! dump-catalog` prints the embedded one as a starting point.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and every interpolation is escaped. The only
//! pre-escaped content is the stylesheet, the toggle script, and the
//! structured-value blocks, which [`render::render_value`] escapes itself.
//!
//! ## Lenient Field Types
//!
//! A body field listed as required or optional but missing from the schema
//! is documented as `string` rather than rejected. `apiref check` lists such
//! fields so they can be fixed in the catalog.

pub mod catalog;
pub mod config;
pub mod escape;
pub mod generate;
pub mod output;
pub mod render;
pub mod value;

#[cfg(test)]
pub(crate) mod test_helpers;
