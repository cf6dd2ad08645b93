//! Generator configuration.
//!
//! Handles loading, validating, and merging `apiref.toml`. The file is
//! optional: without it the stock defaults below produce the
//! Korean-language Wedding OS reference. With it, values are layered on top
//! of the stock defaults, so a config file needs only the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! title = "Wedding OS API 명세서"
//! subtitle = "노션 템플릿 형식에 맞춘 완성도 높은 API 문서"
//! document_title = "Wedding OS API Reference - 노션 템플릿 형식"
//! lang = "ko"
//! font_url = "https://fonts.googleapis.com/css2?family=Pretendard:wght@400;500;600;700&display=swap"
//! # base_url = "https://api.example.com"   # overrides the catalog's base URL
//!
//! [layout]
//! sort = false          # order sections/endpoints by id instead of catalog order
//! collapsible = false   # wrap sections and endpoints in <details> with toggles
//!
//! [colors]
//! background = "#05060a"
//! accent = "#8b5cf6"
//! # ...
//!
//! [labels]
//! required = "필수"
//! optional = "선택"
//! # ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `apiref.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocConfig {
    /// Page chrome: titles, language, web font, base URL override.
    pub page: PageConfig,
    /// Document variants (sorted order, collapsible blocks).
    pub layout: LayoutConfig,
    /// Palette emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Fixed UI strings.
    pub labels: LabelConfig,
}

impl DocConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::Validation("page.title must not be empty".into()));
        }
        if self.page.lang.trim().is_empty() {
            return Err(ConfigError::Validation("page.lang must not be empty".into()));
        }
        if let Some((name, _)) = self.colors.entries().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "colors.{name} must not be empty"
            )));
        }
        Ok(())
    }

    /// The base URL shown in the page header: the override, else the catalog's.
    pub fn base_url<'a>(&'a self, catalog_base_url: &'a str) -> &'a str {
        self.page.base_url.as_deref().unwrap_or(catalog_base_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Heading at the top of the page.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Contents of the `<title>` element.
    pub document_title: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// Remote stylesheet for the web font. Empty disables the font links.
    pub font_url: String,
    /// Replaces the catalog's base URL in the header when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Wedding OS API 명세서".to_string(),
            subtitle: "노션 템플릿 형식에 맞춘 완성도 높은 API 문서".to_string(),
            document_title: "Wedding OS API Reference - 노션 템플릿 형식".to_string(),
            lang: "ko".to_string(),
            font_url: "https://fonts.googleapis.com/css2?family=Pretendard:wght@400;500;600;700&display=swap"
                .to_string(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Order sections by numeric id and endpoints by dotted id.
    pub sort: bool,
    /// Wrap sections and endpoint details in `<details>` with expand/collapse buttons.
    pub collapsible: bool,
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Tables and detail cards.
    pub card: String,
    /// Table headers, code blocks, hover rows.
    pub soft: String,
    pub text: String,
    /// Secondary text: descriptions, field lists, API ids.
    pub muted: String,
    /// Borders and separators.
    pub line: String,
    /// POST badge and heading gradient.
    pub accent: String,
    /// Headings, GET badge, table header text.
    pub accent_2: String,
    /// PUT badge and 2xx codes.
    pub success: String,
    /// DELETE badge, required markers, 401/5xx codes.
    pub danger: String,
    /// 4xx client-error codes.
    pub warning: String,
    /// PATCH badge and the optional-auth badge.
    pub highlight: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#05060a".to_string(),
            card: "#10121a".to_string(),
            soft: "#181b25".to_string(),
            text: "#f7f8fc".to_string(),
            muted: "#9da6bf".to_string(),
            line: "rgba(255,255,255,0.08)".to_string(),
            accent: "#8b5cf6".to_string(),
            accent_2: "#22d3ee".to_string(),
            success: "#10b981".to_string(),
            danger: "#ef4444".to_string(),
            warning: "#f59e0b".to_string(),
            highlight: "#facc15".to_string(),
        }
    }
}

impl ColorConfig {
    /// `(config key, value)` pairs in declaration order.
    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("background", self.background.as_str()),
            ("card", self.card.as_str()),
            ("soft", self.soft.as_str()),
            ("text", self.text.as_str()),
            ("muted", self.muted.as_str()),
            ("line", self.line.as_str()),
            ("accent", self.accent.as_str()),
            ("accent_2", self.accent_2.as_str()),
            ("success", self.success.as_str()),
            ("danger", self.danger.as_str()),
            ("warning", self.warning.as_str()),
            ("highlight", self.highlight.as_str()),
        ]
        .into_iter()
    }
}

/// Fixed UI strings. Defaults are Korean, matching the stock catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub summary_heading: String,
    pub column_feature: String,
    pub column_method: String,
    pub column_path: String,
    pub column_request: String,
    pub column_response: String,
    pub column_auth: String,
    pub required: String,
    pub optional: String,
    pub details_heading: String,
    pub query_params: String,
    pub path_params: String,
    pub headers: String,
    pub request_body: String,
    pub parameter: String,
    pub header: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub default: String,
    pub description: String,
    pub required_fields: String,
    pub optional_fields: String,
    pub status_examples: String,
    pub status_code: String,
    pub status_body: String,
    pub status_message: String,
    pub expand_all: String,
    pub collapse_all: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            summary_heading: "API 명세서 테이블".to_string(),
            column_feature: "기능".to_string(),
            column_method: "HTTP 메서드".to_string(),
            column_path: "API Path".to_string(),
            column_request: "Request".to_string(),
            column_response: "Response".to_string(),
            column_auth: "인증".to_string(),
            required: "필수".to_string(),
            optional: "선택".to_string(),
            details_heading: "Body / Parameter / Header / Query".to_string(),
            query_params: "Query Parameters".to_string(),
            path_params: "Path Parameters".to_string(),
            headers: "Headers".to_string(),
            request_body: "Request Body".to_string(),
            parameter: "파라미터".to_string(),
            header: "헤더".to_string(),
            type_: "타입".to_string(),
            default: "기본값".to_string(),
            description: "설명".to_string(),
            required_fields: "필수 필드".to_string(),
            optional_fields: "선택 필드".to_string(),
            status_examples: "응답 코드별 예시".to_string(),
            status_code: "Response Status Code".to_string(),
            status_body: "Body".to_string(),
            status_message: "Message".to_string(),
            expand_all: "모두 펼치기".to_string(),
            collapse_all: "모두 접기".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(DocConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but is
/// not valid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<DocConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: DocConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
///
/// User values are merged on top of stock defaults; unknown keys are rejected
/// and the result is validated.
pub fn load_config(path: &Path) -> Result<DocConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `apiref.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# apiref Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Page chrome
# ---------------------------------------------------------------------------
[page]
# Heading and sub-heading at the top of the page.
title = "Wedding OS API 명세서"
subtitle = "노션 템플릿 형식에 맞춘 완성도 높은 API 문서"

# Browser tab title.
document_title = "Wedding OS API Reference - 노션 템플릿 형식"

# <html lang="..."> attribute.
lang = "ko"

# Web font stylesheet. Set to "" to skip the remote font links entirely.
font_url = "https://fonts.googleapis.com/css2?family=Pretendard:wght@400;500;600;700&display=swap"

# Replace the catalog's base URL in the page header.
# base_url = "https://api.example.com"

# ---------------------------------------------------------------------------
# Layout variants
# ---------------------------------------------------------------------------
[layout]
# Order sections by numeric id and endpoints by dotted id (1.2 < 1.10)
# instead of the order they appear in the catalog.
sort = false

# Wrap every section and endpoint in a collapsible block and add
# expand-all / collapse-all buttons (a few lines of inline JavaScript).
collapsible = false

# ---------------------------------------------------------------------------
# Colors (CSS values)
# ---------------------------------------------------------------------------
[colors]
background = "#05060a"
card = "#10121a"
soft = "#181b25"               # Table headers, code blocks
text = "#f7f8fc"
muted = "#9da6bf"              # Descriptions, field lists
line = "rgba(255,255,255,0.08)"
accent = "#8b5cf6"             # POST badge
accent_2 = "#22d3ee"           # Headings, GET badge
success = "#10b981"            # PUT badge, 2xx codes
danger = "#ef4444"             # DELETE badge, required markers, 401/5xx codes
warning = "#f59e0b"            # 4xx codes
highlight = "#facc15"          # PATCH badge, optional-auth badge

# ---------------------------------------------------------------------------
# UI labels
# ---------------------------------------------------------------------------
[labels]
summary_heading = "API 명세서 테이블"
column_feature = "기능"
column_method = "HTTP 메서드"
column_path = "API Path"
column_request = "Request"
column_response = "Response"
column_auth = "인증"
required = "필수"
optional = "선택"
details_heading = "Body / Parameter / Header / Query"
query_params = "Query Parameters"
path_params = "Path Parameters"
headers = "Headers"
request_body = "Request Body"
parameter = "파라미터"
header = "헤더"
type = "타입"
default = "기본값"
description = "설명"
required_fields = "필수 필드"
optional_fields = "선택 필드"
status_examples = "응답 코드별 예시"
status_code = "Response Status Code"
status_body = "Body"
status_message = "Message"
expand_all = "모두 펼치기"
collapse_all = "모두 접기"
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors.entries() {
        css.push_str(&format!("    --{}: {};\n", css_var_name(name), value));
    }
    css.push('}');
    css
}

/// CSS custom property name for a palette key: `accent_2` → `accent-2`,
/// `background` → `bg`.
fn css_var_name(key: &str) -> String {
    match key {
        "background" => "bg".to_string(),
        other => other.replace('_', "-"),
    }
}
