//! Proc macros for docfig.
//!
//! # Config derive macro
//!
//! Generates field path accessors, a commented TOML template, and
//! field-status validation for a configuration section struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the browser tab.
//!     pub title: String,
//!
//!     /// Language tag (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Internal field, never surfaced.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() / template_with_header()
//! // - SiteInfoConfig::validate_field_status(&mut diag)
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - exclude from FIELDS and template (internal use)
//! - `#[config(sub)]` - nested section; recurse for status validation
//! - `#[config(name = "x")]` - custom TOML field name
//! - `#[config(default = "x")]` - default value shown in template
//! - `#[config(inline_doc)]` - render single-line doc as trailing comment
//! - `#[config(status = experimental | deprecated | not_implemented | hidden)]`
//!
//! # Section inference
//!
//! Without a `section` attribute the path is inferred from the struct name:
//! `SiteInfoConfig` -> `site_info`, `ThemeSectionConfig` -> `theme`.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template() and validate_field_status().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
