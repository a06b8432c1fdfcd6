//! Config derive implementation.
//!
//! One pass over the struct collects per-field metadata; three generators
//! then emit the FIELDS accessor struct, the TOML template text, and the
//! `validate_field_status` method.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Special status a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Normal,
    Experimental,
    NotImplemented,
    Deprecated,
    Hidden,
}

impl Status {
    fn token(self) -> TokenStream {
        match self {
            Self::Experimental => quote! { crate::config::types::FieldStatus::Experimental },
            Self::NotImplemented => quote! { crate::config::types::FieldStatus::NotImplemented },
            Self::Deprecated => quote! { crate::config::types::FieldStatus::Deprecated },
            Self::Normal | Self::Hidden => quote! {},
        }
    }

    fn is_special(self) -> bool {
        matches!(
            self,
            Self::Experimental | Self::NotImplemented | Self::Deprecated
        )
    }
}

/// Metadata collected for one named field.
struct Field {
    ident: syn::Ident,
    toml_name: String,
    doc: Option<String>,
    inline_doc: bool,
    status: Status,
    default: Option<String>,
    skip: bool,
    sub: bool,
    ty: String,
}

impl Field {
    fn path_in(&self, section: &str) -> String {
        if section.is_empty() {
            self.toml_name.clone()
        } else {
            format!("{section}.{}", self.toml_name)
        }
    }
}

/// Entry point: generate the Config impl for a struct.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let section =
        attr_string(&input.attrs, "section").unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = doc_comment(&input.attrs).unwrap_or_default();

    let fields: Vec<Field> = named
        .iter()
        .filter_map(|f| {
            let ident = f.ident.clone()?;
            Some(Field {
                toml_name: attr_string(&f.attrs, "name").unwrap_or_else(|| ident.to_string()),
                doc: doc_comment(&f.attrs),
                inline_doc: attr_flag(&f.attrs, "inline_doc"),
                status: attr_status(&f.attrs),
                default: attr_string(&f.attrs, "default"),
                skip: attr_flag(&f.attrs, "skip"),
                sub: attr_flag(&f.attrs, "sub"),
                ty: type_string(&f.ty),
                ident,
            })
        })
        .collect();

    let fields_impl = gen_fields(name, &section, &fields);
    let template_impl = gen_template(name, &section, &section_doc, &fields);
    let status_impl = gen_status(&section, &fields);

    quote! {
        #fields_impl

        impl #name {
            #template_impl
            #status_impl
        }
    }
}

// ============================================================================
// FIELDS generation
// ============================================================================

fn gen_fields(name: &syn::Ident, section: &str, fields: &[Field]) -> TokenStream {
    let fields_struct = syn::Ident::new(&format!("{name}Fields"), name.span());
    let visible: Vec<&Field> = fields.iter().filter(|f| !f.skip).collect();

    let defs = visible.iter().map(|f| {
        let ident = &f.ident;
        quote! { pub #ident: crate::config::FieldPath, }
    });

    let inits = visible.iter().map(|f| {
        let ident = &f.ident;
        let path = f.path_in(section);
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct {
            #(#defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct = #fields_struct {
                #(#inits)*
            };
        }
    }
}

// ============================================================================
// Template generation
// ============================================================================

fn gen_template(
    name: &syn::Ident,
    section: &str,
    section_doc: &str,
    fields: &[Field],
) -> TokenStream {
    let _ = name;
    let body: String = fields
        .iter()
        .filter(|f| !f.skip && f.status != Status::Hidden)
        .map(field_template)
        .collect::<Vec<_>>()
        .join("\n");

    quote! {
        /// Section name for TOML output.
        pub const TEMPLATE_SECTION: &'static str = #section;

        /// Section documentation.
        pub const TEMPLATE_DOC: &'static str = #section_doc;

        /// Generate TOML template for this config section.
        pub fn template() -> &'static str {
            #body
        }

        /// Generate TOML template with section header.
        pub fn template_with_header() -> String {
            let mut out = String::new();
            for line in Self::TEMPLATE_DOC.lines() {
                out.push_str("# ");
                out.push_str(line.trim());
                out.push('\n');
            }
            if !Self::TEMPLATE_SECTION.is_empty() {
                out.push('[');
                out.push_str(Self::TEMPLATE_SECTION);
                out.push_str("]\n");
            }
            out.push_str(Self::template());
            out
        }
    }
}

/// Render the template lines for a single field.
fn field_template(f: &Field) -> String {
    let mut lines = Vec::new();

    let single_line = f.doc.as_ref().is_some_and(|d| !d.contains('\n'));
    let inline = f.inline_doc && single_line;

    if !inline {
        if let Some(doc) = &f.doc {
            for line in doc.lines() {
                lines.push(format!("# {}", line.trim()));
            }
        }
    }

    let commented = match f.status {
        Status::Normal => false,
        Status::Experimental => {
            lines.push("# (experimental) this feature may change or be removed".into());
            true
        }
        Status::NotImplemented => {
            lines.push("# (not implemented)".into());
            true
        }
        Status::Deprecated => {
            lines.push("# (deprecated) this option will be removed in a future version".into());
            true
        }
        Status::Hidden => return String::new(),
    };

    let optional = f.ty.starts_with("Option<");
    let value = match &f.default {
        Some(v) => quoted_default(v, &f.ty),
        None => inferred_default(&f.ty),
    };

    if f.sub {
        lines.push(format!("# see [{}] section", f.toml_name));
    } else if optional && f.default.is_none() {
        // Optional fields without a default stay commented out
        let mut line = format!("# {} = \"\"", f.toml_name);
        if inline {
            line.push_str(&format!("  # {}", f.doc.as_ref().unwrap().trim()));
        }
        lines.push(line);
    } else {
        let prefix = if commented { "# " } else { "" };
        let mut line = format!("{prefix}{} = {value}", f.toml_name);
        if inline {
            line.push_str(&format!("  # {}", f.doc.as_ref().unwrap().trim()));
        }
        lines.push(line);
    }

    lines.join("\n")
}

// ============================================================================
// Status validation generation
// ============================================================================

fn gen_status(section: &str, fields: &[Field]) -> TokenStream {
    let own: Vec<&Field> = fields.iter().filter(|f| !f.skip && !f.sub).collect();

    let field_checks: Vec<TokenStream> = own
        .iter()
        .filter(|f| f.status.is_special())
        .map(|f| {
            let ident = &f.ident;
            let path = f.path_in(section);
            let status = f.status.token();
            quote! {
                if self.#ident != default.#ident {
                    crate::config::types::check_field_status(#path, #status, diag);
                }
            }
        })
        .collect();

    let default_def = if field_checks.is_empty() {
        quote! {}
    } else {
        quote! { let default = Self::default(); }
    };

    let recurse: Vec<TokenStream> = fields
        .iter()
        .filter(|f| !f.skip && f.sub)
        .map(|f| {
            let ident = &f.ident;
            quote! { self.#ident.validate_field_status(diag); }
        })
        .collect();

    quote! {
        /// Validate field status (experimental, deprecated, not_implemented).
        #[allow(unused_variables)]
        pub fn validate_field_status(&self, diag: &mut crate::config::ConfigDiagnostics) {
            #default_def
            #(#field_checks)*
            #(#recurse)*
        }
    }
}

// ============================================================================
// Attribute helpers
// ============================================================================

fn attr_string(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                // Skip other key = value pairs
                let _: syn::Token![=] = meta.input.parse()?;
                if meta.input.parse::<syn::Ident>().is_err() {
                    let _ = meta.input.parse::<syn::Lit>();
                }
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

fn attr_flag(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            if meta.input.peek(syn::Token![=]) {
                let _: syn::Token![=] = meta.input.parse()?;
                if meta.input.parse::<syn::Ident>().is_err() {
                    let _ = meta.input.parse::<syn::Lit>();
                }
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

fn attr_status(attrs: &[Attribute]) -> Status {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut status = Status::Normal;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("status") {
                let _: syn::Token![=] = meta.input.parse()?;
                let ident: syn::Ident = meta.input.parse()?;
                status = match ident.to_string().as_str() {
                    "experimental" => Status::Experimental,
                    "not_implemented" => Status::NotImplemented,
                    "deprecated" => Status::Deprecated,
                    "hidden" => Status::Hidden,
                    _ => Status::Normal,
                };
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Token![=] = meta.input.parse()?;
                if meta.input.parse::<syn::Ident>().is_err() {
                    let _ = meta.input.parse::<syn::Lit>();
                }
            }
            Ok(())
        });
        if status != Status::Normal {
            return status;
        }
    }
    Status::Normal
}

fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr) = &nv.value
                && let Lit::Str(s) = &expr.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}

// ============================================================================
// Type helpers
// ============================================================================

fn type_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    snake_case(name)
}

fn snake_case(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Quote a default value when the field type is string-like.
fn quoted_default(value: &str, ty: &str) -> String {
    let numeric = matches!(
        ty,
        "bool"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "usize"
            | "i8"
            | "i16"
            | "i32"
            | "i64"
            | "isize"
            | "f32"
            | "f64"
    );
    if numeric || ty.starts_with("Vec<") {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

fn inferred_default(ty: &str) -> String {
    match ty {
        "bool" => "false".to_string(),
        "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64" | "isize" => {
            "0".to_string()
        }
        "f32" | "f64" => "0.0".to_string(),
        _ if ty.starts_with("Vec<") => "[]".to_string(),
        _ => "\"\"".to_string(),
    }
}
