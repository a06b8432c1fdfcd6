//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docfig.toml`:
//!
//! | Module    | TOML Section   | Purpose                              |
//! |-----------|----------------|--------------------------------------|
//! | `site`    | `[site]`       | Site info, head tags, footer         |
//! | `theme`   | `[theme]`      | Appearance, accent color, logo       |
//! | `nav`     | `[[nav]]`      | Top-level navigation entries         |
//! | `sidebar` | `[[sidebar]]`  | Sidebar groups keyed by route prefix |
//! | `locale`  | `[locales.*]`  | Language variants                    |
//! | `build`   | `[build]`      | Descriptor output, base path         |
//! | `check`   | `[check]`      | Check command settings               |

mod build;
mod check;
pub mod locale;
pub mod nav;
pub mod sidebar;
pub mod site;
mod theme;

// Re-export section configs
pub use build::BuildSectionConfig;
pub use check::{CheckConfig, CheckLevel, LocalesCheckConfig, NavCheckConfig, SidebarCheckConfig};
pub use locale::LocaleConfig;
pub use nav::{NavItem, NavItemKind};
pub use sidebar::SidebarGroup;
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
