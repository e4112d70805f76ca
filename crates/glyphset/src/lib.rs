//! Namespaced SVG icon-set registry.
//!
//! Register icon sets backed by local directory trees or named storage
//! disks, resolve short references like `ui-arrow` to raw SVG markup with
//! per-name caching, and hand the result to a rendering layer with a merged
//! CSS class attribute.
//!
//! # Example
//!
//! ```
//! use glyphset::{IconRegistry, IconSetOptions, MemoryDisk};
//!
//! let mut registry = IconRegistry::with_default_class("icon");
//! registry.add_disk(
//!     "assets",
//!     MemoryDisk::new().with_file("camera.svg", "<svg>camera</svg>"),
//! );
//! registry.add("ui", IconSetOptions::new().disk("assets").prefix("ui"))?;
//!
//! let icon = registry.svg("ui-camera", "mt-2", Default::default())?;
//! assert_eq!(icon.name(), "camera");
//! assert_eq!(icon.content(), "<svg>camera</svg>");
//! assert_eq!(icon.attributes()["class"], "icon mt-2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A qualified name is split on its first `-`: when the leading token
//! matches a registered set prefix, the remainder resolves within that set;
//! otherwise the whole name resolves against the set named `"default"`.
//! Dots in a bare name map to subdirectories, so `ui-arrows.up` reads
//! `arrows/up.svg` from the `ui` set's source.
//!
//! Sets can also be declared in TOML and loaded with
//! [`RegistryConfig::from_file`], and [`IconRegistry::register_components`]
//! reports every discoverable icon to a host UI framework through the
//! [`ComponentRegistrar`] trait.

mod attributes;
mod config;
mod discover;
mod disk;
mod error;
mod icon;
mod registry;
mod set;

pub use attributes::{Attributes, IconClass};
pub use config::{RegistryConfig, SetConfig};
pub use discover::ComponentRegistrar;
pub use disk::{Disk, MemoryDisk};
pub use error::{ConfigurationError, SvgError};
pub use icon::Icon;
pub use registry::{DEFAULT_SET, IconRegistry, SharedIconRegistry};
pub use set::{IconSet, IconSetOptions, IconSource};
