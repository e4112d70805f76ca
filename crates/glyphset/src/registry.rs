//! The icon-set registry: registration, resolution, caching, and attribute
//! formatting.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::attributes::{Attributes, IconClass, join_classes};
use crate::discover::{
    ComponentRegistrar, dotted_name_for_path, dotted_name_for_relative, walk_files,
};
use crate::disk::Disk;
use crate::error::{ConfigurationError, SvgError};
use crate::icon::Icon;
use crate::set::{IconSet, IconSetOptions, IconSource};

/// Set name used when a qualified name carries no registered prefix.
pub const DEFAULT_SET: &str = "default";

/// Registry of icon sets with cached name resolution.
///
/// The registry is explicitly constructed and explicitly owned; it is passed
/// by reference to whatever needs it rather than living in process-wide
/// state. The intended lifecycle is register-then-serve: sets (and disks)
/// are added once at startup, after which [`svg`](Self::svg) resolves icons
/// for the rest of the process lifetime.
///
/// # Examples
///
/// ```
/// use glyphset::{IconRegistry, IconSetOptions, MemoryDisk};
///
/// let mut registry = IconRegistry::with_default_class("icon");
/// registry.add_disk("assets", MemoryDisk::new().with_file("camera.svg", "<svg>camera</svg>"));
/// registry.add("ui", IconSetOptions::new().disk("assets").prefix("ui"))?;
///
/// let icon = registry.svg("ui-camera", "mt-2", Default::default())?;
/// assert_eq!(icon.name(), "camera");
/// assert_eq!(icon.content(), "<svg>camera</svg>");
/// assert_eq!(icon.attributes()["class"], "icon mt-2");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct IconRegistry {
    /// Registered sets in insertion order. Linear search is fine: a registry
    /// holds a handful of sets.
    sets: Vec<IconSet>,
    disks: HashMap<String, Arc<dyn Disk>>,
    /// Resolved SVG text keyed by set name, then bare icon name.
    cache: HashMap<String, HashMap<String, String>>,
    default_class: Option<String>,
}

impl IconRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a class applied to every icon.
    pub fn with_default_class(class: impl Into<String>) -> Self {
        Self {
            default_class: Some(class.into()),
            ..Self::default()
        }
    }

    /// Class applied to every icon, if configured.
    pub fn default_class(&self) -> Option<&str> {
        self.default_class.as_deref()
    }

    /// Register a storage disk under a name that sets can refer to.
    pub fn add_disk(&mut self, name: impl Into<String>, disk: impl Disk + 'static) -> &mut Self {
        self.disks.insert(name.into(), Arc::new(disk));
        self
    }

    /// Register an icon set.
    ///
    /// Validation order, first failure wins, no partial mutation: a source
    /// must be given, a prefix must be given, the prefix must not be claimed
    /// by a different set, and a path source must exist on the filesystem.
    /// On success the whole resolution cache is cleared, since set and
    /// prefix relationships may have shifted. Returns `&mut self` so
    /// registrations chain with `?`.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        options: IconSetOptions,
    ) -> Result<&mut Self, ConfigurationError> {
        let name = name.into();

        let source = match (options.path, options.disk) {
            (None, None) => return Err(ConfigurationError::no_source(name)),
            (Some(path), _) => IconSource::Path(path),
            (None, Some(disk)) => IconSource::Disk(disk),
        };

        let Some(prefix) = options.prefix else {
            return Err(ConfigurationError::no_prefix(name));
        };

        if let Some(existing) = self
            .sets
            .iter()
            .find(|set| set.name() != name && set.prefix() == prefix)
        {
            return Err(ConfigurationError::prefix_collision(
                name,
                existing.name(),
                prefix,
            ));
        }

        if let IconSource::Path(path) = &source
            && !path.exists()
        {
            return Err(ConfigurationError::path_not_found(name, path.clone()));
        }

        let set = IconSet::new(name, source, prefix, options.class);
        debug!(set = set.name(), prefix = set.prefix(), "registered icon set");

        match self.sets.iter_mut().find(|slot| slot.name() == set.name()) {
            Some(slot) => *slot = set,
            None => self.sets.push(set),
        }
        self.cache.clear();

        Ok(self)
    }

    /// Registered sets, insertion order preserved.
    pub fn all(&self) -> &[IconSet] {
        &self.sets
    }

    /// Look up a set by name.
    pub fn set(&self, name: &str) -> Option<&IconSet> {
        self.sets.iter().find(|set| set.name() == name)
    }

    /// Enumerate every icon in every registered set and report each one to
    /// the registrar as a dotted name plus the set's prefix.
    ///
    /// A one-time discovery pass, not resolution: nothing is read or cached.
    /// Path sets are walked recursively; disk sets use the disk's flat
    /// relative-path listing. Listing errors propagate unchanged.
    pub fn register_components(
        &self,
        registrar: &mut dyn ComponentRegistrar,
    ) -> io::Result<()> {
        for set in &self.sets {
            let mut count = 0usize;
            match set.source() {
                IconSource::Path(root) => {
                    let mut files = Vec::new();
                    walk_files(root, &mut files)?;
                    files.sort();
                    for file in &files {
                        if let Some(dotted) = dotted_name_for_path(root, file) {
                            registrar.register(&dotted, set.prefix());
                            count += 1;
                        }
                    }
                }
                IconSource::Disk(disk_name) => {
                    let disk = self.disks.get(disk_name).ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::NotFound,
                            format!("no disk named '{disk_name}'"),
                        )
                    })?;
                    for relative in disk.list_all_files()? {
                        if let Some(dotted) = dotted_name_for_relative(&relative) {
                            registrar.register(&dotted, set.prefix());
                            count += 1;
                        }
                    }
                }
            }
            debug!(set = set.name(), icons = count, "discovered icon components");
        }
        Ok(())
    }

    /// Resolve a qualified icon name to an [`Icon`].
    ///
    /// The text before the first `-` selects the set when it matches a
    /// registered prefix; otherwise the whole name resolves against the set
    /// named [`DEFAULT_SET`]. Content is cached per `(set, name)` pair.
    pub fn svg(
        &mut self,
        qualified: &str,
        class: impl Into<IconClass>,
        attributes: Attributes,
    ) -> Result<Icon, SvgError> {
        let (set_name, bare) = self.split_set_and_name(qualified);
        let content = self.contents(&set_name, &bare)?;
        let set = self.set(&set_name);
        let attributes = self.format_attributes(set, class.into(), attributes);
        Ok(Icon::new(bare, content, attributes))
    }

    /// Whether a qualified name resolves to an icon.
    ///
    /// Resolves (and caches) the content, discarding it.
    pub fn has(&mut self, qualified: &str) -> bool {
        let (set_name, bare) = self.split_set_and_name(qualified);
        self.contents(&set_name, &bare).is_ok()
    }

    /// Drop every cached resolution.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached icons, for diagnostics.
    pub fn cached_icons(&self) -> usize {
        self.cache.values().map(|icons| icons.len()).sum()
    }

    /// Split a qualified name into set name and bare icon name.
    ///
    /// First-inserted set wins if the prefix lookup were ever ambiguous;
    /// `add` keeps prefixes unique, so it is not.
    fn split_set_and_name(&self, qualified: &str) -> (String, String) {
        let (candidate, rest) = match qualified.split_once('-') {
            Some((prefix, rest)) => (prefix, rest),
            None => (qualified, qualified),
        };
        match self.sets.iter().find(|set| set.prefix() == candidate) {
            Some(set) => (set.name().to_string(), rest.to_string()),
            None => (DEFAULT_SET.to_string(), qualified.to_string()),
        }
    }

    /// Fetch the SVG text for `(set, name)`, consulting the cache first.
    ///
    /// Dots in the bare name map to path separators. Path sources are
    /// trimmed of surrounding whitespace; disk sources are returned
    /// verbatim.
    fn contents(&mut self, set_name: &str, name: &str) -> Result<String, SvgError> {
        if let Some(content) = self.cache.get(set_name).and_then(|icons| icons.get(name)) {
            trace!(set = set_name, icon = name, "icon cache hit");
            return Ok(content.clone());
        }

        let Some(set) = self.set(set_name) else {
            return Err(SvgError::not_found(set_name, name));
        };

        let relative = format!("{}.svg", name.replace('.', "/"));
        trace!(set = set_name, icon = name, file = %relative, "icon cache miss");

        let content = match set.source() {
            IconSource::Path(root) => match fs::read_to_string(root.join(&relative)) {
                Ok(raw) => raw.trim().to_string(),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Err(SvgError::not_found(set_name, name));
                }
                Err(err) => return Err(SvgError::Io(err)),
            },
            IconSource::Disk(disk_name) => {
                let Some(disk) = self.disks.get(disk_name) else {
                    return Err(SvgError::not_found(set_name, name));
                };
                match disk.read_file(&relative) {
                    Ok(raw) => raw,
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        return Err(SvgError::not_found(set_name, name));
                    }
                    Err(err) => return Err(SvgError::Io(err)),
                }
            }
        };

        self.cache
            .entry(set_name.to_string())
            .or_default()
            .insert(name.to_string(), content.clone());
        Ok(content)
    }

    /// Compute the final attribute set for an icon of `set`.
    fn format_attributes(
        &self,
        set: Option<&IconSet>,
        class: IconClass,
        attributes: Attributes,
    ) -> Attributes {
        let set_class = set.and_then(IconSet::class).unwrap_or("");
        let built = join_classes(self.default_class.as_deref().unwrap_or(""), set_class);

        match class {
            IconClass::Name(name) => {
                let mut attributes = attributes;
                let full = join_classes(&built, &name);
                if !full.is_empty() {
                    attributes.entry("class".to_string()).or_insert(full);
                }
                attributes
            }
            // The map replaces the attributes argument outright.
            IconClass::Attributes(map) => {
                let mut attributes = map;
                attributes.entry("class".to_string()).or_insert(built);
                attributes
            }
        }
    }
}

impl fmt::Debug for IconRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRegistry")
            .field("sets", &self.sets)
            .field("disks", &self.disks.keys().collect::<Vec<_>>())
            .field("cached_icons", &self.cached_icons())
            .field("default_class", &self.default_class)
            .finish()
    }
}

/// Clonable handle sharing one registry behind a read-write lock.
///
/// Matches the register-then-serve pattern from multiple call sites: build
/// the registry, wrap it, clone the handle into whatever serves render
/// requests. [`svg`](Self::svg) takes the write lock because resolution
/// populates the cache; `add` is serialized against it by the same lock.
#[derive(Debug, Clone)]
pub struct SharedIconRegistry {
    inner: Arc<RwLock<IconRegistry>>,
}

impl SharedIconRegistry {
    /// Wrap a registry for shared use.
    pub fn new(registry: IconRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Register an icon set. See [`IconRegistry::add`].
    pub fn add(
        &self,
        name: impl Into<String>,
        options: IconSetOptions,
    ) -> Result<(), ConfigurationError> {
        self.inner.write().add(name, options).map(|_| ())
    }

    /// Resolve a qualified icon name. See [`IconRegistry::svg`].
    pub fn svg(
        &self,
        qualified: &str,
        class: impl Into<IconClass>,
        attributes: Attributes,
    ) -> Result<Icon, SvgError> {
        self.inner.write().svg(qualified, class, attributes)
    }

    /// Run a closure against the registry under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&IconRegistry) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<IconRegistry> for SharedIconRegistry {
    fn from(registry: IconRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tempfile::TempDir;

    use super::*;
    use crate::disk::MemoryDisk;

    /// Disk stub that counts reads, for cache behavior tests.
    struct CountingDisk {
        inner: MemoryDisk,
        reads: Arc<AtomicUsize>,
    }

    impl CountingDisk {
        fn new(inner: MemoryDisk) -> (Self, Arc<AtomicUsize>) {
            let reads = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    inner,
                    reads: reads.clone(),
                },
                reads,
            )
        }
    }

    impl Disk for CountingDisk {
        fn list_all_files(&self) -> io::Result<Vec<String>> {
            self.inner.list_all_files()
        }

        fn read_file(&self, relative: &str) -> io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read_file(relative)
        }
    }

    struct Collector(Vec<(String, String)>);

    impl ComponentRegistrar for Collector {
        fn register(&mut self, dotted_name: &str, prefix: &str) {
            self.0.push((dotted_name.to_string(), prefix.to_string()));
        }
    }

    fn write_svg(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn path_set(registry: &mut IconRegistry, name: &str, prefix: &str, dir: &Path) {
        registry
            .add(name, IconSetOptions::new().path(dir).prefix(prefix))
            .unwrap();
    }

    #[test]
    fn test_add_requires_source_before_anything_else() {
        let mut registry = IconRegistry::new();
        // No prefix either, but the missing source is reported first.
        let err = registry.add("ui", IconSetOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NoSourceDefined { ref set } if set == "ui"
        ));
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_add_requires_prefix() {
        let dir = TempDir::new().unwrap();
        let mut registry = IconRegistry::new();
        let err = registry
            .add("ui", IconSetOptions::new().path(dir.path()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NoPrefixDefined { ref set } if set == "ui"
        ));
    }

    #[test]
    fn test_add_rejects_prefix_collision_without_mutation() {
        let dir = TempDir::new().unwrap();
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());

        let err = registry
            .add("brand", IconSetOptions::new().path(dir.path()).prefix("ui"))
            .unwrap_err();
        match err {
            ConfigurationError::PrefixCollision {
                set,
                existing,
                prefix,
            } => {
                assert_eq!(set, "brand");
                assert_eq!(existing, "ui");
                assert_eq!(prefix, "ui");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.all()[0].name(), "ui");
    }

    #[test]
    fn test_add_rejects_missing_path() {
        let mut registry = IconRegistry::new();
        let err = registry
            .add(
                "ui",
                IconSetOptions::new().path("/nonexistent/icons").prefix("ui"),
            )
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::PathNotFound { .. }));
    }

    #[test]
    fn test_readding_same_name_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());
        path_set(&mut registry, "brand", "brand", other.path());

        // Same name, same prefix: allowed, replaces the set.
        registry
            .add(
                "ui",
                IconSetOptions::new()
                    .path(dir.path())
                    .prefix("ui")
                    .class("ui-icon"),
            )
            .unwrap();

        assert_eq!(registry.all().len(), 2);
        assert_eq!(registry.all()[0].name(), "ui");
        assert_eq!(registry.all()[0].class(), Some("ui-icon"));
    }

    #[test]
    fn test_add_chains() {
        let dir = TempDir::new().unwrap();
        let mut registry = IconRegistry::new();
        registry
            .add("ui", IconSetOptions::new().path(dir.path()).prefix("ui"))
            .and_then(|registry| {
                registry.add(
                    "brand",
                    IconSetOptions::new().path(dir.path()).prefix("brand"),
                )
            })
            .unwrap();
        assert_eq!(registry.all().len(), 2);
    }

    #[test]
    fn test_svg_resolves_prefixed_name_from_path() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", " <svg>A</svg>\n");
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());

        let icon = registry.svg("ui-arrow", "", Attributes::new()).unwrap();
        assert_eq!(icon.name(), "arrow");
        assert_eq!(icon.content(), "<svg>A</svg>");
    }

    #[test]
    fn test_svg_dotted_name_maps_to_subdirectory() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrows/up.svg", "<svg>up</svg>");
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());

        let icon = registry
            .svg("ui-arrows.up", "", Attributes::new())
            .unwrap();
        assert_eq!(icon.name(), "arrows.up");
        assert_eq!(icon.content(), "<svg>up</svg>");
    }

    #[test]
    fn test_svg_without_prefix_uses_default_set() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "camera.svg", "<svg>camera</svg>");
        write_svg(dir.path(), "foo-bar.svg", "<svg>fb</svg>");
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "default", "icon", dir.path());

        let icon = registry.svg("camera", "", Attributes::new()).unwrap();
        assert_eq!(icon.name(), "camera");
        assert_eq!(icon.content(), "<svg>camera</svg>");

        // A dash without a matching prefix leaves the name whole.
        let icon = registry.svg("foo-bar", "", Attributes::new()).unwrap();
        assert_eq!(icon.name(), "foo-bar");
        assert_eq!(icon.content(), "<svg>fb</svg>");
    }

    #[test]
    fn test_svg_missing_icon_names_set_and_icon() {
        let dir = TempDir::new().unwrap();
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());

        let err = registry
            .svg("ui-missing", "", Attributes::new())
            .unwrap_err();
        match err {
            SvgError::NotFound { set, name } => {
                assert_eq!(set, "ui");
                assert_eq!(name, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_svg_unregistered_set_is_not_found() {
        let mut registry = IconRegistry::new();
        let err = registry.svg("camera", "", Attributes::new()).unwrap_err();
        assert!(matches!(
            err,
            SvgError::NotFound { ref set, ref name } if set == "default" && name == "camera"
        ));
    }

    #[test]
    fn test_svg_disk_content_is_verbatim() {
        let mut registry = IconRegistry::new();
        registry.add_disk(
            "assets",
            MemoryDisk::new().with_file("camera.svg", " <svg>camera</svg>\n"),
        );
        registry
            .add("ui", IconSetOptions::new().disk("assets").prefix("ui"))
            .unwrap();

        let icon = registry.svg("ui-camera", "", Attributes::new()).unwrap();
        assert_eq!(icon.content(), " <svg>camera</svg>\n");
    }

    #[test]
    fn test_svg_unknown_disk_is_not_found() {
        let mut registry = IconRegistry::new();
        registry
            .add("ui", IconSetOptions::new().disk("nope").prefix("ui"))
            .unwrap();
        let err = registry
            .svg("ui-camera", "", Attributes::new())
            .unwrap_err();
        assert!(matches!(err, SvgError::NotFound { .. }));
    }

    #[test]
    fn test_second_resolution_is_served_from_cache() {
        let (disk, reads) =
            CountingDisk::new(MemoryDisk::new().with_file("camera.svg", "<svg/>"));
        let mut registry = IconRegistry::new();
        registry.add_disk("assets", disk);
        registry
            .add("ui", IconSetOptions::new().disk("assets").prefix("ui"))
            .unwrap();

        registry.svg("ui-camera", "", Attributes::new()).unwrap();
        registry.svg("ui-camera", "", Attributes::new()).unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert_eq!(registry.cached_icons(), 1);
    }

    #[test]
    fn test_add_clears_cache() {
        let dir = TempDir::new().unwrap();
        let (disk, reads) =
            CountingDisk::new(MemoryDisk::new().with_file("camera.svg", "<svg/>"));
        let mut registry = IconRegistry::new();
        registry.add_disk("assets", disk);
        registry
            .add("ui", IconSetOptions::new().disk("assets").prefix("ui"))
            .unwrap();

        registry.svg("ui-camera", "", Attributes::new()).unwrap();
        assert_eq!(registry.cached_icons(), 1);

        // Registering an unrelated set still clears everything.
        path_set(&mut registry, "brand", "brand", dir.path());
        assert_eq!(registry.cached_icons(), 0);

        registry.svg("ui-camera", "", Attributes::new()).unwrap();
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_has_resolves_without_failing() {
        let mut registry = IconRegistry::new();
        registry.add_disk("assets", MemoryDisk::new().with_file("camera.svg", "<svg/>"));
        registry
            .add("ui", IconSetOptions::new().disk("assets").prefix("ui"))
            .unwrap();

        assert!(registry.has("ui-camera"));
        assert!(!registry.has("ui-missing"));
    }

    #[test]
    fn test_class_string_merges_default_set_and_given() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        let mut registry = IconRegistry::with_default_class("icon");
        registry
            .add(
                "ui",
                IconSetOptions::new()
                    .path(dir.path())
                    .prefix("ui")
                    .class("ui-icon"),
            )
            .unwrap();

        let icon = registry.svg("ui-arrow", "extra", Attributes::new()).unwrap();
        assert_eq!(icon.attributes()["class"], "icon ui-icon extra");
    }

    #[test]
    fn test_empty_class_pieces_collapse() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        let mut registry = IconRegistry::new();
        path_set(&mut registry, "ui", "ui", dir.path());

        let icon = registry.svg("ui-arrow", "extra", Attributes::new()).unwrap();
        assert_eq!(icon.attributes()["class"], "extra");

        let icon = registry.svg("ui-arrow", "", Attributes::new()).unwrap();
        assert!(!icon.attributes().contains_key("class"));
    }

    #[test]
    fn test_existing_class_attribute_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        let mut registry = IconRegistry::with_default_class("icon");
        path_set(&mut registry, "ui", "ui", dir.path());

        let mut attributes = Attributes::new();
        attributes.insert("class".to_string(), "keep".to_string());
        let icon = registry.svg("ui-arrow", "extra", attributes).unwrap();
        assert_eq!(icon.attributes()["class"], "keep");
    }

    #[test]
    fn test_attribute_map_replaces_attributes_and_injects_class() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        let mut registry = IconRegistry::with_default_class("icon");
        registry
            .add(
                "ui",
                IconSetOptions::new()
                    .path(dir.path())
                    .prefix("ui")
                    .class("ui-icon"),
            )
            .unwrap();

        let mut map = Attributes::new();
        map.insert("id".to_string(), "x".to_string());

        let mut ignored = Attributes::new();
        ignored.insert("data-old".to_string(), "y".to_string());

        let icon = registry
            .svg("ui-arrow", IconClass::Attributes(map), ignored)
            .unwrap();
        assert_eq!(icon.attributes()["id"], "x");
        assert_eq!(icon.attributes()["class"], "icon ui-icon");
        assert!(!icon.attributes().contains_key("data-old"));
    }

    #[test]
    fn test_attribute_map_keeps_existing_class() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        let mut registry = IconRegistry::with_default_class("icon");
        path_set(&mut registry, "ui", "ui", dir.path());

        let mut map = Attributes::new();
        map.insert("class".to_string(), "y".to_string());
        let icon = registry
            .svg("ui-arrow", IconClass::Attributes(map), Attributes::new())
            .unwrap();
        assert_eq!(icon.attributes()["class"], "y");
    }

    #[test]
    fn test_register_components_walks_paths_and_disks() {
        let dir = TempDir::new().unwrap();
        write_svg(dir.path(), "arrow.svg", "<svg/>");
        write_svg(dir.path(), "arrows/thin/up.svg", "<svg/>");

        let mut registry = IconRegistry::new();
        registry.add_disk(
            "assets",
            MemoryDisk::new()
                .with_file("camera.svg", "<svg/>")
                .with_file("media/play.svg", "<svg/>"),
        );
        path_set(&mut registry, "ui", "ui", dir.path());
        registry
            .add("brand", IconSetOptions::new().disk("assets").prefix("brand"))
            .unwrap();

        let mut collector = Collector(Vec::new());
        registry.register_components(&mut collector).unwrap();
        assert_eq!(
            collector.0,
            vec![
                ("arrow".to_string(), "ui".to_string()),
                ("arrows.thin.up".to_string(), "ui".to_string()),
                ("camera".to_string(), "brand".to_string()),
                ("media.play".to_string(), "brand".to_string()),
            ]
        );
    }

    #[test]
    fn test_register_components_unknown_disk_errors() {
        let mut registry = IconRegistry::new();
        registry
            .add("ui", IconSetOptions::new().disk("nope").prefix("ui"))
            .unwrap();
        let mut collector = Collector(Vec::new());
        let err = registry.register_components(&mut collector).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_shared_registry_serves_clones() {
        let mut registry = IconRegistry::with_default_class("icon");
        registry.add_disk("assets", MemoryDisk::new().with_file("camera.svg", "<svg/>"));
        registry
            .add("ui", IconSetOptions::new().disk("assets").prefix("ui"))
            .unwrap();

        let shared = SharedIconRegistry::new(registry);
        let clone = shared.clone();

        let icon = clone.svg("ui-camera", "", Attributes::new()).unwrap();
        assert_eq!(icon.content(), "<svg/>");
        assert_eq!(shared.with(|registry| registry.cached_icons()), 1);
    }
}
