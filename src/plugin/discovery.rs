//! Plugin discovery from the configured search path.
//!
//! Discovery never fails as a whole. A missing directory, an unreadable or
//! malformed manifest, an unknown factory or a duplicate name only skips
//! that candidate; the [`DiscoveryReport`] says which and why.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::factory::{Plugin, PluginFactoryTable};
use super::manifest::{PluginKind, PluginManifest};
use super::menu::ToolsMenu;
use crate::engine::EngineSet;
use crate::options::PluginOptions;

/// Directories to scan: the configured ones, then the entries of the
/// configured environment variable.
#[must_use]
pub fn search_paths(options: &PluginOptions) -> Vec<PathBuf> {
    let env_value = std::env::var(&options.env_var).ok();
    search_paths_with(options, env_value.as_deref())
}

/// [`search_paths`] with an explicit environment variable value.
///
/// The value is split on `:` as is, without trimming; empty entries are
/// ignored, and a directory listed twice is only scanned once.
#[must_use]
pub fn search_paths_with(
    options: &PluginOptions,
    env_value: Option<&str>,
) -> Vec<PathBuf> {
    let extra = env_value
        .into_iter()
        .flat_map(|v| v.split(':'))
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let mut paths: Vec<PathBuf> = Vec::new();
    for path in options.search_paths.iter().cloned().chain(extra) {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

/// A plugin instantiated from a manifest, or registered from one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPlugin {
    /// Instance name.
    pub name: String,
    /// Capability.
    pub kind: PluginKind,
    /// Manifest it came from.
    pub path: PathBuf,
}

/// A candidate that was passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    /// File or directory concerned.
    pub path: PathBuf,
    /// Human readable reason.
    pub reason: String,
}

/// What discovery looked at and what it made of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Directories that were read.
    pub scanned: Vec<PathBuf>,
    /// Directories that do not exist.
    pub missing: Vec<PathBuf>,
    /// Plugins registered by [`Discovery::install`].
    pub loaded: Vec<LoadedPlugin>,
    /// Candidates that were skipped.
    pub skipped: Vec<SkippedCandidate>,
}

impl DiscoveryReport {
    /// Number of plugins of `kind` that were registered.
    #[must_use]
    pub fn loaded_count(&self, kind: PluginKind) -> usize {
        self.loaded.iter().filter(|p| p.kind == kind).count()
    }

    fn skip(&mut self, path: &Path, reason: impl Into<String>) {
        let reason = reason.into();
        log::debug!("skipping plugin candidate {}: {reason}", path.display());
        self.skipped.push(SkippedCandidate {
            path: path.to_path_buf(),
            reason,
        });
    }
}

/// Instantiated plugins waiting to be registered.
pub struct Discovery {
    plugins: Vec<(PathBuf, Plugin)>,
    report: DiscoveryReport,
}

impl Discovery {
    /// Instantiated plugins, in discovery order.
    pub fn plugins(&self) -> impl Iterator<Item = &Plugin> + '_ {
        self.plugins.iter().map(|(_, plugin)| plugin)
    }

    /// Report so far (nothing is `loaded` until [`Discovery::install`]).
    #[must_use]
    pub fn report(&self) -> &DiscoveryReport {
        &self.report
    }

    /// Register engines into `engines` and extensions into `menu`.
    ///
    /// A plugin whose name is already taken is skipped.
    pub fn install(
        self,
        engines: &mut EngineSet,
        menu: &mut ToolsMenu,
    ) -> DiscoveryReport {
        let mut report = self.report;
        for (path, plugin) in self.plugins {
            let kind = plugin.kind();
            let name = plugin.name().to_owned();
            let result = match plugin {
                Plugin::Engine(engine) => engines.register(engine),
                Plugin::Extension(extension) => menu.add_extension(extension),
            };
            match result {
                Ok(()) => {
                    log::info!("loaded {kind} plugin '{name}'");
                    report.loaded.push(LoadedPlugin { name, kind, path });
                }
                Err(err) => {
                    log::warn!(
                        "plugin {} not registered: {err}",
                        path.display()
                    );
                    report.skip(&path, err.to_string());
                }
            }
        }
        report
    }
}

/// Scan `paths` in order for plugin manifests and instantiate each through
/// `factories`.
///
/// Within a directory, files are visited in file-name order. Only `.toml`
/// files are considered manifests.
#[must_use]
pub fn discover(
    paths: &[PathBuf],
    factories: &PluginFactoryTable,
) -> Discovery {
    let mut report = DiscoveryReport::default();
    let mut plugins = Vec::new();

    for dir in paths {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "plugin directory {} does not exist",
                    dir.display()
                );
                report.missing.push(dir.clone());
                continue;
            }
            Err(err) => {
                report.skip(dir, format!("unreadable directory: {err}"));
                continue;
            }
        };
        report.scanned.push(dir.clone());

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        for path in files {
            if !path.extension().is_some_and(|ext| ext == "toml") {
                report.skip(&path, "not a plugin manifest");
                continue;
            }
            let built = PluginManifest::load(&path)
                .and_then(|manifest| factories.build(&manifest));
            match built {
                Ok(plugin) => plugins.push((path, plugin)),
                Err(err) => {
                    log::warn!("{err}");
                    report.skip(&path, err.to_string());
                }
            }
        }
    }

    Discovery { plugins, report }
}

/// Search, discover and install in one step.
pub fn load_plugins(
    options: &PluginOptions,
    factories: &PluginFactoryTable,
    engines: &mut EngineSet,
    menu: &mut ToolsMenu,
) -> DiscoveryReport {
    let paths = search_paths(options);
    discover(&paths, factories).install(engines, menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(paths: &[&str]) -> PluginOptions {
        PluginOptions {
            search_paths: paths.iter().map(PathBuf::from).collect(),
            env_var: "MOLSTYLE_TEST_UNSET".to_owned(),
        }
    }

    #[test]
    fn env_entries_follow_configured_paths() {
        let opts = options(&["/a", "/b"]);
        let paths = search_paths_with(&opts, Some("/c::/a:/d"));
        assert_eq!(
            paths,
            [
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/c"),
                PathBuf::from("/d"),
            ]
        );
    }

    #[test]
    fn env_entries_keep_surrounding_spaces() {
        let opts = options(&[]);
        let paths = search_paths_with(&opts, Some(" /my plugins :/e"));
        assert_eq!(
            paths,
            [PathBuf::from(" /my plugins "), PathBuf::from("/e")]
        );
        assert_eq!(search_paths_with(&opts, None).len(), 2);
    }

    #[test]
    fn files_are_visited_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let manifests = [("b.toml", "space_fill"), ("a.toml", "wireframe")];
        for (file, factory) in manifests {
            fs::write(
                dir.path().join(file),
                format!(
                    "name = \"{factory}-x\"\nkind = \"engine\"\n\
                     factory = \"{factory}\"\n"
                ),
            )
            .unwrap();
        }
        fs::create_dir(dir.path().join("nested.toml")).unwrap();

        let found = discover(
            &[dir.path().to_path_buf()],
            &PluginFactoryTable::builtin(),
        );
        let names: Vec<_> = found.plugins().map(Plugin::name).collect();
        assert_eq!(names, ["wireframe-x", "space_fill-x"]);
        assert!(found.report().skipped.is_empty());
    }

    #[test]
    fn duplicates_are_skipped_on_install() {
        let dir = tempfile::tempdir().unwrap();
        let text = "name = \"wireframe\"\nkind = \"engine\"\n\
                    factory = \"wireframe\"\n";
        fs::write(dir.path().join("wire.toml"), text).unwrap();

        let mut engines = EngineSet::builtin();
        let mut menu = ToolsMenu::new();
        let report = discover(
            &[dir.path().to_path_buf()],
            &PluginFactoryTable::builtin(),
        )
        .install(&mut engines, &mut menu);
        assert!(report.loaded.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(engines.len(), 3);
    }

    #[test]
    fn load_plugins_tolerates_missing_directories() {
        let mut engines = EngineSet::new();
        let mut menu = ToolsMenu::new();
        let report = load_plugins(
            &options(&["/nonexistent/molstyle-plugins"]),
            &PluginFactoryTable::builtin(),
            &mut engines,
            &mut menu,
        );
        assert_eq!(
            report.missing,
            [PathBuf::from("/nonexistent/molstyle-plugins")]
        );
        assert!(engines.is_empty());
        assert!(menu.is_empty());
    }
}
