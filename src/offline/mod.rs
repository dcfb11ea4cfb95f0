//! Offline asset cache.
//!
//! A fixed list of app pages is precached into a version-named bucket under
//! the cache directory. Lookups are cache-first and fall back to the asset
//! source (the "network") without writing to the cache. Bumping the bucket
//! name is the only invalidation.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CACHE_NAME: &str = "super-scheduler-v1";

pub const FILES_TO_CACHE: [&str; 7] = [
    "./",
    "./index.html",
    "./css/main.css",
    "./pages/calendar_dashboard.html",
    "./pages/task_management.html",
    "./pages/search_and_filter.html",
    "./pages/settings_and_preferences.html",
];

/// File name used in a bucket for the site root (`./`).
const ROOT_ENTRY: &str = "__root__";

/// Where assets come from when they are not cached.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> AppResult<Vec<u8>>;
}

/// Relative path segments of an asset URL; rejects anything escaping the root.
fn segments(path: &str) -> AppResult<Vec<String>> {
    let trimmed = path.trim_start_matches("./").trim_start_matches('/');
    let mut out = Vec::new();
    for comp in Path::new(trimmed).components() {
        match comp {
            Component::Normal(s) => out.push(s.to_string_lossy().to_string()),
            Component::CurDir => {}
            _ => return Err(AppError::Cache(format!("invalid asset path: {path}"))),
        }
    }
    Ok(out)
}

/// Serves assets from a web root directory; `./` maps to `index.html`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn fetch(&self, path: &str) -> AppResult<Vec<u8>> {
        let segs = segments(path)?;
        let file = if segs.is_empty() {
            self.root.join("index.html")
        } else {
            segs.iter().fold(self.root.clone(), |p, s| p.join(s))
        };
        fs::read(&file).map_err(|e| AppError::Cache(format!("{}: {e}", file.display())))
    }
}

/// Location of `path` inside a bucket rooted at `bucket`.
fn entry_in(bucket: &Path, path: &str) -> AppResult<PathBuf> {
    let segs = segments(path)?;
    if segs.is_empty() {
        return Ok(bucket.join(ROOT_ENTRY));
    }
    Ok(segs.iter().fold(bucket.to_path_buf(), |p, s| p.join(s)))
}

#[derive(Debug, Clone)]
pub struct AssetCache {
    bucket: PathBuf,
}

impl AssetCache {
    pub fn new(cache_dir: impl AsRef<Path>, name: &str) -> Self {
        Self {
            bucket: cache_dir.as_ref().join(name),
        }
    }

    pub fn bucket(&self) -> &Path {
        &self.bucket
    }

    fn entry_path(&self, path: &str) -> AppResult<PathBuf> {
        entry_in(&self.bucket, path)
    }

    /// Precache every entry of [`FILES_TO_CACHE`].
    ///
    /// All assets are fetched, then written into a staging directory that
    /// replaces the bucket only once every write succeeded. A failing fetch
    /// or write leaves the previous bucket untouched.
    pub fn install(&self, source: &dyn AssetSource) -> AppResult<usize> {
        self.install_files(source, &FILES_TO_CACHE)
    }

    pub fn install_files(&self, source: &dyn AssetSource, files: &[&str]) -> AppResult<usize> {
        let mut fetched = Vec::with_capacity(files.len());
        for path in files {
            fetched.push((entry_in(Path::new(""), path)?, source.fetch(path)?));
        }

        let staging = self.sibling("staging");
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        fs::create_dir_all(&staging)?;

        let written = fetched.iter().try_for_each(|(rel, body)| {
            let target = staging.join(rel);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, body)
        });
        if let Err(e) = written {
            fs::remove_dir_all(&staging).ok();
            return Err(AppError::Cache(format!(
                "could not fill {}: {e}",
                self.bucket.display()
            )));
        }

        self.swap_in(&staging)?;
        Ok(fetched.len())
    }

    /// `<cache_dir>/.<bucket>.<suffix>`, next to the bucket.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .bucket
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.bucket.with_file_name(format!(".{name}.{suffix}"))
    }

    fn swap_in(&self, staging: &Path) -> AppResult<()> {
        if !self.bucket.exists() {
            fs::rename(staging, &self.bucket)?;
            return Ok(());
        }

        let old = self.sibling("old");
        if old.exists() {
            fs::remove_dir_all(&old)?;
        }
        fs::rename(&self.bucket, &old)?;
        if let Err(e) = fs::rename(staging, &self.bucket) {
            fs::rename(&old, &self.bucket).ok();
            fs::remove_dir_all(staging).ok();
            return Err(e.into());
        }
        fs::remove_dir_all(&old).ok();
        Ok(())
    }

    /// Cached body for `path`, if any.
    pub fn lookup(&self, path: &str) -> AppResult<Option<Vec<u8>>> {
        let target = self.entry_path(path)?;
        if target.is_file() {
            Ok(Some(fs::read(target)?))
        } else {
            Ok(None)
        }
    }

    /// Cache first, then `source`.
    pub fn fetch(&self, path: &str, source: &dyn AssetSource) -> AppResult<Vec<u8>> {
        match self.lookup(path)? {
            Some(body) => Ok(body),
            None => source.fetch(path),
        }
    }
}
