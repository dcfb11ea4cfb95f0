use crate::cli::parser::CacheAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::offline::{AssetCache, DirSource};
use crate::ui::messages::success;
use crate::utils::fs::ensure_parent;
use std::io::{self, Write};
use std::path::Path;

pub fn handle(action: &CacheAction, cfg: &Config) -> AppResult<()> {
    let cache = AssetCache::new(&cfg.cache_dir, &cfg.cache_name);

    match action {
        CacheAction::Install { root } => {
            let source = DirSource::new(root.as_deref().unwrap_or(&cfg.web_root));
            let n = cache.install(&source)?;
            success(format!("Cached {n} assets in {}", cache.bucket().display()));
        }

        CacheAction::Fetch { path, root, out } => {
            let source = DirSource::new(root.as_deref().unwrap_or(&cfg.web_root));
            let body = cache.fetch(path, &source)?;
            match out {
                Some(file) => {
                    let target = Path::new(file);
                    ensure_parent(target)?;
                    std::fs::write(target, &body)?;
                    success(format!("{path} written to {file}"));
                }
                None => io::stdout().write_all(&body)?,
            }
        }
    }

    Ok(())
}
