use crate::db::log::ttlog_quiet;
use crate::db::store::{SchedulerStore, StoreLocation};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::fs::{ensure_parent, ensure_writable};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest_file`, optionally zipped.
    /// Returns the path actually written.
    pub fn backup(
        store: &SchedulerStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = match store.location() {
            StoreLocation::File(path) => path.clone(),
            StoreLocation::Memory => {
                return Err(AppError::Other(
                    "an in-memory store cannot be backed up".into(),
                ));
            }
        };

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let dest = Path::new(dest_file);
        ensure_parent(dest)?;

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, force)?;
            compress_into(&src, &zip_path)?;
            zip_path
        } else {
            ensure_writable(dest, force)?;
            fs::copy(&src, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        ttlog_quiet(
            store.conn()?,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "superscheduler.sqlite".to_string());

    zip.start_file(name, options)?;
    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;

    if let Err(e) = zip.finish() {
        warning(format!("Failed to finalize {}", zip_path.display()));
        return Err(e.into());
    }

    Ok(())
}
