use crate::errors::{AppError, AppResult};
use crate::store::Document;
use crate::ui::messages::confirm;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Writes every existing data document of `data_dir` into a zip archive
    /// at `dest_file` (`.zip` is appended when missing). Returns the archive
    /// path, or `None` when the user declined to overwrite it.
    pub fn backup(data_dir: &Path, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let mut dest = PathBuf::from(dest_file);
        if dest.extension().is_none_or(|e| e != "zip") {
            dest.as_mut_os_string().push(".zip");
        }

        // 1️⃣ Collect the documents that exist
        let sources: Vec<(Document, PathBuf)> = Document::ALL
            .iter()
            .map(|d| (*d, data_dir.join(d.file_name())))
            .filter(|(_, p)| p.exists())
            .collect();

        if sources.is_empty() {
            return Err(AppError::NotFound(format!(
                "no data documents in {}",
                data_dir.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        if dest.exists()
            && !confirm(format!("The file '{}' already exists. Overwrite it?", dest.display()))
        {
            println!("❌ Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Write the archive
        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options: FileOptions<'_, ()> = FileOptions::default().compression_method(method);

        let file = fs::File::create(&dest)?;
        let mut zip = ZipWriter::new(file);
        for (doc, path) in &sources {
            zip.start_file(doc.file_name(), options)?;
            let mut f = fs::File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }
        zip.finish()?;

        info!(archive = %dest.display(), files = sources.len(), compress, "backup written");
        Ok(Some(dest))
    }
}
