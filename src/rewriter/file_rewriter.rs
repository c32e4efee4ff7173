use crate::error::{Result, UpdaterError};
use crate::rewriter::notice::{NoticeChange, NoticeRewriter};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileUpdate {
    pub changes: Vec<NoticeChange>,
    pub notices_found: usize,
    pub written: bool,
}

impl FileUpdate {
    pub fn updated(&self) -> bool {
        !self.changes.is_empty()
    }
}

pub struct FileRewriter {
    notices: NoticeRewriter,
    dry_run: bool,
}

impl FileRewriter {
    pub fn new(notices: NoticeRewriter) -> Self {
        Self {
            notices,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn holder(&self) -> &str {
        self.notices.holder()
    }

    /// Rewrites every notice in `path` to end in `current_year`. The file is
    /// only touched when its content actually changes, and never in dry-run mode.
    pub fn update_file(&self, path: &Path, current_year: i32) -> Result<FileUpdate> {
        let content = read_text(path)?;
        let rewrite = self.notices.rewrite(&content, current_year);

        if rewrite.content == content {
            return Ok(FileUpdate {
                changes: Vec::new(),
                notices_found: rewrite.notices_found,
                written: false,
            });
        }

        if !self.dry_run {
            write_atomically(path, &rewrite.content)?;
        }

        Ok(FileUpdate {
            changes: rewrite.changes,
            notices_found: rewrite.notices_found,
            written: !self.dry_run,
        })
    }
}

fn read_text(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).map_err(|e| UpdaterError::file_open(path, e))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| UpdaterError::file_read(path, e))?;
    Ok(content)
}

/// Writes `content` to a sibling temp file and renames it over the target, so
/// a failed write leaves the original untouched. Symlinks are resolved first
/// and the original permissions are carried over.
fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| UpdaterError::file_write(path, e))?;
    let permissions = fs::metadata(&target)
        .map_err(|e| UpdaterError::file_write(path, e))?
        .permissions();
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| UpdaterError::file_write(path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| UpdaterError::file_write(path, e))?;
    fs::set_permissions(temp.path(), permissions)
        .map_err(|e| UpdaterError::file_write(path, e))?;

    temp.persist(&target)
        .map_err(|e| UpdaterError::file_write(path, e.error))?;

    Ok(())
}

/// Updates `path` with the default holder, returning whether it was rewritten.
pub fn update_copyright_notice(path: &Path, current_year: i32) -> Result<bool> {
    let rewriter = FileRewriter::new(NoticeRewriter::with_default_holder()?);
    Ok(rewriter.update_file(path, current_year)?.updated())
}
