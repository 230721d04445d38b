use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::info;
use tempfile::NamedTempFile;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{Error, Result};

/// 整个工作簿读入内存。读取失败时不会创建或修改任何文件。
pub fn open(path: &Path) -> Result<Spreadsheet> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;
    info!("已读取工作簿: {}", path.display());
    Ok(book)
}

/// 未指定名称时使用活动工作表。
pub fn select_sheet_mut<'a>(
    book: &'a mut Spreadsheet,
    name: Option<&str>,
) -> Result<&'a mut Worksheet> {
    match name {
        Some(name) => book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string())),
        None => Ok(book.get_active_sheet_mut()),
    }
}

/// 先写到同目录下的临时文件，再改名覆盖目标文件。
pub fn save_atomic(book: &Spreadsheet, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|source| Error::TempFile {
        dir: dir.clone(),
        source,
    })?;

    umya_spreadsheet::writer::xlsx::write_writer(book, tmp.as_file_mut()).map_err(|source| {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tmp.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    info!("已保存工作簿: {}", path.display());
    Ok(())
}

pub fn backup_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup".to_string());
    let stamp = now.format("%Y%m%d%H%M%S");
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    };
    path.with_file_name(file_name)
}

/// 覆盖原文件之前复制一份带时间戳的备份。
pub fn backup(path: &Path, now: NaiveDateTime) -> Result<PathBuf> {
    let to = backup_path(path, now);
    fs::copy(path, &to).map_err(|source| Error::Backup {
        from: path.to_path_buf(),
        to: to.clone(),
        source,
    })?;
    info!("已备份 {} 到 {}", path.display(), to.display());
    Ok(to)
}
