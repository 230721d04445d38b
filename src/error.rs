use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 工作簿无法读取（文件不存在、格式损坏等）
    #[error("无法打开文件: {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("找不到工作表: {0}")]
    SheetNotFound(String),

    #[error("无效的行范围: {0}")]
    InvalidRowSpan(String),

    #[error("无法在 {} 创建临时文件", dir.display())]
    TempFile {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法写入工作簿: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("无法替换文件: {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法备份文件 {} 到 {}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
