//! 把工作簿中一行模板的样式复制到其他行。
//!
//! 单元格的值不会被修改，只替换样式（字体、边框、填充、数字格式、保护、对齐）。

pub mod bundle;
pub mod cli;
pub mod error;
pub mod replicate;
pub mod rows;
pub mod workbook;

pub use bundle::StyleBundle;
pub use error::{Error, Result};
pub use replicate::{ReplicationReport, StyleReplicator, apply};
pub use rows::RowSpan;
