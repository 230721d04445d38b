use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::error::Error;
use crate::replicate::StyleReplicator;
use crate::rows::RowSpan;
use crate::workbook;

/// 读取失败时的退出码
pub const EXIT_LOAD_FAILURE: i32 = 2;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "dtrowstyle", version)]
#[command(about = "把模板行的样式（字体、边框、填充、数字格式、保护、对齐）复制到指定行")]
pub struct Cli {
    /// 要处理的 xlsx 文件，处理后原地覆盖
    #[arg(default_value = "Matriz de trazabilidad.xlsx")]
    pub path: PathBuf,

    /// 模板行（从 1 开始）
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub source_row: u32,

    /// 目标行范围，例如 6-15 或 6:15
    #[arg(long, default_value = "6-15")]
    pub rows: RowSpan,

    /// 工作表名称，默认使用活动工作表
    #[arg(long)]
    pub sheet: Option<String>,

    /// 另存为其他文件，而不是覆盖输入文件
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 覆盖前先备份输入文件
    #[arg(long)]
    pub backup: bool,
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        // 参数错误按普通失败处理，退出码 2 只留给读取失败
        Err(e) => return Err(e.into()),
    };
    execute(&cli)
}

pub fn execute(cli: &Cli) -> Result<()> {
    let mut book = workbook::open(&cli.path)?;
    let sheet = workbook::select_sheet_mut(&mut book, cli.sheet.as_deref())?;

    let replicator = StyleReplicator::new(cli.source_row, cli.rows);
    println!(
        "正在将第 {} 行的样式套用到第 {} 行...",
        replicator.source_row(),
        replicator.targets()
    );
    let report = replicator.apply(sheet);
    info!(
        "{} 列 x {} 行: 复制 {}，跳过 {}",
        report.columns,
        report.rows,
        report.copied,
        report.skipped
    );

    let output = cli.output.as_deref().unwrap_or(&cli.path);
    if cli.backup && output.exists() {
        let copy = workbook::backup(output, chrono::Local::now().naive_local())?;
        println!("已备份原文件: {}", copy.display());
    }
    workbook::save_atomic(&book, output)?;
    println!("样式已套用并保存到: {}", output.display());
    Ok(())
}

pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::Load { .. }) => EXIT_LOAD_FAILURE,
        _ => EXIT_FAILURE,
    }
}
