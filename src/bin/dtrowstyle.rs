fn main() {
    if let Err(err) = rowstyle::cli::run(std::env::args_os()) {
        eprintln!("套用样式时出错: {err:#}");
        std::process::exit(rowstyle::cli::exit_code(&err));
    }
}
