//! cmtx CLI
//!
//! ```text
//! cmtx LINE CHAR_INDEX FILE...
//! ```

fn main() {
    cmtx::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = cmtx::cli::run(&args, std::io::stdout().lock(), std::io::stderr().lock());
    std::process::exit(code);
}
