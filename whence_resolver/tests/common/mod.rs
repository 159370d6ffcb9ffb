#![allow(dead_code)]

use std::io::Write;
use std::sync::OnceLock;

use tempfile::NamedTempFile;
use whence_resolver::StackFrame;

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Writes `lines` to a fresh temp file, one per line.
pub fn source_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source file");
    for line in lines {
        writeln!(file, "{line}").expect("write temp source file");
    }
    file.flush().expect("flush temp source file");
    file
}

/// A frame pointing at `line` (1-based) of `file`.
pub fn frame_at(file: &NamedTempFile, line: usize, invoked_name: &'static str) -> StackFrame {
    StackFrame::new(file.path().to_path_buf(), line, invoked_name)
}
