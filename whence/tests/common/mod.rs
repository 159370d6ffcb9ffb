#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use tempfile::NamedTempFile;
use whence::{AssertError, StackFrame};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A source file whose only line is `line`, and a frame pointing at it.
///
/// Keep the file alive for as long as the frame is used.
pub fn call_site(line: &str, invoked_name: &'static str) -> (NamedTempFile, StackFrame) {
    let mut file = NamedTempFile::new().expect("create temp source file");
    writeln!(file, "{line}").expect("write temp source file");
    file.flush().expect("flush temp source file");
    let frame = StackFrame::new(file.path().to_path_buf(), 1, invoked_name);
    (file, frame)
}

/// A frame whose source is not on disk, as for generated code.
pub fn lost_site(invoked_name: &'static str) -> StackFrame {
    StackFrame::new(PathBuf::from("/nonexistent/whence/generated.rs"), 1, invoked_name)
}

/// Real call sites may or may not be resolvable depending on where the
/// test binary runs from; both renderings are correct.
#[track_caller]
pub fn assert_either(err: &AssertError, specific: &str, generic: &str) {
    let message = err.message();
    assert!(
        message == specific || message == generic,
        "unexpected message: {message:?}\n  specific: {specific:?}\n  generic:  {generic:?}"
    );
}
