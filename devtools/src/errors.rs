use tracing::debug;

/// Print a setup failure without a stack trace.
///
/// The full chain goes to the debug log; the user sees the outermost
/// message and, when there is one, the root cause.
pub fn display_user_error(err: &anyhow::Error) {
    debug!("command failed: {:?}", err);

    let root = err.root_cause().to_string();
    let top = err.to_string();
    if root == top {
        eprintln!("dth: {top}");
    } else {
        eprintln!("dth: {top}: {root}");
    }
}
