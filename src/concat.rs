use crate::version;
use tracing::info;

/// Not exported: traces each argument before the public helpers combine them.
fn log_argument(arg: &str) {
    info!(
        arg = %arg,
        lib_version = version::version_string(),
        "example of non-exported function"
    );
}

/// Concatenates two strings normally: `a` then `b`, no separator.
pub fn normal_concat(a: &str, b: &str) -> String {
    log_argument(a);
    log_argument(b);

    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Concatenates two strings twice: `a + b + a + b`.
pub fn double_concat(a: &str, b: &str) -> String {
    log_argument(a);
    log_argument(b);

    [a, b, a, b].concat()
}
