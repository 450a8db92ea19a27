/// Crate version plus the git revision baked in by `build.rs`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GYMFLOW_GIT_VERSION"),
    ")"
);
