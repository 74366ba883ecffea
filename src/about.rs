pub const MOTIF_MARK_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MOTIF_MARK_BUILD_N: &str = env!("MOTIF_MARK_BUILD_N");

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nBuild ",
    env!("MOTIF_MARK_BUILD_N"),
    "\nIUPAC motif finder and layout tool"
);

pub fn version_cli_text() -> String {
    format!("motif-mark {}\nBuild {}", MOTIF_MARK_VERSION, MOTIF_MARK_BUILD_N)
}
