use const_format::formatcp;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_SHA: &str = env!("VERGEN_GIT_SHA");
pub const BUILD_DATE: &str = env!("VERGEN_BUILD_DATE");

/// `--version` に出す文字列。
pub fn short_version() -> &'static str {
    formatcp!("{VERSION} ({GIT_SHA} {BUILD_DATE})")
}

/// HTTP リクエストの User-Agent。
pub fn user_agent() -> &'static str {
    formatcp!("ponjiro/{VERSION} ({GIT_SHA})")
}
