//! CommonJS detection from entry source text.

use std::sync::LazyLock;

use regex::Regex;

const COMMONJS_SIGNATURES: &str = r"\bmodule\.exports\b|\bexports[.\[]|\brequire\s*\(|\bObject\.(defineProperty|defineProperties|assign)\s*\(\s*exports\b";

static COMMONJS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(COMMONJS_SIGNATURES).ok());

/// True when `source` uses `module.exports`, `exports.x`, `require(...)` or
/// defines properties on `exports`.
pub fn looks_like_commonjs(source: &str) -> bool {
    COMMONJS_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(source))
}
