//! Terminal icons with plain-text fallbacks

use std::env;

/// pick `emoji` or `fallback` depending on terminal support
pub fn emoji(emoji: &'static str, fallback: &'static str) -> &'static str {
    if is_unicode_supported() {
        emoji
    } else {
        fallback
    }
}

fn is_unicode_supported() -> bool {
    if cfg!(windows) {
        // Windows Terminal and VS Code set these; the legacy console does not
        return env::var_os("WT_SESSION").is_some()
            || env::var("TERM_PROGRAM").is_ok_and(|p| p == "vscode");
    }

    term_supports_unicode(env::var("TERM").ok().as_deref())
}

/// linux console and dumb terminals can't draw symbols
fn term_supports_unicode(term: Option<&str>) -> bool {
    !matches!(term, Some("linux") | Some("dumb"))
}
