//! `folio-assets` — read-only static assets embedded at compile time.
//!
//! Lookup is exact-match against a fixed table; a miss is the caller's 404.

/// One embedded file.
pub struct Asset {
    /// Path relative to the assets root, no leading slash.
    pub path: &'static str,
    pub content_type: &'static str,
    pub bytes: &'static [u8],
}

/// Everything bundled into the binary.
pub static ASSETS: &[Asset] = &[
    Asset {
        path: "css/site.css",
        content_type: "text/css; charset=utf-8",
        bytes: include_bytes!("../assets/css/site.css"),
    },
    Asset {
        path: "js/app.js",
        content_type: "text/javascript; charset=utf-8",
        bytes: include_bytes!("../assets/js/app.js"),
    },
    Asset {
        path: "favicon.svg",
        content_type: "image/svg+xml",
        bytes: include_bytes!("../assets/favicon.svg"),
    },
];

/// Look up an asset by its prefix-stripped path.
pub fn get(path: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        let css = get("css/site.css").expect("stylesheet is embedded");
        assert_eq!(css.content_type, "text/css; charset=utf-8");
        assert!(!css.bytes.is_empty());

        assert!(get("js/app.js").is_some());
        assert!(get("favicon.svg").is_some());
    }

    #[test]
    fn unknown_and_unstripped_paths_miss() {
        assert!(get("missing.css").is_none());
        // The router strips the /assets/ prefix before lookup.
        assert!(get("/assets/css/site.css").is_none());
    }
}
