/// Static patching configuration
pub struct Config;

impl Config {
    /// The hard-coded development API endpoint being replaced
    pub const LOCAL_API_URL: &'static str = "http://localhost:5000/api";

    /// Pattern matching the old hard-coded API_URL assignment, single- or
    /// double-quoted, with or without trailing semicolon
    pub const OLD_API_URL_PATTERN: &'static str =
        r#"const API_URL = ['"]http://localhost:5000/api['"];?"#;

    /// Replacement block that picks the API base from the page's hostname
    pub const NEW_API_URL_BLOCK: &'static str = r#"        // API URL - auto-detects environment (local vs Vercel)
        const API_URL = window.location.hostname === 'localhost' || window.location.hostname === '127.0.0.1'
            ? 'http://localhost:5000/api'
            : window.location.origin + '/api';"#;

    /// HTML pages to patch, in processing order
    pub const TARGET_FILES: [&'static str; 6] = [
        "Index.html",
        "kirish.html",
        "test_tanlov.html",
        "test_yuklash.html",
        "results.html",
        "ishlash.html",
    ];
}
