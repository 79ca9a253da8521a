//! Stylesheet injection for the embedded tracker page.
//!
//! The web view host evaluates the returned script after every navigation.

use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const STYLE_ELEMENT_ID: &str = "tracker-overlay-style";

/// Always applied: lets the layered window's transparency show through.
pub const BASE_CSS: &str = "html, body { background: transparent !important; }\n\
::-webkit-scrollbar { width: 6px; }\n\
::-webkit-scrollbar-thumb { background: rgba(255, 255, 255, 0.25); border-radius: 3px; }\n";

/// Build a script that inserts, or replaces, the overlay style element.
pub fn css_injection_script(css: &str) -> String {
    // A JSON string literal is also a valid JS string literal, so serde_json handles escaping.
    // Serializing a &str cannot fail.
    let literal = serde_json::to_string(css).unwrap_or_else(|_| "\"\"".to_string());
    let id = serde_json::to_string(STYLE_ELEMENT_ID).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function(){{var id={id};var el=document.getElementById(id);\
if(!el){{el=document.createElement('style');el.id=id;\
(document.head||document.documentElement).appendChild(el);}}\
el.textContent={literal};}})();"
    )
}

/// Base stylesheet followed by the user's stylesheet, when one is configured and readable.
pub fn load_stylesheet(custom: Option<&Path>) -> String {
    let mut css = BASE_CSS.to_string();
    let Some(path) = custom else {
        return css;
    };
    match fs::read_to_string(path) {
        Ok(user_css) => {
            debug!("appending custom stylesheet {}", path.display());
            css.push_str(&user_css);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("custom stylesheet {} not found; using base styles", path.display());
        }
        Err(e) => warn!("failed to read custom stylesheet {}: {}", path.display(), e),
    }
    css
}
