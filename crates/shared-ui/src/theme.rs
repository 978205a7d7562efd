use dioxus::prelude::*;

/// Color modes for the site.
///
/// One brand palette with a light and a dark variant. The resolved value
/// becomes the `data-theme` attribute on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve to the CSS `data-theme` attribute value.
    pub fn resolve(&self) -> &'static str {
        match self {
            ThemeMode::Light => "electric",
            ThemeMode::Dark => "electric-dark",
        }
    }

    /// Parse a persisted theme value, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "electric-dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context.
///
/// The navbar toggle reads and writes this signal. Changes call
/// [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current mode to the document.
    pub fn apply(&self) {
        let mode = if *self.is_dark.read() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        set_theme(mode.resolve());
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        // Read theme cookie and apply data-theme attribute to <html>
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'electric';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage('{theme}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}
