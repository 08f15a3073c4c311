//! Theme tokens
//!
//! Color and font tokens shared by every panel, rendered once into CSS
//! custom properties by the application shell.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(default = "default_cyber_slate")]
    pub cyber_slate: String,

    #[serde(default = "default_neon_teal")]
    pub neon_teal: String,

    #[serde(default = "default_stress_amber")]
    pub stress_amber: String,

    #[serde(default = "default_void_black")]
    pub void_black: String,

    #[serde(default = "default_glass_panel")]
    pub glass_panel: String,

    #[serde(default = "default_font_mono")]
    pub font_mono: Vec<String>,
}

fn default_cyber_slate() -> String {
    "#0f172a".to_string()
}

fn default_neon_teal() -> String {
    "#2dd4bf".to_string()
}

fn default_stress_amber() -> String {
    "#f59e0b".to_string()
}

fn default_void_black() -> String {
    "#020617".to_string()
}

fn default_glass_panel() -> String {
    "rgba(15, 23, 42, 0.7)".to_string()
}

fn default_font_mono() -> Vec<String> {
    [
        "ui-monospace",
        "SFMono-Regular",
        "Menlo",
        "Monaco",
        "Consolas",
        "Liberation Mono",
        "Courier New",
        "monospace",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cyber_slate: default_cyber_slate(),
            neon_teal: default_neon_teal(),
            stress_amber: default_stress_amber(),
            void_black: default_void_black(),
            glass_panel: default_glass_panel(),
            font_mono: default_font_mono(),
        }
    }
}

impl Theme {
    /// CSS `font-family` value; names containing spaces are quoted
    pub fn font_stack(&self) -> String {
        self.font_mono
            .iter()
            .map(|name| {
                if name.contains(' ') {
                    format!("\"{}\"", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `:root` block declaring every token as a custom property
    pub fn css_variables(&self) -> String {
        let tokens = [
            ("cyber-slate", self.cyber_slate.as_str()),
            ("neon-teal", self.neon_teal.as_str()),
            ("stress-amber", self.stress_amber.as_str()),
            ("void-black", self.void_black.as_str()),
            ("glass-panel", self.glass_panel.as_str()),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in tokens {
            css.push_str(&format!("  --{}: {};\n", name, value));
        }
        css.push_str(&format!("  --font-mono: {};\n", self.font_stack()));
        css.push('}');
        css
    }
}
