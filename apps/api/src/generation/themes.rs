//! Fixed table of visual themes offered to the user.
//!
//! A theme is design intent handed to the model, not stylesheet code.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTheme {
    pub name: &'static str,
    pub description: &'static str,
}

pub const THEMES: &[StyleTheme] = &[
    StyleTheme {
        name: "Modern Minimalist",
        description: "Clean white background, sans-serif fonts (Inter), large whitespace, subtle gray text.",
    },
    StyleTheme {
        name: "Cyberpunk Neon",
        description: "Dark #0a0a0a background, neon green/pink borders, glowing text effects, tech/glitch font.",
    },
    StyleTheme {
        name: "Glassmorphism",
        description: "Gradient mesh background, semi-transparent white cards (backdrop-filter: blur), rounded corners.",
    },
    StyleTheme {
        name: "Neobrutalism",
        description: "Stark contrast, thick 3px black borders, hard drop shadows, bold vibrant colors (yellow/purple).",
    },
    StyleTheme {
        name: "Bento Grid",
        description: "Apple-style card layout, soft gray background, highly organized grid structure, rounded corners.",
    },
    StyleTheme {
        name: "Retro Terminal",
        description: "Black background, bright green monospace text, blinking cursor effect, code-editor aesthetic.",
    },
];

/// Looks a theme up by its exact display name.
pub fn find_theme(name: &str) -> Option<&'static StyleTheme> {
    THEMES.iter().find(|t| t.name == name)
}
