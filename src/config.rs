//! Colors for the interactive editor, read once from `bfi.toml` in the XDG
//! config home.
//!
//! ```toml
//! [colors]
//! op_bracket = "#cba6f7"
//! non_bf = "darkgray"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use cross_xdg::BaseDirs;
use nu_ansi_term::Color;

use crate::theme::catppuccin::Mocha as P;

pub const CONFIG_FILE: &str = "bfi.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Colors {
    pub op_move_right: Color, // '>'
    pub op_move_left: Color,  // '<'
    pub op_inc: Color,        // '+'
    pub op_dec: Color,        // '-'
    pub op_output: Color,     // '.'
    pub op_input: Color,      // ','
    pub op_bracket: Color,    // '[' and ']'
    pub non_bf: Color,
    pub error: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            op_move_right: P::SKY,
            op_move_left: P::TEAL,
            op_inc: P::GREEN,
            op_dec: P::RED,
            op_output: P::YELLOW,
            op_input: P::PEACH,
            op_bracket: P::MAUVE,
            non_bf: P::SURFACE2,
            error: P::MAROON,
        }
    }
}

static COLORS: OnceLock<Colors> = OnceLock::new();

pub fn colors() -> &'static Colors {
    COLORS.get_or_init(|| load_from_toml().unwrap_or_default())
}

fn parse_color(value: &str) -> Option<Color> {
    let s = value.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(Color::Rgb(r, g, b));
            }
        }
        return None;
    }

    let name = s.to_ascii_lowercase();
    Some(match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Purple,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" | "darkgray" | "dark_gray" | "darkgrey" | "dark_grey" => Color::DarkGray,
        "lightred" | "light_red" => Color::LightRed,
        "lightgreen" | "light_green" => Color::LightGreen,
        "lightblue" | "light_blue" => Color::LightBlue,
        "lightmagenta" | "light_magenta" => Color::LightPurple,
        "lightcyan" | "light_cyan" => Color::LightCyan,
        _ => return None,
    })
}

fn config_path() -> Option<PathBuf> {
    // Linux: ~/.config, Windows: C:\Users\<user>\.config, macOS: ~/.config
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push(CONFIG_FILE);
    Some(path)
}

fn load_from_toml() -> Option<Colors> {
    let path = config_path()?;
    let content = fs::read_to_string(&path).ok()?;
    log::debug!("loading colors from {}", path.display());
    Some(parse_colors(&content))
}

/// Read the `[colors]` section of a small TOML document. Unknown keys and
/// unparseable values keep their defaults.
pub fn parse_colors(content: &str) -> Colors {
    let mut in_colors = false;
    let mut map: HashMap<String, String> = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if line.starts_with('[') && line.ends_with(']') {
            in_colors = &line[1..line.len() - 1] == "colors";
            continue;
        }
        if !in_colors { continue; }
        if let Some((key, val_raw)) = line.split_once('=') {
            let val_raw = val_raw.trim();
            // Accept quoted or unquoted
            let val = val_raw
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(val_raw);
            map.insert(key.trim().to_string(), val.to_string());
        }
    }

    let mut cfg = Colors::default();

    macro_rules! set {
        ($field:ident) => {
            match map.get(stringify!($field)) {
                Some(v) => match parse_color(v) {
                    Some(c) => cfg.$field = c,
                    None => log::warn!("{CONFIG_FILE}: ignoring invalid color {v:?} for {}", stringify!($field)),
                },
                None => {}
            }
        };
    }

    set!(op_move_right);
    set!(op_move_left);
    set!(op_inc);
    set!(op_dec);
    set!(op_output);
    set!(op_input);
    set!(op_bracket);
    set!(non_bf);
    set!(error);

    cfg
}
