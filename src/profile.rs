//! Host profiles: the recognized event and style names
//!
//! A profile tells the binders which event names and style property names the
//! host understands. The built-in profile follows the browser DOM: `on*`
//! event handler properties and camelCase CSS properties. Profiles can be
//! loaded from TOML, either replacing or extending the built-in lists.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Recognized event and style names for a host
#[derive(Debug, Clone)]
pub struct HostProfile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Recognized event names
    pub events: HashSet<String>,
    /// Recognized style property names
    pub styles: HashSet<String>,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    events: Option<TomlNameList>,
    styles: Option<TomlNameList>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlNameList {
    #[serde(default)]
    names: Vec<String>,
    /// Merge into the built-in list instead of replacing it
    #[serde(default)]
    extend: bool,
}

/// Built-in profile: DOM event handler properties and CSS properties
const DEFAULT_PROFILE: &str = r##"
[metadata]
name = "dom"

[events]
names = [
    # Mouse
    "onclick", "ondblclick", "onmousedown", "onmouseup", "onmousemove",
    "onmouseover", "onmouseout", "onmouseenter", "onmouseleave", "oncontextmenu",
    "onwheel",
    # Keyboard
    "onkeydown", "onkeyup", "onkeypress",
    # Focus
    "onfocus", "onblur", "onfocusin", "onfocusout",
    # Forms
    "oninput", "onchange", "onsubmit", "onreset", "oninvalid", "onselect",
    # Pointer and touch
    "onpointerdown", "onpointerup", "onpointermove", "onpointerover",
    "onpointerout", "onpointerenter", "onpointerleave", "onpointercancel",
    "ontouchstart", "ontouchend", "ontouchmove", "ontouchcancel",
    # Drag and drop
    "ondrag", "ondragstart", "ondragend", "ondragenter", "ondragleave",
    "ondragover", "ondrop",
    # Clipboard
    "oncopy", "oncut", "onpaste",
    # Resources and media
    "onload", "onerror", "onscroll", "onresize", "onplay", "onpause",
    "onended", "ontimeupdate", "onvolumechange",
    # Animation
    "onanimationstart", "onanimationend", "onanimationiteration",
    "ontransitionend",
]

[styles]
names = [
    # Box model
    "display", "position", "top", "right", "bottom", "left", "zIndex",
    "width", "height", "minWidth", "minHeight", "maxWidth", "maxHeight",
    "margin", "marginTop", "marginRight", "marginBottom", "marginLeft",
    "padding", "paddingTop", "paddingRight", "paddingBottom", "paddingLeft",
    "boxSizing", "overflow", "overflowX", "overflowY", "visibility", "float", "clear",
    # Border
    "border", "borderTop", "borderRight", "borderBottom", "borderLeft",
    "borderWidth", "borderStyle", "borderColor", "borderRadius",
    "outline", "boxShadow",
    # Color and background
    "color", "opacity", "background", "backgroundColor", "backgroundImage",
    "backgroundPosition", "backgroundSize", "backgroundRepeat",
    # Typography
    "font", "fontFamily", "fontSize", "fontWeight", "fontStyle", "lineHeight",
    "letterSpacing", "textAlign", "textDecoration", "textTransform",
    "textOverflow", "whiteSpace", "wordBreak", "verticalAlign",
    # Flex and grid
    "flex", "flexDirection", "flexWrap", "flexGrow", "flexShrink", "flexBasis",
    "justifyContent", "alignItems", "alignContent", "alignSelf", "order", "gap",
    "rowGap", "columnGap", "grid", "gridTemplateColumns", "gridTemplateRows",
    "gridColumn", "gridRow", "gridArea",
    # Effects and interaction
    "transform", "transformOrigin", "transition", "animation", "filter",
    "cursor", "pointerEvents", "userSelect", "listStyle",
]
"##;

impl HostProfile {
    /// Load profile from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load profile from TOML string
    ///
    /// A section that is missing keeps the built-in list. A section with
    /// `extend = true` adds its names to the built-in list.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let builtin = Self::default();

        Ok(HostProfile {
            name: parsed.metadata.and_then(|m| m.name),
            events: merge_names(parsed.events, builtin.events),
            styles: merge_names(parsed.styles, builtin.styles),
        })
    }

    fn parse_builtin() -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(DEFAULT_PROFILE)?;
        Ok(HostProfile {
            name: parsed.metadata.and_then(|m| m.name),
            events: parsed.events.map(|l| l.names.into_iter().collect()).unwrap_or_default(),
            styles: parsed.styles.map(|l| l.names.into_iter().collect()).unwrap_or_default(),
        })
    }

    /// Whether `name` is a recognized event name
    pub fn is_event(&self, name: &str) -> bool {
        self.events.contains(name)
    }

    /// Whether `name` is a recognized style property name
    pub fn is_style(&self, name: &str) -> bool {
        self.styles.contains(name)
    }

    /// Add event names to this profile
    pub fn with_events<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add style property names to this profile
    pub fn with_styles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(names.into_iter().map(Into::into));
        self
    }
}

fn merge_names(list: Option<TomlNameList>, builtin: HashSet<String>) -> HashSet<String> {
    match list {
        None => builtin,
        Some(list) if list.extend => {
            let mut merged = builtin;
            merged.extend(list.names);
            merged
        }
        Some(list) => list.names.into_iter().collect(),
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::parse_builtin().expect("Built-in profile should be valid TOML")
    }
}
