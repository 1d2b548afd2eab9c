//! Parameter names for unnamed parameters.
//!
//! A stem is derived from the rendered type text alone: `context.Context`
//! becomes `ctx`, `int` becomes `ival`, `[]string` becomes `strvals`,
//! `map[string]int` becomes `ivalmap`. Within one parameter list the first
//! use of a stem is bare and later uses are numbered from zero:
//! `ival, ival0, ival1`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Stems for predeclared type names, so no parameter is named after a type.
static RESERVED: &[(&str, &str)] = &[
    ("bool", "bval"),
    ("int", "ival"),
    ("int8", "i8val"),
    ("int16", "i16val"),
    ("int32", "i32val"),
    ("int64", "i64val"),
    ("uint", "uival"),
    ("uint8", "ui8val"),
    ("uint16", "ui16val"),
    ("uint32", "ui32val"),
    ("uint64", "ui64val"),
    ("float32", "f32val"),
    ("float64", "f64val"),
    ("complex64", "cmplx64val"),
    ("complex128", "cmplx128val"),
    ("string", "strval"),
    ("struct{}", "structval"),
    ("interface{}", "ifaceval"),
];

/// A composite prefix whose stem comes from the element type plus a suffix.
struct Marker {
    prefix: &'static str,
    suffix: &'static str,
    /// The element starts after the first top-level `]` rather than right
    /// after the prefix.
    bracketed: bool,
}

static MARKERS: &[Marker] = &[
    Marker {
        prefix: "[]",
        suffix: "s",
        bracketed: true,
    },
    Marker {
        prefix: "map[",
        suffix: "map",
        bracketed: true,
    },
    Marker {
        prefix: "...",
        suffix: "s",
        bracketed: false,
    },
    Marker {
        prefix: "<-chan ",
        suffix: "ch",
        bracketed: false,
    },
    Marker {
        prefix: "chan<- ",
        suffix: "ch",
        bracketed: false,
    },
    Marker {
        prefix: "chan ",
        suffix: "ch",
        bracketed: false,
    },
];

/// Shapes with no single element to name the parameter after.
static SHAPES: &[(&str, &str)] = &[
    ("func(", "fn"),
    ("struct{", "structval"),
    ("interface{", "ifaceval"),
];

static GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

const CONTEXT_MEMBER: &str = "context";
const CONTEXT_STEM: &str = "ctx";
const FALLBACK_STEM: &str = "arg";
const KEYWORD_SUFFIX: &str = "val";

/// Derive the identifier stem for a rendered type.
#[must_use]
pub fn ident_stem(type_text: &str) -> String {
    sanitize(&derive(&type_text.to_lowercase()))
}

fn derive(lower: &str) -> String {
    let ident = first_step(lower);
    if let Some((_, stem)) = RESERVED.iter().find(|(name, _)| *name == ident) {
        return (*stem).to_string();
    }
    for marker in MARKERS {
        let Some(rest) = ident.strip_prefix(marker.prefix) else {
            continue;
        };
        let element = if marker.bracketed {
            after_top_level_close(ident)
        } else {
            Some(rest)
        };
        if let Some(element) = element {
            return derive(element) + marker.suffix;
        }
    }
    ident.to_string()
}

/// Pick the base token: composite markers pass through untouched, qualified
/// names keep only the member, `*` is dropped.
fn first_step(lower: &str) -> &str {
    let lower = lower.trim_start_matches('*');
    if let Some((_, stem)) = SHAPES.iter().find(|(prefix, _)| lower.starts_with(prefix)) {
        return stem;
    }
    if MARKERS.iter().any(|marker| lower.starts_with(marker.prefix)) {
        return lower;
    }
    match lower.split_once('.') {
        Some((_, CONTEXT_MEMBER)) => CONTEXT_STEM,
        Some((_, member)) => member,
        None => lower,
    }
}

/// Text after the `]` that closes the first bracket opened in `text`.
fn after_top_level_close(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[index + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}

fn sanitize(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_')
        .collect();
    let cleaned = cleaned.trim_start_matches(|ch: char| ch.is_ascii_digit());
    if cleaned.is_empty() || cleaned == "_" {
        FALLBACK_STEM.to_string()
    } else if GO_KEYWORDS.contains(&cleaned) {
        format!("{cleaned}{KEYWORD_SUFFIX}")
    } else {
        cleaned.to_string()
    }
}

/// Collision table for one parameter list.
#[derive(Debug, Default)]
pub struct NameTable {
    counters: HashMap<String, u32>,
}

impl NameTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name an unnamed parameter of the given rendered type.
    pub fn synthesize(&mut self, type_text: &str) -> String {
        match self.counters.entry(ident_stem(type_text)) {
            Entry::Occupied(mut entry) => {
                let name = format!("{}{}", entry.key(), entry.get());
                *entry.get_mut() += 1;
                name
            }
            Entry::Vacant(entry) => {
                let name = entry.key().clone();
                entry.insert(0);
                name
            }
        }
    }
}
