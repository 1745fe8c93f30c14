use std::collections::HashMap;

use geovote_types::RegionKind;

use crate::tree::TreeNode;

pub const FRESH_COLORS: [&str; 10] = [
    "#bef264", "#67e8f9", "#f9a8d4", "#fde68a", "#fdba74", "#6ee7b7", "#7dd3fc", "#c4b5fd",
    "#fda4af", "#5eead4",
];

pub const DISTRICT_FALLBACK: &str = "#888888";
pub const UNKNOWN_FALLBACK: &str = "#cccccc";
pub const SIDO_LABEL: &str = "#4a6fa5";
pub const SIGUNGU_LABEL: &str = "#6a8ca3";
pub const DEFAULT_LABEL: &str = "#222222";

/// Ordinal color scale: each new key takes the next palette entry, wrapping
/// around once the palette is exhausted. Assignments are sticky.
#[derive(Debug, Clone, Default)]
pub struct OrdinalPalette {
    assigned: HashMap<String, usize>,
}

impl OrdinalPalette {
    pub fn color(&mut self, key: &str) -> &'static str {
        let next = self.assigned.len();
        let index = *self.assigned.entry(key.to_string()).or_insert(next);
        FRESH_COLORS[index % FRESH_COLORS.len()]
    }
}

/// Fill colors for treemap cells, keyed by tier.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    sido: OrdinalPalette,
    sigungu: OrdinalPalette,
}

impl RegionColors {
    pub fn fill(&mut self, node: &TreeNode) -> String {
        match node.kind {
            RegionKind::District => node
                .color
                .clone()
                .unwrap_or_else(|| DISTRICT_FALLBACK.to_string()),
            RegionKind::Sido => self.sido.color(&node.name).to_string(),
            RegionKind::Sigungu => self.sigungu.color(&node.name).to_string(),
            RegionKind::Root => UNKNOWN_FALLBACK.to_string(),
        }
    }

    pub fn label(kind: RegionKind) -> &'static str {
        match kind {
            RegionKind::Sido => SIDO_LABEL,
            RegionKind::Sigungu => SIGUNGU_LABEL,
            _ => DEFAULT_LABEL,
        }
    }
}

/// Parse `#rgb` or `#rrggbb` into its channels.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let expand = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}
