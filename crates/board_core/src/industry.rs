//! Closed industry -> visual style mapping used by cards, markers and the legend.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndustryKind {
    Hospitality,
    RetailTourism,
    Agriculture,
    Mining,
    Technology,
    Construction,
    /// Any industry without a dedicated style.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryStyle {
    pub kind: IndustryKind,
    pub accent: Rgb,
    pub background: Rgb,
    pub icon: &'static str,
}

impl IndustryKind {
    pub fn from_label(industry: &str) -> Self {
        match industry {
            "Hospitality" => IndustryKind::Hospitality,
            "Retail & Tourism" => IndustryKind::RetailTourism,
            "Agriculture" => IndustryKind::Agriculture,
            "Mining" => IndustryKind::Mining,
            "Technology" => IndustryKind::Technology,
            "Construction" => IndustryKind::Construction,
            _ => IndustryKind::Other,
        }
    }

    pub fn style(self) -> IndustryStyle {
        let (accent, background, icon) = match self {
            IndustryKind::Hospitality => (0xF43F5E, 0xFDF2F8, "🏨"),
            IndustryKind::RetailTourism => (0x3B82F6, 0xEFF6FF, "🛍"),
            IndustryKind::Agriculture => (0x10B981, 0xECFDF5, "🌾"),
            IndustryKind::Mining => (0xF59E0B, 0xFFFBEB, "⛏"),
            IndustryKind::Technology => (0x8B5CF6, 0xF5F3FF, "💻"),
            IndustryKind::Construction => (0xEF4444, 0xFEF2F2, "🏗"),
            IndustryKind::Other => (0x6B7280, 0xF9FAFB, "🏢"),
        };
        IndustryStyle {
            kind: self,
            accent: Rgb::from_hex(accent),
            background: Rgb::from_hex(background),
            icon,
        }
    }
}

pub fn style_for(industry: &str) -> IndustryStyle {
    IndustryKind::from_label(industry).style()
}
