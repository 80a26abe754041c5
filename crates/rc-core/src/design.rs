/// Fixed interior design styles offered by the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStyle {
    ModernMinimalist,
    LuxuryClassic,
    Scandinavian,
    Industrial,
    Bohemian,
    Contemporary,
}

impl DesignStyle {
    pub const ALL: [DesignStyle; 6] = [
        Self::ModernMinimalist,
        Self::LuxuryClassic,
        Self::Scandinavian,
        Self::Industrial,
        Self::Bohemian,
        Self::Contemporary,
    ];

    /// Style name for display in UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::ModernMinimalist => "Modern Minimalist",
            Self::LuxuryClassic => "Luxury Classic",
            Self::Scandinavian => "Scandinavian",
            Self::Industrial => "Industrial",
            Self::Bohemian => "Bohemian",
            Self::Contemporary => "Contemporary",
        }
    }

    /// Style ID for API communication
    pub fn id(&self) -> &'static str {
        match self {
            Self::ModernMinimalist => "modern minimalist",
            Self::LuxuryClassic => "luxury classic",
            Self::Scandinavian => "scandinavian",
            Self::Industrial => "industrial",
            Self::Bohemian => "bohemian",
            Self::Contemporary => "contemporary",
        }
    }
}

impl Default for DesignStyle {
    fn default() -> Self {
        Self::ModernMinimalist
    }
}

/// Room types the backend knows how to furnish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [Self::LivingRoom, Self::Bedroom, Self::Kitchen];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::Kitchen => "Kitchen",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::LivingRoom => "living room",
            Self::Bedroom => "bedroom",
            Self::Kitchen => "kitchen",
        }
    }
}

impl Default for RoomType {
    fn default() -> Self {
        Self::LivingRoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_ids() {
        assert_eq!(DesignStyle::ModernMinimalist.id(), "modern minimalist");
        assert_eq!(DesignStyle::LuxuryClassic.id(), "luxury classic");
        assert_eq!(DesignStyle::Contemporary.id(), "contemporary");
    }

    #[test]
    fn test_all_styles() {
        assert_eq!(DesignStyle::ALL.len(), 6);
        assert_eq!(DesignStyle::default(), DesignStyle::ALL[0]);
    }

    #[test]
    fn test_room_ids() {
        assert_eq!(RoomType::LivingRoom.id(), "living room");
        assert_eq!(RoomType::Kitchen.id(), "kitchen");
    }

    #[test]
    fn test_all_rooms() {
        assert_eq!(RoomType::ALL.len(), 3);
        assert_eq!(RoomType::default(), RoomType::LivingRoom);
    }
}
