#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeTier {
    pub threshold: u32,
    pub icon: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

impl BadgeTier {
    const fn new(threshold: u32, icon: &'static str, name: &'static str, color: &'static str) -> Self {
        Self {
            threshold,
            icon,
            name,
            color,
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Badge ladder, highest threshold first. The last tier starts at zero so
/// every point total has a badge.
pub const BADGE_TIERS: &[BadgeTier] = &[
    BadgeTier::new(500, "🚀", "Planet Protector", "#388E3C"),
    BadgeTier::new(400, "🛰️", "Guardian of Green", "#66BB6A"),
    BadgeTier::new(300, "👑", "Eco Royalty", "#FFD700"),
    BadgeTier::new(250, "🛡️", "Plastic Defender", "#90CAF9"),
    BadgeTier::new(200, "🔥", "Streak Saver", "#EF9A9A"),
    BadgeTier::new(150, "🧠", "Sort Sensei", "#CE93D8"),
    BadgeTier::new(100, "🌱", "Eco Explorer", "#AED581"),
    BadgeTier::new(70, "🎯", "Precision Recycler", "#FFCC80"),
    BadgeTier::new(50, "🔍", "Sort Scout", "#A7FFEB"),
    BadgeTier::new(40, "☕", "PS Slayer", "#F8BBD0"),
    BadgeTier::new(30, "🍱", "PP Pioneer", "#FFF59D"),
    BadgeTier::new(20, "📦", "LDPE Legend", "#E0E0E0"),
    BadgeTier::new(10, "🚰", "HDPE Hero", "#81D4FA"),
    BadgeTier::new(1, "🧴", "PET Pro", "#B2EBF2"),
    BadgeTier::new(0, "🐣", "Green Beginner", "#D0F0C0"),
];

/// Points earned for each sorted item.
pub const POINTS_PER_ITEM: u32 = 10;

pub fn badge_for_points(points: u32) -> &'static BadgeTier {
    BADGE_TIERS
        .iter()
        .find(|tier| points >= tier.threshold)
        .unwrap_or(&BADGE_TIERS[BADGE_TIERS.len() - 1])
}
