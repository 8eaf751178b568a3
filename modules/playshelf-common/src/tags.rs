use serde::{Deserialize, Serialize};

/// Where an activity can take place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTag {
    Indoor,
    Outdoor,
}

impl LocationTag {
    pub const ALL: [Self; 2] = [Self::Indoor, Self::Outdoor];

    pub fn label(&self) -> &'static str {
        match self {
            LocationTag::Indoor => "Intérieur",
            LocationTag::Outdoor => "Extérieur",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LocationTag::Indoor => "🏠",
            LocationTag::Outdoor => "🌳",
        }
    }
}

impl std::fmt::Display for LocationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationTag::Indoor => write!(f, "indoor"),
            LocationTag::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// How many children the activity is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerTag {
    Solo,
    Duo,
    Multiple,
}

impl PlayerTag {
    pub const ALL: [Self; 3] = [Self::Solo, Self::Duo, Self::Multiple];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerTag::Solo => "Solo",
            PlayerTag::Duo => "Duo",
            PlayerTag::Multiple => "Plusieurs",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PlayerTag::Solo => "🧍",
            PlayerTag::Duo => "🧑‍🤝‍🧑",
            PlayerTag::Multiple => "👥",
        }
    }
}

impl std::fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerTag::Solo => write!(f, "solo"),
            PlayerTag::Duo => write!(f, "duo"),
            PlayerTag::Multiple => write!(f, "multiple"),
        }
    }
}

/// How much the activity winds the children up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTag {
    Calm,
    Active,
}

impl EnergyTag {
    pub const ALL: [Self; 2] = [Self::Calm, Self::Active];

    pub fn label(&self) -> &'static str {
        match self {
            EnergyTag::Calm => "Calme",
            EnergyTag::Active => "Actif",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            EnergyTag::Calm => "😌",
            EnergyTag::Active => "⚡",
        }
    }
}

impl std::fmt::Display for EnergyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyTag::Calm => write!(f, "calm"),
            EnergyTag::Active => write!(f, "active"),
        }
    }
}

/// Minute buckets, stored as opaque string codes. No arithmetic is ever
/// performed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DurationTag {
    #[serde(rename = "5-10")]
    Short,
    #[serde(rename = "10-30")]
    Medium,
    #[serde(rename = "30+")]
    Long,
}

impl DurationTag {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn label(&self) -> &'static str {
        match self {
            DurationTag::Short => "5-10m",
            DurationTag::Medium => "10-30m",
            DurationTag::Long => "30m+",
        }
    }

    pub fn emoji(&self) -> &'static str {
        "⏱️"
    }
}

impl std::fmt::Display for DurationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationTag::Short => write!(f, "5-10"),
            DurationTag::Medium => write!(f, "10-30"),
            DurationTag::Long => write!(f, "30+"),
        }
    }
}

/// Calendar season. An experimental "all-year" tag existed in one UI
/// iteration but never made it into the stored model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Printemps",
            Season::Summer => "Été",
            Season::Fall => "Automne",
            Season::Winter => "Hiver",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Season::Spring => "🌸",
            Season::Summer => "☀️",
            Season::Fall => "🍂",
            Season::Winter => "❄️",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Activity category. Unlike the other facets this is an open set: the
/// curated slugs below get proper labels and icons, but unknown slugs are
/// still valid tags (admins can introduce new categories through the data
/// file without a code change).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTag(pub String);

/// slug, French label, icon
const KNOWN_CATEGORIES: &[(&str, &str, &str)] = &[
    ("jeu-de-societe", "Jeu de société", "♟️"),
    ("casse-tete", "Casse-tête", "🧩"),
    ("arts-et-bricolage", "Arts et bricolage", "🎨"),
    ("instrument", "Instrument", "🎸"),
    ("jeu-educatif", "Jeu éducatif", "📚"),
    ("jeu-video", "Jeu vidéo", "🎮"),
    ("lego", "Lego", "🧱"),
    ("autre", "Autre", "❓"),
];

impl CategoryTag {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn slug(&self) -> &str {
        &self.0
    }

    /// Display label. Unknown slugs fall back to the slug itself.
    pub fn label(&self) -> &str {
        KNOWN_CATEGORIES
            .iter()
            .find(|(slug, _, _)| *slug == self.0)
            .map(|(_, label, _)| *label)
            .unwrap_or(&self.0)
    }

    pub fn emoji(&self) -> &str {
        KNOWN_CATEGORIES
            .iter()
            .find(|(slug, _, _)| *slug == self.0)
            .map(|(_, _, emoji)| *emoji)
            .unwrap_or("❓")
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every curated category, in display order.
pub fn all_categories() -> Vec<CategoryTag> {
    KNOWN_CATEGORIES
        .iter()
        .map(|(slug, _, _)| CategoryTag::new(*slug))
        .collect()
}
