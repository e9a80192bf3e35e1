use serde::{Deserialize, Serialize};

/// One stop in the directory. The three names are the same station in three
/// scripts and are never modified independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: u32,
    pub name_en: String,
    pub name_hi: String,
    pub name_mr: String,
    /// Display string, e.g. "2 min". Not a structured duration.
    pub next_arrive: String,
    pub platform: u32,
    /// Human-readable label: "On Time", "Minor Delay", "Delayed", ...
    pub status: String,
}

impl Station {
    /// Display name for the given language. Anything that is not English or
    /// Hindi lands on the Marathi name.
    pub fn display_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.name_en,
            Lang::Hi => &self.name_hi,
            _ => &self.name_mr,
        }
    }
}

/// Display and pronunciation language. Never alters station data or the
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
    Mr,
}

impl Lang {
    /// Unrecognized tags resolve to Marathi, matching the deployed UI, which
    /// reached Marathi through its final `else`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Lang::En,
            "hi" => Lang::Hi,
            _ => Lang::Mr,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Mr => "mr",
        }
    }

    /// BCP 47 tag handed to the speech synthesizer.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Lang::En => "en-US",
            Lang::Hi => "hi-IN",
            Lang::Mr => "mr-IN",
        }
    }
}

/// On-disk shape of the station directory (JSON, camelCase keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryConfig {
    pub stations: Vec<Station>,
}

impl DirectoryConfig {
    /// The four stations the kiosk ships with.
    pub fn builtin() -> Self {
        let station = |id, name_en: &str, devanagari: &str, next_arrive: &str, platform, status: &str| Station {
            id,
            name_en: name_en.to_string(),
            name_hi: devanagari.to_string(),
            name_mr: devanagari.to_string(),
            next_arrive: next_arrive.to_string(),
            platform,
            status: status.to_string(),
        };
        DirectoryConfig {
            stations: vec![
                station(1, "Dahisar East", "दहिसर पूर्व", "2 min", 1, "On Time"),
                station(2, "Kashigoan", "काशीगांव", "6 min", 2, "Minor Delay"),
                station(3, "Miragoan", "मिरगांव", "10 min", 1, "Delayed"),
                station(4, "Andheri", "अंधेरी", "12 min", 2, "On Time"),
            ],
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
