// The closed set of mood categories and their per-mood lookup tables.
//
// Mood inference classifies text into exactly one of six moods. Everything
// keyed by mood (prototype phrase, base tempo, instrumentation) is an
// exhaustive `match` on `Mood`, so adding a variant without filling in
// every table is a compile error rather than a silent default.
//
// Declaration order matters: `Mood::ALL` fixes the order prototypes are
// compared in, and the earlier mood wins a similarity tie (see
// `embedding::MoodPrototypes::classify`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six mood prototypes text can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Energetic,
    Mysterious,
    Romantic,
}

impl Mood {
    /// All moods in declaration (tie-break) order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Calm,
        Mood::Energetic,
        Mood::Mysterious,
        Mood::Romantic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Mysterious => "mysterious",
            Mood::Romantic => "romantic",
        }
    }

    /// Canonical descriptive phrase embedded once at startup as this mood's
    /// prototype vector.
    pub fn prototype_phrase(self) -> &'static str {
        match self {
            Mood::Happy => "joyful cheerful upbeat positive energetic bright",
            Mood::Sad => "melancholy sorrowful depressed gloomy downcast",
            Mood::Calm => "peaceful tranquil serene relaxed meditative quiet",
            Mood::Energetic => "dynamic powerful intense vigorous exciting",
            Mood::Mysterious => "enigmatic dark atmospheric suspenseful eerie",
            Mood::Romantic => "loving tender passionate intimate gentle warm",
        }
    }

    /// Tempo in BPM at energy level 5, before the energy offset.
    pub fn base_tempo(self) -> u16 {
        match self {
            Mood::Happy => 120,
            Mood::Sad => 70,
            Mood::Calm => 80,
            Mood::Energetic => 140,
            Mood::Mysterious => 90,
            Mood::Romantic => 85,
        }
    }

    pub fn instruments(self) -> [&'static str; 3] {
        match self {
            Mood::Happy => ["piano", "guitar", "drums"],
            Mood::Sad => ["piano", "strings", "cello"],
            Mood::Calm => ["piano", "flute", "soft_strings"],
            Mood::Energetic => ["electric_guitar", "drums", "bass"],
            Mood::Mysterious => ["synth", "strings", "ambient_pad"],
            Mood::Romantic => ["piano", "violin", "soft_guitar"],
        }
    }

    /// Position in `Mood::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred tonality of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyQuality {
    Major,
    Minor,
}

impl KeyQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyQuality::Major => "major",
            KeyQuality::Minor => "minor",
        }
    }
}

/// Broad genre suggestion derived from mood and energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreStyle {
    Electronic,
    Rock,
    Ambient,
    Classical,
    Folk,
    Jazz,
}

impl GenreStyle {
    /// Pick a genre from mood and energy level.
    ///
    /// High energy (>= 8) goes electronic for energetic moods and rock
    /// otherwise; low energy (<= 3) goes ambient for calm and classical
    /// otherwise; the middle band is folk for romantic/calm and jazz for the
    /// rest.
    pub fn for_mood(mood: Mood, energy_level: u8) -> Self {
        if energy_level >= 8 {
            if mood == Mood::Energetic {
                GenreStyle::Electronic
            } else {
                GenreStyle::Rock
            }
        } else if energy_level <= 3 {
            if mood == Mood::Calm {
                GenreStyle::Ambient
            } else {
                GenreStyle::Classical
            }
        } else if matches!(mood, Mood::Romantic | Mood::Calm) {
            GenreStyle::Folk
        } else {
            GenreStyle::Jazz
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenreStyle::Electronic => "electronic",
            GenreStyle::Rock => "rock",
            GenreStyle::Ambient => "ambient",
            GenreStyle::Classical => "classical",
            GenreStyle::Folk => "folk",
            GenreStyle::Jazz => "jazz",
        }
    }
}
