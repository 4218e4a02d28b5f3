// Static music-theory tables keyed by mood.
//
// Each mood owns a `MusicTheoryEntry`: candidate scales, four-chord
// progressions (roman-numeral degrees), rhythmic feels and representative
// keys. `enhance.rs` draws one of each at random. The tables are plain
// `static` data behind an exhaustive match on `Mood`, so every mood is
// guaranteed an entry and no lookup can miss.
//
// Scales also carry their interval pattern so a chosen scale can be spelled
// out on the tonic of the suggested key (`spell_scale`).

use serde::{Deserialize, Serialize};

use crate::mood::Mood;

/// Scale or mode a piece can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Ionian: W W H W W W H
    Major,
    /// Generic minor; spelled as natural minor.
    Minor,
    NaturalMinor,
    /// Natural minor with a raised 7th.
    HarmonicMinor,
    /// Minor with a raised 6th.
    Dorian,
    /// Minor with a lowered 2nd.
    Phrygian,
    /// Major with a raised 4th.
    Lydian,
    /// Major with a lowered 7th.
    Mixolydian,
    /// Same pitches as natural minor.
    Aeolian,
    /// Lowered 2nd and 5th.
    Locrian,
    /// Major pentatonic, five notes.
    Pentatonic,
    /// Minor pentatonic plus the flat 5th, six notes.
    Blues,
}

impl Scale {
    /// Semitone offsets from the tonic for each scale degree.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Minor | Scale::NaturalMinor | Scale::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            Scale::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Scale::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Scale::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Scale::Pentatonic => &[0, 2, 4, 7, 9],
            Scale::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Letter-name step from the tonic for each entry of `intervals`.
    /// Seven-note scales use every letter once; the blues flat 5th shares
    /// the 5th's letter.
    pub fn letter_steps(self) -> &'static [u8] {
        match self {
            Scale::Pentatonic => &[0, 1, 2, 4, 5],
            Scale::Blues => &[0, 2, 3, 4, 4, 6],
            _ => &[0, 1, 2, 3, 4, 5, 6],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::NaturalMinor => "natural_minor",
            Scale::HarmonicMinor => "harmonic_minor",
            Scale::Dorian => "dorian",
            Scale::Phrygian => "phrygian",
            Scale::Lydian => "lydian",
            Scale::Mixolydian => "mixolydian",
            Scale::Aeolian => "aeolian",
            Scale::Locrian => "locrian",
            Scale::Pentatonic => "pentatonic",
            Scale::Blues => "blues",
        }
    }
}

/// Rhythmic feel label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhythmicPattern {
    Straight,
    Swing,
    Rubato,
    Legato,
    Sustained,
    Staccato,
    Syncopated,
    Irregular,
    Sparse,
    Waltz,
    Ballad,
}

impl RhythmicPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            RhythmicPattern::Straight => "straight",
            RhythmicPattern::Swing => "swing",
            RhythmicPattern::Rubato => "rubato",
            RhythmicPattern::Legato => "legato",
            RhythmicPattern::Sustained => "sustained",
            RhythmicPattern::Staccato => "staccato",
            RhythmicPattern::Syncopated => "syncopated",
            RhythmicPattern::Irregular => "irregular",
            RhythmicPattern::Sparse => "sparse",
            RhythmicPattern::Waltz => "waltz",
            RhythmicPattern::Ballad => "ballad",
        }
    }
}

/// Four roman-numeral chord degrees.
pub type Progression = [&'static str; 4];

/// Candidate theory choices for one mood. Every slice is non-empty.
#[derive(Debug)]
pub struct MusicTheoryEntry {
    pub scales: &'static [Scale],
    pub progressions: &'static [Progression],
    pub rhythmic_patterns: &'static [RhythmicPattern],
    /// Key names: tonic letter, optional `#`/`b`, trailing `m` for minor.
    pub typical_keys: &'static [&'static str],
}

static HAPPY: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::Major, Scale::Mixolydian, Scale::Lydian],
    progressions: &[["I", "V", "vi", "IV"], ["I", "vi", "IV", "V"]],
    rhythmic_patterns: &[RhythmicPattern::Straight, RhythmicPattern::Swing],
    typical_keys: &["C", "G", "D", "A", "E"],
};

static SAD: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::NaturalMinor, Scale::HarmonicMinor, Scale::Dorian],
    progressions: &[["i", "VII", "VI", "VII"], ["i", "iv", "V", "i"]],
    rhythmic_patterns: &[RhythmicPattern::Straight, RhythmicPattern::Rubato],
    typical_keys: &["Am", "Em", "Bm", "F#m"],
};

static CALM: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::Major, Scale::Pentatonic, Scale::Aeolian],
    progressions: &[["I", "vi", "IV", "V"], ["I", "V", "vi", "iii"]],
    rhythmic_patterns: &[RhythmicPattern::Legato, RhythmicPattern::Sustained],
    typical_keys: &["C", "F", "Bb", "Eb"],
};

static ENERGETIC: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::Major, Scale::Minor, Scale::Blues],
    progressions: &[["I", "IV", "V", "I"], ["i", "VII", "VI", "VII"]],
    rhythmic_patterns: &[RhythmicPattern::Staccato, RhythmicPattern::Syncopated],
    typical_keys: &["E", "A", "D", "G"],
};

static MYSTERIOUS: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::HarmonicMinor, Scale::Phrygian, Scale::Locrian],
    progressions: &[["i", "II", "i", "VII"], ["i", "bII", "bVII", "i"]],
    rhythmic_patterns: &[RhythmicPattern::Irregular, RhythmicPattern::Sparse],
    typical_keys: &["Dm", "Gm", "Cm", "F#m"],
};

static ROMANTIC: MusicTheoryEntry = MusicTheoryEntry {
    scales: &[Scale::Major, Scale::Dorian, Scale::NaturalMinor],
    progressions: &[["I", "vi", "ii", "V"], ["i", "VI", "III", "VII"]],
    rhythmic_patterns: &[RhythmicPattern::Waltz, RhythmicPattern::Ballad],
    typical_keys: &["F", "Bb", "Eb", "Ab"],
};

/// The theory table entry for `mood`.
pub fn theory_for(mood: Mood) -> &'static MusicTheoryEntry {
    match mood {
        Mood::Happy => &HAPPY,
        Mood::Sad => &SAD,
        Mood::Calm => &CALM,
        Mood::Energetic => &ENERGETIC,
        Mood::Mysterious => &MYSTERIOUS,
        Mood::Romantic => &ROMANTIC,
    }
}

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];
const LETTER_PITCH_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Letter index (0 = C) and pitch class of a key name's tonic.
fn parse_tonic(key: &str) -> Option<(usize, u8)> {
    let mut chars = key.chars();
    let letter = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 1,
        'E' => 2,
        'F' => 3,
        'G' => 4,
        'A' => 5,
        'B' => 6,
        _ => return None,
    };
    let natural = LETTER_PITCH_CLASSES[letter];
    let pc = match chars.next() {
        Some('#') => (natural + 1) % 12,
        Some('b') => (natural + 11) % 12,
        _ => natural,
    };
    Some((letter, pc))
}

/// Pitch class (0 = C) of a key name's tonic, e.g. "F#m" -> 6, "Bb" -> 10.
pub fn tonic_pitch_class(key: &str) -> Option<u8> {
    parse_tonic(key).map(|(_, pc)| pc)
}

/// Note names of `scale` starting on the tonic of `key`.
///
/// Each degree is written on its own letter name (`Scale::letter_steps`)
/// with whatever accidental reaches the right pitch, so Gm natural minor
/// reads G A Bb C D Eb F and Dm harmonic minor ends on C#. Returns an
/// empty list for an unparseable key.
pub fn spell_scale(key: &str, scale: Scale) -> Vec<String> {
    let Some((tonic_letter, tonic)) = parse_tonic(key) else {
        return Vec::new();
    };

    scale
        .intervals()
        .iter()
        .zip(scale.letter_steps())
        .map(|(&iv, &step)| {
            let letter = (tonic_letter + step as usize) % 7;
            let target = (tonic + iv) % 12;
            // Signed distance from the natural letter, folded into -6..=5.
            let offset = (i16::from(target) - i16::from(LETTER_PITCH_CLASSES[letter]) + 18)
                .rem_euclid(12)
                - 6;
            let accidental = if offset < 0 {
                "b".repeat(offset.unsigned_abs() as usize)
            } else {
                "#".repeat(offset as usize)
            };
            format!("{}{}", LETTERS[letter], accidental)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_non_empty() {
        for mood in Mood::ALL {
            let entry = theory_for(mood);
            assert!(!entry.scales.is_empty(), "{mood}: scales");
            assert!(!entry.progressions.is_empty(), "{mood}: progressions");
            assert!(!entry.rhythmic_patterns.is_empty(), "{mood}: rhythms");
            assert!(!entry.typical_keys.is_empty(), "{mood}: keys");
        }
    }

    #[test]
    fn every_key_parses() {
        for mood in Mood::ALL {
            for key in theory_for(mood).typical_keys {
                assert!(tonic_pitch_class(key).is_some(), "{mood}: {key}");
            }
        }
    }

    #[test]
    fn mysterious_progressions_use_flat_degrees() {
        let entry = theory_for(Mood::Mysterious);
        assert_eq!(entry.progressions[1], ["i", "bII", "bVII", "i"]);
    }

    #[test]
    fn scale_degree_counts() {
        assert_eq!(Scale::Major.intervals().len(), 7);
        assert_eq!(Scale::Pentatonic.intervals().len(), 5);
        assert_eq!(Scale::Blues.intervals().len(), 6);
        for scale in [Scale::Minor, Scale::NaturalMinor, Scale::Aeolian] {
            assert_eq!(scale.intervals(), Scale::NaturalMinor.intervals());
        }
    }

    #[test]
    fn tonic_parsing() {
        assert_eq!(tonic_pitch_class("C"), Some(0));
        assert_eq!(tonic_pitch_class("F#m"), Some(6));
        assert_eq!(tonic_pitch_class("Bb"), Some(10));
        assert_eq!(tonic_pitch_class("Am"), Some(9));
        assert_eq!(tonic_pitch_class("H"), None);
        assert_eq!(tonic_pitch_class(""), None);
    }

    #[test]
    fn spelling() {
        assert_eq!(
            spell_scale("C", Scale::Major),
            vec!["C", "D", "E", "F", "G", "A", "B"]
        );
        assert_eq!(
            spell_scale("Am", Scale::HarmonicMinor),
            vec!["A", "B", "C", "D", "E", "F", "G#"]
        );
        assert_eq!(
            spell_scale("Eb", Scale::Pentatonic),
            vec!["Eb", "F", "G", "Bb", "C"]
        );
        assert_eq!(
            spell_scale("F", Scale::Major),
            vec!["F", "G", "A", "Bb", "C", "D", "E"]
        );
        assert_eq!(spell_scale("F#m", Scale::Phrygian)[1], "G");
        assert!(spell_scale("?", Scale::Major).is_empty());
    }

    #[test]
    fn flat_minor_keys_spell_with_flats() {
        assert_eq!(
            spell_scale("Gm", Scale::NaturalMinor),
            vec!["G", "A", "Bb", "C", "D", "Eb", "F"]
        );
        assert_eq!(
            spell_scale("Dm", Scale::Minor),
            vec!["D", "E", "F", "G", "A", "Bb", "C"]
        );
        assert_eq!(
            spell_scale("Cm", Scale::Aeolian),
            vec!["C", "D", "Eb", "F", "G", "Ab", "Bb"]
        );
        assert_eq!(
            spell_scale("Fm", Scale::NaturalMinor),
            vec!["F", "G", "Ab", "Bb", "C", "Db", "Eb"]
        );
        // Raised leading tone stays a sharp even in a flat key.
        assert_eq!(spell_scale("Dm", Scale::HarmonicMinor)[6], "C#");
        assert_eq!(spell_scale("Gm", Scale::HarmonicMinor)[6], "F#");
    }

    #[test]
    fn flat_major_keys_and_modes() {
        assert_eq!(
            spell_scale("Bb", Scale::Major),
            vec!["Bb", "C", "D", "Eb", "F", "G", "A"]
        );
        assert_eq!(
            spell_scale("Ab", Scale::Major),
            vec!["Ab", "Bb", "C", "Db", "Eb", "F", "G"]
        );
        assert_eq!(
            spell_scale("C", Scale::Locrian),
            vec!["C", "Db", "Eb", "F", "Gb", "Ab", "Bb"]
        );
        assert_eq!(
            spell_scale("Am", Scale::Blues),
            vec!["A", "C", "D", "Eb", "E", "G"]
        );
    }

    /// Pitch class of a spelled note, allowing any run of accidentals.
    fn pitch_class_of(note: &str) -> u8 {
        let (letter, _) = parse_tonic(&note[..1]).unwrap();
        let shift: i16 = note[1..]
            .chars()
            .map(|c| if c == '#' { 1 } else { -1 })
            .sum();
        (i16::from(LETTER_PITCH_CLASSES[letter]) + shift).rem_euclid(12) as u8
    }

    #[test]
    fn table_keys_use_each_letter_once() {
        let all_scales = [
            Scale::Major,
            Scale::NaturalMinor,
            Scale::HarmonicMinor,
            Scale::Dorian,
            Scale::Phrygian,
            Scale::Lydian,
            Scale::Mixolydian,
            Scale::Locrian,
        ];
        for mood in Mood::ALL {
            for key in theory_for(mood).typical_keys {
                for scale in all_scales {
                    let notes = spell_scale(key, scale);
                    let mut letters: Vec<char> =
                        notes.iter().filter_map(|n| n.chars().next()).collect();
                    letters.sort_unstable();
                    letters.dedup();
                    assert_eq!(letters.len(), 7, "{key} {}: {notes:?}", scale.as_str());
                    let tonic = tonic_pitch_class(key).unwrap();
                    for (note, &iv) in notes.iter().zip(scale.intervals()) {
                        assert_eq!(pitch_class_of(note), (tonic + iv) % 12, "{key} {note}");
                    }
                }
            }
        }
    }

    #[test]
    fn serialized_names_match_as_str() {
        for scale in [Scale::NaturalMinor, Scale::HarmonicMinor, Scale::Blues] {
            let json = serde_json::to_string(&scale).unwrap();
            assert_eq!(json, format!("\"{}\"", scale.as_str()));
        }
        let json = serde_json::to_string(&RhythmicPattern::Syncopated).unwrap();
        assert_eq!(json, "\"syncopated\"");
    }
}
