use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Separator between the parts of a meta line
pub const META_SEPARATOR: &str = " | ";

/// A single catalog entry as stored in music_metadata.json
///
/// Every field except `title` is optional. Fields are duck-typed: a missing
/// field, `null`, or an empty string all mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// File stem the record was generated from
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Track title
    #[serde(default, deserialize_with = "required_text")]
    pub title: String,

    /// Artist name
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Movie the track belongs to, shown in parentheses after the title
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub movie: Option<String>,

    /// Genre (optional)
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Free-form description (optional)
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Date-like text, parsed only when sorting
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Promote this track to the featured section
    #[serde(default, deserialize_with = "flag", skip_serializing_if = "is_false")]
    pub featured: bool,

    /// Track duration in whole seconds
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    /// Container format of the probed file (file extension)
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Bitrate in kbps
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u64>,

    /// Sample rate in Hz
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u64>,

    /// Path to the lossless FLAC rendition
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub path_flac: Option<String>,

    /// Path to the MP3 rendition (preferred for playback)
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub path_mp3: Option<String>,
}

impl Track {
    /// Create a track with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Title with the movie appended in parentheses when present
    pub fn display_title(&self) -> String {
        match &self.movie {
            Some(movie) => format!("{} ({})", self.title, movie),
            None => self.title.clone(),
        }
    }

    /// Genre, description and date joined by " | ", skipping absent parts
    pub fn meta_line(&self) -> String {
        [&self.genre, &self.desc, &self.date]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(META_SEPARATOR)
    }

    /// Playable source for the audio control: MP3 first, then FLAC
    pub fn audio_source(&self) -> Option<&str> {
        self.path_mp3.as_deref().or(self.path_flac.as_deref())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Non-empty text, or None for null, "" and non-string values
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Truthy flag: true, "true"/"yes"/"1", or a non-zero number
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}

/// Unsigned integer given either as a JSON number or a numeric string
fn number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
