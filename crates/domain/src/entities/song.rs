//! Song entity - a track with a length in minutes

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::common::FieldReader;
use crate::error::DomainError;
use crate::events::LengthChange;
use crate::value_objects::Measure;

/// A song by some artist
///
/// # Invariants
///
/// - `length` is always finite and non-negative (enforced by `Measure`)
///
/// # Example
///
/// ```
/// use labkit_domain::entities::Song;
///
/// let mut song = Song::new("Lyudi", "Daite tank (!)", 2.5).unwrap();
/// song.increase_length(1.25).unwrap();
/// song.decrease_length(0.75).unwrap();
/// assert_eq!(song.length(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    title: String,
    artist: String,
    /// Duration in minutes
    length: Measure,
}

impl Song {
    /// # Errors
    ///
    /// - `DomainError::Type` if `length` is NaN or infinite
    /// - `DomainError::Value` if `length < 0`
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        length: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: title.into(),
            artist: artist.into(),
            length: Measure::new("Length", length)?,
        })
    }

    /// Build from a JSON object with `title`, `artist`, and `length`.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("Song", value)?;
        Self::new(
            fields.string("title")?,
            fields.string("artist")?,
            fields.real("length")?,
        )
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Length in minutes.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length.value()
    }

    /// Make the song longer by `additional_length` minutes.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if the amount is NaN or infinite
    /// - `DomainError::Value` if the amount is negative
    pub fn increase_length(&mut self, additional_length: f64) -> Result<LengthChange, DomainError> {
        let to = self.length.extend("Additional length", additional_length)?;
        Ok(self.replace_length(to))
    }

    /// Make the song shorter by `length_to_remove` minutes.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if the amount is NaN or infinite
    /// - `DomainError::Value` if the amount is negative or exceeds the current length
    pub fn decrease_length(&mut self, length_to_remove: f64) -> Result<LengthChange, DomainError> {
        let to = self.length.shrink("Length to remove", length_to_remove)?;
        Ok(self.replace_length(to))
    }

    fn replace_length(&mut self, to: Measure) -> LengthChange {
        let from = std::mem::replace(&mut self.length, to);
        LengthChange { from, to }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({} min)",
            self.title, self.artist, self.length
        )
    }
}
