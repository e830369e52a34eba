//! Photo entity - a print with width and length in centimetres

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::common::FieldReader;
use crate::error::DomainError;
use crate::events::PhotoUpdate;
use crate::value_objects::Measure;

/// A photo print
///
/// # Example
///
/// ```
/// use labkit_domain::entities::Photo;
///
/// let mut photo = Photo::new(true, 7.0, 9.5).unwrap();
/// photo.crop_photo(2.0, 1.5).unwrap();
/// photo.turn_photo();
/// photo.make_colorful();
/// assert_eq!((photo.width(), photo.length()), (8.0, 5.0));
/// assert!(!photo.is_black_and_white());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    is_black_and_white: bool,
    width: Measure,
    length: Measure,
}

impl Photo {
    /// # Errors
    ///
    /// - `DomainError::Type` if a dimension is NaN or infinite
    /// - `DomainError::Value` if a dimension is negative
    pub fn new(is_black_and_white: bool, width: f64, length: f64) -> Result<Self, DomainError> {
        Ok(Self {
            is_black_and_white,
            width: Measure::new("Width", width)?,
            length: Measure::new("Length", length)?,
        })
    }

    /// Build from a JSON object with `is_black_and_white`, `width`, and `length`.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let fields = FieldReader::new("Photo", value)?;
        Self::new(
            fields.boolean("is_black_and_white")?,
            fields.real("width")?,
            fields.real("length")?,
        )
    }

    #[inline]
    pub fn is_black_and_white(&self) -> bool {
        self.is_black_and_white
    }

    /// Width in centimetres.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width.value()
    }

    /// Length in centimetres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length.value()
    }

    /// Cut `width_to_remove` and `length_to_remove` centimetres off the photo.
    ///
    /// Both amounts are checked before either dimension changes.
    ///
    /// # Errors
    ///
    /// - `DomainError::Type` if an amount is NaN or infinite
    /// - `DomainError::Value` if an amount is negative or exceeds its dimension
    pub fn crop_photo(
        &mut self,
        width_to_remove: f64,
        length_to_remove: f64,
    ) -> Result<PhotoUpdate, DomainError> {
        let width = self.width.shrink("Width to remove", width_to_remove)?;
        let length = self.length.shrink("Length to remove", length_to_remove)?;
        self.width = width;
        self.length = length;
        Ok(PhotoUpdate::Cropped { width, length })
    }

    /// Swap width and length.
    pub fn turn_photo(&mut self) -> PhotoUpdate {
        std::mem::swap(&mut self.width, &mut self.length);
        PhotoUpdate::Turned {
            width: self.width,
            length: self.length,
        }
    }

    /// Turn a black-and-white photo into a colour one.
    pub fn make_colorful(&mut self) -> PhotoUpdate {
        if !self.is_black_and_white {
            return PhotoUpdate::AlreadyColorful;
        }
        self.is_black_and_white = false;
        PhotoUpdate::MadeColorful
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colour = if self.is_black_and_white {
            "black-and-white"
        } else {
            "colour"
        };
        write!(f, "{} x {} cm, {}", self.width, self.length, colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn photo() -> Photo {
        Photo::new(true, 7.0, 9.5).expect("valid photo")
    }

    #[test]
    fn test_new_stores_arguments() {
        let p = photo();
        assert!(p.is_black_and_white());
        assert_eq!(p.width(), 7.0);
        assert_eq!(p.length(), 9.5);
    }

    #[test]
    fn test_new_rejects_negative_dimensions() {
        assert_eq!(
            Photo::new(true, -1.0, 9.5).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
        assert_eq!(
            Photo::new(true, 7.0, -9.5).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
    }

    #[test]
    fn test_crop_photo() {
        let mut p = photo();
        let update = p.crop_photo(2.0, 1.5).expect("valid crop");
        assert_eq!(p.width(), 5.0);
        assert_eq!(p.length(), 8.0);
        assert!(matches!(update, PhotoUpdate::Cropped { .. }));
    }

    #[test]
    fn test_crop_beyond_dimension_changes_nothing() {
        let mut p = photo();
        let err = p.crop_photo(1.0, 10.0).expect_err("length too large");
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!((p.width(), p.length()), (7.0, 9.5));
    }

    #[test]
    fn test_crop_negative_fails() {
        let mut p = photo();
        assert_eq!(
            p.crop_photo(-1.0, 0.0).map_err(|e| e.kind()),
            Err(ErrorKind::Value)
        );
    }

    #[test]
    fn test_turn_photo_swaps_dimensions() {
        let mut p = photo();
        p.turn_photo();
        assert_eq!((p.width(), p.length()), (9.5, 7.0));
        p.turn_photo();
        assert_eq!((p.width(), p.length()), (7.0, 9.5));
    }

    #[test]
    fn test_make_colorful() {
        let mut p = photo();
        assert_eq!(p.make_colorful(), PhotoUpdate::MadeColorful);
        assert!(!p.is_black_and_white());
        assert_eq!(p.make_colorful(), PhotoUpdate::AlreadyColorful);
    }

    #[test]
    fn test_display() {
        assert_eq!(photo().to_string(), "7 x 9.5 cm, black-and-white");
    }

    #[test]
    fn test_from_json_requires_boolean_flag() {
        let err = Photo::from_json(&json!({"is_black_and_white": 1, "width": 7, "length": 9.5}))
            .expect_err("integer flag");
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
