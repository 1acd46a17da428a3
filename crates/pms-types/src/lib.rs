/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during
/// construction, and the result must contain at least one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when creating validated measurement types.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    /// The input was NaN or infinite
    #[error("Measurement must be a finite number")]
    NonFinite,
    /// The input was zero or negative
    #[error("Measurement must be greater than zero")]
    NotPositive,
}

/// A strictly positive, finite measurement value.
///
/// Wraps an `f64` for physical quantities such as a height in metres or a
/// weight in kilograms, where zero and negative values are meaningless.
/// Deserialisation re-validates, so a `PositiveMeasure` read from stored data
/// carries the same guarantee as one built in code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositiveMeasure(f64);

impl PositiveMeasure {
    /// Creates a new `PositiveMeasure` from the given value.
    ///
    /// Returns `Err(MeasureError::NonFinite)` for NaN or infinite input and
    /// `Err(MeasureError::NotPositive)` for zero or negative input.
    pub fn new(value: f64) -> Result<Self, MeasureError> {
        if !value.is_finite() {
            return Err(MeasureError::NonFinite);
        }
        if value <= 0.0 {
            return Err(MeasureError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for PositiveMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for PositiveMeasure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PositiveMeasure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        PositiveMeasure::new(value).map_err(serde::de::Error::custom)
    }
}
