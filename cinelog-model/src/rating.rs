//! Ratings as delivered by the OMDb backend and their display forms.

use std::fmt;

/// Where a rating comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RatingSource {
    Imdb,
    RottenTomatoes,
    Metacritic,
    Other(String),
}

impl RatingSource {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Internet Movie Database" => RatingSource::Imdb,
            "Rotten Tomatoes" => RatingSource::RottenTomatoes,
            "Metacritic" => RatingSource::Metacritic,
            other => RatingSource::Other(other.to_string()),
        }
    }

    pub fn short_label(&self) -> &str {
        match self {
            RatingSource::Imdb => "IMDb",
            RatingSource::RottenTomatoes => "RT",
            RatingSource::Metacritic => "Metacritic",
            RatingSource::Other(label) => label,
        }
    }
}

/// A single source/value rating pair, e.g. `Rotten Tomatoes` / `87%`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    #[cfg_attr(feature = "serde", serde(rename = "Source"))]
    pub source: String,
    #[cfg_attr(feature = "serde", serde(rename = "Value"))]
    pub value: String,
}

impl Rating {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Rating {
            source: source.into(),
            value: value.into(),
        }
    }

    pub fn source_kind(&self) -> RatingSource {
        RatingSource::from_label(&self.source)
    }

    /// The rating on a 0-100 scale.
    ///
    /// `"8.1/10"` is 81, `"87%"` is 87 and `"74/100"` is 74. Sentinels like
    /// `"N/A"` and anything else unparseable yield `None`.
    pub fn percent(&self) -> Option<f64> {
        let value = self.value.trim();
        let percent = if let Some(number) = value.strip_suffix('%') {
            number.trim().parse::<f64>().ok()?
        } else if let Some((numerator, denominator)) = value.split_once('/') {
            let numerator = numerator.trim().parse::<f64>().ok()?;
            let denominator = denominator.trim().parse::<f64>().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator * 100.0
        } else {
            return None;
        };

        percent.is_finite().then(|| (percent * 10.0).round() / 10.0)
    }

    /// Compact display form, e.g. `IMDb: 8.1/10`
    pub fn display(&self) -> String {
        format!("{}: {}", self.source_kind().short_label(), self.value.trim())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_normalizes_each_scale() {
        assert_eq!(
            Rating::new("Internet Movie Database", "8.1/10").percent(),
            Some(81.0)
        );
        assert_eq!(Rating::new("Rotten Tomatoes", "87%").percent(), Some(87.0));
        assert_eq!(Rating::new("Metacritic", "74/100").percent(), Some(74.0));
    }

    #[test]
    fn percent_is_none_for_sentinels() {
        assert_eq!(Rating::new("Metacritic", "N/A").percent(), None);
        assert_eq!(Rating::new("Metacritic", "5/0").percent(), None);
        assert_eq!(Rating::new("Metacritic", "great").percent(), None);
    }

    #[test]
    fn display_shortens_known_sources() {
        assert_eq!(
            Rating::new("Internet Movie Database", "8.1/10").display(),
            "IMDb: 8.1/10"
        );
        assert_eq!(Rating::new("Rotten Tomatoes", "87%").display(), "RT: 87%");
        assert_eq!(
            Rating::new("Letterboxd", " 4.2/5 ").display(),
            "Letterboxd: 4.2/5"
        );
    }

    #[test]
    fn plain_display_is_the_raw_value() {
        assert_eq!(Rating::new("Metacritic", "74/100").to_string(), "74/100");
    }
}
