use alloc::string::String;
use alloc::vec::Vec;

/// One content item shown as a card on the timeline.
///
/// Events are display data only; nothing in the navigation engine depends on their contents.
/// With `feature = "serde"`, field names follow the camelCase convention used by web payloads
/// (`dateTime`, `shortDescription`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Event {
    /// Timestamp as supplied by the host, e.g. `2024-01-15T10:00:00Z`.
    pub date_time: String,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub image_caption: Option<String>,
    pub tags: Vec<String>,
    pub background_color: Option<String>,
}

impl Event {
    pub fn new(date_time: impl Into<String>) -> Self {
        Self {
            date_time: date_time.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_image(
        mut self,
        src: impl Into<String>,
        alt: Option<String>,
        caption: Option<String>,
    ) -> Self {
        self.image = Some(src.into());
        self.image_alt = alt;
        self.image_caption = caption;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Whether the card has a long description to expand into.
    pub fn is_expandable(&self) -> bool {
        self.description.is_some()
    }

    /// Alt text for the image, falling back to the title.
    pub fn image_alt_text(&self) -> Option<&str> {
        self.image_alt.as_deref().or(self.title.as_deref())
    }

    /// Short en-US date for the card badge, e.g. `Jan 15, 2024`.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else is returned
    /// unchanged. Timestamps keep the calendar date they were written in, whatever their
    /// offset.
    #[cfg(feature = "chrono")]
    pub fn date_label(&self) -> String {
        use alloc::string::ToString;
        use chrono::{DateTime, NaiveDate};

        let raw = self.date_time.trim();
        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
        match date {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.date_time.clone(),
        }
    }

    /// The raw timestamp; enable the `chrono` feature for a formatted date.
    #[cfg(not(feature = "chrono"))]
    pub fn date_label(&self) -> String {
        self.date_time.clone()
    }
}
