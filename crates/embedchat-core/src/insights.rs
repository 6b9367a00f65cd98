//! View models for the Insights page: topic settings, the key-topic
//! carousel, and the file-type pie chart.

use std::cmp::Ordering;
use std::f64::consts::PI;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::DataDistribution;

/// Largest value offered by the topic/subtopic selectors.
pub const MAX_TOPIC_SETTING: u8 = 5;

/// Shown while topics have not arrived yet.
pub const LOADING_SLIDE: &str = "Loading...";

const SLICE_COLORS: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// Number of topics and words per topic requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSettings {
    num_topics: u8,
    num_words: u8,
}

impl Default for TopicSettings {
    fn default() -> Self {
        Self {
            num_topics: 1,
            num_words: 1,
        }
    }
}

impl TopicSettings {
    /// Values are clamped to `1..=5`.
    pub fn new(num_topics: u8, num_words: u8) -> Self {
        Self {
            num_topics: num_topics.clamp(1, MAX_TOPIC_SETTING),
            num_words: num_words.clamp(1, MAX_TOPIC_SETTING),
        }
    }

    pub fn num_topics(&self) -> u8 {
        self.num_topics
    }

    pub fn num_words(&self) -> u8 {
        self.num_words
    }

    pub fn with_topics(self, num_topics: u8) -> Self {
        Self::new(num_topics, self.num_words)
    }

    pub fn with_words(self, num_words: u8) -> Self {
        Self::new(self.num_topics, num_words)
    }
}

/// Decode a `/get-key-topics` body.
///
/// The backend returns a flat array of strings. Objects keyed by index are
/// accepted too: numeric keys are taken in numeric order, any other keys
/// after them in lexical order. Non-string entries are rendered as JSON.
pub fn parse_key_topics(value: Value) -> Result<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| {
                match (a.parse::<u64>(), b.parse::<u64>()) {
                    (Ok(a), Ok(b)) => a.cmp(&b),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => a.cmp(b),
                }
            });
            entries.into_iter().map(|(_, v)| v).collect()
        }
        other => {
            return Err(Error::Decode(format!(
                "expected a list of topics, got {}",
                other
            )))
        }
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

/// Key topics shown one at a time with a dot per slide
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicCarousel {
    slides: Vec<String>,
    current: usize,
}

impl TopicCarousel {
    /// Replace the slides and go back to the first one.
    pub fn set_slides(&mut self, slides: Vec<String>) {
        self.slides = slides;
        self.current = 0;
    }

    /// Slides to render; a single placeholder while nothing has loaded.
    pub fn slides(&self) -> Vec<String> {
        if self.slides.is_empty() {
            vec![LOADING_SLIDE.to_string()]
        } else {
            self.slides.clone()
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> String {
        self.slides
            .get(self.current)
            .cloned()
            .unwrap_or_else(|| LOADING_SLIDE.to_string())
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }
}

/// One wedge of the file-type pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: u64,
    /// Share of the total, in `0.0..=1.0`
    pub fraction: f64,
    /// Cumulative share of the slices before this one
    pub start: f64,
    pub color: &'static str,
}

impl PieSlice {
    /// SVG path for this wedge in a circle centred at `(cx, cy)`.
    /// Angles run clockwise from twelve o'clock.
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        if self.fraction >= 0.9999 {
            return format!(
                "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                top = cy - r,
                bottom = cy + r,
            );
        }

        let point = |f: f64| {
            let angle = 2.0 * PI * f;
            (cx + r * angle.sin(), cy - r * angle.cos())
        };
        let (x0, y0) = point(self.start);
        let (x1, y1) = point(self.start + self.fraction);
        let large_arc = u8::from(self.fraction > 0.5);

        format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
        )
    }
}

impl DataDistribution {
    pub fn total(&self) -> u64 {
        self.counts().iter().map(|(_, n)| n).sum()
    }

    /// Counts in display order.
    pub fn counts(&self) -> [(&'static str, u64); 6] {
        [
            ("PNG", self.png),
            ("JPG", self.jpg),
            ("PDF", self.pdf),
            ("MOV", self.mov),
            ("JPEG", self.jpeg),
            ("MP4", self.mp4),
        ]
    }

    /// Non-empty wedges of the pie chart. Empty when there are no files.
    pub fn slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut start = 0.0;
        self.counts()
            .into_iter()
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(i, (label, count))| {
                let fraction = count as f64 / total as f64;
                let slice = PieSlice {
                    label,
                    count,
                    fraction,
                    start,
                    color: SLICE_COLORS[i % SLICE_COLORS.len()],
                };
                start += fraction;
                slice
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_clamp() {
        let s = TopicSettings::new(0, 9);
        assert_eq!(s.num_topics(), 1);
        assert_eq!(s.num_words(), 5);
        assert_eq!(s.with_topics(3).num_topics(), 3);
    }

    #[test]
    fn test_parse_topics_array_and_object() {
        assert_eq!(
            parse_key_topics(json!(["pricing", "refunds"])).unwrap(),
            vec!["pricing", "refunds"]
        );
        assert_eq!(
            parse_key_topics(json!({"0": "pricing", "1": 3})).unwrap(),
            vec!["pricing", "3"]
        );
        assert!(parse_key_topics(json!("nope")).is_err());
    }

    #[test]
    fn test_parse_topics_object_numeric_key_order() {
        let topics = parse_key_topics(json!({
            "10": "shipping",
            "2": "refunds",
            "0": "pricing",
            "extra": "misc"
        }))
        .unwrap();
        assert_eq!(topics, vec!["pricing", "refunds", "shipping", "misc"]);
    }

    #[test]
    fn test_carousel_placeholder_and_select() {
        let mut c = TopicCarousel::default();
        assert_eq!(c.slides(), vec![LOADING_SLIDE]);
        assert_eq!(c.current(), LOADING_SLIDE);

        c.set_slides(vec!["a".into(), "b".into()]);
        c.select(1);
        assert_eq!(c.current(), "b");
        c.select(7);
        assert_eq!(c.current_index(), 1);

        c.set_slides(vec!["x".into()]);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_slices_skip_zero_and_sum_to_one() {
        let dist = DataDistribution {
            png: 1,
            pdf: 2,
            mp4: 1,
            ..Default::default()
        };
        let slices = dist.slices();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].label, "PNG");
        assert_eq!(slices[1].label, "PDF");
        assert_eq!(slices[1].start, 0.25);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution_has_no_slices() {
        assert!(DataDistribution::default().slices().is_empty());
    }

    #[test]
    fn test_quarter_wedge_path() {
        let slice = PieSlice {
            label: "PNG",
            count: 1,
            fraction: 0.25,
            start: 0.0,
            color: "#000",
        };
        assert_eq!(
            slice.path(50.0, 50.0, 40.0),
            "M 50.00 50.00 L 50.00 10.00 A 40.00 40.00 0 0 1 90.00 50.00 Z"
        );
    }

    #[test]
    fn test_full_circle_path() {
        let dist = DataDistribution {
            pdf: 4,
            ..Default::default()
        };
        let path = dist.slices()[0].path(50.0, 50.0, 40.0);
        assert!(path.starts_with("M 50.00 10.00 A"));
    }
}
