//! Resolving detections into non-overlapping text segments
//!
//! Spans are found by searching for each detection's literal value rather
//! than trusting match offsets, so externally suggested detections (which
//! carry no offsets) resolve the same way as pattern matches.

use crate::anonymization::anonymizer::Redactor;
use crate::anonymization::config::RedactionOptions;
use crate::anonymization::models::Detection;

/// An accepted match of a detection's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset into the normalized text
    pub start: usize,
    /// Exclusive byte offset
    pub end: usize,
    /// Index into [`Segmentation::detections`]
    pub detection: usize,
    /// Replacement computed for the detection
    pub replacement: String,
}

/// One piece of a segmented text
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Unflagged text between detections
    Text { start: usize, end: usize, text: &'a str },
    /// A flagged span
    Detection {
        start: usize,
        end: usize,
        original: &'a str,
        replacement: &'a str,
        detection: &'a Detection,
    },
}

impl<'a> Segment<'a> {
    /// Text to render, honoring `show_redacted` for detection segments
    pub fn display(&self, show_redacted: bool) -> &'a str {
        match self {
            Segment::Text { text, .. } => *text,
            Segment::Detection {
                original,
                replacement,
                detection,
                ..
            } => {
                if show_redacted && detection.enabled {
                    *replacement
                } else {
                    *original
                }
            }
        }
    }

    pub fn is_detection(&self) -> bool {
        matches!(self, Segment::Detection { .. })
    }
}

/// Text plus its resolved, ordered spans
#[derive(Debug, Clone)]
pub struct Segmentation {
    text: String,
    detections: Vec<Detection>,
    spans: Vec<Span>,
}

impl Segmentation {
    /// Resolve `detections` over `text` with the longest-match preference
    pub fn resolve(text: &str, detections: &[Detection], redactor: &Redactor) -> Self {
        let mut order: Vec<usize> = (0..detections.len())
            .filter(|&i| detections[i].char_len() >= 2)
            .collect();
        order.sort_by(|&a, &b| detections[b].char_len().cmp(&detections[a].char_len()));

        let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
        for &i in &order {
            let value = detections[i].value.as_str();
            for (start, matched) in text.match_indices(value) {
                candidates.push((start, start + matched.len(), i));
            }
        }
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then((b.1 - b.0).cmp(&(a.1 - a.0))));

        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, end, i) in candidates {
            if start < cursor {
                continue;
            }
            spans.push(Span {
                start,
                end,
                detection: i,
                replacement: redactor.replacement(&detections[i]),
            });
            cursor = end;
        }

        Self {
            text: text.to_string(),
            detections: detections.to_vec(),
            spans,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Fresh iterator over the segments; may be called any number of times
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            segmentation: self,
            offset: 0,
            next_span: 0,
        }
    }

    /// Concatenate all segments
    pub fn render(&self, show_redacted: bool) -> String {
        self.segments().map(|s| s.display(show_redacted)).collect()
    }
}

/// Lazy iterator over a [`Segmentation`]
pub struct Segments<'a> {
    segmentation: &'a Segmentation,
    offset: usize,
    next_span: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let seg = self.segmentation;
        let text = seg.text.as_str();

        match seg.spans.get(self.next_span) {
            Some(span) if span.start > self.offset => {
                let start = self.offset;
                self.offset = span.start;
                Some(Segment::Text {
                    start,
                    end: span.start,
                    text: &text[start..span.start],
                })
            }
            Some(span) => {
                self.next_span += 1;
                self.offset = span.end;
                Some(Segment::Detection {
                    start: span.start,
                    end: span.end,
                    original: &text[span.start..span.end],
                    replacement: &span.replacement,
                    detection: &seg.detections[span.detection],
                })
            }
            None if self.offset < text.len() => {
                let start = self.offset;
                self.offset = text.len();
                Some(Segment::Text {
                    start,
                    end: text.len(),
                    text: &text[start..],
                })
            }
            None => None,
        }
    }
}

/// Segment `text` for rendering under `options`
pub fn resolve_segments(text: &str, detections: &[Detection], options: &RedactionOptions) -> Segmentation {
    let redactor = Redactor::for_text(text, options);
    Segmentation::resolve(text, detections, &redactor)
}
