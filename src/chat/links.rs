//! Turns assistant text into plain text and clickable link spans.
//!
//! Links that point back into the app become in-app navigation targets;
//! everything else opens in a separate browsing context.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::config::LinkConfig;

/// `rel` attributes for links opened in a new browsing context, so the new
/// page gets no handle back to the opener.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is a valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanKind {
    Text,
    InternalLink,
    ExternalLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSpan {
    pub kind: SpanKind,
    pub content: String,
    /// In-app path for internal links, the literal URL for external ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl RenderSpan {
    pub fn text(content: &str) -> Self {
        Self {
            kind: SpanKind::Text,
            content: content.to_string(),
            target: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.kind != SpanKind::Text
    }

    pub fn rel(&self) -> Option<&'static str> {
        (self.kind == SpanKind::ExternalLink).then_some(EXTERNAL_LINK_REL)
    }
}

#[derive(Debug, Clone)]
pub struct LinkRenderer {
    local_origin: String,
    internal_paths: Vec<String>,
}

impl Default for LinkRenderer {
    fn default() -> Self {
        Self::from_config(&LinkConfig::default())
    }
}

impl LinkRenderer {
    pub fn new(local_origin: impl Into<String>, internal_paths: Vec<String>) -> Self {
        Self {
            local_origin: local_origin.into(),
            internal_paths: internal_paths
                .into_iter()
                .filter(|path| !path.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &LinkConfig) -> Self {
        Self::new(config.local_origin.clone(), config.internal_paths.clone())
    }

    /// Splits `text` into spans in their original order. Substrings are kept
    /// byte-for-byte; nothing is trimmed or decoded.
    pub fn render(&self, text: &str) -> Vec<RenderSpan> {
        let mut spans = Vec::new();
        let mut cursor = 0;

        for found in URL_PATTERN.find_iter(text) {
            if found.start() > cursor {
                spans.push(RenderSpan::text(&text[cursor..found.start()]));
            }
            spans.push(self.classify(found.as_str()));
            cursor = found.end();
        }

        if cursor < text.len() || spans.is_empty() {
            spans.push(RenderSpan::text(&text[cursor..]));
        }
        spans
    }

    fn classify(&self, candidate: &str) -> RenderSpan {
        let parsed = match Url::parse(candidate) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::debug!("Leaving unparsable link `{candidate}` as text: {err}");
                return RenderSpan::text(candidate);
            }
        };

        if self.is_internal(candidate) {
            RenderSpan {
                kind: SpanKind::InternalLink,
                content: candidate.to_string(),
                target: Some(self.internal_path(candidate, &parsed)),
            }
        } else {
            RenderSpan {
                kind: SpanKind::ExternalLink,
                content: candidate.to_string(),
                target: Some(candidate.to_string()),
            }
        }
    }

    fn is_internal(&self, candidate: &str) -> bool {
        self.has_local_origin(candidate)
            || self
                .internal_paths
                .iter()
                .any(|path| candidate.contains(path.as_str()))
    }

    fn has_local_origin(&self, candidate: &str) -> bool {
        !self.local_origin.is_empty() && candidate.contains(self.local_origin.as_str())
    }

    fn internal_path(&self, candidate: &str, parsed: &Url) -> String {
        let after_origin = if self.local_origin.is_empty() {
            None
        } else {
            candidate.split_once(self.local_origin.as_str())
        };

        match after_origin {
            Some((_, rest)) if rest.starts_with('/') => rest.to_string(),
            Some((_, rest)) => format!("/{rest}"),
            None => parsed.path().to_string(),
        }
    }
}
