pub mod captions;

use std::{fmt::Debug, future::Future};

pub trait TranscriptSource {
    const WATCH_URL: &'static str;

    type Error: Debug;

    fn fetch_transcript(&self, video_id: &str) -> impl Future<Output = anyhow::Result<String>>;
}

/// A user-supplied YouTube video link.
///
/// The video id is whatever follows the final `=`, matching the lax parsing
/// users expect from pasting `watch?v=` links. No URL validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink(String);

impl VideoLink {
    pub fn new(link: impl Into<String>) -> Self {
        VideoLink(link.into())
    }

    pub fn video_id(&self) -> &str {
        self.0.rsplit('=').next().unwrap_or(&self.0)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("http://img.youtube.com/vi/{}/0.jpg", self.video_id())
    }
}

impl From<String> for VideoLink {
    fn from(value: String) -> Self {
        VideoLink(value)
    }
}
