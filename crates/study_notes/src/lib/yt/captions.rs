//! # Caption scraping
//!
//! Fetches and parses caption data for a YouTube video: the watch page embeds
//! a `ytInitialPlayerResponse` object whose caption track list points at a
//! timedtext XML document holding the actual transcript text.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{error::Error, yt::TranscriptSource};

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap()
});

static TIMEDTEXT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap());

/// A single caption track advertised by the player response.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
    pub kind: Option<String>,
}

/// Parses the caption track list out of a `ytInitialPlayerResponse` object.
///
/// # Returns
/// * `Ok(Vec<CaptionTrack>)` containing all advertised tracks.
/// * `Err(Error)` if the video carries no caption data.
#[tracing::instrument(skip(json))]
pub fn parse_caption_tracks(json: &Value) -> Result<Vec<CaptionTrack>, Error> {
    let tracks = json["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"]
        .as_array()
        .ok_or(Error::ParseError(
            "No caption tracks found under ['captions']['playerCaptionsTracklistRenderer']",
        ))?;

    let tracks = tracks
        .iter()
        .cloned()
        .map(serde_json::from_value::<CaptionTrack>)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tracks)
}

/// Picks the track to transcribe from: a manually-authored English track if
/// present, otherwise any English track, otherwise the first one.
pub fn select_caption_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code.starts_with("en") && t.kind.as_deref() != Some("asr"))
        .or_else(|| tracks.iter().find(|t| t.language_code.starts_with("en")))
        .or_else(|| tracks.first())
}

/// Flattens a timedtext XML document into plain transcript text, preserving
/// caption order.
pub fn transcript_from_timedtext(xml: &str) -> String {
    let mut transcript = String::new();

    for cap in TIMEDTEXT_TAG_RE.captures_iter(xml) {
        let text = decode_entities(&cap[1]);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if !transcript.is_empty() {
            transcript.push(' ');
        }
        transcript.push_str(text);
    }

    transcript
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;#39;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub struct WatchPageDocument(String);

impl Deref for WatchPageDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl WatchPageDocument {
    pub fn new(doc: String) -> Self {
        WatchPageDocument(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(Error::ParseError(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }
}

impl From<String> for WatchPageDocument {
    fn from(value: String) -> Self {
        WatchPageDocument(value)
    }
}

/// Production transcript source backed by the public watch page.
#[derive(Default)]
pub struct CaptionScraper(pub reqwest::Client);

impl Deref for CaptionScraper {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TranscriptSource for CaptionScraper {
    const WATCH_URL: &'static str = "https://www.youtube.com/watch";

    type Error = anyhow::Error;

    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> anyhow::Result<String> {
        let watch_page = self
            .get(format!("{}?v={video_id}", Self::WATCH_URL))
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await?;

        let doc = WatchPageDocument::new(watch_page);
        let json = doc.to_json::<Value>()?;

        let tracks = parse_caption_tracks(&json)?;
        let track = select_caption_track(&tracks)
            .ok_or(Error::ParseError("Video has an empty caption track list"))?;

        let timedtext = self.get(&track.base_url).send().await?.text().await?;

        let transcript = transcript_from_timedtext(&timedtext);
        if transcript.is_empty() {
            return Err(Error::ParseError("Caption track contained no text").into());
        }

        Ok(transcript)
    }
}
