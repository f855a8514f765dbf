pub mod builder;

use anyhow::Context;
use image::RgbImage;
use transcript_store::DataStore;

use crate::{
    export,
    prompt::NotesPrompt,
    wordcloud::WordCloud,
    yt::{TranscriptSource, VideoLink},
    NotesGenerator, Summarizer,
};

// The per-session controller: wires transcript fetch, notes generation and
// the secondary conveniences together, and holds the latest notes/summary.
#[derive(Debug)]
pub struct NotesSession<D, T, G, S>
where
    D: DataStore + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: NotesGenerator + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    store: D,
    transcript_source: T,
    generator: G,
    summarizer: S,
    notes: Option<String>,
    summary: Option<String>,
}

impl<D, T, G, S> NotesSession<D, T, G, S>
where
    D: DataStore + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: NotesGenerator + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// Returns the transcript for the linked video, from the local cache when
    /// present, otherwise from the remote source (caching it on the way out).
    #[tracing::instrument(skip(self))]
    pub async fn load_transcript(&self, link: &VideoLink) -> anyhow::Result<String> {
        let video_id = link.video_id();

        if let Some(cached) = self
            .store
            .get_transcript(video_id)
            .await
            .context("Failed to look up cached transcript")?
        {
            tracing::debug!(%video_id, "Transcript cache hit");
            return Ok(cached);
        }

        let transcript = self
            .transcript_source
            .fetch_transcript(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, %video_id, "Failed to extract transcript"))
            .context("Failed to extract transcript")?;

        self.store
            .insert_transcript(video_id, &transcript)
            .await
            .context("Failed to cache transcript")?;

        Ok(transcript)
    }

    /// Fetches the transcript and generates subject-specific notes,
    /// overwriting any notes from an earlier generation.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn generate_notes(
        &mut self,
        link: &VideoLink,
        prompt: &NotesPrompt,
    ) -> anyhow::Result<&str> {
        let transcript = self.load_transcript(link).await?;

        let response = self
            .generator
            .generate_notes(prompt.instruction(), &transcript)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to generate notes: {e:?}"))?;

        Ok(self.notes.insert(response.notes))
    }

    /// Summarizes the current notes, overwriting any earlier summary.
    /// Refuses when no notes have been generated in this session.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(&mut self) -> anyhow::Result<&str> {
        let notes = self
            .notes
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No notes have been generated yet"))?;

        let response = self
            .summarizer
            .summarize(notes)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to summarize notes: {e:?}"))?;

        Ok(self.summary.insert(response.summary))
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Renders a word cloud over the current notes.
    pub fn wordcloud(&self, renderer: &WordCloud) -> anyhow::Result<RgbImage> {
        let notes = self.require_notes()?;
        Ok(renderer.generate(notes))
    }

    /// The current notes as a downloadable plain-text buffer.
    pub fn export_text(&self) -> anyhow::Result<Vec<u8>> {
        Ok(export::notes_to_text(self.require_notes()?))
    }

    /// The current notes as a downloadable paginated PDF.
    pub fn export_pdf(&self) -> anyhow::Result<Vec<u8>> {
        export::notes_to_pdf(self.require_notes()?)
    }

    fn require_notes(&self) -> anyhow::Result<&str> {
        self.notes
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No notes have been generated yet"))
    }
}
