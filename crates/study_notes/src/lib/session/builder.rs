use transcript_store::DataStore;

use crate::{yt::TranscriptSource, NotesGenerator, NotesSession, Summarizer};

pub struct NotesSessionBuilder<D = (), T = (), G = (), S = ()> {
    store: D,
    transcript_source: T,
    generator: G,
    summarizer: S,
}

impl NotesSessionBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            store: (),
            transcript_source: (),
            generator: (),
            summarizer: (),
        }
    }
}

impl<D, T, G, S> NotesSessionBuilder<D, T, G, S> {
    pub fn store<D2: DataStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> NotesSessionBuilder<D2, T, G, S> {
        NotesSessionBuilder {
            store,
            transcript_source: self.transcript_source,
            generator: self.generator,
            summarizer: self.summarizer,
        }
    }

    pub fn transcript_source<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcript_source: T2,
    ) -> NotesSessionBuilder<D, T2, G, S> {
        NotesSessionBuilder {
            store: self.store,
            transcript_source,
            generator: self.generator,
            summarizer: self.summarizer,
        }
    }

    pub fn generator<G2: NotesGenerator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> NotesSessionBuilder<D, T, G2, S> {
        NotesSessionBuilder {
            store: self.store,
            transcript_source: self.transcript_source,
            generator,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> NotesSessionBuilder<D, T, G, S2> {
        NotesSessionBuilder {
            store: self.store,
            transcript_source: self.transcript_source,
            generator: self.generator,
            summarizer,
        }
    }
}

impl<D, T, G, S> NotesSessionBuilder<D, T, G, S>
where
    D: DataStore + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    G: NotesGenerator + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> NotesSession<D, T, G, S> {
        NotesSession {
            store: self.store,
            transcript_source: self.transcript_source,
            generator: self.generator,
            summarizer: self.summarizer,
            notes: None,
            summary: None,
        }
    }
}
