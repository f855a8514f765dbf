use std::{fmt::Debug, future::Future};

pub trait NotesGenerator {
    const NOTES_MODEL: &'static str;

    type Error: Debug;

    fn generate_notes(
        &self,
        instruction: &str,
        transcript: &str,
    ) -> impl Future<Output = Result<NotesResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct NotesResponse {
    pub notes: String,
}
