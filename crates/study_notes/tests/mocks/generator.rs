use std::sync::{Arc, Mutex};
use study_notes::{NotesGenerator, NotesResponse};

#[derive(Clone)]
pub struct MockNotesGenerator {
    pub notes: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
    pub numbered: bool,
}

impl MockNotesGenerator {
    pub fn new(notes: &str) -> Self {
        Self {
            notes: notes.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            numbered: false,
        }
    }

    /// Appends the call number to each response so tests can tell
    /// regenerations apart.
    pub fn numbered(notes: &str) -> Self {
        Self {
            numbered: true,
            ..Self::new(notes)
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl NotesGenerator for MockNotesGenerator {
    const NOTES_MODEL: &'static str = "mock-gemini";
    type Error = anyhow::Error;

    async fn generate_notes(
        &self,
        instruction: &str,
        transcript: &str,
    ) -> Result<NotesResponse, Self::Error> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((instruction.to_string(), transcript.to_string()));
            calls.len()
        };
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let notes = if self.numbered {
            format!("{} #{call_number}", self.notes)
        } else {
            self.notes.clone()
        };
        Ok(NotesResponse { notes })
    }
}
