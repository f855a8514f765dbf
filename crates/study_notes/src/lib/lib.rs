mod error;
mod llm;
pub mod export;
pub mod prompt;
pub mod session;
pub mod tracing;
pub mod wordcloud;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::{
    generator::{NotesGenerator, NotesResponse},
    summarizer::{Summarizer, SummaryResponse},
};
pub use session::{builder::NotesSessionBuilder, NotesSession};
