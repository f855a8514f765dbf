pub mod datastore;
pub mod generator;
pub mod summarizer;
pub mod transcript_source;
