use std::{fmt::Debug, future::Future};

pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct SummaryResponse {
    pub summary: String,
}
