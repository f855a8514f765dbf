use std::future::Future;

pub mod sqlite;

pub trait DataStore {
    fn get_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    fn insert_transcript(
        &self,
        video_id: &str,
        transcript: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: DataStore + Send + Sync> DataStore for &T {
    async fn get_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        (**self).get_transcript(video_id).await
    }

    async fn insert_transcript(&self, video_id: &str, transcript: &str) -> anyhow::Result<()> {
        (**self).insert_transcript(video_id, transcript).await
    }
}
