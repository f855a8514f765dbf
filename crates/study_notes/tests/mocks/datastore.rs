use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use transcript_store::DataStore;

#[derive(Clone)]
pub struct MockDataStore {
    pub cached: HashMap<String, String>,
    pub inserted: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl Default for MockDataStore {
    fn default() -> Self {
        Self {
            cached: HashMap::new(),
            inserted: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockDataStore {
    pub fn with_cached(video_id: &str, transcript: &str) -> Self {
        Self {
            cached: HashMap::from([(video_id.to_string(), transcript.to_string())]),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DataStore for MockDataStore {
    async fn get_transcript(&self, video_id: &str) -> anyhow::Result<Option<String>> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.cached.get(video_id).cloned())
    }

    async fn insert_transcript(&self, video_id: &str, transcript: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.inserted
            .lock()
            .unwrap()
            .push((video_id.to_string(), transcript.to_string()));
        Ok(())
    }
}
