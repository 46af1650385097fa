use crate::config::GenerationConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(String);

impl SessionId {
    /// `gen_<unix millis>_<9 hex chars>`
    pub fn generate() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("gen_{}_{}", Utc::now().timestamp_millis(), &random[..9]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStage {
    Queued,
    Extracting,
    Analyzing,
    Synthesizing,
    Validating,
    Measuring,
    Assembling,
    Complete,
    Failed,
}

/// State of one in-flight generation
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub config: GenerationConfig,
    pub stage: GenerationStage,
}

/// In-flight generations keyed by session
#[derive(Debug, Default)]
pub(crate) struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, GenerationContext>>,
}

impl SessionRegistry {
    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GenerationContext>> {
        // Entries are plain data, so a poisoned map is still usable
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a session. It is removed when the returned guard drops.
    pub fn open(&self, config: &GenerationConfig) -> SessionGuard<'_> {
        let session_id = SessionId::generate();
        self.lock().insert(
            session_id.clone(),
            GenerationContext {
                session_id: session_id.clone(),
                started_at: Utc::now(),
                config: config.clone(),
                stage: GenerationStage::Queued,
            },
        );
        SessionGuard {
            registry: self,
            session_id,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn get(&self, session_id: &SessionId) -> Option<GenerationContext> {
        self.lock().get(session_id).cloned()
    }
}

pub(crate) struct SessionGuard<'a> {
    registry: &'a SessionRegistry,
    session_id: SessionId,
}

impl SessionGuard<'_> {
    pub fn id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn set_stage(&self, stage: GenerationStage) {
        if let Some(context) = self.registry.lock().get_mut(&self.session_id) {
            context.stage = stage;
        }
    }

    pub fn stage(&self) -> GenerationStage {
        self.registry
            .get(&self.session_id)
            .map_or(GenerationStage::Failed, |context| context.stage)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.registry.get(&self.session_id).map(|context| context.started_at)
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.session_id);
    }
}
