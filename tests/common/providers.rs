//! Stub providers
//!
//! In-process implementations of the provider traits that count their calls and
//! record what they were given, so tests can assert on ordering and side effects.

use async_trait::async_trait;
use phrase_coach::core::providers::{
    AnalysisInput, Analyzer, ProviderError, TranscriptionInput, Transcriber,
};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a transcriber call observed
#[derive(Debug, Clone)]
pub struct SeenTranscription {
    pub input: TranscriptionInput,
    /// Whether the staged file existed at call time
    pub file_existed: bool,
    /// Staged file contents at call time
    pub contents: Vec<u8>,
}

pub struct StubTranscriber {
    configured: bool,
    result: Result<String, ProviderError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<SeenTranscription>>,
}

impl StubTranscriber {
    pub fn returning(text: &str) -> Self {
        Self {
            configured: true,
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(ProviderError::api("stub", 400, message)),
            ..Self::returning("")
        }
    }

    /// A transcriber with no credential
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::returning("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<SeenTranscription> {
        self.seen.lock().unwrap().clone()
    }

    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.seen().into_iter().map(|seen| seen.input.path).collect()
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn transcribe(&self, input: &TranscriptionInput) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let contents = std::fs::read(&input.path).unwrap_or_default();
        self.seen.lock().unwrap().push(SeenTranscription {
            input: input.clone(),
            file_existed: input.path.exists(),
            contents,
        });
        self.result.clone()
    }
}

pub struct StubAnalyzer {
    result: Result<String, ProviderError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<AnalysisInput>>,
}

impl StubAnalyzer {
    pub fn returning(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            result: Err(error),
            ..Self::returning("")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<AnalysisInput> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analyzer for StubAnalyzer {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn analyze(&self, input: &AnalysisInput) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(input.clone());
        self.result.clone()
    }
}
