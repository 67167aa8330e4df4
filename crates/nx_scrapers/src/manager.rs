use std::sync::Arc;
use std::time::Duration;
use nx_core::{
    ContentStorage, Error, ProcessingResult, ProcessingStep, ProcessorState, Result,
    Summarizer, SummaryStorage, Translator,
};
use nx_storage::Storage;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::sleep;
use crate::logging::Logger;
use crate::scrapers::{validate_url, Scraper, SimulatedScraper, INVALID_URL_MESSAGE};

/// Pause inserted before each stage so progress is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDelays {
    pub scraping: Duration,
    pub summarizing: Duration,
    pub translating: Duration,
    pub saving: Duration,
}

impl StepDelays {
    pub fn none() -> Self {
        Self {
            scraping: Duration::ZERO,
            summarizing: Duration::ZERO,
            translating: Duration::ZERO,
            saving: Duration::ZERO,
        }
    }

    pub fn for_step(&self, step: ProcessingStep) -> Duration {
        match step {
            ProcessingStep::Scraping => self.scraping,
            ProcessingStep::Summarizing => self.summarizing,
            ProcessingStep::Translating => self.translating,
            ProcessingStep::Saving => self.saving,
            _ => Duration::ZERO,
        }
    }
}

impl Default for StepDelays {
    fn default() -> Self {
        Self {
            scraping: Duration::from_millis(1500),
            summarizing: Duration::from_millis(1200),
            translating: Duration::from_millis(1000),
            saving: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub step_delays: StepDelays,
    /// When false every stand-in service answers immediately
    pub simulate_latency: bool,
    pub inference: nx_inference::Config,
    pub storage: String,
}

impl PipelineConfig {
    /// No pauses anywhere; what tests and `--no-delay` use
    pub fn immediate() -> Self {
        Self {
            step_delays: StepDelays::none(),
            simulate_latency: false,
            inference: nx_inference::Config {
                simulate_latency: false,
                ..nx_inference::Config::default()
            },
            storage: "memory".to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            step_delays: StepDelays::default(),
            simulate_latency: true,
            inference: nx_inference::Config::default(),
            storage: "memory".to_string(),
        }
    }
}

/// Marks the run as cancelled if `submit` is dropped before it finishes.
struct RunGuard<'a> {
    state: &'a watch::Sender<ProcessorState>,
    finished: bool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.state.send_modify(|s| {
                s.is_processing = false;
                s.step = ProcessingStep::Error;
                s.results = None;
                s.error = Some("Processing cancelled".to_string());
            });
        }
    }
}

/// Runs scrape → summarize → translate → save for one URL at a time and
/// publishes every state change on a watch channel.
pub struct ContentProcessor {
    scraper: Arc<dyn Scraper>,
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
    storage: Arc<dyn Storage>,
    step_delays: StepDelays,
    state: watch::Sender<ProcessorState>,
    logger: Logger,
}

impl ContentProcessor {
    pub fn new(
        scraper: Arc<dyn Scraper>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
        storage: Arc<dyn Storage>,
        step_delays: StepDelays,
    ) -> Self {
        let (state, _) = watch::channel(ProcessorState::default());
        Self {
            scraper,
            summarizer,
            translator,
            storage,
            step_delays,
            state,
            logger: Logger::new().with_prefix("[pipeline]".to_string()),
        }
    }

    /// Wire the simulated scraper with the summarizer, translator and storage named in `config`
    pub async fn from_config(config: PipelineConfig) -> Result<Self> {
        let scraper = if config.simulate_latency {
            SimulatedScraper::new()
        } else {
            SimulatedScraper::with_latency(Duration::ZERO)
        };
        let summarizer = nx_inference::create_model(Some(config.inference.clone()))?;
        let translator = nx_inference::create_translator(Some(config.inference.clone()))?;
        let storage = nx_storage::create_storage(&config.storage, config.simulate_latency).await?;

        let metadata = scraper.source_metadata();
        tracing::info!("{} Scraper initialized: {}", metadata.emoji, metadata.name);

        Ok(Self::new(
            Arc::new(scraper),
            summarizer,
            translator,
            storage,
            config.step_delays,
        ))
    }

    pub fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    /// Snapshot of the current view state
    pub fn state(&self) -> ProcessorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProcessorState> {
        self.state.subscribe()
    }

    /// Clear the form. Refused while a run is in flight.
    pub fn reset(&self) -> Result<ProcessorState> {
        let mut reset = false;
        self.state.send_if_modified(|s| {
            if s.is_processing {
                return false;
            }
            *s = ProcessorState::default();
            reset = true;
            true
        });
        if !reset {
            return Err(Error::Busy);
        }
        self.logger.debug("🧹 State reset");
        Ok(self.state())
    }

    /// Validate `url` and run the whole pipeline on it.
    ///
    /// An invalid URL only sets the error message, and only when idle. Any
    /// submit while a run is in flight leaves the state alone; a valid URL is
    /// rejected with [`Error::Busy`].
    pub async fn submit(&self, url: &str) -> Result<ProcessingResult> {
        if !validate_url(url) {
            self.state.send_if_modified(|s| {
                if s.is_processing {
                    return false;
                }
                s.url = url.to_string();
                s.error = Some(INVALID_URL_MESSAGE.to_string());
                true
            });
            self.logger.warn(&format!("⚠️ Rejected URL {:?}", url));
            return Err(Error::InvalidUrl(INVALID_URL_MESSAGE.to_string()));
        }

        let mut started = false;
        self.state.send_if_modified(|s| {
            if s.is_processing {
                return false;
            }
            s.url = url.to_string();
            s.is_processing = true;
            s.error = None;
            s.results = None;
            started = true;
            true
        });
        if !started {
            return Err(Error::Busy);
        }

        let mut guard = RunGuard {
            state: &self.state,
            finished: false,
        };
        let outcome = self.run(url).await;
        guard.finished = true;

        match outcome {
            Ok(result) => {
                self.state.send_modify(|s| {
                    s.results = Some(result.clone());
                    s.error = None;
                    s.step = ProcessingStep::Completed;
                    s.is_processing = false;
                });
                self.logger.info(&format!("✅ Processing completed: {}", result.original_content.title));
                Ok(result)
            }
            Err(e) => {
                let message = e.to_string();
                self.state.send_modify(|s| {
                    s.error = Some(message.clone());
                    s.step = ProcessingStep::Error;
                    s.results = None;
                    s.is_processing = false;
                });
                self.logger.error(&format!("❌ Processing failed: {}", message));
                Err(e)
            }
        }
    }

    async fn enter(&self, step: ProcessingStep) -> Logger {
        self.state.send_modify(|s| s.step = step);
        let logger = self.logger.clone().with_prefix(format!("[{}]", step));
        logger.info(&format!("{} Starting", step.emoji()));
        sleep(self.step_delays.for_step(step)).await;
        logger
    }

    async fn run(&self, url: &str) -> Result<ProcessingResult> {
        let logger = self.enter(ProcessingStep::Scraping).await;
        let content = self.scraper.scrape(url).await?;
        logger.info(&format!("✨ Scraped {:?} ({} words)", content.title, content.metadata.word_count));

        let logger = self.enter(ProcessingStep::Summarizing).await;
        let summary = self.summarizer.summarize(&content).await?;
        logger.info(&format!("✨ Summary generated with {}: {}", self.summarizer.name(), summary));

        let logger = self.enter(ProcessingStep::Translating).await;
        let urdu_summary = self.translator.translate(&summary).await?;
        logger.info(&format!("✨ Translated with {}: {}", self.translator.name(), urdu_summary));

        let logger = self.enter(ProcessingStep::Saving).await;
        let supabase_id = self.storage.save_summary(&summary, &urdu_summary).await?;
        let mongo_id = self.storage.save_content(&content).await?;
        logger.info(&format!("✨ Stored summary {} and content {}", supabase_id, mongo_id));

        Ok(ProcessingResult {
            original_content: content,
            summary,
            urdu_summary,
            supabase_id,
            mongo_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nx_core::{BlogContent, StoredContent, StoredSummary};
    use nx_storage::{MemoryConfig, MemoryStorage};
    use std::sync::{Mutex, OnceLock};
    use tokio::sync::Notify;

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        fn name(&self) -> &str {
            "failing"
        }

        async fn summarize(&self, _content: &BlogContent) -> Result<String> {
            Err(Error::Inference("model unavailable".to_string()))
        }
    }

    /// Blocks until released so a run can be observed mid-flight
    struct GatedSummarizer {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl Summarizer for GatedSummarizer {
        fn name(&self) -> &str {
            "gated"
        }

        async fn summarize(&self, _content: &BlogContent) -> Result<String> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok("Gated summary.".to_string())
        }
    }

    /// Notes which step the processor was in each time a stage service is called
    #[derive(Default)]
    struct StepRecorder {
        state: OnceLock<watch::Receiver<ProcessorState>>,
        calls: Mutex<Vec<(&'static str, ProcessingStep)>>,
    }

    impl StepRecorder {
        fn record(&self, call: &'static str) {
            let step = self
                .state
                .get()
                .map(|rx| rx.borrow().step)
                .unwrap_or_default();
            self.calls.lock().unwrap().push((call, step));
        }

        fn calls(&self) -> Vec<(&'static str, ProcessingStep)> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct Recording<T> {
        inner: T,
        recorder: Arc<StepRecorder>,
    }

    #[async_trait]
    impl Scraper for Recording<SimulatedScraper> {
        fn source_metadata(&self) -> crate::scrapers::SourceMetadata {
            self.inner.source_metadata()
        }

        fn can_handle(&self, url: &str) -> bool {
            self.inner.can_handle(url)
        }

        async fn scrape(&self, url: &str) -> Result<BlogContent> {
            self.recorder.record("scrape");
            self.inner.scrape(url).await
        }
    }

    #[async_trait]
    impl Summarizer for Recording<Arc<dyn Summarizer>> {
        fn name(&self) -> &str {
            self.inner.name()
        }

        async fn summarize(&self, content: &BlogContent) -> Result<String> {
            self.recorder.record("summarize");
            self.inner.summarize(content).await
        }
    }

    #[async_trait]
    impl Translator for Recording<Arc<dyn Translator>> {
        fn name(&self) -> &str {
            self.inner.name()
        }

        async fn translate(&self, text: &str) -> Result<String> {
            self.recorder.record("translate");
            self.inner.translate(text).await
        }
    }

    #[async_trait]
    impl SummaryStorage for Recording<MemoryStorage> {
        async fn save_summary(&self, summary: &str, urdu_summary: &str) -> Result<String> {
            self.recorder.record("save_summary");
            self.inner.save_summary(summary, urdu_summary).await
        }

        async fn get_summary(&self, id: &str) -> Result<Option<StoredSummary>> {
            self.inner.get_summary(id).await
        }
    }

    #[async_trait]
    impl ContentStorage for Recording<MemoryStorage> {
        async fn save_content(&self, content: &BlogContent) -> Result<String> {
            self.recorder.record("save_content");
            self.inner.save_content(content).await
        }

        async fn get_content(&self, id: &str) -> Result<Option<StoredContent>> {
            self.inner.get_content(id).await
        }
    }

    fn processor_with(summarizer: Arc<dyn Summarizer>) -> ContentProcessor {
        let config = PipelineConfig::immediate();
        ContentProcessor::new(
            Arc::new(SimulatedScraper::with_latency(Duration::ZERO)),
            summarizer,
            nx_inference::create_translator(Some(config.inference.clone())).unwrap(),
            Arc::new(MemoryStorage::with_config(MemoryConfig::new().without_latency())),
            config.step_delays,
        )
    }

    #[tokio::test]
    async fn test_full_run() {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        let result = processor.submit("https://example.com/blog-post").await.unwrap();

        assert_eq!(result.original_content.url, "https://example.com/blog-post");
        assert!(!result.summary.is_empty());
        assert!(result.summary.ends_with('.'));
        assert!(!result.urdu_summary.is_empty());
        assert!(result.supabase_id.starts_with("sb_"));
        assert!(result.mongo_id.starts_with("mongo_"));

        let state = processor.state();
        assert_eq!(state.step, ProcessingStep::Completed);
        assert!(!state.is_processing);
        assert!(state.error.is_none());
        assert_eq!(state.results, Some(result.clone()));

        let storage = processor.storage();
        let stored = storage.get_summary(&result.supabase_id).await.unwrap().unwrap();
        assert_eq!(stored.urdu_summary, result.urdu_summary);
        let stored = storage.get_content(&result.mongo_id).await.unwrap().unwrap();
        assert_eq!(stored.content, result.original_content);
    }

    #[tokio::test]
    async fn test_summary_of_canned_post() {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        let result = processor.submit("https://example.com/blog-post").await.unwrap();
        // Highest scoring fragment mentions SSR, SSG and performance
        assert!(result
            .summary
            .starts_with("Server-side rendering (SSR) and static site generation (SSG)"));
        assert!(result.summary.matches(". ").count() <= 2);
    }

    #[tokio::test]
    async fn test_invalid_url_only_sets_error() {
        let processor = processor_with(Arc::new(FailingSummarizer));
        let err = processor.submit("not-a-url").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let state = processor.state();
        assert_eq!(state.step, ProcessingStep::Idle);
        assert!(!state.is_processing);
        assert_eq!(state.error.as_deref(), Some(INVALID_URL_MESSAGE));
    }

    #[tokio::test]
    async fn test_stage_failure_moves_to_error() {
        let processor = processor_with(Arc::new(FailingSummarizer));
        let err = processor.submit("https://example.com").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));

        let state = processor.state();
        assert_eq!(state.step, ProcessingStep::Error);
        assert!(!state.is_processing);
        assert!(state.results.is_none());
        assert_eq!(state.error.as_deref(), Some("Inference error: model unavailable"));
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        processor.submit("https://example.com").await.unwrap();

        let state = processor.reset().unwrap();
        assert_eq!(state, ProcessorState::default());
    }

    #[tokio::test]
    async fn test_second_submit_is_rejected_while_busy() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let processor = Arc::new(processor_with(Arc::new(GatedSummarizer {
            entered: entered.clone(),
            release: release.clone(),
        })));

        let first = {
            let processor = processor.clone();
            tokio::spawn(async move { processor.submit("https://example.com/first").await })
        };
        entered.notified().await;

        let state = processor.state();
        assert!(state.is_processing);
        assert_eq!(state.step, ProcessingStep::Summarizing);
        assert_eq!(state.url, "https://example.com/first");

        assert!(matches!(processor.submit("https://example.com/second").await, Err(Error::Busy)));
        assert!(matches!(processor.reset(), Err(Error::Busy)));
        assert_eq!(processor.state().url, "https://example.com/first");

        release.notify_one();
        let result = first.await.unwrap().unwrap();
        assert_eq!(result.summary, "Gated summary.");
        assert_eq!(processor.state().step, ProcessingStep::Completed);
    }

    #[tokio::test]
    async fn test_dropped_run_is_marked_cancelled() {
        let entered = Arc::new(Notify::new());
        let processor = Arc::new(processor_with(Arc::new(GatedSummarizer {
            entered: entered.clone(),
            release: Arc::new(Notify::new()),
        })));

        let run = {
            let processor = processor.clone();
            tokio::spawn(async move { processor.submit("https://example.com").await })
        };
        entered.notified().await;
        run.abort();
        let _ = run.await;

        let state = processor.state();
        assert!(!state.is_processing);
        assert_eq!(state.step, ProcessingStep::Error);
        assert_eq!(state.error.as_deref(), Some("Processing cancelled"));
    }

    #[tokio::test]
    async fn test_subscribers_see_completion() {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        let mut rx = processor.subscribe();
        let seen = tokio::spawn(async move {
            let mut steps = Vec::new();
            while rx.changed().await.is_ok() {
                let step = rx.borrow_and_update().step;
                if steps.last() != Some(&step) {
                    steps.push(step);
                }
                if step == ProcessingStep::Completed {
                    break;
                }
            }
            steps
        });

        processor.submit("https://example.com").await.unwrap();
        let steps = seen.await.unwrap();
        assert_eq!(steps.last(), Some(&ProcessingStep::Completed));
        assert!(!steps.contains(&ProcessingStep::Error));
    }

    #[tokio::test]
    async fn test_stages_run_in_order() {
        let config = PipelineConfig::immediate();
        let recorder = Arc::new(StepRecorder::default());
        let processor = ContentProcessor::new(
            Arc::new(Recording {
                inner: SimulatedScraper::with_latency(Duration::ZERO),
                recorder: recorder.clone(),
            }),
            Arc::new(Recording {
                inner: nx_inference::create_model(Some(config.inference.clone())).unwrap(),
                recorder: recorder.clone(),
            }),
            Arc::new(Recording {
                inner: nx_inference::create_translator(Some(config.inference.clone())).unwrap(),
                recorder: recorder.clone(),
            }),
            Arc::new(Recording {
                inner: MemoryStorage::with_config(MemoryConfig::new().without_latency()),
                recorder: recorder.clone(),
            }),
            config.step_delays,
        );
        assert!(recorder.state.set(processor.subscribe()).is_ok());

        processor.submit("https://example.com/blog-post").await.unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                ("scrape", ProcessingStep::Scraping),
                ("summarize", ProcessingStep::Summarizing),
                ("translate", ProcessingStep::Translating),
                ("save_summary", ProcessingStep::Saving),
                ("save_content", ProcessingStep::Saving),
            ]
        );
        assert_eq!(processor.state().step, ProcessingStep::Completed);
    }

    #[tokio::test]
    async fn test_invalid_url_during_run_leaves_state_alone() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let processor = Arc::new(processor_with(Arc::new(GatedSummarizer {
            entered: entered.clone(),
            release: release.clone(),
        })));

        let first = {
            let processor = processor.clone();
            tokio::spawn(async move { processor.submit("https://example.com/first").await })
        };
        entered.notified().await;

        let before = processor.state();
        assert!(matches!(processor.submit("not-a-url").await, Err(Error::InvalidUrl(_))));
        assert_eq!(processor.state(), before);

        release.notify_one();
        first.await.unwrap().unwrap();

        let state = processor.state();
        assert_eq!(state.step, ProcessingStep::Completed);
        assert_eq!(state.url, "https://example.com/first");
        assert!(state.results.is_some());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_success_clears_earlier_error() {
        let processor = ContentProcessor::from_config(PipelineConfig::immediate()).await.unwrap();
        assert!(processor.submit("ftp://example.com").await.is_err());
        assert!(processor.state().error.is_some());

        processor.submit("https://example.com").await.unwrap();
        assert!(processor.state().error.is_none());
    }
}
