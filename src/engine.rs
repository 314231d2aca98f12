//! The classification engine: one explicit instance owning the variant
//! index, the configuration, and the results of the latest batch run.
//!
//! Mutating the index takes `&mut self` and matching takes `&self`, so a run
//! can never observe a half-applied mutation. Share an engine across threads
//! with `std::sync::RwLock<Classifier>`.

use crate::core::{BatchResults, CategoryDefinitions, Diagnostic, MatchCandidate, Report};
use crate::error::{MatchError, Result};
use crate::index::VariantIndex;
use crate::matching::config::validate_limit;
use crate::matching::{BatchRunner, CancelToken, CategoryMatcher, MatcherConfig};
use crate::report::ReportGenerator;
use crate::{log_error, span_trace};
use std::fmt;
use tracing::{info, warn};

/// Callback receiving every diagnostic the engine emits.
pub type DiagnosticHook = Box<dyn Fn(&Diagnostic) + Send + Sync>;

pub struct Classifier {
    index: VariantIndex,
    config: MatcherConfig,
    results: Option<BatchResults>,
    hook: Option<DiagnosticHook>,
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("index", &self.index)
            .field("config", &self.config)
            .field("results", &self.results.as_ref().map(BatchResults::len))
            .finish_non_exhaustive()
    }
}

impl Classifier {
    pub fn new(definitions: &CategoryDefinitions, config: MatcherConfig) -> Result<Self> {
        config.validate().map_err(|e| log_error!(e))?;
        let index = VariantIndex::from_definitions(definitions).map_err(|e| log_error!(e))?;
        info!(
            categories = index.category_count(),
            variants = index.variant_count(),
            threshold = config.threshold,
            "Classifier ready"
        );
        Ok(Self {
            index,
            config,
            results: None,
            hook: None,
        })
    }

    /// Build from a JSON object of `{"category": ["variant", ...]}`.
    pub fn from_json_str(definitions: &str, config: MatcherConfig) -> Result<Self> {
        let defs = CategoryDefinitions::from_json_str(definitions).map_err(|e| log_error!(e))?;
        Self::new(&defs, config)
    }

    pub fn with_diagnostic_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Diagnostic) + Send + Sync + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn index(&self) -> &VariantIndex {
        &self.index
    }

    pub fn matcher(&self) -> CategoryMatcher<'_> {
        CategoryMatcher::new(&self.index, self.config.algo)
    }

    pub fn add_variants<S: AsRef<str>>(&mut self, category: &str, variants: &[S]) -> Result<usize> {
        let added = self
            .index
            .add_variants(category, variants)
            .map_err(|e| log_error!(e))?;
        info!(category, added, "Added variants");
        Ok(added)
    }

    /// Remove a category. Unknown names leave the index untouched, emit a
    /// `NotFound` diagnostic, and return false.
    pub fn remove_category(&mut self, category: &str) -> bool {
        if self.index.remove_category(category) {
            info!(category, "Removed category");
            true
        } else {
            self.emit(Diagnostic::not_found(category));
            false
        }
    }

    pub fn resolve(&self, variant: &str) -> Option<&str> {
        self.index.resolve(variant)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.index.categories().collect()
    }

    pub fn variants_of(&self, category: &str) -> Option<Vec<&str>> {
        self.index.variants_of(category)
    }

    /// Ranked candidates for one query using the configured limit.
    pub fn match_one(&self, query: &str) -> Vec<MatchCandidate> {
        self.matcher().match_one(query, self.config.limit)
    }

    pub fn match_one_with_limit(&self, query: &str, limit: usize) -> Result<Vec<MatchCandidate>> {
        validate_limit(limit).map_err(|e| log_error!(e))?;
        Ok(self.matcher().match_one(query, limit))
    }

    /// Run a batch with the configured limit and threshold. The results
    /// replace those of any previous run.
    pub fn run<S>(&mut self, queries: &[S]) -> Result<&BatchResults>
    where
        S: AsRef<str> + Sync,
    {
        let runner = BatchRunner::from_config(&self.config)?;
        self.execute(runner, queries, None)
    }

    pub fn run_with<S>(&mut self, queries: &[S], limit: usize, threshold: u8) -> Result<&BatchResults>
    where
        S: AsRef<str> + Sync,
    {
        let runner = BatchRunner::new(limit, threshold)
            .map_err(|e| log_error!(e))?
            .with_parallel_threshold(self.config.parallel_threshold);
        self.execute(runner, queries, None)
    }

    /// Cancellable run. On cancellation the previous results are kept.
    pub fn run_with_cancel<S>(&mut self, queries: &[S], cancel: &CancelToken) -> Result<&BatchResults>
    where
        S: AsRef<str> + Sync,
    {
        let runner = BatchRunner::from_config(&self.config)?;
        self.execute(runner, queries, Some(cancel))
    }

    /// Run over a JSON array of strings. Any other JSON shape is rejected.
    pub fn run_json(&mut self, queries: &str) -> Result<&BatchResults> {
        let queries: Vec<String> = serde_json::from_str(queries).map_err(|e| {
            log_error!(MatchError::contract(format!(
                "queries must be a JSON array of strings: {e}"
            )))
        })?;
        self.run(&queries)
    }

    /// Results of the latest successful run.
    pub fn results(&self) -> Option<&BatchResults> {
        self.results.as_ref()
    }

    /// Report on the latest run using the configured sample size and seed.
    pub fn report(&self) -> Report {
        self.report_with(self.config.sample_size)
    }

    pub fn report_with(&self, sample_size: usize) -> Report {
        match &self.results {
            Some(results) if !results.is_empty() => {
                ReportGenerator::new(self.config.seed).summarize(results, sample_size)
            }
            Some(results) => {
                self.emit(Diagnostic::degenerate("report requested over zero results"));
                Report::empty(results.threshold)
            }
            None => {
                self.emit(Diagnostic::degenerate("report requested before any batch run"));
                Report::empty(self.config.threshold)
            }
        }
    }

    fn execute<S>(
        &mut self,
        runner: BatchRunner,
        queries: &[S],
        cancel: Option<&CancelToken>,
    ) -> Result<&BatchResults>
    where
        S: AsRef<str> + Sync,
    {
        let span = span_trace!(
            "batch_run",
            queries = queries.len(),
            limit = runner.limit(),
            threshold = runner.threshold()
        );
        let _guard = span.enter();

        if self.index.is_empty() {
            self.emit(Diagnostic::degenerate(
                "matching against an empty variant universe",
            ));
        }
        if queries.is_empty() {
            self.emit(Diagnostic::degenerate("batch run with no queries"));
        }

        let matcher = CategoryMatcher::new(&self.index, self.config.algo);
        let batch = match cancel {
            Some(token) => runner
                .run_with_cancel(&matcher, queries, token)
                .map_err(|e| log_error!(e))?,
            None => runner.run(&matcher, queries),
        };
        info!(
            queries = batch.len(),
            unmatched = batch.unmatched_count(),
            "Batch run finished"
        );
        Ok(self.results.insert(batch))
    }

    fn emit(&self, diagnostic: Diagnostic) {
        warn!(kind = ?diagnostic.kind, "{}", diagnostic.message);
        if let Some(hook) = &self.hook {
            hook(&diagnostic);
        }
    }
}
