//! The query pipeline — extraction, matching, generation, reconciliation.
//!
//! All state is request-scoped; the pipeline itself holds only read-only
//! collaborators and can be shared freely across concurrent requests.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::extract::{Intent, QueryExtractor};
use crate::finalize::finalize_response;
use crate::format::{fallback_response, format_properties, no_results_response};
use crate::generation::{GenerationParams, TextGenerator};
use crate::locations::LocationTable;
use crate::matching::filter_records;
use crate::records::PropertyRecord;
use crate::retrieval::{RetrievalError, Retriever};

/// Fixed greeting responses; one is chosen uniformly at random.
pub const GREETING_RESPONSES: [&str; 4] = [
    "👋 Hi there! Ready to find your dream home?",
    "🏡 Welcome! Let's explore properties together!",
    "🌟 Good day! How can I assist with your home search?",
    "🤝 Hello! Ready to start your property journey?",
];

/// Build the fixed instruction prompt embedding the query and the
/// formatted property summary.
pub fn build_prompt(query: &str, summary: &str) -> String {
    format!(
        "[INST]\n\
         <<SYS>>\n\
         You are a real estate expert. Follow STRICT rules:\n\
         1. List ALL properties from <PROPERTIES> exactly\n\
         2. Use numbering with 🏡 emoji\n\
         3. Preserve prices/sizes exactly\n\
         4. Add ONE follow-up question\n\
         5. Never invent properties\n\
         <</SYS>>\n\
         \n\
         QUERY: {query}\n\
         \n\
         PROPERTIES:\n\
         {summary}\n\
         \n\
         Generate helpful response:[/INST]"
    )
}

/// The result-curation pipeline.
///
/// Owns the compiled extractor, the location table, and the generation
/// collaborator. Construct once and share.
pub struct Pipeline {
    extractor: QueryExtractor,
    locations: LocationTable,
    generator: Arc<dyn TextGenerator>,
    params: GenerationParams,
}

impl Pipeline {
    /// Create a pipeline around a text-generation collaborator.
    pub fn new(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self {
            extractor: QueryExtractor::new(),
            locations: LocationTable::default(),
            generator,
            params,
        }
    }

    /// Produce the response text for a query over retrieved records.
    ///
    /// Greeting queries short-circuit with a random canned greeting; an
    /// empty match set yields the deterministic no-results message;
    /// generation failure degrades to the deterministic fallback. This
    /// never fails.
    pub async fn respond(&self, query: &str, records: &[PropertyRecord]) -> String {
        self.respond_with_picker(query, records, |len| rand::thread_rng().gen_range(0..len))
            .await
    }

    /// [`respond`](Self::respond) with an injectable greeting picker, so
    /// tests can pin the random choice.
    pub async fn respond_with_picker(
        &self,
        query: &str,
        records: &[PropertyRecord],
        pick: impl FnOnce(usize) -> usize,
    ) -> String {
        let intent = self.extractor.intent(query, &self.locations);
        if intent.is_greeting {
            let index = pick(GREETING_RESPONSES.len()) % GREETING_RESPONSES.len();
            return GREETING_RESPONSES[index].to_owned();
        }

        let filtered = filter_records(records, &intent, &self.locations);
        info!(
            bedrooms = ?intent.bedrooms,
            location = ?intent.location,
            matched = filtered.len(),
            total = records.len(),
            "filtered candidate records"
        );
        if filtered.is_empty() {
            return no_results_response(&intent);
        }

        let summary = format_properties(&filtered);
        let prompt = build_prompt(query, &summary);
        match self.generator.generate(&prompt, &self.params).await {
            Ok(raw) => finalize_response(&raw, &filtered),
            Err(e) => {
                warn!(error = %e, "generation failed, using deterministic fallback");
                fallback_response(&summary)
            }
        }
    }

    /// Extract intent only — exposed for diagnostics and tests.
    pub fn intent(&self, query: &str) -> Intent {
        self.extractor.intent(query, &self.locations)
    }
}

/// Outcome of one search request.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Final response text for the user.
    pub llm_response: String,
    /// The retrieved records, as returned to the caller.
    pub results: Vec<PropertyRecord>,
}

/// Request-facing service: retrieval plus the curation pipeline.
pub struct SearchService {
    retriever: Arc<dyn Retriever>,
    pipeline: Pipeline,
}

impl SearchService {
    /// Create the service from its collaborators.
    pub fn new(retriever: Arc<dyn Retriever>, pipeline: Pipeline) -> Self {
        Self {
            retriever,
            pipeline,
        }
    }

    /// Run one search request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] only for the retrieval path; generation
    /// failures are absorbed by the pipeline's fallback.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, RetrievalError> {
        let hits = self.retriever.search(query).await?;
        let records: Vec<PropertyRecord> = hits
            .iter()
            .map(|hit| PropertyRecord::from_payload(hit.id.clone(), Some(hit.score), &hit.payload))
            .collect();

        let llm_response = self.pipeline.respond(query, &records).await;
        Ok(SearchOutcome {
            llm_response,
            results: records,
        })
    }
}
