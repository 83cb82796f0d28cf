use crate::record::Record;
use crate::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub type DocId = u32;

/// Rejected input detected while building an index. No recovery is
/// attempted; the caller decides whether to fix the store or abort.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("record at position {index} has no url")]
    MissingUrl { index: usize },
    #[error("duplicate url: {url}")]
    DuplicateUrl { url: String },
}

/// One ranked query match. `score` is the number of distinct query tokens
/// the record's title or excerpt contains.
#[derive(Debug)]
pub struct Hit<'a> {
    pub record: &'a Record,
    pub score: usize,
}

/// In-memory inverted index over a fixed sequence of records. Built once,
/// never mutated afterwards, so references can be shared freely across
/// threads.
#[derive(Debug)]
pub struct SearchIndex {
    records: Vec<Record>,
    // token -> doc ids in ascending insertion order, deduplicated
    postings: HashMap<String, Vec<DocId>>,
}

impl SearchIndex {
    /// Build an index over `records`, tokenizing each record's title and
    /// excerpt. Fails if any record has an empty url or a url already seen
    /// earlier in the sequence.
    pub fn build(records: Vec<Record>) -> Result<Self, ValidationError> {
        let mut seen_urls: HashSet<String> = HashSet::with_capacity(records.len());
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            if record.url.is_empty() {
                return Err(ValidationError::MissingUrl { index });
            }
            if !seen_urls.insert(record.url.clone()) {
                return Err(ValidationError::DuplicateUrl {
                    url: record.url.clone(),
                });
            }

            let doc_id = index as DocId;
            let mut seen_tokens: HashSet<String> = HashSet::new();
            for token in tokenize(&record.title)
                .into_iter()
                .chain(tokenize(&record.excerpt))
            {
                if seen_tokens.insert(token.clone()) {
                    postings.entry(token).or_default().push(doc_id);
                }
            }
        }

        tracing::debug!(
            num_records = records.len(),
            num_tokens = postings.len(),
            "index built"
        );
        Ok(Self { records, postings })
    }

    /// Rank records by the number of distinct query tokens they match,
    /// descending; ties keep the store's original order. An empty query or
    /// a query with no known tokens yields no hits.
    pub fn query_scored(&self, text: &str) -> Vec<Hit<'_>> {
        let tokens: HashSet<String> = tokenize(text).into_iter().collect();
        let mut scores: HashMap<DocId, usize> = HashMap::new();
        for token in &tokens {
            if let Some(doc_ids) = self.postings.get(token) {
                for &doc_id in doc_ids {
                    *scores.entry(doc_id).or_insert(0) += 1;
                }
            }
        }

        let mut scored: Vec<(DocId, usize)> = scores.into_iter().collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        scored
            .into_iter()
            .map(|(doc_id, score)| Hit {
                record: &self.records[doc_id as usize],
                score,
            })
            .collect()
    }

    /// Same ranking as [`query_scored`](Self::query_scored), records only.
    pub fn query(&self, text: &str) -> Vec<&Record> {
        self.query_scored(text)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct tokens in the inverted index.
    pub fn num_tokens(&self) -> usize {
        self.postings.len()
    }

    /// Indexed records in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
