//! Okapi BM25 over an in-memory corpus.
//!
//! idf(t) = ln((N - df + 0.5) / (df + 0.5) + 1)
//! score(d, q) = Σ idf(t) · tf·(k1 + 1) / (tf + k1·(1 - b + b·|d|/avgdl))

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use attest_core::config::SparseConfig;
use attest_core::errors::AttestResult;
use attest_core::models::ScoredHit;
use attest_core::text::tokenize;
use attest_core::traits::ILexicalIndex;

struct IndexedDocument {
    hit: ScoredHit,
    term_freqs: HashMap<String, u32>,
    length: usize,
}

/// Corpus statistics, mostly for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Stats {
    pub documents: usize,
    pub terms: usize,
    pub avg_doc_len: f64,
}

/// Lexical index over each passage's title and content.
pub struct Bm25Index {
    k1: f64,
    b: f64,
    documents: Vec<IndexedDocument>,
    doc_freqs: HashMap<String, usize>,
    total_len: usize,
}

impl Default for Bm25Index {
    fn default() -> Self {
        Self::new(&SparseConfig::default())
    }
}

impl Bm25Index {
    pub fn new(config: &SparseConfig) -> Self {
        Self {
            k1: config.k1,
            b: config.b,
            documents: Vec::new(),
            doc_freqs: HashMap::new(),
            total_len: 0,
        }
    }

    /// Index a passage. A document with the same id is replaced.
    pub fn add(&mut self, hit: ScoredHit) {
        self.remove(&hit.id);

        let tokens = tokenize(&format!("{} {}", hit.document_title, hit.content));
        let mut term_freqs: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *term_freqs.entry(token.clone()).or_insert(0) += 1;
        }
        for term in term_freqs.keys() {
            *self.doc_freqs.entry(term.clone()).or_insert(0) += 1;
        }
        self.total_len += tokens.len();
        self.documents.push(IndexedDocument {
            hit,
            term_freqs,
            length: tokens.len(),
        });
    }

    /// Returns whether a document was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.documents.iter().position(|d| d.hit.id == id) else {
            return false;
        };
        let doc = self.documents.remove(pos);
        for term in doc.term_freqs.keys() {
            if let Some(df) = self.doc_freqs.get_mut(term) {
                *df -= 1;
                if *df == 0 {
                    self.doc_freqs.remove(term);
                }
            }
        }
        self.total_len -= doc.length;
        true
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn stats(&self) -> Bm25Stats {
        Bm25Stats {
            documents: self.documents.len(),
            terms: self.doc_freqs.len(),
            avg_doc_len: self.avg_doc_len(),
        }
    }

    fn avg_doc_len(&self) -> f64 {
        if self.documents.is_empty() {
            0.0
        } else {
            self.total_len as f64 / self.documents.len() as f64
        }
    }

    fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let df = self.doc_freqs.get(term).copied().unwrap_or(0) as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    fn score(&self, doc: &IndexedDocument, terms: &[String], avgdl: f64) -> f64 {
        let len_norm = if avgdl > 0.0 {
            1.0 - self.b + self.b * doc.length as f64 / avgdl
        } else {
            1.0
        };
        terms
            .iter()
            .filter_map(|t| doc.term_freqs.get(t).map(|tf| (t, *tf as f64)))
            .map(|(t, tf)| self.idf(t) * tf * (self.k1 + 1.0) / (tf + self.k1 * len_norm))
            .sum()
    }

    /// Synchronous ranking; ties keep insertion order.
    pub fn rank(&self, query: &str, k: usize) -> Vec<ScoredHit> {
        let mut seen = HashSet::new();
        let terms: Vec<String> = tokenize(query)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        if terms.is_empty() || k == 0 {
            return Vec::new();
        }

        let avgdl = self.avg_doc_len();
        let mut scored: Vec<(f64, &IndexedDocument)> = self
            .documents
            .iter()
            .map(|doc| (self.score(doc, &terms, avgdl), doc))
            .filter(|(score, _)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(k)
            .enumerate()
            .map(|(i, (score, doc))| doc.hit.clone().with_rank(i + 1).with_score(score))
            .collect()
    }
}

#[async_trait]
impl ILexicalIndex for Bm25Index {
    async fn search(&self, query: &str, k: usize) -> AttestResult<Vec<ScoredHit>> {
        Ok(self.rank(query, k))
    }

    fn name(&self) -> &str {
        "bm25"
    }
}
