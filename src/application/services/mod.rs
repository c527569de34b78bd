mod batch_updater;
mod job_runner;
mod lemma_normalizer;
mod normalization_context;
mod tokenizer;

pub use batch_updater::{
    BatchOptions, BatchRunError, BatchUpdateError, BatchUpdater, DEFAULT_FETCH_SIZE,
    DEFAULT_FLUSH_SIZE,
};
pub use job_runner::{JOB_DESCRIPTION, JOB_TYPE, JobRunner, RunReport, format_duration};
pub use lemma_normalizer::{
    LemmaNormalizer, MORPHOLOGICAL_MIN_LEMMA_LEN, MorphologicalNormalizer, ParseSelection,
    SENTENCE_MIN_LEMMA_LEN, SentenceNormalizer, select_parse,
};
pub use normalization_context::NormalizationContext;
pub use tokenizer::{DEFAULT_STOP_WORDS, Tokenizer};
