mod lemma_set;
mod morph_parse;
mod path_record;
mod run_log_entry;
mod run_status;

pub use lemma_set::LemmaSet;
pub use morph_parse::{GrammaticalCase, GrammaticalNumber, MorphParse, MorphTag, PartOfSpeech};
pub use path_record::{DocumentId, PathRecord};
pub use run_log_entry::RunLogEntry;
pub use run_status::RunStatus;
