//! Parameters module - the vocabulary of beam design inputs.
//!
//! Holds the canonical key universe, the bilingual alias table, partial
//! parameter records and the required input set.

mod alias;
mod key;
mod record;
mod required;

pub use alias::AliasTable;
pub use key::CanonicalKey;
pub use record::ParameterRecord;
pub use required::RequiredSet;
