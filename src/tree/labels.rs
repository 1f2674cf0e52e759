//! Grammatical label and POS constants for consistency across the codebase

/// Label of a subject constituent.
pub const LABEL_SUBJECT: &str = "subj";
/// Accusative object.
pub const LABEL_OBJECT_ACC: &str = "obja";
/// Dative object.
pub const LABEL_OBJECT_DAT: &str = "objd";
/// Genitive object.
pub const LABEL_OBJECT_GEN: &str = "objg";
/// Prepositional object.
pub const LABEL_OBJECT_PREP: &str = "objp";
/// Predicative complement.
pub const LABEL_PREDICATE: &str = "pred";
/// Prepositional phrase attachment.
pub const LABEL_PP: &str = "pp";
/// Relative clause.
pub const LABEL_RELATIVE_CLAUSE: &str = "rel";
/// Object clause (subordinate).
pub const LABEL_OBJECT_CLAUSE: &str = "objc";
/// Adverbial clause (subordinate).
pub const LABEL_ADVERBIAL_CLAUSE: &str = "neb";
/// Apposition.
pub const LABEL_APPOSITION: &str = "app";
/// Coordination edge to a conjunction.
pub const LABEL_COORDINATION: &str = "kon";
/// Edge from a conjunction to its conjunct.
pub const LABEL_CONJUNCT: &str = "cj";

/// Labels that open a subordinate clause; their subtrees never belong to
/// an argument span.
pub const CLAUSE_LABELS: [&str; 3] = [
    LABEL_RELATIVE_CLAUSE,
    LABEL_OBJECT_CLAUSE,
    LABEL_ADVERBIAL_CLAUSE,
];

/// Labels under which second-argument candidates are found.
pub const OBJECT_LABELS: [&str; 5] = [
    LABEL_OBJECT_ACC,
    LABEL_OBJECT_DAT,
    LABEL_OBJECT_GEN,
    LABEL_OBJECT_PREP,
    LABEL_PREDICATE,
];

/// Proper noun tag.
pub const POS_PROPER_NOUN: &str = "NE";
/// Common noun tag.
pub const POS_NOUN: &str = "NN";
/// Pronominal adverb tag (deswegen, dafür, ...).
pub const POS_PRONOMINAL_ADVERB: &str = "PROAV";
/// Preposition tags that head a prepositional phrase.
pub const PREPOSITION_TAGS: [&str; 2] = ["APPR", "APPRART"];

/// Noun POS groups eligible for the argument validity check.
pub const NOUN_GROUPS: [&str; 2] = ["N", "FM"];

/// A prepositional phrase larger than this is too specific to be a
/// clean argument and is pruned from the span.
pub const MAX_PP_SIZE: usize = 10;
