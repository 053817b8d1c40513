use thiserror::Error;

/// Failures while reading or editing a form. Node ids are raw surface ids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("malformed tree: leaf matcher has no fields")]
    LeafWithoutFields,
    #[error("malformed tree: leaf matcher has no tags field")]
    MissingTagsField,
    #[error("malformed tree: compound node missing matcher container")]
    MissingChildList,
    #[error("malformed tree: field has no input")]
    FieldWithoutInput,
    #[error("unknown node {0}")]
    UnknownNode(u32),
    #[error("node {0} is not a button")]
    NotAButton(u32),
    #[error("node {0} is not an input")]
    NotAnInput(u32),
    #[error("node {0} is detached from the form")]
    Detached(u32),
    #[error("no form loaded")]
    NoForm,
    #[error("matchers nest {depth} levels deep, at most {limit} can be saved")]
    TooDeep { depth: usize, limit: usize },
}
