use crate::fragment::Fragment;
use crate::operation::OperationKind;
use crate::operation::OperationName;

/// A fully composed operation: its own definition followed by every fragment
/// definition it transitively needs, each exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub(crate) document: String,
    pub(crate) fragment_names: Vec<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: OperationName,
    /// Byte length of the operation's own definition at the start of
    /// `document`.
    pub(crate) operation_source_len: usize,
}

impl OperationDefinition {
    /// The composed document sent as the payload's `query`.
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    /// Names of the fragments appended to the document, in document order.
    pub fn fragment_names(&self) -> &[String] {
        &self.fragment_names
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> OperationName {
        self.name
    }

    /// The operation's own definition, without any appended fragments.
    pub fn operation_source(&self) -> &str {
        &self.document[..self.operation_source_len]
    }
}

/// Appends each fragment's definition to the operation's definition,
/// separated by blank lines.
///
/// `fragments` must already be de-duplicated; see
/// [`FragmentLibrary::closure`](crate::fragment::FragmentLibrary::closure).
pub(crate) fn compose_document(operation_source: &str, fragments: &[&Fragment]) -> String {
    let operation_source = operation_source.trim();
    let capacity = operation_source.len()
        + fragments.iter().map(|fragment| fragment.source().len() + 2).sum::<usize>()
        + 1;

    let mut document = String::with_capacity(capacity);
    document.push_str(operation_source);
    document.push('\n');
    for fragment in fragments {
        document.push('\n');
        document.push_str(fragment.source());
        document.push('\n');
    }
    document
}
