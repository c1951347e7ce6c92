//! Items exchanged with the record-source and analysis collaborators

/// A raw item supplied by a record source
///
/// The core does not care whether items come from a message store, a file
/// or an API response; it only needs a short subject and an optional body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceItem {
    /// Subject-like short text
    pub subject: String,

    /// Body-like long text
    pub body: Option<String>,

    /// Sender address, if known
    pub sender: Option<String>,

    /// Received timestamp as supplied by the source
    pub received: Option<String>,
}

impl SourceItem {
    /// Create an item with only a subject
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Attach a body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a sender
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Attach a received timestamp
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    /// Body text, or the empty string
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// A source item after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    /// Original subject
    pub subject: String,

    /// Sender, if known
    pub sender: Option<String>,

    /// Received timestamp, if known
    pub received: Option<String>,

    /// Leading excerpt of the body
    pub body_excerpt: String,

    /// Resolved project code (`UNCAT` on a miss)
    pub project_code: String,

    /// Resolved project name
    pub project_name: String,

    /// Resolved document type
    pub document_type: Option<String>,

    /// First reference found in the subject
    pub reference_number: Option<String>,
}

/// One entry of a search result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    /// A classified item
    Item(ClassifiedItem),

    /// Opaque summary text from the analysis collaborator
    Analysis(String),
}

impl SearchHit {
    /// Whether this entry is the analysis marker record
    pub fn is_analysis(&self) -> bool {
        matches!(self, SearchHit::Analysis(_))
    }

    /// The classified item, if this is not the analysis record
    pub fn as_item(&self) -> Option<&ClassifiedItem> {
        match self {
            SearchHit::Item(item) => Some(item),
            SearchHit::Analysis(_) => None,
        }
    }
}
