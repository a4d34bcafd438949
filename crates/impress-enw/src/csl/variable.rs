//! CSL variable vocabulary

/// Shape of the value a variable holds in a normalized record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A plain string
    Text,
    /// A structured date (`date-parts`)
    Date,
    /// An ordered list of structured names
    Names,
    /// An ordered list of strings
    List,
}

/// A CSL variable the mapping table can populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    Abstract,
    Accessed,
    Author,
    AvailableDate,
    CallNumber,
    CitationKey,
    CollectionEditor,
    CollectionNumber,
    CollectionTitle,
    Committee,
    Composer,
    ContainerTitle,
    ContainerTitleShort,
    Dimensions,
    Director,
    Doi,
    Edition,
    Editor,
    EventDate,
    EventPlace,
    EventTitle,
    Genre,
    Illustrator,
    Isbn,
    Issn,
    Issue,
    Issued,
    Keyword,
    Language,
    Medium,
    Note,
    Number,
    NumberOfPages,
    NumberOfVolumes,
    OriginalTitle,
    Page,
    PageFirst,
    Performer,
    Pmcid,
    Producer,
    Publisher,
    PublisherPlace,
    Recipient,
    References,
    ReviewedAuthor,
    ReviewedTitle,
    Scale,
    Section,
    Status,
    Submitted,
    Title,
    TitleShort,
    Translator,
    Type,
    Url,
    Version,
    Volume,
    VolumeTitle,
}

impl Variable {
    pub const ALL: [Variable; 58] = [
        Self::Abstract,
        Self::Accessed,
        Self::Author,
        Self::AvailableDate,
        Self::CallNumber,
        Self::CitationKey,
        Self::CollectionEditor,
        Self::CollectionNumber,
        Self::CollectionTitle,
        Self::Committee,
        Self::Composer,
        Self::ContainerTitle,
        Self::ContainerTitleShort,
        Self::Dimensions,
        Self::Director,
        Self::Doi,
        Self::Edition,
        Self::Editor,
        Self::EventDate,
        Self::EventPlace,
        Self::EventTitle,
        Self::Genre,
        Self::Illustrator,
        Self::Isbn,
        Self::Issn,
        Self::Issue,
        Self::Issued,
        Self::Keyword,
        Self::Language,
        Self::Medium,
        Self::Note,
        Self::Number,
        Self::NumberOfPages,
        Self::NumberOfVolumes,
        Self::OriginalTitle,
        Self::Page,
        Self::PageFirst,
        Self::Performer,
        Self::Pmcid,
        Self::Producer,
        Self::Publisher,
        Self::PublisherPlace,
        Self::Recipient,
        Self::References,
        Self::ReviewedAuthor,
        Self::ReviewedTitle,
        Self::Scale,
        Self::Section,
        Self::Status,
        Self::Submitted,
        Self::Title,
        Self::TitleShort,
        Self::Translator,
        Self::Type,
        Self::Url,
        Self::Version,
        Self::Volume,
        Self::VolumeTitle,
    ];

    /// Look up a variable by its CSL-JSON key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// CSL-JSON key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Accessed => "accessed",
            Self::Author => "author",
            Self::AvailableDate => "available-date",
            Self::CallNumber => "call-number",
            Self::CitationKey => "citation-key",
            Self::CollectionEditor => "collection-editor",
            Self::CollectionNumber => "collection-number",
            Self::CollectionTitle => "collection-title",
            Self::Committee => "committee",
            Self::Composer => "composer",
            Self::ContainerTitle => "container-title",
            Self::ContainerTitleShort => "container-title-short",
            Self::Dimensions => "dimensions",
            Self::Director => "director",
            Self::Doi => "DOI",
            Self::Edition => "edition",
            Self::Editor => "editor",
            Self::EventDate => "event-date",
            Self::EventPlace => "event-place",
            Self::EventTitle => "event-title",
            Self::Genre => "genre",
            Self::Illustrator => "illustrator",
            Self::Isbn => "ISBN",
            Self::Issn => "ISSN",
            Self::Issue => "issue",
            Self::Issued => "issued",
            Self::Keyword => "keyword",
            Self::Language => "language",
            Self::Medium => "medium",
            Self::Note => "note",
            Self::Number => "number",
            Self::NumberOfPages => "number-of-pages",
            Self::NumberOfVolumes => "number-of-volumes",
            Self::OriginalTitle => "original-title",
            Self::Page => "page",
            Self::PageFirst => "page-first",
            Self::Performer => "performer",
            Self::Pmcid => "PMCID",
            Self::Producer => "producer",
            Self::Publisher => "publisher",
            Self::PublisherPlace => "publisher-place",
            Self::Recipient => "recipient",
            Self::References => "references",
            Self::ReviewedAuthor => "reviewed-author",
            Self::ReviewedTitle => "reviewed-title",
            Self::Scale => "scale",
            Self::Section => "section",
            Self::Status => "status",
            Self::Submitted => "submitted",
            Self::Title => "title",
            Self::TitleShort => "title-short",
            Self::Translator => "translator",
            Self::Type => "type",
            Self::Url => "URL",
            Self::Version => "version",
            Self::Volume => "volume",
            Self::VolumeTitle => "volume-title",
        }
    }

    /// Value shape expected for this variable
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Author
            | Self::CollectionEditor
            | Self::Committee
            | Self::Composer
            | Self::Director
            | Self::Editor
            | Self::Illustrator
            | Self::Performer
            | Self::Producer
            | Self::Recipient
            | Self::ReviewedAuthor
            | Self::Translator => ValueKind::Names,
            Self::Accessed
            | Self::AvailableDate
            | Self::EventDate
            | Self::Issued
            | Self::Submitted => ValueKind::Date,
            Self::Keyword => ValueKind::List,
            _ => ValueKind::Text,
        }
    }
}
