//! The two closed type vocabularies and the fixed tables between them
//!
//! The tagged format names its reference types in prose ("Journal Article"),
//! CSL uses short identifiers (`article-journal`). The forward table is
//! many-to-one, so the reverse table picks one canonical reference type for
//! every item type. The tables are kept separate on purpose: they are not
//! inverses of each other.

/// Reference type of a tagged record (the value of the `%0` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    AggregatedDatabase,
    AncientText,
    Artwork,
    AudiovisualMaterial,
    Bill,
    Blog,
    Book,
    BookSection,
    Case,
    Catalog,
    ChartOrTable,
    ClassicalWork,
    ComputerProgram,
    ConferencePaper,
    ConferenceProceedings,
    Dataset,
    Dictionary,
    EditedBook,
    ElectronicArticle,
    ElectronicBook,
    ElectronicChapter,
    Encyclopedia,
    Equation,
    Figure,
    FilmOrBroadcast,
    Generic,
    GovernmentDocument,
    Grant,
    Hearing,
    JournalArticle,
    LegalRuleOrRegulation,
    MagazineArticle,
    Manuscript,
    Map,
    Music,
    NewspaperArticle,
    OnlineDatabase,
    OnlineMultimedia,
    Pamphlet,
    Patent,
    PersonalCommunication,
    Report,
    Serial,
    Standard,
    Statute,
    Thesis,
    UnpublishedWork,
    WebPage,
}

impl ReferenceType {
    /// Every reference type, in vocabulary order
    pub const ALL: [ReferenceType; 48] = [
        Self::AggregatedDatabase,
        Self::AncientText,
        Self::Artwork,
        Self::AudiovisualMaterial,
        Self::Bill,
        Self::Blog,
        Self::Book,
        Self::BookSection,
        Self::Case,
        Self::Catalog,
        Self::ChartOrTable,
        Self::ClassicalWork,
        Self::ComputerProgram,
        Self::ConferencePaper,
        Self::ConferenceProceedings,
        Self::Dataset,
        Self::Dictionary,
        Self::EditedBook,
        Self::ElectronicArticle,
        Self::ElectronicBook,
        Self::ElectronicChapter,
        Self::Encyclopedia,
        Self::Equation,
        Self::Figure,
        Self::FilmOrBroadcast,
        Self::Generic,
        Self::GovernmentDocument,
        Self::Grant,
        Self::Hearing,
        Self::JournalArticle,
        Self::LegalRuleOrRegulation,
        Self::MagazineArticle,
        Self::Manuscript,
        Self::Map,
        Self::Music,
        Self::NewspaperArticle,
        Self::OnlineDatabase,
        Self::OnlineMultimedia,
        Self::Pamphlet,
        Self::Patent,
        Self::PersonalCommunication,
        Self::Report,
        Self::Serial,
        Self::Standard,
        Self::Statute,
        Self::Thesis,
        Self::UnpublishedWork,
        Self::WebPage,
    ];

    /// Look up a reference type by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name as written in the `%0` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::AggregatedDatabase => "Aggregated Database",
            Self::AncientText => "Ancient Text",
            Self::Artwork => "Artwork",
            Self::AudiovisualMaterial => "Audiovisual Material",
            Self::Bill => "Bill",
            Self::Blog => "Blog",
            Self::Book => "Book",
            Self::BookSection => "Book Section",
            Self::Case => "Case",
            Self::Catalog => "Catalog",
            Self::ChartOrTable => "Chart or Table",
            Self::ClassicalWork => "Classical Work",
            Self::ComputerProgram => "Computer Program",
            Self::ConferencePaper => "Conference Paper",
            Self::ConferenceProceedings => "Conference Proceedings",
            Self::Dataset => "Dataset",
            Self::Dictionary => "Dictionary",
            Self::EditedBook => "Edited Book",
            Self::ElectronicArticle => "Electronic Article",
            Self::ElectronicBook => "Electronic Book",
            Self::ElectronicChapter => "Electronic Chapter",
            Self::Encyclopedia => "Encyclopedia",
            Self::Equation => "Equation",
            Self::Figure => "Figure",
            Self::FilmOrBroadcast => "Film or Broadcast",
            Self::Generic => "Generic",
            Self::GovernmentDocument => "Government Document",
            Self::Grant => "Grant",
            Self::Hearing => "Hearing",
            Self::JournalArticle => "Journal Article",
            Self::LegalRuleOrRegulation => "Legal Rule or Regulation",
            Self::MagazineArticle => "Magazine Article",
            Self::Manuscript => "Manuscript",
            Self::Map => "Map",
            Self::Music => "Music",
            Self::NewspaperArticle => "Newspaper Article",
            Self::OnlineDatabase => "Online Database",
            Self::OnlineMultimedia => "Online Multimedia",
            Self::Pamphlet => "Pamphlet",
            Self::Patent => "Patent",
            Self::PersonalCommunication => "Personal Communication",
            Self::Report => "Report",
            Self::Serial => "Serial",
            Self::Standard => "Standard",
            Self::Statute => "Statute",
            Self::Thesis => "Thesis",
            Self::UnpublishedWork => "Unpublished Work",
            Self::WebPage => "Web Page",
        }
    }

    /// Forward TYPE table
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::AggregatedDatabase | Self::Dataset | Self::OnlineDatabase => ItemType::Dataset,
            Self::AncientText | Self::ClassicalWork => ItemType::Classic,
            Self::Artwork => ItemType::Graphic,
            Self::AudiovisualMaterial
            | Self::FilmOrBroadcast
            | Self::OnlineMultimedia => ItemType::MotionPicture,
            Self::Bill => ItemType::Bill,
            Self::Blog => ItemType::PostWeblog,
            Self::Book
            | Self::ConferenceProceedings
            | Self::EditedBook
            | Self::ElectronicBook => ItemType::Book,
            Self::BookSection | Self::ElectronicChapter => ItemType::Chapter,
            Self::Case => ItemType::LegalCase,
            Self::Catalog
            | Self::Generic
            | Self::GovernmentDocument
            | Self::Grant => ItemType::Document,
            Self::ChartOrTable | Self::Equation | Self::Figure => ItemType::Figure,
            Self::ComputerProgram => ItemType::Software,
            Self::ConferencePaper => ItemType::PaperConference,
            Self::Dictionary => ItemType::EntryDictionary,
            Self::ElectronicArticle | Self::JournalArticle => ItemType::ArticleJournal,
            Self::Encyclopedia => ItemType::EntryEncyclopedia,
            Self::Hearing => ItemType::Hearing,
            Self::LegalRuleOrRegulation => ItemType::Regulation,
            Self::MagazineArticle => ItemType::ArticleMagazine,
            Self::Manuscript => ItemType::Manuscript,
            Self::Map => ItemType::Map,
            Self::Music => ItemType::Song,
            Self::NewspaperArticle => ItemType::ArticleNewspaper,
            Self::Pamphlet => ItemType::Pamphlet,
            Self::Patent => ItemType::Patent,
            Self::PersonalCommunication => ItemType::PersonalCommunication,
            Self::Report => ItemType::Report,
            Self::Serial => ItemType::Periodical,
            Self::Standard => ItemType::Standard,
            Self::Statute => ItemType::Legislation,
            Self::Thesis => ItemType::Thesis,
            Self::UnpublishedWork => ItemType::Article,
            Self::WebPage => ItemType::Webpage,
        }
    }
}

/// CSL item type (the value of the `type` variable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Article,
    ArticleJournal,
    ArticleMagazine,
    ArticleNewspaper,
    Bill,
    Book,
    Broadcast,
    Chapter,
    Classic,
    Dataset,
    Document,
    Entry,
    EntryDictionary,
    EntryEncyclopedia,
    Figure,
    Graphic,
    Hearing,
    LegalCase,
    Legislation,
    Manuscript,
    Map,
    MotionPicture,
    MusicalScore,
    Pamphlet,
    PaperConference,
    Patent,
    Periodical,
    PersonalCommunication,
    Post,
    PostWeblog,
    Regulation,
    Report,
    Software,
    Song,
    Standard,
    Thesis,
    Webpage,
}

impl ItemType {
    /// Every item type, in vocabulary order
    pub const ALL: [ItemType; 37] = [
        Self::Article,
        Self::ArticleJournal,
        Self::ArticleMagazine,
        Self::ArticleNewspaper,
        Self::Bill,
        Self::Book,
        Self::Broadcast,
        Self::Chapter,
        Self::Classic,
        Self::Dataset,
        Self::Document,
        Self::Entry,
        Self::EntryDictionary,
        Self::EntryEncyclopedia,
        Self::Figure,
        Self::Graphic,
        Self::Hearing,
        Self::LegalCase,
        Self::Legislation,
        Self::Manuscript,
        Self::Map,
        Self::MotionPicture,
        Self::MusicalScore,
        Self::Pamphlet,
        Self::PaperConference,
        Self::Patent,
        Self::Periodical,
        Self::PersonalCommunication,
        Self::Post,
        Self::PostWeblog,
        Self::Regulation,
        Self::Report,
        Self::Software,
        Self::Song,
        Self::Standard,
        Self::Thesis,
        Self::Webpage,
    ];

    /// Look up an item type by its CSL identifier
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// CSL identifier
    pub fn name(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::ArticleJournal => "article-journal",
            Self::ArticleMagazine => "article-magazine",
            Self::ArticleNewspaper => "article-newspaper",
            Self::Bill => "bill",
            Self::Book => "book",
            Self::Broadcast => "broadcast",
            Self::Chapter => "chapter",
            Self::Classic => "classic",
            Self::Dataset => "dataset",
            Self::Document => "document",
            Self::Entry => "entry",
            Self::EntryDictionary => "entry-dictionary",
            Self::EntryEncyclopedia => "entry-encyclopedia",
            Self::Figure => "figure",
            Self::Graphic => "graphic",
            Self::Hearing => "hearing",
            Self::LegalCase => "legal_case",
            Self::Legislation => "legislation",
            Self::Manuscript => "manuscript",
            Self::Map => "map",
            Self::MotionPicture => "motion_picture",
            Self::MusicalScore => "musical_score",
            Self::Pamphlet => "pamphlet",
            Self::PaperConference => "paper-conference",
            Self::Patent => "patent",
            Self::Periodical => "periodical",
            Self::PersonalCommunication => "personal_communication",
            Self::Post => "post",
            Self::PostWeblog => "post-weblog",
            Self::Regulation => "regulation",
            Self::Report => "report",
            Self::Software => "software",
            Self::Song => "song",
            Self::Standard => "standard",
            Self::Thesis => "thesis",
            Self::Webpage => "webpage",
        }
    }

    /// Reverse TYPE table
    pub fn reference_type(&self) -> ReferenceType {
        match self {
            Self::Article => ReferenceType::UnpublishedWork,
            Self::ArticleJournal => ReferenceType::JournalArticle,
            Self::ArticleMagazine => ReferenceType::MagazineArticle,
            Self::ArticleNewspaper => ReferenceType::NewspaperArticle,
            Self::Bill => ReferenceType::Bill,
            Self::Book => ReferenceType::Book,
            Self::Broadcast | Self::MotionPicture => ReferenceType::FilmOrBroadcast,
            Self::Chapter => ReferenceType::BookSection,
            Self::Classic => ReferenceType::ClassicalWork,
            Self::Dataset => ReferenceType::Dataset,
            Self::Document => ReferenceType::Generic,
            Self::Entry => ReferenceType::Catalog,
            Self::EntryDictionary => ReferenceType::Dictionary,
            Self::EntryEncyclopedia => ReferenceType::Encyclopedia,
            Self::Figure => ReferenceType::Figure,
            Self::Graphic => ReferenceType::Artwork,
            Self::Hearing => ReferenceType::Hearing,
            Self::LegalCase => ReferenceType::Case,
            Self::Legislation => ReferenceType::Statute,
            Self::Manuscript => ReferenceType::Manuscript,
            Self::Map => ReferenceType::Map,
            Self::MusicalScore | Self::Song => ReferenceType::Music,
            Self::Pamphlet => ReferenceType::Pamphlet,
            Self::PaperConference => ReferenceType::ConferencePaper,
            Self::Patent => ReferenceType::Patent,
            Self::Periodical => ReferenceType::Serial,
            Self::PersonalCommunication => ReferenceType::PersonalCommunication,
            Self::Post | Self::PostWeblog => ReferenceType::Blog,
            Self::Regulation => ReferenceType::LegalRuleOrRegulation,
            Self::Report => ReferenceType::Report,
            Self::Software => ReferenceType::ComputerProgram,
            Self::Standard => ReferenceType::Standard,
            Self::Thesis => ReferenceType::Thesis,
            Self::Webpage => ReferenceType::WebPage,
        }
    }
}

/// Default item type for an unknown reference type
pub const DEFAULT_ITEM_TYPE: ItemType = ItemType::Document;

/// Default reference type for an unknown item type
pub const DEFAULT_REFERENCE_TYPE: ReferenceType = ReferenceType::Generic;
