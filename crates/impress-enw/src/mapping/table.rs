//! The rule table
//!
//! Order matters: rules are scanned top to bottom and the first rule to
//! populate an output key wins. Type lists name the records a rule applies
//! to on each side; `forward_only` rules have no usable inverse.

use super::{Converter, Rule};
use crate::csl::Variable as V;
use crate::types::{ItemType as I, ReferenceType as R};

const REVIEWABLE_REFS: &[R] = &[
    R::Book, R::BookSection, R::ElectronicArticle, R::ElectronicBook, R::ElectronicChapter,
];

const TITLED_REFS: &[R] = &[
    R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill, R::Blog,
    R::Book, R::Case, R::Catalog, R::ChartOrTable, R::ClassicalWork, R::ComputerProgram,
    R::ConferencePaper, R::ConferenceProceedings, R::Dataset, R::EditedBook,
    R::ElectronicArticle, R::ElectronicBook, R::Equation, R::Figure, R::FilmOrBroadcast,
    R::Generic, R::GovernmentDocument, R::Grant, R::Hearing, R::JournalArticle,
    R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript, R::Map, R::Music,
    R::NewspaperArticle, R::OnlineDatabase, R::OnlineMultimedia, R::Pamphlet, R::Patent,
    R::PersonalCommunication, R::Report, R::Standard, R::Statute, R::Thesis, R::UnpublishedWork,
    R::WebPage,
];

const TITLED_ITEMS: &[I] = &[
    I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill, I::Book,
    I::Broadcast, I::Classic, I::Dataset, I::Document, I::Entry, I::Figure, I::Graphic,
    I::Hearing, I::LegalCase, I::Legislation, I::Manuscript, I::Map, I::MotionPicture,
    I::MusicalScore, I::Pamphlet, I::PaperConference, I::Patent, I::PersonalCommunication,
    I::Post, I::PostWeblog, I::Regulation, I::Report, I::Software, I::Song, I::Standard,
    I::Thesis, I::Webpage,
];

const CONTAINED_REFS: &[R] = &[
    R::BookSection, R::Dictionary, R::ElectronicChapter, R::Encyclopedia, R::Serial,
];

const CONTAINED_ITEMS: &[I] = &[
    I::Chapter, I::EntryDictionary, I::EntryEncyclopedia, I::Periodical,
];

const FILM_ITEMS: &[I] = &[I::Broadcast, I::MotionPicture];
const BOOK_ITEMS: &[I] = &[I::Book, I::Chapter];
const MUSIC_ITEMS: &[I] = &[I::MusicalScore, I::Song];
const BLOG_ITEMS: &[I] = &[I::Post, I::PostWeblog];
const CONFERENCE_REFS: &[R] = &[R::ConferencePaper, R::ConferenceProceedings];

/// Every mapping rule, in evaluation order
pub static RULES: &[Rule] = &[
    Rule::map('!', V::TitleShort)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill,
            R::Blog, R::Book, R::BookSection, R::Case, R::Catalog, R::ClassicalWork,
            R::ComputerProgram, R::ConferenceProceedings, R::Dataset, R::Dictionary,
            R::EditedBook, R::ElectronicArticle, R::ElectronicChapter, R::Encyclopedia,
            R::FilmOrBroadcast, R::Generic, R::Grant, R::Hearing, R::JournalArticle,
            R::MagazineArticle, R::Manuscript, R::Map, R::Music, R::NewspaperArticle,
            R::Pamphlet, R::Patent, R::PersonalCommunication, R::Report, R::Serial, R::Statute,
            R::Thesis, R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill,
            I::Book, I::Broadcast, I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry,
            I::EntryDictionary, I::EntryEncyclopedia, I::Graphic, I::Hearing, I::LegalCase,
            I::Legislation, I::Manuscript, I::Map, I::MotionPicture, I::MusicalScore,
            I::Pamphlet, I::Patent, I::Periodical, I::PersonalCommunication, I::Post,
            I::PostWeblog, I::Report, I::Software, I::Song, I::Thesis, I::Webpage,
        ]),
    Rule::map('O', V::TitleShort)
        .source_types(&[
            R::AncientText, R::Book, R::BookSection, R::Catalog, R::Dataset, R::Dictionary,
            R::Encyclopedia, R::Pamphlet, R::PersonalCommunication, R::Serial, R::Standard,
            R::Statute, R::UnpublishedWork,
        ])
        .source_absent(&['!'])
        .target_types(&[I::Standard]),
    Rule::map('#', V::Medium)
        .source_types(&[R::AudiovisualMaterial, R::OnlineMultimedia])
        .forward_only(),
    Rule::map('#', V::Number).source_types(&[R::Grant]).forward_only(),
    Rule::map('#', V::VolumeTitle).source_types(&[R::ElectronicArticle]).forward_only(),
    Rule::map('#', V::Publisher).source_types(&[R::Statute]).target_types(&[I::Legislation]),
    Rule::map('#', V::References).source_types(&[R::Patent]).target_types(&[I::Patent]),
    Rule::map('9', V::Medium).source_types(&[R::FilmOrBroadcast]).target_types(FILM_ITEMS),
    Rule::map_any(&['#', 'D'], V::Issued)
        .with(Converter::Date)
        .source_types(&[R::ElectronicBook])
        .forward_only(),
    Rule::map('$', V::Issue).source_types(&[R::Report]).target_types(&[I::Report]),
    Rule::map('$', V::Status).source_types(&[R::Patent]).target_types(&[I::Patent]),
    Rule::map('$', V::Volume).source_types(&[R::Statute]).target_types(&[I::Legislation]),
    Rule::map('&', V::AvailableDate)
        .with(Converter::Date)
        .source_types(&[R::ElectronicArticle])
        .forward_only(),
    Rule::map('&', V::Submitted)
        .with(Converter::Date)
        .source_types(&[R::Case])
        .target_types(&[I::LegalCase]),
    Rule::map('&', V::Page).source_types(&[R::Book]).target_types(&[I::Book]),
    Rule::map('&', V::Section)
        .source_types(&[
            R::Generic, R::GovernmentDocument, R::LegalRuleOrRegulation, R::Music,
            R::NewspaperArticle, R::Standard, R::Statute,
        ])
        .target_types(&[
            I::ArticleNewspaper, I::Document, I::Legislation, I::MusicalScore, I::Regulation,
            I::Song, I::Standard,
        ]),
    Rule::map('&', V::PageFirst)
        .source_types(&[R::JournalArticle, R::MagazineArticle, R::Manuscript])
        .target_types(&[I::ArticleJournal, I::ArticleMagazine, I::Manuscript]),
    Rule::map('&', V::Version)
        .source_types(&[R::Dictionary])
        .target_types(&[I::EntryDictionary]),
    Rule::map('(', V::Edition)
        .source_types(&[R::ElectronicBook])
        .source_absent(&['7'])
        .forward_only(),
    Rule::map('*', V::ReviewedTitle)
        .source_types(&[
            R::AncientText, R::BookSection, R::Dictionary, R::ElectronicArticle,
            R::ElectronicBook, R::ElectronicChapter, R::Encyclopedia, R::Generic, R::Grant,
            R::JournalArticle, R::MagazineArticle, R::NewspaperArticle, R::Serial,
        ])
        .target_types(&[
            I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Chapter, I::Document,
            I::EntryDictionary, I::EntryEncyclopedia, I::Periodical,
        ]),
    Rule::map('0', V::Type).with(Converter::Type),
    Rule::map('1', V::PublisherPlace)
        .source_types(CONFERENCE_REFS)
        .target_types(&[I::PaperConference]),
    Rule::map('1', V::Scale).source_types(&[R::Map]).target_types(&[I::Map]),
    Rule::map('2', V::Issue)
        .source_types(&[R::NewspaperArticle])
        .target_types(&[I::ArticleNewspaper]),
    Rule::map('2', V::Pmcid)
        .source_types(&[R::JournalArticle])
        .target_types(&[I::ArticleJournal]),
    Rule::map('2', V::Number).source_types(&[R::Serial]).target_types(&[I::Periodical]),
    Rule::map_any(&['8', '2'], V::Issued)
        .with(Converter::Date)
        .source_types(&[R::ConferenceProceedings])
        .forward_only(),
    Rule::map_any(&['8', 'D'], V::Issued)
        .with(Converter::Date)
        .source_types(&[R::Patent])
        .target_types(&[I::Patent]),
    Rule::map_any(&['2', 'D'], V::Issued)
        .with(Converter::Date)
        .source_types(&[R::Patent])
        .source_absent(&['8'])
        .forward_only(),
    Rule::map('3', V::Genre).source_types(&[R::Dataset]).target_types(&[I::Dataset]),
    Rule::map('3', V::Pmcid).source_types(&[R::ElectronicArticle]).forward_only(),
    Rule::map('3', V::ContainerTitle).source_types(&[R::ConferenceProceedings]).forward_only(),
    Rule::map('3', V::Dimensions)
        .source_types(&[R::Artwork, R::AudiovisualMaterial, R::Map])
        .target_types(&[I::Graphic, I::Map]),
    Rule::map('A', V::Author)
        .with(Converter::Names)
        .source_types(REVIEWABLE_REFS)
        .source_absent(&['4'])
        .target_types(BOOK_ITEMS)
        .target_absent(&[V::ReviewedAuthor]),
    Rule::map('A', V::ReviewedAuthor)
        .with(Converter::Names)
        .source_types(REVIEWABLE_REFS)
        .source_present(&['4'])
        .target_types(BOOK_ITEMS),
    Rule::map('4', V::Author)
        .with(Converter::Names)
        .source_types(REVIEWABLE_REFS)
        .target_types(BOOK_ITEMS)
        .target_present(&[V::ReviewedAuthor]),
    Rule::map('6', V::Number)
        .source_types(&[R::Catalog, R::Dataset, R::Manuscript, R::PersonalCommunication])
        .target_types(&[I::Dataset, I::Entry, I::Manuscript, I::PersonalCommunication]),
    Rule::map('6', V::NumberOfVolumes)
        .source_types(&[
            R::AncientText, R::Book, R::BookSection, R::ClassicalWork, R::ConferenceProceedings,
            R::Dictionary, R::EditedBook, R::ElectronicChapter, R::Encyclopedia, R::Generic,
            R::Hearing, R::Music, R::Serial,
        ])
        .target_types(&[
            I::Book, I::Chapter, I::Classic, I::Document, I::EntryDictionary,
            I::EntryEncyclopedia, I::Hearing, I::MusicalScore, I::Periodical, I::Song,
        ]),
    Rule::map('6', V::ContainerTitleShort)
        .source_types(&[R::Case])
        .target_types(&[I::LegalCase]),
    Rule::map('6', V::CollectionNumber).source_types(&[R::Report]).target_types(&[I::Report]),
    Rule::map('6', V::Version).source_types(&[R::ElectronicBook]).forward_only(),
    Rule::map('@', V::Number).source_types(&[R::Standard]).target_types(&[I::Standard]),
    Rule::map('6', V::Number).source_types(&[R::Statute]).target_types(&[I::Legislation]),
    Rule::map('V', V::Number)
        .source_types(&[R::LegalRuleOrRegulation])
        .target_types(&[I::Regulation]),
    Rule::map(']', V::Number).source_types(&[R::ElectronicArticle]).forward_only(),
    Rule::map('7', V::Edition)
        .source_types(&[
            R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Blog, R::Book,
            R::BookSection, R::Catalog, R::ClassicalWork, R::ConferenceProceedings,
            R::Dictionary, R::EditedBook, R::ElectronicArticle, R::ElectronicBook,
            R::ElectronicChapter, R::Encyclopedia, R::FilmOrBroadcast, R::Generic,
            R::GovernmentDocument, R::LegalRuleOrRegulation, R::MagazineArticle, R::Map,
            R::Music, R::NewspaperArticle, R::Pamphlet, R::Report, R::Serial, R::WebPage,
        ])
        .target_types(&[
            I::ArticleMagazine, I::ArticleNewspaper, I::Book, I::Broadcast, I::Chapter,
            I::Classic, I::Document, I::Entry, I::EntryDictionary, I::EntryEncyclopedia,
            I::Graphic, I::Map, I::MotionPicture, I::MusicalScore, I::Pamphlet, I::Periodical,
            I::Post, I::PostWeblog, I::Regulation, I::Report, I::Song, I::Webpage,
        ]),
    Rule::map('7', V::AvailableDate)
        .with(Converter::Date)
        .source_types(&[R::JournalArticle])
        .target_types(&[I::ArticleJournal]),
    Rule::map('7', V::Version)
        .source_types(&[R::ChartOrTable, R::ComputerProgram, R::Dataset, R::Equation, R::Figure])
        .target_types(&[I::Dataset, I::Figure, I::Software]),
    Rule::map_any(&['7', 'D'], V::Issued)
        .with(Converter::Date)
        .source_types(&[R::AggregatedDatabase, R::OnlineDatabase])
        .forward_only(),
    Rule::map('8', V::Accessed)
        .source_types(&[
            R::AggregatedDatabase, R::Case, R::ElectronicArticle, R::ElectronicBook,
            R::OnlineDatabase, R::OnlineMultimedia,
        ])
        .target_types(&[I::LegalCase]),
    Rule::map_any(&['8', 'D'], V::Issued)
        .with(Converter::Date)
        .source_types(&[
            R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill, R::Book, R::Catalog,
            R::ChartOrTable, R::ConferencePaper, R::EditedBook, R::ElectronicChapter,
            R::Encyclopedia, R::Equation, R::Figure, R::FilmOrBroadcast, R::Generic, R::Hearing,
            R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript,
            R::Map, R::Music, R::NewspaperArticle, R::Pamphlet, R::PersonalCommunication,
            R::Report, R::Serial, R::Standard, R::Statute, R::Thesis, R::UnpublishedWork,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill,
            I::Book, I::Broadcast, I::Document, I::Entry, I::EntryEncyclopedia, I::Figure,
            I::Graphic, I::Hearing, I::Legislation, I::Manuscript, I::Map, I::MotionPicture,
            I::MusicalScore, I::Pamphlet, I::PaperConference, I::Periodical,
            I::PersonalCommunication, I::Regulation, I::Report, I::Song, I::Standard, I::Thesis,
        ]),
    Rule::map('9', V::Medium).source_types(&[R::Music]).target_types(MUSIC_ITEMS),
    Rule::map('9', V::Genre)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Blog,
            R::Book, R::Catalog, R::ChartOrTable, R::ClassicalWork, R::ComputerProgram,
            R::ConferencePaper, R::Dictionary, R::EditedBook, R::ElectronicArticle,
            R::ElectronicBook, R::ElectronicChapter, R::Equation, R::Figure, R::Generic,
            R::Grant, R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle,
            R::Manuscript, R::Map, R::NewspaperArticle, R::OnlineDatabase, R::OnlineMultimedia,
            R::Pamphlet, R::Patent, R::PersonalCommunication, R::Report, R::Serial, R::Standard,
            R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Book,
            I::Classic, I::Document, I::Entry, I::EntryDictionary, I::Figure, I::Graphic,
            I::Manuscript, I::Map, I::Pamphlet, I::PaperConference, I::Patent, I::Periodical,
            I::PersonalCommunication, I::Post, I::PostWeblog, I::Regulation, I::Report,
            I::Software, I::Standard, I::Webpage,
        ]),
    Rule::map_any(&['9', 'V'], V::Genre)
        .with(Converter::GenreDegree)
        .source_types(&[R::Thesis])
        .target_types(&[I::Thesis]),
    Rule::map('?', V::Performer)
        .with(Converter::Names)
        .source_types(&[R::AudiovisualMaterial, R::FilmOrBroadcast])
        .target_types(FILM_ITEMS),
    Rule::map('?', V::Producer)
        .with(Converter::Names)
        .source_types(&[R::Music])
        .target_types(MUSIC_ITEMS),
    Rule::map('?', V::Translator)
        .with(Converter::Names)
        .source_types(&[
            R::AncientText, R::Book, R::BookSection, R::Catalog, R::ClassicalWork,
            R::Dictionary, R::EditedBook, R::ElectronicChapter, R::Encyclopedia, R::Grant,
            R::Pamphlet,
        ])
        .target_types(&[
            I::Book, I::Chapter, I::Classic, I::Entry, I::EntryDictionary, I::EntryEncyclopedia,
            I::Pamphlet,
        ]),
    Rule::map('@', V::Isbn)
        .source_types(&[
            R::AncientText, R::AudiovisualMaterial, R::Blog, R::Book, R::BookSection,
            R::Catalog, R::ComputerProgram, R::ConferenceProceedings, R::Dictionary,
            R::EditedBook, R::ElectronicBook, R::Encyclopedia, R::Hearing, R::Music,
            R::Pamphlet, R::Serial, R::WebPage,
        ])
        .target_types(&[
            I::Book, I::Chapter, I::Entry, I::EntryDictionary, I::EntryEncyclopedia, I::Hearing,
            I::MusicalScore, I::Pamphlet, I::Periodical, I::Post, I::PostWeblog, I::Software,
            I::Song, I::Webpage,
        ]),
    Rule::map('@', V::Issn)
        .source_types(&[
            R::Dataset, R::ElectronicArticle, R::JournalArticle, R::MagazineArticle,
            R::NewspaperArticle,
        ])
        .target_types(&[I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Dataset]),
    Rule::fan_out('@', &[V::Isbn, V::Issn])
        .with(Converter::IsbnIssn)
        .source_types(&[
            R::AggregatedDatabase, R::ClassicalWork, R::ElectronicChapter, R::Generic,
            R::GovernmentDocument, R::LegalRuleOrRegulation, R::Map,
        ])
        .target_types(&[I::Classic, I::Document, I::Map, I::Regulation]),
    Rule::map('@', V::Number)
        .source_types(&[R::OnlineDatabase, R::Patent])
        .target_types(&[I::Patent]),
    Rule::map('@', V::Number).source_types(&[R::Report]).target_types(&[I::Report]),
    Rule::map('A', V::Author)
        .with(Converter::Names)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Blog,
            R::Catalog, R::ChartOrTable, R::ClassicalWork, R::ComputerProgram,
            R::ConferencePaper, R::ConferenceProceedings, R::Dataset, R::Dictionary,
            R::Encyclopedia, R::Equation, R::Figure, R::Generic, R::GovernmentDocument,
            R::Grant, R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle,
            R::Manuscript, R::Map, R::NewspaperArticle, R::OnlineDatabase, R::OnlineMultimedia,
            R::Pamphlet, R::Patent, R::PersonalCommunication, R::Report, R::Serial, R::Standard,
            R::Thesis, R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Classic,
            I::Dataset, I::Document, I::Entry, I::EntryDictionary, I::EntryEncyclopedia,
            I::Figure, I::Graphic, I::Manuscript, I::Map, I::Pamphlet, I::PaperConference,
            I::Patent, I::Periodical, I::PersonalCommunication, I::Post, I::PostWeblog,
            I::Regulation, I::Report, I::Software, I::Standard, I::Thesis, I::Webpage,
        ]),
    Rule::map('A', V::Composer)
        .with(Converter::Names)
        .source_types(&[R::Music])
        .target_types(MUSIC_ITEMS),
    Rule::map('A', V::Editor)
        .with(Converter::Names)
        .source_types(&[R::EditedBook])
        .forward_only(),
    Rule::map('A', V::Director)
        .with(Converter::Names)
        .source_types(&[R::FilmOrBroadcast])
        .target_types(FILM_ITEMS),
    Rule::map('E', V::Director)
        .with(Converter::Names)
        .source_types(&[R::FilmOrBroadcast])
        .source_absent(&['A'])
        .forward_only(),
    Rule::map('B', V::ContainerTitle)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Bill, R::Blog, R::BookSection, R::Case,
            R::Dictionary, R::ElectronicArticle, R::ElectronicChapter, R::Encyclopedia,
            R::MagazineArticle, R::Manuscript, R::Music, R::NewspaperArticle, R::OnlineDatabase,
            R::Statute,
        ])
        .target_types(&[
            I::ArticleMagazine, I::ArticleNewspaper, I::Bill, I::Chapter, I::EntryDictionary,
            I::EntryEncyclopedia, I::LegalCase, I::Legislation, I::Manuscript, I::MusicalScore,
            I::Post, I::PostWeblog, I::Song,
        ]),
    Rule::map('B', V::Committee)
        .with(Converter::Names)
        .source_types(&[R::Hearing])
        .target_types(&[I::Hearing]),
    Rule::map('B', V::EventTitle)
        .source_types(CONFERENCE_REFS)
        .target_types(&[I::PaperConference]),
    Rule::map('B', V::CollectionTitle)
        .source_types(&[
            R::AudiovisualMaterial, R::Book, R::Catalog, R::ClassicalWork, R::ComputerProgram,
            R::EditedBook, R::FilmOrBroadcast, R::Map, R::OnlineMultimedia, R::Report,
            R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::Book, I::Broadcast, I::Classic, I::Entry, I::Map, I::MotionPicture,
            I::Report, I::Software, I::Webpage,
        ]),
    Rule::map('C', V::EventPlace)
        .source_types(CONFERENCE_REFS)
        .target_types(&[I::PaperConference]),
    Rule::map('C', V::PublisherPlace)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Blog,
            R::Book, R::BookSection, R::Catalog, R::ChartOrTable, R::ClassicalWork,
            R::ComputerProgram, R::Dataset, R::Dictionary, R::EditedBook, R::ElectronicArticle,
            R::ElectronicBook, R::ElectronicChapter, R::Encyclopedia, R::Equation, R::Figure,
            R::FilmOrBroadcast, R::Generic, R::GovernmentDocument, R::Hearing,
            R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript, R::Map, R::Music,
            R::NewspaperArticle, R::OnlineDatabase, R::Pamphlet, R::PersonalCommunication,
            R::Report, R::Serial, R::Standard, R::Thesis, R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleMagazine, I::ArticleNewspaper, I::Book, I::Broadcast,
            I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry, I::EntryDictionary,
            I::EntryEncyclopedia, I::Figure, I::Graphic, I::Hearing, I::Manuscript, I::Map,
            I::MotionPicture, I::MusicalScore, I::Pamphlet, I::Periodical,
            I::PersonalCommunication, I::Post, I::PostWeblog, I::Regulation, I::Report,
            I::Software, I::Song, I::Standard, I::Thesis, I::Webpage,
        ]),
    Rule::map('D', V::Issued)
        .with(Converter::Year)
        .source_types(&[
            R::Blog, R::BookSection, R::ClassicalWork, R::ComputerProgram, R::Dataset,
            R::Dictionary, R::ElectronicArticle, R::GovernmentDocument, R::Grant,
            R::OnlineMultimedia, R::WebPage,
        ])
        .target_types(&[
            I::Chapter, I::Classic, I::Dataset, I::EntryDictionary, I::Post, I::PostWeblog,
            I::Software, I::Webpage,
        ]),
    Rule::map('D', V::EventDate)
        .with(Converter::Date)
        .source_types(&[R::ConferenceProceedings])
        .forward_only(),
    Rule::map('E', V::Editor)
        .with(Converter::Names)
        .source_types(&[
            R::AncientText, R::Blog, R::BookSection, R::ConferencePaper,
            R::ConferenceProceedings, R::Dictionary, R::ElectronicBook, R::ElectronicChapter,
            R::Encyclopedia, R::Music, R::Serial,
        ])
        .target_types(&[
            I::Chapter, I::EntryDictionary, I::EntryEncyclopedia, I::MusicalScore,
            I::PaperConference, I::Periodical, I::Post, I::PostWeblog, I::Song,
        ]),
    Rule::map('E', V::CollectionEditor)
        .with(Converter::Names)
        .source_types(&[
            R::AudiovisualMaterial, R::Book, R::ClassicalWork, R::ComputerProgram,
            R::EditedBook, R::Map, R::OnlineMultimedia, R::Report, R::UnpublishedWork,
            R::WebPage,
        ])
        .target_types(&[I::Article, I::Book, I::Classic, I::Map, I::Report, I::Software, I::Webpage]),
    Rule::map('E', V::Recipient)
        .source_types(&[R::PersonalCommunication])
        .target_types(&[I::PersonalCommunication]),
    Rule::map('F', V::CitationKey).source_types(&R::ALL).target_types(&I::ALL),
    Rule::map('G', V::Language).source_types(&R::ALL).target_types(&I::ALL),
    Rule::map('I', V::Publisher)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Blog,
            R::Book, R::BookSection, R::Catalog, R::ChartOrTable, R::ClassicalWork,
            R::ComputerProgram, R::ConferencePaper, R::ConferenceProceedings, R::Dataset,
            R::Dictionary, R::EditedBook, R::ElectronicArticle, R::ElectronicBook,
            R::ElectronicChapter, R::Encyclopedia, R::Equation, R::Figure, R::FilmOrBroadcast,
            R::Generic, R::GovernmentDocument, R::Hearing, R::LegalRuleOrRegulation,
            R::MagazineArticle, R::Map, R::Music, R::NewspaperArticle, R::OnlineDatabase,
            R::OnlineMultimedia, R::Pamphlet, R::PersonalCommunication, R::Serial, R::Standard,
            R::Thesis, R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleMagazine, I::ArticleNewspaper, I::Book, I::Broadcast,
            I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry, I::EntryDictionary,
            I::EntryEncyclopedia, I::Figure, I::Graphic, I::Hearing, I::Map, I::MotionPicture,
            I::MusicalScore, I::Pamphlet, I::PaperConference, I::Periodical,
            I::PersonalCommunication, I::Post, I::PostWeblog, I::Regulation, I::Software,
            I::Song, I::Standard, I::Thesis, I::Webpage,
        ]),
    Rule::map('Y', V::Publisher).source_types(&[R::Report]).target_types(&[I::Report]),
    Rule::map('J', V::ContainerTitle)
        .source_types(&[R::JournalArticle])
        .target_types(&[I::ArticleJournal]),
    Rule::map('K', V::Keyword).source_types(&R::ALL).target_types(&I::ALL),
    Rule::map('L', V::CallNumber)
        .source_types(&[
            R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill, R::Blog, R::Book,
            R::BookSection, R::Case, R::Catalog, R::ChartOrTable, R::ClassicalWork,
            R::ComputerProgram, R::ConferenceProceedings, R::Dataset, R::Dictionary,
            R::EditedBook, R::ElectronicBook, R::ElectronicChapter, R::Encyclopedia,
            R::Equation, R::Figure, R::FilmOrBroadcast, R::Generic, R::Grant, R::Hearing,
            R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript,
            R::Map, R::Music, R::NewspaperArticle, R::Pamphlet, R::Patent,
            R::PersonalCommunication, R::Report, R::Serial, R::Standard, R::Statute, R::Thesis,
            R::WebPage,
        ])
        .target_types(&[
            I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill, I::Book,
            I::Broadcast, I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry,
            I::EntryDictionary, I::EntryEncyclopedia, I::Figure, I::Graphic, I::Hearing,
            I::LegalCase, I::Legislation, I::Manuscript, I::Map, I::MotionPicture,
            I::MusicalScore, I::Pamphlet, I::Patent, I::Periodical, I::PersonalCommunication,
            I::Post, I::PostWeblog, I::Regulation, I::Report, I::Software, I::Song, I::Standard,
            I::Thesis, I::Webpage,
        ]),
    Rule::map('N', V::Number)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::AudiovisualMaterial, R::Bill,
            R::ChartOrTable, R::Dictionary, R::Equation, R::Figure, R::Generic,
            R::GovernmentDocument, R::Hearing, R::Thesis, R::UnpublishedWork,
        ])
        .target_types(&[
            I::Article, I::Bill, I::Document, I::EntryDictionary, I::Figure, I::Hearing,
            I::Thesis,
        ]),
    Rule::map('N', V::Issue)
        .source_types(&[
            R::ConferencePaper, R::ConferenceProceedings, R::ElectronicArticle,
            R::JournalArticle, R::MagazineArticle,
        ])
        .target_types(&[I::ArticleJournal, I::ArticleMagazine, I::PaperConference]),
    Rule::map('N', V::CollectionNumber)
        .source_types(&[
            R::Book, R::BookSection, R::Catalog, R::ClassicalWork, R::EditedBook,
            R::ElectronicChapter, R::Pamphlet, R::Serial,
        ])
        .target_types(&[I::Book, I::Chapter, I::Classic, I::Entry, I::Pamphlet, I::Periodical]),
    Rule::map('N', V::PageFirst)
        .source_types(&[R::LegalRuleOrRegulation, R::NewspaperArticle, R::Standard])
        .target_types(&[I::ArticleNewspaper, I::Regulation, I::Standard]),
    Rule::map('N', V::Status).source_types(&[R::Grant]).forward_only(),
    Rule::map('N', V::Accessed)
        .with(Converter::Date)
        .source_types(&[R::WebPage])
        .target_types(&[I::Webpage]),
    Rule::map('P', V::Page)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Bill, R::BookSection, R::Catalog,
            R::ConferencePaper, R::ConferenceProceedings, R::Dictionary, R::ElectronicArticle,
            R::Encyclopedia, R::Generic, R::GovernmentDocument, R::Grant, R::Hearing,
            R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript,
            R::Music, R::NewspaperArticle, R::OnlineDatabase, R::Pamphlet, R::Patent,
            R::PersonalCommunication, R::Report, R::Serial, R::Standard, R::Statute,
            R::UnpublishedWork,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill,
            I::Chapter, I::Document, I::Entry, I::EntryDictionary, I::EntryEncyclopedia,
            I::Hearing, I::Legislation, I::Manuscript, I::MusicalScore, I::Pamphlet,
            I::PaperConference, I::Patent, I::Periodical, I::PersonalCommunication,
            I::Regulation, I::Report, I::Song, I::Standard,
        ]),
    Rule::map('P', V::PageFirst).source_types(&[R::Case]).target_types(&[I::LegalCase]),
    Rule::map('P', V::NumberOfPages)
        .source_types(&[
            R::Book, R::ClassicalWork, R::EditedBook, R::ElectronicBook, R::ElectronicChapter,
            R::Thesis,
        ])
        .target_types(&[I::Book, I::Classic, I::Thesis]),
    Rule::map('P', V::Dimensions).source_types(&[R::FilmOrBroadcast]).target_types(FILM_ITEMS),
    Rule::map('Q', V::Title)
        .source_types(TITLED_REFS)
        .target_types(TITLED_ITEMS)
        .target_present(&[V::OriginalTitle]),
    Rule::map('T', V::OriginalTitle)
        .source_types(TITLED_REFS)
        .source_present(&['Q'])
        .target_types(TITLED_ITEMS),
    Rule::map('T', V::Title)
        .source_types(TITLED_REFS)
        .source_absent(&['Q'])
        .target_types(TITLED_ITEMS)
        .target_absent(&[V::OriginalTitle]),
    Rule::map('1', V::Title).source_types(CONTAINED_REFS).target_types(CONTAINED_ITEMS),
    Rule::map('&', V::Title)
        .source_types(&[R::BookSection, R::Serial])
        .source_absent(&['1'])
        .forward_only(),
    Rule::map('T', V::ContainerTitle)
        .source_types(CONTAINED_REFS)
        .target_types(CONTAINED_ITEMS),
    Rule::map('R', V::Doi).source_types(&R::ALL).target_types(&I::ALL),
    Rule::map('S', V::CollectionTitle)
        .source_types(&[
            R::BookSection, R::ConferenceProceedings, R::Dataset, R::ElectronicBook,
            R::ElectronicChapter, R::GovernmentDocument, R::Music, R::Serial,
        ])
        .target_types(&[I::Chapter, I::Dataset, I::MusicalScore, I::Periodical, I::Song]),
    Rule::map('U', V::Url).source_types(&R::ALL).target_types(&I::ALL),
    Rule::map('V', V::Issue).source_types(&[R::Statute]).target_types(&[I::Legislation]),
    Rule::map('V', V::Volume)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::AudiovisualMaterial, R::Bill, R::Book,
            R::BookSection, R::Case, R::Catalog, R::ClassicalWork, R::ConferencePaper,
            R::ConferenceProceedings, R::Dictionary, R::EditedBook, R::ElectronicArticle,
            R::ElectronicBook, R::ElectronicChapter, R::Encyclopedia, R::Generic,
            R::GovernmentDocument, R::JournalArticle, R::MagazineArticle, R::Manuscript,
            R::Music, R::NewspaperArticle, R::OnlineDatabase, R::Report, R::Serial,
        ])
        .target_types(&[
            I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill, I::Book,
            I::Chapter, I::Classic, I::Document, I::Entry, I::EntryDictionary,
            I::EntryEncyclopedia, I::LegalCase, I::Manuscript, I::MusicalScore,
            I::PaperConference, I::Periodical, I::Report, I::Song,
        ]),
    Rule::map('V', V::Edition).source_types(&[R::ComputerProgram]).target_types(&[I::Software]),
    Rule::map('V', V::Dimensions)
        .source_types(&[R::ChartOrTable, R::Equation, R::Figure])
        .target_types(&[I::Figure]),
    Rule::map('V', V::Number).source_types(&[R::Pamphlet]).target_types(&[I::Pamphlet]),
    Rule::map('V', V::Version).source_types(&[R::Patent]).target_types(&[I::Patent]),
    Rule::map_any(&['[', 'V'], V::Accessed)
        .with(Converter::Date)
        .source_types(&[R::Blog])
        .target_types(BLOG_ITEMS),
    Rule::map('X', V::Abstract),
    Rule::map('7', V::Abstract)
        .source_types(&[R::Manuscript, R::PersonalCommunication])
        .source_absent(&['X'])
        .forward_only(),
    Rule::map('P', V::Abstract)
        .source_types(&[
            R::Artwork, R::Blog, R::ChartOrTable, R::ComputerProgram, R::Equation, R::Figure,
            R::Map, R::WebPage,
        ])
        .source_absent(&['X'])
        .forward_only(),
    Rule::map('Y', V::Editor)
        .with(Converter::Names)
        .source_types(&[R::Book])
        .target_types(&[I::Book]),
    Rule::map('Y', V::CollectionEditor)
        .with(Converter::Names)
        .source_types(&[
            R::BookSection, R::ConferenceProceedings, R::ElectronicBook, R::ElectronicChapter,
            R::Music, R::Serial,
        ])
        .target_types(&[I::Chapter, I::MusicalScore, I::Periodical, I::Song]),
    Rule::map('Y', V::Illustrator)
        .with(Converter::Names)
        .source_types(&[R::Blog])
        .target_types(BLOG_ITEMS),
    Rule::map('Y', V::Producer)
        .with(Converter::Names)
        .source_types(&[R::FilmOrBroadcast])
        .target_types(FILM_ITEMS),
    Rule::map('Z', V::Note)
        .source_types(&[
            R::AggregatedDatabase, R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill,
            R::Book, R::BookSection, R::Case, R::Catalog, R::ChartOrTable, R::ClassicalWork,
            R::ComputerProgram, R::ConferencePaper, R::ConferenceProceedings, R::Dataset,
            R::Dictionary, R::EditedBook, R::ElectronicArticle, R::ElectronicBook,
            R::ElectronicChapter, R::Encyclopedia, R::Equation, R::Figure, R::FilmOrBroadcast,
            R::Generic, R::GovernmentDocument, R::Grant, R::Hearing, R::MagazineArticle,
            R::Manuscript, R::Map, R::Music, R::NewspaperArticle, R::OnlineDatabase,
            R::OnlineMultimedia, R::Pamphlet, R::Patent, R::PersonalCommunication, R::Report,
            R::Serial, R::Standard, R::Statute, R::Thesis, R::UnpublishedWork, R::WebPage,
        ])
        .target_types(&[
            I::Article, I::ArticleMagazine, I::ArticleNewspaper, I::Bill, I::Book, I::Broadcast,
            I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry, I::EntryDictionary,
            I::EntryEncyclopedia, I::Figure, I::Graphic, I::Hearing, I::LegalCase,
            I::Legislation, I::Manuscript, I::Map, I::MotionPicture, I::MusicalScore,
            I::Pamphlet, I::PaperConference, I::Patent, I::Periodical, I::PersonalCommunication,
            I::Report, I::Software, I::Song, I::Standard, I::Thesis, I::Webpage,
        ]),
    Rule::map('[', V::Accessed)
        .source_types(&[
            R::AncientText, R::Artwork, R::AudiovisualMaterial, R::Bill, R::Book,
            R::BookSection, R::Catalog, R::ChartOrTable, R::ClassicalWork, R::ComputerProgram,
            R::ConferencePaper, R::ConferenceProceedings, R::Dataset, R::Dictionary,
            R::EditedBook, R::ElectronicChapter, R::Encyclopedia, R::Equation, R::Figure,
            R::FilmOrBroadcast, R::Generic, R::GovernmentDocument, R::Grant, R::Hearing,
            R::JournalArticle, R::LegalRuleOrRegulation, R::MagazineArticle, R::Manuscript,
            R::Map, R::Music, R::NewspaperArticle, R::Pamphlet, R::Patent,
            R::PersonalCommunication, R::Report, R::Serial, R::Standard, R::Statute, R::Thesis,
            R::UnpublishedWork,
        ])
        .target_types(&[
            I::Article, I::ArticleJournal, I::ArticleMagazine, I::ArticleNewspaper, I::Bill,
            I::Book, I::Broadcast, I::Chapter, I::Classic, I::Dataset, I::Document, I::Entry,
            I::EntryDictionary, I::EntryEncyclopedia, I::Figure, I::Graphic, I::Hearing,
            I::Legislation, I::Manuscript, I::Map, I::MotionPicture, I::MusicalScore,
            I::Pamphlet, I::PaperConference, I::Patent, I::Periodical, I::PersonalCommunication,
            I::Regulation, I::Report, I::Software, I::Song, I::Standard, I::Thesis,
        ]),
    Rule::map(']', V::Number)
        .source_types(&[R::JournalArticle])
        .target_types(&[I::ArticleJournal]),
    Rule::map(']', V::Pmcid)
        .source_types(&[R::ElectronicBook, R::ElectronicChapter])
        .forward_only(),
];
