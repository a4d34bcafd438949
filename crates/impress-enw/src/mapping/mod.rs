//! Declarative mapping between tags and CSL variables
//!
//! Every rule links one tag (or a preference-ordered list of tags) to one
//! variable (or a fan-out list of variables), optionally through a
//! [`Converter`]. Each side carries its own guard, restricting the rule to
//! records of certain types or with certain keys present or absent. A guard
//! is only read when translating *from* its side: `when_source` gates
//! tagged → CSL, `when_target` gates CSL → tagged. The table is ordered: the
//! engine scans it top to bottom and the first rule to populate an output
//! key wins.

pub mod converters;
mod table;

pub use converters::Converter;
pub use table::RULES;

use crate::csl::Variable;
use crate::types::{ItemType, ReferenceType};

/// Input keys of a rule on the tagged side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Tag(char),
    /// Tags in order of preference; positional for converters
    Alternatives(&'static [char]),
}

impl Source {
    pub fn tags(&self) -> &[char] {
        match self {
            Self::Tag(tag) => std::slice::from_ref(tag),
            Self::Alternatives(tags) => tags,
        }
    }
}

/// Output keys of a rule on the normalized side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Variable(Variable),
    /// Positional variables filled from a converter's tuple result
    FanOut(&'static [Variable]),
}

impl Target {
    pub fn variables(&self) -> &[Variable] {
        match self {
            Self::Variable(variable) => std::slice::from_ref(variable),
            Self::FanOut(variables) => variables,
        }
    }
}

/// Conditions on one side of a record.
///
/// All listed conditions must hold: the record type is one of `types`, every
/// key in `present` is set and no key in `absent` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard<T: 'static, K: 'static> {
    pub types: Option<&'static [T]>,
    pub present: &'static [K],
    pub absent: &'static [K],
}

/// Constraint a rule places on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side<T: 'static, K: 'static> {
    /// No constraint
    Any,
    /// The rule is skipped when translating from this side
    Never,
    Guard(Guard<T, K>),
}

pub type SourceSide = Side<ReferenceType, char>;
pub type TargetSide = Side<ItemType, Variable>;

/// One mapping rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub source: Source,
    pub target: Target,
    pub when_source: SourceSide,
    pub when_target: TargetSide,
    pub convert: Option<Converter>,
}

impl Rule {
    /// Copy one tag to one variable
    pub const fn map(tag: char, variable: Variable) -> Self {
        Self::new(Source::Tag(tag), Target::Variable(variable))
    }

    /// Read the first present of several tags into one variable
    pub const fn map_any(tags: &'static [char], variable: Variable) -> Self {
        Self::new(Source::Alternatives(tags), Target::Variable(variable))
    }

    /// Spread one tag over several variables (requires a converter)
    pub const fn fan_out(tag: char, variables: &'static [Variable]) -> Self {
        Self::new(Source::Tag(tag), Target::FanOut(variables))
    }

    const fn new(source: Source, target: Target) -> Self {
        Self {
            source,
            target,
            when_source: Side::Any,
            when_target: Side::Any,
            convert: None,
        }
    }

    pub const fn with(mut self, converter: Converter) -> Self {
        self.convert = Some(converter);
        self
    }

    /// Only apply to records whose `%0` type is listed
    pub const fn source_types(mut self, types: &'static [ReferenceType]) -> Self {
        let mut guard = self.source_guard();
        guard.types = Some(types);
        self.when_source = Side::Guard(guard);
        self
    }

    /// Only apply when every listed tag is set
    pub const fn source_present(mut self, tags: &'static [char]) -> Self {
        let mut guard = self.source_guard();
        guard.present = tags;
        self.when_source = Side::Guard(guard);
        self
    }

    /// Only apply when no listed tag is set
    pub const fn source_absent(mut self, tags: &'static [char]) -> Self {
        let mut guard = self.source_guard();
        guard.absent = tags;
        self.when_source = Side::Guard(guard);
        self
    }

    /// Only apply to records whose `type` is listed
    pub const fn target_types(mut self, types: &'static [ItemType]) -> Self {
        let mut guard = self.target_guard();
        guard.types = Some(types);
        self.when_target = Side::Guard(guard);
        self
    }

    pub const fn target_present(mut self, variables: &'static [Variable]) -> Self {
        let mut guard = self.target_guard();
        guard.present = variables;
        self.when_target = Side::Guard(guard);
        self
    }

    pub const fn target_absent(mut self, variables: &'static [Variable]) -> Self {
        let mut guard = self.target_guard();
        guard.absent = variables;
        self.when_target = Side::Guard(guard);
        self
    }

    /// Never read the normalized side: the rule only imports
    pub const fn forward_only(mut self) -> Self {
        self.when_target = Side::Never;
        self
    }

    const fn source_guard(&self) -> Guard<ReferenceType, char> {
        match self.when_source {
            Side::Guard(guard) => guard,
            Side::Any | Side::Never => Guard {
                types: None,
                present: &[],
                absent: &[],
            },
        }
    }

    const fn target_guard(&self) -> Guard<ItemType, Variable> {
        match self.when_target {
            Side::Guard(guard) => guard,
            Side::Any | Side::Never => Guard {
                types: None,
                present: &[],
                absent: &[],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        const RULE: Rule = Rule::map('T', Variable::Title)
            .source_types(&[ReferenceType::Book])
            .source_absent(&['Q'])
            .target_absent(&[Variable::OriginalTitle]);

        assert_eq!(RULE.source.tags(), &['T']);
        assert_eq!(RULE.target.variables(), &[Variable::Title]);
        assert_eq!(
            RULE.when_source,
            Side::Guard(Guard {
                types: Some(&[ReferenceType::Book]),
                present: &[],
                absent: &['Q'],
            })
        );
        assert!(matches!(RULE.when_target, Side::Guard(g) if g.types.is_none()));
    }

    #[test]
    fn test_forward_only() {
        let rule = Rule::map('#', Variable::Medium).forward_only();
        assert_eq!(rule.when_target, Side::Never);
        assert_eq!(rule.when_source, Side::Any);
    }

    #[test]
    fn test_every_rule_is_well_formed() {
        for rule in RULES {
            let inputs = rule.source.tags().len();
            let outputs = rule.target.variables().len();
            assert!(inputs > 0 && outputs > 0);
            // Positional tuples only make sense through a converter
            if inputs > 1 || outputs > 1 {
                assert!(rule.convert.is_some(), "{:?}", rule);
            }
        }
    }

    #[test]
    fn test_table_has_one_type_rule() {
        let type_rules: Vec<_> = RULES
            .iter()
            .filter(|rule| rule.convert == Some(Converter::Type))
            .collect();
        assert_eq!(type_rules.len(), 1);
        assert_eq!(type_rules[0].source, Source::Tag('0'));
        assert_eq!(type_rules[0].target, Target::Variable(Variable::Type));
    }
}
