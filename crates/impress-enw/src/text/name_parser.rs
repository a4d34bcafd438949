//! Name sub-parser
//!
//! Handles both "Family, Given" and "Given Family" formats. A name ending in
//! a lone comma ("World Health Organization,") is an institution.

use crate::csl::Name;

const SUFFIXES: [&str; 7] = ["Jr", "Jr.", "Sr", "Sr.", "II", "III", "IV"];

/// Parse one name string. Returns `None` for blank input.
pub fn parse_name(input: &str) -> Option<Name> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Institutional names keep their punctuation intact
    if let Some(literal) = trimmed.strip_suffix(',') {
        if !literal.contains(',') {
            let literal = literal.trim();
            return (!literal.is_empty()).then(|| Name::literal(literal));
        }
    }

    if trimmed.contains(',') {
        Some(parse_inverted(trimmed))
    } else {
        Some(parse_natural(trimmed))
    }
}

/// "[particle ]Family, Given[ particle][, Suffix]"
fn parse_inverted(input: &str) -> Name {
    let mut parts = input.splitn(3, ',').map(str::trim);
    let family_part = parts.next().unwrap_or_default();
    let given_part = parts.next().unwrap_or_default();
    let suffix = parts.next().filter(|s| !s.is_empty());

    let mut name = Name {
        suffix: suffix.map(str::to_string),
        ..Default::default()
    };

    let family_words: Vec<&str> = family_part.split_whitespace().collect();
    let particles = leading_particles(&family_words);
    name.non_dropping_particle = join(&family_words[..particles]);
    name.family = join(&family_words[particles..]);

    let given_words: Vec<&str> = given_part.split_whitespace().collect();
    let trailing = given_words
        .iter()
        .rev()
        .take_while(|w| is_particle(w))
        .count();
    // A given part made only of lowercase words is still a given name
    let split = if trailing == given_words.len() {
        given_words.len()
    } else {
        given_words.len() - trailing
    };
    name.given = join(&given_words[..split]);
    name.dropping_particle = join(&given_words[split..]);

    name
}

/// "Given [particle ]Family[ Suffix]"
fn parse_natural(input: &str) -> Name {
    let mut words: Vec<&str> = input.split_whitespace().collect();
    let mut name = Name::default();

    if words.len() > 2 {
        if let Some(last) = words.last() {
            if SUFFIXES.contains(last) {
                name.suffix = Some(last.to_string());
                words.pop();
            }
        }
    }

    let Some((family, rest)) = words.split_last() else {
        return name;
    };
    name.family = Some(family.to_string());

    // The first word is always part of the given name
    let particles = rest
        .iter()
        .skip(1)
        .rev()
        .take_while(|w| is_particle(w))
        .count();
    let given_end = rest.len() - particles;
    name.given = join(&rest[..given_end]);
    name.non_dropping_particle = join(&rest[given_end..]);

    name
}

fn leading_particles(words: &[&str]) -> usize {
    let count = words.iter().take_while(|w| is_particle(w)).count();
    // Never consume the family name itself
    count.min(words.len().saturating_sub(1))
}

/// Lowercase-initial words ("van", "de la") count as particles
fn is_particle(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_lowercase)
}

fn join(words: &[&str]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

/// Format a name in inverted order: "[particle ]Family, Given[ particle][, Suffix]".
///
/// Institutions are written with a trailing comma so they parse back as such.
pub fn format_name(name: &Name) -> String {
    if let Some(literal) = &name.literal {
        return format!("{},", literal);
    }

    let family = match (&name.non_dropping_particle, &name.family) {
        (Some(particle), Some(family)) => Some(format!("{} {}", particle, family)),
        (None, Some(family)) => Some(family.clone()),
        (Some(particle), None) => Some(particle.clone()),
        (None, None) => None,
    };
    let given = match (&name.given, &name.dropping_particle) {
        (Some(given), Some(particle)) => Some(format!("{} {}", given, particle)),
        (Some(given), None) => Some(given.clone()),
        (None, Some(particle)) => Some(particle.clone()),
        (None, None) => None,
    };

    let mut result = match (family, given) {
        (Some(family), Some(given)) => format!("{}, {}", family, given),
        (Some(family), None) => family,
        (None, Some(given)) => given,
        (None, None) => String::new(),
    };
    if let Some(suffix) = &name.suffix {
        // Keep the suffix in the third slot even without a given name
        if name.given.is_none() && name.dropping_particle.is_none() {
            result.push(',');
        }
        result.push_str(", ");
        result.push_str(suffix);
    }
    result
}
