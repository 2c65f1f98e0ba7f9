use tracing::debug;

use crate::metadata::Metadata;

/// Strip every character outside `[A-Za-z0-9 ]`.
fn sanitize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Expand a raw query into lowercase search terms.
///
/// Hyphenated words contribute their split parts plus the word with its
/// first hyphen removed, so "co-op" searches as "co", "op" and "coop".
/// Tokens that sanitize to nothing are dropped, so an empty, whitespace-only
/// or punctuation-only query produces no terms.
fn prepare_query_words(query: &str) -> Vec<String> {
    query
        .split(' ')
        .flat_map(|word| {
            if word.contains('-') {
                let mut terms: Vec<String> = word.split('-').map(String::from).collect();
                terms.push(word.replacen('-', "", 1));
                terms
            } else {
                vec![word.to_string()]
            }
        })
        .map(|term| sanitize(&term).to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Whether a record matches any query term on any field.
///
/// Keywords match by exact lowercased equality with a term; every other
/// present field matches when its sanitized, lowercased text contains a
/// term as a substring. An empty term list matches everything.
fn contains(record: &Metadata, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }

    if let Some(keywords) = &record.keywords {
        let keyword_hit = keywords
            .iter()
            .any(|k| terms.iter().any(|t| *t == k.to_lowercase()));
        if keyword_hit {
            return true;
        }
    }

    [
        &record.url,
        &record.site_name,
        &record.title,
        &record.description,
        &record.author,
    ]
    .into_iter()
    .flatten()
    .any(|value| {
        let text = sanitize(value).to_lowercase();
        terms.iter().any(|t| text.contains(t.as_str()))
    })
}

/// Filter records down to those matching the query, preserving input order.
///
/// OR semantics across both terms and fields: one term hitting one field is
/// enough. A query that yields no terms returns every record.
pub fn filter_metadata(records: &[Metadata], query: &str) -> Vec<Metadata> {
    let terms = prepare_query_words(query);
    let matched: Vec<Metadata> = records
        .iter()
        .filter(|record| contains(record, &terms))
        .cloned()
        .collect();
    debug!(
        terms = terms.len(),
        matched = matched.len(),
        total = records.len(),
        "filtered records"
    );
    matched
}
