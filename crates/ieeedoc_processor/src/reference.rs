/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! IEEE reference list entries.
//!
//! ```text
//! [n] Authors, "Title," Venue, vol. V, no. N, pp. P, Year. DOI: D.
//! ```
//!
//! `n` is the 1-based position in the reference list. The venue is the
//! journal, or the conference when the journal is empty. Empty optional
//! fields are left out along with their prefix. Field values go through
//! [`OutputFormat::text`].

use crate::render::format::OutputFormat;
use ieeedoc_core::paper::non_empty;
use ieeedoc_core::Reference;

/// Render the entry for `reference` at 1-based `position`.
pub fn format_reference<F: OutputFormat>(fmt: &F, position: usize, reference: &Reference) -> String {
    let venue = fmt.emph(fmt.text(reference.venue().unwrap_or_default()));
    let mut out = format!(
        "[{}] {}, \"{},\" {}",
        position,
        fmt.text(&reference.authors),
        fmt.text(&reference.title),
        venue
    );

    let parts = [
        (", vol. ", reference.volume.as_deref()),
        (", no. ", reference.number.as_deref()),
        (", pp. ", reference.pages.as_deref()),
    ];
    for (prefix, value) in parts {
        if let Some(value) = non_empty(value) {
            out.push_str(prefix);
            out.push_str(&fmt.text(value));
        }
    }

    out.push_str(", ");
    out.push_str(&fmt.text(&reference.year));
    out.push('.');

    if let Some(doi) = non_empty(reference.doi.as_deref()) {
        out.push_str(" DOI: ");
        out.push_str(&fmt.text(doi));
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{html::Html, plain::PlainText};

    fn journal_article() -> Reference {
        Reference {
            id: "smith".into(),
            authors: "J. Smith and A. Doe".into(),
            title: "Example Paper Title".into(),
            journal: Some("IEEE Trans. Robot.".into()),
            volume: Some("10".into()),
            number: Some("2".into()),
            pages: Some("123-135".into()),
            year: "2023".into(),
            doi: Some("10.1109/TRO.2023.1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn full_journal_entry() {
        assert_eq!(
            format_reference(&Html, 1, &journal_article()),
            "[1] J. Smith and A. Doe, \"Example Paper Title,\" <em>IEEE Trans. Robot.</em>, \
             vol. 10, no. 2, pp. 123-135, 2023. DOI: 10.1109/TRO.2023.1."
        );
    }

    #[test]
    fn conference_fallback_and_empty_fields() {
        let reference = Reference {
            journal: Some(String::new()),
            conference: Some("Proc. ICRA".into()),
            volume: Some(String::new()),
            number: None,
            pages: Some("1-8".into()),
            doi: None,
            ..journal_article()
        };
        assert_eq!(
            format_reference(&PlainText, 3, &reference),
            "[3] J. Smith and A. Doe, \"Example Paper Title,\" _Proc. ICRA_, pp. 1-8, 2023."
        );
    }

    #[test]
    fn html_escapes_field_values() {
        let reference = Reference {
            authors: "A. Smith & B. Jones".into(),
            title: "Why <b> is bold".into(),
            journal: Some("Trans. \"Quoted\"".into()),
            ..journal_article()
        };
        let html = format_reference(&Html, 1, &reference);
        assert!(html.starts_with(
            "[1] A. Smith &amp; B. Jones, \"Why &lt;b&gt; is bold,\" <em>Trans. &quot;Quoted&quot;</em>,"
        ));
        let plain = format_reference(&PlainText, 1, &reference);
        assert!(plain.starts_with("[1] A. Smith & B. Jones, \"Why <b> is bold,\""));
    }

    #[test]
    fn no_venue_keeps_separator() {
        let reference = Reference {
            id: "x".into(),
            authors: "A".into(),
            title: "T".into(),
            year: "n.d.".into(),
            ..Default::default()
        };
        assert_eq!(format_reference(&Html, 2, &reference), "[2] A, \"T,\" , n.d.");
    }
}
