//! Compose document assembly.
//!
//! Pure text functions: each clause is built as a list of lines and joined
//! explicitly, placeholder substitution is a single linear scan, and the
//! final blank-line collapse is an independent, idempotent pass. No part of
//! this module performs I/O — fragment texts arrive pre-resolved from the
//! application layer.

use super::catalog::ServiceDescriptor;

/// Placeholder for the selected runtime version.
pub const RUNTIME_TOKEN: &str = "{{runtime}}";
/// Placeholder for the `depends_on:` clause of the `app` service.
pub const DEPENDS_TOKEN: &str = "{{depends}}";
/// Placeholder for the concatenated per-service fragments.
pub const SERVICES_TOKEN: &str = "{{services}}";
/// Placeholder for the named-volumes clause.
pub const VOLUMES_TOKEN: &str = "{{volumes}}";

// Indentation of the app service block the depends clause lands in.
const DEPENDS_HEADER: &str = "        depends_on:";
const DEPENDS_ITEM_INDENT: &str = "            - ";

const VOLUMES_HEADER: &str = "volumes:";
const VOLUME_NAME_INDENT: &str = "    plane-";
const VOLUME_DRIVER_LINE: &str = "        driver: local";

/// Render the `depends_on:` clause for the selected services.
///
/// Services whose descriptor does not require a dependency entry contribute
/// nothing; selection order is preserved. An empty list collapses to an empty
/// string — the header is only emitted when at least one item exists.
pub fn depends_clause<'a>(selected: impl IntoIterator<Item = &'a ServiceDescriptor>) -> String {
    let items: Vec<String> = selected
        .into_iter()
        .filter(|d| d.requires_depends_on())
        .map(|d| format!("{DEPENDS_ITEM_INDENT}{}", d.name()))
        .collect();

    if items.is_empty() {
        String::new()
    } else {
        format!("{DEPENDS_HEADER}\n{}", items.join("\n"))
    }
}

/// Render the named-volumes clause for the selected services.
///
/// Each volume-requiring service yields a two-line `plane-<name>` stanza with
/// the local driver, in selection order. Empty collapses to an empty string.
pub fn volumes_clause<'a>(selected: impl IntoIterator<Item = &'a ServiceDescriptor>) -> String {
    let stanzas: Vec<String> = selected
        .into_iter()
        .filter(|d| d.requires_volume())
        .map(|d| format!("{VOLUME_NAME_INDENT}{}:\n{VOLUME_DRIVER_LINE}", d.name()))
        .collect();

    if stanzas.is_empty() {
        String::new()
    } else {
        format!("{VOLUMES_HEADER}\n{}", stanzas.join("\n"))
    }
}

/// Substitute the four placeholder tokens into the base template.
///
/// The template is scanned once, left to right; replacement text is emitted
/// verbatim and never rescanned, so a fragment that happens to contain a
/// placeholder token is NOT re-substituted.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        let mut earliest: Option<(usize, usize, &str)> = None;
        for &(token, value) in replacements {
            if let Some(pos) = rest.find(token) {
                if earliest.is_none_or(|(p, _, _)| pos < p) {
                    earliest = Some((pos, token.len(), value));
                }
            }
        }

        match earliest {
            Some((pos, token_len, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + token_len..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    out
}

/// Collapse every run of blank or whitespace-only lines.
///
/// Whitespace-only lines are removed outright, including a leading run at the
/// very start of the document, so the output never contains consecutive blank
/// lines no matter how many clauses collapsed to empty strings upstream.
/// Every surviving line is terminated with a single `\n`. Idempotent.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Assemble the final compose document from pre-rendered pieces.
///
/// `fragments` is the concatenated per-service stub text with trailing
/// whitespace already trimmed; `depends` and `volumes` are the outputs of
/// [`depends_clause`] / [`volumes_clause`].
pub fn assemble_document(
    base_template: &str,
    runtime: &str,
    depends: &str,
    fragments: &str,
    volumes: &str,
) -> String {
    let substituted = substitute(
        base_template,
        &[
            (RUNTIME_TOKEN, runtime),
            (DEPENDS_TOKEN, depends),
            (SERVICES_TOKEN, fragments),
            (VOLUMES_TOKEN, volumes),
        ],
    );
    collapse_blank_lines(&substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceCatalog;

    fn descriptors<'a>(
        catalog: &'a ServiceCatalog,
        names: &[&str],
    ) -> Vec<&'a ServiceDescriptor> {
        names.iter().map(|n| catalog.lookup(n).unwrap()).collect()
    }

    // ── depends clause ────────────────────────────────────────────────────

    #[test]
    fn depends_clause_lists_all_builtin_services_in_order() {
        let catalog = ServiceCatalog::builtin();
        let clause = depends_clause(descriptors(&catalog, &["mailhog", "postgres", "redis"]));

        assert_eq!(
            clause,
            "        depends_on:\n\
             \x20           - mailhog\n\
             \x20           - postgres\n\
             \x20           - redis"
        );
    }

    #[test]
    fn depends_clause_preserves_selection_order() {
        let catalog = ServiceCatalog::builtin();
        let clause = depends_clause(descriptors(&catalog, &["redis", "mailhog"]));

        let redis_at = clause.find("- redis").unwrap();
        let mailhog_at = clause.find("- mailhog").unwrap();
        assert!(redis_at < mailhog_at);
    }

    #[test]
    fn depends_clause_empty_selection_is_empty_string() {
        assert_eq!(depends_clause([]), "");
    }

    // ── volumes clause ────────────────────────────────────────────────────

    #[test]
    fn volumes_clause_excludes_volumeless_services() {
        let catalog = ServiceCatalog::builtin();
        let clause = volumes_clause(descriptors(&catalog, &["mailhog", "postgres", "redis"]));

        assert!(!clause.contains("plane-mailhog"));
        let postgres_at = clause.find("plane-postgres").unwrap();
        let redis_at = clause.find("plane-redis").unwrap();
        assert!(postgres_at < redis_at);
    }

    #[test]
    fn volumes_clause_renders_driver_stanza() {
        let catalog = ServiceCatalog::builtin();
        let clause = volumes_clause(descriptors(&catalog, &["postgres"]));

        assert_eq!(
            clause,
            "volumes:\n    plane-postgres:\n        driver: local"
        );
    }

    #[test]
    fn volumes_clause_empty_when_no_service_requires_one() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(volumes_clause(descriptors(&catalog, &["mailhog"])), "");
    }

    // ── substitution ──────────────────────────────────────────────────────

    #[test]
    fn substitute_replaces_tokens_in_template_order() {
        let out = substitute(
            "a={{runtime}} b={{depends}} c={{services}} d={{volumes}}",
            &[
                (RUNTIME_TOKEN, "8.2"),
                (DEPENDS_TOKEN, "D"),
                (SERVICES_TOKEN, "S"),
                (VOLUMES_TOKEN, "V"),
            ],
        );
        assert_eq!(out, "a=8.2 b=D c=S d=V");
    }

    #[test]
    fn substitute_does_not_rescan_replacement_text() {
        // A fragment containing a placeholder token must survive verbatim.
        let out = substitute(
            "before {{services}} after",
            &[(SERVICES_TOKEN, "payload {{volumes}}"), (VOLUMES_TOKEN, "X")],
        );
        assert_eq!(out, "before payload {{volumes}} after");
    }

    #[test]
    fn substitute_leaves_tokenless_template_untouched() {
        let out = substitute("no tokens here", &[(RUNTIME_TOKEN, "8.2")]);
        assert_eq!(out, "no tokens here");
    }

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn collapse_removes_interior_blank_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n"), "a\nb\n");
        assert_eq!(collapse_blank_lines("a\n   \n\t\nb\n"), "a\nb\n");
    }

    #[test]
    fn collapse_removes_leading_blank_run() {
        assert_eq!(collapse_blank_lines("\n\n\nservices:\n"), "services:\n");
    }

    #[test]
    fn collapse_is_idempotent() {
        let input = "\n\na\n \nb\n\n\nc\n\n";
        let once = collapse_blank_lines(input);
        let twice = collapse_blank_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn collapse_of_empty_input_is_empty() {
        assert_eq!(collapse_blank_lines(""), "");
        assert_eq!(collapse_blank_lines("\n\n"), "");
    }

    // ── full assembly ─────────────────────────────────────────────────────

    #[test]
    fn assemble_document_has_no_leftover_tokens_or_blank_lines() {
        let base = "services:\n    app:\n        image: app-{{runtime}}\n{{depends}}\n{{services}}\n{{volumes}}\n";
        let out = assemble_document(base, "8.2", "", "", "");

        for token in [RUNTIME_TOKEN, DEPENDS_TOKEN, SERVICES_TOKEN, VOLUMES_TOKEN] {
            assert!(!out.contains(token), "leftover {token}");
        }
        assert!(!out.contains("\n\n"));
        assert!(out.contains("image: app-8.2"));
    }
}
