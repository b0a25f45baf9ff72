//! Static project-name → compound-ID alias table.
//!
//! Several projects appear in source spreadsheets under more than one spelling,
//! so each spelling is its own entry. Matching is exact after trimming; the
//! casing variants are deliberate entries, not a substitute for case folding
//! (near-miss names like "Rai" and "Rai Views" map to different compounds).

/// Alias → compound ID, one entry per known spelling
pub static PROJECT_ALIASES: &[(&str, i64)] = &[
    ("Club Views", 678),
    ("Elan", 571),
    ("ELAN", 571),
    ("esse residence", 572),
    ("Esse Residence", 572),
    ("Origami", 577),
    ("ORIGAMI", 577),
    ("Rai", 719),
    ("RAI", 719),
    ("Rai Valleys", 575),
    ("Rai Views", 574),
    ("RAI VIEWS", 574),
    ("Sheya Residence", 573),
    ("Sheya residence", 573),
    ("Talala", 796),
    ("TALALA", 796),
    ("The Butterfly", 601),
    ("Zahw Assuit", 1362),
];

/// Resolve a raw project name to its compound ID.
///
/// Trims surrounding whitespace, then exact-matches against the alias table.
pub fn compound_id_for(project: &str) -> Option<i64> {
    let name = project.trim();
    PROJECT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, id)| *id)
}
