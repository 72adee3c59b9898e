use crate::structs::issue::Issue;

const DEMO_ROWS: &[(&str, [&str; 3], &str)] = &[
    ("DEMO-1", ["type-ny-funksjonalitet", "domene-1", "tema-backend"], "ola.nordmann"),
    ("DEMO-2", ["type-vedlikehald", "domene-2", "tema-frontend"], "kari.hansen"),
    ("DEMO-3", ["type-ny-funksjonalitet", "domene-1", "tema-integrasjon"], "ola.nordmann"),
    ("DEMO-4", ["type-utforsking", "domene-3", "tema-backend"], "per.jensen"),
    ("DEMO-5", ["type-vedlikehald", "domene-1", "tema-backend"], "kari.hansen"),
    ("DEMO-6", ["type-ny-funksjonalitet", "domene-2", "tema-frontend"], "ola.nordmann"),
    ("DEMO-7", ["type-utforsking", "domene-2", "tema-integrasjon"], "per.jensen"),
    ("DEMO-8", ["type-vedlikehald", "domene-3", "tema-backend"], "kari.hansen"),
    ("DEMO-9", ["type-ny-funksjonalitet", "domene-1", "tema-frontend"], "ola.nordmann"),
    ("DEMO-10", ["type-ny-funksjonalitet", "domene-2", "tema-backend"], "per.jensen"),
    ("DEMO-11", ["type-vedlikehald", "domene-1", "tema-integrasjon"], "kari.hansen"),
    ("DEMO-12", ["type-utforsking", "domene-3", "tema-frontend"], "ola.nordmann"),
    ("DEMO-13", ["type-ny-funksjonalitet", "domene-3", "tema-backend"], "per.jensen"),
    ("DEMO-14", ["type-vedlikehald", "domene-2", "tema-backend"], "kari.hansen"),
    ("DEMO-15", ["type-utforsking", "domene-1", "tema-frontend"], "ola.nordmann"),
];

/// Sample issue set for trying the reports without a tracker connection.
pub fn demo_issues() -> Vec<Issue> {
    DEMO_ROWS
        .iter()
        .map(|(key, labels, assignee)| {
            Issue::new(
                key,
                "",
                labels.iter().map(|l| (*l).to_string()).collect(),
                Some((*assignee).to_string()),
            )
        })
        .collect()
}
