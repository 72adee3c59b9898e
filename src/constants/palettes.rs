pub const TYPE_COLORS: &[&str] = &["#059669", "#0284c7", "#d97706", "#dc2626", "#7c3aed", "#db2777"];
pub const DOMENE_COLORS: &[&str] = &["#6366f1", "#ec4899", "#06b6d4", "#84cc16", "#f97316", "#8b5cf6"];
pub const TEMA_COLORS: &[&str] = &["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#a855f7", "#14b8a6"];

pub const ASSIGNEE_COLORS: &[&str] = &[
    "#0ea5e9", "#8b5cf6", "#f59e0b", "#10b981", "#ef4444", "#ec4899", "#06b6d4", "#84cc16",
];

/// (prefix, display name, description, palette)
pub const KNOWN_CATEGORIES: &[(&str, &str, &str, &[&str])] = &[
    ("type", "Type", "Task type", TYPE_COLORS),
    ("domene", "Domene", "Subject area", DOMENE_COLORS),
    ("tema", "Tema", "Technical", TEMA_COLORS),
];
