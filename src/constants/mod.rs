pub mod demo_issues;
pub mod palettes;
