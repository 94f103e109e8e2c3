//! Research modules advertised on the landing page. Each lives on its own page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Module {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    /// Card text under the heading
    pub description: &'static str,
    /// Sidebar label; not always the card title
    pub nav_title: &'static str,
    /// One-liner for the sidebar navigation hints
    pub nav_hint: &'static str,
    pub button: &'static str,
    /// Shown when the card's button is pressed
    pub message: &'static str,
    pub column: Column,
}

pub const MODULES: &[Module] = &[
    Module {
        slug: "statistical-analysis",
        icon: "📈",
        title: "Statistical Analysis",
        nav_title: "Statistical Analysis",
        description: "Integrated R computing environment for comprehensive statistical validation",
        nav_hint: "R-based statistical computing",
        button: "Open Statistical Analysis",
        message: "Navigate to 'Statistical Analysis' page using the sidebar menu",
        column: Column::Left,
    },
    Module {
        slug: "paper-rewriter",
        icon: "✍️",
        title: "Paper Rewriter",
        nav_title: "Paper Rewriter",
        description: "Academic tone enhancement and structure optimization",
        nav_hint: "Academic writing enhancement",
        button: "Open Paper Rewriter",
        message: "Navigate to 'Paper Rewriter' page using the sidebar menu",
        column: Column::Left,
    },
    Module {
        slug: "molecular-docking",
        icon: "🧬",
        title: "Molecular Docking",
        nav_title: "Molecular Docking",
        description: "PyMOL & WebINA-like molecular visualization and biophysical simulation",
        nav_hint: "PyMOL & WebINA-like molecular simulation",
        button: "Open Molecular Docking",
        message: "Navigate to 'Molecular Docking' page using the sidebar",
        column: Column::Left,
    },
    Module {
        slug: "meta-analysis",
        icon: "🔬",
        title: "Meta-Analysis Tools",
        nav_title: "Meta-Analysis Verification",
        description: "Verify effect sizes, confidence intervals, and heterogeneity measures",
        nav_hint: "Validate and recalculate meta-analyses",
        button: "Open Meta-Analysis",
        message: "Navigate to 'Meta-Analysis Verification' page using the sidebar menu",
        column: Column::Right,
    },
    Module {
        slug: "data-import",
        icon: "📊",
        title: "Data Import",
        nav_title: "Data Import",
        description: "Upload and process research data with automatic validation",
        nav_hint: "Upload and process research data with automatic validation",
        button: "Open Data Import",
        message: "Navigate to 'Data Import' page using the sidebar menu",
        column: Column::Right,
    },
    Module {
        slug: "validation-results",
        icon: "📋",
        title: "Validation Results",
        nav_title: "Validation Results",
        description: "View automatic validation results and detailed analysis reports",
        nav_hint: "View automatic validation test results",
        button: "Open Validation Results",
        message: "Navigate to 'Validation Results' page using the sidebar menu",
        column: Column::Right,
    },
    Module {
        slug: "pharmacological-maps",
        icon: "🧬",
        title: "Pharmacological Maps",
        nav_title: "Pharmacological Maps",
        description: "Generate 3D topological maps of drug responses using UniProt data",
        nav_hint: "3D topological maps of drug responses from UniProt data",
        button: "Open Pharmacological Maps",
        message: "Navigate to 'Pharmacological Topological Maps' page using the sidebar",
        column: Column::Right,
    },
    Module {
        slug: "data-citations",
        icon: "📚",
        title: "Data Citations",
        nav_title: "Data Citations",
        description: "Complete bibliography and attribution for all data sources",
        nav_hint: "Complete attribution and citations for all data sources",
        button: "Open Data Citations",
        message: "Navigate to 'Data Citations' page using the sidebar menu",
        column: Column::Right,
    },
    Module {
        slug: "plot-implications",
        icon: "📈",
        title: "Plot Implications",
        nav_title: "Plot Implications",
        description: "Clinical insights and research implications of pharmacological plots",
        nav_hint: "Clinical insights and research implications of generated plots",
        button: "Open Plot Implications",
        message: "Navigate to 'Plot Implications' page using the sidebar menu",
        column: Column::Right,
    },
];

/// Sidebar order differs from the card layout.
pub const NAV_ORDER: &[&str] = &[
    "statistical-analysis",
    "meta-analysis",
    "paper-rewriter",
    "data-import",
    "molecular-docking",
    "validation-results",
    "pharmacological-maps",
    "data-citations",
    "plot-implications",
];

pub fn find(slug: &str) -> Option<&'static Module> {
    MODULES.iter().find(|m| m.slug == slug)
}

pub fn column(column: Column) -> impl Iterator<Item = &'static Module> {
    MODULES.iter().filter(move |m| m.column == column)
}

pub fn nav_hints() -> impl Iterator<Item = &'static Module> {
    NAV_ORDER.iter().filter_map(|slug| find(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique_and_navigable() {
        let slugs: HashSet<_> = MODULES.iter().map(|m| m.slug).collect();
        assert_eq!(slugs.len(), MODULES.len());
        assert_eq!(nav_hints().count(), MODULES.len());
        let meta = find("meta-analysis").unwrap();
        assert_eq!(meta.title, "Meta-Analysis Tools");
        assert_eq!(meta.nav_title, "Meta-Analysis Verification");
    }

    #[test]
    fn test_column_split() {
        assert_eq!(column(Column::Left).count(), 3);
        assert_eq!(column(Column::Right).count(), 6);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("data-import").map(|m| m.title), Some("Data Import"));
        assert!(find("nope").is_none());
    }
}
