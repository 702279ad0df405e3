//! Page catalog: the five analysis modules and the figures each one shows.

/// A pre-rendered figure on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSpec {
    pub file: &'static str,
    /// Section heading shown above the figure, if any.
    pub title: Option<&'static str>,
    pub caption: &'static str,
    pub description: &'static str,
}

const fn figure(
    file: &'static str,
    title: Option<&'static str>,
    caption: &'static str,
    description: &'static str,
) -> FigureSpec {
    FigureSpec {
        file,
        title,
        caption,
        description,
    }
}

const EDA_FIGURES: [FigureSpec; 5] = [
    figure(
        "cve_year_distribution.png",
        Some("CVE Year Distribution"),
        "Distribution of CVEs by Year",
        "Illustrates the evolution of disclosed vulnerabilities over time.",
    ),
    figure(
        "monthly_distribution.png",
        Some("Monthly Distribution"),
        "Monthly Distribution of CVEs",
        "Reveals temporal and seasonal disclosure patterns.",
    ),
    figure(
        "ransomware_flag.png",
        Some("Ransomware Association"),
        "Ransomware-Linked Vulnerabilities",
        "Indicates whether vulnerabilities are associated with known ransomware campaigns.",
    ),
    figure(
        "top_vendors.png",
        Some("Top Vendors"),
        "Most Affected Vendors",
        "Vendors most frequently appearing in the KEV catalogue.",
    ),
    figure(
        "top_products.png",
        Some("Top Products"),
        "Most Affected Products",
        "Products with the highest number of critical vulnerabilities.",
    ),
];

const CLUSTERING_FIGURES: [FigureSpec; 2] = [
    figure(
        "sb_top_vendors.png",
        None,
        "Vendor Clusters",
        "Similarity-based clustering of vendors.",
    ),
    figure(
        "sb_year_added.png",
        None,
        "Clusters by Year Added",
        "Temporal distribution of vulnerabilities within clusters.",
    ),
];

const ASSOCIATION_FIGURES: [FigureSpec; 2] = [
    figure(
        "vendor_month_top20.png",
        None,
        "Vendor–Month Heatmap (Top 20)",
        "Monthly vulnerability concentration for top vendors.",
    ),
    figure(
        "vendor_month_top20_pct.png",
        None,
        "Vendor–Month Heatmap (%)",
        "Normalized monthly distribution by vendor.",
    ),
];

const TREND_FIGURES: [FigureSpec; 3] = [
    figure(
        "timeline_by_month.png",
        None,
        "Timeline of CVEs by Month",
        "Overall vulnerability disclosure timeline.",
    ),
    figure(
        "trend_by_year.png",
        None,
        "Yearly Trend of CVEs",
        "Annual growth trend of vulnerabilities.",
    ),
    figure(
        "trend_boxplot_year.png",
        None,
        "Distribution of CVEs per Year",
        "Yearly variability in CVE counts.",
    ),
];

/// Analysis modules selectable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    EdaOverview,
    ModelingResults,
    ClusteringInsights,
    AssociationRules,
    TrendsForecast,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::EdaOverview,
        Page::ModelingResults,
        Page::ClusteringInsights,
        Page::AssociationRules,
        Page::TrendsForecast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::EdaOverview => "EDA Overview",
            Page::ModelingResults => "Modeling Results",
            Page::ClusteringInsights => "Clustering Insights",
            Page::AssociationRules => "Association Rules",
            Page::TrendsForecast => "Trends & Forecast",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::EdaOverview => "Exploratory Data Analysis",
            Page::ModelingResults => "Machine Learning Results",
            Page::ClusteringInsights => "Clustering Insights",
            Page::AssociationRules => "Association Rule Mining",
            Page::TrendsForecast => "Temporal Trends",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Page::EdaOverview => "High-level overview of vulnerability volume, vendors, and products.",
            Page::ModelingResults => {
                "Supervised models trained to classify vulnerability characteristics."
            }
            Page::ClusteringInsights => {
                "Unsupervised clustering to identify similarity patterns across vendors and time."
            }
            Page::AssociationRules => "Frequent co-occurrence patterns across vendors and months.",
            Page::TrendsForecast => "Long-term evolution of vulnerability disclosures.",
        }
    }

    /// Pre-rendered figures, in display order.
    pub fn figures(self) -> &'static [FigureSpec] {
        match self {
            Page::EdaOverview => &EDA_FIGURES,
            Page::ModelingResults => &[],
            Page::ClusteringInsights => &CLUSTERING_FIGURES,
            Page::AssociationRules => &ASSOCIATION_FIGURES,
            Page::TrendsForecast => &TREND_FIGURES,
        }
    }

    /// Whether the page reads anything from the dataset.
    pub fn needs_dataset(self) -> bool {
        matches!(self, Page::EdaOverview | Page::TrendsForecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_labels_in_order() {
        let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "EDA Overview",
                "Modeling Results",
                "Clustering Insights",
                "Association Rules",
                "Trends & Forecast"
            ]
        );
    }

    #[test]
    fn figure_files_are_unique_pngs() {
        let mut files: Vec<&str> = Page::ALL
            .iter()
            .flat_map(|p| p.figures().iter().map(|f| f.file))
            .collect();
        assert_eq!(files.len(), 12);
        assert!(files.iter().all(|f| f.ends_with(".png")));
        files.sort();
        files.dedup();
        assert_eq!(files.len(), 12);
    }

    #[test]
    fn modeling_page_has_no_figures() {
        assert!(Page::ModelingResults.figures().is_empty());
        assert!(!Page::ModelingResults.needs_dataset());
    }
}
