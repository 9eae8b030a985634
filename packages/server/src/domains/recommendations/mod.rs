//! Recommendations domain - fixed list of local SEO actions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub category: &'static str,
    pub priority: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub effort: &'static str,
}

pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        id: 1,
        category: "Citation",
        priority: "High",
        title: "Claim Your Google Business Profile",
        description: "Ensure your Google Business Profile is fully optimized with accurate NAP data, photos, and regular posts.",
        impact: "High",
        effort: "Low",
    },
    Recommendation {
        id: 2,
        category: "Content",
        priority: "High",
        title: "Add Service Area Pages",
        description: "Create dedicated pages for each service area you serve to improve local relevance.",
        impact: "High",
        effort: "Medium",
    },
    Recommendation {
        id: 3,
        category: "SEO",
        priority: "Medium",
        title: "Build More Citations",
        description: "Add your business to 10+ new citation directories to improve local trust signals.",
        impact: "Medium",
        effort: "Low",
    },
    Recommendation {
        id: 4,
        category: "Review",
        priority: "High",
        title: "Request More Reviews",
        description: "Implement a review request system after completed services.",
        impact: "High",
        effort: "Medium",
    },
    Recommendation {
        id: 5,
        category: "Technical",
        priority: "Medium",
        title: "Improve Page Speed",
        description: "Optimize images and enable caching to improve website loading speed.",
        impact: "Medium",
        effort: "Medium",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationList {
    pub recommendations: Vec<Recommendation>,
    /// Counts below are over the whole list, not the filtered view.
    pub total: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
}

/// Recommendations in `category` (case-insensitive). `None` or `"all"` returns everything.
pub fn list_recommendations(category: Option<&str>) -> RecommendationList {
    let filter = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    let recommendations = RECOMMENDATIONS
        .iter()
        .filter(|r| filter.map_or(true, |c| r.category.eq_ignore_ascii_case(c)))
        .copied()
        .collect();

    let count = |priority: &str| RECOMMENDATIONS.iter().filter(|r| r.priority == priority).count();

    RecommendationList {
        recommendations,
        total: RECOMMENDATIONS.len(),
        high_priority: count("High"),
        medium_priority: count("Medium"),
    }
}
