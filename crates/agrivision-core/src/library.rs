/// Static catalogue of public plant-disease datasets.

/// One catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

pub const DATASETS: [Dataset; 4] = [
    Dataset {
        name: "PlantVillage Dataset",
        description: "54,000+ images across 14 crop species and 26 diseases. Great for training classification models.",
        link: "https://www.kaggle.com/datasets/emmarex/plantdisease",
        tags: &["Classification", "Leaf Images", "Benchmark"],
    },
    Dataset {
        name: "PlantDoc",
        description: "Real-world images of plant diseases collected in the wild with varied backgrounds and lighting.",
        link: "https://github.com/pratikkayal/PlantDoc-Dataset",
        tags: &["Detection", "In-the-wild", "Diverse"],
    },
    Dataset {
        name: "AI Challenger Agriculture",
        description: "Large-scale agricultural dataset for disease and pest identification tasks.",
        link: "https://ai-competitions.com/competitions/300",
        tags: &["Large-scale", "Pests", "Chinese"],
    },
    Dataset {
        name: "Corn Leaf Disease",
        description: "Curated set focused on corn diseases like blight, rust, and leaf spot with labeled images.",
        link: "https://www.kaggle.com/datasets/smaranjitghose/corn-or-maize-leaf-disease-dataset",
        tags: &["Corn", "Leaf", "Labeled"],
    },
];

impl Dataset {
    /// Case-insensitive match against name, description and tags.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// Catalogue entries matching `query`, in catalogue order. An empty query matches all.
pub fn search(query: &str) -> Vec<&'static Dataset> {
    DATASETS.iter().filter(|d| d.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_all() {
        assert_eq!(search("").len(), DATASETS.len());
        assert_eq!(search("   ").len(), DATASETS.len());
    }

    #[test]
    fn test_search_by_tag_and_name() {
        let hits = search("corn");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Corn Leaf Disease");

        let hits = search("DETECTION");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "PlantDoc");
    }

    #[test]
    fn test_search_no_hits() {
        assert!(search("hyperspectral").is_empty());
    }

    #[test]
    fn test_links_are_https() {
        assert!(DATASETS.iter().all(|d| d.link.starts_with("https://")));
    }
}
