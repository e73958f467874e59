use once_cell::sync::Lazy;

use crate::entities::expert::Expert;

// The consultant roster is fixed editorial content, kept in registration
// order so directory ids stay stable.
const ROSTER: &[(u32, &str, &str, u8, u32, f32)] = &[
    (1, "Dr. Sarah Johnson", "Weight Management", 8, 25, 4.9),
    (2, "Dr. Michael Chen", "Sports Nutrition", 12, 30, 4.8),
    (3, "Dr. Emily Davis", "Diabetes Care", 10, 28, 4.9),
    (4, "Dr. James Wilson", "Heart Health", 15, 35, 4.7),
    (5, "Dr. Lisa Rodriguez", "Pediatric Nutrition", 9, 32, 4.8),
    (6, "Dr. David Kumar", "Digestive Health", 11, 29, 4.6),
    (7, "Dr. Anna Thompson", "Eating Disorders", 13, 40, 4.9),
    (8, "Dr. Robert Lee", "Geriatric Nutrition", 16, 38, 4.7),
    (9, "Dr. Maria Garcia", "Pregnancy Nutrition", 7, 33, 4.8),
    (10, "Dr. Kevin Park", "Muscle Building", 6, 27, 4.5),
    (11, "Dr. Rachel Green", "Vegan Nutrition", 8, 26, 4.7),
    (12, "Dr. Mark Brown", "Clinical Nutrition", 14, 36, 4.8),
    (13, "Dr. Jennifer White", "Food Allergies", 9, 31, 4.6),
    (14, "Dr. Anthony Jones", "Metabolic Health", 12, 34, 4.9),
    (15, "Dr. Samantha Miller", "Women's Health", 10, 30, 4.8),
    (16, "Dr. Christopher Taylor", "Men's Health", 11, 32, 4.7),
    (17, "Dr. Amanda Clark", "Anti-Aging", 13, 39, 4.9),
    (18, "Dr. Steven Adams", "Performance Nutrition", 8, 28, 4.6),
    (19, "Dr. Nicole Baker", "Thyroid Health", 9, 29, 4.8),
    (20, "Dr. Daniel Wright", "Kidney Health", 14, 37, 4.7),
    (21, "Dr. Jessica Hill", "Liver Health", 10, 33, 4.8),
    (22, "Dr. Ryan Scott", "Brain Health", 12, 35, 4.9),
    (23, "Dr. Michelle Lewis", "Bone Health", 11, 31, 4.6),
    (24, "Dr. Brandon Hall", "Immune System", 9, 30, 4.7),
    (25, "Dr. Stephanie Young", "Skin Health", 8, 27, 4.8),
    (26, "Dr. Jonathan King", "Eye Health", 13, 34, 4.9),
    (27, "Dr. Melissa Turner", "Mental Health Nutrition", 10, 32, 4.7),
    (28, "Dr. Gregory Moore", "Cancer Nutrition", 15, 42, 4.9),
    (29, "Dr. Kimberly Harris", "Autoimmune Nutrition", 11, 36, 4.8),
    (30, "Dr. Timothy Collins", "Addiction Recovery", 12, 38, 4.6),
    (31, "Dr. Angela Martinez", "Hormonal Balance", 9, 33, 4.8),
    (32, "Dr. Carl Robinson", "Gut Microbiome", 8, 29, 4.7),
    (33, "Dr. Heather Cooper", "Supplement Consulting", 7, 25, 4.5),
    (34, "Dr. Frank Reed", "Meal Planning", 10, 26, 4.6),
    (35, "Dr. Victoria Bell", "Functional Medicine", 13, 41, 4.9),
    (36, "Dr. Albert Murphy", "Integrative Nutrition", 14, 39, 4.8),
    (37, "Dr. Catherine Ward", "Holistic Health", 11, 35, 4.7),
    (38, "Dr. William Foster", "Chronic Disease", 16, 43, 4.9),
    (39, "Dr. Patricia Brooks", "Preventive Care", 12, 34, 4.8),
    (40, "Dr. Joseph Sanders", "Longevity Nutrition", 15, 40, 4.9),
];

static EXPERTS: Lazy<Vec<Expert>> = Lazy::new(|| {
    ROSTER
        .iter()
        .map(
            |&(id, name, specialty, years_experience, session_fee_usd, rating)| Expert {
                id,
                name,
                specialty,
                years_experience,
                session_fee_usd,
                rating,
            },
        )
        .collect()
});

/// The full consultant directory, in registration order
pub fn all_experts() -> &'static [Expert] {
    &EXPERTS
}

/// Find a consultant by directory id
pub fn find_expert(id: u32) -> Option<&'static Expert> {
    EXPERTS.iter().find(|expert| expert.id == id)
}

/// Consultants whose specialty contains the term, case-insensitive.
/// An empty term matches the whole directory.
pub fn search_by_specialty(term: &str) -> Vec<&'static Expert> {
    let term = term.to_lowercase();
    EXPERTS
        .iter()
        .filter(|expert| expert.specialty.to_lowercase().contains(&term))
        .collect()
}

/// The `limit` highest-rated consultants, ties broken by experience
pub fn top_rated(limit: usize) -> Vec<&'static Expert> {
    let mut experts: Vec<&Expert> = EXPERTS.iter().collect();
    experts.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.years_experience.cmp(&a.years_experience))
    });
    experts.truncate(limit);
    experts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_forty_experts() {
        assert_eq!(all_experts().len(), 40);
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let experts = all_experts();
        for (index, expert) in experts.iter().enumerate() {
            assert_eq!(expert.id as usize, index + 1);
        }
    }

    #[test]
    fn test_find_expert_by_id() {
        let expert = find_expert(3).unwrap();
        assert_eq!(expert.name, "Dr. Emily Davis");
        assert_eq!(expert.specialty, "Diabetes Care");

        assert!(find_expert(41).is_none());
    }

    #[test]
    fn test_specialty_search_is_case_insensitive() {
        let matches = search_by_specialty("nutrition");
        assert!(matches.len() > 1);
        assert!(matches.iter().all(|e| e.specialty.to_lowercase().contains("nutrition")));

        assert_eq!(search_by_specialty("NUTRITION").len(), matches.len());
    }

    #[test]
    fn test_unmatched_specialty_returns_empty() {
        assert!(search_by_specialty("astrology").is_empty());
    }

    #[test]
    fn test_top_rated_is_sorted() {
        let top = top_rated(5);
        assert_eq!(top.len(), 5);
        for pair in top.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        assert_eq!(top[0].rating, 4.9);
    }
}
