/// Health conditions offered by the registration form's searchable picker
const CONDITIONS: &[&str] = &[
    "Diabetes", "Hypertension", "Heart Disease", "Obesity", "Anemia", "Thyroid Disorders",
    "High Cholesterol", "Kidney Disease", "Liver Disease", "Arthritis", "Osteoporosis",
    "Cancer", "Celiac Disease", "Crohn's Disease", "IBS", "PCOS", "Depression", "Anxiety",
    "Eating Disorders", "Food Allergies", "Lactose Intolerance", "Gluten Sensitivity",
    "Acid Reflux", "Gastritis", "Ulcerative Colitis", "Fatty Liver", "Gallstones",
    "Migraine", "Insomnia", "Chronic Fatigue", "Fibromyalgia", "Asthma", "COPD",
    "Sleep Apnea", "Metabolic Syndrome", "Insulin Resistance", "Prediabetes",
    "Autoimmune Diseases", "Multiple Sclerosis", "Lupus", "Rheumatoid Arthritis",
    "Psoriasis", "Eczema", "Acne", "Hair Loss", "Nail Problems", "Skin Conditions",
    "Eye Problems", "Hearing Loss", "Dental Issues", "Gum Disease", "Bad Breath",
    "Constipation", "Diarrhea", "Bloating", "Gas", "Nausea", "Vomiting",
    "Heartburn", "Hiccups", "Burping", "Stomach Pain", "Back Pain", "Neck Pain",
    "Headaches", "Muscle Pain", "Joint Pain", "Bone Pain", "Nerve Pain",
    "Circulation Problems", "Varicose Veins", "Blood Clots", "Aneurysm",
    "Stroke", "Heart Attack", "Arrhythmia", "Palpitations", "Chest Pain",
    "Shortness of Breath", "Cough", "Sore Throat", "Runny Nose", "Sinus Problems",
];

/// The full condition directory, in form order
pub fn all_conditions() -> &'static [&'static str] {
    CONDITIONS
}

/// Conditions whose name contains the term, case-insensitive.
/// An empty term returns the full directory, matching the form's behavior
/// before anything is typed into the search box.
pub fn search_conditions(term: &str) -> Vec<&'static str> {
    let term = term.to_lowercase();
    CONDITIONS
        .iter()
        .filter(|condition| condition.to_lowercase().contains(&term))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_full_directory() {
        assert_eq!(search_conditions("").len(), all_conditions().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let matches = search_conditions("diabetes");
        assert!(matches.contains(&"Diabetes"));
        assert!(matches.contains(&"Prediabetes"));
        assert_eq!(search_conditions("DIABETES"), matches);
    }

    #[test]
    fn test_substring_match() {
        let matches = search_conditions("pain");
        assert!(matches.contains(&"Back Pain"));
        assert!(matches.contains(&"Nerve Pain"));
        assert!(!matches.contains(&"Diabetes"));
    }

    #[test]
    fn test_unmatched_term_returns_empty() {
        assert!(search_conditions("zzzz").is_empty());
    }
}
