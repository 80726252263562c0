//! Doctor search filter.
//!
//! Case-insensitive substring matching over doctor name and specialty.

use super::types::Doctor;

/// Check whether a doctor matches an already lower-cased query.
fn matches(doctor: &Doctor, query_lower: &str) -> bool {
    doctor.name.to_lowercase().contains(query_lower)
        || doctor.specialty.to_lowercase().contains(query_lower)
}

/// Filter doctors by name or specialty.
///
/// Returns the matching doctors in their original order. An empty query
/// matches every doctor. There is no ranking.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], query: &str) -> Vec<&'a Doctor> {
    let query_lower = query.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| matches(doctor, &query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    fn ids(doctors: &[&Doctor]) -> Vec<u32> {
        doctors.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let data = MockData::seed();
        let result = filter_doctors(&data.doctors, "");
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_by_specialty() {
        let data = MockData::seed();
        let result = filter_doctors(&data.doctors, "cardio");
        assert_eq!(ids(&result), vec![3]);
        assert_eq!(result[0].name, "Dr. Garcia");
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let data = MockData::seed();
        assert_eq!(ids(&filter_doctors(&data.doctors, "JONES")), vec![2]);
        assert_eq!(ids(&filter_doctors(&data.doctors, "sMiTh")), vec![1]);
    }

    #[test]
    fn test_shared_substring_keeps_order() {
        let data = MockData::seed();
        // "dr." is in every name
        assert_eq!(ids(&filter_doctors(&data.doctors, "dr.")), vec![1, 2, 3]);
        // "ic" is in "General Medicine" and "Pediatrics"
        assert_eq!(ids(&filter_doctors(&data.doctors, "ic")), vec![1, 2]);
    }

    #[test]
    fn test_no_match() {
        let data = MockData::seed();
        assert!(filter_doctors(&data.doctors, "dermatology").is_empty());
    }

    #[test]
    fn test_results_are_subset_and_match() {
        let data = MockData::seed();
        let queries = [
            "", "a", "DR", "med", "pedia", "garcia", "x", " ", "08:00", "general medicine",
        ];

        for query in queries {
            let result = filter_doctors(&data.doctors, query);
            let q = query.to_lowercase();
            for doctor in &result {
                assert!(data.doctors.contains(*doctor));
                assert!(
                    doctor.name.to_lowercase().contains(&q)
                        || doctor.specialty.to_lowercase().contains(&q),
                    "{} should not match '{}'",
                    doctor.name,
                    query
                );
            }
            // Every doctor left out really does not match
            let excluded = data.doctors.iter().filter(|d| !result.contains(d));
            for doctor in excluded {
                assert!(!matches(doctor, &q));
            }
        }
    }

    #[test]
    fn test_availability_is_not_searched() {
        let data = MockData::seed();
        assert!(filter_doctors(&data.doctors, "Mon-Fri").is_empty());
    }
}
