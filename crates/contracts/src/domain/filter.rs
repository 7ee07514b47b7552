use super::report_entry::ReportEntry;
use crate::enums::{Branch, ChecklistStatus, ReportType};

/// Names one criteria field for targeted updates from a filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StartDate,
    EndDate,
    ReportType,
    Branch,
    Checklist,
}

/// Currently selected filter constraints.
///
/// An empty string means "no constraint" for that field, matching the empty
/// "All" option of the UI selects. `Default` is all-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub start_date: String,
    pub end_date: String,
    pub report_type: String,
    pub branch: String,
    pub checklist: String,
}

impl FilterCriteria {
    /// Replace one field, preserving the others
    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::StartDate => self.start_date = value,
            FilterField::EndDate => self.end_date = value,
            FilterField::ReportType => self.report_type = value,
            FilterField::Branch => self.branch = value,
            FilterField::Checklist => self.checklist = value,
        }
    }

    /// Number of active constraints.
    ///
    /// The date range counts as one, and only when both bounds are set; a
    /// single bound does not constrain anything.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.start_date.is_empty() && !self.end_date.is_empty() {
            count += 1;
        }
        if !self.report_type.is_empty() {
            count += 1;
        }
        if !self.branch.is_empty() {
            count += 1;
        }
        if !self.checklist.is_empty() {
            count += 1;
        }
        count
    }
}

/// Apply every non-empty constraint as a conjunctive predicate, narrowing the
/// candidate set step by step.
///
/// The date range only applies when BOTH bounds are present (inclusive on both
/// ends); comparison is lexicographic, valid for fixed-width `YYYY-MM-DD`
/// strings. Enum criteria are parsed through `from_code`, so a value outside
/// the domain matches nothing. Output is always an order-preserving
/// subsequence of `entries`.
pub fn filter_entries(entries: &[ReportEntry], criteria: &FilterCriteria) -> Vec<ReportEntry> {
    let mut filtered: Vec<ReportEntry> = entries.to_vec();

    if !criteria.start_date.is_empty() && !criteria.end_date.is_empty() {
        filtered.retain(|entry| {
            entry.date.as_str() >= criteria.start_date.as_str()
                && entry.date.as_str() <= criteria.end_date.as_str()
        });
    }
    if !criteria.report_type.is_empty() {
        let selected = ReportType::from_code(&criteria.report_type);
        filtered.retain(|entry| Some(entry.report_type) == selected);
    }
    if !criteria.branch.is_empty() {
        let selected = Branch::from_code(&criteria.branch);
        filtered.retain(|entry| Some(entry.branch) == selected);
    }
    if !criteria.checklist.is_empty() {
        let selected = ChecklistStatus::from_code(&criteria.checklist);
        filtered.retain(|entry| Some(entry.checklist) == selected);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        id: i64,
        date: &str,
        report_type: ReportType,
        branch: Branch,
        checklist: ChecklistStatus,
    ) -> ReportEntry {
        ReportEntry {
            id,
            date: date.to_string(),
            report_type,
            branch,
            checklist,
        }
    }

    fn dataset() -> Vec<ReportEntry> {
        vec![
            entry(
                1,
                "2024-01-05",
                ReportType::Sales,
                Branch::NewYork,
                ChecklistStatus::Completed,
            ),
            entry(
                2,
                "2024-02-10",
                ReportType::Inventory,
                Branch::Chicago,
                ChecklistStatus::Pending,
            ),
            entry(
                3,
                "2024-02-28",
                ReportType::Finance,
                Branch::LosAngeles,
                ChecklistStatus::Completed,
            ),
            entry(
                4,
                "2024-03-15",
                ReportType::Sales,
                Branch::Chicago,
                ChecklistStatus::Pending,
            ),
            entry(
                5,
                "2024-04-01",
                ReportType::Sales,
                Branch::NewYork,
                ChecklistStatus::Pending,
            ),
        ]
    }

    fn ids(entries: &[ReportEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let data = dataset();
        let filtered = filter_entries(&data, &FilterCriteria::default());
        assert_eq!(filtered, data);
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let data = dataset();
        let criteria = FilterCriteria {
            report_type: "Sales".to_string(),
            ..Default::default()
        };
        let filtered = filter_entries(&data, &criteria);
        assert_eq!(ids(&filtered), vec![1, 4, 5]);

        // every surviving entry exists in the source, in source order
        let mut source_iter = data.iter();
        for kept in &filtered {
            assert!(source_iter.any(|e| e == kept));
        }
    }

    #[test]
    fn test_report_type_scenario() {
        let data = vec![
            entry(
                1,
                "2024-01-05",
                ReportType::Sales,
                Branch::NewYork,
                ChecklistStatus::Completed,
            ),
            entry(
                2,
                "2024-02-10",
                ReportType::Inventory,
                Branch::Chicago,
                ChecklistStatus::Pending,
            ),
        ];
        let criteria = FilterCriteria {
            report_type: "Sales".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&data, &criteria)), vec![1]);
    }

    #[test]
    fn test_date_range_scenario() {
        let data = vec![
            entry(
                1,
                "2024-01-05",
                ReportType::Sales,
                Branch::NewYork,
                ChecklistStatus::Completed,
            ),
            entry(
                2,
                "2024-02-10",
                ReportType::Inventory,
                Branch::Chicago,
                ChecklistStatus::Pending,
            ),
        ];
        let criteria = FilterCriteria {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&data, &criteria)), vec![1]);
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_ends() {
        let data = dataset();
        let criteria = FilterCriteria {
            start_date: "2024-01-05".to_string(),
            end_date: "2024-02-10".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&data, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_single_date_bound_does_not_narrow() {
        let data = dataset();

        let only_start = FilterCriteria {
            start_date: "2024-03-01".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_entries(&data, &only_start), data);

        let only_end = FilterCriteria {
            end_date: "2024-01-31".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_entries(&data, &only_end), data);
    }

    #[test]
    fn test_filters_compose_independently_of_order() {
        let data = dataset();
        let combined = FilterCriteria {
            report_type: "Sales".to_string(),
            checklist: "Pending".to_string(),
            ..Default::default()
        };

        let by_type_only = FilterCriteria {
            report_type: "Sales".to_string(),
            ..Default::default()
        };
        let by_checklist_only = FilterCriteria {
            checklist: "Pending".to_string(),
            ..Default::default()
        };

        let direct = filter_entries(&data, &combined);
        let type_then_checklist =
            filter_entries(&filter_entries(&data, &by_type_only), &by_checklist_only);
        let checklist_then_type =
            filter_entries(&filter_entries(&data, &by_checklist_only), &by_type_only);

        assert_eq!(direct, type_then_checklist);
        assert_eq!(direct, checklist_then_type);
        assert_eq!(ids(&direct), vec![4, 5]);
    }

    #[test]
    fn test_identical_criteria_is_idempotent() {
        let data = dataset();
        let criteria = FilterCriteria {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-03-31".to_string(),
            branch: "Chicago".to_string(),
            ..Default::default()
        };

        let once = filter_entries(&data, &criteria);
        let twice = filter_entries(&once, &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![2, 4]);
    }

    #[test]
    fn test_all_criteria_together() {
        let data = dataset();
        let criteria = FilterCriteria {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            report_type: "Sales".to_string(),
            branch: "New York".to_string(),
            checklist: "Pending".to_string(),
        };
        assert_eq!(ids(&filter_entries(&data, &criteria)), vec![5]);
    }

    #[test]
    fn test_value_outside_the_domain_matches_nothing() {
        let data = dataset();
        let criteria = FilterCriteria {
            report_type: "Marketing".to_string(),
            ..Default::default()
        };
        assert!(filter_entries(&data, &criteria).is_empty());

        let criteria = FilterCriteria {
            branch: "Boston".to_string(),
            ..Default::default()
        };
        assert!(filter_entries(&data, &criteria).is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_empty_view() {
        let criteria = FilterCriteria {
            branch: "Chicago".to_string(),
            ..Default::default()
        };
        assert!(filter_entries(&[], &criteria).is_empty());
        assert!(filter_entries(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_set_replaces_only_the_named_field() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Branch, "Chicago".to_string());
        criteria.set(FilterField::StartDate, "2024-01-01".to_string());

        assert_eq!(criteria.branch, "Chicago");
        assert_eq!(criteria.start_date, "2024-01-01");
        assert_eq!(criteria.end_date, "");
        assert_eq!(criteria.report_type, "");
        assert_eq!(criteria.checklist, "");

        // clearing a field restores "no constraint"
        criteria.set(FilterField::Branch, String::new());
        assert_eq!(criteria.branch, "");
    }

    #[test]
    fn test_active_count_treats_range_as_one() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.active_count(), 0);

        criteria.set(FilterField::StartDate, "2024-01-01".to_string());
        assert_eq!(criteria.active_count(), 0);

        criteria.set(FilterField::EndDate, "2024-01-31".to_string());
        assert_eq!(criteria.active_count(), 1);

        criteria.set(FilterField::ReportType, "Finance".to_string());
        criteria.set(FilterField::Checklist, "Completed".to_string());
        assert_eq!(criteria.active_count(), 3);
    }
}
