//! 课程聚合器
//! 按视图模式选取主列表并过滤；单分类视图额外给出两个不参与过滤的次级列表
//! 聚合器从不失败，也从不修改载荷

use serde::{Deserialize, Serialize};

use super::course_filter::FilterTerm;
use crate::config::GlobalConfig;
use crate::model::{CatalogPayload, Course, ViewMode};

/// 聚合视图的页面标题
pub const ALL_COURSES_HEADING: &str = "All Courses";

/// 带标题的课程分区
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    pub heading: String,
    pub courses: Vec<Course>,
}

/// 单分类视图的次级列表（不受过滤词影响）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryLists {
    /// "Top courses in <differentCategory.name>"
    pub different_category: CourseSection,
    /// 畅销课程前 N 条
    pub frequently_bought: CourseSection,
}

/// 一次推导的完整结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedCourses {
    /// 过滤后的主列表
    pub courses: Vec<Course>,
    /// 过滤前主列表长度
    pub total: usize,
    pub secondary: Option<SecondaryLists>,
}

/// 课程聚合器
#[derive(Debug, Clone)]
pub struct CourseAggregator {
    frequently_bought_limit: usize,
}

impl Default for CourseAggregator {
    fn default() -> Self {
        Self {
            frequently_bought_limit: 4,
        }
    }
}

impl CourseAggregator {
    pub fn new(frequently_bought_limit: usize) -> Self {
        Self {
            frequently_bought_limit,
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.frequently_bought_limit)
    }

    /// 主列表来源：聚合视图取畅销课程，单分类视图取所选分类课程
    pub fn base_list(payload: &CatalogPayload, mode: ViewMode) -> &[Course] {
        match mode {
            ViewMode::Aggregate => payload.most_selling_courses(),
            ViewMode::Normal => payload.selected_courses(),
        }
    }

    /// 推导主列表；载荷缺失时返回空列表
    pub fn derive_course_list(
        payload: Option<&CatalogPayload>,
        mode: ViewMode,
        filter: &FilterTerm,
    ) -> Vec<Course> {
        match payload {
            Some(payload) => filter.apply(Self::base_list(payload, mode)),
            None => Vec::new(),
        }
    }

    /// 次级列表，仅单分类视图提供
    pub fn secondary_lists(&self, payload: &CatalogPayload, mode: ViewMode) -> Option<SecondaryLists> {
        if mode == ViewMode::Aggregate {
            return None;
        }

        let different_name = payload
            .different_category()
            .and_then(|b| b.name.as_deref())
            .unwrap_or_default();
        let most_selling = payload.most_selling_courses();
        let limit = self.frequently_bought_limit.min(most_selling.len());

        Some(SecondaryLists {
            different_category: CourseSection {
                heading: format!("Top courses in {}", different_name).trim_end().to_string(),
                courses: payload.different_courses().to_vec(),
            },
            frequently_bought: CourseSection {
                heading: "Frequently Bought".to_string(),
                courses: most_selling[..limit].to_vec(),
            },
        })
    }

    /// 页面标题：聚合视图固定为 "All Courses"，否则为所选分类名
    pub fn heading(payload: Option<&CatalogPayload>, mode: ViewMode) -> String {
        match mode {
            ViewMode::Aggregate => ALL_COURSES_HEADING.to_string(),
            ViewMode::Normal => payload
                .and_then(|p| p.selected_category())
                .and_then(|b| b.name.clone())
                .unwrap_or_default(),
        }
    }

    /// 推导主列表、计数与次级列表
    pub fn derive(
        &self,
        payload: Option<&CatalogPayload>,
        mode: ViewMode,
        filter: &FilterTerm,
    ) -> DerivedCourses {
        let Some(payload) = payload else {
            return DerivedCourses::default();
        };

        DerivedCourses {
            courses: Self::derive_course_list(Some(payload), mode, filter),
            total: Self::base_list(payload, mode).len(),
            secondary: self.secondary_lists(payload, mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogData, CategoryBucket};

    fn courses(names: &[&str]) -> Vec<Course> {
        names.iter().map(|n| Course::named(*n)).collect()
    }

    fn names(courses: &[Course]) -> Vec<&str> {
        courses.iter().filter_map(|c| c.display_name()).collect()
    }

    fn sample_payload() -> CatalogPayload {
        CatalogPayload::ok(CatalogData {
            selected_category: Some(CategoryBucket::new(
                "Web Development",
                courses(&["Intro to Python", "Advanced React"]),
            )),
            different_category: Some(CategoryBucket::new("Python", courses(&["Django Basics", "React Native"]))),
            most_selling_courses: courses(&["A", "B", "C", "D", "E", "React Hooks"]),
        })
    }

    #[test]
    fn test_aggregate_is_exactly_most_selling() {
        let payload = sample_payload();
        let list = CourseAggregator::derive_course_list(Some(&payload), ViewMode::Aggregate, &FilterTerm::default());
        assert_eq!(list, payload.most_selling_courses());
    }

    #[test]
    fn test_aggregate_ignores_selected_category() {
        // 测试场景：slug 为 All，所选分类的内容不影响结果
        let mut payload = sample_payload();
        payload.data.as_mut().unwrap().most_selling_courses = courses(&["A", "B", "C"]);
        let list = CourseAggregator::derive_course_list(Some(&payload), ViewMode::Aggregate, &"".into());
        assert_eq!(names(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_normal_is_exactly_selected_courses() {
        let payload = sample_payload();
        let list = CourseAggregator::derive_course_list(Some(&payload), ViewMode::Normal, &FilterTerm::default());
        assert_eq!(list, payload.selected_courses());
    }

    #[test]
    fn test_normal_filter_react() {
        let payload = sample_payload();
        let list = CourseAggregator::derive_course_list(Some(&payload), ViewMode::Normal, &"react".into());
        assert_eq!(names(&list), vec!["Advanced React"]);
    }

    #[test]
    fn test_output_is_filtered_subsequence() {
        let payload = sample_payload();
        for term in ["", "a", "REACT", "o", "zzz", " "] {
            let filter = FilterTerm::new(term);
            for mode in [ViewMode::Normal, ViewMode::Aggregate] {
                let base = CourseAggregator::base_list(&payload, mode);
                let list = CourseAggregator::derive_course_list(Some(&payload), mode, &filter);

                // 每个结果都包含过滤词
                assert!(list.iter().all(|c| c
                    .display_name()
                    .unwrap()
                    .to_lowercase()
                    .contains(&term.to_lowercase())));

                // 结果是原列表的保序子序列
                let mut cursor = base.iter();
                assert!(list.iter().all(|c| cursor.any(|b| b == c)));

                // 幂等
                assert_eq!(list, CourseAggregator::derive_course_list(Some(&payload), mode, &filter));
            }
        }
    }

    #[test]
    fn test_absent_payload_yields_empty() {
        assert!(CourseAggregator::derive_course_list(None, ViewMode::Normal, &"x".into()).is_empty());
        assert_eq!(
            CourseAggregator::default().derive(None, ViewMode::Aggregate, &FilterTerm::default()),
            DerivedCourses::default()
        );
    }

    #[test]
    fn test_missing_buckets_do_not_fail() {
        let payload = CatalogPayload::ok(CatalogData::default());
        let derived = CourseAggregator::default().derive(Some(&payload), ViewMode::Normal, &"rust".into());

        assert!(derived.courses.is_empty());
        assert_eq!(derived.total, 0);
        let secondary = derived.secondary.unwrap();
        assert!(secondary.different_category.courses.is_empty());
        assert_eq!(secondary.different_category.heading, "Top courses in");
        assert!(secondary.frequently_bought.courses.is_empty());
    }

    #[test]
    fn test_secondary_lists_unfiltered_and_capped() {
        let payload = sample_payload();
        let derived = CourseAggregator::default().derive(Some(&payload), ViewMode::Normal, &"react".into());

        assert_eq!(derived.total, 2);
        assert_eq!(names(&derived.courses), vec!["Advanced React"]);

        let secondary = derived.secondary.unwrap();
        assert_eq!(secondary.different_category.heading, "Top courses in Python");
        assert_eq!(names(&secondary.different_category.courses), vec!["Django Basics", "React Native"]);
        assert_eq!(secondary.frequently_bought.heading, "Frequently Bought");
        assert_eq!(names(&secondary.frequently_bought.courses), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_aggregate_has_no_secondary_lists() {
        let payload = sample_payload();
        let derived = CourseAggregator::default().derive(Some(&payload), ViewMode::Aggregate, &FilterTerm::default());
        assert!(derived.secondary.is_none());
        assert_eq!(derived.total, 6);
    }

    #[test]
    fn test_custom_frequently_bought_limit() {
        let payload = sample_payload();
        let secondary = CourseAggregator::new(10).secondary_lists(&payload, ViewMode::Normal).unwrap();
        assert_eq!(secondary.frequently_bought.courses.len(), 6);
    }

    #[test]
    fn test_heading() {
        let payload = sample_payload();
        assert_eq!(CourseAggregator::heading(Some(&payload), ViewMode::Aggregate), ALL_COURSES_HEADING);
        assert_eq!(CourseAggregator::heading(Some(&payload), ViewMode::Normal), "Web Development");
        assert_eq!(CourseAggregator::heading(None, ViewMode::Normal), "");
    }

    #[test]
    fn test_payload_not_mutated() {
        let payload = sample_payload();
        let before = payload.clone();
        let _ = CourseAggregator::default().derive(Some(&payload), ViewMode::Normal, &"a".into());
        assert_eq!(payload, before);
    }
}
