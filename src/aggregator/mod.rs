//! 聚合模块：主列表选取、过滤、次级列表
pub mod course_filter;
pub mod course_aggregator;

// 导出核心接口
pub use self::course_filter::FilterTerm;
pub use self::course_aggregator::{
    ALL_COURSES_HEADING, CourseAggregator, CourseSection, DerivedCourses, SecondaryLists,
};
