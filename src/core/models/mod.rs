//! Data models for the GPA engine

pub mod course;
pub mod grade_scale;
pub mod level;
pub mod year;

pub use course::{Course, CourseRecord, Schedule, Term};
pub use grade_scale::{GradeScale, ScaleStep};
pub use level::Level;
pub use year::{AcademicYear, YearRecord};
