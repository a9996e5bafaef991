use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::exercises::entities::Exercise;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程名称
    pub title: String,
    // 课程简称
    #[serde(default)]
    pub short_name: Option<String>,
}

/// 一次拉取得到的课程快照（课程 + 全部练习及其参与记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSnapshot {
    pub course: Course,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

// 当前用户在课程中的角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseRole {
    Student,    // 学生
    Tutor,      // 助教
    Instructor, // 讲师
    Admin,      // 管理员
}

impl CourseRole {
    pub const STUDENT: &'static str = "student";
    pub const TUTOR: &'static str = "tutor";
    pub const INSTRUCTOR: &'static str = "instructor";
    pub const ADMIN: &'static str = "admin";

    pub fn tutor_roles() -> &'static [&'static CourseRole] {
        &[&Self::Tutor, &Self::Instructor, &Self::Admin]
    }
    pub fn instructor_roles() -> &'static [&'static CourseRole] {
        &[&Self::Instructor, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static CourseRole] {
        &[&Self::Student, &Self::Tutor, &Self::Instructor, &Self::Admin]
    }

    pub fn is_at_least_tutor(&self) -> bool {
        Self::tutor_roles().iter().any(|role| *role == self)
    }

    pub fn is_at_least_instructor(&self) -> bool {
        Self::instructor_roles().iter().any(|role| *role == self)
    }
}

impl<'de> Deserialize<'de> for CourseRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid course role: '{s}'. Supported roles: student, tutor, instructor, admin"
            ))
        })
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
            CourseRole::Tutor => write!(f, "{}", CourseRole::TUTOR),
            CourseRole::Instructor => write!(f, "{}", CourseRole::INSTRUCTOR),
            CourseRole::Admin => write!(f, "{}", CourseRole::ADMIN),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseRole::STUDENT => Ok(CourseRole::Student),
            CourseRole::TUTOR => Ok(CourseRole::Tutor),
            CourseRole::INSTRUCTOR => Ok(CourseRole::Instructor),
            CourseRole::ADMIN => Ok(CourseRole::Admin),
            _ => Err(format!("Invalid course role: {s}")),
        }
    }
}
