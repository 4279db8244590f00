use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use scoring::ScoringEngine;
use scoring::models::{
    Assignment, AssignmentDueDate, AssignmentQuestion, QuestionKind, Section, User,
    UserQuestionData, UserQuestionSubmission,
};
use scoring::traits::time_provider::FixedTimeProvider;

pub fn date(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 1, day, hour, 0, 0).unwrap()
}

pub fn engine(now: DateTime<Utc>) -> ScoringEngine {
    ScoringEngine::new(Arc::new(FixedTimeProvider::new(now)))
}

/// Two sections, three students and four assignments in two groups.
///
/// | Assignment | Group  | Due                 | Questions (points) |
/// |------------|--------|---------------------|--------------------|
/// | 1 Unit 1a  | Unit 1 | Period1 day 5 noon  | 11 (5), 12 (5)     |
/// | 2 Unit 1b  | Unit 1 | Period1 day 3 noon  | 21 (10)            |
/// | 3 Unit 2a  | Unit 2 | Period1 day 10 noon | 31 (4)             |
/// | 4 Unit 1c  | Unit 1 | Period2 day 4 noon  | 41 (2)             |
///
/// Ann Smith (1) answers everything, Bob Adams (2) answers Unit 1b a day
/// late and Carl Adams (3) submits nothing.
pub struct Classroom {
    pub sections: Vec<Section>,
    pub users: Vec<User>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<UserQuestionSubmission>,
}

impl Classroom {
    pub fn new() -> Self {
        Self {
            sections: vec![section(1, "Period1", "Period 1"), section(2, "Period2", "")],
            users: vec![
                user(1, "Ann", "Smith"),
                user(2, "Bob", "Adams"),
                user(3, "Carl", "Adams"),
            ],
            assignments: vec![
                assignment(1, "Unit 1a", "Unit 1", (1, 5), &[(11, 5.0), (12, 5.0)]),
                assignment(2, "Unit 1b", "Unit 1", (1, 3), &[(21, 10.0)]),
                assignment(3, "Unit 2a", "Unit 2", (1, 10), &[(31, 4.0)]),
                assignment(4, "Unit 1c", "Unit 1", (2, 4), &[(41, 2.0)]),
            ],
            submissions: vec![
                submission(1, 11, 1, date(4, 12), 1.0),
                submission(1, 12, 1, date(4, 12), 0.5),
                submission(1, 21, 2, date(2, 12), 1.0),
                submission(1, 31, 3, date(11, 12), 1.0),
                submission(1, 41, 4, date(1, 12), 1.0),
                submission(2, 21, 2, date(4, 12), 1.0),
            ],
        }
    }

    pub fn section(&self, id: i64) -> &Section {
        self.sections.iter().find(|s| s.id == id).unwrap()
    }

    pub fn user(&self, id: i64) -> &User {
        self.users.iter().find(|u| u.id == id).unwrap()
    }

    pub fn assignment_refs(&self) -> Vec<&Assignment> {
        self.assignments.iter().collect()
    }

    pub fn user_refs(&self) -> Vec<&User> {
        self.users.iter().collect()
    }

    pub fn submission_refs(&self) -> Vec<&UserQuestionSubmission> {
        self.submissions.iter().collect()
    }
}

fn section(id: i64, name: &str, display_name: &str) -> Section {
    Section {
        id,
        classroom_id: 1,
        name: name.into(),
        display_name: display_name.into(),
        member_ids: None,
    }
}

fn user(id: i64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        user_name: first_name.to_lowercase(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        public_name: None,
    }
}

fn assignment(
    id: i64,
    name: &str,
    group: &str,
    (section_id, due_day): (i64, u32),
    questions: &[(i64, f64)],
) -> Assignment {
    Assignment {
        id,
        classroom_id: 1,
        name: name.into(),
        group: Some(group.into()),
        due_dates: vec![AssignmentDueDate {
            section_id,
            due_date: date(due_day, 12),
        }],
        combined_submissions: false,
        only_show_combined_score: false,
        questions: questions
            .iter()
            .enumerate()
            .map(|(order, &(question_id, points))| AssignmentQuestion {
                id: question_id,
                assignment_id: id,
                name: format!("Question {question_id}"),
                order: order as i32,
                points,
                question: QuestionKind::Method,
            })
            .collect(),
    }
}

pub fn submission(
    user_id: i64,
    assignment_question_id: i64,
    assignment_id: i64,
    date_submitted: DateTime<Utc>,
    score: f64,
) -> UserQuestionSubmission {
    UserQuestionSubmission {
        id: 0,
        date_submitted,
        score,
        user_question_data: UserQuestionData {
            user_id,
            assignment_question_id,
            assignment_id,
        },
    }
}
