// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use persist_derive::Persistent;

#[derive(Persistent)]
#[persist(name = "enrollments")]
pub struct Enrollment {
    #[id]
    pub student_id: i64,

    #[id]
    pub course_id: i64,

    pub grade: Option<String>,
}

fn main() {
    let entity = Enrollment::persistent_entity();
    let names: Vec<_> = entity.composite_identity().iter().map(|p| p.name()).collect();

    assert_eq!(names, vec!["student_id", "course_id"]);
    assert_eq!(entity.identity().map(|p| p.name()), Some("student_id"));
    assert_eq!(entity.name(), "enrollments");
    assert_eq!(Enrollment::IDENTITY, &["student_id", "course_id"]);
    assert_eq!(Enrollment::VERSION, None);
}
