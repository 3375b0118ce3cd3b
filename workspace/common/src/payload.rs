use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Registration / edit form for any user, as collected by the admin pages.
///
/// Role-specific inputs are optional here; the builder picks the ones the
/// role needs and drops the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub admission_number: Option<String>,
    #[serde(default)]
    pub classes: Option<Vec<String>>,
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
    #[serde(default)]
    pub students: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<String>>,
}

/// The one field group a role adds on top of the base payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleFields {
    Student(StudentFields),
    Teacher(TeacherFields),
    Parent(ParentFields),
}

/// Body for the user create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub branch_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(flatten)]
    pub role_fields: Option<RoleFields>,
}

/// Map a form onto the payload shape for its role.
///
/// The password is only carried when one was entered, so edits that leave
/// it blank keep the stored password. No validation happens here.
pub fn build_user_payload(form: &UserForm) -> UserPayload {
    let role_fields = match form.role {
        Role::Student => Some(RoleFields::Student(StudentFields {
            class_id: form.class_id.clone(),
            date_of_birth: form.date_of_birth.clone(),
            admission_number: form.admission_number.clone(),
        })),
        Role::Teacher => Some(RoleFields::Teacher(TeacherFields {
            classes: form.classes.clone(),
            subjects: form.subjects.clone(),
        })),
        Role::Parent => Some(RoleFields::Parent(ParentFields {
            students: form.students.clone(),
        })),
        _ => None,
    };

    UserPayload {
        name: form.name.clone(),
        email: form.email.clone(),
        role: form.role.clone(),
        branch_id: form.branch_id.clone(),
        password: form.password.clone().filter(|password| !password.is_empty()),
        role_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn form(role: &str) -> UserForm {
        UserForm {
            name: "Ada Obi".to_string(),
            email: "ada@school.test".to_string(),
            password: None,
            role: Role::from(role),
            branch_id: "b1".to_string(),
            class_id: Some("c1".to_string()),
            date_of_birth: Some("2010-05-04".to_string()),
            admission_number: Some("A123".to_string()),
            classes: Some(vec!["c1".to_string(), "c2".to_string()]),
            subjects: Some(vec!["math".to_string()]),
            students: Some(vec!["s1".to_string()]),
        }
    }

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_student_payload() {
        let value = serde_json::to_value(build_user_payload(&form("Student"))).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada Obi",
                "email": "ada@school.test",
                "role": "Student",
                "branchId": "b1",
                "classId": "c1",
                "dateOfBirth": "2010-05-04",
                "admissionNumber": "A123"
            })
        );
        for absent in ["classes", "subjects", "students", "password"] {
            assert!(value.get(absent).is_none(), "{} should be absent", absent);
        }
    }

    #[test]
    fn test_teacher_and_parent_payloads() {
        let teacher = serde_json::to_value(build_user_payload(&form("Teacher"))).unwrap();
        assert_eq!(
            keys(&teacher),
            vec!["branchId", "classes", "email", "name", "role", "subjects"]
        );
        assert_eq!(teacher["classes"], json!(["c1", "c2"]));

        let parent = serde_json::to_value(build_user_payload(&form("Parent"))).unwrap();
        assert_eq!(keys(&parent), vec!["branchId", "email", "name", "role", "students"]);
    }

    #[test]
    fn test_other_roles_add_nothing() {
        for role in ["Branch Admin", "Super Admin", "Bursar", ""] {
            let value = serde_json::to_value(build_user_payload(&form(role))).unwrap();
            assert_eq!(keys(&value), vec!["branchId", "email", "name", "role"], "role {:?}", role);
        }
    }

    #[test]
    fn test_password_only_when_provided() {
        let mut with_password = form("Teacher");
        with_password.password = Some("s3cret".to_string());
        let value = serde_json::to_value(build_user_payload(&with_password)).unwrap();
        assert_eq!(value["password"], "s3cret");

        let mut blank = form("Teacher");
        blank.password = Some(String::new());
        let value = serde_json::to_value(build_user_payload(&blank)).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_builder_is_idempotent() {
        let input = form("Student");
        assert_eq!(build_user_payload(&input), build_user_payload(&input));
    }

    #[test]
    fn test_form_from_json() {
        let input: UserForm = serde_json::from_str(
            r#"{"name":"T","email":"t@x","role":"Teacher","branchId":"b9","subjects":["eng"]}"#,
        )
        .unwrap();
        let value = serde_json::to_value(build_user_payload(&input)).unwrap();
        assert_eq!(keys(&value), vec!["branchId", "email", "name", "role", "subjects"]);
    }
}
