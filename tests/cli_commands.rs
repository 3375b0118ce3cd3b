use schoolhub::cli::commands::{render_reports, user_payload};
use serde_json::{Value, json};
use tempfile::tempdir;

fn report_records() -> Value {
    json!([
        {
            "schoolName": "Bright Future Academy",
            "schoolAddress": "12 Market Road",
            "studentName": "Ada Obi",
            "admissionNumber": "A123",
            "className": "JSS 1",
            "classTeacher": "Mrs Bello",
            "gender": "Female",
            "term": "First Term",
            "academicYear": "2024",
            "reportDate": "2024-12-13T00:00:00.000Z",
            "subjects": [
                {"subjectName": "Mathematics", "firstCA": 10, "secondCA": 9, "thirdCA": 8, "exam": 55, "total": 82, "grade": "A", "remarks": "Excellent"},
                {"subjectName": "English", "firstCA": 8, "secondCA": 7, "thirdCA": 9, "exam": 40, "total": 64, "grade": "B", "remarks": "Good"}
            ],
            "subjectsPassed": 2,
            "subjectsFailed": 0,
            "positionInClass": "1st",
            "attendance": {"present": 58, "absent": 2},
            "promotionStatus": "Promoted",
            "promotionComment": "Excellent work",
            "nextTermBegins": "January 8"
        },
        {
            "studentName": "Bola Ade",
            "subjects": []
        }
    ])
}

#[tokio::test]
async fn test_render_reports_writes_one_page_per_record() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("out").join("cards.html");
    std::fs::write(&input, report_records().to_string()).unwrap();

    let pages = render_reports(&input, &output, "Test Schools").await.unwrap();
    assert_eq!(pages, 2);

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches(r#"<section class="report-page">"#).count(), 2);
    assert!(html.contains("<td>Mathematics</td>"));
    assert!(html.contains("<td>12/13/2024</td>"));
    assert!(html.contains("Days Present: 58"));
    // Second record has no report date and no teacher.
    assert!(html.contains("<td>Invalid Date</td><th>Class Teacher</th><td></td>"));
}

#[tokio::test]
async fn test_render_reports_rejects_malformed_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("cards.html");
    std::fs::write(&input, r#"{"not": "an array"}"#).unwrap();

    let err = render_reports(&input, &output, "Test Schools").await.unwrap_err();
    assert!(err.to_string().contains("is not a JSON array"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_render_reports_tolerates_null_fields() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("cards.html");
    let records = json!([{
        "studentName": "Chidi Eze",
        "classTeacher": null,
        "reportDate": "2024-12-13T09:30:00",
        "subjects": [
            {"subjectName": "Physics", "firstCA": 6, "secondCA": null, "thirdCA": null, "exam": 31, "total": 37, "grade": "E", "remarks": null}
        ],
        "subjectsPassed": null,
        "positionInClass": 5,
        "attendance": null,
        "promotionComment": null
    }]);
    std::fs::write(&input, records.to_string()).unwrap();

    let pages = render_reports(&input, &output, "Test Schools").await.unwrap();
    assert_eq!(pages, 1);

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<td>Physics</td><td>6</td><td></td><td></td><td>31</td>"));
    assert!(html.contains("<td>12/13/2024</td>"));
    assert!(html.contains("Position in Class: 5"));
    assert!(html.contains("Days Present: <"));
}

#[tokio::test]
async fn test_render_reports_missing_input() {
    let dir = tempdir().unwrap();
    let result = render_reports(&dir.path().join("nope.json"), &dir.path().join("x.html"), "Test").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_user_payload_for_student() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.json");
    let form = json!({
        "name": "Ada Obi",
        "email": "ada@school.test",
        "password": "",
        "role": "Student",
        "branchId": "b1",
        "classId": "c1",
        "dateOfBirth": "2010-05-04",
        "admissionNumber": "A123",
        "classes": ["ignored"],
        "students": ["ignored"]
    });
    std::fs::write(&input, form.to_string()).unwrap();

    let payload: Value = serde_json::from_str(&user_payload(&input).await.unwrap()).unwrap();
    assert_eq!(
        payload,
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
}

#[tokio::test]
async fn test_user_payload_unknown_role_has_base_fields_only() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.json");
    std::fs::write(
        &input,
        r#"{"name":"Sam","email":"sam@school.test","role":"Accountant","branchId":"b2","password":"s3cret","subjects":["x"]}"#,
    )
    .unwrap();

    let payload: Value = serde_json::from_str(&user_payload(&input).await.unwrap()).unwrap();
    assert_eq!(
        payload,
        json!({"name":"Sam","email":"sam@school.test","role":"Accountant","branchId":"b2","password":"s3cret"})
    );
}
