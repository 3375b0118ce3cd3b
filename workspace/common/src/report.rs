//! Report-card records and their fixed page layout.
//!
//! Records arrive fully computed (totals, grades, positions); layout only
//! arranges text. Both the browser view and the CLI's printable document
//! render from [`ReportPage`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::wire;

pub const PLACEHOLDER: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

pub const SUBJECT_TABLE_HEADER: [&str; 8] = [
    "Subject", "1st CA", "2nd CA", "3rd CA", "Exam", "Total", "Grade", "Remarks",
];

pub const SIGNATURES: [&str; 2] = ["Class Teacher's Signature", "Principal's Signature"];

/// One subject row. Scores the API leaves out or sends as `null` print empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    #[serde(default, deserialize_with = "wire::text")]
    pub subject_name: String,
    #[serde(default, rename = "firstCA", deserialize_with = "wire::optional_number")]
    pub first_ca: Option<f64>,
    #[serde(default, rename = "secondCA", deserialize_with = "wire::optional_number")]
    pub second_ca: Option<f64>,
    #[serde(default, rename = "thirdCA", deserialize_with = "wire::optional_number")]
    pub third_ca: Option<f64>,
    #[serde(default, deserialize_with = "wire::optional_number")]
    pub exam: Option<f64>,
    #[serde(default, deserialize_with = "wire::optional_number")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "wire::text")]
    pub grade: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceCount {
    #[serde(default, deserialize_with = "wire::optional_count")]
    pub present: Option<u32>,
    #[serde(default, deserialize_with = "wire::optional_count")]
    pub absent: Option<u32>,
}

/// One student's term report, as assembled by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub school_address: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub admission_number: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub class_teacher: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub academic_year: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub report_date: Option<String>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub subjects: Vec<SubjectScore>,
    #[serde(default, deserialize_with = "wire::optional_count")]
    pub subjects_passed: Option<u32>,
    #[serde(default, deserialize_with = "wire::optional_count")]
    pub subjects_failed: Option<u32>,
    /// Sent as text ("3rd") or a bare number.
    #[serde(default, deserialize_with = "wire::text")]
    pub position_in_class: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub attendance: AttendanceCount,
    #[serde(default, deserialize_with = "wire::text")]
    pub promotion_status: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub promotion_comment: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub next_term_begins: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

/// Titled box of free-text lines (summary, promotion).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBox {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Everything printed on one page, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPage {
    pub school_name: String,
    pub school_address: String,
    pub title: String,
    /// Student details, laid out two per row.
    pub details: Vec<[DetailItem; 2]>,
    pub table_header: [&'static str; 8],
    pub table_rows: Vec<[String; 8]>,
    pub attendance: SummaryBox,
    pub performance: SummaryBox,
    pub promotion: SummaryBox,
    pub signatures: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub pages: Vec<ReportPage>,
}

fn or_placeholder(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Integral scores print without a fractional part; absent ones print empty.
fn score(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => String::new(),
    }
}

fn count(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Render a report date as `M/D/YYYY`. Missing or unparseable dates are not
/// defaulted and come out as "Invalid Date".
pub fn format_report_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return INVALID_DATE.to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "unparseable report date");
            INVALID_DATE.to_string()
        }
    }
}

impl ReportPage {
    pub fn layout(record: &ReportRecord) -> Self {
        let details = vec![
            [
                DetailItem { label: "Student Name", value: or_placeholder(&record.student_name) },
                DetailItem { label: "Admission No", value: or_placeholder(&record.admission_number) },
            ],
            [
                DetailItem { label: "Class", value: or_placeholder(&record.class_name) },
                DetailItem { label: "Gender", value: or_placeholder(&record.gender) },
            ],
            [
                DetailItem {
                    label: "Report Date",
                    value: format_report_date(record.report_date.as_deref()),
                },
                DetailItem {
                    label: "Class Teacher",
                    value: record.class_teacher.clone().unwrap_or_default(),
                },
            ],
        ];

        let table_rows = record
            .subjects
            .iter()
            .map(|s| {
                [
                    s.subject_name.clone(),
                    score(s.first_ca),
                    score(s.second_ca),
                    score(s.third_ca),
                    score(s.exam),
                    score(s.total),
                    s.grade.clone(),
                    s.remarks.clone(),
                ]
            })
            .collect();

        ReportPage {
            school_name: or_placeholder(&record.school_name),
            school_address: or_placeholder(&record.school_address),
            title: format!(
                "ACADEMIC REPORT - {} {}",
                or_placeholder(&record.term),
                or_placeholder(&record.academic_year)
            ),
            details,
            table_header: SUBJECT_TABLE_HEADER,
            table_rows,
            attendance: SummaryBox {
                title: "Attendance Summary",
                lines: vec![
                    format!("Days Present: {}", count(record.attendance.present)),
                    format!("Days Absent: {}", count(record.attendance.absent)),
                ],
            },
            performance: SummaryBox {
                title: "Performance Summary",
                lines: vec![
                    format!("Position in Class: {}", record.position_in_class),
                    format!("Subjects Passed: {}", count(record.subjects_passed)),
                    format!("Subjects Failed: {}", count(record.subjects_failed)),
                ],
            },
            promotion: SummaryBox {
                title: "Promotion Status",
                lines: vec![
                    format!("Status: {} ({})", record.promotion_status, record.promotion_comment),
                    format!("Next Term Begins: {}", record.next_term_begins),
                ],
            },
            signatures: SIGNATURES,
        }
    }
}

impl ReportDocument {
    /// One page per record, in input order.
    pub fn layout(records: &[ReportRecord]) -> Self {
        let pages: Vec<ReportPage> = records.iter().map(ReportPage::layout).collect();
        tracing::debug!(pages = pages.len(), "laid out report document");
        ReportDocument { pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, total: f64, grade: &str) -> SubjectScore {
        SubjectScore {
            subject_name: name.to_string(),
            first_ca: Some(10.0),
            second_ca: Some(8.5),
            third_ca: Some(9.0),
            exam: Some(total - 27.5),
            total: Some(total),
            grade: grade.to_string(),
            remarks: "Good".to_string(),
        }
    }

    fn record() -> ReportRecord {
        ReportRecord {
            school_name: Some("Unity College".to_string()),
            school_address: Some("1 School Rd".to_string()),
            student_name: Some("Ada Obi".to_string()),
            admission_number: Some("A123".to_string()),
            class_name: Some("JSS 2".to_string()),
            class_teacher: Some("Mrs Bello".to_string()),
            gender: Some("Female".to_string()),
            term: Some("First".to_string()),
            academic_year: Some("2024/2025".to_string()),
            report_date: Some("2024-12-13T00:00:00.000Z".to_string()),
            subjects: vec![
                subject("Mathematics", 81.5, "A"),
                subject("English", 64.0, "B"),
                subject("Biology", 45.0, "D"),
            ],
            subjects_passed: Some(3),
            subjects_failed: Some(0),
            position_in_class: "4th".to_string(),
            attendance: AttendanceCount { present: Some(58), absent: Some(2) },
            promotion_status: "Promoted".to_string(),
            promotion_comment: "Excellent".to_string(),
            next_term_begins: "January 6, 2025".to_string(),
        }
    }

    #[test]
    fn test_three_subjects_one_page() {
        let doc = ReportDocument::layout(&[record()]);
        assert_eq!(doc.pages.len(), 1);

        let page = &doc.pages[0];
        assert_eq!(page.table_header[0], "Subject");
        assert_eq!(page.table_rows.len(), 3);
        let names: Vec<&str> = page.table_rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["Mathematics", "English", "Biology"]);
        assert_eq!(page.table_rows[0][5], "81.5");
        assert_eq!(page.table_rows[1][5], "64");
        assert_eq!(page.table_rows[0][2], "8.5");
    }

    #[test]
    fn test_pages_follow_input_order() {
        let mut second = record();
        second.student_name = Some("Bola Ade".to_string());
        let doc = ReportDocument::layout(&[record(), second]);
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].details[0][0].value, "Ada Obi");
        assert_eq!(doc.pages[1].details[0][0].value, "Bola Ade");
    }

    #[test]
    fn test_header_and_summaries() {
        let page = ReportPage::layout(&record());
        assert_eq!(page.title, "ACADEMIC REPORT - First 2024/2025");
        assert_eq!(page.details[2][0].value, "12/13/2024");
        assert_eq!(page.attendance.lines, vec!["Days Present: 58", "Days Absent: 2"]);
        assert_eq!(page.performance.lines[0], "Position in Class: 4th");
        assert_eq!(page.promotion.lines[0], "Status: Promoted (Excellent)");
        assert_eq!(page.signatures, SIGNATURES);
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let page = ReportPage::layout(&ReportRecord::default());
        assert_eq!(page.school_name, PLACEHOLDER);
        assert_eq!(page.title, "ACADEMIC REPORT - N/A N/A");
        for item in page.details[..2].iter().flatten() {
            assert_eq!(item.value, PLACEHOLDER, "{}", item.label);
        }
        assert!(page.table_rows.is_empty());
    }

    #[test]
    fn test_teacher_and_date_are_not_defaulted() {
        let page = ReportPage::layout(&ReportRecord::default());
        assert_eq!(page.details[2][0].value, INVALID_DATE);
        assert_eq!(page.details[2][1].value, "");

        assert_eq!(format_report_date(Some("next week")), INVALID_DATE);
        assert_eq!(format_report_date(Some("2025-01-06")), "1/6/2025");
    }

    #[test]
    fn test_date_time_without_offset() {
        assert_eq!(format_report_date(Some("2024-12-13T10:00:00")), "12/13/2024");
        assert_eq!(format_report_date(Some("2024-12-13T10:00:00.250")), "12/13/2024");
        assert_eq!(format_report_date(Some("2024-12-13T25:00:00")), INVALID_DATE);
    }

    #[test]
    fn test_record_from_api_json() {
        let json = r#"[{
            "schoolName": "Unity College",
            "studentName": "Ada Obi",
            "subjects": [{"subjectName": "Mathematics", "firstCA": 10, "secondCA": 9,
                          "thirdCA": 8, "exam": 55, "total": 82, "grade": "A", "remarks": "Excellent"}],
            "attendance": {"present": 60, "absent": 0},
            "positionInClass": "1st"
        }]"#;
        let records: Vec<ReportRecord> = serde_json::from_str(json).unwrap();
        let page = ReportPage::layout(&records[0]);
        assert_eq!(
            page.table_rows[0],
            ["Mathematics", "10", "9", "8", "55", "82", "A", "Excellent"].map(String::from)
        );
        assert_eq!(page.details[0][1].value, PLACEHOLDER);
    }

    #[test]
    fn test_null_and_numeric_fields_from_api() {
        let json = r#"[{
            "studentName": null,
            "subjects": [{"subjectName": "Biology", "firstCA": 7, "secondCA": "6.5",
                          "thirdCA": null, "exam": null, "total": 13.5, "grade": "F", "remarks": null}],
            "subjectsPassed": null,
            "subjectsFailed": 1,
            "positionInClass": 3,
            "attendance": {"present": null, "absent": 4},
            "promotionStatus": null,
            "promotionComment": null,
            "nextTermBegins": null
        }]"#;
        let records: Vec<ReportRecord> = serde_json::from_str(json).unwrap();
        let record = &records[0];
        assert_eq!(record.student_name, None);
        assert_eq!(record.subjects[0].third_ca, None);
        assert_eq!(record.subjects[0].remarks, "");

        let page = ReportPage::layout(record);
        assert_eq!(
            page.table_rows[0],
            ["Biology", "7", "6.5", "", "", "13.5", "F", ""].map(String::from)
        );
        assert_eq!(page.details[0][0].value, PLACEHOLDER);
        assert_eq!(page.attendance.lines, vec!["Days Present: ", "Days Absent: 4"]);
        assert_eq!(page.performance.lines[0], "Position in Class: 3");
        assert_eq!(page.performance.lines[1], "Subjects Passed: ");
    }

    #[test]
    fn test_null_collections_decode_empty() {
        let json = r#"{"subjects": null, "attendance": null, "positionInClass": {"rank": 2}}"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        assert!(record.subjects.is_empty());
        assert_eq!(record.attendance, AttendanceCount::default());
        assert_eq!(record.position_in_class, "");
    }
}
