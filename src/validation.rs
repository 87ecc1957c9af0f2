//! Request checks that run before a session is opened.
//!
//! Fields arrive as raw JSON values. A field is blank when it is absent,
//! `null`, `false`, `0`, `""` or an empty array/object. Checks run in a fixed
//! order and the first failure wins.

use crate::error::ApiError;
use crate::model::application::NewApplication;
use chrono::NaiveDate;
use serde_json::Value;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(Value::Bool(true)) => false,
    }
}

/// Numbers are accepted as their decimal text.
fn as_name(field: &str, value: Option<&Value>) -> Result<String, ApiError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ApiError::validation(format!("{field} must be a string"))),
    }
}

/// Integers and integer strings such as `"5"`.
fn as_employee_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_date(value: Option<&Value>) -> Option<NaiveDate> {
    value
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
}

/// Returns `(first_name, last_name)`. `last_name` is checked first.
pub fn employee_names(
    first_name: Option<&Value>,
    last_name: Option<&Value>,
) -> Result<(String, String), ApiError> {
    if is_blank(last_name) {
        return Err(ApiError::validation("last_name cannot be blank"));
    }
    if is_blank(first_name) {
        return Err(ApiError::validation("first_name cannot be blank"));
    }

    Ok((
        as_name("first_name", first_name)?,
        as_name("last_name", last_name)?,
    ))
}

/// Everything except the employee existence check, which needs the store.
pub fn leave_application(
    leave_start_date: Option<&Value>,
    leave_end_date: Option<&Value>,
    employee_id: Option<&Value>,
) -> Result<NewApplication, ApiError> {
    if is_blank(leave_start_date) || is_blank(leave_end_date) {
        return Err(ApiError::validation(
            "leave_start_date is missing;leave_end_date is missing",
        ));
    }

    if is_blank(employee_id) {
        return Err(ApiError::validation("employee_id cannot be blank"));
    }

    let (Some(start), Some(end)) = (as_date(leave_start_date), as_date(leave_end_date)) else {
        return Err(ApiError::validation(
            "leave_start_date is invalid;leave_end_date is invalid",
        ));
    };

    if end < start {
        return Err(ApiError::validation(
            "leave_end_date cannot be before leave_start_date",
        ));
    }

    let employee_id = as_employee_id(employee_id)
        .ok_or_else(|| ApiError::validation("employee_id must be an integer"))?;

    Ok(NewApplication {
        leave_start_date: start,
        leave_end_date: end,
        employee_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn apply(start: Value, end: Value, id: Value) -> Result<NewApplication, ApiError> {
        leave_application(Some(&start), Some(&end), Some(&id))
    }

    #[test]
    fn last_name_is_checked_before_first_name() {
        let err = employee_names(None, None).unwrap_err();
        assert_eq!(message(err), "last_name cannot be blank");

        let err = employee_names(Some(&json!("")), Some(&json!("Doe"))).unwrap_err();
        assert_eq!(message(err), "first_name cannot be blank");
    }

    #[test]
    fn blank_last_name_wins_over_mistyped_first_name() {
        let err = employee_names(Some(&json!(["Jane"])), Some(&Value::Null)).unwrap_err();
        assert_eq!(message(err), "last_name cannot be blank");
    }

    #[test]
    fn whitespace_names_are_not_blank() {
        let names = employee_names(Some(&json!(" ")), Some(&json!("Doe"))).unwrap();
        assert_eq!(names, (" ".to_string(), "Doe".to_string()));
    }

    #[test]
    fn numeric_names_become_text_and_other_types_are_rejected() {
        let names = employee_names(Some(&json!(7)), Some(&json!("Doe"))).unwrap();
        assert_eq!(names.0, "7");

        let err = employee_names(Some(&json!("Jane")), Some(&json!({ "x": 1 }))).unwrap_err();
        assert_eq!(message(err), "last_name must be a string");
    }

    #[test]
    fn missing_either_date_reports_both() {
        let err = leave_application(Some(&json!("2024-01-01")), None, Some(&json!(1))).unwrap_err();
        assert_eq!(message(err), "leave_start_date is missing;leave_end_date is missing");

        let err = apply(json!(""), json!("2024-01-01"), json!(1)).unwrap_err();
        assert_eq!(message(err), "leave_start_date is missing;leave_end_date is missing");
    }

    #[test]
    fn falsy_employee_ids_are_blank() {
        for id in [Value::Null, json!(0), json!(""), json!(false)] {
            let err = apply(json!("2024-01-01"), json!("2024-01-02"), id).unwrap_err();
            assert_eq!(message(err), "employee_id cannot be blank");
        }
        let err = leave_application(Some(&json!("2024-01-01")), Some(&json!("2024-01-02")), None)
            .unwrap_err();
        assert_eq!(message(err), "employee_id cannot be blank");
    }

    #[test]
    fn blank_dates_win_over_blank_employee_id() {
        let err = leave_application(None, Some(&json!("2024-01-02")), Some(&json!(""))).unwrap_err();
        assert_eq!(message(err), "leave_start_date is missing;leave_end_date is missing");
    }

    #[test]
    fn numeric_string_employee_id_is_accepted() {
        let app = apply(json!("2024-01-01"), json!("2024-01-02"), json!(" 5 ")).unwrap();
        assert_eq!(app.employee_id, 5);
    }

    #[test]
    fn non_numeric_employee_id_is_rejected_after_date_checks() {
        let err = apply(json!("2024-01-01"), json!("2024-01-02"), json!("abc")).unwrap_err();
        assert_eq!(message(err), "employee_id must be an integer");

        let err = apply(json!("2024-01-03"), json!("2024-01-02"), json!("abc")).unwrap_err();
        assert_eq!(message(err), "leave_end_date cannot be before leave_start_date");
    }

    #[test]
    fn malformed_date_reports_both_fields() {
        let err = apply(json!("2024-01-01"), json!("01/02/2024"), json!(1)).unwrap_err();
        assert_eq!(message(err), "leave_start_date is invalid;leave_end_date is invalid");

        let err = apply(json!("2024-02-30"), json!("2024-03-01"), json!(1)).unwrap_err();
        assert_eq!(message(err), "leave_start_date is invalid;leave_end_date is invalid");

        let err = apply(json!(20240101), json!("2024-03-01"), json!(1)).unwrap_err();
        assert_eq!(message(err), "leave_start_date is invalid;leave_end_date is invalid");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = apply(json!("2024-01-10"), json!("2024-01-09"), json!(1)).unwrap_err();
        assert_eq!(message(err), "leave_end_date cannot be before leave_start_date");
    }

    #[test]
    fn single_day_leave_is_valid() {
        let app = apply(json!("2024-01-10"), json!("2024-01-10"), json!(7)).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(
            app,
            NewApplication {
                leave_start_date: day,
                leave_end_date: day,
                employee_id: 7,
            }
        );
    }
}
