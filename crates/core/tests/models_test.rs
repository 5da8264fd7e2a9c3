use chrono::{NaiveTime, Utc};
use classboard_core::models::{
    classroom::{Classroom, CreateClassroomRequest},
    employee::CreateEmployeeRequest,
    payment::{CreatePaymentRequest, Payment, PaymentPlan},
    schedule::{CreateScheduleEntryRequest, ScheduleEntry, Weekday},
    student::CreateStudentRequest,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[rstest]
#[case(PaymentPlan::Month1, "\"MONTH_1\"")]
#[case(PaymentPlan::Month2, "\"MONTH_2\"")]
#[case(PaymentPlan::Month3, "\"MONTH_3\"")]
#[case(PaymentPlan::Month6, "\"MONTH_6\"")]
#[case(PaymentPlan::Year1, "\"YEAR_1\"")]
fn test_payment_plan_wire_format(#[case] plan: PaymentPlan, #[case] json: &str) {
    assert_eq!(to_string(&plan).expect("Failed to serialize plan"), json);

    let deserialized: PaymentPlan = from_str(json).expect("Failed to deserialize plan");
    assert_eq!(deserialized, plan);
}

#[rstest]
#[case(Weekday::Monday, "\"MONDAY\"")]
#[case(Weekday::Wednesday, "\"WEDNESDAY\"")]
#[case(Weekday::Sunday, "\"SUNDAY\"")]
fn test_weekday_wire_format(#[case] day: Weekday, #[case] json: &str) {
    assert_eq!(to_string(&day).expect("Failed to serialize weekday"), json);

    let deserialized: Weekday = from_str(json).expect("Failed to deserialize weekday");
    assert_eq!(deserialized, day);
}

#[test]
fn test_weekday_order_matches_the_week() {
    assert!(Weekday::Monday < Weekday::Tuesday);
    assert!(Weekday::Saturday < Weekday::Sunday);
}

#[test]
fn test_payment_serialization() {
    let start_date = Utc::now();
    let end_date = start_date + chrono::Duration::days(31);

    let payment = Payment {
        id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        title: "Tuition March".to_string(),
        amount: 250.0,
        currency: "EUR".to_string(),
        payment_type: PaymentPlan::Month1,
        start_date,
        end_date,
        created_at: Utc::now(),
    };

    let json = to_string(&payment).expect("Failed to serialize payment");
    let deserialized: Payment = from_str(&json).expect("Failed to deserialize payment");

    assert_eq!(deserialized.id, payment.id);
    assert_eq!(deserialized.student_id, payment.student_id);
    assert_eq!(deserialized.title, payment.title);
    assert_eq!(deserialized.amount, payment.amount);
    assert_eq!(deserialized.currency, payment.currency);
    assert_eq!(deserialized.payment_type, payment.payment_type);
    assert_eq!(deserialized.start_date, payment.start_date);
    assert_eq!(deserialized.end_date, payment.end_date);
}

#[test]
fn test_schedule_entry_serialization() {
    let entry = ScheduleEntry {
        id: Uuid::new_v4(),
        classroom_id: Uuid::new_v4(),
        day: Weekday::Thursday,
        start_time: time(9, 0),
        end_time: time(10, 30),
        created_at: Utc::now(),
    };

    let json = to_string(&entry).expect("Failed to serialize schedule entry");
    let deserialized: ScheduleEntry = from_str(&json).expect("Failed to deserialize schedule entry");

    assert_eq!(deserialized.id, entry.id);
    assert_eq!(deserialized.classroom_id, entry.classroom_id);
    assert_eq!(deserialized.day, entry.day);
    assert_eq!(deserialized.start_time, entry.start_time);
    assert_eq!(deserialized.end_time, entry.end_time);
}

#[rstest]
#[case("Tuition March", 250.0, "EUR", "MONTH_1", Some("2024-03-01"))]
#[case("Semester fee", 1200.0, "USD", "MONTH_6", None)]
#[case("Annual plan", 2000.0, "EUR", "YEAR_1", Some("2024-09-01T08:00:00Z"))]
fn test_create_payment_request(
    #[case] title: &str,
    #[case] amount: f64,
    #[case] currency: &str,
    #[case] payment_type: &str,
    #[case] start_date: Option<&str>,
) {
    let request = CreatePaymentRequest {
        student_id: Uuid::new_v4(),
        title: title.to_string(),
        amount,
        currency: currency.to_string(),
        payment_type: payment_type.to_string(),
        start_date: start_date.map(|s| s.to_string()),
    };

    let json = to_string(&request).expect("Failed to serialize create payment request");
    let deserialized: CreatePaymentRequest =
        from_str(&json).expect("Failed to deserialize create payment request");

    assert_eq!(deserialized.student_id, request.student_id);
    assert_eq!(deserialized.title, request.title);
    assert_eq!(deserialized.amount, request.amount);
    assert_eq!(deserialized.currency, request.currency);
    assert_eq!(deserialized.payment_type, request.payment_type);
    assert_eq!(deserialized.start_date, request.start_date);
}

#[test]
fn test_create_schedule_entry_request_parses_wire_json() {
    let json = r#"{"day":"MONDAY","start_time":"09:00:00","end_time":"10:00:00"}"#;

    let request: CreateScheduleEntryRequest =
        from_str(json).expect("Failed to deserialize schedule entry request");

    assert_eq!(request.day, Weekday::Monday);
    assert_eq!(request.start_time, time(9, 0));
    assert_eq!(request.end_time, time(10, 0));
}

#[test]
fn test_classroom_serialization() {
    let classroom = Classroom {
        id: Uuid::new_v4(),
        name: "Room B12".to_string(),
        capacity: 24,
        created_at: Utc::now(),
    };

    let json = to_string(&classroom).expect("Failed to serialize classroom");
    let deserialized: Classroom = from_str(&json).expect("Failed to deserialize classroom");

    assert_eq!(deserialized.id, classroom.id);
    assert_eq!(deserialized.name, classroom.name);
    assert_eq!(deserialized.capacity, classroom.capacity);
}

#[test]
fn test_create_classroom_request() {
    let request = CreateClassroomRequest {
        name: "Lab 3".to_string(),
        capacity: 16,
    };

    let json = to_string(&request).expect("Failed to serialize create classroom request");
    let deserialized: CreateClassroomRequest =
        from_str(&json).expect("Failed to deserialize create classroom request");

    assert_eq!(deserialized.name, request.name);
    assert_eq!(deserialized.capacity, request.capacity);
}

#[test]
fn test_create_student_request_optional_fields() {
    let request = CreateStudentRequest {
        first_name: "Nora".to_string(),
        last_name: "Haddad".to_string(),
        email: None,
        program_id: Some(Uuid::new_v4()),
        classroom_id: None,
    };

    let json = to_string(&request).expect("Failed to serialize create student request");
    let deserialized: CreateStudentRequest =
        from_str(&json).expect("Failed to deserialize create student request");

    assert_eq!(deserialized.first_name, request.first_name);
    assert_eq!(deserialized.last_name, request.last_name);
    assert_eq!(deserialized.email, request.email);
    assert_eq!(deserialized.program_id, request.program_id);
    assert_eq!(deserialized.classroom_id, request.classroom_id);
}

#[test]
fn test_create_employee_request() {
    let request = CreateEmployeeRequest {
        first_name: "Samir".to_string(),
        last_name: "Benali".to_string(),
        email: "samir@example.org".to_string(),
        role: "TEACHER".to_string(),
    };

    let json = to_string(&request).expect("Failed to serialize create employee request");
    let deserialized: CreateEmployeeRequest =
        from_str(&json).expect("Failed to deserialize create employee request");

    assert_eq!(deserialized.first_name, request.first_name);
    assert_eq!(deserialized.last_name, request.last_name);
    assert_eq!(deserialized.email, request.email);
    assert_eq!(deserialized.role, request.role);
}
