use chrono::{DateTime, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbClassroom, DbPayment, DbScheduleEntry, DbStudent};

// Mock repositories for testing
mock! {
    pub ClassroomRepo {
        pub async fn create_classroom(
            &self,
            name: &'static str,
            capacity: i32,
        ) -> eyre::Result<DbClassroom>;

        pub async fn get_classroom_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbClassroom>>;

        pub async fn delete_classroom(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ScheduleRepo {
        pub async fn create_schedule_entry(
            &self,
            classroom_id: Uuid,
            day: &'static str,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbScheduleEntry>;

        pub async fn get_schedule_entries_by_classroom_id(
            &self,
            classroom_id: Uuid,
        ) -> eyre::Result<Vec<DbScheduleEntry>>;

        pub async fn delete_schedule_entry(
            &self,
            classroom_id: Uuid,
            entry_id: Uuid,
        ) -> eyre::Result<bool>;

        pub async fn delete_schedule_entries_by_classroom_id(
            &self,
            classroom_id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub StudentRepo {
        pub async fn get_student_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbStudent>>;
    }
}

mock! {
    pub PaymentRepo {
        pub async fn create_payment(
            &self,
            student_id: Uuid,
            title: &'static str,
            amount: f64,
            currency: &'static str,
            payment_type: &'static str,
            start_date: DateTime<Utc>,
            end_date: DateTime<Utc>,
        ) -> eyre::Result<DbPayment>;

        pub async fn get_payment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbPayment>>;

        pub async fn get_payments_by_student_id(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbPayment>>;

        pub async fn update_payment(
            &self,
            id: Uuid,
            title: &'static str,
            amount: f64,
            currency: &'static str,
            payment_type: &'static str,
            start_date: DateTime<Utc>,
            end_date: DateTime<Utc>,
        ) -> eyre::Result<DbPayment>;

        pub async fn delete_payment(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
