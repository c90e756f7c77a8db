use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use storefront_core::{
    models::{
        holiday::{Holiday, HolidayUpdate, NewHoliday},
        hours::WeeklyHours,
    },
    store::ScheduleStore,
};
use uuid::Uuid;

// Mock schedule store for handler tests
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl ScheduleStore for ScheduleStore {
        async fn list_weekly_hours(&self) -> eyre::Result<Vec<WeeklyHours>>;

        async fn upsert_weekly_hours(&self, hours: WeeklyHours) -> eyre::Result<WeeklyHours>;

        async fn holidays_between(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<Holiday>>;

        async fn list_holidays(&self) -> eyre::Result<Vec<Holiday>>;

        async fn upcoming_holidays(&self, from: NaiveDate) -> eyre::Result<Vec<Holiday>>;

        async fn create_holiday(&self, holiday: NewHoliday) -> eyre::Result<Holiday>;

        async fn update_holiday(
            &self,
            id: Uuid,
            update: HolidayUpdate,
        ) -> eyre::Result<Option<Holiday>>;

        async fn delete_holiday(&self, id: Uuid) -> eyre::Result<bool>;
    }
}
