mod content_test;
mod middleware_test;
mod store_hours_test;
