mod follow_test;
mod helpers;
mod pg_storage_test;
mod rating_test;
mod router_test;
