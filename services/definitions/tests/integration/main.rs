mod dashboard_test;
mod definition_test;
