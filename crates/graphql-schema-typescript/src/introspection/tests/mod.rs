mod schema_source_tests;
