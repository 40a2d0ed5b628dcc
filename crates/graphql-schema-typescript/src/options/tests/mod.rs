mod generate_options_tests;
