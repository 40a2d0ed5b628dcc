mod generate_cmd_tests;
