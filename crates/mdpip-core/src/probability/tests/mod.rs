mod range_tests;
