mod fragment_library_tests;
