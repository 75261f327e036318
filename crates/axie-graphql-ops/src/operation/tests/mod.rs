mod operation_catalog_tests;
