mod definition_scan_tests;
pub(crate) mod document_utils;
