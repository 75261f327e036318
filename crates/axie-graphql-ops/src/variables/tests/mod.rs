mod variable_declaration_parser_error_tests;
