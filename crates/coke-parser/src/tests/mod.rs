mod grammar_symbol_tests;
mod graphql_parser_ast_position_tests;
mod graphql_parser_error_tests;
mod graphql_parser_type_annotation_tests;
mod utils;
